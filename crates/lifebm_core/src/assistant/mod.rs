//! Assistant integration boundary.
//!
//! # Responsibility
//! - Define the remote-LLM gateway contract (`gateway`).
//! - Translate gateway tool calls into typed commands and apply them to
//!   state with an exhaustive match (`command`).
//!
//! # Invariants
//! - Core never performs network I/O; real transports live behind
//!   `AssistantGateway` implementations outside this crate.
//! - Adding an assistant capability means adding an `AssistantCommand`
//!   variant, which the compiler then forces through every match.

pub mod command;
pub mod gateway;
