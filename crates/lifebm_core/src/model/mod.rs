//! Domain model for LifeBM records.
//!
//! # Responsibility
//! - Define the canonical data structures shared by services and storage.
//! - Keep one serde-serializable shape per record so the whole application
//!   state can persist as a single document.
//!
//! # Invariants
//! - Every record is identified by a stable UUID, never reused.
//! - Instants are UTC; serialized form is RFC 3339.

pub mod chat;
pub mod document;
pub mod journal;
pub mod mission;
pub mod notification;
pub mod state;
pub mod todo;
