//! Reminder scheduling.
//!
//! # Responsibility
//! - Decide which to-do items are due for a reminder (`evaluator`).
//! - Orchestrate one poll tick against the live state (`worker`).
//!
//! # Invariants
//! - The evaluator is pure; all side effects live in the worker.
//! - Evaluator output is merged into the live list by identifier, never by
//!   wholesale replacement.

pub mod evaluator;
pub mod worker;

/// Fixed poll period between reminder passes, owned by the caller's timer.
pub const POLL_PERIOD_SECS: u64 = 10;
