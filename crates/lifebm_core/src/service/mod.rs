//! Use-case services over the application state.
//!
//! # Responsibility
//! - Provide the CRUD entry points every caller (UI shell, assistant
//!   dispatch, reminder worker) goes through.
//!
//! # Invariants
//! - Services operate on `&mut AppState` passed by the owner; they never
//!   keep state of their own.
//! - Instants are supplied by the caller so every operation stays
//!   deterministic under test.

pub mod chat_service;
pub mod document_service;
pub mod history_service;
pub mod journal_service;
pub mod mission_service;
pub mod todo_service;
