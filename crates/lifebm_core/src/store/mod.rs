//! Persistent state storage.
//!
//! # Responsibility
//! - Open and migrate the local SQLite database (`db`).
//! - Persist the whole application state as one JSON document
//!   (`state_store`).
//!
//! # Invariants
//! - The evaluator and services never touch storage; only the owning
//!   caller loads and saves state through `StateStore`.
//! - A corrupt persisted document is a typed error, never silently
//!   replaced by defaults.

pub mod db;
pub mod state_store;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure in the persistence layer.
#[derive(Debug)]
pub enum StoreError {
    Db(db::DbError),
    /// The state document could not be serialized or deserialized.
    Document(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Document(err) => write!(f, "invalid state document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Document(err) => Some(err),
        }
    }
}

impl From<db::DbError> for StoreError {
    fn from(value: db::DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(db::DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Document(value)
    }
}
