//! Whole-state document store.
//!
//! # Responsibility
//! - Load, save and reset the application state as one JSON document
//!   under a fixed key.
//!
//! # Invariants
//! - `save` replaces the document atomically via upsert.
//! - `load` returns `None` on first launch and a `Document` error for a
//!   corrupt payload; it never fabricates a default state.

use crate::model::state::AppState;
use crate::store::{StoreError, StoreResult};
use chrono::Utc;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

const STATE_KEY: &str = "lifebm_state";

/// Persistence contract for the application state document.
pub trait StateStore {
    fn load(&self) -> StoreResult<Option<AppState>>;
    fn save(&self, state: &AppState) -> StoreResult<()>;
    fn reset(&self) -> StoreResult<()>;
}

/// SQLite-backed document store.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self) -> StoreResult<Option<AppState>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM app_state WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(json) => {
                let state = serde_json::from_str(&json).map_err(StoreError::Document)?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        let document = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO app_state (key, document, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at;",
            params![STATE_KEY, document, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn reset(&self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM app_state WHERE key = ?1;", [STATE_KEY])?;
        info!("event=state_reset module=store status=ok");
        Ok(())
    }
}
