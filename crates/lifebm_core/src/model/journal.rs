//! Diary stream domain model.
//!
//! Entries are split into two channels: the Fact stream (objective log of
//! what happened) and the Life stream (reflective or emotional writing).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a diary entry.
pub type EntryId = Uuid;

/// Diary channel an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Objective log of events.
    Fact,
    /// Reflective or emotional writing.
    Life,
}

/// One dated diary entry in either stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub stream: StreamKind,
    pub content: String,
    pub last_updated: DateTime<Utc>,
}

impl DiaryEntry {
    /// Creates an entry stamped with the provided instant.
    pub fn new(
        date: NaiveDate,
        stream: StreamKind,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            stream,
            content: content.into(),
            last_updated: now,
        }
    }
}
