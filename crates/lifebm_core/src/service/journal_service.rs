//! Diary stream use-cases.

use crate::model::journal::{DiaryEntry, EntryId, StreamKind};
use crate::model::state::AppState;
use crate::service::history_service;
use chrono::{DateTime, NaiveDate, Utc};

/// Adds a diary entry, newest first. Returns the created entry's id.
pub fn add_entry(
    state: &mut AppState,
    date: NaiveDate,
    stream: StreamKind,
    content: impl Into<String>,
    now: DateTime<Utc>,
) -> EntryId {
    let entry = DiaryEntry::new(date, stream, content, now);
    let id = entry.id;
    history_service::record_log(
        state,
        format!("Diary entry added: {:?} - {}", stream, date),
        now,
    );
    state.diary_entries.insert(0, entry);
    id
}

/// Returns entries for one calendar day, both streams, newest first.
///
/// Used to assemble the day-analysis prompt for the assistant.
pub fn entries_for_date(state: &AppState, date: NaiveDate) -> Vec<&DiaryEntry> {
    state
        .diary_entries
        .iter()
        .filter(|e| e.date == date)
        .collect()
}
