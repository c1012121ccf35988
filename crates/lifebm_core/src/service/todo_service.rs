//! To-do list use-cases.
//!
//! # Responsibility
//! - Create, toggle and delete quick tasks.
//! - Merge reminder-evaluator output into the live list by identifier.
//!
//! # Invariants
//! - Every new item passes `TodoItem::validate()` before entering state.
//! - `merge_reminded` only advances `last_reminded`; user edits made after
//!   the evaluator snapshot are preserved.

use crate::model::state::AppState;
use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use crate::service::history_service;
use chrono::{DateTime, Utc};

/// Adds a quick task, newest first. Returns the created item's id.
pub fn add_todo(
    state: &mut AppState,
    text: impl Into<String>,
    reminder_at: Option<DateTime<Utc>>,
    remind_every_minutes: Option<u32>,
    now: DateTime<Utc>,
) -> Result<TodoId, TodoValidationError> {
    let item = TodoItem::with_reminder(text, reminder_at, remind_every_minutes);
    item.validate()?;

    let id = item.id;
    history_service::record_log(state, format!("To-do added: {}", item.text), now);
    state.todos.insert(0, item);
    Ok(id)
}

/// Flips the completed flag. Unknown ids are a no-op.
pub fn toggle_todo(state: &mut AppState, id: TodoId) -> bool {
    match state.todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            true
        }
        None => false,
    }
}

/// Removes one task. Unknown ids are a no-op.
pub fn delete_todo(state: &mut AppState, id: TodoId) -> bool {
    let before = state.todos.len();
    state.todos.retain(|t| t.id != id);
    state.todos.len() != before
}

/// Applies evaluator output to the live list, matching by identifier.
///
/// Only `last_reminded` is taken from the evaluator's copy; items deleted
/// or completed since the snapshot keep the live record untouched apart
/// from the marker, and deleted items are dropped entirely.
pub fn merge_reminded(state: &mut AppState, updated: Vec<TodoItem>) {
    for reminded in updated {
        if let Some(live) = state.todos.iter_mut().find(|t| t.id == reminded.id) {
            live.last_reminded = reminded.last_reminded;
        }
    }
}
