//! To-do item domain model.
//!
//! # Responsibility
//! - Define the quick-task record evaluated by the reminder evaluator.
//! - Classify each item into exactly one reminder mode.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `last_reminded`, once set, is monotonically non-decreasing; only the
//!   reminder evaluator advances it.
//! - A completed item is never evaluated for reminders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a to-do item.
pub type TodoId = Uuid;

/// Reminder behavior derived from the two optional reminder fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderMode {
    /// No reminder fields set; never due.
    None,
    /// Fires at most once, at or after `reminder_at`.
    OneShot,
    /// Fires repeatedly every `remind_every_minutes`, anchored to the last
    /// fire or to `reminder_at` when present.
    Recurring,
}

/// Validation failure for a to-do record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Text is empty after trimming.
    BlankText,
    /// Recurring interval must be at least one minute.
    ZeroInterval,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "to-do text must not be blank"),
            Self::ZeroInterval => write!(f, "reminder interval must be at least one minute"),
        }
    }
}

impl Error for TodoValidationError {}

/// Quick task with optional reminder scheduling fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// One-shot instant, or the anchor for a recurring reminder.
    pub reminder_at: Option<DateTime<Utc>>,
    /// Recurring interval in minutes. Must be positive when set.
    pub remind_every_minutes: Option<u32>,
    /// Set by the reminder evaluator on each fire. Absent at creation.
    pub last_reminded: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates an item with no reminder fields and a fresh stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            reminder_at: None,
            remind_every_minutes: None,
            last_reminded: None,
        }
    }

    /// Creates an item with reminder scheduling fields.
    pub fn with_reminder(
        text: impl Into<String>,
        reminder_at: Option<DateTime<Utc>>,
        remind_every_minutes: Option<u32>,
    ) -> Self {
        let mut item = Self::new(text);
        item.reminder_at = reminder_at;
        item.remind_every_minutes = remind_every_minutes;
        item
    }

    /// Checks record-level invariants before the item enters the state.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.text.trim().is_empty() {
            return Err(TodoValidationError::BlankText);
        }
        if self.remind_every_minutes == Some(0) {
            return Err(TodoValidationError::ZeroInterval);
        }
        Ok(())
    }

    /// Returns which of the three reminder modes applies.
    ///
    /// Exactly one mode applies per item: the interval takes precedence,
    /// so an item with both fields is recurring with `reminder_at` as its
    /// anchor.
    pub fn reminder_mode(&self) -> ReminderMode {
        match (self.remind_every_minutes, self.reminder_at) {
            (Some(_), _) => ReminderMode::Recurring,
            (None, Some(_)) => ReminderMode::OneShot,
            (None, None) => ReminderMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReminderMode, TodoItem, TodoValidationError};
    use chrono::Utc;

    #[test]
    fn new_item_starts_without_last_reminded() {
        let item = TodoItem::new("water the plants");
        assert!(!item.completed);
        assert!(item.last_reminded.is_none());
        assert_eq!(item.reminder_mode(), ReminderMode::None);
    }

    #[test]
    fn interval_takes_precedence_over_instant() {
        let item = TodoItem::with_reminder("stretch", Some(Utc::now()), Some(30));
        assert_eq!(item.reminder_mode(), ReminderMode::Recurring);
    }

    #[test]
    fn instant_alone_is_one_shot() {
        let item = TodoItem::with_reminder("call back", Some(Utc::now()), None);
        assert_eq!(item.reminder_mode(), ReminderMode::OneShot);
    }

    #[test]
    fn validate_rejects_blank_text_and_zero_interval() {
        let blank = TodoItem::new("   ");
        assert_eq!(blank.validate(), Err(TodoValidationError::BlankText));

        let zero = TodoItem::with_reminder("tick", None, Some(0));
        assert_eq!(zero.validate(), Err(TodoValidationError::ZeroInterval));
    }
}
