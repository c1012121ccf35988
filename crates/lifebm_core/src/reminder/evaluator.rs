//! Reminder due-ness evaluator.
//!
//! # Responsibility
//! - Given the current instant and the to-do list, decide which items are
//!   due for a reminder right now.
//!
//! # Invariants
//! - Pure: no I/O, no clock reads, no in-place mutation; identical inputs
//!   yield identical outputs.
//! - Completed items and items with no reminder fields are never due.
//! - All time comparisons are inclusive (`>=`).
//! - A one-shot item fires at most once: the branch requires an absent
//!   `last_reminded`, which the fire itself sets.

use crate::model::todo::TodoItem;
use chrono::{DateTime, Duration, Utc};

/// Outcome of one evaluation pass.
///
/// `updated` carries only the mutated records so callers can merge by
/// identifier against the latest list instead of replacing it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPass {
    /// Items due for a reminder at this instant, in input order.
    pub due: Vec<TodoItem>,
    /// Copies of the due items with `last_reminded` advanced to `now`.
    pub updated: Vec<TodoItem>,
}

/// Evaluates the to-do list at `now` and returns the due items.
pub fn evaluate(now: DateTime<Utc>, todos: &[TodoItem]) -> ReminderPass {
    let mut pass = ReminderPass::default();

    for todo in todos {
        if !is_due(now, todo) {
            continue;
        }
        let mut updated = todo.clone();
        updated.last_reminded = Some(now);
        pass.due.push(todo.clone());
        pass.updated.push(updated);
    }

    pass
}

fn is_due(now: DateTime<Utc>, todo: &TodoItem) -> bool {
    if todo.completed {
        return false;
    }
    if todo.reminder_at.is_none() && todo.remind_every_minutes.is_none() {
        return false;
    }

    // One-shot: a fixed instant that has not fired yet.
    if let Some(at) = todo.reminder_at {
        if todo.last_reminded.is_none() && todo.remind_every_minutes.is_none() {
            return now >= at;
        }
    }

    // Recurring: interval elapsed since the last fire, or the anchor
    // reached; with neither, due on the first evaluation after creation.
    if let Some(minutes) = todo.remind_every_minutes {
        return match (todo.last_reminded, todo.reminder_at) {
            (Some(last), _) => now >= last + Duration::minutes(i64::from(minutes)),
            (None, Some(anchor)) => now >= anchor,
            (None, None) => true,
        };
    }

    false
}

#[cfg(test)]
mod tests {
    use super::is_due;
    use crate::model::todo::TodoItem;
    use chrono::{Duration, Utc};

    #[test]
    fn boundary_is_inclusive() {
        let now = Utc::now();
        let mut todo = TodoItem::with_reminder("hydrate", None, Some(15));
        todo.last_reminded = Some(now - Duration::minutes(15));
        assert!(is_due(now, &todo));

        todo.last_reminded = Some(now - Duration::minutes(15) + Duration::seconds(1));
        assert!(!is_due(now, &todo));
    }
}
