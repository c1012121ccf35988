//! Reminder poll-tick orchestration.
//!
//! # Responsibility
//! - Run one evaluation pass over the live state and fan out the effects:
//!   platform notification, activity-log line, notification history entry.
//! - Merge evaluator output back into the live list by identifier.
//!
//! # Invariants
//! - One tick is fully synchronous; the caller owns the timer and never
//!   overlaps ticks.
//! - User edits made between snapshot and merge win over evaluator output
//!   for every field except `last_reminded`.

use crate::model::state::AppState;
use crate::model::todo::TodoItem;
use crate::reminder::evaluator::evaluate;
use crate::service::history_service;
use crate::service::todo_service;
use chrono::{DateTime, Utc};
use log::info;

/// External platform-notification boundary.
///
/// The evaluator never observes a return value; display failure degrades
/// silently on the notifier side.
pub trait Notifier {
    fn notify(&self, todo: &TodoItem);
}

/// Notifier printing to stdout, used by the CLI runner.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, todo: &TodoItem) {
        println!("[reminder] {}", todo.text);
    }
}

/// Runs one reminder tick against the live state.
///
/// Returns the number of items that fired.
pub fn run_tick(state: &mut AppState, now: DateTime<Utc>, notifier: &dyn Notifier) -> usize {
    let pass = evaluate(now, &state.todos);
    if pass.due.is_empty() {
        return 0;
    }

    for todo in &pass.due {
        notifier.notify(todo);
        history_service::push_notification(
            state,
            "Task Reminder",
            format!("It's time for: {}", todo.text),
            crate::model::notification::NotificationKind::Todo,
            now,
        );
        history_service::record_log(state, format!("Reminder fired: {}", todo.text), now);
    }

    let fired = pass.due.len();
    todo_service::merge_reminded(state, pass.updated);

    info!(
        "event=reminder_tick module=reminder status=ok due_count={} todo_count={}",
        fired,
        state.todos.len()
    );

    fired
}
