//! Activity log and notification history.
//!
//! # Responsibility
//! - Append human-readable action lines to the persisted activity log.
//! - Maintain the in-app notification history (append, read, clear).
//!
//! # Invariants
//! - Both collections are ordered newest-first.
//! - Recording is fire-and-forget; it never fails and never blocks the
//!   operation that triggered it.

use crate::model::notification::{AppNotification, NotificationId, NotificationKind};
use crate::model::state::AppState;
use chrono::{DateTime, Utc};

/// Prepends a timestamped line to the activity log.
pub fn record_log(state: &mut AppState, line: impl Into<String>, now: DateTime<Utc>) {
    let stamped = format!("[{}] {}", now.format("%H:%M:%S"), line.into());
    state.activity_log.insert(0, stamped);
}

/// Prepends an unread notification to the history.
pub fn push_notification(
    state: &mut AppState,
    title: impl Into<String>,
    message: impl Into<String>,
    kind: NotificationKind,
    now: DateTime<Utc>,
) {
    state
        .notifications
        .insert(0, AppNotification::new(title, message, kind, now));
}

/// Marks one notification as read. Unknown ids are a no-op.
pub fn mark_notification_read(state: &mut AppState, id: NotificationId) -> bool {
    match state.notifications.iter_mut().find(|n| n.id == id) {
        Some(notification) => {
            notification.read = true;
            true
        }
        None => false,
    }
}

/// Clears the whole notification history.
pub fn clear_notifications(state: &mut AppState) {
    state.notifications.clear();
}
