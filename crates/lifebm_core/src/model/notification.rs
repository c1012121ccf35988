//! In-app notification history model.
//!
//! These records are the persisted trail of reminders and system events;
//! displaying a platform notification is a separate external concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a notification entry.
pub type NotificationId = Uuid;

/// Origin of a notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Todo,
    Mission,
    System,
}

/// One entry in the persisted notification history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub kind: NotificationKind,
}

impl AppNotification {
    /// Creates an unread notification stamped with the provided instant.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            timestamp: now,
            read: false,
            kind,
        }
    }
}
