//! Mission domain model.
//!
//! A mission is a task with richer metadata than a quick to-do: a category
//! separating routines from one-time goals, a completion status, and an
//! optional deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a mission.
pub type MissionId = Uuid;

/// Whether a mission recurs as a routine or completes once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    /// Repeating routine with no terminal completion.
    Everyday,
    /// One-time goal, done when completed.
    Finite,
}

/// Mission lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Pending,
    Completed,
}

/// Task-like entity with category, status and optional deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    pub category: MissionCategory,
    pub status: MissionStatus,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Mission {
    /// Creates a pending mission with a fresh stable ID.
    pub fn new(title: impl Into<String>, category: MissionCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category,
            status: MissionStatus::Pending,
            deadline: None,
            description: None,
        }
    }

    /// Flips pending/completed status.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            MissionStatus::Pending => MissionStatus::Completed,
            MissionStatus::Completed => MissionStatus::Pending,
        };
    }
}
