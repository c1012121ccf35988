//! Document note domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a document.
pub type DocumentId = Uuid;

/// Document category used by the notes view and the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    DiaryExport,
    Project,
    MealPlan,
    Other,
}

/// Free-form note with a title and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    pub content: String,
    pub last_updated: DateTime<Utc>,
}

impl Document {
    /// Creates a document stamped with the provided instant.
    pub fn new(
        title: impl Into<String>,
        kind: DocumentKind,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            content: content.into(),
            last_updated: now,
        }
    }
}
