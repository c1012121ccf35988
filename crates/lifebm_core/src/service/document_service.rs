//! Document note use-cases.

use crate::model::document::{Document, DocumentId, DocumentKind};
use crate::model::state::AppState;
use crate::service::history_service;
use chrono::{DateTime, Utc};

/// Adds a document, newest first. Returns the created document's id.
pub fn add_document(
    state: &mut AppState,
    title: impl Into<String>,
    kind: DocumentKind,
    content: impl Into<String>,
    now: DateTime<Utc>,
) -> DocumentId {
    let doc = Document::new(title, kind, content, now);
    let id = doc.id;
    history_service::record_log(state, format!("Document created: {}", doc.title), now);
    state.documents.insert(0, doc);
    id
}

/// Removes one document. Unknown ids are a no-op.
pub fn delete_document(state: &mut AppState, id: DocumentId) -> bool {
    let before = state.documents.len();
    state.documents.retain(|d| d.id != id);
    state.documents.len() != before
}
