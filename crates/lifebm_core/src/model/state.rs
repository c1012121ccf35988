//! Application state container.
//!
//! # Responsibility
//! - Own every record collection as one explicitly-passed struct.
//! - Provide the default state seeded on first launch.
//!
//! # Invariants
//! - There is exactly one `AppState` per store; services receive it by
//!   reference and never hold a copy across operations.
//! - Collections are ordered newest-first except the chat transcript,
//!   which is append-ordered.

use crate::model::chat::{ChatMessage, ChatRole};
use crate::model::document::Document;
use crate::model::journal::DiaryEntry;
use crate::model::mission::Mission;
use crate::model::notification::AppNotification;
use crate::model::todo::TodoItem;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Greeting seeded into an empty transcript.
pub const GREETING_TEXT: &str = "BasePulse is online. How can I assist you today?";

/// Owner profile used to build assistant context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub career: String,
    pub birthday: String,
    pub phone_number: Option<String>,
    pub assistant_voice: Option<String>,
}

/// The whole persisted application state, one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub user_profile: UserProfile,
    pub diary_entries: Vec<DiaryEntry>,
    pub missions: Vec<Mission>,
    pub documents: Vec<Document>,
    pub chat_history: Vec<ChatMessage>,
    pub todos: Vec<TodoItem>,
    pub notifications: Vec<AppNotification>,
    /// Newest-first human-readable action trail.
    pub activity_log: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user_profile: UserProfile::default(),
            diary_entries: Vec::new(),
            missions: Vec::new(),
            documents: Vec::new(),
            chat_history: vec![ChatMessage::new(ChatRole::Model, GREETING_TEXT, Utc::now())],
            todos: Vec::new(),
            notifications: Vec::new(),
            activity_log: Vec::new(),
        }
    }
}
