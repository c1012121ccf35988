//! Assistant conversation use-cases.
//!
//! # Responsibility
//! - Maintain the chat transcript.
//! - Drive one full conversation turn: send, dispatch tool calls, append
//!   the reply.
//!
//! # Invariants
//! - Gateway failures degrade to a canned apology message in the
//!   transcript; they never propagate to the caller.
//! - Tool calls are applied before their confirmation text is appended,
//!   so the transcript never confirms an action that did not happen.

use crate::assistant::command::AssistantCommand;
use crate::assistant::gateway::{AssistantGateway, AssistantReply};
use crate::model::chat::{ChatMessage, ChatRole};
use crate::model::state::{AppState, UserProfile, GREETING_TEXT};
use crate::service::history_service;
use chrono::{DateTime, Utc};
use log::{info, warn};

/// Shown when the gateway fails or a tool call cannot be applied.
const APOLOGY_TEXT: &str = "I seem to be having trouble processing that request right now.";

/// Appends a user message to the transcript.
pub fn push_user_message(state: &mut AppState, text: impl Into<String>, now: DateTime<Utc>) {
    state
        .chat_history
        .push(ChatMessage::new(ChatRole::User, text, now));
}

/// Appends a model message to the transcript.
pub fn push_model_message(state: &mut AppState, text: impl Into<String>, now: DateTime<Utc>) {
    state
        .chat_history
        .push(ChatMessage::new(ChatRole::Model, text, now));
}

/// Resets the transcript to a fresh greeting.
pub fn clear_chat(state: &mut AppState, now: DateTime<Utc>) {
    state.chat_history = vec![ChatMessage::new(ChatRole::Model, GREETING_TEXT, now)];
    history_service::record_log(state, "Chat history cleared", now);
}

/// Builds the profile context line sent with every message.
pub fn build_user_context(profile: &UserProfile, now: DateTime<Utc>) -> String {
    format!(
        "User: {}, Career: {}. Today is {}.",
        profile.name,
        profile.career,
        now.format("%Y-%m-%d")
    )
}

/// Runs one full conversation turn against the gateway.
///
/// Pushes the user message, sends it with transcript and profile context,
/// then either applies a tool call (appending its confirmation) or appends
/// the text reply. Returns the model text added to the transcript.
pub fn converse(
    state: &mut AppState,
    gateway: &dyn AssistantGateway,
    message: &str,
    now: DateTime<Utc>,
) -> String {
    let context = build_user_context(&state.user_profile, now);
    // Snapshot before the user message is appended, matching what the
    // assistant saw as prior history.
    let history = state.chat_history.clone();
    push_user_message(state, message, now);

    let reply = match gateway.send_message(&history, message, &context) {
        Ok(reply) => reply,
        Err(err) => {
            warn!("event=chat_turn module=chat status=degraded error={err}");
            push_model_message(state, APOLOGY_TEXT, now);
            return APOLOGY_TEXT.to_string();
        }
    };

    let text = match reply {
        AssistantReply::Text(text) => text,
        AssistantReply::ToolCall(call) => {
            match AssistantCommand::from_tool_call(&call).and_then(|cmd| cmd.apply(state, now)) {
                Ok(confirmation) => confirmation,
                Err(err) => {
                    warn!(
                        "event=chat_turn module=chat status=degraded tool={} error={err}",
                        call.name
                    );
                    APOLOGY_TEXT.to_string()
                }
            }
        }
    };

    info!("event=chat_turn module=chat status=ok");
    push_model_message(state, text.clone(), now);
    text
}
