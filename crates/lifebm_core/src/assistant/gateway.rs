//! Remote assistant gateway contract.

use crate::model::chat::ChatMessage;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structured action request returned by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Tool name as declared to the assistant.
    pub name: String,
    /// Raw JSON arguments; validated by `AssistantCommand::from_tool_call`.
    pub args: Value,
}

/// One assistant turn: either prose or a single tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantReply {
    Text(String),
    ToolCall(ToolCall),
}

/// Failure talking to the remote assistant.
///
/// Callers degrade to a canned apology message; gateway errors never
/// propagate past the chat service.
#[derive(Debug)]
pub enum GatewayError {
    /// Transport-level failure (connectivity, auth, quota).
    Transport(String),
    /// The reply could not be interpreted as text or a tool call.
    MalformedReply(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(details) => write!(f, "assistant transport failure: {details}"),
            Self::MalformedReply(details) => write!(f, "malformed assistant reply: {details}"),
        }
    }
}

impl Error for GatewayError {}

/// Boundary to the remote generative-AI service.
pub trait AssistantGateway {
    /// Sends one user message with transcript and profile context.
    fn send_message(
        &self,
        history: &[ChatMessage],
        message: &str,
        user_context: &str,
    ) -> Result<AssistantReply, GatewayError>;
}
