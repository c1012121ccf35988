//! Typed assistant commands.
//!
//! # Responsibility
//! - Parse gateway tool calls into a closed command enum.
//! - Apply each command to state and produce the confirmation text shown
//!   in the chat.
//!
//! # Invariants
//! - Unknown tool names and malformed arguments are rejected at parse
//!   time; `apply` operates only on validated input.
//! - `apply` records one `BasePulse action` activity-log line per command.

use crate::assistant::gateway::ToolCall;
use crate::model::document::DocumentKind;
use crate::model::journal::StreamKind;
use crate::model::mission::MissionCategory;
use crate::model::state::AppState;
use crate::model::todo::TodoValidationError;
use crate::service::{document_service, history_service, journal_service, mission_service, todo_service};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure turning a tool call into a command.
#[derive(Debug)]
pub enum CommandError {
    /// Tool name is not one of the declared capabilities.
    UnknownTool(String),
    /// A required argument is absent or not a string.
    MissingArgument(&'static str),
    /// An argument is present but outside its value domain.
    InvalidArgument { name: &'static str, value: String },
    /// The resulting record failed domain validation.
    Validation(TodoValidationError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown assistant tool: `{name}`"),
            Self::MissingArgument(name) => write!(f, "missing tool argument: `{name}`"),
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid tool argument `{name}`: `{value}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TodoValidationError> for CommandError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Closed set of actions the assistant may take on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantCommand {
    AddDiaryEntry {
        date: NaiveDate,
        stream: StreamKind,
        content: String,
    },
    CreateMission {
        title: String,
        category: MissionCategory,
        description: Option<String>,
        deadline: Option<NaiveDate>,
    },
    AddTodo {
        text: String,
    },
    CreateDocument {
        title: String,
        kind: DocumentKind,
        content: String,
    },
}

impl AssistantCommand {
    /// Parses and validates one gateway tool call.
    pub fn from_tool_call(call: &ToolCall) -> Result<Self, CommandError> {
        match call.name.as_str() {
            "addDiaryEntry" => Ok(Self::AddDiaryEntry {
                date: required_date(&call.args, "date")?,
                stream: parse_stream(required_str(&call.args, "type")?)?,
                content: required_str(&call.args, "content")?.to_string(),
            }),
            "createMission" => Ok(Self::CreateMission {
                title: required_str(&call.args, "title")?.to_string(),
                category: parse_category(required_str(&call.args, "category")?)?,
                description: optional_str(&call.args, "description"),
                deadline: optional_date(&call.args, "deadline")?,
            }),
            "addToToDo" => Ok(Self::AddTodo {
                text: required_str(&call.args, "task")?.to_string(),
            }),
            "createDocument" => Ok(Self::CreateDocument {
                title: required_str(&call.args, "title")?.to_string(),
                kind: parse_document_kind(optional_str(&call.args, "type").as_deref()),
                content: required_str(&call.args, "content")?.to_string(),
            }),
            other => Err(CommandError::UnknownTool(other.to_string())),
        }
    }

    /// Short stable name used in activity-log lines.
    pub fn action_name(&self) -> &'static str {
        match self {
            Self::AddDiaryEntry { .. } => "addDiaryEntry",
            Self::CreateMission { .. } => "createMission",
            Self::AddTodo { .. } => "addToToDo",
            Self::CreateDocument { .. } => "createDocument",
        }
    }

    /// Executes the command against state and returns the confirmation
    /// text the chat shows.
    pub fn apply(self, state: &mut AppState, now: DateTime<Utc>) -> Result<String, CommandError> {
        let action = self.action_name();
        let confirmation = match self {
            Self::AddDiaryEntry {
                date,
                stream,
                content,
            } => {
                journal_service::add_entry(state, date, stream, content, now);
                format!("I've logged that in your {:?} stream for {date}.", stream)
            }
            Self::CreateMission {
                title,
                category,
                description,
                deadline,
            } => {
                mission_service::add_mission(
                    state,
                    title.clone(),
                    category,
                    description,
                    deadline,
                    now,
                );
                format!("Mission \"{title}\" added to your queue.")
            }
            Self::AddTodo { text } => {
                todo_service::add_todo(state, text.clone(), None, None, now)?;
                format!("Added \"{text}\" to your To-Do list.")
            }
            Self::CreateDocument {
                title,
                kind,
                content,
            } => {
                document_service::add_document(state, title.clone(), kind, content, now);
                format!("I've created the document \"{title}\" in NoteBM.")
            }
        };

        history_service::record_log(state, format!("BasePulse action: {action}"), now);
        Ok(confirmation)
    }
}

fn required_str<'a>(args: &'a Value, name: &'static str) -> Result<&'a str, CommandError> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(CommandError::MissingArgument(name))
}

fn optional_str(args: &Value, name: &str) -> Option<String> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn required_date(args: &Value, name: &'static str) -> Result<NaiveDate, CommandError> {
    let raw = required_str(args, name)?;
    parse_date(raw, name)
}

fn optional_date(args: &Value, name: &'static str) -> Result<Option<NaiveDate>, CommandError> {
    match optional_str(args, name) {
        Some(raw) => parse_date(&raw, name).map(Some),
        None => Ok(None),
    }
}

fn parse_date(raw: &str, name: &'static str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CommandError::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}

fn parse_stream(raw: &str) -> Result<StreamKind, CommandError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "FACT" => Ok(StreamKind::Fact),
        "LIFE" => Ok(StreamKind::Life),
        _ => Err(CommandError::InvalidArgument {
            name: "type",
            value: raw.to_string(),
        }),
    }
}

fn parse_category(raw: &str) -> Result<MissionCategory, CommandError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "EVERYDAY" => Ok(MissionCategory::Everyday),
        "FINITE" => Ok(MissionCategory::Finite),
        _ => Err(CommandError::InvalidArgument {
            name: "category",
            value: raw.to_string(),
        }),
    }
}

fn parse_document_kind(raw: Option<&str>) -> DocumentKind {
    match raw.map(|s| s.trim().to_ascii_uppercase()) {
        Some(value) => match value.as_str() {
            "PROJECT" => DocumentKind::Project,
            "MEAL_PLAN" => DocumentKind::MealPlan,
            "DIARY_EXPORT" => DocumentKind::DiaryExport,
            "OTHER" => DocumentKind::Other,
            other => {
                // Unrecognized kinds degrade to Other instead of dropping
                // the document the assistant already produced.
                warn!(
                    "event=assistant_command module=assistant status=degraded unknown_document_kind={other}"
                );
                DocumentKind::Other
            }
        },
        None => DocumentKind::Other,
    }
}
