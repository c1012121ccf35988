use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lifebm_core::model::chat::{ChatMessage, ChatRole};
use lifebm_core::model::document::DocumentKind;
use lifebm_core::model::journal::StreamKind;
use lifebm_core::model::mission::{MissionCategory, MissionStatus};
use lifebm_core::service::chat_service;
use lifebm_core::{
    AppState, AssistantCommand, AssistantGateway, AssistantReply, CommandError, GatewayError,
    ToolCall,
};
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
}

fn call(name: &str, args: serde_json::Value) -> ToolCall {
    ToolCall {
        name: name.to_string(),
        args,
    }
}

#[test]
fn parses_diary_entry_tool_call() {
    let cmd = AssistantCommand::from_tool_call(&call(
        "addDiaryEntry",
        json!({"date": "2025-03-14", "type": "LIFE", "content": "long day"}),
    ))
    .unwrap();

    assert_eq!(
        cmd,
        AssistantCommand::AddDiaryEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            stream: StreamKind::Life,
            content: "long day".to_string(),
        }
    );
}

#[test]
fn rejects_unknown_tool_and_missing_arguments() {
    let err = AssistantCommand::from_tool_call(&call("launchRocket", json!({}))).unwrap_err();
    assert!(matches!(err, CommandError::UnknownTool(name) if name == "launchRocket"));

    let err = AssistantCommand::from_tool_call(&call(
        "addDiaryEntry",
        json!({"date": "2025-03-14", "type": "LIFE"}),
    ))
    .unwrap_err();
    assert!(matches!(err, CommandError::MissingArgument("content")));

    let err = AssistantCommand::from_tool_call(&call(
        "addDiaryEntry",
        json!({"date": "yesterday", "type": "LIFE", "content": "x"}),
    ))
    .unwrap_err();
    assert!(matches!(err, CommandError::InvalidArgument { name: "date", .. }));
}

#[test]
fn rejects_invalid_stream_and_category() {
    let err = AssistantCommand::from_tool_call(&call(
        "addDiaryEntry",
        json!({"date": "2025-03-14", "type": "DREAM", "content": "x"}),
    ))
    .unwrap_err();
    assert!(matches!(err, CommandError::InvalidArgument { name: "type", .. }));

    let err = AssistantCommand::from_tool_call(&call(
        "createMission",
        json!({"title": "Ship", "category": "SOMEDAY"}),
    ))
    .unwrap_err();
    assert!(matches!(err, CommandError::InvalidArgument { name: "category", .. }));
}

#[test]
fn unknown_document_kind_degrades_to_other() {
    let cmd = AssistantCommand::from_tool_call(&call(
        "createDocument",
        json!({"title": "Plan", "content": "...", "type": "RECIPE"}),
    ))
    .unwrap();

    assert!(matches!(
        cmd,
        AssistantCommand::CreateDocument {
            kind: DocumentKind::Other,
            ..
        }
    ));
}

#[test]
fn applying_create_mission_mutates_state_and_logs() {
    let mut state = AppState::default();
    let cmd = AssistantCommand::from_tool_call(&call(
        "createMission",
        json!({
            "title": "Ship the report",
            "category": "FINITE",
            "description": "Quarterly numbers",
            "deadline": "2025-03-31"
        }),
    ))
    .unwrap();

    let confirmation = cmd.apply(&mut state, now()).unwrap();
    assert_eq!(confirmation, "Mission \"Ship the report\" added to your queue.");

    let mission = &state.missions[0];
    assert_eq!(mission.title, "Ship the report");
    assert_eq!(mission.category, MissionCategory::Finite);
    assert_eq!(mission.status, MissionStatus::Pending);
    assert_eq!(
        mission.deadline,
        Some(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
    );

    assert!(state
        .activity_log
        .iter()
        .any(|line| line.contains("BasePulse action: createMission")));
}

#[test]
fn applying_add_todo_creates_a_plain_item() {
    let mut state = AppState::default();
    let cmd =
        AssistantCommand::from_tool_call(&call("addToToDo", json!({"task": "Buy milk"}))).unwrap();

    let confirmation = cmd.apply(&mut state, now()).unwrap();
    assert_eq!(confirmation, "Added \"Buy milk\" to your To-Do list.");

    let todo = &state.todos[0];
    assert_eq!(todo.text, "Buy milk");
    assert!(todo.reminder_at.is_none());
    assert!(todo.remind_every_minutes.is_none());
}

struct ScriptedGateway {
    reply: Result<AssistantReply, &'static str>,
}

impl AssistantGateway for ScriptedGateway {
    fn send_message(
        &self,
        _history: &[ChatMessage],
        _message: &str,
        _user_context: &str,
    ) -> Result<AssistantReply, GatewayError> {
        self.reply
            .clone()
            .map_err(|details| GatewayError::Transport(details.to_string()))
    }
}

#[test]
fn converse_appends_both_sides_of_a_text_turn() {
    let mut state = AppState::default();
    let gateway = ScriptedGateway {
        reply: Ok(AssistantReply::Text("Hello!".to_string())),
    };

    let text = chat_service::converse(&mut state, &gateway, "hi", now());
    assert_eq!(text, "Hello!");

    let tail: Vec<_> = state.chat_history.iter().rev().take(2).collect();
    assert_eq!(tail[0].role, ChatRole::Model);
    assert_eq!(tail[0].text, "Hello!");
    assert_eq!(tail[1].role, ChatRole::User);
    assert_eq!(tail[1].text, "hi");
}

#[test]
fn converse_applies_tool_calls_before_confirming() {
    let mut state = AppState::default();
    let gateway = ScriptedGateway {
        reply: Ok(AssistantReply::ToolCall(call(
            "addToToDo",
            json!({"task": "Buy milk"}),
        ))),
    };

    let text = chat_service::converse(&mut state, &gateway, "remind me to buy milk", now());
    assert_eq!(text, "Added \"Buy milk\" to your To-Do list.");
    assert_eq!(state.todos[0].text, "Buy milk");
}

#[test]
fn converse_degrades_on_gateway_failure() {
    let mut state = AppState::default();
    let gateway = ScriptedGateway {
        reply: Err("connection refused"),
    };

    let text = chat_service::converse(&mut state, &gateway, "hi", now());
    assert!(text.contains("trouble processing"));

    // The user message is still kept so the transcript stays coherent.
    let last = state.chat_history.last().unwrap();
    assert_eq!(last.role, ChatRole::Model);
    assert!(state
        .chat_history
        .iter()
        .any(|m| m.role == ChatRole::User && m.text == "hi"));
}
