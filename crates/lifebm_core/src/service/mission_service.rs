//! Mission use-cases.

use crate::model::mission::{Mission, MissionCategory, MissionId};
use crate::model::notification::NotificationKind;
use crate::model::state::AppState;
use crate::service::history_service;
use chrono::{DateTime, NaiveDate, Utc};

/// Adds a pending mission, newest first. Returns the created mission's id.
pub fn add_mission(
    state: &mut AppState,
    title: impl Into<String>,
    category: MissionCategory,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> MissionId {
    let mut mission = Mission::new(title, category);
    mission.description = description;
    mission.deadline = deadline;
    let id = mission.id;

    history_service::push_notification(
        state,
        "New Mission",
        format!("Mission \"{}\" has been added.", mission.title),
        NotificationKind::Mission,
        now,
    );
    history_service::record_log(state, format!("Mission created: {}", mission.title), now);
    state.missions.insert(0, mission);
    id
}

/// Flips pending/completed status. Unknown ids are a no-op.
pub fn toggle_mission_status(state: &mut AppState, id: MissionId) -> bool {
    match state.missions.iter_mut().find(|m| m.id == id) {
        Some(mission) => {
            mission.toggle_status();
            true
        }
        None => false,
    }
}

/// Removes one mission. Unknown ids are a no-op.
pub fn delete_mission(state: &mut AppState, id: MissionId) -> bool {
    let before = state.missions.len();
    state.missions.retain(|m| m.id != id);
    state.missions.len() != before
}
