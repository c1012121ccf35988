//! Core domain logic for LifeBM, a local-first personal life organizer.
//! This crate is the single source of truth for business invariants.

pub mod assistant;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod service;
pub mod store;

pub use assistant::command::{AssistantCommand, CommandError};
pub use assistant::gateway::{AssistantGateway, AssistantReply, GatewayError, ToolCall};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::state::{AppState, UserProfile};
pub use model::todo::{ReminderMode, TodoId, TodoItem, TodoValidationError};
pub use reminder::evaluator::{evaluate, ReminderPass};
pub use reminder::worker::{run_tick, ConsoleNotifier, Notifier};
pub use store::state_store::{SqliteStateStore, StateStore};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
