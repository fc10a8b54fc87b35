//! Core domain logic for the CyberTasks dashboard.
//! This crate is the single source of truth for board state and derivations.
//!
//! The presentation layer (whatever renders widgets) is an external
//! collaborator: it reads plain values and sequences from [`view`], drives
//! mutations through [`service`] and [`ui`], and never owns entity data.

pub mod logging;
pub mod model;
pub mod sample;
pub mod service;
pub mod store;
pub mod ui;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::{Notification, NotificationId, NotificationKind};
pub use model::project::{Project, ProjectColor, ProjectId};
pub use model::task::{Priority, Task, TaskId, TaskStatus};
pub use sample::sample_store;
pub use service::board_service::{BoardService, ProjectDraft, TaskDraft, ValidationError};
pub use store::entity_store::EntityStore;
pub use ui::{Section, UiState};
pub use view::board::{kanban_buckets, project_progress, KanbanBuckets, ProjectProgress};
pub use view::dashboard::{
    active_tasks, completion_rate, status_counts, StatusCounts, ACTIVE_PREVIEW_LIMIT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
