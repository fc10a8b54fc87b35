//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by the dashboard, list and kanban views.
//! - Provide creation helpers that apply the board's defaults.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused.
//! - `project` is a display label, not a foreign key; it may name a project
//!   that has no row in the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state; each value maps to one kanban column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Done,
}

impl TaskStatus {
    /// Fixed column order used by the kanban view.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Short display label matching the wire name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Urgency tag shown as a badge next to each task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    /// Default for newly created tasks.
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Canonical record for one unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for list keys and auditing.
    pub id: TaskId,
    /// Non-empty display text.
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Opaque ISO-8601 calendar date (`YYYY-MM-DD`). The core stores and
    /// compares it as text; locale-aware display belongs to the caller.
    pub due_date: String,
    /// Name of the project this task belongs to, by convention only.
    pub project: String,
}

impl Task {
    /// Creates a task with a generated stable ID and board defaults
    /// (`status = todo`, `priority = medium`).
    pub fn new(
        title: impl Into<String>,
        due_date: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, due_date, project)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by fixture/seed paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        due_date: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: due_date.into(),
            project: project.into(),
        }
    }

    /// Returns whether this task still needs work (status != done).
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done
    }
}
