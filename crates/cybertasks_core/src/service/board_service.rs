//! Board use-case service: task and project creation.
//!
//! # Responsibility
//! - Validate creation drafts and append accepted entities to the store.
//!
//! # Invariants
//! - A rejected draft leaves the store byte-for-byte unchanged.
//! - Validation is required-field presence only; due dates are not parsed
//!   and project labels are not checked against existing project names.
//! - Creation is a single transition: validate, then append. There are no
//!   intermediate states and no partial application.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};

use crate::model::project::{Project, ProjectColor, ProjectId};
use crate::model::task::{Priority, Task, TaskId, TaskStatus};
use crate::store::entity_store::EntityStore;

/// The one error kind this core raises.
///
/// Deliberately does not name the offending fields: the caller surfaces a
/// single "required fields are missing" message, as the source UI did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequiredFields,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields => write!(f, "required fields are missing"),
        }
    }
}

impl Error for ValidationError {}

/// Creation form state for a new task.
///
/// `Default` doubles as the post-submit reset value: empty text fields,
/// `status = todo`, `priority = medium`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String,
    pub project: String,
}

/// Creation form state for a new project.
///
/// `Default` doubles as the post-submit reset value: empty name,
/// `color = primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub color: ProjectColor,
}

/// Use-case service wrapping the entity store.
#[derive(Debug, Default)]
pub struct BoardService {
    store: EntityStore,
}

impl BoardService {
    /// Creates a service over the given store.
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Read access for the view layer.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Releases the owned store.
    pub fn into_store(self) -> EntityStore {
        self.store
    }

    /// Creates a task from a draft.
    ///
    /// # Contract
    /// - `title`, `due_date` and `project` must all be non-empty.
    /// - On failure the store is left unmutated.
    /// - On success the new task carries the draft's status and priority and
    ///   a fresh ID distinct from every stored task.
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<TaskId, ValidationError> {
        if draft.title.is_empty() || draft.due_date.is_empty() || draft.project.is_empty() {
            warn!("event=create_task_rejected module=service reason=missing_required_fields");
            return Err(ValidationError::MissingRequiredFields);
        }

        let mut task = Task::new(
            draft.title.clone(),
            draft.due_date.clone(),
            draft.project.clone(),
        );
        task.status = draft.status;
        task.priority = draft.priority;

        let id = self.store.add_task(task);
        info!("event=task_created module=service status=ok task_id={id}");
        Ok(id)
    }

    /// Creates a project from a draft.
    ///
    /// # Contract
    /// - `name` must be non-empty; uniqueness is not enforced.
    /// - The stored project starts with `task_count = 0`.
    pub fn create_project(&mut self, draft: &ProjectDraft) -> Result<ProjectId, ValidationError> {
        if draft.name.is_empty() {
            warn!("event=create_project_rejected module=service reason=missing_required_fields");
            return Err(ValidationError::MissingRequiredFields);
        }

        let id = self
            .store
            .add_project(Project::new(draft.name.clone(), draft.color));
        info!("event=project_created module=service status=ok project_id={id}");
        Ok(id)
    }
}
