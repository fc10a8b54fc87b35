//! Entity store: the in-memory holder of all dashboard data.
//!
//! # Responsibility
//! - Provide append and read access over three ordered collections.
//!
//! # Invariants
//! - Insertion order is preserved; nothing here sorts or reorders.
//! - `add_task` never updates any project's cached `task_count`.
//! - Cross-references stay soft: a task's `project` label is accepted even
//!   when no project row carries that name.

use log::debug;

use crate::model::notification::Notification;
use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};

/// In-memory owner of tasks, projects and notifications.
///
/// There is no persistence behind this store; its contents live and die with
/// the process. All mutation is single-threaded appends, so no locking
/// discipline is needed.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    notifications: Vec<Notification>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given collections, keeping the
    /// given order. Used by seed/fixture paths.
    pub fn with_entities(
        tasks: Vec<Task>,
        projects: Vec<Project>,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            tasks,
            projects,
            notifications,
        }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All notifications in insertion order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Appends a task and returns its stable ID.
    ///
    /// # Contract
    /// - The task keeps the ID its constructor generated.
    /// - No other collection is touched.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = task.id;
        debug!(
            "event=task_appended module=store task_id={id} status={}",
            task.status.label()
        );
        self.tasks.push(task);
        id
    }

    /// Appends a project and returns its stable ID.
    pub fn add_project(&mut self, project: Project) -> ProjectId {
        let id = project.id;
        debug!("event=project_appended module=store project_id={id}");
        self.projects.push(project);
        id
    }
}
