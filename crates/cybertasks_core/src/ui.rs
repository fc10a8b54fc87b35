//! UI-selection state: active section, creation dialogs and their drafts.
//!
//! # Responsibility
//! - Model "which section is open" and "which dialog is open" as explicit,
//!   passed-in state rather than ambient globals.
//! - Orchestrate the submit flow: create, then close dialog and reset draft.
//!
//! # Invariants
//! - A failed submit leaves the dialog open and the draft untouched so the
//!   user can correct the form.
//! - A successful submit closes the matching dialog and resets the matching
//!   draft to its defaults.

use serde::{Deserialize, Serialize};

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::service::board_service::{BoardService, ProjectDraft, TaskDraft, ValidationError};

/// Sidebar destinations of the dashboard shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Tasks,
    Projects,
    Calendar,
    Analytics,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 6] = [
        Self::Dashboard,
        Self::Tasks,
        Self::Projects,
        Self::Calendar,
        Self::Analytics,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Projects => "Projects",
            Self::Calendar => "Calendar",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Placeholder copy for sections that only exist in the sidebar so far.
    /// Returns `None` for sections with a real view behind them.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Dashboard | Self::Tasks | Self::Projects => None,
            Self::Calendar => Some("The deadline calendar is under construction"),
            Self::Analytics => Some("Detailed analytics will arrive in a later version"),
            Self::Settings => Some("System settings will be added"),
        }
    }
}

/// Mutable UI-selection state for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub section: Section,
    pub task_dialog_open: bool,
    pub project_dialog_open: bool,
    pub task_draft: TaskDraft,
    pub project_draft: ProjectDraft,
}

impl UiState {
    /// Fresh state: dashboard section, both dialogs closed, default drafts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active section.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Opens the new-task dialog.
    pub fn open_task_dialog(&mut self) {
        self.task_dialog_open = true;
    }

    /// Opens the new-project dialog.
    pub fn open_project_dialog(&mut self) {
        self.project_dialog_open = true;
    }

    /// Submits the current task draft.
    ///
    /// On success the dialog closes and the draft resets to its defaults; on
    /// validation failure both are left as-is.
    pub fn submit_task(&mut self, board: &mut BoardService) -> Result<TaskId, ValidationError> {
        let id = board.create_task(&self.task_draft)?;
        self.task_dialog_open = false;
        self.task_draft = TaskDraft::default();
        Ok(id)
    }

    /// Submits the current project draft; same reset semantics as
    /// [`UiState::submit_task`].
    pub fn submit_project(
        &mut self,
        board: &mut BoardService,
    ) -> Result<ProjectId, ValidationError> {
        let id = board.create_project(&self.project_draft)?;
        self.project_dialog_open = false;
        self.project_draft = ProjectDraft::default();
        Ok(id)
    }
}
