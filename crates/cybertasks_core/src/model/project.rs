//! Project domain model.
//!
//! # Responsibility
//! - Define the grouping label tasks attach to by name.
//!
//! # Invariants
//! - `id` is stable for the project's lifetime and never reused.
//! - `name` should be unique by convention; the store does not enforce it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project.
pub type ProjectId = Uuid;

/// Visual tag from the board's small fixed palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectColor {
    #[default]
    Primary,
    Secondary,
    Accent,
}

/// Grouping label for tasks.
///
/// Tasks reference projects by `name` (plain string equality), so a project
/// row is a display aid rather than an ownership relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Non-empty display name.
    pub name: String,
    pub color: ProjectColor,
    /// Cached count written once at creation (always 0) and never recomputed
    /// afterwards; a known staleness gap carried over from the source design.
    /// Progress views ignore this field and count matching tasks directly.
    pub task_count: u32,
}

impl Project {
    /// Creates a project with a generated stable ID and `task_count = 0`.
    pub fn new(name: impl Into<String>, color: ProjectColor) -> Self {
        Self::with_id(Uuid::new_v4(), name, color)
    }

    /// Creates a project with a caller-provided stable ID.
    pub fn with_id(id: ProjectId, name: impl Into<String>, color: ProjectColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            task_count: 0,
        }
    }
}
