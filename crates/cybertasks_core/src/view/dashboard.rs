//! Dashboard summary derivations.
//!
//! # Responsibility
//! - Provide the status counters, overall completion rate and active-task
//!   preview shown on the dashboard section.
//!
//! # Invariants
//! - `status_counts` buckets always sum to the task count.
//! - `completion_rate` is 0 for an empty board, never NaN or a panic.
//! - `active_tasks` is an insertion-order truncation, not a sort.

use serde::Serialize;

use crate::model::task::{Task, TaskStatus};
use crate::view::rounded_percent;

/// How many open tasks the dashboard preview list shows.
pub const ACTIVE_PREVIEW_LIMIT: usize = 4;

/// Per-status task counters for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    /// Counter for one status value.
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    /// Sum over all three buckets; equals the size of the counted snapshot.
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// Counts tasks per status value.
pub fn status_counts(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Done => counts.done += 1,
        }
    }
    counts
}

/// Overall completion percentage: `round(done / total * 100)`.
///
/// An empty board reports 0% rather than propagating a division by zero.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    let counts = status_counts(tasks);
    rounded_percent(counts.done, counts.total())
}

/// The dashboard's "active tasks" preview: the first
/// [`ACTIVE_PREVIEW_LIMIT`] tasks that are not done, in insertion order.
///
/// Deliberately not sorted by due date or priority; the preview mirrors the
/// board order exactly.
pub fn active_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.is_open())
        .take(ACTIVE_PREVIEW_LIMIT)
        .collect()
}
