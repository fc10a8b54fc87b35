//! Kanban partition and per-project progress derivations.
//!
//! # Responsibility
//! - Partition tasks into the three fixed status columns.
//! - Compute done/total/percent progress for a single project.
//!
//! # Invariants
//! - Each task lands in exactly one column; relative order is preserved.
//! - Project membership is plain string equality on the task's `project`
//!   label; no referential-integrity lookup happens here.
//! - A project with no matching tasks reports all-zero progress.

use serde::Serialize;

use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::view::rounded_percent;

/// Tasks partitioned by status for column-style display.
#[derive(Debug, Clone, Default)]
pub struct KanbanBuckets<'a> {
    todo: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    done: Vec<&'a Task>,
}

impl<'a> KanbanBuckets<'a> {
    /// Tasks in one column, in original insertion order.
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Count badge for one column header.
    pub fn len(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }
}

/// Partitions all tasks into the three fixed kanban columns.
pub fn kanban_buckets(tasks: &[Task]) -> KanbanBuckets<'_> {
    let mut buckets = KanbanBuckets::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => buckets.todo.push(task),
            TaskStatus::InProgress => buckets.in_progress.push(task),
            TaskStatus::Done => buckets.done.push(task),
        }
    }
    buckets
}

/// Progress summary for one project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    /// Matching tasks with status done.
    pub done: usize,
    /// All tasks whose `project` label equals the project's name.
    pub total: usize,
    /// `round(done / total * 100)`, 0 when no tasks match.
    pub percent: u8,
}

/// Computes progress for `project` by counting label-matching tasks.
///
/// The cached `Project.task_count` field is ignored here; the count is
/// always taken from the live task snapshot.
pub fn project_progress(tasks: &[Task], project: &Project) -> ProjectProgress {
    let mut done = 0;
    let mut total = 0;
    for task in tasks {
        if task.project == project.name {
            total += 1;
            if task.status == TaskStatus::Done {
                done += 1;
            }
        }
    }
    ProjectProgress {
        done,
        total,
        percent: rounded_percent(done, total),
    }
}
