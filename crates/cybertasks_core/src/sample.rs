//! Seed data for the demo board.
//!
//! The dashboard ships with a small fixed board so every section renders
//! something on first launch: five tasks, three project rows and three feed
//! entries. The "Frontend" label intentionally has no project row; task
//! project labels are soft references and the board tolerates the mismatch.

use crate::model::notification::{Notification, NotificationKind};
use crate::model::project::{Project, ProjectColor};
use crate::model::task::{Priority, Task, TaskStatus};
use crate::store::entity_store::EntityStore;

/// Builds the seeded demo store.
///
/// Seed shape: 2 todo / 2 in-progress / 1 done, so the dashboard opens at a
/// 20% completion rate.
pub fn sample_store() -> EntityStore {
    EntityStore::with_entities(sample_tasks(), sample_projects(), sample_notifications())
}

fn sample_tasks() -> Vec<Task> {
    let mut tasks = Vec::new();

    let mut task = Task::new("Build API endpoints", "2025-11-16", "Backend v2.0");
    task.status = TaskStatus::InProgress;
    task.priority = Priority::High;
    tasks.push(task);

    // Todo + medium are the constructor defaults.
    tasks.push(Task::new("Design the landing page", "2025-11-18", "Redesign"));

    let mut task = Task::new("Set up CI/CD", "2025-11-14", "DevOps");
    task.status = TaskStatus::Done;
    task.priority = Priority::High;
    tasks.push(task);

    let mut task = Task::new("Test UI components", "2025-11-17", "Frontend");
    task.status = TaskStatus::InProgress;
    tasks.push(task);

    let mut task = Task::new("Optimize database queries", "2025-11-20", "Backend v2.0");
    task.priority = Priority::Low;
    tasks.push(task);

    tasks
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("Backend v2.0", ProjectColor::Primary),
        Project::new("Redesign", ProjectColor::Secondary),
        Project::new("DevOps", ProjectColor::Accent),
    ]
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationKind::Deadline,
            "Deadline for \"Build API endpoints\" is in 2 days",
            "10 min ago",
        ),
        Notification::new(
            NotificationKind::Change,
            "Task \"Set up CI/CD\" was completed",
            "1 hour ago",
        ),
        Notification::new(
            NotificationKind::Deadline,
            "Deadline for \"Code review\" has passed",
            "2 hours ago",
        ),
    ]
}
