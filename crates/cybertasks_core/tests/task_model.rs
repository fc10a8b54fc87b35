use cybertasks_core::{
    Notification, NotificationKind, Priority, Project, ProjectColor, Task, TaskStatus,
};
use uuid::Uuid;

#[test]
fn task_new_applies_board_defaults() {
    let task = Task::new("Write release notes", "2025-12-01", "Docs");

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Write release notes");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, "2025-12-01");
    assert_eq!(task.project, "Docs");
    assert!(task.is_open());
}

#[test]
fn done_tasks_are_not_open() {
    let mut task = Task::new("Ship it", "2025-12-01", "Release");
    task.status = TaskStatus::Done;
    assert!(!task.is_open());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "Build API endpoints", "2025-11-16", "Backend v2.0");
    task.status = TaskStatus::InProgress;
    task.priority = Priority::High;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Build API endpoints");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["due_date"], "2025-11-16");
    assert_eq!(json["project"], "Backend v2.0");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn project_new_starts_with_zero_cached_count() {
    let project = Project::new("Ops", ProjectColor::Accent);

    assert!(!project.id.is_nil());
    assert_eq!(project.name, "Ops");
    assert_eq!(project.color, ProjectColor::Accent);
    assert_eq!(project.task_count, 0);
}

#[test]
fn project_color_serializes_as_palette_name() {
    let project = Project::new("Redesign", ProjectColor::Secondary);
    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["color"], "secondary");
    assert_eq!(json["task_count"], 0);
}

#[test]
fn notification_serializes_kind_as_type() {
    let notification = Notification::new(NotificationKind::Deadline, "Due soon", "10 min ago");

    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["type"], "deadline");
    assert_eq!(json["message"], "Due soon");
    assert_eq!(json["time"], "10 min ago");

    let decoded: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, notification);
}
