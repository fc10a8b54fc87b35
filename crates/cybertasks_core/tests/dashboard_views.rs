use cybertasks_core::{
    active_tasks, completion_rate, status_counts, Task, TaskStatus, ACTIVE_PREVIEW_LIMIT,
};

fn task(title: &str, status: TaskStatus) -> Task {
    let mut task = Task::new(title, "2025-11-16", "Backend v2.0");
    task.status = status;
    task
}

#[test]
fn status_counts_buckets_sum_to_task_count() {
    let tasks = vec![
        task("a", TaskStatus::Todo),
        task("b", TaskStatus::InProgress),
        task("c", TaskStatus::Done),
        task("d", TaskStatus::InProgress),
        task("e", TaskStatus::Todo),
    ];

    let counts = status_counts(&tasks);
    assert_eq!(counts.todo, 2);
    assert_eq!(counts.in_progress, 2);
    assert_eq!(counts.done, 1);
    assert_eq!(counts.total(), tasks.len());
}

#[test]
fn status_counts_get_matches_fields() {
    let tasks = vec![task("a", TaskStatus::Done)];
    let counts = status_counts(&tasks);
    assert_eq!(counts.get(TaskStatus::Todo), 0);
    assert_eq!(counts.get(TaskStatus::InProgress), 0);
    assert_eq!(counts.get(TaskStatus::Done), 1);
}

#[test]
fn completion_rate_of_empty_board_is_zero() {
    assert_eq!(completion_rate(&[]), 0);
}

#[test]
fn completion_rate_rounds_to_nearest_integer() {
    // 1 of 3 done: 33.33 rounds down.
    let tasks = vec![
        task("a", TaskStatus::Done),
        task("b", TaskStatus::Todo),
        task("c", TaskStatus::Todo),
    ];
    assert_eq!(completion_rate(&tasks), 33);

    // 2 of 3 done: 66.67 rounds up.
    let tasks = vec![
        task("a", TaskStatus::Done),
        task("b", TaskStatus::Done),
        task("c", TaskStatus::Todo),
    ];
    assert_eq!(completion_rate(&tasks), 67);
}

#[test]
fn completion_rate_spans_full_range() {
    let all_todo = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Todo)];
    assert_eq!(completion_rate(&all_todo), 0);

    let all_done = vec![task("a", TaskStatus::Done), task("b", TaskStatus::Done)];
    assert_eq!(completion_rate(&all_done), 100);
}

#[test]
fn active_tasks_skips_done_and_keeps_insertion_order() {
    let tasks = vec![
        task("first", TaskStatus::Todo),
        task("finished", TaskStatus::Done),
        task("second", TaskStatus::InProgress),
        task("third", TaskStatus::Todo),
    ];

    let preview: Vec<&str> = active_tasks(&tasks)
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(preview, ["first", "second", "third"]);
}

#[test]
fn active_tasks_truncates_to_preview_limit() {
    let tasks: Vec<Task> = (0..10)
        .map(|n| task(&format!("task {n}"), TaskStatus::Todo))
        .collect();

    let preview = active_tasks(&tasks);
    assert_eq!(preview.len(), ACTIVE_PREVIEW_LIMIT);
    // Truncation keeps the head of the list, not a date or priority sort.
    assert_eq!(preview[0].title, "task 0");
    assert_eq!(preview[3].title, "task 3");
}

#[test]
fn derivations_are_pure_over_the_same_snapshot() {
    let tasks = vec![
        task("a", TaskStatus::Todo),
        task("b", TaskStatus::Done),
        task("c", TaskStatus::InProgress),
    ];

    assert_eq!(status_counts(&tasks), status_counts(&tasks));
    assert_eq!(completion_rate(&tasks), completion_rate(&tasks));
    let first: Vec<_> = active_tasks(&tasks).iter().map(|t| t.id).collect();
    let second: Vec<_> = active_tasks(&tasks).iter().map(|t| t.id).collect();
    assert_eq!(first, second);
}
