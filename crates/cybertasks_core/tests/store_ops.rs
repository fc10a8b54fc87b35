use std::collections::HashSet;

use cybertasks_core::{EntityStore, Project, ProjectColor, Task};

#[test]
fn add_task_appends_in_insertion_order() {
    let mut store = EntityStore::new();

    let first = store.add_task(Task::new("First", "2025-11-16", "Backend v2.0"));
    let second = store.add_task(Task::new("Second", "2025-11-17", "Redesign"));

    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.tasks()[0].id, first);
    assert_eq!(store.tasks()[1].id, second);
    assert_eq!(store.tasks()[0].title, "First");
    assert_eq!(store.tasks()[1].title, "Second");
}

#[test]
fn task_ids_are_unique_across_the_collection() {
    let mut store = EntityStore::new();
    for n in 0..32 {
        store.add_task(Task::new(format!("Task {n}"), "2025-11-16", "Backend v2.0"));
    }

    let ids: HashSet<_> = store.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), store.tasks().len());
}

#[test]
fn add_task_does_not_touch_cached_project_counts() {
    let mut store = EntityStore::new();
    store.add_project(Project::new("Backend v2.0", ProjectColor::Primary));

    store.add_task(Task::new("Build API endpoints", "2025-11-16", "Backend v2.0"));
    store.add_task(Task::new("Optimize queries", "2025-11-20", "Backend v2.0"));

    // The cached field is written once at creation and intentionally left
    // stale afterwards.
    assert_eq!(store.projects()[0].task_count, 0);
}

#[test]
fn task_project_label_may_name_a_missing_project() {
    let mut store = EntityStore::new();
    store.add_project(Project::new("Backend v2.0", ProjectColor::Primary));

    store.add_task(Task::new("Test UI components", "2025-11-17", "Frontend"));

    assert_eq!(store.tasks()[0].project, "Frontend");
    assert!(store
        .projects()
        .iter()
        .all(|project| project.name != "Frontend"));
}

#[test]
fn empty_store_exposes_empty_collections() {
    let store = EntityStore::new();
    assert!(store.tasks().is_empty());
    assert!(store.projects().is_empty());
    assert!(store.notifications().is_empty());
}
