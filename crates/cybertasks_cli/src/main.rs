//! Text renderer for the dashboard core.
//!
//! # Responsibility
//! - Stand in for the widget layer: seed the sample board and print one
//!   section using only the core's read-only derivations.
//! - Keep output deterministic for quick local sanity checks.

use std::env;
use std::process::ExitCode;

use cybertasks_core::{
    active_tasks, completion_rate, core_version, default_log_level, init_logging, kanban_buckets,
    project_progress, sample_store, status_counts, EntityStore, Section, TaskStatus,
};

fn main() -> ExitCode {
    // Optional file logging; the renderer works fine without it.
    if let Ok(log_dir) = env::var("CYBERTASKS_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let section = match env::args().nth(1) {
        None => Section::Dashboard,
        Some(arg) => match parse_section(&arg) {
            Some(section) => section,
            None => {
                eprintln!("unknown section `{arg}`; expected one of:");
                for section in Section::ALL {
                    eprintln!("  {}", section.label().to_lowercase());
                }
                return ExitCode::FAILURE;
            }
        },
    };

    let store = sample_store();
    println!("CYBER TASKS v{}", core_version());
    println!("== {} ==", section.label());
    render(&store, section);
    ExitCode::SUCCESS
}

fn parse_section(arg: &str) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|section| section.label().eq_ignore_ascii_case(arg))
}

fn render(store: &EntityStore, section: Section) {
    if let Some(message) = section.placeholder() {
        println!("{message}");
        return;
    }
    match section {
        Section::Dashboard => render_dashboard(store),
        Section::Tasks => render_kanban(store),
        Section::Projects => render_projects(store),
        // Covered by the placeholder branch above.
        Section::Calendar | Section::Analytics | Section::Settings => {}
    }
}

fn render_dashboard(store: &EntityStore) {
    let counts = status_counts(store.tasks());
    println!(
        "todo: {}  in progress: {}  done: {}",
        counts.todo, counts.in_progress, counts.done
    );
    println!(
        "overall progress: {}% of {} tasks",
        completion_rate(store.tasks()),
        counts.total()
    );

    println!("\nnotifications:");
    for notification in store.notifications() {
        println!("  [{}] {}", notification.time, notification.message);
    }

    println!("\nactive tasks:");
    for task in active_tasks(store.tasks()) {
        println!(
            "  {} ({}, {}) due {} [{}]",
            task.title,
            task.status.label(),
            task.priority.label(),
            task.due_date,
            task.project
        );
    }
}

fn render_kanban(store: &EntityStore) {
    let buckets = kanban_buckets(store.tasks());
    for status in TaskStatus::ALL {
        println!("{} ({})", status.label(), buckets.len(status));
        for task in buckets.column(status) {
            println!("  {} [{}] due {}", task.title, task.priority.label(), task.due_date);
        }
    }
}

fn render_projects(store: &EntityStore) {
    for project in store.projects() {
        let progress = project_progress(store.tasks(), project);
        println!(
            "{}: {}/{} done ({}%)",
            project.name, progress.done, progress.total, progress.percent
        );
    }
}
