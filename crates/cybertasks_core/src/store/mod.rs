//! In-memory entity storage.
//!
//! # Responsibility
//! - Own the task/project/notification collections for the process lifetime.
//! - Keep insertion order stable; it is the display order everywhere.
//!
//! # Invariants
//! - The store is the single owner of all entities; views only ever borrow.
//! - Appends never touch other collections (`Project.task_count` stays stale
//!   on purpose).

pub mod entity_store;
