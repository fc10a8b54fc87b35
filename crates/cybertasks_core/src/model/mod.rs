//! Domain model for the task/project dashboard.
//!
//! # Responsibility
//! - Define the canonical records held by the entity store.
//! - Keep model shapes free of any UI or rendering types.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid assigned at creation.
//! - Entities are append-only; there is no update or delete lifecycle.

pub mod notification;
pub mod project;
pub mod task;
