//! Derived read views over the entity store.
//!
//! # Responsibility
//! - Compute dashboard summaries, kanban partitions and project progress as
//!   pure functions over store snapshots.
//!
//! # Invariants
//! - Derivations never mutate their inputs; the same snapshot always yields
//!   the same value.
//! - Every derived sequence preserves original insertion order; no secondary
//!   sort key exists anywhere in this layer.
//! - Percentages are integers in `0..=100` and never come from a division by
//!   zero.

pub mod board;
pub mod dashboard;

/// Nearest-integer percentage of `part` in `total`, with an explicit empty
/// policy: 0 when `total` is zero.
pub(crate) fn rounded_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}
