//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store appends into use-case level APIs.
//! - Keep UI layers decoupled from store internals.

pub mod board_service;
