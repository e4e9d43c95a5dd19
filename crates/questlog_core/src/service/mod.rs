//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory task list and score, and orchestrate persistence
//!   around every mutation.
//! - Keep presentation layers decoupled from storage details.

pub mod task_store;
