//! Domain model for the daily task list.
//!
//! # Responsibility
//! - Define the canonical task record and its completion-slot semantics.
//! - Derive the cosmetic rank title from the running score.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - A task always carries at least one completion slot.
//! - Rank is recomputed from score on read, never stored.

pub mod defaults;
pub mod rank;
pub mod task;
