//! Persistence layer abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the save/load contract for durable app state.
//! - Isolate key-value storage details from store orchestration.
//!
//! # Invariants
//! - Missing or undecodable saved state is recovered locally (default
//!   list fallback), never surfaced as a caller-facing error.
//! - Only storage transport failures propagate as `Err`.

pub mod state_repo;
