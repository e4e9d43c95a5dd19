//! Core domain logic for questlog, a gamified daily task tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::defaults::default_tasks;
pub use model::rank::Rank;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, SCORE_KEY, TASKS_KEY,
};
pub use service::task_store::{InvalidInput, StoreError, StoreResult, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
