//! Task store: the single owner of the task list and running score.
//!
//! # Responsibility
//! - Apply add-task and toggle-slot mutations with their score effects.
//! - Trigger a save after every mutation.
//!
//! # Invariants
//! - `score == Σ points × completed slots` holds after every mutation
//!   applied through this store.
//! - Slot flip and score adjustment are applied together in memory
//!   before the save attempt; there is no partial-failure state.
//! - Save failures are logged and swallowed; in-memory state stays
//!   authoritative until the next successful save.

use crate::model::rank::Rank;
use crate::model::task::{Task, TaskId};
use crate::repo::state_repo::{RepoResult, StateRepository};
use log::{info, warn};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected add-task arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyName,
    NonPositivePoints(i64),
}

/// Operation error for task store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Add-task arguments were rejected; nothing was added.
    InvalidInput(InvalidInput),
    /// Unknown task ID, or a slot index past the end of the task.
    NotFound {
        task_id: TaskId,
        slot: Option<usize>,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(InvalidInput::EmptyName) => {
                write!(f, "task name cannot be empty")
            }
            Self::InvalidInput(InvalidInput::NonPositivePoints(points)) => {
                write!(f, "task point value must be positive, got {points}")
            }
            Self::NotFound {
                task_id,
                slot: Some(slot),
            } => write!(f, "task {task_id} has no completion slot {slot}"),
            Self::NotFound { task_id, slot: None } => write!(f, "task not found: {task_id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory task store backed by a state repository.
///
/// Exactly one instance exists per session; all operations run on the
/// caller's thread with no internal locking.
pub struct TaskStore<R: StateRepository> {
    repo: R,
    tasks: Vec<Task>,
    score: i64,
}

impl<R: StateRepository> TaskStore<R> {
    /// Restores the store from saved state (or the seeded default list).
    pub fn load(repo: R) -> RepoResult<Self> {
        let (tasks, score) = repo.load()?;
        info!(
            "event=store_init module=store status=ok task_count={} score={score}",
            tasks.len()
        );
        Ok(Self { repo, tasks, score })
    }

    /// Appends a new single-slot task to the end of the list.
    ///
    /// Rejects an empty name or a non-positive point value; the list and
    /// score are untouched in that case. A successful add never changes
    /// the score since the new task starts fully incomplete.
    pub fn add_task(&mut self, name: impl Into<String>, points: i64) -> StoreResult<&Task> {
        let name = name.into();
        if name.is_empty() {
            warn!("event=add_task module=store status=rejected reason=empty_name");
            return Err(StoreError::InvalidInput(InvalidInput::EmptyName));
        }
        if points < 1 {
            warn!("event=add_task module=store status=rejected reason=non_positive_points points={points}");
            return Err(StoreError::InvalidInput(InvalidInput::NonPositivePoints(
                points,
            )));
        }

        let task = Task::new(name, points);
        info!(
            "event=add_task module=store status=ok task_id={} points={points}",
            task.id
        );
        let index = self.tasks.len();
        self.tasks.push(task);
        self.persist();

        Ok(&self.tasks[index])
    }

    /// Flips one completion slot and adjusts the score by the task's
    /// point value (up when the slot became checked, down otherwise).
    pub fn toggle_slot(&mut self, task_id: TaskId, slot: usize) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(StoreError::NotFound {
                task_id,
                slot: None,
            })?;

        let now_checked = task.toggle_slot(slot).ok_or(StoreError::NotFound {
            task_id,
            slot: Some(slot),
        })?;

        if now_checked {
            self.score += task.points;
        } else {
            self.score -= task.points;
        }
        self.persist();

        Ok(())
    }

    /// Tasks in insertion order (order is significant for display).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current running score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Rank derived from the current score; recomputed on every read.
    pub fn rank(&self) -> Rank {
        Rank::for_score(self.score)
    }

    /// Fire-and-forget save. A failed save leaves the in-memory state
    /// ahead of disk until the next mutation saves successfully.
    fn persist(&self) {
        if let Err(err) = self.repo.save(&self.tasks, self.score) {
            warn!("event=state_save module=store status=error error={err}");
        }
    }
}
