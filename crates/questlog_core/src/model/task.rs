//! Task domain model.
//!
//! # Responsibility
//! - Define the repeatable daily task record with its completion slots.
//! - Provide the pure earned-points calculation used for display.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `slots` holds at least one entry; its length is fixed at creation.
//! - `points` is non-negative (a zero-point task is legal seed data).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to a task at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A named daily item with one or more independently toggleable
/// completion slots and a per-slot point value.
///
/// The serialized shape matches the persisted blob layout: `slots` is
/// written as `isCompleted` so state saved by earlier builds decodes
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup and toggling.
    pub id: TaskId,
    /// Display name shown in the list.
    pub name: String,
    /// One flag per daily repetition; serialized as `isCompleted`.
    #[serde(rename = "isCompleted")]
    pub slots: Vec<bool>,
    /// Points awarded per completed slot.
    pub points: i64,
}

/// Validation failure for task construction or persisted task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyName,
    NegativePoints(i64),
    NoSlots,
}

impl std::fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name cannot be empty"),
            Self::NegativePoints(points) => {
                write!(f, "task point value cannot be negative, got {points}")
            }
            Self::NoSlots => write!(f, "task must have at least one completion slot"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

impl Task {
    /// Creates a new task with a generated stable ID and a single
    /// unchecked completion slot.
    ///
    /// This is the shape produced by the add-task action; multi-slot
    /// tasks only enter the system through the seeded default list.
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self::with_slots(name, 1, points)
    }

    /// Creates a new task with `slot_count` unchecked completion slots.
    ///
    /// # Invariants
    /// - `slot_count` of zero is clamped to one slot.
    pub fn with_slots(name: impl Into<String>, slot_count: usize, points: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slots: vec![false; slot_count.max(1)],
            points,
        }
    }

    /// Checks model invariants; used on write paths and when decoding
    /// persisted state.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.name.is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        if self.points < 0 {
            return Err(TaskValidationError::NegativePoints(self.points));
        }
        if self.slots.is_empty() {
            return Err(TaskValidationError::NoSlots);
        }
        Ok(())
    }

    /// Flips one completion slot and returns its new value.
    ///
    /// Returns `None` when `slot` is out of bounds; the task is
    /// unchanged in that case.
    pub fn toggle_slot(&mut self, slot: usize) -> Option<bool> {
        let flag = self.slots.get_mut(slot)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Number of slots currently checked off.
    pub fn completed_count(&self) -> usize {
        self.slots.iter().filter(|done| **done).count()
    }

    /// Pure display helper: `points × completed slot count`.
    ///
    /// Never stored; the running score is maintained incrementally by
    /// the task store instead.
    pub fn earned_points(&self) -> i64 {
        self.points * self.completed_count() as i64
    }
}
