//! Seed task list used when no saved state exists.
//!
//! # Responsibility
//! - Provide the fixed first-run task list as a literal data table.
//!
//! # Invariants
//! - Entries, slot counts and point values are part of the behavioral
//!   contract and must not be edited casually.

use crate::model::task::Task;

/// (name, slot count, points) for every seeded task, in display order.
const DEFAULT_TASK_TABLE: &[(&str, usize, i64)] = &[
    ("Tea", 1, 2),
    ("Breakfast", 1, 2),
    ("Fiber log", 3, 3),
    ("Protein log", 3, 3),
    ("Vitamins", 1, 1),
    ("Shower", 1, 2),
    ("Brain dump", 1, 2),
    ("Time block", 1, 2),
    ("Log H2O", 4, 4),
    ("No Snooze", 1, 0),
    ("Probiotic", 1, 1),
    ("Teeth until 10", 1, 1),
    ("Lucid check", 1, 2),
    ("Prep for tomorrow", 1, 4),
    ("Prep lunch", 1, 1),
    ("Dishes", 1, 2),
    ("Trash", 1, 1),
    ("Clean", 3, 1),
    ("Finances", 1, 3),
    ("Laundry", 1, 3),
    ("Detoxifier", 1, 3),
    ("Learn", 5, 3),
    ("Hobby", 1, 3),
    ("Log H2O before bed", 1, 2),
    ("Dinner by 10", 1, 2),
    ("Focused hour", 1, 5),
    ("Puppy bathroom", 1, 5),
    ("Puppy walk", 1, 5),
    ("Sourdough", 1, 3),
    ("Plants", 1, 3),
    ("Exercise", 5, 3),
    ("Kombucha", 1, 3),
    ("Deep Clean 1 Room", 1, 10),
];

/// Builds the default task list with fresh IDs and all slots unchecked.
///
/// Called on first run and whenever the saved task blob is missing or
/// fails to decode.
pub fn default_tasks() -> Vec<Task> {
    DEFAULT_TASK_TABLE
        .iter()
        .map(|&(name, slot_count, points)| Task::with_slots(name, slot_count, points))
        .collect()
}
