use questlog_core::{Task, TaskValidationError};
use serde_json::json;
use uuid::Uuid;

#[test]
fn new_task_starts_with_one_unchecked_slot() {
    let task = Task::new("Stretch", 3);

    assert!(!task.id.is_nil());
    assert_eq!(task.name, "Stretch");
    assert_eq!(task.slots, vec![false]);
    assert_eq!(task.points, 3);
    assert_eq!(task.earned_points(), 0);
}

#[test]
fn with_slots_clamps_zero_to_one_slot() {
    let task = Task::with_slots("Water", 0, 2);
    assert_eq!(task.slots.len(), 1);

    let task = Task::with_slots("Water", 4, 2);
    assert_eq!(task.slots.len(), 4);
}

#[test]
fn earned_points_counts_only_checked_slots() {
    let mut task = Task::with_slots("Exercise", 5, 3);
    assert_eq!(task.earned_points(), 0);

    task.toggle_slot(0).unwrap();
    task.toggle_slot(3).unwrap();
    assert_eq!(task.completed_count(), 2);
    assert_eq!(task.earned_points(), 6);
}

#[test]
fn toggle_out_of_bounds_leaves_task_unchanged() {
    let mut task = Task::new("Tea", 2);
    assert_eq!(task.toggle_slot(1), None);
    assert_eq!(task.slots, vec![false]);
}

#[test]
fn toggle_twice_restores_the_slot() {
    let mut task = Task::new("Tea", 2);
    assert_eq!(task.toggle_slot(0), Some(true));
    assert_eq!(task.toggle_slot(0), Some(false));
    assert_eq!(task.slots, vec![false]);
}

#[test]
fn validate_flags_each_broken_invariant() {
    let mut task = Task::new("", 1);
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyName));

    task.name = "ok".to_string();
    task.points = -2;
    assert_eq!(task.validate(), Err(TaskValidationError::NegativePoints(-2)));

    task.points = 0;
    task.slots.clear();
    assert_eq!(task.validate(), Err(TaskValidationError::NoSlots));

    task.slots.push(false);
    assert_eq!(task.validate(), Ok(()));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task = Task::new("Log H2O", 4);

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["id"], task.id.to_string());
    assert_eq!(value["name"], "Log H2O");
    assert_eq!(value["isCompleted"], json!([false]));
    assert_eq!(value["points"], 4);

    let decoded: Task = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserializes_blob_written_by_earlier_builds() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let raw = format!(
        r#"[{{"id":"{id}","name":"Fiber log","isCompleted":[true,false,true],"points":3}}]"#
    );

    let tasks: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].slots, vec![true, false, true]);
    assert_eq!(tasks[0].earned_points(), 6);
}
