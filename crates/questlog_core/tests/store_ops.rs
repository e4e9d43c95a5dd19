use questlog_core::db::open_db_in_memory;
use questlog_core::{
    InvalidInput, Rank, RepoResult, SqliteStateRepository, StateRepository, StoreError, Task,
    TaskStore,
};
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

fn seeded_store(conn: &rusqlite::Connection) -> TaskStore<SqliteStateRepository<'_>> {
    TaskStore::load(SqliteStateRepository::new(conn)).unwrap()
}

fn recomputed_score(store: &TaskStore<impl StateRepository>) -> i64 {
    store.tasks().iter().map(Task::earned_points).sum()
}

#[test]
fn add_task_appends_without_changing_score() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);
    let before = store.tasks().len();

    let id = store.add_task("Evening walk", 3).unwrap().id;

    assert_eq!(store.tasks().len(), before + 1);
    assert_eq!(store.score(), 0);

    // Appended at the end with a single unchecked slot.
    let added = store.tasks().last().unwrap();
    assert_eq!(added.id, id);
    assert_eq!(added.name, "Evening walk");
    assert_eq!(added.slots, vec![false]);
}

#[test]
fn add_task_rejects_empty_name_and_non_positive_points() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);
    let before = store.tasks().len();

    let err = store.add_task("", 3).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidInput(InvalidInput::EmptyName)
    ));

    let err = store.add_task("Zero", 0).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidInput(InvalidInput::NonPositivePoints(0))
    ));

    let err = store.add_task("Negative", -4).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidInput(InvalidInput::NonPositivePoints(-4))
    ));

    assert_eq!(store.tasks().len(), before);
    assert_eq!(store.score(), 0);
}

#[test]
fn toggle_adds_and_removes_points() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);
    let id = store.add_task("Focused hour", 5).unwrap().id;

    store.toggle_slot(id, 0).unwrap();
    assert_eq!(store.score(), 5);

    store.toggle_slot(id, 0).unwrap();
    assert_eq!(store.score(), 0);
    let task = store.tasks().iter().find(|task| task.id == id).unwrap();
    assert_eq!(task.slots, vec![false]);
}

#[test]
fn toggle_unknown_task_or_slot_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);
    let id = store.add_task("Single slot", 2).unwrap().id;

    let missing = Uuid::new_v4();
    let err = store.toggle_slot(missing, 0).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { task_id, slot: None } if task_id == missing
    ));

    let err = store.toggle_slot(id, 1).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { task_id, slot: Some(1) } if task_id == id
    ));

    // Failed toggles leave state and score untouched.
    assert_eq!(store.score(), 0);
    assert_eq!(recomputed_score(&store), 0);
}

#[test]
fn score_matches_sum_of_earned_points_after_mixed_operations() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);

    let walk = store.add_task("Walk", 5).unwrap().id;
    let read = store.add_task("Read", 2).unwrap().id;

    let multi = store
        .tasks()
        .iter()
        .find(|task| task.name == "Exercise")
        .unwrap()
        .id;

    store.toggle_slot(walk, 0).unwrap();
    store.toggle_slot(multi, 0).unwrap();
    store.toggle_slot(multi, 4).unwrap();
    store.toggle_slot(read, 0).unwrap();
    store.toggle_slot(multi, 0).unwrap();
    store.toggle_slot(read, 0).unwrap();

    assert_eq!(store.score(), recomputed_score(&store));
    assert_eq!(store.score(), 5 + 3);
}

#[test]
fn rank_is_derived_from_current_score() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn);
    assert_eq!(store.rank(), Rank::Peasant);

    let id = store.add_task("Big win", 50).unwrap().id;
    store.toggle_slot(id, 0).unwrap();
    assert_eq!(store.rank(), Rank::Knight);
}

/// Repository double whose saves always fail, to exercise the
/// fire-and-forget persistence path.
struct FailingSaveRepo {
    save_attempts: Rc<Cell<u32>>,
}

impl StateRepository for FailingSaveRepo {
    fn save(&self, _tasks: &[Task], _score: i64) -> RepoResult<()> {
        self.save_attempts.set(self.save_attempts.get() + 1);
        let unencodable = serde_json::from_str::<i64>("not json").unwrap_err();
        Err(questlog_core::RepoError::Serialization(unencodable))
    }

    fn load(&self) -> RepoResult<(Vec<Task>, i64)> {
        Ok((Vec::new(), 0))
    }
}

#[test]
fn failed_saves_do_not_roll_back_in_memory_state() {
    let save_attempts = Rc::new(Cell::new(0));
    let repo = FailingSaveRepo {
        save_attempts: Rc::clone(&save_attempts),
    };
    let mut store = TaskStore::load(repo).unwrap();

    let id = store.add_task("Persist me", 4).unwrap().id;
    store.toggle_slot(id, 0).unwrap();

    assert_eq!(save_attempts.get(), 2);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.score(), 4);
}
