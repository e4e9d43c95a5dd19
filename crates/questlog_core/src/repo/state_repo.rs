//! Durable state gateway: task list and score in key-value storage.
//!
//! # Responsibility
//! - Serialize the task list and score under two fixed keys.
//! - Restore saved state at startup, seeding the default list when no
//!   usable saved tasks exist.
//!
//! # Invariants
//! - The two keys are written independently, outside a transaction; a
//!   crash between the writes can leave them mutually inconsistent.
//! - Decode failures fall back to defaults and are logged, not returned.

use crate::db::DbError;
use crate::model::defaults::default_tasks;
use crate::model::task::Task;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the serialized task list.
pub const TASKS_KEY: &str = "savedTasks";
/// Storage key for the running score.
pub const SCORE_KEY: &str = "savedScore";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for state save/load operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Gateway contract for persisting and restoring app state.
pub trait StateRepository {
    /// Writes the task list and score under their fixed keys.
    fn save(&self, tasks: &[Task], score: i64) -> RepoResult<()>;

    /// Reads saved state, falling back to the default task list when the
    /// saved tasks are missing or undecodable. The score key is honored
    /// independently of whether the tasks fell back.
    fn load(&self) -> RepoResult<(Vec<Task>, i64)>;
}

/// SQLite-backed state repository over the `kv_store` table.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.read_value(TASKS_KEY)? else {
            info!("event=state_load module=repo status=ok source=defaults reason=missing");
            return Ok(default_tasks());
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                info!(
                    "event=state_load module=repo status=ok source=saved task_count={}",
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                error!(
                    "event=state_load module=repo status=error error_code=decode_failed error={err}"
                );
                Ok(default_tasks())
            }
        }
    }

    fn load_score(&self) -> RepoResult<i64> {
        let Some(raw) = self.read_value(SCORE_KEY)? else {
            return Ok(0);
        };

        match raw.parse::<i64>() {
            Ok(score) => Ok(score),
            Err(err) => {
                error!(
                    "event=state_load module=repo status=error error_code=score_decode_failed error={err}"
                );
                Ok(0)
            }
        }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn save(&self, tasks: &[Task], score: i64) -> RepoResult<()> {
        let encoded = serde_json::to_string(tasks).map_err(RepoError::Serialization)?;

        // Two independent writes, matching the historical save path.
        self.write_value(TASKS_KEY, &encoded)?;
        self.write_value(SCORE_KEY, &score.to_string())?;
        Ok(())
    }

    fn load(&self) -> RepoResult<(Vec<Task>, i64)> {
        let tasks = self.load_tasks()?;
        let score = self.load_score()?;
        Ok((tasks, score))
    }
}

fn decode_tasks(raw: &str) -> Result<Vec<Task>, String> {
    let tasks: Vec<Task> = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    for task in &tasks {
        task.validate()
            .map_err(|err| format!("task {}: {err}", task.id))?;
    }
    Ok(tasks)
}
