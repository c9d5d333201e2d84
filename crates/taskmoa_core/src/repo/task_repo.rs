//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the read capability boundary consumed by duplicate detection.
//! - Provide the write-path contract that keeps derived fields in sync.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `TaskRecord::validate()` before SQL mutations.
//! - Read paths trust the persisted `normalized_title` (the core never
//!   recomputes it for stored candidates) but reject structurally invalid
//!   rows instead of masking them.

use crate::db::DbError;
use crate::model::task::{CategoryId, TaskId, TaskRecord, TaskValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    normalized_title,
    category,
    keywords
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
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

/// Read capability boundary consumed by duplicate detection and suggestion
/// generation. Exactly the two queries the scoring pass needs; any storage
/// backend (or an in-memory fake) can implement it.
pub trait TaskRepository {
    /// Returns every task sharing `category`, derived fields populated.
    fn find_by_category(&self, category: CategoryId) -> RepoResult<Vec<TaskRecord>>;
    /// Returns every task record, derived fields populated.
    fn find_all(&self) -> RepoResult<Vec<TaskRecord>>;
}

/// Write-path contract layered on top of the read boundary.
///
/// Implementations must persist records whose `normalized_title` and
/// `keywords` were derived by this core at write time.
pub trait TaskStore: TaskRepository {
    fn create_task(&self, task: &TaskRecord) -> RepoResult<TaskId>;
    fn update_task(&self, task: &TaskRecord) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<TaskRecord>>;
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn find_by_category(&self, category: CategoryId) -> RepoResult<Vec<TaskRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE category = ?1
             ORDER BY updated_at DESC, uuid ASC;"
        ))?;

        let mut rows = stmt.query(params![category.to_string()])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn find_all(&self) -> RepoResult<Vec<TaskRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY updated_at DESC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

impl TaskStore for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &TaskRecord) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (uuid, title, normalized_title, category, keywords)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                task.id.to_string(),
                task.title.as_str(),
                task.normalized_title.as_str(),
                task.category.to_string(),
                task.keywords.join(" "),
            ],
        )?;

        Ok(task.id)
    }

    fn update_task(&self, task: &TaskRecord) -> RepoResult<()> {
        task.validate()?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                normalized_title = ?2,
                category = ?3,
                keywords = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?5;",
            params![
                task.title.as_str(),
                task.normalized_title.as_str(),
                task.category.to_string(),
                task.keywords.join(" "),
                task.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id));
        }

        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<TaskRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<TaskRecord> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let category_text: String = row.get("category")?;
    let category = Uuid::parse_str(&category_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{category_text}` in tasks.category"
        ))
    })?;

    let keywords_text: String = row.get("keywords")?;
    let keywords = keywords_text
        .split_whitespace()
        .map(str::to_string)
        .collect();

    // Stored derived fields are trusted as written; renormalizing here would
    // violate the write-time-only contract for normalized_title.
    Ok(TaskRecord {
        id,
        title: row.get("title")?,
        normalized_title: row.get("normalized_title")?,
        category,
        keywords,
    })
}
