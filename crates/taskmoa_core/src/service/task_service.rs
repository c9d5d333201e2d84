//! Task use-case service.
//!
//! # Responsibility
//! - Provide task create/rename/get/list APIs over a store implementation.
//! - Keep `normalized_title` and `keywords` derived by the core at every
//!   write, so stored candidates always compare normalized-against-
//!   normalized.
//! - Surface the duplicate report alongside task creation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The duplicate report for a create is computed against the pre-insert
//!   corpus; the new task never reports itself as a duplicate.

use crate::dedup::detect::{detect_duplicates, DuplicateReport};
use crate::model::task::{CategoryId, TaskId, TaskRecord};
use crate::repo::task_repo::{RepoError, RepoResult, TaskStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Title input is empty or whitespace-only.
    InvalidTitle,
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "task title cannot be empty"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent task state: {details}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Creation result pairing the stored record with its duplicate verdict.
#[derive(Debug, Clone)]
pub struct CreatedTask {
    pub task: TaskRecord,
    /// Duplicate check against the corpus as it was before this insert.
    pub duplicates: DuplicateReport,
}

/// Task service facade over store implementations.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task and reports duplicates found among existing tasks.
    ///
    /// Derived fields are computed here; callers pass only the raw title.
    pub fn create_task(
        &self,
        title: impl Into<String>,
        category: CategoryId,
    ) -> Result<CreatedTask, TaskServiceError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskServiceError::InvalidTitle);
        }

        let duplicates = detect_duplicates(&self.store, &title, category)?;

        let task = TaskRecord::new(title, category);
        let id = self.store.create_task(&task)?;
        let task = self
            .store
            .get_task(id)?
            .ok_or(TaskServiceError::InconsistentState(
                "created task not found in read-back",
            ))?;

        Ok(CreatedTask { task, duplicates })
    }

    /// Replaces a task title, recomputing every derived field.
    pub fn rename_task(
        &self,
        id: TaskId,
        title: impl Into<String>,
    ) -> Result<TaskRecord, TaskServiceError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskServiceError::InvalidTitle);
        }

        let mut task = self
            .store
            .get_task(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        task.set_title(title);
        self.store.update_task(&task)?;

        self.store
            .get_task(id)?
            .ok_or(TaskServiceError::InconsistentState(
                "renamed task not found in read-back",
            ))
    }

    /// Gets one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<TaskRecord>> {
        self.store.get_task(id)
    }

    /// Lists every task in `category`.
    pub fn list_by_category(&self, category: CategoryId) -> RepoResult<Vec<TaskRecord>> {
        self.store.find_by_category(category)
    }

    /// Deletes a task by stable ID.
    pub fn delete_task(&self, id: TaskId) -> Result<(), TaskServiceError> {
        self.store.delete_task(id)?;
        Ok(())
    }
}
