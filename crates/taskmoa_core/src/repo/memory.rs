//! In-memory task repository.
//!
//! # Responsibility
//! - Provide a storage-free `TaskRepository`/`TaskStore` implementation for
//!   tests and embedders without SQLite.
//!
//! # Invariants
//! - Same write-path validation as the SQLite implementation.
//! - Iteration order is insertion order, which keeps tie-breaking in the
//!   detector deterministic.
//! - Single-threaded: interior mutability via `RefCell`, not a lock.

use crate::model::task::{CategoryId, TaskId, TaskRecord};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository, TaskStore};
use std::cell::RefCell;

/// Insertion-ordered in-memory task store.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    tasks: RefCell<Vec<TaskRecord>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-populated with `tasks`, keeping their order.
    pub fn with_tasks(tasks: Vec<TaskRecord>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
        }
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Whether the repository holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn find_by_category(&self, category: CategoryId) -> RepoResult<Vec<TaskRecord>> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|task| task.category == category)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> RepoResult<Vec<TaskRecord>> {
        Ok(self.tasks.borrow().clone())
    }
}

impl TaskStore for MemoryTaskRepository {
    fn create_task(&self, task: &TaskRecord) -> RepoResult<TaskId> {
        task.validate()?;
        self.tasks.borrow_mut().push(task.clone());
        Ok(task.id)
    }

    fn update_task(&self, task: &TaskRecord) -> RepoResult<()> {
        task.validate()?;
        let mut tasks = self.tasks.borrow_mut();
        match tasks.iter_mut().find(|stored| stored.id == task.id) {
            Some(stored) => {
                *stored = task.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(task.id)),
        }
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<TaskRecord>> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .find(|task| task.id == id)
            .cloned())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryTaskRepository;
    use crate::model::task::TaskRecord;
    use crate::repo::task_repo::{RepoError, TaskRepository, TaskStore};
    use uuid::Uuid;

    #[test]
    fn create_and_find_by_category() {
        let repo = MemoryTaskRepository::new();
        let category = Uuid::new_v4();
        let other = Uuid::new_v4();
        repo.create_task(&TaskRecord::new("회의 준비", category))
            .unwrap();
        repo.create_task(&TaskRecord::new("서버 배포", other)).unwrap();

        let in_category = repo.find_by_category(category).unwrap();
        assert_eq!(in_category.len(), 1);
        assert_eq!(in_category[0].title, "회의 준비");
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn update_missing_task_reports_not_found() {
        let repo = MemoryTaskRepository::new();
        let task = TaskRecord::new("회의 준비", Uuid::new_v4());
        assert!(matches!(
            repo.update_task(&task),
            Err(RepoError::NotFound(id)) if id == task.id
        ));
    }

    #[test]
    fn create_rejects_invalid_records() {
        let repo = MemoryTaskRepository::new();
        let mut task = TaskRecord::new("회의 준비", Uuid::new_v4());
        task.normalized_title = "불일치".to_string();
        assert!(matches!(
            repo.create_task(&task),
            Err(RepoError::Validation(_))
        ));
        assert!(repo.is_empty());
    }
}
