//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record consumed by duplicate detection.
//! - Keep `normalized_title` and `keywords` derived from `title` at every
//!   write.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `normalized_title` is always the normalizer output for `title` at the
//!   time of last write; stored values are trusted on read and never lazily
//!   recomputed.

use crate::text::keywords::extract_keywords;
use crate::text::normalize::normalize_title;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
pub type TaskId = Uuid;

/// Stable identifier for a task category.
///
/// Categories themselves live in the surrounding application; the core only
/// compares identifiers for exact identity.
pub type CategoryId = Uuid;

/// Validation failure for task write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// `normalized_title` does not match the normalizer output for `title`.
    StaleNormalizedTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::StaleNormalizedTitle => {
                write!(f, "normalized_title is out of sync with title")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record shared with the surrounding application.
///
/// Serialized with camelCase field names to match the external schema
/// (`normalized_title` round-trips as `normalizedTitle`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Stable global ID used for linking and auditing.
    pub id: TaskId,
    /// Raw title as entered by the user.
    pub title: String,
    /// Canonical comparable form of `title`, maintained at write time.
    pub normalized_title: String,
    /// Owning category; compared by exact identity only.
    pub category: CategoryId,
    /// Whitespace-split keyword tokens derived from `title`.
    pub keywords: Vec<String>,
}

impl TaskRecord {
    /// Creates a task with a generated stable ID and derived fields.
    pub fn new(title: impl Into<String>, category: CategoryId) -> Self {
        Self::with_id(Uuid::new_v4(), title, category)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    /// Derived fields are recomputed from `title` either way.
    pub fn with_id(id: TaskId, title: impl Into<String>, category: CategoryId) -> Self {
        let title = title.into();
        let normalized_title = normalize_title(&title);
        let keywords = extract_keywords(&normalized_title);
        Self {
            id,
            title,
            normalized_title,
            category,
            keywords,
        }
    }

    /// Replaces the title and recomputes every derived field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.normalized_title = normalize_title(&self.title);
        self.keywords = extract_keywords(&self.normalized_title);
    }

    /// Checks write-path invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `StaleNormalizedTitle` when derived state drifted from `title`,
    ///   which happens only when fields were mutated directly.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.normalized_title != normalize_title(&self.title) {
            return Err(TaskValidationError::StaleNormalizedTitle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskRecord, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn new_task_derives_normalized_title_and_keywords() {
        let task = TaskRecord::new("프로젝트 기획!!", Uuid::new_v4());
        assert_eq!(task.normalized_title, "프로젝트 기획");
        assert_eq!(task.keywords, vec!["프로젝트", "기획"]);
        assert!(task.validate().is_ok());
    }

    #[test]
    fn set_title_recomputes_derived_fields() {
        let mut task = TaskRecord::new("초안", Uuid::new_v4());
        task.set_title("주간 회의 준비");
        assert_eq!(task.normalized_title, "주간 회의 준비");
        assert_eq!(task.keywords, vec!["주간", "회의", "준비"]);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut task = TaskRecord::new("자료 정리", Uuid::new_v4());
        task.title = "   ".to_string();
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_drifted_normalized_title() {
        let mut task = TaskRecord::new("자료 정리", Uuid::new_v4());
        task.normalized_title = "다른 값".to_string();
        assert_eq!(
            task.validate(),
            Err(TaskValidationError::StaleNormalizedTitle)
        );
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let task = TaskRecord::new("회의 준비", Uuid::new_v4());
        let json = serde_json::to_value(&task).expect("task should serialize");
        assert!(json.get("normalizedTitle").is_some());
        assert!(json.get("keywords").is_some());
    }
}
