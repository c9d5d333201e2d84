//! Core domain logic for TaskMoa.
//!
//! Duplicate/near-duplicate detection and autocomplete suggestion over
//! Korean-language task titles: normalization, keyword extraction,
//! multi-signal similarity scoring and ranked-result assembly. Everything
//! around it (HTTP, notification delivery, calendar sync, UI) is an
//! external collaborator that talks to this crate through the
//! `TaskRepository` boundary.

pub mod db;
pub mod dedup;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod similarity;
pub mod text;

pub use dedup::detect::{
    detect_duplicates, generate_suggestions, DuplicateReport, ScoredTask,
    CROSS_CATEGORY_PENALTY, DEFAULT_SUGGESTION_LIMIT,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{CategoryId, TaskId, TaskRecord, TaskValidationError};
pub use repo::memory::MemoryTaskRepository;
pub use repo::task_repo::{
    RepoError, RepoResult, SqliteTaskRepository, TaskRepository, TaskStore,
};
pub use service::task_service::{CreatedTask, TaskService, TaskServiceError};
pub use similarity::score::{similarity, SimilarityScore};
pub use text::keywords::extract_keywords;
pub use text::normalize::normalize_title;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
