//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read capability boundary duplicate detection consumes.
//! - Isolate SQLite query details from scoring and service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `TaskRecord::validate()` before
//!   persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod memory;
pub mod task_repo;
