//! Domain model for duplicate detection.
//!
//! # Responsibility
//! - Define the canonical task record and its write-path invariants.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Derived fields (`normalized_title`, `keywords`) are maintained at write
//!   time, never lazily on read.

pub mod task;
