//! Duplicate detection entry points.
//!
//! # Responsibility
//! - Orchestrate similarity scoring over a repository-backed corpus.
//! - Keep tier thresholds and the cross-category penalty in one place.
//!
//! # Invariants
//! - Stateless: every call fetches a fresh corpus snapshot and nothing
//!   outlives the returned report.

pub mod detect;
