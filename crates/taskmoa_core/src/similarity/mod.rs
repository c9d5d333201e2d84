//! Title similarity scoring.
//!
//! # Responsibility
//! - Expose the three-signal weighted similarity used by duplicate
//!   detection and autocomplete suggestion.
//!
//! # Invariants
//! - Weights are fixed constants; callers needing other combinations
//!   recombine the exposed sub-scores themselves.

pub mod score;
