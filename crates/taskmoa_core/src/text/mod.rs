//! Korean text processing primitives.
//!
//! # Responsibility
//! - Normalize raw titles into the canonical comparable form.
//! - Decompose/reassemble Hangul syllables at the jamo level.
//! - Extract keyword token sequences for the coarse similarity signal.
//!
//! # Invariants
//! - Every function in this module is pure and total: malformed input
//!   degrades to `""` or an empty sequence, never an error.

pub mod jamo;
pub mod keywords;
pub mod normalize;
