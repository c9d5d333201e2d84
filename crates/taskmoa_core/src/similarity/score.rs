//! Multi-signal title similarity scoring.
//!
//! # Responsibility
//! - Combine string, keyword and phonetic signals into one weighted score.
//!
//! # Invariants
//! - Every sub-score and the overall score stay inside [0, 1].
//! - `similarity(a, b)` equals `similarity(b, a)` up to float rounding.
//! - Scoring is pure: no I/O, no shared state.

use crate::text::jamo;
use crate::text::keywords::{extract_keywords, join_keywords};
use serde::Serialize;

/// Weight of the raw string signal in the overall score.
pub const STRING_WEIGHT: f64 = 0.4;
/// Weight of the keyword-sequence signal in the overall score.
pub const KEYWORD_WEIGHT: f64 = 0.4;
/// Weight of the jamo-level phonetic signal in the overall score.
pub const PHONETIC_WEIGHT: f64 = 0.2;

/// Composite similarity between two titles.
///
/// `overall` is the effective score used for tiering; the sub-scores stay
/// raw so callers needing a different weighting can recombine them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// Bigram-overlap similarity between the inputs as given.
    pub string: f64,
    /// Prefix-weighted similarity between joined keyword sequences.
    pub keyword: f64,
    /// Bigram-overlap similarity between decomposed jamo sequences.
    pub phonetic: f64,
    /// Weighted combination, possibly discounted by a tier penalty.
    pub overall: f64,
}

impl SimilarityScore {
    /// The all-zero score returned for empty inputs.
    pub fn zero() -> Self {
        Self {
            string: 0.0,
            keyword: 0.0,
            phonetic: 0.0,
            overall: 0.0,
        }
    }

    /// Applies a multiplicative discount to the overall score only.
    ///
    /// Sub-scores are left untouched so the raw signals remain inspectable
    /// after a cross-category penalty.
    pub fn penalized(self, factor: f64) -> Self {
        Self {
            overall: self.overall * factor,
            ..self
        }
    }
}

/// Scores the similarity of two titles.
///
/// Callers pass already-normalized text; this function does not normalize.
/// Either side empty yields the all-zero score (no comparison possible, not
/// an error).
///
/// Signals:
/// - string: Sørensen–Dice bigram overlap on the inputs (whitespace
///   insensitive, 1.0 for identical strings),
/// - keyword: Jaro-Winkler on space-joined keyword sequences (two empty
///   sequences count as identical, one empty as disjoint),
/// - phonetic: Dice overlap on jamo decompositions, deliberately left
///   unassembled so jamo-level near-misses still overlap.
pub fn similarity(a: &str, b: &str) -> SimilarityScore {
    if a.is_empty() || b.is_empty() {
        return SimilarityScore::zero();
    }

    let string = strsim::sorensen_dice(a, b);

    let keywords_a = join_keywords(&extract_keywords(a));
    let keywords_b = join_keywords(&extract_keywords(b));
    let keyword = strsim::jaro_winkler(&keywords_a, &keywords_b);

    let phonetic = strsim::sorensen_dice(&jamo::decompose(a), &jamo::decompose(b));

    let overall = STRING_WEIGHT * string + KEYWORD_WEIGHT * keyword + PHONETIC_WEIGHT * phonetic;

    SimilarityScore {
        string,
        keyword,
        phonetic,
        overall,
    }
}
