//! Task title normalization for duplicate comparison.
//!
//! # Responsibility
//! - Canonicalize raw Korean/mixed titles into the comparable form stored as
//!   `normalized_title`.
//!
//! # Invariants
//! - `normalize_title` is pure, deterministic and idempotent.
//! - Empty input yields an empty string; no input ever fails.
//! - Stored `normalized_title` values are produced only through this function
//!   at write time; read paths never recompute them.

use crate::text::jamo;
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not a word character, whitespace or a precomposed
/// Hangul syllable is stripped; `_` counts as punctuation here despite being
/// a word character.
static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s가-힣]|_").expect("valid strip regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Normalizes a raw task title into its canonical comparable form.
///
/// Steps, in order:
/// 1. strip punctuation and symbols (including `_`),
/// 2. decompose Hangul syllables to jamo and reassemble them, which collapses
///    typed-out jamo runs (for example `ㅎㅏㄴ글`) onto the same
///    representation as their precomposed equivalent,
/// 3. lowercase (ASCII letters only; Hangul is unaffected),
/// 4. collapse whitespace runs to a single space and trim.
///
/// Jamo that cannot form a syllable pass through verbatim.
pub fn normalize_title(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = STRIP_RE.replace_all(text, "");
    let canonical = jamo::compose(&jamo::decompose(&stripped));
    let lowered = canonical.to_lowercase();
    WHITESPACE_RE.replace_all(&lowered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_title;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn strips_punctuation_and_underscores() {
        assert_eq!(normalize_title("프로젝트_기획!! (v2)"), "프로젝트기획 v2");
    }

    #[test]
    fn lowercases_ascii_and_collapses_whitespace() {
        assert_eq!(normalize_title("  API   리뷰\t준비 "), "api 리뷰 준비");
    }

    #[test]
    fn recombines_typed_out_jamo_runs() {
        assert_eq!(normalize_title("ㅎㅏㄴ글 공부"), "한글 공부");
    }

    #[test]
    fn passes_unattachable_jamo_through() {
        assert_eq!(normalize_title("ㅋㅋ 재밌다"), "ㅋㅋ 재밌다");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "프로젝트 기획",
            "ㅎㅏㄴ글!! 공부_",
            "  Mixed 한글 Title  ",
            "ㅏㅏ 모음만",
        ] {
            let once = normalize_title(raw);
            assert_eq!(normalize_title(&once), once);
        }
    }
}
