//! Keyword extraction from task titles.
//!
//! # Responsibility
//! - Split a title into a coarse bag-of-words token sequence.
//!
//! # Invariants
//! - Source order is preserved; duplicate tokens are retained.
//! - Single-character tokens are dropped (negligible signal in short Korean
//!   titles).

/// Extracts keyword tokens from `text`.
///
/// Whitespace splitting only; downstream scoring treats the sequence as a
/// joined string, so no deduplication or stemming happens here. A linguistic
/// tokenizer can replace this function without touching any other component.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Joins a keyword sequence into the single comparison string used by the
/// keyword similarity signal.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{extract_keywords, join_keywords};

    #[test]
    fn empty_input_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(extract_keywords("a 프로젝트 b 기획"), vec!["프로젝트", "기획"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            extract_keywords("리뷰 준비 리뷰"),
            vec!["리뷰", "준비", "리뷰"]
        );
    }

    #[test]
    fn joined_keywords_use_single_spaces() {
        let keywords = extract_keywords("주간  회의   자료");
        assert_eq!(join_keywords(&keywords), "주간 회의 자료");
    }
}
