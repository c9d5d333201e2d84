use taskmoa_core::normalize_title;

#[test]
fn empty_input_normalizes_to_empty_string() {
    assert_eq!(normalize_title(""), "");
    assert_eq!(normalize_title(" \t\n "), "");
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "프로젝트 기획",
        "  휴가_신청!!  ",
        "Weekly 회의 (준비)",
        "ㅎㅏㄴ글 쓰기",
        "ㅋㅋ 자모만 ㅏㅏ",
        "서버 배포 v1.2",
    ];
    for raw in samples {
        let once = normalize_title(raw);
        assert_eq!(normalize_title(&once), once, "not idempotent for `{raw}`");
    }
}

#[test]
fn punctuation_symbols_and_underscores_are_stripped() {
    assert_eq!(normalize_title("휴가_신청!!"), "휴가신청");
    assert_eq!(normalize_title("회의(주간) - 자료"), "회의주간 자료");
}

#[test]
fn ascii_is_lowercased_and_whitespace_collapsed() {
    assert_eq!(normalize_title("  API   Review  문서 "), "api review 문서");
}

#[test]
fn hangul_canonicalization_matches_precomposed_form() {
    // A typed-out jamo run and the precomposed syllables normalize to the
    // same representation.
    assert_eq!(normalize_title("ㅎㅏㄴ글 공부"), normalize_title("한글 공부"));
}

#[test]
fn normalized_output_only_changes_representation_not_order() {
    let normalized = normalize_title("디자인 리뷰 준비");
    assert_eq!(normalized, "디자인 리뷰 준비");
}
