//! Hangul syllable <-> compatibility jamo codec.
//!
//! # Responsibility
//! - Decompose precomposed syllables (U+AC00..=U+D7A3) into choseong,
//!   jungseong and jongseong compatibility jamo.
//! - Reassemble jamo runs back into syllables with a greedy automaton.
//!
//! # Invariants
//! - `compose(decompose(s)) == s` for any string of precomposed syllables.
//! - Compound vowels and finals are split into their parts on decompose
//!   (ㅘ -> ㅗㅏ, ㄳ -> ㄱㅅ) and greedily recombined on compose.
//! - Non-Hangul characters pass through both directions verbatim.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Leading consonants in Unicode syllable index order.
const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels in syllable index order, compound vowels split into parts.
const JUNGSEONG: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅗㅏ", "ㅗㅐ", "ㅗㅣ", "ㅛ", "ㅜ",
    "ㅜㅓ", "ㅜㅔ", "ㅜㅣ", "ㅠ", "ㅡ", "ㅡㅣ", "ㅣ",
];

/// Trailing consonants in syllable index order (0 = none), compound finals
/// split into parts.
const JONGSEONG: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ", "ㄹㅁ", "ㄹㅂ", "ㄹㅅ",
    "ㄹㅌ", "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ",
    "ㅎ",
];

/// Single-char jongseong jamo, paired with their syllable index.
const JONGSEONG_SINGLE: [(char, u32); 16] = [
    ('ㄱ', 1),
    ('ㄲ', 2),
    ('ㄴ', 4),
    ('ㄷ', 7),
    ('ㄹ', 8),
    ('ㅁ', 16),
    ('ㅂ', 17),
    ('ㅅ', 19),
    ('ㅆ', 20),
    ('ㅇ', 21),
    ('ㅈ', 22),
    ('ㅊ', 23),
    ('ㅋ', 24),
    ('ㅌ', 25),
    ('ㅍ', 26),
    ('ㅎ', 27),
];

/// Compound jongseong built from two already-placed consonants.
const JONGSEONG_PAIRS: [(u32, u32, u32); 11] = [
    (1, 19, 3),   // ㄱ + ㅅ = ㄳ
    (4, 22, 5),   // ㄴ + ㅈ = ㄵ
    (4, 27, 6),   // ㄴ + ㅎ = ㄶ
    (8, 1, 9),    // ㄹ + ㄱ = ㄺ
    (8, 16, 10),  // ㄹ + ㅁ = ㄻ
    (8, 17, 11),  // ㄹ + ㅂ = ㄼ
    (8, 19, 12),  // ㄹ + ㅅ = ㄽ
    (8, 25, 13),  // ㄹ + ㅌ = ㄾ
    (8, 26, 14),  // ㄹ + ㅍ = ㄿ
    (8, 27, 15),  // ㄹ + ㅎ = ㅀ
    (17, 19, 18), // ㅂ + ㅅ = ㅄ
];

/// Compound jungseong built from two plain vowels.
const JUNGSEONG_PAIRS: [(u32, u32, u32); 7] = [
    (8, 0, 9),   // ㅗ + ㅏ = ㅘ
    (8, 1, 10),  // ㅗ + ㅐ = ㅙ
    (8, 20, 11), // ㅗ + ㅣ = ㅚ
    (13, 4, 14), // ㅜ + ㅓ = ㅝ
    (13, 5, 15), // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

/// Plain compatibility vowels accepted by the composer, in syllable index
/// order positions (compound vowels are reached only via pair combination).
const VOWELS: [(char, u32); 21] = [
    ('ㅏ', 0),
    ('ㅐ', 1),
    ('ㅑ', 2),
    ('ㅒ', 3),
    ('ㅓ', 4),
    ('ㅔ', 5),
    ('ㅕ', 6),
    ('ㅖ', 7),
    ('ㅗ', 8),
    ('ㅘ', 9),
    ('ㅙ', 10),
    ('ㅚ', 11),
    ('ㅛ', 12),
    ('ㅜ', 13),
    ('ㅝ', 14),
    ('ㅞ', 15),
    ('ㅟ', 16),
    ('ㅠ', 17),
    ('ㅡ', 18),
    ('ㅢ', 19),
    ('ㅣ', 20),
];

/// Splits a precomposed syllable into (choseong, jungseong, jongseong)
/// syllable indexes. Returns `None` for anything outside the syllable block.
pub fn split_syllable(ch: char) -> Option<(u32, u32, u32)> {
    let code = ch as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let jong = offset % JONGSEONG_COUNT;
    Some((cho, jung, jong))
}

/// Decomposes every precomposed syllable in `text` into compatibility jamo.
///
/// Compound vowels and finals expand into their parts, so "값" becomes
/// "ㄱㅏㅂㅅ". Characters outside the syllable block (including standalone
/// jamo) are copied through unchanged.
pub fn decompose(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match split_syllable(ch) {
            Some((cho, jung, jong)) => {
                out.push(CHOSEONG[cho as usize]);
                out.push_str(JUNGSEONG[jung as usize]);
                out.push_str(JONGSEONG[jong as usize]);
            }
            None => out.push(ch),
        }
    }
    out
}

fn choseong_index(ch: char) -> Option<u32> {
    CHOSEONG
        .iter()
        .position(|&c| c == ch)
        .map(|index| index as u32)
}

fn vowel_index(ch: char) -> Option<u32> {
    VOWELS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, index)| *index)
}

fn jongseong_index(ch: char) -> Option<u32> {
    JONGSEONG_SINGLE
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, index)| *index)
}

fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    JUNGSEONG_PAIRS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, combined)| *combined)
}

fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    JONGSEONG_PAIRS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, combined)| *combined)
}

fn syllable_from_parts(cho: u32, jung: u32, jong: u32) -> char {
    let code = SYLLABLE_BASE + cho * JUNGSEONG_COUNT * JONGSEONG_COUNT + jung * JONGSEONG_COUNT
        + jong;
    // Indexes are bounded by the tables above, so the code point is always a
    // valid syllable; the fallback is unreachable in practice.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Pending syllable state for the composer automaton.
#[derive(Default)]
struct Pending {
    cho: Option<u32>,
    jung: Option<u32>,
    jong: Option<u32>,
}

impl Pending {
    fn flush(&mut self, out: &mut String) {
        match (self.cho.take(), self.jung.take(), self.jong.take()) {
            (Some(cho), Some(jung), jong) => {
                out.push(syllable_from_parts(cho, jung, jong.unwrap_or(0)));
            }
            (Some(cho), None, _) => out.push(CHOSEONG[cho as usize]),
            _ => {}
        }
    }
}

/// Reassembles compatibility jamo runs in `text` into precomposed syllables.
///
/// The automaton is greedy with one character of lookahead: a consonant after
/// a vowel becomes the current syllable's jongseong unless the next character
/// is a vowel, in which case it starts the next syllable. Jamo that cannot
/// take part in a syllable (for example a vowel with no leading consonant)
/// pass through verbatim.
pub fn compose(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pending = Pending::default();

    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];
        let next_is_vowel = chars
            .get(index + 1)
            .map(|&next| vowel_index(next).is_some())
            .unwrap_or(false);

        if let Some(vowel) = vowel_index(ch) {
            match (pending.cho, pending.jung) {
                (Some(_), None) => pending.jung = Some(vowel),
                (Some(_), Some(jung)) if pending.jong.is_none() => {
                    match combine_jungseong(jung, vowel) {
                        Some(combined) => pending.jung = Some(combined),
                        None => {
                            pending.flush(&mut out);
                            out.push(ch);
                        }
                    }
                }
                _ => {
                    pending.flush(&mut out);
                    out.push(ch);
                }
            }
        } else if let Some(cho) = choseong_index(ch) {
            if pending.cho.is_some() && pending.jung.is_some() && !next_is_vowel {
                // Candidate trailing consonant for the current syllable.
                match (pending.jong, jongseong_index(ch)) {
                    (None, Some(jong)) => pending.jong = Some(jong),
                    (Some(existing), Some(jong))
                        if combine_jongseong(existing, jong).is_some() =>
                    {
                        pending.jong = combine_jongseong(existing, jong);
                    }
                    _ => {
                        pending.flush(&mut out);
                        pending.cho = Some(cho);
                    }
                }
            } else {
                pending.flush(&mut out);
                pending.cho = Some(cho);
            }
        } else {
            pending.flush(&mut out);
            out.push(ch);
        }

        index += 1;
    }

    pending.flush(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::{compose, decompose, split_syllable};

    #[test]
    fn split_syllable_returns_index_parts() {
        // 한 = ㅎ(18) ㅏ(0) ㄴ(4)
        assert_eq!(split_syllable('한'), Some((18, 0, 4)));
        assert_eq!(split_syllable('a'), None);
        assert_eq!(split_syllable('ㅎ'), None);
    }

    #[test]
    fn decompose_expands_syllables_to_jamo() {
        assert_eq!(decompose("한글"), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(decompose("값"), "ㄱㅏㅂㅅ");
        assert_eq!(decompose("회의"), "ㅎㅗㅣㅇㅡㅣ");
    }

    #[test]
    fn decompose_passes_non_hangul_through() {
        assert_eq!(decompose("ab 한"), "ab ㅎㅏㄴ");
    }

    #[test]
    fn compose_reassembles_jamo_runs() {
        assert_eq!(compose("ㅎㅏㄴㄱㅡㄹ"), "한글");
        assert_eq!(compose("ㄱㅏㅂㅅ"), "값");
        assert_eq!(compose("ㅎㅗㅣㅇㅡㅣ"), "회의");
    }

    #[test]
    fn compose_moves_consonant_to_next_syllable_before_vowel() {
        // ㄴ must become the choseong of 자, not the jongseong of 하.
        assert_eq!(compose("ㅎㅏㄴㅈㅏ"), "한자");
    }

    #[test]
    fn compose_passes_unattachable_jamo_through() {
        assert_eq!(compose("ㅏㅏ"), "ㅏㅏ");
        assert_eq!(compose("ㄱㄱ"), "ㄱㄱ");
    }

    #[test]
    fn round_trip_is_identity_for_syllable_text() {
        for text in ["프로젝트 기획", "휴가 신청", "왜놔뷁 괜찮많음"] {
            assert_eq!(compose(&decompose(text)), text);
        }
    }

    #[test]
    fn compose_after_decompose_is_idempotent() {
        let once = compose(&decompose("ㅍㅡㄹㅗㅈㅔㄱㅌㅡ ok"));
        let twice = compose(&decompose(&once));
        assert_eq!(once, twice);
    }
}
