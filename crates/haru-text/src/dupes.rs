//! Duplicate word analysis.

/// Words the analysis keeps: ASCII alphanumerics, underscore and the
/// Hangul jamo and syllable ranges. Everything else is stripped before
/// splitting.
fn keep(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || ('\u{3131}'..='\u{314E}').contains(&c)
        || ('\u{314F}'..='\u{3163}').contains(&c)
        || ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Find words of two or more characters that occur more than once.
///
/// Matching is case-insensitive and ignores punctuation. The result is
/// sorted by count descending; ties keep first-appearance order.
pub fn duplicate_words(text: &str) -> Vec<(String, u32)> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| keep(c))
        .collect();

    let mut counts: Vec<(String, u32)> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() < 2 {
            continue;
        }
        match counts.iter_mut().find(|(w, _)| w.as_str() == word) {
            Some(entry) => entry.1 += 1,
            None => counts.push((word.to_string(), 1)),
        }
    }

    counts.retain(|(_, count)| *count > 1);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_repeated_words() {
        let dupes = duplicate_words("사과 바나나 사과 포도 사과 바나나");
        assert_eq!(
            dupes,
            vec![("사과".to_string(), 3), ("바나나".to_string(), 2)]
        );
    }

    #[test]
    fn no_duplicates_means_empty_result() {
        assert!(duplicate_words("하나 둘 셋").is_empty());
        assert!(duplicate_words("").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let dupes = duplicate_words("Rust rust RUST");
        assert_eq!(dupes, vec![("rust".to_string(), 3)]);
    }

    #[test]
    fn punctuation_is_stripped_before_matching() {
        let dupes = duplicate_words("hello, hello! (hello)");
        assert_eq!(dupes, vec![("hello".to_string(), 3)]);
    }

    #[test]
    fn single_character_words_are_ignored() {
        assert!(duplicate_words("a a a b b").is_empty());
        // Two-character words still count.
        let dupes = duplicate_words("ab ab");
        assert_eq!(dupes, vec![("ab".to_string(), 2)]);
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let dupes = duplicate_words("나무 나무 하늘 하늘 나무 나무 하늘 하늘");
        assert_eq!(
            dupes,
            vec![("나무".to_string(), 4), ("하늘".to_string(), 4)]
        );
    }

    #[test]
    fn hangul_jamo_survive_the_filter() {
        let dupes = duplicate_words("ㅋㅋ ㅋㅋ ㅠㅠ ㅠㅠ");
        assert_eq!(
            dupes,
            vec![("ㅋㅋ".to_string(), 2), ("ㅠㅠ".to_string(), 2)]
        );
    }
}
