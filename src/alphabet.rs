
pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Shortest word the solver will ever report.
pub const MIN_WORD_LEN: usize = 3;

/// Slot of `a` in the fixed child table, or `None` for anything outside a-z.
pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Returns the lowercased form of `word` when it may enter a dictionary:
/// letters only, and at least [`MIN_WORD_LEN`] of them once lowercased.
pub fn admit(word: &str) -> Option<String> {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    let lower = normalize(word);
    if lower.chars().count() < MIN_WORD_LEN {
        None
    } else {
        Some(lower)
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{admit, get_idx};

    #[test]
    fn indexes_lowercase_ascii_only() {
        assert_eq!(get_idx('a'), Some(0));
        assert_eq!(get_idx('z'), Some(25));
        assert_eq!(get_idx('A'), None);
        assert_eq!(get_idx('é'), None);
    }

    #[test]
    fn admits_alphabetic_words_of_three_or_more() {
        assert_eq!(admit("EGO"), Some("ego".to_string()));
        assert_eq!(admit("Quartz"), Some("quartz".to_string()));
        assert_eq!(admit("café"), Some("café".to_string()));
    }

    #[test]
    fn rejects_short_or_non_alphabetic_words() {
        for word in ["", "a", "ab", "QI", "ab1", "don't", "two words", "x-ray"] {
            assert_eq!(admit(word), None, "{:?} should be dropped", word);
        }
    }
}
