//! Dictionary seeding passes
//!
//! Two passes bootstrap the dictionary before the peeling rounds start:
//!
//! 1. Capital-boundary extraction: a token like `FooBar` is split on its
//!    internal capital-letter boundaries into lowercase roots (`foo`, `bar`).
//!    Tokens with no capital boundary pass through to the next stage whole.
//!
//! 2. Doubled-word detection: a token that is two identical halves (`abab`)
//!    seeds the dictionary with the half. Odd-length tokens are dropped from
//!    this pass entirely; even-length non-doubled tokens pass through.

use crate::splitter::queue::WordSet;

/// Scan one token for capitalized sub-words
///
/// Scans right to left. Each capital letter whose left neighbor is absent or
/// not a capital starts a sub-word ending at the current scan length; the
/// sub-word is lowercased and inserted into the dictionary. Returns `true`
/// if any boundary was found (the token is fully consumed), `false` if the
/// caller should forward the token unchanged.
///
/// # Panics
///
/// If a boundary was found but the scan does not terminate exactly on a
/// fresh capital start (residual length != 1). That means the token has
/// leading characters outside any capitalized sub-word, which breaks the
/// pass's core assumption and is fatal to the run.
pub fn extract_capitalized(token: &str, dictionary: &WordSet) -> bool {
    let chars: Vec<char> = token.chars().collect();

    let mut found = false;
    let mut len = 1usize;
    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        if chars[i].is_uppercase() && (i == 0 || !chars[i - 1].is_uppercase()) {
            let word: String = chars[i..i + len].iter().collect::<String>().to_lowercase();
            dictionary.insert(word);
            found = true;
            len = 0;
        }
        len += 1;
    }

    if found && len != 1 {
        panic!("first letter is not capital: {token:?}");
    }

    found
}

/// Check one token for the doubled-word pattern
///
/// Returns `Some(token)` when the caller should forward the token to the
/// next stage, `None` when the token was consumed: either its first half
/// was inserted into the dictionary, or the token had odd length and is
/// intentionally dropped.
pub fn fold_doubled(token: String, dictionary: &WordSet) -> Option<String> {
    let chars: Vec<char> = token.chars().collect();

    if chars.len() % 2 != 0 {
        return None;
    }

    let half = chars.len() / 2;
    for i in 0..half {
        if chars[i] != chars[i + half] {
            return Some(token);
        }
    }

    dictionary.insert(chars[..half].iter().collect());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_split() {
        let dict = WordSet::new();
        assert!(extract_capitalized("FooBar", &dict));
        assert_eq!(dict.to_sorted_vec(), vec!["bar".to_string(), "foo".to_string()]);
    }

    #[test]
    fn test_capitalized_passthrough() {
        let dict = WordSet::new();
        assert!(!extract_capitalized("hello", &dict));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_capitalized_single_letter() {
        let dict = WordSet::new();
        assert!(extract_capitalized("A", &dict));
        assert_eq!(dict.to_sorted_vec(), vec!["a".to_string()]);
    }

    #[test]
    fn test_capitalized_idempotent() {
        let dict = WordSet::new();
        extract_capitalized("FooBar", &dict);
        extract_capitalized("FooBar", &dict);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_capitalized_many_boundaries() {
        let dict = WordSet::new();
        assert!(extract_capitalized("OneTwoThree", &dict));
        assert_eq!(
            dict.to_sorted_vec(),
            vec!["one".to_string(), "three".to_string(), "two".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "first letter is not capital")]
    fn test_capitalized_leading_lowercase_is_fatal() {
        let dict = WordSet::new();
        extract_capitalized("fooBar", &dict);
    }

    #[test]
    fn test_doubled_match() {
        let dict = WordSet::new();
        assert!(fold_doubled("abab".into(), &dict).is_none());
        assert_eq!(dict.to_sorted_vec(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_doubled_mismatch_forwards() {
        let dict = WordSet::new();
        assert_eq!(fold_doubled("abcd".into(), &dict), Some("abcd".to_string()));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_odd_length_dropped() {
        let dict = WordSet::new();
        // Dropped entirely: no dictionary entry and no forward.
        assert!(fold_doubled("abc".into(), &dict).is_none());
        assert!(dict.is_empty());
    }
}
