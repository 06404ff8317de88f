//! Word-shape validation.
//!
//! Raw tokenizer output contains punctuation, numbers and other non-word
//! debris. The predicate here keeps only tokens shaped like linguistic
//! words: a leading letter followed by letters, apostrophes or hyphens,
//! matched over the whole token.

use std::sync::LazyLock;

use regex::Regex;

// `[^\W\d_]` is "word character, minus digits and the connector underscore",
// i.e. letters in any script.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\W\d_](?:[^\W\d_]|['-])*$").expect("word pattern is valid"));

/// Whether a token qualifies as a linguistic word.
///
/// The first character must be a letter (digits and underscores excluded);
/// every following character must be a letter, an apostrophe or a hyphen.
/// The match is anchored at both ends, and the empty token never qualifies.
///
/// # Examples
///
/// ```
/// use lexis::segment::is_word;
///
/// assert!(is_word("hello"));
/// assert!(is_word("don't"));
/// assert!(is_word("well-known"));
/// assert!(!is_word("3.14"));
/// assert!(!is_word("--"));
/// ```
pub fn is_word(token: &str) -> bool {
    WORD_PATTERN.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert!(is_word("hello"));
        assert!(is_word("Hello"));
        assert!(is_word("a"));
    }

    #[test]
    fn test_accented_and_non_latin_words() {
        assert!(is_word("café"));
        assert!(is_word("naïve"));
        assert!(is_word("日本語"));
        assert!(is_word("слово"));
    }

    #[test]
    fn test_apostrophes_and_hyphens() {
        assert!(is_word("don't"));
        assert!(is_word("o'clock"));
        assert!(is_word("well-known"));
        assert!(is_word("mother-in-law"));
    }

    #[test]
    fn test_rejects_leading_non_letter() {
        assert!(!is_word("'quoted"));
        assert!(!is_word("-dash"));
        assert!(!is_word("_name"));
        assert!(!is_word("1st"));
    }

    #[test]
    fn test_rejects_digits_and_punctuation() {
        assert!(!is_word("123"));
        assert!(!is_word("3.14"));
        assert!(!is_word("x1"));
        assert!(!is_word("..."));
        assert!(!is_word(","));
        assert!(!is_word("a_b"));
    }

    #[test]
    fn test_rejects_empty_token() {
        assert!(!is_word(""));
    }

    #[test]
    fn test_match_covers_whole_token() {
        assert!(!is_word("word."));
        assert!(!is_word("(word)"));
        assert!(!is_word("word!"));
    }
}
