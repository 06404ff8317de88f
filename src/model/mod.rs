//! Pretrained sentence-boundary models.
//!
//! A [`SentenceModel`] is an opaque artifact produced by offline training and
//! loaded through a resource store. It carries the two parameter sets the
//! boundary scan needs: abbreviations whose trailing period must not end a
//! sentence, and sentence starters that can override an abbreviation when a
//! new sentence clearly begins after it.
//!
//! The model does not learn at runtime. The only mutation it supports is
//! [`SentenceModel::add_abbreviations`], a monotonic union used to merge
//! per-language correction lists into the exception set.
//!
//! # Examples
//!
//! ```
//! use lexis::model::SentenceModel;
//!
//! let mut model = SentenceModel::new("english");
//! model.add_abbreviations(["Dr", "p.m"]);
//!
//! let sentences = model.segment("Dr. Smith went home. He arrived at 5 p.m.");
//! assert_eq!(sentences.len(), 2);
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Characters that terminate a sentence in Latin-script text.
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Closing quotes and brackets that belong to the sentence they follow.
const CLOSERS: &[char] = &['"', '\'', '\u{201d}', '\u{2019}', ')', ']'];

/// A statistical sentence-boundary model for one language.
///
/// Deserialized from a JSON artifact with the shape:
///
/// ```json
/// {
///   "language": "english",
///   "abbreviations": ["dr", "mr", "p.m", "etc"],
///   "sentence_starters": ["the", "he", "she", "however"]
/// }
/// ```
///
/// Abbreviation entries carry no trailing period and are matched
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceModel {
    language: String,
    #[serde(default)]
    abbreviations: AHashSet<String>,
    #[serde(default)]
    sentence_starters: AHashSet<String>,
}

impl SentenceModel {
    /// Create an empty model for the given language.
    pub fn new<S: Into<String>>(language: S) -> Self {
        SentenceModel {
            language: language.into(),
            abbreviations: AHashSet::new(),
            sentence_starters: AHashSet::new(),
        }
    }

    /// The language this model was trained for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of abbreviation exceptions currently known.
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Whether every entry of `abbreviations` is already in the exception set.
    ///
    /// Lets callers skip the mutating merge once a correction list has been
    /// applied.
    pub fn contains_abbreviations<'a, I>(&self, abbreviations: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        abbreviations
            .into_iter()
            .all(|a| self.abbreviations.contains(&canonical_entry(a)))
    }

    /// Merge abbreviations into the exception set.
    ///
    /// The union is monotonic: entries are only ever added, and re-merging a
    /// list that is already present leaves the set unchanged.
    pub fn add_abbreviations<I, S>(&mut self, abbreviations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbreviation in abbreviations {
            self.abbreviations.insert(canonical_entry(abbreviation.as_ref()));
        }
    }

    /// Rewrite both parameter sets into canonical form.
    ///
    /// Artifacts written by hand may carry trailing periods or mixed case;
    /// stores call this once after deserialization.
    pub(crate) fn canonicalize(&mut self) {
        self.abbreviations = self.abbreviations.iter().map(|a| canonical_entry(a)).collect();
        self.sentence_starters = self
            .sentence_starters
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
    }

    /// Split `text` into sentences.
    ///
    /// Scans for terminator characters and accepts a boundary when the
    /// terminator (plus any closing quotes or brackets, which stay with the
    /// sentence) is followed by whitespace or end of input, and the
    /// surrounding context does not mark it as an abbreviation period, an
    /// initial, or a non-final ellipsis. Whatever remains at end of input is
    /// flushed as the final sentence. Every span is trimmed; order is
    /// preserved. The scan is stateless between calls.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i].1;
            if TERMINATORS.contains(&ch) {
                let mut after = i + 1;
                while after < chars.len() && CLOSERS.contains(&chars[after].1) {
                    after += 1;
                }
                let at_break = after >= chars.len() || chars[after].1.is_whitespace();
                if at_break && self.is_boundary(text, &chars, i) {
                    let end = if after < chars.len() { chars[after].0 } else { text.len() };
                    let span = text[start..end].trim();
                    if !span.is_empty() {
                        sentences.push(span.to_string());
                    }
                    start = end;
                    i = after;
                    continue;
                }
            }
            i += 1;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }

    /// Decide whether the terminator at `chars[i]` ends a sentence.
    fn is_boundary(&self, text: &str, chars: &[(usize, char)], i: usize) -> bool {
        if chars[i].1 != '.' {
            return true;
        }

        // Final dot of an ellipsis run: a boundary only when a capitalized
        // word follows.
        if i > 0 && chars[i - 1].1 == '.' {
            return next_word(chars, i + 1)
                .and_then(|w| w.chars().next())
                .is_some_and(char::is_uppercase);
        }

        let token = preceding_token(text, chars, i);
        if token.is_empty() {
            return true;
        }

        // A lone uppercase letter before the dot is an initial, never an end.
        let mut token_chars = token.chars();
        if let (Some(first), None) = (token_chars.next(), token_chars.next())
            && first.is_uppercase()
        {
            return false;
        }

        if self.abbreviations.contains(&canonical_entry(token)) {
            // Abbreviation period, unless the next word unambiguously starts
            // a new sentence.
            return next_word(chars, i + 1).is_some_and(|w| {
                w.chars().next().is_some_and(char::is_uppercase)
                    && self.sentence_starters.contains(&w.to_lowercase())
            });
        }

        true
    }
}

/// Canonical form of an abbreviation entry: trimmed, no trailing period,
/// case-folded.
fn canonical_entry(entry: &str) -> String {
    entry.trim().trim_end_matches('.').to_lowercase()
}

/// The token immediately before the terminator at `chars[i]`: the maximal run
/// of alphanumerics and interior periods, as in `p.m` or `U.S.A`.
fn preceding_token<'a>(text: &'a str, chars: &[(usize, char)], i: usize) -> &'a str {
    let end = chars[i].0;
    let mut j = i;
    while j > 0 {
        let ch = chars[j - 1].1;
        if ch.is_alphanumeric() || ch == '.' {
            j -= 1;
        } else {
            break;
        }
    }
    text[chars[j].0..end].trim_matches('.')
}

/// The first alphabetic word at or after `chars[from]`.
fn next_word(chars: &[(usize, char)], from: usize) -> Option<String> {
    let mut j = from;
    while j < chars.len() && !chars[j].1.is_alphabetic() {
        j += 1;
    }
    if j >= chars.len() {
        return None;
    }
    let word: String = chars[j..]
        .iter()
        .map(|&(_, c)| c)
        .take_while(|c| c.is_alphabetic())
        .collect();
    Some(word)
}
