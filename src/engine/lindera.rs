//! Morphological segmentation engines backed by Lindera.

use std::borrow::Cow;

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::engine::{SegmentEngine, Segments};
use crate::error::{LexisError, Result};

/// Token surfaces that close a sentence when grouping engine output.
const TERMINAL_SURFACES: &[char] = &['。', '！', '？', '.', '!', '?'];

/// A segmentation engine over a Lindera morphological analyzer.
///
/// The dictionary is addressed by an `embedded://` URI and must be compiled
/// into the build through the matching cargo feature. In word mode the
/// engine returns the flat token sequence; in sentence mode it groups tokens
/// at terminal punctuation and returns one token group per sentence.
pub struct LinderaEngine {
    inner: Segmenter,
    grouping: bool,
}

impl LinderaEngine {
    /// Create an engine over the dictionary at `dictionary_uri`.
    ///
    /// `grouping` selects sentence mode. Fails with the missing-dependency
    /// error when the dictionary cannot be loaded.
    pub fn new(dictionary_uri: &str, grouping: bool) -> Result<Self> {
        let dictionary = load_dictionary(dictionary_uri).map_err(|e| {
            LexisError::missing_dependency(
                format!("Lindera dictionary '{dictionary_uri}'"),
                format!("The dictionary failed to load: {e}"),
            )
        })?;
        let inner = Segmenter::new(Mode::Normal, dictionary, None);

        Ok(Self { inner, grouping })
    }

    fn group_sentences(words: Vec<String>) -> Vec<Vec<String>> {
        let mut sentences = Vec::new();
        let mut current = Vec::new();
        for word in words {
            let terminal = word.chars().all(|c| TERMINAL_SURFACES.contains(&c));
            current.push(word);
            if terminal {
                sentences.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }
        sentences
    }
}

impl SegmentEngine for LinderaEngine {
    fn segment(&self, text: &str) -> Result<Segments> {
        let mut words = Vec::new();

        for token in self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| LexisError::engine(format!("Failed to segment text: {e}")))?
        {
            let surface = token.surface.trim();
            if !surface.is_empty() {
                words.push(surface.to_string());
            }
        }

        if self.grouping {
            Ok(Segments::Sentences(Self::group_sentences(words)))
        } else {
            Ok(Segments::Words(words))
        }
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sentences_at_terminals() {
        let words = ["오늘", "은", "덥", "다", ".", "내일", "은"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let groups = LinderaEngine::group_sentences(words);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].last().unwrap(), ".");
        assert_eq!(groups[1], vec!["내일", "은"]);
    }

    #[test]
    fn test_group_sentences_empty() {
        assert!(LinderaEngine::group_sentences(Vec::new()).is_empty());
    }

    #[cfg(feature = "japanese")]
    #[test]
    fn test_tokenize_japanese() {
        let engine = LinderaEngine::new("embedded://unidic", false).unwrap();
        let Segments::Words(words) = engine.segment("日本語の形態素解析").unwrap() else {
            panic!("expected flat words");
        };
        assert!(words.len() >= 3);
        assert_eq!(words[0], "日本");
    }

    #[cfg(feature = "korean")]
    #[test]
    fn test_korean_sentence_grouping() {
        let engine = LinderaEngine::new("embedded://ko-dic", true).unwrap();
        let Segments::Sentences(groups) = engine.segment("한국어 문장입니다. 두 번째 문장.").unwrap()
        else {
            panic!("expected sentence groups");
        };
        assert_eq!(groups.len(), 2);
    }
}
