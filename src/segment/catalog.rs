//! Strategy catalog: language code → sentence/word strategy descriptors.
//!
//! The catalog is a closed table. Languages with a registered special case
//! (non-Latin scripts or agglutinative languages needing dedicated
//! segmentation) get their dedicated descriptor pair; every other language
//! falls back to the statistical sentence model from the resource store
//! paired with Unicode word segmentation. Lookup is by exact canonical code,
//! no partial matching.

use std::sync::Arc;

use crate::engine::SegmentEngine;
use crate::error::{LexisError, Result};

/// Terminator-anchored pattern for scripts using ideographic punctuation:
/// each match is one sentence ending at a wide terminator; text after the
/// last terminator never matches and is dropped.
const IDEOGRAPHIC_SENTENCE: &str = "[^　！？。]*[！？。]";

/// Boundary pattern splitting Hebrew text at a period followed by
/// whitespace; the gaps between matches are the sentences.
const HEBREW_SENTENCE_BREAK: &str = r"\.\s+";

/// Hebrew-script letter runs.
const HEBREW_WORD: &str = "[\u{05d0}-\u{05ea}]+";

/// Descriptor for a sentence-boundary strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SentenceSpec {
    /// Statistical boundary model loaded from the resource store.
    Model,
    /// Regex strategy: matches are sentences, or, with `gaps`, the text
    /// between matches is.
    Pattern { pattern: &'static str, gaps: bool },
    /// Delegate to an external engine returning sentence token-groups.
    Engine(EngineSlot),
    /// No boundary detection: the whole input is one whitespace-normalized
    /// sentence.
    Whitespace,
}

/// Descriptor for a word-segmentation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WordSpec {
    /// Unicode word boundaries (UAX #29).
    Unicode,
    /// Regex strategy: matches are the raw tokens.
    Pattern(&'static str),
    /// Delegate to an external engine returning word tokens.
    Engine(EngineSlot),
    /// Split on whitespace.
    Whitespace,
}

/// A built-in engine binding the catalog can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EngineSlot {
    JapaneseWords,
    ChineseWords,
    KoreanSentences,
    KoreanWords,
    VietnameseSentences,
}

/// The strategy pair selected for one language.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StrategyPair {
    pub sentence: SentenceSpec,
    pub word: WordSpec,
}

/// Look up the strategy pair for a canonical, alias-resolved language code.
///
/// Returns the special-case pair when one is registered, the generic
/// statistical fallback otherwise. Whether the fallback language is actually
/// supported is decided when the resource store is consulted.
pub(crate) fn lookup(code: &str) -> StrategyPair {
    let pair = match code {
        "hebrew" => StrategyPair {
            sentence: SentenceSpec::Pattern { pattern: HEBREW_SENTENCE_BREAK, gaps: true },
            word: WordSpec::Pattern(HEBREW_WORD),
        },
        "japanese" => StrategyPair {
            sentence: SentenceSpec::Pattern { pattern: IDEOGRAPHIC_SENTENCE, gaps: false },
            word: WordSpec::Engine(EngineSlot::JapaneseWords),
        },
        "chinese" => StrategyPair {
            sentence: SentenceSpec::Pattern { pattern: IDEOGRAPHIC_SENTENCE, gaps: false },
            word: WordSpec::Engine(EngineSlot::ChineseWords),
        },
        "korean" => StrategyPair {
            sentence: SentenceSpec::Engine(EngineSlot::KoreanSentences),
            word: WordSpec::Engine(EngineSlot::KoreanWords),
        },
        "vietnamese" => StrategyPair {
            sentence: SentenceSpec::Engine(EngineSlot::VietnameseSentences),
            word: WordSpec::Whitespace,
        },
        _ => StrategyPair { sentence: SentenceSpec::Model, word: WordSpec::Unicode },
    };
    tracing::debug!(language = code, pair = ?pair, "selected strategies");
    pair
}

impl EngineSlot {
    /// Human-readable capability name for error messages.
    pub(crate) fn capability(self) -> &'static str {
        match self {
            EngineSlot::JapaneseWords => "Japanese word segmentation (Lindera, UniDic)",
            EngineSlot::ChineseWords => "Chinese word segmentation (Lindera, CC-CEDICT)",
            EngineSlot::KoreanSentences => "Korean sentence segmentation (Lindera, ko-dic)",
            EngineSlot::KoreanWords => "Korean word segmentation (Lindera, ko-dic)",
            EngineSlot::VietnameseSentences => "Vietnamese sentence segmentation",
        }
    }

    /// How to obtain the capability.
    pub(crate) fn hint(self) -> &'static str {
        match self {
            EngineSlot::JapaneseWords => {
                "Enable the `japanese` cargo feature, or register a custom engine \
                 with `TokenizerBuilder::word_engine`."
            }
            EngineSlot::ChineseWords => {
                "Enable the `chinese` cargo feature, or register a custom engine \
                 with `TokenizerBuilder::word_engine`."
            }
            EngineSlot::KoreanSentences => {
                "Enable the `korean` cargo feature, or register a custom engine \
                 with `TokenizerBuilder::sentence_engine`."
            }
            EngineSlot::KoreanWords => {
                "Enable the `korean` cargo feature, or register a custom engine \
                 with `TokenizerBuilder::word_engine`."
            }
            EngineSlot::VietnameseSentences => {
                "No engine is built in for Vietnamese; register one with \
                 `TokenizerBuilder::sentence_engine`."
            }
        }
    }

    /// Build the built-in engine for this slot.
    ///
    /// Fails with the missing-dependency error when the matching cargo
    /// feature is not compiled in (or, for Vietnamese, always, since only
    /// custom engines serve it).
    pub(crate) fn resolve(self) -> Result<Arc<dyn SegmentEngine>> {
        match self {
            EngineSlot::JapaneseWords => {
                #[cfg(feature = "japanese")]
                {
                    Ok(Arc::new(crate::engine::LinderaEngine::new("embedded://unidic", false)?))
                }
                #[cfg(not(feature = "japanese"))]
                {
                    Err(LexisError::missing_dependency(self.capability(), self.hint()))
                }
            }
            EngineSlot::ChineseWords => {
                #[cfg(feature = "chinese")]
                {
                    Ok(Arc::new(crate::engine::LinderaEngine::new(
                        "embedded://cc-cedict",
                        false,
                    )?))
                }
                #[cfg(not(feature = "chinese"))]
                {
                    Err(LexisError::missing_dependency(self.capability(), self.hint()))
                }
            }
            EngineSlot::KoreanSentences => {
                #[cfg(feature = "korean")]
                {
                    Ok(Arc::new(crate::engine::LinderaEngine::new("embedded://ko-dic", true)?))
                }
                #[cfg(not(feature = "korean"))]
                {
                    Err(LexisError::missing_dependency(self.capability(), self.hint()))
                }
            }
            EngineSlot::KoreanWords => {
                #[cfg(feature = "korean")]
                {
                    Ok(Arc::new(crate::engine::LinderaEngine::new("embedded://ko-dic", false)?))
                }
                #[cfg(not(feature = "korean"))]
                {
                    Err(LexisError::missing_dependency(self.capability(), self.hint()))
                }
            }
            EngineSlot::VietnameseSentences => {
                Err(LexisError::missing_dependency(self.capability(), self.hint()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_cases_are_exact_matches() {
        assert!(matches!(lookup("japanese").sentence, SentenceSpec::Pattern { gaps: false, .. }));
        assert!(matches!(lookup("japanes").sentence, SentenceSpec::Model));
        assert!(matches!(lookup("japanese2").sentence, SentenceSpec::Model));
    }

    #[test]
    fn test_fallback_pair() {
        let pair = lookup("english");
        assert!(matches!(pair.sentence, SentenceSpec::Model));
        assert!(matches!(pair.word, WordSpec::Unicode));
    }

    #[test]
    fn test_hebrew_uses_gap_pattern() {
        let pair = lookup("hebrew");
        assert!(matches!(pair.sentence, SentenceSpec::Pattern { gaps: true, .. }));
        assert!(matches!(pair.word, WordSpec::Pattern(_)));
    }

    #[test]
    fn test_vietnamese_words_split_on_whitespace() {
        assert!(matches!(lookup("vietnamese").word, WordSpec::Whitespace));
    }

    #[test]
    fn test_vietnamese_sentences_need_custom_engine() {
        let err = EngineSlot::VietnameseSentences.resolve().err().unwrap();
        assert!(matches!(err, LexisError::MissingDependency { .. }));
        assert!(err.to_string().contains("sentence_engine"));
    }

    #[cfg(not(feature = "japanese"))]
    #[test]
    fn test_japanese_engine_needs_feature() {
        let err = EngineSlot::JapaneseWords.resolve().err().unwrap();
        assert!(err.to_string().contains("`japanese` cargo feature"));
    }
}
