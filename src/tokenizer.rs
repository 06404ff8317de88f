//! Language-dependent tokenizer facade.
//!
//! A [`Tokenizer`] resolves its language once, at construction: the
//! identifier is normalized, aliases are resolved, the strategy catalog picks
//! one sentence strategy and one word strategy, and both are bound into
//! segmenters. Calls then flow through the bound segmenters without ever
//! re-resolving the language or reselecting a strategy.
//!
//! # Examples
//!
//! ```
//! use lexis::Tokenizer;
//!
//! let tokenizer = Tokenizer::new("en").unwrap();
//!
//! let sentences = tokenizer
//!     .to_sentences("It rained all day. We stayed inside.")
//!     .unwrap();
//! assert_eq!(sentences.len(), 2);
//!
//! let words = tokenizer.to_words("We stayed inside.").unwrap();
//! assert_eq!(words, vec!["We", "stayed", "inside"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;

use crate::engine::SegmentEngine;
use crate::error::{LexisError, Result};
use crate::language::{abbreviations, registry};
use crate::resource::{EmbeddedStore, ResourceStore};
use crate::segment::catalog::{self, SentenceSpec, WordSpec};
use crate::segment::sentence::{SentenceSegmenter, SentenceStrategy};
use crate::segment::word::{WordSegmenter, WordStrategy};

/// Language-dependent tokenizer of text documents.
///
/// Construction fails eagerly: an unknown language, a corrupt model artifact
/// or a missing engine capability is reported from [`Tokenizer::new`] (or
/// [`TokenizerBuilder::build`]), never deferred into the first call.
pub struct Tokenizer {
    language: String,
    sentence: SentenceSegmenter,
    word: WordSegmenter,
}

impl Tokenizer {
    /// Create a tokenizer for a free-form, case-insensitive language
    /// identifier, with the default configuration.
    pub fn new(language_identifier: &str) -> Result<Self> {
        TokenizerBuilder::new(language_identifier).build()
    }

    /// Start building a tokenizer with custom configuration.
    pub fn builder(language_identifier: &str) -> TokenizerBuilder {
        TokenizerBuilder::new(language_identifier)
    }

    /// The canonical language this tokenizer was constructed for (before
    /// alias resolution).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Split a paragraph into ordered, trimmed sentences.
    pub fn to_sentences(&self, paragraph: &str) -> Result<Vec<String>> {
        self.sentence.segment(paragraph)
    }

    /// Split a sentence into ordered word tokens, dropping tokens that are
    /// not linguistically valid words.
    pub fn to_words(&self, sentence: &str) -> Result<Vec<String>> {
        self.word.segment(sentence)
    }

    /// The bound sentence segmenter.
    pub fn sentence_segmenter(&self) -> &SentenceSegmenter {
        &self.sentence
    }

    /// The bound word segmenter.
    pub fn word_segmenter(&self) -> &WordSegmenter {
        &self.word
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("language", &self.language)
            .field("sentence", &self.sentence.strategy_name())
            .field("word", &self.word.strategy_name())
            .finish()
    }
}

/// Builder for [`Tokenizer`] with injectable collaborators.
///
/// # Examples
///
/// ```
/// use lexis::Tokenizer;
/// use lexis::resource::DirectoryStore;
/// use std::sync::Arc;
///
/// let result = Tokenizer::builder("english")
///     .resource_store(Arc::new(DirectoryStore::new("/nonexistent/models")))
///     .build();
/// assert!(result.is_err()); // no artifact in that directory
/// ```
pub struct TokenizerBuilder {
    language: String,
    store: Arc<dyn ResourceStore>,
    sentence_engines: HashMap<String, Arc<dyn SegmentEngine>>,
    word_engines: HashMap<String, Arc<dyn SegmentEngine>>,
    extra_abbreviations: Vec<String>,
}

impl TokenizerBuilder {
    /// Create a builder for the given language identifier.
    pub fn new(language_identifier: &str) -> Self {
        TokenizerBuilder {
            language: registry::normalize(language_identifier),
            store: Arc::new(EmbeddedStore::new()),
            sentence_engines: HashMap::new(),
            word_engines: HashMap::new(),
            extra_abbreviations: Vec::new(),
        }
    }

    /// Replace the resource store the sentence model is loaded from.
    pub fn resource_store(mut self, store: Arc<dyn ResourceStore>) -> Self {
        self.store = store;
        self
    }

    /// Register a sentence-segmentation engine for a language.
    ///
    /// The registered engine takes precedence over any built-in one.
    pub fn sentence_engine(mut self, language: &str, engine: Arc<dyn SegmentEngine>) -> Self {
        self.sentence_engines.insert(registry::normalize(language), engine);
        self
    }

    /// Register a word-segmentation engine for a language.
    pub fn word_engine(mut self, language: &str, engine: Arc<dyn SegmentEngine>) -> Self {
        self.word_engines.insert(registry::normalize(language), engine);
        self
    }

    /// Add abbreviations to merge into the sentence model's exception set,
    /// on top of the built-in correction list for the language.
    pub fn extra_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_abbreviations.extend(abbreviations.into_iter().map(Into::into));
        self
    }

    /// Resolve the language, select strategies and bind the segmenters.
    pub fn build(self) -> Result<Tokenizer> {
        let TokenizerBuilder {
            language,
            store,
            sentence_engines,
            word_engines,
            extra_abbreviations,
        } = self;

        // Aliased languages borrow the strategies of their stand-in but keep
        // their own correction list.
        let segmentation_language = registry::resolve_alias(&language).to_string();
        let pair = catalog::lookup(&segmentation_language);

        let sentence = match pair.sentence {
            SentenceSpec::Model => {
                let model = store
                    .load(&segmentation_language)?
                    .ok_or_else(|| LexisError::unsupported_language(language.clone()))?;
                let mut corrections: Vec<String> = abbreviations::extra_abbreviations(&language)
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                corrections.extend(extra_abbreviations);
                SentenceSegmenter::new(SentenceStrategy::Model {
                    model: RwLock::new(model),
                    corrections,
                })
            }
            SentenceSpec::Pattern { pattern, gaps } => {
                SentenceSegmenter::new(SentenceStrategy::Pattern {
                    pattern: Regex::new(pattern)?,
                    gaps,
                })
            }
            SentenceSpec::Engine(slot) => {
                let engine = custom_engine(&sentence_engines, &language, &segmentation_language)
                    .map(Ok)
                    .unwrap_or_else(|| slot.resolve())?;
                SentenceSegmenter::new(SentenceStrategy::Engine(engine))
            }
            SentenceSpec::Whitespace => SentenceSegmenter::new(SentenceStrategy::Whitespace),
        };

        let word = match pair.word {
            WordSpec::Unicode => WordSegmenter::new(WordStrategy::Unicode),
            WordSpec::Pattern(pattern) => {
                WordSegmenter::new(WordStrategy::Pattern(Regex::new(pattern)?))
            }
            WordSpec::Engine(slot) => {
                let engine = custom_engine(&word_engines, &language, &segmentation_language)
                    .map(Ok)
                    .unwrap_or_else(|| slot.resolve())?;
                WordSegmenter::new(WordStrategy::Engine(engine))
            }
            WordSpec::Whitespace => WordSegmenter::new(WordStrategy::Whitespace),
        };

        tracing::debug!(
            language = %language,
            sentence = sentence.strategy_name(),
            word = word.strategy_name(),
            "constructed tokenizer"
        );

        Ok(Tokenizer { language, sentence, word })
    }
}

/// A registered engine for the language, checked under the requested code
/// first and its alias target second.
fn custom_engine(
    engines: &HashMap<String, Arc<dyn SegmentEngine>>,
    language: &str,
    segmentation_language: &str,
) -> Option<Arc<dyn SegmentEngine>> {
    engines
        .get(language)
        .or_else(|| engines.get(segmentation_language))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Segments;

    struct StubEngine;

    impl SegmentEngine for StubEngine {
        fn segment(&self, text: &str) -> Result<Segments> {
            Ok(Segments::Sentences(vec![
                text.split_whitespace().map(str::to_string).collect(),
            ]))
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[test]
    fn test_construction_normalizes_identifier() {
        let tokenizer = Tokenizer::new("  EN-us ").unwrap();
        assert_eq!(tokenizer.language(), "english");
    }

    #[test]
    fn test_unknown_language_fails_at_construction() {
        let err = Tokenizer::new("klingon").unwrap_err();
        match err {
            LexisError::UnsupportedLanguage(code) => assert_eq!(code, "klingon"),
            other => panic!("expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_bound_strategies_for_fallback_language() {
        let tokenizer = Tokenizer::new("german").unwrap();
        assert_eq!(tokenizer.sentence_segmenter().strategy_name(), "model");
        assert_eq!(tokenizer.word_segmenter().strategy_name(), "unicode");
    }

    #[test]
    fn test_custom_sentence_engine_takes_precedence() {
        let tokenizer = Tokenizer::builder("vietnamese")
            .sentence_engine("vietnamese", Arc::new(StubEngine))
            .build()
            .unwrap();
        assert_eq!(tokenizer.sentence_segmenter().strategy_name(), "engine");

        let sentences = tokenizer.to_sentences("Xin chào").unwrap();
        assert_eq!(sentences, vec!["Xin chào"]);
    }

    #[test]
    fn test_vietnamese_without_engine_fails_at_construction() {
        let err = Tokenizer::new("vietnamese").unwrap_err();
        assert!(matches!(err, LexisError::MissingDependency { .. }));
    }

    #[test]
    fn test_debug_names_strategies() {
        let tokenizer = Tokenizer::new("english").unwrap();
        let debug = format!("{tokenizer:?}");
        assert!(debug.contains("english"));
        assert!(debug.contains("model"));
    }
}
