//! Word segmentation.

use std::sync::Arc;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::{SegmentEngine, Segments};
use crate::error::Result;
use crate::segment::filter::is_word;

/// The bound word-segmentation strategy.
pub(crate) enum WordStrategy {
    /// Unicode word boundaries (UAX #29).
    Unicode,
    /// Regex matches are the raw tokens.
    Pattern(Regex),
    /// External engine returning word tokens.
    Engine(Arc<dyn SegmentEngine>),
    /// Split on whitespace.
    Whitespace,
}

/// Splits sentences into ordered word tokens with one fixed strategy.
///
/// Raw tokens from the bound strategy are piped through the word-shape
/// predicate; tokens that fail it are dropped, relative order is preserved.
pub struct WordSegmenter {
    strategy: WordStrategy,
}

impl WordSegmenter {
    pub(crate) fn new(strategy: WordStrategy) -> Self {
        WordSegmenter { strategy }
    }

    /// Split `sentence` into valid words, preserving order.
    pub fn segment(&self, sentence: &str) -> Result<Vec<String>> {
        let raw: Vec<String> = match &self.strategy {
            WordStrategy::Unicode => sentence
                .split_word_bounds()
                .filter(|segment| segment.chars().any(char::is_alphanumeric))
                .map(str::to_string)
                .collect(),
            WordStrategy::Pattern(pattern) => pattern
                .find_iter(sentence)
                .map(|m| m.as_str().to_string())
                .collect(),
            WordStrategy::Engine(engine) => match engine.segment(sentence)? {
                Segments::Words(words) => words,
                Segments::Sentences(groups) => groups.into_iter().flatten().collect(),
            },
            WordStrategy::Whitespace => {
                sentence.split_whitespace().map(str::to_string).collect()
            }
        };

        Ok(raw.into_iter().filter(|token| is_word(token)).collect())
    }

    /// Get the name of the bound strategy (for debugging).
    pub fn strategy_name(&self) -> &'static str {
        match &self.strategy {
            WordStrategy::Unicode => "unicode",
            WordStrategy::Pattern(_) => "pattern",
            WordStrategy::Engine(_) => "engine",
            WordStrategy::Whitespace => "whitespace",
        }
    }
}
