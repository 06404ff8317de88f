//! Sentence segmentation.

use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;

use crate::engine::{SegmentEngine, Segments};
use crate::error::{LexisError, Result};
use crate::model::SentenceModel;

/// The bound sentence-boundary strategy.
pub(crate) enum SentenceStrategy {
    /// Statistical model plus the correction list merged in at call time.
    Model {
        model: RwLock<SentenceModel>,
        corrections: Vec<String>,
    },
    /// Regex strategy. In match mode every match is a sentence; in gaps mode
    /// the text between matches is.
    Pattern { pattern: Regex, gaps: bool },
    /// External engine returning sentence token-groups.
    Engine(Arc<dyn SegmentEngine>),
    /// Whole input as one whitespace-normalized sentence.
    Whitespace,
}

/// Splits paragraphs into ordered, trimmed sentences with one fixed strategy.
///
/// A segmenter is bound to its strategy at construction and never reselects
/// it. Calls are independent and restartable: the same input always yields
/// the same output, including across the abbreviation merge performed by the
/// statistical strategy on its first call.
pub struct SentenceSegmenter {
    strategy: SentenceStrategy,
}

impl SentenceSegmenter {
    pub(crate) fn new(strategy: SentenceStrategy) -> Self {
        SentenceSegmenter { strategy }
    }

    /// Split `text` into sentences, preserving order.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        match &self.strategy {
            SentenceStrategy::Model { model, corrections } => {
                // Merge-then-run: a monotonic union, skipped entirely once the
                // corrections are present so repeated calls behave identically.
                if !corrections.is_empty() {
                    let merged = model
                        .read()
                        .contains_abbreviations(corrections.iter().map(String::as_str));
                    if !merged {
                        model.write().add_abbreviations(corrections);
                    }
                }
                Ok(model.read().segment(text))
            }
            SentenceStrategy::Pattern { pattern, gaps: false } => Ok(pattern
                .find_iter(text)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()),
            SentenceStrategy::Pattern { pattern, gaps: true } => {
                let mut sentences = Vec::new();
                let mut last_end = 0;
                for m in pattern.find_iter(text) {
                    if m.start() > last_end {
                        let gap = text[last_end..m.start()].trim();
                        if !gap.is_empty() {
                            sentences.push(gap.to_string());
                        }
                    }
                    last_end = m.end();
                }
                if last_end < text.len() {
                    let tail = text[last_end..].trim();
                    if !tail.is_empty() {
                        sentences.push(tail.to_string());
                    }
                }
                Ok(sentences)
            }
            SentenceStrategy::Engine(engine) => match engine.segment(text)? {
                Segments::Sentences(groups) => Ok(groups
                    .iter()
                    .map(|tokens| tokens.join(" ").trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()),
                Segments::Words(_) => Err(LexisError::engine(format!(
                    "engine '{}' returned flat tokens where sentence groups were expected",
                    engine.name()
                ))),
            },
            SentenceStrategy::Whitespace => {
                let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if joined.is_empty() { Ok(Vec::new()) } else { Ok(vec![joined]) }
            }
        }
    }

    /// Get the name of the bound strategy (for debugging).
    pub fn strategy_name(&self) -> &'static str {
        match &self.strategy {
            SentenceStrategy::Model { .. } => "model",
            SentenceStrategy::Pattern { .. } => "pattern",
            SentenceStrategy::Engine(_) => "engine",
            SentenceStrategy::Whitespace => "whitespace",
        }
    }
}
