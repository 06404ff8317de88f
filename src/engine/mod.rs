//! External segmentation engines.
//!
//! Some languages cannot be segmented by patterns or statistical boundary
//! models; they need a dedicated morphological analyzer. Such analyzers are
//! modeled as black-box engines behind the [`SegmentEngine`] trait: one entry
//! point taking raw text and returning either flat word tokens or token
//! groups representing sentences.
//!
//! Built-in engines wrap [Lindera](https://github.com/lindera/lindera) with
//! its embedded dictionaries and are compiled in through the `japanese`,
//! `chinese` and `korean` cargo features. Custom engines can be registered
//! per language through
//! [`TokenizerBuilder`](crate::tokenizer::TokenizerBuilder).

#[cfg(any(feature = "japanese", feature = "chinese", feature = "korean"))]
pub mod lindera;

#[cfg(any(feature = "japanese", feature = "chinese", feature = "korean"))]
pub use lindera::LinderaEngine;

use crate::error::Result;

/// Output of a segmentation engine.
///
/// An engine yields whichever shape its underlying analyzer produces; the
/// bound segmenter adapts it to the operation being served.
#[derive(Clone, Debug, PartialEq)]
pub enum Segments {
    /// Flat, ordered word tokens.
    Words(Vec<String>),
    /// Ordered sentences, each an ordered group of word tokens.
    Sentences(Vec<Vec<String>>),
}

/// Trait for external segmentation services.
///
/// Implementations are expected to be deterministic for a given input and
/// must not retain state between calls. Blocking work (dictionary lookup,
/// subprocess I/O) runs on the calling thread.
pub trait SegmentEngine: Send + Sync {
    /// Segment raw text into words or sentence token-groups.
    fn segment(&self, text: &str) -> Result<Segments>;

    /// Get the name of this engine (for debugging and error messages).
    fn name(&self) -> &'static str;
}
