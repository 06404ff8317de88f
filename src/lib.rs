//! # Lexis
//!
//! Language-aware sentence and word tokenization for Rust.
//!
//! ## Features
//!
//! - One tokenizer facade over per-language segmentation strategies
//! - Statistical sentence-boundary models with abbreviation handling
//! - Pattern-based segmentation for scripts with ideographic punctuation
//! - Pluggable morphological engines (Lindera) behind cargo features
//! - Injectable resource stores for user-supplied models
//!
//! ## Quick start
//!
//! ```
//! use lexis::Tokenizer;
//!
//! let tokenizer = Tokenizer::new("english").unwrap();
//! let sentences = tokenizer.to_sentences("Dr. Smith went home. He arrived at 5 p.m.").unwrap();
//! assert_eq!(sentences.len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod model;
pub mod resource;
pub mod segment;
pub mod tokenizer;

pub use error::{LexisError, Result};
pub use tokenizer::{Tokenizer, TokenizerBuilder};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
