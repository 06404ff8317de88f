//! Language identification for tokenization.
//!
//! This module normalizes free-form language identifiers to canonical codes,
//! resolves aliases between closely related languages, and holds the
//! per-language abbreviation correction lists that are merged into sentence
//! models at call time.

pub mod abbreviations;
pub mod registry;

pub use abbreviations::extra_abbreviations;
pub use registry::{normalize, resolve_alias};
