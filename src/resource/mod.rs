//! Resource stores for pretrained sentence models.
//!
//! A resource store resolves a canonical language code to a
//! [`SentenceModel`](crate::model::SentenceModel) artifact. Absence and
//! corruption are distinct outcomes: a missing entry means the language is
//! unsupported by this store (fetch or bundle a model), while a present but
//! unreadable entry means the artifact needs repair.
//!
//! Two providers are included: [`EmbeddedStore`] serves the models compiled
//! into the crate and is the default, [`DirectoryStore`] reads artifacts from
//! a caller-chosen directory. Stores are injected at tokenizer construction,
//! so deployments can layer their own provider without touching the core.

pub mod directory;
pub mod embedded;

pub use directory::DirectoryStore;
pub use embedded::EmbeddedStore;

use crate::error::Result;
use crate::model::SentenceModel;

/// Trait for providers of pretrained sentence-model artifacts.
pub trait ResourceStore: Send + Sync {
    /// Load the model for a canonical language code.
    ///
    /// Returns `Ok(None)` when the store has no entry for the language, and
    /// an error when an entry exists but cannot be read or parsed.
    fn load(&self, language: &str) -> Result<Option<SentenceModel>>;

    /// Get the name of this store (for debugging and error messages).
    fn name(&self) -> &'static str;
}
