//! Resource store over the models bundled into the crate.

use crate::error::{LexisError, Result};
use crate::model::SentenceModel;
use crate::resource::ResourceStore;

/// Model artifacts compiled into the library, keyed by canonical language
/// code.
const BUNDLED_MODELS: &[(&str, &str)] = &[
    ("czech", include_str!("../../resources/czech.json")),
    ("english", include_str!("../../resources/english.json")),
    ("french", include_str!("../../resources/french.json")),
    ("german", include_str!("../../resources/german.json")),
    ("italian", include_str!("../../resources/italian.json")),
    ("portuguese", include_str!("../../resources/portuguese.json")),
    ("spanish", include_str!("../../resources/spanish.json")),
];

/// The default resource store: serves the sentence models bundled with the
/// library, with no filesystem or network access.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    /// Create a new embedded store.
    pub fn new() -> Self {
        EmbeddedStore
    }

    /// Canonical codes of all bundled models.
    pub fn languages() -> impl Iterator<Item = &'static str> {
        BUNDLED_MODELS.iter().map(|&(code, _)| code)
    }
}

impl ResourceStore for EmbeddedStore {
    fn load(&self, language: &str) -> Result<Option<SentenceModel>> {
        let Some(&(_, artifact)) = BUNDLED_MODELS.iter().find(|&&(code, _)| code == language)
        else {
            return Ok(None);
        };

        let mut model: SentenceModel = serde_json::from_str(artifact)
            .map_err(|e| LexisError::malformed_resource(language, e.to_string()))?;
        model.canonicalize();
        tracing::debug!(language, store = self.name(), "loaded sentence model");
        Ok(Some(model))
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundled_models_parse() {
        let store = EmbeddedStore::new();
        for language in EmbeddedStore::languages() {
            let model = store
                .load(language)
                .unwrap_or_else(|e| panic!("model for {language} failed to load: {e}"))
                .unwrap_or_else(|| panic!("model for {language} missing"));
            assert_eq!(model.language(), language);
            assert!(model.abbreviation_count() > 0, "{language} has no abbreviations");
        }
    }

    #[test]
    fn test_unknown_language_is_absent() {
        let store = EmbeddedStore::new();
        assert!(store.load("klingon").unwrap().is_none());
    }

    #[test]
    fn test_store_name() {
        assert_eq!(EmbeddedStore::new().name(), "embedded");
    }
}
