//! Resource store over a directory of model artifacts.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{LexisError, Result};
use crate::model::SentenceModel;
use crate::resource::ResourceStore;

/// A resource store that reads `<root>/<language>.json` artifacts.
///
/// Use this to serve models for languages the embedded store does not bundle,
/// or to override bundled models with retrained ones. The root directory is
/// supplied by the caller; the library assumes no fixed location.
///
/// # Examples
///
/// ```no_run
/// use lexis::resource::{DirectoryStore, ResourceStore};
///
/// let store = DirectoryStore::new("/var/lib/myapp/models");
/// let model = store.load("english").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirectoryStore { root: root.into() }
    }

    /// The directory this store reads from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ResourceStore for DirectoryStore {
    fn load(&self, language: &str) -> Result<Option<SentenceModel>> {
        let path = self.root.join(format!("{language}.json"));
        let artifact = match fs::read_to_string(&path) {
            Ok(artifact) => artifact,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut model: SentenceModel = serde_json::from_str(&artifact).map_err(|e| {
            LexisError::malformed_resource(language, format!("{}: {e}", path.display()))
        })?;
        model.canonicalize();
        tracing::debug!(language, path = %path.display(), "loaded sentence model");
        Ok(Some(model))
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("english.json")).unwrap();
        write!(
            file,
            r#"{{"language": "english", "abbreviations": ["dr"], "sentence_starters": ["the"]}}"#
        )
        .unwrap();

        let store = DirectoryStore::new(dir.path());
        let model = store.load("english").unwrap().unwrap();
        assert_eq!(model.language(), "english");
        assert!(model.contains_abbreviations(["dr"]));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(store.load("english").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("english.json"), "{ this is not json").unwrap();

        let store = DirectoryStore::new(dir.path());
        let err = store.load("english").unwrap_err();
        assert!(matches!(err, LexisError::MalformedResource { .. }));
    }
}
