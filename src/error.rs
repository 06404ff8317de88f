//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], whose error type is the closed
//! [`LexisError`] enum. The three kinds a caller is expected to match on are
//! [`LexisError::UnsupportedLanguage`], [`LexisError::MalformedResource`] and
//! [`LexisError::MissingDependency`]; the remaining variants carry lower-level
//! failures from collaborators.
//!
//! # Examples
//!
//! ```
//! use lexis::error::LexisError;
//! use lexis::Tokenizer;
//!
//! match Tokenizer::new("klingon") {
//!     Err(LexisError::UnsupportedLanguage(code)) => assert_eq!(code, "klingon"),
//!     other => panic!("expected UnsupportedLanguage, got {other:?}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// No special-case strategy and no resource-store entry for the language.
    #[error(
        "Unsupported language: {0}. No sentence model is available for this language; \
         provide one through a directory resource store or check the language code."
    )]
    UnsupportedLanguage(String),

    /// A resource-store entry exists but cannot be read or parsed.
    #[error(
        "Malformed resource for language '{language}': {detail}. \
         The model artifact is present but unusable and needs to be repaired or replaced."
    )]
    MalformedResource {
        /// Canonical language code whose artifact failed to load.
        language: String,
        /// Parser or reader failure detail.
        detail: String,
    },

    /// An optional segmentation capability is not available in this build.
    #[error("Missing dependency: {capability} is not available. {hint}")]
    MissingDependency {
        /// Human-readable name of the absent capability.
        capability: String,
        /// How to obtain the capability (cargo feature, builder registration).
        hint: String,
    },

    /// A segmentation engine failed while processing text.
    #[error("Engine error: {0}")]
    Engine(String),

    /// An invalid segmentation pattern was supplied.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O errors from resource providers.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with [`LexisError`].
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new unsupported-language error.
    pub fn unsupported_language<S: Into<String>>(code: S) -> Self {
        LexisError::UnsupportedLanguage(code.into())
    }

    /// Create a new malformed-resource error.
    pub fn malformed_resource<L: Into<String>, D: Into<String>>(language: L, detail: D) -> Self {
        LexisError::MalformedResource {
            language: language.into(),
            detail: detail.into(),
        }
    }

    /// Create a new missing-dependency error.
    pub fn missing_dependency<C: Into<String>, H: Into<String>>(capability: C, hint: H) -> Self {
        LexisError::MissingDependency {
            capability: capability.into(),
            hint: hint.into(),
        }
    }

    /// Create a new engine error.
    pub fn engine<S: Into<String>>(msg: S) -> Self {
        LexisError::Engine(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexisError::unsupported_language("tlh");
        assert!(err.to_string().starts_with("Unsupported language: tlh"));

        let err = LexisError::malformed_resource("english", "unexpected end of input");
        assert!(err.to_string().contains("english"));
        assert!(err.to_string().contains("unexpected end of input"));

        let err = LexisError::missing_dependency(
            "Japanese segmentation",
            "Enable the `japanese` feature.",
        );
        assert!(err.to_string().contains("Japanese segmentation"));
        assert!(err.to_string().contains("`japanese` feature"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: LexisError = io_err.into();
        assert!(matches!(err, LexisError::Io(_)));
    }
}
