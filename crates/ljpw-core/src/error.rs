//! Error types for ljpw-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the ljpw-core crate, the fatal [`LoadError`] raised while building a
//! [`ConceptStore`](crate::store::ConceptStore), and the [`CoreResult<T>`]
//! type alias.
//!
//! # Examples
//!
//! ```rust
//! use ljpw_core::CoreError;
//!
//! fn lookup(name: &str) -> Result<(), CoreError> {
//!     Err(CoreError::not_found(name))
//! }
//!
//! let err = lookup("Serenity").unwrap_err();
//! assert!(err.is_recoverable());
//! assert!(err.to_string().contains("Serenity"));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading a concept dataset.
///
/// A store is never produced when any of these occur. There is no partial
/// load and no silent default.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset source could not be read.
    #[error("Failed to read dataset '{}': {}", .path.display(), .source)]
    Io {
        /// Path of the unreadable source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    /// The dataset is valid JSON but does not have the expected shape.
    ///
    /// # When This Occurs
    ///
    /// - Missing top-level `domains` object
    /// - A domain without a `concepts` object
    /// - A concept entry that is not an object or lacks `name`
    #[error("Invalid dataset structure at '{location}': {reason}")]
    Structure {
        /// Dotted location inside the document (e.g. `domains.virtues.concepts.love`)
        location: String,
        /// Description of the problem
        reason: String,
    },

    /// A concept's coordinates are malformed or out of range.
    ///
    /// `Constraint: coordinates.len() == 4 && all(0.0 <= x <= 1.0)`
    #[error("Invalid coordinates for concept '{concept}': {reason}")]
    InvalidCoordinate {
        /// Normalized key of the offending concept
        concept: String,
        /// Description of the problem
        reason: String,
    },

    /// Two concepts normalize to the same lookup key.
    #[error("Duplicate concept key '{key}' (domains '{first_domain}' and '{second_domain}')")]
    DuplicateConcept {
        /// The colliding normalized key
        key: String,
        /// Domain of the first occurrence
        first_domain: String,
        /// Domain of the second occurrence
        second_domain: String,
    },

    /// The dataset parsed correctly but holds no concepts.
    #[error("Dataset contains no concepts")]
    EmptyDataset,
}

/// Top-level error type for ljpw-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The dataset could not be loaded. Fatal.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A name lookup found no concept.
    ///
    /// Recoverable: callers decide on a fallback such as the Natural
    /// Equilibrium coordinate.
    #[error("Concept not found: {name}")]
    NotFound {
        /// The name as supplied by the caller
        name: String,
    },

    /// A coordinate failed validation.
    ///
    /// # When This Occurs
    ///
    /// - A component is NaN or infinite
    /// - A component lies outside `[0, 1]`
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for ljpw-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl LoadError {
    /// Create a structure error at a dotted document location.
    pub fn structure(location: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Structure {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-coordinate error for a concept.
    pub fn invalid_coordinate(concept: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::InvalidCoordinate {
            concept: concept.into(),
            reason: reason.into(),
        }
    }
}

impl CoreError {
    /// Create a not-found error for a name.
    pub fn not_found(name: impl Into<String>) -> Self {
        CoreError::NotFound { name: name.into() }
    }

    /// Create a validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is recoverable by the caller.
    ///
    /// Load failures are fatal; lookups and validation are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::NotFound { .. } | CoreError::ValidationError { .. }
        )
    }

    /// Check if this error came from the load phase.
    pub fn is_load_error(&self) -> bool {
        matches!(self, CoreError::Load(_))
    }
}
