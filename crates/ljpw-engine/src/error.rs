//! Engine error types.
//!
//! This module defines the error type for detection, composition, matching
//! and configuration. Detection never fails; composition fails only when the
//! phrase is empty or names concepts the store does not hold.

use ljpw_core::{CoreError, LoadError};
use thiserror::Error;

/// Errors that can occur in the semantic engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A phrase names components that do not resolve in the concept store.
    ///
    /// `missing` lists the unresolved components in phrase order, as written
    /// (after leading articles are stripped).
    #[error("Cannot compose '{}': unknown components [{}]", .phrase, .missing.join(", "))]
    MissingComponents {
        /// The phrase as given
        phrase: String,
        /// Unresolved components, in phrase order
        missing: Vec<String>,
    },

    /// Empty or whitespace-only input where a phrase was required.
    #[error("Empty input provided for composition")]
    EmptyInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the concept store or core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<LoadError> for EngineError {
    fn from(err: LoadError) -> Self {
        EngineError::Core(CoreError::Load(err))
    }
}

impl EngineError {
    /// Create a MissingComponents error.
    pub fn missing_components(phrase: impl Into<String>, missing: Vec<String>) -> Self {
        EngineError::MissingComponents {
            phrase: phrase.into(),
            missing,
        }
    }

    /// Check if this error is recoverable (the caller can retry with different input).
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::MissingComponents { .. } | EngineError::EmptyInput => true,
            EngineError::Core(inner) => inner.is_recoverable(),
            _ => false,
        }
    }

    /// The unresolved component names, if this is a MissingComponents error.
    pub fn missing(&self) -> Option<&[String]> {
        match self {
            EngineError::MissingComponents { missing, .. } => Some(missing),
            _ => None,
        }
    }
}
