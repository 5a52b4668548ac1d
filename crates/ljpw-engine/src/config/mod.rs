//! Engine configuration types.
//!
//! Every numeric constant the engine uses lives here, with defaults matching
//! the documented behaviour. Configuration can be loaded from TOML and
//! overridden through `LJPW_*` environment variables.
//!
//! # TOML Structure
//!
//! ```toml
//! [dataset]
//! path = "data/concepts.json"
//!
//! [detector]
//! max_phrase_tokens = 4
//! phrase_base_confidence = 0.75
//!
//! [composer]
//! equilibrium_pull = 0.05
//!
//! [matcher]
//! top_n = 10
//! priority_domains = ["virtues"]
//! ```
//!
//! Every section and every field is optional; missing values take their
//! defaults.

mod composer;
mod dataset;
mod detector;
mod matcher;


pub use self::composer::ComposerConfig;
pub use self::dataset::DatasetConfig;
pub use self::detector::DetectorConfig;
pub use self::matcher::MatcherConfig;

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Top-level engine configuration.
///
/// # Example
///
/// ```
/// use ljpw_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.matcher.top_n, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dataset location.
    pub dataset: DatasetConfig,

    /// Signature detector settings.
    pub detector: DetectorConfig,

    /// Phrase composition settings.
    pub composer: ComposerConfig,

    /// Resonance matching settings.
    pub matcher: MatcherConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `EngineError::ConfigError` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| {
            EngineError::ConfigError(format!(
                "Failed to parse TOML in '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "engine configuration loaded");
        Ok(config)
    }

    /// Create configuration from a TOML string.
    ///
    /// # Errors
    /// - `EngineError::ConfigError` if TOML parsing fails
    pub fn from_toml_str(toml: &str) -> EngineResult<Self> {
        toml::from_str(toml)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string.
    ///
    /// # Errors
    /// - `EngineError::ConfigError` if serialization fails
    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::ConfigError(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Validate every section, returning the first error found.
    ///
    /// The message is prefixed with the failing section, e.g.
    /// `[matcher] composite weights must sum to 1.0, got 1.1`.
    pub fn validate(&self) -> EngineResult<()> {
        self.dataset
            .validate()
            .map_err(|e| EngineError::ConfigError(format!("[dataset] {}", e)))?;

        self.detector
            .validate()
            .map_err(|e| EngineError::ConfigError(format!("[detector] {}", e)))?;

        self.composer
            .validate()
            .map_err(|e| EngineError::ConfigError(format!("[composer] {}", e)))?;

        self.matcher
            .validate()
            .map_err(|e| EngineError::ConfigError(format!("[matcher] {}", e)))?;

        Ok(())
    }

    /// Apply environment variable overrides.
    ///
    /// # Supported Variables
    ///
    /// | Variable | Config Path | Type |
    /// |----------|-------------|------|
    /// | `LJPW_DATASET_PATH` | `dataset.path` | path |
    /// | `LJPW_MATCHER_TOP_N` | `matcher.top_n` | usize |
    /// | `LJPW_MATCHER_PRIORITY_DOMAINS` | `matcher.priority_domains` | comma separated |
    /// | `LJPW_DETECTOR_MAX_PHRASE_TOKENS` | `detector.max_phrase_tokens` | usize |
    ///
    /// Values that fail to parse are ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// `with_env_overrides` is this function reading the process environment.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("LJPW_DATASET_PATH") {
            if !val.trim().is_empty() {
                self.dataset.path = Some(PathBuf::from(val.trim()));
            }
        }

        if let Some(val) = lookup("LJPW_MATCHER_TOP_N") {
            if let Ok(n) = val.trim().parse::<usize>() {
                self.matcher.top_n = n;
            }
        }

        if let Some(val) = lookup("LJPW_MATCHER_PRIORITY_DOMAINS") {
            self.matcher.priority_domains = val
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("LJPW_DETECTOR_MAX_PHRASE_TOKENS") {
            if let Ok(n) = val.trim().parse::<usize>() {
                self.detector.max_phrase_tokens = n;
            }
        }

        self
    }
}
