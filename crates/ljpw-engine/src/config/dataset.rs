//! Dataset location settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the engine loads its concept dataset from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the JSON dataset. `None` means the caller supplies a store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    /// Validate the dataset configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err("path cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}
