//! Named anchor points of the concept store.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Normalize a concept name into its lookup key.
///
/// Lowercases, trims, and collapses every run of whitespace, underscores and
/// hyphens into a single `_`, so `"Kingdom of God"`, `"kingdom_of_god"` and
/// `"  KINGDOM  OF-GOD "` share one key.
///
/// # Example
///
/// ```
/// use ljpw_core::normalize_key;
///
/// assert_eq!(normalize_key("Kingdom of God"), "kingdom_of_god");
/// assert_eq!(normalize_key(" holy__Spirit "), "holy_spirit");
/// ```
pub fn normalize_key(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// A named, persisted anchor point with definition and domain tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Normalized lookup key (see [`normalize_key`]).
    pub key: String,

    /// Display name as written in the dataset.
    pub name: String,

    /// Position in the semantic space.
    pub coordinate: Coordinate,

    /// Free-text definition; empty when the dataset omits it.
    #[serde(default)]
    pub definition: String,

    /// Grouping tag (the dataset domain the concept was loaded from).
    pub domain: String,
}

impl Concept {
    /// Create a concept whose key is derived from its name.
    pub fn new(name: impl Into<String>, coordinate: Coordinate, domain: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: normalize_key(&name),
            name,
            coordinate,
            definition: String::new(),
            domain: domain.into(),
        }
    }

    /// Set the definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Override the lookup key (normalized).
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = normalize_key(key);
        self
    }

    /// Check whether `name` resolves to this concept's key or display name.
    pub fn matches_name(&self, name: &str) -> bool {
        let normalized = normalize_key(name);
        normalized == self.key || normalized == normalize_key(&self.name)
    }
}
