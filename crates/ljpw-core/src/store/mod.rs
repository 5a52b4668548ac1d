//! Immutable in-memory concept database.
//!
//! A [`ConceptStore`] is built once from a dataset and never mutated. It
//! holds the concepts in document order, a normalized name → index map, and a
//! parallel coordinate matrix used for brute-force distance scans.
//!
//! # Example
//!
//! ```
//! use ljpw_core::{ConceptStore, Coordinate};
//!
//! let json = r#"{"domains": {"virtues": {"concepts": {
//!     "love": {"name": "Love", "coordinates": [0.95, 0.60, 0.40, 0.70]},
//!     "justice": {"name": "Justice", "coordinates": [0.50, 0.95, 0.60, 0.70]}
//! }}}}"#;
//!
//! let store = ConceptStore::from_json_str(json).unwrap();
//! assert_eq!(store.get("LOVE").unwrap().name, "Love");
//!
//! let query = Coordinate::new(0.9, 0.6, 0.4, 0.7).unwrap();
//! let nearest = store.nearest(&query, 1);
//! assert_eq!(nearest[0].concept.key, "love");
//! ```

mod dataset;


use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult, LoadError};
use crate::types::{normalize_key, Concept, Coordinate, AXIS_COUNT};

/// A concept paired with its distance from a query coordinate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Neighbor<'a> {
    /// The matched concept
    pub concept: &'a Concept,
    /// Euclidean distance from the query
    pub distance: f64,
}

/// Summary of a loaded store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    /// Number of concepts
    pub concepts: usize,
    /// Number of distinct domains
    pub domains: usize,
    /// Number of lookup keys (keys plus display-name aliases)
    pub lookup_keys: usize,
    /// When the store finished loading
    pub loaded_at: DateTime<Utc>,
    /// Human-readable description of the source
    pub source: String,
}

/// Immutable, read-only concept database.
///
/// `ConceptStore` is `Send + Sync`; share it between threads through an
/// `Arc` without any locking.
#[derive(Debug, Clone)]
pub struct ConceptStore {
    concepts: Vec<Concept>,
    matrix: Vec<[f64; AXIS_COUNT]>,
    index: HashMap<String, usize>,
    domains: Vec<String>,
    stats: StoreStats,
}

impl ConceptStore {
    /// Load a store from a dataset file.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]: unreadable file, invalid JSON, invalid structure,
    /// malformed or out-of-range coordinates, duplicate keys, or no concepts.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let concepts = dataset::parse_dataset(&contents)?;
        Self::build(concepts, path.display().to_string())
    }

    /// Load a store from a JSON document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let concepts = dataset::parse_dataset(json)?;
        Self::build(concepts, "<memory>".to_string())
    }

    /// Load a store from an already-decoded JSON value.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, LoadError> {
        let concepts = dataset::parse_value(value)?;
        Self::build(concepts, "<value>".to_string())
    }

    /// Load a store from any reader producing a JSON document.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|source| LoadError::Io {
                path: "<reader>".into(),
                source,
            })?;
        let concepts = dataset::parse_dataset(&contents)?;
        Self::build(concepts, "<reader>".to_string())
    }

    /// Build a store from concepts constructed in code.
    ///
    /// Concepts keep the given order. Keys are re-normalized.
    pub fn from_concepts(concepts: Vec<Concept>) -> Result<Self, LoadError> {
        let concepts = concepts
            .into_iter()
            .map(|mut c| {
                c.key = normalize_key(&c.key);
                c
            })
            .collect();
        Self::build(concepts, "<concepts>".to_string())
    }

    fn build(concepts: Vec<Concept>, source: String) -> Result<Self, LoadError> {
        if concepts.is_empty() {
            return Err(LoadError::EmptyDataset);
        }

        let mut index: HashMap<String, usize> = HashMap::with_capacity(concepts.len() * 2);
        for (i, concept) in concepts.iter().enumerate() {
            if concept.key.is_empty() {
                return Err(LoadError::structure(
                    format!("concepts[{}]", i),
                    "concept key is empty",
                ));
            }
            if let Some(&first) = index.get(&concept.key) {
                return Err(LoadError::DuplicateConcept {
                    key: concept.key.clone(),
                    first_domain: concepts[first].domain.clone(),
                    second_domain: concept.domain.clone(),
                });
            }
            index.insert(concept.key.clone(), i);
        }

        // Display names are aliases; a key always wins over a name.
        for (i, concept) in concepts.iter().enumerate() {
            let alias = normalize_key(&concept.name);
            if !alias.is_empty() {
                index.entry(alias).or_insert(i);
            }
        }

        let matrix = concepts.iter().map(|c| c.coordinate.as_array()).collect();

        let mut domains: Vec<String> = Vec::new();
        for concept in &concepts {
            if !domains.iter().any(|d| d == &concept.domain) {
                domains.push(concept.domain.clone());
            }
        }

        let stats = StoreStats {
            concepts: concepts.len(),
            domains: domains.len(),
            lookup_keys: index.len(),
            loaded_at: Utc::now(),
            source,
        };

        info!(
            concepts = stats.concepts,
            domains = stats.domains,
            lookup_keys = stats.lookup_keys,
            source = %stats.source,
            "Concept store loaded"
        );

        Ok(Self {
            concepts,
            matrix,
            index,
            domains,
            stats,
        })
    }

    /// Look up a concept by name (case, space, underscore and hyphen insensitive).
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when no key or display name matches.
    pub fn get(&self, name: &str) -> CoreResult<&Concept> {
        self.find(name).ok_or_else(|| CoreError::not_found(name))
    }

    /// Look up a concept by name, returning `None` when absent.
    pub fn find(&self, name: &str) -> Option<&Concept> {
        self.index
            .get(&normalize_key(name))
            .map(|&i| &self.concepts[i])
    }

    /// Look up by an already-normalized key.
    pub fn find_normalized(&self, key: &str) -> Option<&Concept> {
        self.index.get(key).map(|&i| &self.concepts[i])
    }

    /// Check whether a name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// The `k` concepts closest to `coordinate`, by ascending Euclidean distance.
    ///
    /// Ties keep insertion order. Returns `min(k, len)` neighbours.
    pub fn nearest(&self, coordinate: &Coordinate, k: usize) -> Vec<Neighbor<'_>> {
        if k == 0 {
            return Vec::new();
        }

        let query = coordinate.as_array();
        let mut scored: Vec<(usize, f64)> = self
            .matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let sq: f64 = row
                    .iter()
                    .zip(query.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                (i, sq.sqrt())
            })
            .collect();

        // Stable: equal distances keep ascending index order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);

        debug!(k, returned = scored.len(), "nearest scan complete");

        scored
            .into_iter()
            .map(|(i, distance)| Neighbor {
                concept: &self.concepts[i],
                distance,
            })
            .collect()
    }

    /// Number of concepts.
    #[inline]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the store is empty. Always `false` for a loaded store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Concepts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }

    /// All concepts as a slice, in insertion order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Domain names in first-seen order.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Concepts tagged with `domain`, in insertion order.
    pub fn by_domain<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a Concept> + 'a {
        self.concepts.iter().filter(move |c| c.domain == domain)
    }

    /// Load summary.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }
}

impl<'a> IntoIterator for &'a ConceptStore {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}
