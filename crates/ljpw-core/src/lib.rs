//! LJPW Core Library
//!
//! Core coordinate types and the immutable concept store for the LJPW
//! semantic coordinate engine.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types ([`Axis`], [`Coordinate`], [`Concept`])
//! - The reference points [`NATURAL_EQUILIBRIUM`] and [`ANCHOR_POINT`]
//! - The read-only [`ConceptStore`] (load, lookup, nearest neighbours)
//! - Error types and result aliases
//!
//! Scoring, detection and composition live in `ljpw-engine`.
//!
//! # Example
//!
//! ```
//! use ljpw_core::{ConceptStore, Coordinate, NATURAL_EQUILIBRIUM};
//!
//! let json = r#"{"domains": {"virtues": {"concepts": {
//!     "wisdom": {"name": "Wisdom", "coordinates": [0.65, 0.70, 0.50, 0.95]}
//! }}}}"#;
//! let store = ConceptStore::from_json_str(json).unwrap();
//!
//! // Lookup falls back to the Natural Equilibrium at the caller's discretion.
//! let coordinate = store
//!     .get("serenity")
//!     .map(|c| c.coordinate)
//!     .unwrap_or(NATURAL_EQUILIBRIUM);
//! assert_eq!(coordinate, NATURAL_EQUILIBRIUM);
//! ```

pub mod error;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use error::{CoreError, CoreResult, LoadError};
pub use store::{ConceptStore, Neighbor, StoreStats};
pub use types::{
    normalize_key, sanitize_component, Axis, Concept, Coordinate, ANCHOR_POINT, AXIS_COUNT,
    AXIS_PAIR_COUNT, NATURAL_EQUILIBRIUM, NUMERIC_EPSILON,
};
