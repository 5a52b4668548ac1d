//! LJPW semantic coordinate engine.
//!
//! Places text in a four-dimensional space of Love, Justice, Power and
//! Wisdom, each axis in `[0, 1]`, on top of the read-only concept store
//! from `ljpw-core`.
//!
//! # Modules
//!
//! - [`config`]: Engine configuration (TOML, env overrides, validation)
//! - [`error`]: Error types and result aliases
//! - [`signature`]: Coordinate estimation from raw text via evidence layers
//! - [`composition`]: Coordinates for multi-word phrases from their parts
//! - [`resonance`]: Multi-term ranking of concepts against a coordinate
//! - [`engine`]: The [`SemanticEngine`] facade tying them together
//!
//! # Example
//!
//! ```
//! use ljpw_engine::config::DetectorConfig;
//! use ljpw_engine::signature::SignatureDetector;
//! use ljpw_core::NATURAL_EQUILIBRIUM;
//!
//! let detector = SignatureDetector::new(&DetectorConfig::default());
//!
//! let signature = detector.detect("Kingdom of God", None);
//! assert!(signature.is_high_confidence());
//!
//! let unknown = detector.detect("qwxz", None);
//! assert_eq!(unknown.confidence, 0.0);
//! assert_eq!(unknown.coordinate, NATURAL_EQUILIBRIUM);
//! ```

pub mod composition;
pub mod config;
pub mod engine;
pub mod error;
pub mod resonance;
pub mod signature;

pub use composition::{Composer, CompositionResult, Role, Structure};
pub use config::EngineConfig;
pub use engine::{Analysis, SemanticEngine};
pub use error::{EngineError, EngineResult};
pub use resonance::{HarmonicBand, ResonanceClass, ResonanceMatcher, ResonanceResult};
pub use signature::{EvidenceLayer, Signature, SignatureDetector};

// Core types callers need alongside the engine
pub use ljpw_core::{Axis, Concept, ConceptStore, Coordinate, CoreError, LoadError};
