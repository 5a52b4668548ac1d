//! Helper Functions: fixture loading and shared assertions

use std::path::PathBuf;
use std::sync::Arc;

use ljpw_core::{ConceptStore, Coordinate};
use ljpw_engine::{EngineConfig, SemanticEngine};

/// Path of the fixture dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("concepts.json")
}

pub fn fixture_store() -> Arc<ConceptStore> {
    Arc::new(ConceptStore::from_path(fixture_path()).expect("fixture dataset must load"))
}

/// Engine over the fixture dataset with default configuration.
pub fn fixture_engine() -> SemanticEngine {
    SemanticEngine::new(fixture_store(), EngineConfig::default()).expect("default config is valid")
}

/// Assert every axis lies in `[0, 1]`.
pub fn assert_in_unit_cube(coordinate: &Coordinate, label: &str) {
    for (i, v) in coordinate.as_array().iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(v),
            "{}: axis {} = {} out of [0, 1]",
            label,
            i,
            v
        );
    }
}
