//! End-to-End Tests
//!
//! Loading from disk, configuration files, JSON output and concurrent use
//! of a shared engine.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use ljpw_core::{CoreError, LoadError};
use ljpw_engine::{EngineConfig, EngineError, SemanticEngine};
use tempfile::NamedTempFile;

use super::helpers::{fixture_engine, fixture_path};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_fixture_from_path() {
    let engine = SemanticEngine::load(fixture_path(), EngineConfig::default()).unwrap();
    let stats = engine.store().stats();

    assert_eq!(engine.store().len(), 16);
    assert_eq!(engine.store().domains().len(), 4);
    assert_eq!(stats.concepts, 16);
    assert_eq!(stats.domains, 4);
    assert!(stats.source.contains("concepts.json"));
    assert_eq!(engine.lookup("spirit").unwrap().definition, "");
    println!("[PASS] Loaded {} concepts", engine.store().len());
}

#[test]
fn test_load_failures_are_fatal() {
    let missing = SemanticEngine::load("/nonexistent/ljpw/concepts.json", EngineConfig::default())
        .unwrap_err();
    assert!(matches!(missing, EngineError::Core(CoreError::Load(LoadError::Io { .. }))));
    assert!(!missing.is_recoverable());

    let duplicate = write_temp(
        r#"{"domains": {
            "a": {"concepts": {"love": {"name": "Love", "coordinates": [0.9, 0.6, 0.4, 0.7]}}},
            "b": {"concepts": {"love": {"name": "Love", "coordinates": [0.8, 0.6, 0.4, 0.7]}}}
        }}"#,
    );
    let err = SemanticEngine::load(duplicate.path(), EngineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::Load(LoadError::DuplicateConcept { .. }))
    ));

    let empty = write_temp(r#"{"domains": {}}"#);
    let err = SemanticEngine::load(empty.path(), EngineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::Load(LoadError::EmptyDataset))
    ));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_engine_from_config_file() {
    let toml = format!(
        "[dataset]\npath = {:?}\n\n[matcher]\ntop_n = 3\npriority_domains = [\"theology\"]\n",
        fixture_path().display().to_string()
    );
    let file = write_temp(&toml);

    let config = EngineConfig::from_file(file.path()).unwrap();
    let engine = SemanticEngine::from_config(config).unwrap();

    let analysis = engine.analyze("Kingdom of God", None, None);
    assert_eq!(analysis.matches.len(), 3);
    assert!(analysis.matches.iter().any(|m| m.boosted));
}

#[test]
fn test_env_style_overrides() {
    let vars: HashMap<&str, String> = [
        ("LJPW_DATASET_PATH", fixture_path().display().to_string()),
        ("LJPW_MATCHER_TOP_N", "2".to_string()),
    ]
    .into_iter()
    .collect();

    let config = EngineConfig::default().with_overrides_from(|key| vars.get(key).cloned());
    let engine = SemanticEngine::from_config(config).unwrap();
    assert_eq!(engine.analyze("love", None, None).matches.len(), 2);
}

#[test]
fn test_invalid_config_file_rejected() {
    let file = write_temp("[matcher]\ndistance_weight = 0.9\n");
    let config = EngineConfig::from_file(file.path()).unwrap();
    let err = SemanticEngine::new(
        Arc::new(ljpw_core::ConceptStore::from_path(fixture_path()).unwrap()),
        config,
    )
    .unwrap_err();
    assert!(err.to_string().contains("[matcher]"));
}

// =============================================================================
// OUTPUT
// =============================================================================

#[test]
fn test_results_serialize_to_json() {
    let engine = fixture_engine();

    let composed = serde_json::to_value(engine.compose("Kingdom of God").unwrap()).unwrap();
    assert_eq!(composed["structure"], "modifier_head");
    assert_eq!(composed["components"][1]["role"], "head");
    assert_eq!(composed["coordinate"].as_array().unwrap().len(), 4);

    let analysis = serde_json::to_value(engine.analyze("Light", Some("truth"), Some(2))).unwrap();
    assert_eq!(analysis["matches"].as_array().unwrap().len(), 2);
    assert!(analysis["matches"][0]["concept"]["name"].is_string());
    assert!(analysis["signature"]["confidence"].is_number());
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(fixture_engine());
    let expected = engine.compose("Kingdom of God").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let composed = engine.compose("Kingdom of God").unwrap();
                let signature = engine.detect("Light", Some("Sun shines bright"));
                let top = engine.match_coordinate(&signature.coordinate, 1 + i % 3).len();
                (composed, top)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (composed, top) = handle.join().expect("worker thread panicked");
        assert_eq!(composed, expected);
        assert_eq!(top, 1 + i % 3);
    }
    println!("[PASS] Engine shared across 8 threads");
}
