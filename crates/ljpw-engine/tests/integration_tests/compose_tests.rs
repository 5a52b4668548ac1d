//! Phrase Composition Tests
//!
//! Structure recognition, negation symmetry and missing-component reporting
//! against the fixture dataset.

use ljpw_engine::{EngineError, Role, Structure};

use super::helpers::{assert_in_unit_cube, fixture_engine};

// =============================================================================
// REFERENCE COMPOSITION
// =============================================================================

#[test]
fn test_kingdom_of_god_reference() {
    let engine = fixture_engine();
    let result = engine
        .compose("Kingdom of God")
        .expect("both components are in the fixture");

    assert_eq!(result.structure, Structure::ModifierHead);
    assert!(result.coordinate.l() >= 0.80, "L = {}", result.coordinate.l());
    assert!(result.coordinate.w() >= 0.90, "W = {}", result.coordinate.w());

    let god = result.component("God").unwrap();
    let kingdom = result.component("Kingdom").unwrap();
    assert_eq!(god.role, Role::Head);
    assert!(god.weight > kingdom.weight);
    println!(
        "[PASS] Kingdom of God = {:?} (God {:.3} > Kingdom {:.3})",
        result.coordinate.as_array(),
        god.weight,
        kingdom.weight
    );
}

#[test]
fn test_stored_phrase_resolves_whole() {
    let engine = fixture_engine();
    let result = engine.compose("the Fear of the Lord").unwrap();
    assert_eq!(result.structure, Structure::Single);
    assert_eq!(
        result.coordinate,
        engine.lookup("Fear of the Lord").unwrap().coordinate
    );
}

// =============================================================================
// NEGATION
// =============================================================================

#[test]
fn test_negation_is_elementwise_complement() {
    let engine = fixture_engine();
    for phrase in ["Love", "Kingdom of God", "Holy Spirit", "Love, Mercy and Truth"] {
        let plain = engine.compose(phrase).unwrap();
        let negated = engine.compose(&format!("not {}", phrase)).unwrap();

        assert_eq!(negated.structure, Structure::Negation);
        for (p, n) in plain
            .coordinate
            .as_array()
            .iter()
            .zip(negated.coordinate.as_array().iter())
        {
            assert!((1.0 - p - n).abs() < 1e-12, "{}: {} vs {}", phrase, p, n);
        }
    }
    println!("[PASS] compose(not X) == 1 - compose(X)");
}

// =============================================================================
// MISSING COMPONENTS
// =============================================================================

#[test]
fn test_unknown_token_in_any_position() {
    let engine = fixture_engine();
    let cases = [
        "Qwxz of God",
        "Kingdom of Qwxz",
        "Qwxz Spirit",
        "Holy Qwxz",
        "Qwxz and Mercy",
        "Love, Qwxz and Mercy",
        "Love, Mercy and Qwxz",
        "not Qwxz of God",
        "Qwxz",
    ];

    for phrase in cases {
        let err = engine.compose(phrase).unwrap_err();
        match &err {
            EngineError::MissingComponents { phrase: p, missing } => {
                assert_eq!(p, phrase);
                assert_eq!(missing, &vec!["Qwxz".to_string()], "{}", phrase);
            }
            other => panic!("{}: unexpected error {}", phrase, other),
        }
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Qwxz"));
    }
    println!("[PASS] Unknown components named exactly in every position");
}

#[test]
fn test_empty_phrase_is_rejected() {
    let engine = fixture_engine();
    let err = engine.compose("").unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput));
    assert!(err.is_recoverable());
}

// =============================================================================
// BOUNDS AND DETERMINISM
// =============================================================================

#[test]
fn test_composed_coordinates_in_range() {
    let engine = fixture_engine();
    let phrases = [
        "Kingdom of God",
        "Holy Spirit",
        "God and Love",
        "Power and Chaos",
        "not Power and Chaos",
        "Love, Justice, Mercy, Wisdom, Truth and Courage",
        "the Light of Truth",
    ];
    for phrase in phrases {
        let result = engine.compose(phrase).unwrap();
        assert_in_unit_cube(&result.coordinate, phrase);
        let total: f64 = result.components.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9, "{}: weights sum {}", phrase, total);
    }
}

#[test]
fn test_composition_is_deterministic() {
    let engine = fixture_engine();
    let first = engine.compose("Love and Justice").unwrap();
    let second = engine.compose("Love and Justice").unwrap();
    assert_eq!(first, second);
}
