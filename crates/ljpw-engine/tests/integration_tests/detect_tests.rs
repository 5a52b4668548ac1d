//! Signature Detection Tests
//!
//! Calibration, context sensitivity and bounds of `detect` on the fixture
//! dataset.

use ljpw_core::NATURAL_EQUILIBRIUM;
use ljpw_engine::config::DetectorConfig;
use ljpw_engine::signature::{
    SignatureDetector, CONTEXT_SEPARATION_THRESHOLD, HIGH_CONFIDENCE_THRESHOLD,
    LOW_CONFIDENCE_THRESHOLD,
};

use super::helpers::{assert_in_unit_cube, fixture_engine};

// =============================================================================
// EMPTY AND UNKNOWN INPUT
// =============================================================================

#[test]
fn test_empty_text_is_equilibrium() {
    let engine = fixture_engine();

    for text in ["", "   ", "?!", "of the"] {
        let signature = engine.detect(text, None);
        assert_eq!(signature.confidence, 0.0, "{:?}", text);
        assert_eq!(signature.coordinate, NATURAL_EQUILIBRIUM, "{:?}", text);
    }
    println!("[PASS] Empty and stopword-only text maps to the Natural Equilibrium");
}

#[test]
fn test_unknown_tokens_are_low_confidence() {
    let engine = fixture_engine();
    let signature = engine.detect("qwxz blorf vrumm", None);
    assert!(signature.confidence < LOW_CONFIDENCE_THRESHOLD);
    assert!(signature.is_low_confidence());
}

// =============================================================================
// CALIBRATION
// =============================================================================

#[test]
fn test_compound_at_least_as_confident_as_part() {
    let engine = fixture_engine();
    let compound = engine.detect("Kingdom of God", None);
    let part = engine.detect("Kingdom", None);

    assert!(
        compound.confidence >= part.confidence,
        "compound {} < part {}",
        compound.confidence,
        part.confidence
    );
    assert!(compound.longest_phrase >= 3);
    println!(
        "[PASS] Kingdom of God {:.3} >= Kingdom {:.3}",
        compound.confidence, part.confidence
    );
}

#[test]
fn test_known_compounds_are_high_confidence() {
    let engine = fixture_engine();
    for text in ["Kingdom of God", "Fear of the Lord", "Holy Spirit"] {
        let signature = engine.detect(text, None);
        assert!(
            signature.confidence >= HIGH_CONFIDENCE_THRESHOLD,
            "{}: {}",
            text,
            signature.confidence
        );
    }
}

#[test]
fn test_detection_without_store() {
    let detector = SignatureDetector::new(&DetectorConfig::default());
    assert!(detector.detect("Kingdom of God", None).is_high_confidence());
    assert!(detector.detect("qwxz", None).is_low_confidence());
}

// =============================================================================
// CONTEXT
// =============================================================================

#[test]
fn test_context_separates_light() {
    let engine = fixture_engine();
    let sunny = engine.detect("Light", Some("Sun shines bright"));
    let wise = engine.detect("Light", Some("Truth and wisdom"));

    let separation = sunny.coordinate.distance(&wise.coordinate);
    assert!(
        separation > CONTEXT_SEPARATION_THRESHOLD,
        "separation {} <= {}",
        separation,
        CONTEXT_SEPARATION_THRESHOLD
    );
    assert!(sunny.coordinate.p() > wise.coordinate.p());
    println!("[PASS] Context separation for 'Light' = {:.3}", separation);
}

#[test]
fn test_contributions_report_every_layer() {
    let engine = fixture_engine();
    let signature = engine.detect("Light", Some("Sun shines bright"));

    assert_eq!(signature.contributions.len(), 4);
    assert!(signature.contribution("context").unwrap().matches > 0);
    let total: f64 = signature.contributions.iter().map(|c| c.weight).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

// =============================================================================
// BATCH AND BOUNDS
// =============================================================================

#[test]
fn test_batch_matches_sequential() {
    let engine = fixture_engine();
    let items: Vec<(&str, Option<&str>)> = vec![
        ("love and mercy", None),
        ("Light", Some("Sun shines bright")),
        ("", None),
        ("the rule of law", Some("justice for all")),
        ("qwxz", None),
    ];

    let batch = engine.detect_batch(&items);
    assert_eq!(batch.len(), items.len());
    for (signature, (text, context)) in batch.iter().zip(&items) {
        assert_eq!(signature, &engine.detect(text, *context));
    }
}

#[test]
fn test_coordinates_always_in_range() {
    let engine = fixture_engine();
    let texts = [
        "Love is patient, love is kind",
        "THE KINGDOM OF GOD IS AT HAND",
        "power power power power power",
        "don't judge lest ye be judged",
        "wisdom’s light",
        "1234 5678",
        "ünïcödé wörds",
    ];
    for text in texts {
        let signature = engine.detect(text, Some("truth and mercy"));
        assert_in_unit_cube(&signature.coordinate, text);
        assert!((0.0..=1.0).contains(&signature.confidence));
    }
}
