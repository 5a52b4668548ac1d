//! Resonance Matching Tests
//!
//! Ranking size, ordering, determinism and the harmonic term over the
//! fixture dataset.

use ljpw_core::Coordinate;
use ljpw_engine::config::MatcherConfig;
use ljpw_engine::{HarmonicBand, ResonanceClass, ResonanceMatcher};

use super::helpers::{fixture_engine, fixture_store};

// =============================================================================
// RANKING
// =============================================================================

#[test]
fn test_result_count_is_min_of_k_and_n() {
    let engine = fixture_engine();
    let n = engine.store().len();
    let q = Coordinate::clamped(0.6, 0.7, 0.5, 0.8);

    for k in 0..(n + 3) {
        assert_eq!(engine.match_coordinate(&q, k).len(), k.min(n), "k = {}", k);
    }
}

#[test]
fn test_ranking_descending_and_deterministic() {
    let engine = fixture_engine();
    let q = Coordinate::clamped(0.8, 0.7, 0.4, 0.9);

    let first = engine.match_coordinate(&q, 20);
    for _ in 0..5 {
        assert_eq!(engine.match_coordinate(&q, 20), first);
    }
    for pair in first.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
    println!(
        "[PASS] Top match for {:?} is {} ({:.3})",
        q.as_array(),
        first[0].concept.name,
        first[0].strength
    );
}

#[test]
fn test_every_concept_is_its_own_best_match() {
    let engine = fixture_engine();
    for concept in engine.store().iter() {
        let best = &engine.match_coordinate(&concept.coordinate, 1)[0];
        assert_eq!(best.concept.key, concept.key);
    }
    println!("[PASS] Self-nearest holds for all fixture concepts");
}

// =============================================================================
// TERMS
// =============================================================================

#[test]
fn test_unison_pair_is_harmonic() {
    let engine = fixture_engine();
    let harmony = engine.lookup("Harmony").unwrap();
    let best = &engine.match_coordinate(&harmony.coordinate, 1)[0];

    assert!(best.terms.harmonic > 0.0);
    assert!(best.harmonics.iter().any(|m| m.band == HarmonicBand::Unison));
}

#[test]
fn test_no_band_gives_zero_harmonic() {
    let store = fixture_store();
    let matcher = ResonanceMatcher::default();
    let q = Coordinate::clamped(0.2, 0.5, 0.9, 0.35);
    let chaos = store.get("Chaos").unwrap();

    let result = matcher.score(&q, chaos);
    assert_eq!(result.terms.harmonic, 0.0);
    assert!(result.harmonics.is_empty());
}

#[test]
fn test_classification_matches_strength() {
    let engine = fixture_engine();
    let config = MatcherConfig::default();
    let q = Coordinate::clamped(0.9, 0.9, 0.5, 0.9);

    for result in engine.match_coordinate(&q, 20) {
        let expected = if result.strength > config.strong_threshold {
            ResonanceClass::Strong
        } else if result.strength > config.moderate_threshold {
            ResonanceClass::Moderate
        } else {
            ResonanceClass::Weak
        };
        assert_eq!(result.classification, expected);
    }
}

// =============================================================================
// DOMAINS
// =============================================================================

#[test]
fn test_priority_domain_only_reranks() {
    let store = fixture_store();
    let q = Coordinate::clamped(0.5, 0.6, 0.7, 0.6);
    let plain = ResonanceMatcher::default().match_store(&q, &store, 50);
    let boosted = ResonanceMatcher::new(MatcherConfig {
        priority_domains: vec!["forces".to_string()],
        ..MatcherConfig::default()
    })
    .match_store(&q, &store, 50);

    assert_eq!(plain.len(), boosted.len());
    for result in &boosted {
        let before = plain
            .iter()
            .find(|r| r.concept.key == result.concept.key)
            .unwrap();
        if result.concept.domain == "forces" {
            assert!(result.boosted);
            assert!(result.strength >= before.strength);
        } else {
            assert!(!result.boosted);
            assert_eq!(result.strength, before.strength);
        }
    }
}

#[test]
fn test_match_domain() {
    let engine = fixture_engine();
    let q = Coordinate::uniform(0.6);
    let results = engine.match_domain(&q, "virtues", 100);
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.concept.domain == "virtues"));
}
