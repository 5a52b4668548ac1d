//! The four resonance terms, each in `[0, 1]`.

use ljpw_core::{Axis, Coordinate};

use crate::config::MatcherConfig;

/// `1 / (1 + scale × distance)`.
pub fn distance_strength(distance: f64, scale: f64) -> f64 {
    let strength = 1.0 / (1.0 + scale * distance.max(0.0));
    if strength.is_finite() {
        strength
    } else {
        0.0
    }
}

/// `alignment_step` for every axis where both values are high or both low.
pub fn alignment_strength(query: &Coordinate, candidate: &Coordinate, config: &MatcherConfig) -> f64 {
    let aligned = Axis::ALL
        .iter()
        .filter(|&&axis| {
            let (q, c) = (query.get(axis), candidate.get(axis));
            (q > config.alignment_high && c > config.alignment_high)
                || (q < config.alignment_low && c < config.alignment_low)
        })
        .count();
    (config.alignment_step * aligned as f64).min(1.0)
}

/// `1 − mean(|Δe₁|, |Δe₂|)` over the emergent composites, floored at 0.
pub fn emergent_similarity(query: &Coordinate, candidate: &Coordinate) -> f64 {
    let (q1, q2) = query.emergent_composites();
    let (c1, c2) = candidate.emergent_composites();
    let mean_delta = ((q1 - c1).abs() + (q2 - c2).abs()) / 2.0;
    (1.0 - mean_delta).max(0.0)
}
