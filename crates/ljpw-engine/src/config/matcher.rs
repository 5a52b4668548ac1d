//! Resonance matching settings.
//!
//! Controls the four-term composite score, the harmonic band detector, domain
//! boosts, and the strong/moderate/weak classification.

use serde::{Deserialize, Serialize};

/// Tolerance used when checking that the term weights sum to 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Resonance matching settings.
///
/// # Composite
///
/// `strength = distance_weight·D + harmonic_weight·H + alignment_weight·A + emergent_weight·E`
/// where every term lies in `[0, 1]` and the weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Default number of results returned by the engine facade.
    pub top_n: usize,

    // --- Composite weights ---

    pub distance_weight: f64,
    pub harmonic_weight: f64,
    pub alignment_weight: f64,
    pub emergent_weight: f64,

    /// Distance term is `1 / (1 + distance_scale · d)`.
    /// Range: `(0.0, 100.0]`
    pub distance_scale: f64,

    // --- Harmonic bands ---

    /// Axis values at or below this are skipped by the ratio test.
    pub harmonic_epsilon: f64,

    /// Half-width of each band around its target ratio.
    pub band_width: f64,

    /// Largest allowed difference between query and candidate ratios.
    pub agreement_tolerance: f64,

    /// Score added per matched band, capped at 1.
    pub harmonic_bonus: f64,

    // --- Dimensional alignment ---

    /// Both values above this count as aligned-high.
    pub alignment_high: f64,

    /// Both values below this count as aligned-low.
    pub alignment_low: f64,

    /// Score added per aligned axis, capped at 1.
    pub alignment_step: f64,

    // --- Domain boost ---

    /// Domains whose concepts get a multiplicative boost.
    pub priority_domains: Vec<String>,

    /// Boost when the raw composite exceeds `boost_pivot`.
    pub strong_boost: f64,

    /// Boost otherwise.
    pub weak_boost: f64,

    pub boost_pivot: f64,

    // --- Classification ---

    /// Strength above this is `strong`.
    pub strong_threshold: f64,

    /// Strength above this (and not strong) is `moderate`.
    pub moderate_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            distance_weight: 0.40,
            harmonic_weight: 0.25,
            alignment_weight: 0.20,
            emergent_weight: 0.15,
            distance_scale: 2.0,
            harmonic_epsilon: 1e-3,
            band_width: 0.05,
            agreement_tolerance: 0.05,
            harmonic_bonus: 0.2,
            alignment_high: 0.7,
            alignment_low: 0.3,
            alignment_step: 0.25,
            priority_domains: Vec::new(),
            strong_boost: 1.15,
            weak_boost: 1.05,
            boost_pivot: 0.5,
            strong_threshold: 0.7,
            moderate_threshold: 0.4,
        }
    }
}

impl MatcherConfig {
    /// Whether `domain` is listed in `priority_domains`.
    pub fn is_priority(&self, domain: &str) -> bool {
        self.priority_domains.iter().any(|d| d == domain)
    }

    /// Validate the matcher configuration.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("distance_weight", self.distance_weight),
            ("harmonic_weight", self.harmonic_weight),
            ("alignment_weight", self.alignment_weight),
            ("emergent_weight", self.emergent_weight),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        let sum: f64 = weights.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("composite weights must sum to 1.0, got {}", sum));
        }

        if !(self.distance_scale > 0.0 && self.distance_scale <= 100.0) {
            return Err(format!(
                "distance_scale must be in (0, 100], got {}",
                self.distance_scale
            ));
        }
        if !(0.0..0.5).contains(&self.harmonic_epsilon) {
            return Err(format!(
                "harmonic_epsilon must be in [0, 0.5), got {}",
                self.harmonic_epsilon
            ));
        }
        if !(0.0..=0.5).contains(&self.band_width) {
            return Err(format!("band_width must be in [0, 0.5], got {}", self.band_width));
        }
        if !(0.0..=1.0).contains(&self.agreement_tolerance) {
            return Err(format!(
                "agreement_tolerance must be in [0, 1], got {}",
                self.agreement_tolerance
            ));
        }
        if !(0.0..=1.0).contains(&self.harmonic_bonus) {
            return Err(format!(
                "harmonic_bonus must be in [0, 1], got {}",
                self.harmonic_bonus
            ));
        }
        if !(0.0..=1.0).contains(&self.alignment_step) {
            return Err(format!(
                "alignment_step must be in [0, 1], got {}",
                self.alignment_step
            ));
        }
        if !(0.0 <= self.alignment_low && self.alignment_low < self.alignment_high && self.alignment_high <= 1.0) {
            return Err(format!(
                "alignment bounds must satisfy 0 <= low < high <= 1, got low={} high={}",
                self.alignment_low, self.alignment_high
            ));
        }
        if !(self.strong_boost >= 1.0 && self.weak_boost >= 1.0) {
            return Err(format!(
                "domain boosts must be >= 1.0, got strong={} weak={}",
                self.strong_boost, self.weak_boost
            ));
        }
        if !(0.0..=1.0).contains(&self.boost_pivot) {
            return Err(format!(
                "boost_pivot must be in [0, 1], got {}",
                self.boost_pivot
            ));
        }
        if !(0.0 <= self.moderate_threshold
            && self.moderate_threshold < self.strong_threshold
            && self.strong_threshold <= 1.0)
        {
            return Err(format!(
                "thresholds must satisfy 0 <= moderate < strong <= 1, got moderate={} strong={}",
                self.moderate_threshold, self.strong_threshold
            ));
        }
        if self.priority_domains.iter().any(|d| d.trim().is_empty()) {
            return Err("priority_domains must not contain empty names".to_string());
        }
        Ok(())
    }
}
