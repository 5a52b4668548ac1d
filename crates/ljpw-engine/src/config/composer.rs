//! Phrase composition settings.
//!
//! Controls positional weighting, the pull toward Natural Equilibrium, the
//! two-component synergy factor, and the confidence reported per structure.

use serde::{Deserialize, Serialize};

/// Phrase composition settings.
///
/// # Semantic Weight
///
/// Each component is weighted by `axis_weights · coordinate` times the
/// multiplier of its role, then all weights are renormalized to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Per-axis semantic weights in `[L, J, P, W]` order.
    /// Defaults emphasise Wisdom, then Love.
    pub axis_weights: [f64; 4],

    /// Fraction of the blend moved toward Natural Equilibrium.
    /// Range: `[0.0, 1.0]`
    pub equilibrium_pull: f64,

    /// Scales the normalized synergy before clamping.
    /// Range: `[0.0, 2.0]`
    pub synergy_gain: f64,

    /// Largest synergy boost (factor never exceeds `1 + max_boost`).
    /// Range: `[0.0, 1.0]`
    pub max_boost: f64,

    /// Largest synergy penalty (factor never drops below `1 - max_penalty`).
    /// Range: `[0.0, 1.0]`
    pub max_penalty: f64,

    // --- Role multipliers ---

    /// `Y` in "X of Y".
    pub head_multiplier: f64,
    /// `X` in "X of Y".
    pub modifier_multiplier: f64,
    /// Second word of a two-word phrase.
    pub noun_multiplier: f64,
    /// First word of a two-word phrase.
    pub attribute_multiplier: f64,
    /// Each member of an "and"/comma list.
    pub conjunct_multiplier: f64,

    // --- Structure confidences ---

    /// Range: `[0.0, 1.0]`
    pub single_confidence: f64,
    /// Range: `[0.0, 1.0]`
    pub negation_confidence: f64,
    /// Range: `[0.0, 1.0]`
    pub modifier_head_confidence: f64,
    /// Range: `[0.0, 1.0]`
    pub conjunction_confidence: f64,
    /// Range: `[0.0, 1.0]`
    pub attribute_noun_confidence: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            axis_weights: [0.30, 0.20, 0.10, 0.40],
            equilibrium_pull: 0.05,
            synergy_gain: 0.2,
            max_boost: 0.20,
            max_penalty: 0.10,
            head_multiplier: 1.2,
            modifier_multiplier: 1.0,
            noun_multiplier: 1.1,
            attribute_multiplier: 0.9,
            conjunct_multiplier: 1.0,
            single_confidence: 1.0,
            negation_confidence: 0.7,
            modifier_head_confidence: 0.85,
            conjunction_confidence: 0.8,
            attribute_noun_confidence: 0.8,
        }
    }
}

impl ComposerConfig {
    /// Validate the composer configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.axis_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(format!(
                "axis_weights must be finite and non-negative, got {:?}",
                self.axis_weights
            ));
        }
        if self.axis_weights.iter().sum::<f64>() <= 0.0 {
            return Err("axis_weights must not all be zero".to_string());
        }
        if !(0.0..=1.0).contains(&self.equilibrium_pull) {
            return Err(format!(
                "equilibrium_pull must be in [0, 1], got {}",
                self.equilibrium_pull
            ));
        }
        if !(0.0..=2.0).contains(&self.synergy_gain) {
            return Err(format!(
                "synergy_gain must be in [0, 2], got {}",
                self.synergy_gain
            ));
        }
        if !(0.0..=1.0).contains(&self.max_boost) {
            return Err(format!("max_boost must be in [0, 1], got {}", self.max_boost));
        }
        if !(0.0..=1.0).contains(&self.max_penalty) {
            return Err(format!(
                "max_penalty must be in [0, 1], got {}",
                self.max_penalty
            ));
        }

        let multipliers = [
            ("head_multiplier", self.head_multiplier),
            ("modifier_multiplier", self.modifier_multiplier),
            ("noun_multiplier", self.noun_multiplier),
            ("attribute_multiplier", self.attribute_multiplier),
            ("conjunct_multiplier", self.conjunct_multiplier),
        ];
        for (name, value) in multipliers {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be > 0, got {}", name, value));
            }
        }
        // The head outweighs its modifier, the noun its attribute.
        if self.head_multiplier < self.modifier_multiplier {
            return Err(format!(
                "head_multiplier ({}) must be >= modifier_multiplier ({})",
                self.head_multiplier, self.modifier_multiplier
            ));
        }
        if self.noun_multiplier < self.attribute_multiplier {
            return Err(format!(
                "noun_multiplier ({}) must be >= attribute_multiplier ({})",
                self.noun_multiplier, self.attribute_multiplier
            ));
        }

        let confidences = [
            ("single_confidence", self.single_confidence),
            ("negation_confidence", self.negation_confidence),
            ("modifier_head_confidence", self.modifier_head_confidence),
            ("conjunction_confidence", self.conjunction_confidence),
            ("attribute_noun_confidence", self.attribute_noun_confidence),
        ];
        for (name, value) in confidences {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        Ok(())
    }
}
