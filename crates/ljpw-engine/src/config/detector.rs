//! Signature detector settings.
//!
//! Controls the evidence layers that estimate a coordinate from raw text and
//! how much each layer is trusted when their evidence is combined.

use serde::{Deserialize, Serialize};

/// Signature detector settings.
///
/// Each layer reports a confidence in `[0, 1]`; the detector multiplies it
/// by the layer's reliability before combining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Longest n-gram, in tokens, the phrase layer tries to match.
    /// Range: `[1, 16]`
    pub max_phrase_tokens: usize,

    /// Match concept keys of the store in the phrase layer.
    pub use_store_phrases: bool,

    /// Phrase-layer confidence at full coverage, before the compound bonus.
    /// Range: `[0.0, 1.0]`
    pub phrase_base_confidence: f64,

    /// Compound bonus per token beyond the first in the longest match.
    /// Range: `[0.0, 0.5]`
    pub compound_bonus_per_token: f64,

    /// Upper bound of the compound bonus.
    /// Range: `[0.0, 0.5]`
    pub compound_bonus_max: f64,

    /// Keyword-layer confidence when every content token is recognized.
    /// Range: `[0.0, 1.0]`
    pub keyword_max_confidence: f64,

    /// Morphology-layer confidence when every content token holds a root.
    /// Range: `[0.0, 1.0]`
    pub morphology_max_confidence: f64,

    /// Context-layer confidence when every context token is recognized.
    /// Range: `[0.0, 1.0]`
    pub context_max_confidence: f64,

    /// Shortest root the morphology layer searches for.
    /// Range: `[2, 16]`
    pub min_root_len: usize,

    // --- Layer reliabilities ---

    /// Range: `[0.0, 1.0]`
    pub phrase_reliability: f64,

    /// Range: `[0.0, 1.0]`
    pub keyword_reliability: f64,

    /// Range: `[0.0, 1.0]`
    pub morphology_reliability: f64,

    /// Range: `[0.0, 1.0]`
    pub context_reliability: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_phrase_tokens: 4,
            use_store_phrases: true,
            phrase_base_confidence: 0.75,
            compound_bonus_per_token: 0.05,
            compound_bonus_max: 0.2,
            keyword_max_confidence: 0.6,
            morphology_max_confidence: 0.4,
            context_max_confidence: 0.6,
            min_root_len: 4,
            phrase_reliability: 1.0,
            keyword_reliability: 0.8,
            morphology_reliability: 0.5,
            context_reliability: 0.6,
        }
    }
}

impl DetectorConfig {
    /// Bonus for a matched phrase of `tokens` tokens.
    ///
    /// Zero for single tokens, then grows by `compound_bonus_per_token` per
    /// extra token up to `compound_bonus_max`.
    pub fn compound_bonus(&self, tokens: usize) -> f64 {
        if tokens < 2 {
            return 0.0;
        }
        (self.compound_bonus_per_token * (tokens - 1) as f64).min(self.compound_bonus_max)
    }

    /// Validate the detector configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=16).contains(&self.max_phrase_tokens) {
            return Err(format!(
                "max_phrase_tokens must be in [1, 16], got {}",
                self.max_phrase_tokens
            ));
        }
        if !(2..=16).contains(&self.min_root_len) {
            return Err(format!(
                "min_root_len must be in [2, 16], got {}",
                self.min_root_len
            ));
        }

        let unit = [
            ("phrase_base_confidence", self.phrase_base_confidence),
            ("keyword_max_confidence", self.keyword_max_confidence),
            ("morphology_max_confidence", self.morphology_max_confidence),
            ("context_max_confidence", self.context_max_confidence),
            ("phrase_reliability", self.phrase_reliability),
            ("keyword_reliability", self.keyword_reliability),
            ("morphology_reliability", self.morphology_reliability),
            ("context_reliability", self.context_reliability),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }

        if !(0.0..=0.5).contains(&self.compound_bonus_per_token) {
            return Err(format!(
                "compound_bonus_per_token must be in [0, 0.5], got {}",
                self.compound_bonus_per_token
            ));
        }
        if !(0.0..=0.5).contains(&self.compound_bonus_max) {
            return Err(format!(
                "compound_bonus_max must be in [0, 0.5], got {}",
                self.compound_bonus_max
            ));
        }
        Ok(())
    }
}
