//! Resonance result types.

use ljpw_core::Concept;
use serde::{Deserialize, Serialize};

use super::harmonic::HarmonicMatch;
use crate::config::MatcherConfig;

/// Strength bucket of a resonance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResonanceClass {
    Strong,
    Moderate,
    Weak,
}

impl ResonanceClass {
    /// Bucket `strength`: above `strong_threshold` is strong, above
    /// `moderate_threshold` moderate, otherwise weak.
    pub fn classify(strength: f64, config: &MatcherConfig) -> Self {
        if strength > config.strong_threshold {
            ResonanceClass::Strong
        } else if strength > config.moderate_threshold {
            ResonanceClass::Moderate
        } else {
            ResonanceClass::Weak
        }
    }
}

/// Per-term scores before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResonanceTerms {
    pub distance: f64,
    pub harmonic: f64,
    pub alignment: f64,
    pub emergent: f64,
}

impl ResonanceTerms {
    /// Weighted sum under the configured composite weights.
    pub fn composite(&self, config: &MatcherConfig) -> f64 {
        config.distance_weight * self.distance
            + config.harmonic_weight * self.harmonic
            + config.alignment_weight * self.alignment
            + config.emergent_weight * self.emergent
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceResult<'a> {
    pub concept: &'a Concept,
    /// Final score in `[0, 1]`, after any domain boost.
    pub strength: f64,
    /// Euclidean distance to the query.
    pub distance: f64,
    pub harmonics: Vec<HarmonicMatch>,
    pub classification: ResonanceClass,
    pub terms: ResonanceTerms,
    /// Whether a priority-domain boost was applied.
    pub boosted: bool,
}
