//! Result types for signature detection.

use ljpw_core::{Axis, Coordinate, NATURAL_EQUILIBRIUM};
use serde::Serialize;

/// Confidence at or above which a signature counts as high confidence.
///
/// Known compound concepts (store keys or built-in phrases) reach it.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence below which a signature counts as low confidence.
///
/// Unrecognized tokens stay under it.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.2;

/// Smallest Euclidean separation expected between detections of the same
/// text under clearly different contexts.
pub const CONTEXT_SEPARATION_THRESHOLD: f64 = 0.1;

/// Evidence produced by a single layer for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerEvidence {
    /// Coordinate suggested by the layer.
    pub coordinate: Coordinate,
    /// Confidence in `[0, 1]`. Zero means the layer found nothing.
    pub confidence: f64,
    /// Number of recognized items (phrases, words, roots).
    pub matches: usize,
    /// Token length of the longest recognized phrase (phrase layer only).
    pub longest_phrase: usize,
}

impl LayerEvidence {
    /// Evidence that contributes nothing.
    pub fn none() -> Self {
        Self {
            coordinate: NATURAL_EQUILIBRIUM,
            confidence: 0.0,
            matches: 0,
            longest_phrase: 0,
        }
    }

    /// Evidence with a sanitized confidence.
    pub fn new(coordinate: Coordinate, confidence: f64, matches: usize) -> Self {
        Self {
            coordinate,
            confidence: ljpw_core::sanitize_component(confidence),
            matches,
            longest_phrase: 0,
        }
    }

    /// Set the longest phrase length.
    pub fn with_longest_phrase(mut self, tokens: usize) -> Self {
        self.longest_phrase = tokens;
        self
    }

    /// Whether the layer found anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.confidence <= 0.0
    }
}

impl Default for LayerEvidence {
    fn default() -> Self {
        Self::none()
    }
}

/// One layer's share of a signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerContribution {
    /// Layer name.
    pub layer: String,
    /// Coordinate the layer suggested.
    pub coordinate: Coordinate,
    /// Raw layer confidence, before reliability.
    pub confidence: f64,
    /// Normalized weight of this layer in the combined coordinate.
    pub weight: f64,
    /// Number of recognized items.
    pub matches: usize,
}

/// Estimated coordinate for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signature {
    /// The analysed text.
    pub text: String,
    /// Combined coordinate.
    pub coordinate: Coordinate,
    /// Overall confidence in `[0, 1]`.
    pub confidence: f64,
    /// Per-layer breakdown, in layer order.
    pub contributions: Vec<LayerContribution>,
    /// Axis with the largest component.
    pub dominant_axis: Axis,
    /// Token length of the longest recognized phrase.
    pub longest_phrase: usize,
}

impl Signature {
    /// Signature for text with no usable evidence.
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            coordinate: NATURAL_EQUILIBRIUM,
            confidence: 0.0,
            contributions: Vec::new(),
            dominant_axis: NATURAL_EQUILIBRIUM.dominant_axis(),
            longest_phrase: 0,
        }
    }

    #[inline]
    pub fn is_high_confidence(&self) -> bool {
        self.confidence >= HIGH_CONFIDENCE_THRESHOLD
    }

    #[inline]
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }

    /// Contribution of the named layer, if it ran.
    pub fn contribution(&self, layer: &str) -> Option<&LayerContribution> {
        self.contributions.iter().find(|c| c.layer == layer)
    }
}
