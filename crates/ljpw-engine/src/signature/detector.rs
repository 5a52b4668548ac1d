//! Multi-layer signature detector.

use std::fmt;
use std::sync::Arc;

use ljpw_core::{sanitize_component, ConceptStore, Coordinate, NATURAL_EQUILIBRIUM, NUMERIC_EPSILON};
use rayon::prelude::*;
use tracing::debug;

use super::layers::{EvidenceLayer, EvidenceLayerFactory, LayerResources};
use super::tokenize::TokenizedText;
use super::types::{LayerContribution, LayerEvidence, Signature};
use crate::config::DetectorConfig;

/// Estimates a coordinate and confidence for raw text.
///
/// # Combination
///
/// With `cᵢ` the layer confidence and `rᵢ` its reliability:
/// - coordinate = `Σ (cᵢ·rᵢ / Σ cⱼ·rⱼ) × coordᵢ`
/// - confidence = `1 − Π (1 − cᵢ·rᵢ)`
///
/// When every layer is silent the result is the Natural Equilibrium with
/// confidence 0. Detection never fails.
///
/// # Example
///
/// ```
/// use ljpw_engine::config::DetectorConfig;
/// use ljpw_engine::signature::SignatureDetector;
///
/// let detector = SignatureDetector::new(&DetectorConfig::default());
///
/// let signature = detector.detect("Kingdom of God", None);
/// assert!(signature.is_high_confidence());
///
/// let nothing = detector.detect("", None);
/// assert_eq!(nothing.confidence, 0.0);
/// ```
pub struct SignatureDetector {
    layers: Vec<Box<dyn EvidenceLayer>>,
}

impl SignatureDetector {
    /// Detector with the built-in layers and no store.
    pub fn new(config: &DetectorConfig) -> Self {
        Self::from_resources(config, &LayerResources::default())
    }

    /// Detector with the built-in layers matching store concept keys.
    pub fn with_store(config: &DetectorConfig, store: Arc<ConceptStore>) -> Self {
        Self::from_resources(config, &LayerResources::with_store(store))
    }

    /// Detector with the built-in layers over custom resources.
    pub fn from_resources(config: &DetectorConfig, resources: &LayerResources) -> Self {
        Self {
            layers: EvidenceLayerFactory::create_all(config, resources),
        }
    }

    /// Detector with no layers; add them with [`with_layer`](Self::with_layer).
    pub fn empty() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer.
    #[must_use]
    pub fn with_layer(mut self, layer: Box<dyn EvidenceLayer>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Layer names in evaluation order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Detect the signature of `text`, optionally reading `context`.
    pub fn detect(&self, text: &str, context: Option<&str>) -> Signature {
        let tokens = TokenizedText::new(text);
        let context_tokens = context.map(TokenizedText::new);

        let evidence: Vec<(&str, f64, LayerEvidence)> = self
            .layers
            .iter()
            .map(|layer| {
                (
                    layer.name(),
                    sanitize_component(layer.reliability()),
                    layer.extract(&tokens, context_tokens.as_ref()),
                )
            })
            .collect();

        let signature = combine(text, &evidence);
        debug!(
            tokens = tokens.len(),
            confidence = signature.confidence,
            dominant = %signature.dominant_axis,
            "signature detected"
        );
        signature
    }

    /// Detect many `(text, context)` pairs in parallel. Output order matches input.
    pub fn detect_batch(&self, items: &[(&str, Option<&str>)]) -> Vec<Signature> {
        items
            .par_iter()
            .map(|(text, context)| self.detect(text, *context))
            .collect()
    }
}

impl fmt::Debug for SignatureDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureDetector")
            .field("layers", &self.layer_names())
            .finish()
    }
}

/// Combine per-layer evidence `(name, reliability, evidence)` into a signature.
fn combine(text: &str, evidence: &[(&str, f64, LayerEvidence)]) -> Signature {
    let effective: Vec<f64> = evidence
        .iter()
        .map(|(_, reliability, e)| sanitize_component(e.confidence) * reliability)
        .collect();
    let total: f64 = effective.iter().sum();

    let longest_phrase = evidence
        .iter()
        .map(|(_, _, e)| e.longest_phrase)
        .max()
        .unwrap_or(0);

    let (coordinate, confidence) = if total <= NUMERIC_EPSILON {
        (NATURAL_EQUILIBRIUM, 0.0)
    } else {
        let coordinate = Coordinate::weighted_mean(
            evidence
                .iter()
                .zip(&effective)
                .map(|((_, _, e), w)| (e.coordinate, *w)),
        )
        .unwrap_or(NATURAL_EQUILIBRIUM);
        let miss: f64 = effective.iter().map(|w| 1.0 - w).product();
        (coordinate, sanitize_component(1.0 - miss))
    };

    let contributions = evidence
        .iter()
        .zip(&effective)
        .map(|((name, _, e), w)| LayerContribution {
            layer: name.to_string(),
            coordinate: e.coordinate,
            confidence: sanitize_component(e.confidence),
            weight: if total > NUMERIC_EPSILON { w / total } else { 0.0 },
            matches: e.matches,
        })
        .collect();

    Signature {
        text: text.to_string(),
        coordinate,
        confidence,
        contributions,
        dominant_axis: coordinate.dominant_axis(),
        longest_phrase,
    }
}
