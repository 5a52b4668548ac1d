//! Sub-string layer: word roots inside content tokens.

use std::sync::Arc;

use ljpw_core::Coordinate;

use super::{EvidenceLayer, LayerKind};
use crate::config::DetectorConfig;
use crate::signature::lexicon::Lexicon;
use crate::signature::tokenize::TokenizedText;
use crate::signature::types::LayerEvidence;

/// Counts content tokens that contain a known root ("injustice" holds
/// "just", "empowered" holds "power").
///
/// Each token contributes at most one hit, from its longest root. Roots
/// shorter than `min_root_len` are ignored.
///
/// Confidence is `morphology_max_confidence × min(1, hits / content_tokens)`.
#[derive(Debug, Clone)]
pub struct MorphologyLayer {
    lexicon: Arc<Lexicon>,
    min_root_len: usize,
    max_confidence: f64,
    reliability: f64,
}

impl MorphologyLayer {
    pub fn new(config: &DetectorConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            min_root_len: config.min_root_len,
            max_confidence: config.morphology_max_confidence,
            reliability: config.morphology_reliability,
        }
    }

    /// The root found in `token`, if any.
    pub fn root_of<'a>(&'a self, token: &str) -> Option<&'a str> {
        self.lexicon
            .root_in(token, self.min_root_len)
            .map(|(root, _)| root)
    }
}

/// Mean of root profiles found in content tokens and the number of hits.
fn root_profile(
    lexicon: &Lexicon,
    text: &TokenizedText,
    min_root_len: usize,
) -> Option<(Coordinate, usize)> {
    let hits: Vec<Coordinate> = text
        .content_tokens()
        .filter_map(|token| lexicon.root_in(token, min_root_len).map(|(_, c)| c))
        .collect();
    if hits.is_empty() {
        return None;
    }
    let count = hits.len();
    let mean = Coordinate::weighted_mean(hits.into_iter().map(|c| (c, 1.0)))?;
    Some((mean, count))
}

impl EvidenceLayer for MorphologyLayer {
    fn name(&self) -> &str {
        LayerKind::Morphology.name()
    }

    fn reliability(&self) -> f64 {
        self.reliability
    }

    fn extract(&self, text: &TokenizedText, _context: Option<&TokenizedText>) -> LayerEvidence {
        let content = text.content_count();
        if content == 0 {
            return LayerEvidence::none();
        }

        match root_profile(&self.lexicon, text, self.min_root_len) {
            Some((coordinate, hits)) => {
                let ratio = (hits as f64 / content as f64).min(1.0);
                LayerEvidence::new(coordinate, self.max_confidence * ratio, hits)
            }
            None => LayerEvidence::none(),
        }
    }
}
