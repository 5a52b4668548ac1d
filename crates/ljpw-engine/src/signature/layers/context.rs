//! Co-text layer: evidence drawn from the surrounding text only.

use std::sync::Arc;

use ljpw_core::Coordinate;

use super::{EvidenceLayer, LayerKind};
use crate::config::DetectorConfig;
use crate::signature::lexicon::Lexicon;
use crate::signature::tokenize::TokenizedText;
use crate::signature::types::LayerEvidence;

/// Reads the context, never the text itself.
///
/// Each content token of the context is resolved as a keyword first and as
/// a root second. Confidence is
/// `context_max_confidence × matched / content_tokens(context)`.
///
/// This is what lets the same word land in different places: "light" next
/// to "sun shines bright" leans toward Power, next to "truth and wisdom"
/// toward Wisdom.
#[derive(Debug, Clone)]
pub struct ContextLayer {
    lexicon: Arc<Lexicon>,
    min_root_len: usize,
    max_confidence: f64,
    reliability: f64,
}

impl ContextLayer {
    pub fn new(config: &DetectorConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            min_root_len: config.min_root_len,
            max_confidence: config.context_max_confidence,
            reliability: config.context_reliability,
        }
    }

    fn resolve(&self, token: &str) -> Option<Coordinate> {
        self.lexicon.lookup(token).or_else(|| {
            self.lexicon
                .root_in(token, self.min_root_len)
                .map(|(_, c)| c)
        })
    }
}

impl EvidenceLayer for ContextLayer {
    fn name(&self) -> &str {
        LayerKind::Context.name()
    }

    fn reliability(&self) -> f64 {
        self.reliability
    }

    fn extract(&self, _text: &TokenizedText, context: Option<&TokenizedText>) -> LayerEvidence {
        let Some(context) = context else {
            return LayerEvidence::none();
        };
        let content = context.content_count();
        if content == 0 {
            return LayerEvidence::none();
        }

        let hits: Vec<Coordinate> = context
            .content_tokens()
            .filter_map(|token| self.resolve(token))
            .collect();
        let matched = hits.len();

        match Coordinate::weighted_mean(hits.into_iter().map(|c| (c, 1.0))) {
            Some(coordinate) => {
                let confidence = self.max_confidence * matched as f64 / content as f64;
                LayerEvidence::new(coordinate, confidence, matched)
            }
            None => LayerEvidence::none(),
        }
    }
}
