//! Semantic keyword layer.

use std::sync::Arc;

use ljpw_core::Coordinate;

use super::{EvidenceLayer, LayerKind};
use crate::config::DetectorConfig;
use crate::signature::lexicon::Lexicon;
use crate::signature::tokenize::TokenizedText;
use crate::signature::types::LayerEvidence;

/// Whole-word lexicon lookup over content tokens.
///
/// Confidence is `keyword_max_confidence × matched / content_tokens`; the
/// coordinate is the mean of the matched word profiles.
#[derive(Debug, Clone)]
pub struct KeywordLayer {
    lexicon: Arc<Lexicon>,
    max_confidence: f64,
    reliability: f64,
}

impl KeywordLayer {
    pub fn new(config: &DetectorConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            max_confidence: config.keyword_max_confidence,
            reliability: config.keyword_reliability,
        }
    }
}

/// Mean of recognized keyword profiles and the number recognized.
fn keyword_profile(lexicon: &Lexicon, text: &TokenizedText) -> Option<(Coordinate, usize)> {
    let hits: Vec<Coordinate> = text
        .content_tokens()
        .filter_map(|token| lexicon.lookup(token))
        .collect();
    if hits.is_empty() {
        return None;
    }
    let count = hits.len();
    let mean = Coordinate::weighted_mean(hits.into_iter().map(|c| (c, 1.0)))?;
    Some((mean, count))
}

impl EvidenceLayer for KeywordLayer {
    fn name(&self) -> &str {
        LayerKind::Keyword.name()
    }

    fn reliability(&self) -> f64 {
        self.reliability
    }

    fn extract(&self, text: &TokenizedText, _context: Option<&TokenizedText>) -> LayerEvidence {
        let content = text.content_count();
        if content == 0 {
            return LayerEvidence::none();
        }

        match keyword_profile(&self.lexicon, text) {
            Some((coordinate, matched)) => {
                let confidence = self.max_confidence * matched as f64 / content as f64;
                LayerEvidence::new(coordinate, confidence, matched)
            }
            None => LayerEvidence::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> KeywordLayer {
        KeywordLayer::new(&DetectorConfig::default(), Arc::new(Lexicon::default()))
    }

    #[test]
    fn test_full_coverage_reaches_max_confidence() {
        let evidence = layer().extract(&TokenizedText::new("truth and wisdom"), None);
        assert_eq!(evidence.matches, 2);
        assert!((evidence.confidence - 0.6).abs() < 1e-9);

        let expected = Coordinate::clamped(0.55, 0.70, 0.40, 0.925);
        assert!(evidence.coordinate.approx_eq(&expected, 1e-9));
    }

    #[test]
    fn test_partial_coverage_scales_confidence() {
        let evidence = layer().extract(&TokenizedText::new("wisdom qwxz"), None);
        assert_eq!(evidence.matches, 1);
        assert!((evidence.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_suffixes_are_stripped() {
        let evidence = layer().extract(&TokenizedText::new("Sun shines"), None);
        assert_eq!(evidence.matches, 2);
    }

    #[test]
    fn test_only_stopwords_is_silent() {
        let evidence = layer().extract(&TokenizedText::new("of the and"), None);
        assert!(evidence.is_empty());
    }

    #[test]
    fn test_context_is_ignored() {
        let text = TokenizedText::new("light");
        let context = TokenizedText::new("power might strength");
        assert_eq!(layer().extract(&text, Some(&context)), layer().extract(&text, None));
    }
}
