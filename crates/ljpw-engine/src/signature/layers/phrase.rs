//! Surface-pattern layer: longest n-gram phrase matching.

use std::collections::HashMap;
use std::sync::Arc;

use ljpw_core::{ConceptStore, Coordinate};

use super::{EvidenceLayer, LayerKind};
use crate::config::DetectorConfig;
use crate::signature::lexicon::PhraseTable;
use crate::signature::tokenize::{is_stopword, TokenizedText};
use crate::signature::types::LayerEvidence;

/// Greedy longest-match of token windows against store concepts and the
/// built-in phrase table.
///
/// Store concepts are indexed by their names run through the same tokenizer
/// as the text, so "Lord's Prayer" is found as `lords_prayer`. When two
/// concepts tokenize alike the first one in the store wins.
///
/// Scanning left to right, the longest window (up to `max_phrase_tokens`)
/// that resolves is consumed; otherwise the scan advances one token. A
/// single-token window never matches a stopword.
///
/// # Scoring
///
/// - coordinate: mean of matched coordinates weighted by token length
/// - confidence: `phrase_base_confidence × coverage + compound_bonus(longest)`,
///   capped at 1, where coverage is matched tokens over all tokens
#[derive(Debug, Clone)]
pub struct PhraseLayer {
    store_keys: HashMap<String, Coordinate>,
    phrases: Arc<PhraseTable>,
    config: DetectorConfig,
}

impl PhraseLayer {
    pub fn new(
        config: &DetectorConfig,
        store: Option<Arc<ConceptStore>>,
        phrases: Arc<PhraseTable>,
    ) -> Self {
        Self {
            store_keys: store.as_deref().map(token_keys).unwrap_or_default(),
            phrases,
            config: config.clone(),
        }
    }

    fn resolve(&self, key: &str) -> Option<Coordinate> {
        self.store_keys
            .get(key)
            .copied()
            .or_else(|| self.phrases.get(key))
    }

    /// Matched `(coordinate, token_len)` pairs in text order.
    fn scan(&self, text: &TokenizedText) -> Vec<(Coordinate, usize)> {
        let tokens = text.tokens();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let longest = self.config.max_phrase_tokens.max(1).min(tokens.len() - i);
            let found = (1..=longest).rev().find_map(|n| {
                if n == 1 && is_stopword(&tokens[i]) {
                    return None;
                }
                let key = text.window_key(i, n)?;
                self.resolve(&key).map(|c| (c, n))
            });

            match found {
                Some((coordinate, n)) => {
                    matches.push((coordinate, n));
                    i += n;
                }
                None => i += 1,
            }
        }
        matches
    }
}

/// Window keys for every concept in `store`, from both name and key.
fn token_keys(store: &ConceptStore) -> HashMap<String, Coordinate> {
    let mut keys = HashMap::with_capacity(store.len());
    for concept in store.iter() {
        for source in [concept.name.as_str(), concept.key.as_str()] {
            let key = TokenizedText::new(source).tokens().join("_");
            if !key.is_empty() {
                keys.entry(key).or_insert(concept.coordinate);
            }
        }
    }
    keys
}

impl EvidenceLayer for PhraseLayer {
    fn name(&self) -> &str {
        LayerKind::Phrase.name()
    }

    fn reliability(&self) -> f64 {
        self.config.phrase_reliability
    }

    fn extract(&self, text: &TokenizedText, _context: Option<&TokenizedText>) -> LayerEvidence {
        if text.is_empty() {
            return LayerEvidence::none();
        }

        let matches = self.scan(text);
        if matches.is_empty() {
            return LayerEvidence::none();
        }

        let matched_tokens: usize = matches.iter().map(|(_, n)| n).sum();
        let longest = matches.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let coverage = matched_tokens as f64 / text.len() as f64;

        let coordinate = Coordinate::weighted_mean(matches.iter().map(|(c, n)| (*c, *n as f64)))
            .unwrap_or_default();
        let confidence = (self.config.phrase_base_confidence * coverage
            + self.config.compound_bonus(longest))
        .min(1.0);

        LayerEvidence::new(coordinate, confidence, matches.len()).with_longest_phrase(longest)
    }
}
