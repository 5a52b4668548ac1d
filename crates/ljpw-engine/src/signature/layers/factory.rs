//! Factory for the built-in evidence layers.

use std::sync::Arc;

use ljpw_core::ConceptStore;

use super::{ContextLayer, EvidenceLayer, KeywordLayer, LayerKind, MorphologyLayer, PhraseLayer};
use crate::config::DetectorConfig;
use crate::signature::lexicon::{Lexicon, PhraseTable};

/// Shared read-only data the built-in layers draw from.
#[derive(Debug, Clone)]
pub struct LayerResources {
    /// Store whose concept keys the phrase layer matches. Optional.
    pub store: Option<Arc<ConceptStore>>,
    /// Word and root lexicon.
    pub lexicon: Arc<Lexicon>,
    /// Built-in phrase table.
    pub phrases: Arc<PhraseTable>,
}

impl Default for LayerResources {
    /// Built-in lexicon and phrases, no store.
    fn default() -> Self {
        Self {
            store: None,
            lexicon: Arc::new(Lexicon::default()),
            phrases: Arc::new(PhraseTable::default()),
        }
    }
}

impl LayerResources {
    /// Built-in lexicon and phrases plus a store.
    pub fn with_store(store: Arc<ConceptStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::default()
        }
    }
}

/// Factory for the built-in evidence layers.
pub struct EvidenceLayerFactory;

impl EvidenceLayerFactory {
    /// Create one layer.
    ///
    /// # Routing
    /// - Phrase → [`PhraseLayer`] (store keys only when `use_store_phrases`)
    /// - Keyword → [`KeywordLayer`]
    /// - Morphology → [`MorphologyLayer`]
    /// - Context → [`ContextLayer`]
    pub fn create(
        kind: LayerKind,
        config: &DetectorConfig,
        resources: &LayerResources,
    ) -> Box<dyn EvidenceLayer> {
        match kind {
            LayerKind::Phrase => {
                let store = if config.use_store_phrases {
                    resources.store.clone()
                } else {
                    None
                };
                Box::new(PhraseLayer::new(config, store, Arc::clone(&resources.phrases)))
            }
            LayerKind::Keyword => Box::new(KeywordLayer::new(config, Arc::clone(&resources.lexicon))),
            LayerKind::Morphology => {
                Box::new(MorphologyLayer::new(config, Arc::clone(&resources.lexicon)))
            }
            LayerKind::Context => Box::new(ContextLayer::new(config, Arc::clone(&resources.lexicon))),
        }
    }

    /// Create every built-in layer in detector order.
    pub fn create_all(
        config: &DetectorConfig,
        resources: &LayerResources,
    ) -> Vec<Box<dyn EvidenceLayer>> {
        LayerKind::ALL
            .iter()
            .map(|&kind| Self::create(kind, config, resources))
            .collect()
    }
}
