//! SemanticEngine - facade over the store, detector, composer and matcher.

use std::path::Path;
use std::sync::Arc;

use ljpw_core::{Concept, ConceptStore, Coordinate, Neighbor};
use serde::Serialize;
use tracing::info;

use crate::composition::{Composer, CompositionResult};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::resonance::{ResonanceMatcher, ResonanceResult};
use crate::signature::{Signature, SignatureDetector};

/// Detection followed by resonance matching on the detected coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis<'a> {
    pub signature: Signature,
    pub matches: Vec<ResonanceResult<'a>>,
}

/// One loaded concept store with the components that read it.
///
/// The store is immutable after load and shared through `Arc`, so every
/// operation takes `&self` and the engine can be used from many threads.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use ljpw_core::ConceptStore;
/// use ljpw_engine::{EngineConfig, SemanticEngine};
///
/// let json = r#"{"domains": {"theology": {"concepts": {
///     "kingdom": {"name": "Kingdom", "coordinates": [0.75, 0.90, 0.85, 0.88]},
///     "god": {"name": "God", "coordinates": [0.90, 0.90, 0.50, 0.95]}
/// }}}}"#;
/// let store = Arc::new(ConceptStore::from_json_str(json).unwrap());
/// let engine = SemanticEngine::new(store, EngineConfig::default()).unwrap();
///
/// let composed = engine.compose("Kingdom of God").unwrap();
/// let matches = engine.match_coordinate(&composed.coordinate, 1);
/// assert_eq!(matches.len(), 1);
/// ```
#[derive(Debug)]
pub struct SemanticEngine {
    store: Arc<ConceptStore>,
    detector: SignatureDetector,
    composer: Composer,
    matcher: ResonanceMatcher,
    config: EngineConfig,
}

impl SemanticEngine {
    /// Build an engine over an already loaded store.
    ///
    /// # Errors
    /// `EngineError::ConfigError` when `config` fails validation.
    pub fn new(store: Arc<ConceptStore>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;

        info!(
            concepts = store.len(),
            domains = store.domains().len(),
            "semantic engine ready"
        );

        Ok(Self {
            detector: SignatureDetector::with_store(&config.detector, Arc::clone(&store)),
            composer: Composer::new(Arc::clone(&store), config.composer.clone()),
            matcher: ResonanceMatcher::new(config.matcher.clone()),
            store,
            config,
        })
    }

    /// Load the dataset at `path` and build an engine over it.
    ///
    /// # Errors
    /// - `EngineError::Core` wrapping the `LoadError` when the dataset is invalid
    /// - `EngineError::ConfigError` when `config` fails validation
    pub fn load(path: impl AsRef<Path>, config: EngineConfig) -> EngineResult<Self> {
        let store = ConceptStore::from_path(path)?;
        Self::new(Arc::new(store), config)
    }

    /// Load the dataset named by `config.dataset.path`.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let path = config
            .dataset
            .path
            .clone()
            .ok_or_else(|| EngineError::ConfigError("[dataset] path is not set".to_string()))?;
        Self::load(path, config)
    }

    pub fn store(&self) -> &Arc<ConceptStore> {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn detector(&self) -> &SignatureDetector {
        &self.detector
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn matcher(&self) -> &ResonanceMatcher {
        &self.matcher
    }

    /// Look up a concept by name.
    ///
    /// # Errors
    /// `CoreError::NotFound` (wrapped) when the name does not resolve.
    pub fn lookup(&self, name: &str) -> EngineResult<&Concept> {
        Ok(self.store.get(name)?)
    }

    /// The `k` concepts closest to `coordinate` by Euclidean distance.
    pub fn nearest(&self, coordinate: &Coordinate, k: usize) -> Vec<Neighbor<'_>> {
        self.store.nearest(coordinate, k)
    }

    pub fn detect(&self, text: &str, context: Option<&str>) -> Signature {
        self.detector.detect(text, context)
    }

    pub fn detect_batch(&self, items: &[(&str, Option<&str>)]) -> Vec<Signature> {
        self.detector.detect_batch(items)
    }

    pub fn compose(&self, phrase: &str) -> EngineResult<CompositionResult> {
        self.composer.compose(phrase)
    }

    /// Rank every store concept against `coordinate`.
    pub fn match_coordinate(&self, coordinate: &Coordinate, top_n: usize) -> Vec<ResonanceResult<'_>> {
        self.matcher.match_store(coordinate, &self.store, top_n)
    }

    /// Rank the concepts of one domain against `coordinate`.
    pub fn match_domain(
        &self,
        coordinate: &Coordinate,
        domain: &str,
        top_n: usize,
    ) -> Vec<ResonanceResult<'_>> {
        self.matcher.match_domain(coordinate, &self.store, domain, top_n)
    }

    /// Detect `text`, then match the detected coordinate.
    ///
    /// `top_n` defaults to `[matcher] top_n`.
    pub fn analyze(&self, text: &str, context: Option<&str>, top_n: Option<usize>) -> Analysis<'_> {
        let signature = self.detect(text, context);
        let top_n = top_n.unwrap_or(self.config.matcher.top_n);
        let matches = self.match_coordinate(&signature.coordinate, top_n);
        Analysis { signature, matches }
    }
}
