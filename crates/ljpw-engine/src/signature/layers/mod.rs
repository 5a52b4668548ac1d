//! Evidence layers for signature detection.
//!
//! Each layer looks at the text (and optionally its context) from one angle
//! and reports a coordinate with a confidence:
//! - [`PhraseLayer`]: longest n-gram match against store keys and built-in phrases
//! - [`KeywordLayer`]: whole-word lexicon lookup with light suffix stripping
//! - [`MorphologyLayer`]: word roots found inside content tokens
//! - [`ContextLayer`]: keyword and root evidence from the surrounding text only
//!
//! The detector combines layers without knowing which ones it holds, so
//! custom layers plug in through the [`EvidenceLayer`] trait.

mod context;
mod factory;
mod keyword;
mod morphology;
mod phrase;

pub use context::ContextLayer;
pub use factory::{EvidenceLayerFactory, LayerResources};
pub use keyword::KeywordLayer;
pub use morphology::MorphologyLayer;
pub use phrase::PhraseLayer;

use serde::{Deserialize, Serialize};

use super::tokenize::TokenizedText;
use super::types::LayerEvidence;

/// One independent source of evidence about a text's coordinate.
///
/// Implementations must return a coordinate inside `[0, 1]⁴` and a finite
/// confidence in `[0, 1]`. They never fail: a layer with nothing to say
/// returns [`LayerEvidence::none()`].
///
/// # Thread Safety
///
/// Layers are shared across rayon workers, so they MUST be `Send + Sync`.
pub trait EvidenceLayer: Send + Sync {
    /// Name reported in signature contributions.
    fn name(&self) -> &str;

    /// Trust placed in this layer, in `[0, 1]`.
    ///
    /// The detector multiplies the layer's confidence by this value.
    fn reliability(&self) -> f64;

    /// Extract evidence from `text`, optionally looking at `context`.
    fn extract(&self, text: &TokenizedText, context: Option<&TokenizedText>) -> LayerEvidence;
}

/// The built-in layer kinds, in detector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Phrase,
    Keyword,
    Morphology,
    Context,
}

impl LayerKind {
    /// All built-in kinds in detector order.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Phrase,
        LayerKind::Keyword,
        LayerKind::Morphology,
        LayerKind::Context,
    ];

    /// Layer name as reported in contributions.
    pub const fn name(self) -> &'static str {
        match self {
            LayerKind::Phrase => "phrase",
            LayerKind::Keyword => "keyword",
            LayerKind::Morphology => "morphology",
            LayerKind::Context => "context",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
