//! Signature detection: estimating a coordinate from raw text.
//!
//! A [`SignatureDetector`] runs a list of independent [`EvidenceLayer`]s
//! over the tokenized text and combines their evidence, weighting each by
//! confidence × reliability. Detection never fails; text with no
//! recognizable content maps to the Natural Equilibrium with confidence 0.
//!
//! # Example
//!
//! ```
//! use ljpw_engine::config::DetectorConfig;
//! use ljpw_engine::signature::{SignatureDetector, CONTEXT_SEPARATION_THRESHOLD};
//!
//! let detector = SignatureDetector::new(&DetectorConfig::default());
//!
//! let sunny = detector.detect("Light", Some("Sun shines bright"));
//! let wise = detector.detect("Light", Some("Truth and wisdom"));
//! assert!(sunny.coordinate.distance(&wise.coordinate) > CONTEXT_SEPARATION_THRESHOLD);
//! ```

mod detector;
pub mod layers;
mod lexicon;
mod tokenize;
mod types;

pub use detector::SignatureDetector;
pub use layers::{EvidenceLayer, EvidenceLayerFactory, LayerKind, LayerResources};
pub use lexicon::{Lexicon, PhraseTable};
pub use tokenize::{is_stopword, TokenizedText, STOPWORDS};
pub use types::{
    LayerContribution, LayerEvidence, Signature, CONTEXT_SEPARATION_THRESHOLD,
    HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD,
};
