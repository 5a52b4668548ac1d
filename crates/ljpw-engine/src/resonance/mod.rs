//! Resonance matching: ranking concepts against a query coordinate.
//!
//! The composite score mixes four terms (distance, harmonic ratio bands,
//! per-axis alignment, emergent-composite similarity) under configurable
//! weights, then applies an optional boost for priority domains.

mod harmonic;
mod matcher;
mod terms;
mod types;

pub use harmonic::{harmonic_matches, harmonic_strength, HarmonicBand, HarmonicMatch, GOLDEN_RATIO};
pub use matcher::ResonanceMatcher;
pub use terms::{alignment_strength, distance_strength, emergent_similarity};
pub use types::{ResonanceClass, ResonanceResult, ResonanceTerms};
