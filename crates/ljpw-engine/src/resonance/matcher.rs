//! Resonance matcher.

use ljpw_core::{sanitize_component, Concept, ConceptStore, Coordinate};
use rayon::prelude::*;
use tracing::debug;

use super::harmonic::{harmonic_matches, harmonic_strength};
use super::terms::{alignment_strength, distance_strength, emergent_similarity};
use super::types::{ResonanceClass, ResonanceResult, ResonanceTerms};
use crate::config::MatcherConfig;

/// Ranks concepts by multi-term resonance with a query coordinate.
///
/// Scoring is a brute-force parallel scan. Results are sorted by descending
/// strength; exact ties keep candidate order.
#[derive(Debug, Clone, Default)]
pub struct ResonanceMatcher {
    config: MatcherConfig,
}

impl ResonanceMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Score a single candidate.
    pub fn score<'a>(&self, query: &Coordinate, concept: &'a Concept) -> ResonanceResult<'a> {
        let config = &self.config;
        let candidate = &concept.coordinate;

        let distance = query.distance(candidate);
        let harmonics = harmonic_matches(query, candidate, config);
        let terms = ResonanceTerms {
            distance: distance_strength(distance, config.distance_scale),
            harmonic: harmonic_strength(harmonics.len(), config),
            alignment: alignment_strength(query, candidate, config),
            emergent: emergent_similarity(query, candidate),
        };

        let raw = sanitize_component(terms.composite(config));
        let boosted = config.is_priority(&concept.domain);
        let strength = if boosted {
            let factor = if raw > config.boost_pivot {
                config.strong_boost
            } else {
                config.weak_boost
            };
            sanitize_component(raw * factor)
        } else {
            raw
        };

        ResonanceResult {
            concept,
            strength,
            distance,
            harmonics,
            classification: ResonanceClass::classify(strength, config),
            terms,
            boosted,
        }
    }

    /// Score `candidates` and return the best `top_n`.
    ///
    /// Returns exactly `min(top_n, candidates.len())` results.
    pub fn match_candidates<'a>(
        &self,
        query: &Coordinate,
        candidates: &[&'a Concept],
        top_n: usize,
    ) -> Vec<ResonanceResult<'a>> {
        if top_n == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ResonanceResult<'a>> = candidates
            .par_iter()
            .map(|&concept| self.score(query, concept))
            .collect();

        // Stable: equal strengths keep candidate order.
        results.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        results.truncate(top_n);

        debug!(
            candidates = candidates.len(),
            returned = results.len(),
            best = results.first().map(|r| r.strength),
            "resonance scan complete"
        );

        results
    }

    /// Score every concept in `store`.
    pub fn match_store<'a>(
        &self,
        query: &Coordinate,
        store: &'a ConceptStore,
        top_n: usize,
    ) -> Vec<ResonanceResult<'a>> {
        let candidates: Vec<&Concept> = store.iter().collect();
        self.match_candidates(query, &candidates, top_n)
    }

    /// Score only the concepts of one domain. An unknown domain yields no
    /// results.
    pub fn match_domain<'a>(
        &self,
        query: &Coordinate,
        store: &'a ConceptStore,
        domain: &str,
        top_n: usize,
    ) -> Vec<ResonanceResult<'a>> {
        let candidates: Vec<&Concept> = store.iter().filter(|c| c.domain == domain).collect();
        self.match_candidates(query, &candidates, top_n)
    }
}
