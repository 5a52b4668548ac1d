//! Phrase composer.

use std::sync::Arc;

use ljpw_core::{ConceptStore, Coordinate, NATURAL_EQUILIBRIUM, NUMERIC_EPSILON};
use tracing::debug;

use super::parser::{self, ParsedPhrase};
use super::synergy::synergy;
use super::types::{Component, CompositionResult, Role, Structure};
use crate::config::ComposerConfig;
use crate::error::{EngineError, EngineResult};

/// Builds coordinates for multi-word phrases from the coordinates of their
/// parts.
///
/// Every component must resolve in the store; the composer never guesses.
/// The result is a pure function of the phrase and the store snapshot.
#[derive(Debug, Clone)]
pub struct Composer {
    store: Arc<ConceptStore>,
    config: ComposerConfig,
}

impl Composer {
    pub fn new(store: Arc<ConceptStore>, config: ComposerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose `phrase` into a coordinate.
    ///
    /// # Errors
    ///
    /// - `EngineError::EmptyInput` for an empty phrase
    /// - `EngineError::MissingComponents` naming every component that does
    ///   not resolve, in phrase order
    pub fn compose(&self, phrase: &str) -> EngineResult<CompositionResult> {
        let parsed = parser::parse(phrase, |name| self.store.contains(name))?;

        let result = match parsed {
            ParsedPhrase::Negation { depth, rest } => self.negate(phrase, depth, &rest)?,
            ParsedPhrase::Single(name) => self.single(phrase, &name)?,
            ParsedPhrase::Conjunction(parts) => {
                let parts = parts.into_iter().map(|p| (p, Role::Conjunct)).collect();
                self.blend(phrase, Structure::Conjunction, parts)?
            }
            ParsedPhrase::ModifierHead { modifier, head } => self.blend(
                phrase,
                Structure::ModifierHead,
                vec![(modifier, Role::Modifier), (head, Role::Head)],
            )?,
            ParsedPhrase::AttributeNoun { attribute, noun } => self.blend(
                phrase,
                Structure::AttributeNoun,
                vec![(attribute, Role::Attribute), (noun, Role::Noun)],
            )?,
        };

        debug!(
            phrase,
            structure = ?result.structure,
            components = result.components.len(),
            confidence = result.confidence,
            "phrase composed"
        );

        Ok(result)
    }

    /// `axis_weights · coordinate × role multiplier`, before normalization.
    pub fn semantic_weight(&self, coordinate: &Coordinate, role: Role) -> f64 {
        let raw: f64 = coordinate
            .as_array()
            .iter()
            .zip(self.config.axis_weights.iter())
            .map(|(v, w)| v * w)
            .sum();
        raw * role.multiplier(&self.config)
    }

    /// `rest` carries no leading "not ", so this recurses at most once.
    /// Each "not " inverts; an even `depth` cancels out.
    fn negate(&self, phrase: &str, depth: usize, rest: &str) -> EngineResult<CompositionResult> {
        let inner = self.compose(rest).map_err(|err| match err {
            EngineError::MissingComponents { missing, .. } => {
                EngineError::missing_components(phrase, missing)
            }
            other => other,
        })?;

        let coordinate = if depth % 2 == 1 {
            inner.coordinate.inverted()
        } else {
            inner.coordinate
        };

        Ok(CompositionResult {
            phrase: phrase.to_string(),
            structure: Structure::Negation,
            coordinate,
            confidence: Structure::Negation.confidence(&self.config),
            components: inner.components,
            synergy: None,
        })
    }

    fn single(&self, phrase: &str, name: &str) -> EngineResult<CompositionResult> {
        let concept = self
            .store
            .find(name)
            .ok_or_else(|| EngineError::missing_components(phrase, vec![name.to_string()]))?;

        Ok(CompositionResult {
            phrase: phrase.to_string(),
            structure: Structure::Single,
            coordinate: concept.coordinate,
            confidence: Structure::Single.confidence(&self.config),
            components: vec![Component {
                text: name.to_string(),
                key: concept.key.clone(),
                name: concept.name.clone(),
                role: Role::Whole,
                coordinate: concept.coordinate,
                weight: 1.0,
            }],
            synergy: None,
        })
    }

    fn blend(
        &self,
        phrase: &str,
        structure: Structure,
        parts: Vec<(String, Role)>,
    ) -> EngineResult<CompositionResult> {
        let missing: Vec<String> = parts
            .iter()
            .filter(|(text, _)| !self.store.contains(text))
            .map(|(text, _)| text.clone())
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::missing_components(phrase, missing));
        }

        let mut components: Vec<Component> = Vec::with_capacity(parts.len());
        for (text, role) in parts {
            let concept = self.store.get(&text)?;
            components.push(Component {
                weight: self.semantic_weight(&concept.coordinate, role),
                text,
                key: concept.key.clone(),
                name: concept.name.clone(),
                role,
                coordinate: concept.coordinate,
            });
        }

        let total: f64 = components.iter().map(|c| c.weight).sum();
        if total.is_finite() && total > NUMERIC_EPSILON {
            for component in &mut components {
                component.weight /= total;
            }
        } else {
            let equal = 1.0 / components.len() as f64;
            for component in &mut components {
                component.weight = equal;
            }
        }

        let blended = Coordinate::weighted_mean(components.iter().map(|c| (c.coordinate, c.weight)))
            .unwrap_or(NATURAL_EQUILIBRIUM);
        let mut coordinate = blended.lerp(&NATURAL_EQUILIBRIUM, self.config.equilibrium_pull);

        let pair_synergy = match components.as_slice() {
            [a, b] => Some(synergy(&a.coordinate, &b.coordinate, &self.config)),
            _ => None,
        };
        if let Some(s) = pair_synergy {
            coordinate = coordinate.scaled(s.factor);
        }

        Ok(CompositionResult {
            phrase: phrase.to_string(),
            structure,
            coordinate,
            confidence: structure.confidence(&self.config),
            components,
            synergy: pair_synergy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ljpw_core::Concept;

    fn store() -> Arc<ConceptStore> {
        let concepts = vec![
            Concept::new("Kingdom", Coordinate::clamped(0.75, 0.90, 0.85, 0.88), "theology"),
            Concept::new("God", Coordinate::clamped(0.90, 0.90, 0.50, 0.95), "theology"),
            Concept::new("Love", Coordinate::clamped(0.95, 0.60, 0.40, 0.70), "virtues"),
            Concept::new("Justice", Coordinate::clamped(0.55, 0.95, 0.60, 0.70), "virtues"),
            Concept::new("Mercy", Coordinate::clamped(0.90, 0.70, 0.35, 0.75), "virtues"),
            Concept::new("Holy", Coordinate::clamped(0.80, 0.85, 0.60, 0.85), "theology"),
            Concept::new("Spirit", Coordinate::clamped(0.80, 0.65, 0.70, 0.85), "theology"),
            Concept::new(
                "Fear of the Lord",
                Coordinate::clamped(0.60, 0.85, 0.55, 0.95),
                "theology",
            ),
        ];
        Arc::new(ConceptStore::from_concepts(concepts).unwrap())
    }

    fn composer() -> Composer {
        Composer::new(store(), ComposerConfig::default())
    }

    // ============================================================================
    // Structures
    // ============================================================================

    #[test]
    fn test_kingdom_of_god() {
        let result = composer().compose("Kingdom of God").unwrap();

        assert_eq!(result.structure, Structure::ModifierHead);
        assert!(result.coordinate.l() >= 0.80, "L = {}", result.coordinate.l());
        assert!(result.coordinate.w() >= 0.90, "W = {}", result.coordinate.w());

        let kingdom = result.component("Kingdom").unwrap();
        let god = result.component("God").unwrap();
        assert_eq!(kingdom.role, Role::Modifier);
        assert_eq!(god.role, Role::Head);
        assert!(god.weight > kingdom.weight);
        assert!((kingdom.weight + god.weight - 1.0).abs() < 1e-9);
        assert!((result.confidence - 0.85).abs() < 1e-12);

        let synergy = result.synergy.unwrap();
        assert!(synergy.factor > 1.0);
        println!("[PASS] Kingdom of God composes to {:?}", result.coordinate);
    }

    #[test]
    fn test_single_is_identity() {
        let result = composer().compose("the Love").unwrap();
        assert_eq!(result.structure, Structure::Single);
        assert_eq!(result.coordinate, Coordinate::clamped(0.95, 0.60, 0.40, 0.70));
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].role, Role::Whole);
        assert!(result.synergy.is_none());
    }

    #[test]
    fn test_known_phrase_is_not_split() {
        let result = composer().compose("Fear of the Lord").unwrap();
        assert_eq!(result.structure, Structure::Single);
        assert_eq!(result.components[0].key, "fear_of_the_lord");
    }

    #[test]
    fn test_negation_inverts() {
        let c = composer();
        let plain = c.compose("Love and Justice").unwrap();
        let negated = c.compose("not Love and Justice").unwrap();

        assert_eq!(negated.structure, Structure::Negation);
        assert!((negated.confidence - 0.7).abs() < 1e-12);
        assert!(negated.coordinate.approx_eq(&plain.coordinate.inverted(), 1e-12));
        assert_eq!(negated.components.len(), 2);
    }

    #[test]
    fn test_double_negation_round_trips() {
        let c = composer();
        let love = c.compose("Love").unwrap();
        let twice = c.compose("not not Love").unwrap();
        assert!(twice.coordinate.approx_eq(&love.coordinate, 1e-12));
    }

    #[test]
    fn test_long_negation_chain() {
        let c = composer();
        let love = c.compose("Love").unwrap().coordinate;

        let even = c.compose(&format!("{}Love", "not ".repeat(20_000))).unwrap();
        assert_eq!(even.structure, Structure::Negation);
        assert!(even.coordinate.approx_eq(&love, 1e-12));

        let odd = c.compose(&format!("{}Love", "NOT ".repeat(20_001))).unwrap();
        assert!(odd.coordinate.approx_eq(&love.inverted(), 1e-12));
        assert_eq!(odd.components.len(), 1);

        let err = c
            .compose(&format!("{}Qwxz", "not ".repeat(5_000)))
            .unwrap_err();
        assert_eq!(err.missing(), Some(&["Qwxz".to_string()][..]));
        println!("[PASS] Long negation chains compose without recursion");
    }

    #[test]
    fn test_article_kept_when_stored_with_it() {
        let concepts = vec![
            Concept::new("The Way", Coordinate::clamped(0.85, 0.80, 0.50, 0.90), "theology"),
            Concept::new("Love", Coordinate::clamped(0.95, 0.60, 0.40, 0.70), "virtues"),
        ];
        let store = Arc::new(ConceptStore::from_concepts(concepts).unwrap());
        let c = Composer::new(store, ComposerConfig::default());

        let result = c.compose("The Way").unwrap();
        assert_eq!(result.structure, Structure::Single);
        assert_eq!(result.components[0].name, "The Way");
        assert_eq!(result.coordinate, Coordinate::clamped(0.85, 0.80, 0.50, 0.90));

        let negated = c.compose("not the way").unwrap();
        assert_eq!(negated.components[0].name, "The Way");

        let stripped = c.compose("the Love").unwrap();
        assert_eq!(stripped.components[0].name, "Love");
    }

    #[test]
    fn test_conjunction_of_three_has_no_synergy() {
        let result = composer().compose("Love, Justice and Mercy").unwrap();
        assert_eq!(result.structure, Structure::Conjunction);
        assert_eq!(result.components.len(), 3);
        assert!(result.synergy.is_none());
        let total: f64 = result.components.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_attribute_noun() {
        let result = composer().compose("Holy Spirit").unwrap();
        assert_eq!(result.structure, Structure::AttributeNoun);
        assert_eq!(result.components[0].role, Role::Attribute);
        assert_eq!(result.components[1].role, Role::Noun);
        assert!(result.synergy.is_some());
    }

    // ============================================================================
    // Failures
    // ============================================================================

    #[test]
    fn test_missing_component_named_exactly() {
        let c = composer();

        let err = c.compose("Kingdom of Qwxz").unwrap_err();
        assert_eq!(err.missing(), Some(&["Qwxz".to_string()][..]));

        let err = c.compose("Qwxz of God").unwrap_err();
        assert_eq!(err.missing(), Some(&["Qwxz".to_string()][..]));

        let err = c.compose("Love, Qwxz and Mercy").unwrap_err();
        assert_eq!(err.missing(), Some(&["Qwxz".to_string()][..]));
        println!("[PASS] Unknown components reported by name");
    }

    #[test]
    fn test_missing_components_in_phrase_order() {
        let err = composer().compose("Zeal and Love and Awe").unwrap_err();
        assert_eq!(
            err.missing(),
            Some(&["Zeal".to_string(), "Awe".to_string()][..])
        );
    }

    #[test]
    fn test_negated_missing_reports_full_phrase() {
        let err = composer().compose("not Qwxz").unwrap_err();
        match err {
            EngineError::MissingComponents { phrase, missing } => {
                assert_eq!(phrase, "not Qwxz");
                assert_eq!(missing, vec!["Qwxz".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_phrase() {
        assert!(matches!(composer().compose("   "), Err(EngineError::EmptyInput)));
    }

    // ============================================================================
    // Weights and bounds
    // ============================================================================

    #[test]
    fn test_zero_weight_falls_back_to_equal() {
        let config = ComposerConfig {
            axis_weights: [0.0, 0.0, 1.0, 0.0],
            ..ComposerConfig::default()
        };
        let concepts = vec![
            Concept::new("Calm", Coordinate::clamped(0.5, 0.5, 0.0, 0.5), "d"),
            Concept::new("Still", Coordinate::clamped(0.4, 0.6, 0.0, 0.3), "d"),
        ];
        let store = Arc::new(ConceptStore::from_concepts(concepts).unwrap());
        let result = Composer::new(store, config).compose("Calm Still").unwrap();
        for component in &result.components {
            assert!((component.weight - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_coordinates_stay_in_range() {
        let c = composer();
        for phrase in [
            "Kingdom of God",
            "not Kingdom of God",
            "Holy Spirit",
            "God and Love",
            "Love, Justice, Mercy, Holy and Spirit",
        ] {
            let result = c.compose(phrase).unwrap();
            for v in result.coordinate.as_array() {
                assert!((0.0..=1.0).contains(&v), "{phrase}: {v}");
            }
        }
    }
}
