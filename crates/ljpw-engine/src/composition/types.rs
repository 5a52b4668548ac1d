//! Result types for phrase composition.

use ljpw_core::Coordinate;
use serde::{Deserialize, Serialize};

use crate::config::ComposerConfig;

/// Grammatical shape recognized in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    /// The phrase names one concept.
    Single,
    /// "not X".
    Negation,
    /// "X and Y", "X, Y and Z".
    Conjunction,
    /// "X of Y".
    ModifierHead,
    /// "X Y" (two words).
    AttributeNoun,
}

impl Structure {
    /// Confidence reported for this structure.
    pub fn confidence(self, config: &ComposerConfig) -> f64 {
        match self {
            Structure::Single => config.single_confidence,
            Structure::Negation => config.negation_confidence,
            Structure::Conjunction => config.conjunction_confidence,
            Structure::ModifierHead => config.modifier_head_confidence,
            Structure::AttributeNoun => config.attribute_noun_confidence,
        }
    }
}

/// Position of a component within its phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The only component of a single-concept phrase.
    Whole,
    /// `Y` in "X of Y".
    Head,
    /// `X` in "X of Y".
    Modifier,
    /// Second word of "X Y".
    Noun,
    /// First word of "X Y".
    Attribute,
    /// Member of a list.
    Conjunct,
}

impl Role {
    /// Weight multiplier for this role.
    pub fn multiplier(self, config: &ComposerConfig) -> f64 {
        match self {
            Role::Whole => 1.0,
            Role::Head => config.head_multiplier,
            Role::Modifier => config.modifier_multiplier,
            Role::Noun => config.noun_multiplier,
            Role::Attribute => config.attribute_multiplier,
            Role::Conjunct => config.conjunct_multiplier,
        }
    }
}

/// One resolved part of a composed phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// The component as written in the phrase (articles stripped).
    pub text: String,
    /// Key of the concept it resolved to.
    pub key: String,
    /// Display name of that concept.
    pub name: String,
    pub role: Role,
    pub coordinate: Coordinate,
    /// Normalized blend weight; weights of a result sum to 1.
    pub weight: f64,
}

/// Pairwise synergy of a two-component phrase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Synergy {
    /// Complementarity minus opposition, in `[-2, 4]`.
    pub raw: f64,
    /// `raw / 4`, in `[-0.5, 1]`.
    pub normalized: f64,
    /// Multiplier applied to the blend.
    pub factor: f64,
}

/// The outcome of composing a phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionResult {
    /// The phrase as given.
    pub phrase: String,
    pub structure: Structure,
    /// Composed coordinate, inside `[0, 1]⁴`.
    pub coordinate: Coordinate,
    pub confidence: f64,
    /// Components in phrase order.
    pub components: Vec<Component>,
    /// Present for two-component phrases only.
    pub synergy: Option<Synergy>,
}

impl CompositionResult {
    /// The component that resolved `text`, if any.
    pub fn component(&self, text: &str) -> Option<&Component> {
        let key = ljpw_core::normalize_key(text);
        self.components
            .iter()
            .find(|c| c.key == key || ljpw_core::normalize_key(&c.text) == key)
    }
}
