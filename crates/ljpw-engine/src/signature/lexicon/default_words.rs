//! Default vocabulary for the lexicon and phrase table.
//!
//! Values are `[L, J, P, W]` profiles. Words are grouped by the axis they
//! lean toward; neighbouring axes are kept moderate so a single word never
//! pins a coordinate to an edge.

use ljpw_core::Coordinate;

use super::{Lexicon, PhraseTable};

/// Whole words, grouped by leaning.
const WORDS: &[(&str, [f64; 4])] = &[
    // Love-leaning
    ("love", [0.95, 0.60, 0.40, 0.70]),
    ("mercy", [0.90, 0.60, 0.35, 0.70]),
    ("compassion", [0.95, 0.60, 0.35, 0.70]),
    ("kindness", [0.90, 0.55, 0.35, 0.65]),
    ("grace", [0.90, 0.65, 0.45, 0.75]),
    ("care", [0.85, 0.55, 0.40, 0.60]),
    ("forgive", [0.90, 0.60, 0.35, 0.70]),
    ("heart", [0.85, 0.50, 0.45, 0.60]),
    ("friend", [0.85, 0.55, 0.40, 0.60]),
    ("neighbor", [0.80, 0.60, 0.35, 0.60]),
    ("peace", [0.80, 0.65, 0.40, 0.75]),
    ("hope", [0.80, 0.55, 0.45, 0.70]),
    ("faith", [0.80, 0.65, 0.50, 0.75]),
    ("spirit", [0.80, 0.65, 0.60, 0.85]),
    ("gentle", [0.85, 0.55, 0.25, 0.65]),
    // Justice-leaning
    ("justice", [0.55, 0.95, 0.60, 0.70]),
    ("law", [0.40, 0.90, 0.65, 0.70]),
    ("fair", [0.55, 0.90, 0.40, 0.65]),
    ("right", [0.55, 0.90, 0.55, 0.70]),
    ("righteous", [0.65, 0.95, 0.55, 0.80]),
    ("judge", [0.40, 0.90, 0.65, 0.70]),
    ("order", [0.35, 0.85, 0.65, 0.65]),
    ("honest", [0.60, 0.90, 0.40, 0.75]),
    ("duty", [0.50, 0.85, 0.55, 0.60]),
    ("covenant", [0.75, 0.90, 0.55, 0.75]),
    ("holy", [0.80, 0.90, 0.60, 0.85]),
    ("lord", [0.75, 0.85, 0.90, 0.85]),
    // Power-leaning
    ("power", [0.30, 0.50, 0.95, 0.50]),
    ("might", [0.30, 0.50, 0.90, 0.45]),
    ("strength", [0.40, 0.50, 0.90, 0.50]),
    ("strong", [0.40, 0.50, 0.85, 0.50]),
    ("force", [0.25, 0.45, 0.90, 0.40]),
    ("authority", [0.40, 0.70, 0.90, 0.65]),
    ("king", [0.50, 0.75, 0.90, 0.60]),
    ("kingdom", [0.75, 0.90, 0.85, 0.88]),
    ("sun", [0.50, 0.40, 0.90, 0.40]),
    ("shine", [0.50, 0.40, 0.85, 0.50]),
    ("bright", [0.55, 0.45, 0.80, 0.60]),
    ("fire", [0.40, 0.45, 0.90, 0.45]),
    ("storm", [0.20, 0.35, 0.90, 0.35]),
    ("build", [0.45, 0.55, 0.80, 0.60]),
    ("create", [0.65, 0.55, 0.85, 0.70]),
    // Wisdom-leaning
    ("wisdom", [0.60, 0.60, 0.40, 0.95]),
    ("wise", [0.60, 0.60, 0.45, 0.90]),
    ("truth", [0.50, 0.80, 0.40, 0.90]),
    ("true", [0.50, 0.80, 0.40, 0.85]),
    ("knowledge", [0.45, 0.60, 0.50, 0.90]),
    ("know", [0.45, 0.60, 0.50, 0.85]),
    ("understand", [0.60, 0.60, 0.40, 0.90]),
    ("learn", [0.50, 0.55, 0.45, 0.85]),
    ("teach", [0.65, 0.65, 0.50, 0.85]),
    ("insight", [0.55, 0.60, 0.45, 0.90]),
    ("word", [0.60, 0.70, 0.55, 0.85]),
    ("light", [0.55, 0.55, 0.60, 0.85]),
    ("god", [0.90, 0.90, 0.50, 0.95]),
    // Low on every axis
    ("hate", [0.05, 0.25, 0.45, 0.20]),
    ("cruel", [0.05, 0.15, 0.55, 0.20]),
    ("chaos", [0.20, 0.05, 0.55, 0.15]),
    ("lie", [0.20, 0.10, 0.35, 0.15]),
    ("fool", [0.35, 0.30, 0.25, 0.05]),
    ("weak", [0.45, 0.40, 0.05, 0.35]),
    ("darkness", [0.15, 0.20, 0.40, 0.15]),
];

/// Roots matched as substrings by the morphology and context layers.
///
/// Shorter than four characters is allowed here; the detector filters by
/// its configured minimum.
const ROOTS: &[(&str, [f64; 4])] = &[
    ("love", [0.90, 0.55, 0.40, 0.65]),
    ("merci", [0.90, 0.60, 0.35, 0.70]),
    ("compass", [0.95, 0.60, 0.35, 0.70]),
    ("kind", [0.85, 0.55, 0.35, 0.65]),
    ("grace", [0.90, 0.65, 0.45, 0.75]),
    ("graci", [0.90, 0.65, 0.45, 0.75]),
    ("forgiv", [0.90, 0.60, 0.35, 0.70]),
    ("peace", [0.80, 0.65, 0.40, 0.75]),
    ("just", [0.50, 0.90, 0.60, 0.70]),
    ("judg", [0.40, 0.90, 0.65, 0.70]),
    ("fair", [0.55, 0.90, 0.40, 0.65]),
    ("right", [0.55, 0.90, 0.55, 0.70]),
    ("honest", [0.60, 0.90, 0.40, 0.75]),
    ("holy", [0.80, 0.90, 0.60, 0.85]),
    ("holi", [0.80, 0.90, 0.60, 0.85]),
    ("power", [0.30, 0.50, 0.95, 0.50]),
    ("might", [0.30, 0.50, 0.90, 0.45]),
    ("streng", [0.40, 0.50, 0.90, 0.50]),
    ("strong", [0.40, 0.50, 0.85, 0.50]),
    ("author", [0.40, 0.70, 0.90, 0.65]),
    ("king", [0.50, 0.75, 0.90, 0.60]),
    ("wisd", [0.60, 0.60, 0.40, 0.95]),
    ("wise", [0.60, 0.60, 0.45, 0.90]),
    ("know", [0.45, 0.60, 0.50, 0.85]),
    ("truth", [0.50, 0.80, 0.40, 0.90]),
    ("learn", [0.50, 0.55, 0.45, 0.85]),
    ("teach", [0.65, 0.65, 0.50, 0.85]),
    ("light", [0.55, 0.55, 0.60, 0.85]),
    ("hate", [0.05, 0.25, 0.45, 0.20]),
    ("cruel", [0.05, 0.15, 0.55, 0.20]),
];

/// Multi-word phrases known without a store.
const PHRASES: &[(&str, [f64; 4])] = &[
    ("kingdom of god", [0.85, 0.90, 0.75, 0.92]),
    ("kingdom of heaven", [0.85, 0.88, 0.72, 0.90]),
    ("holy spirit", [0.90, 0.85, 0.80, 0.92]),
    ("fear of the lord", [0.60, 0.85, 0.70, 0.95]),
    ("word of god", [0.75, 0.85, 0.70, 0.95]),
    ("love your neighbor", [0.95, 0.75, 0.40, 0.75]),
    ("grace and truth", [0.85, 0.80, 0.45, 0.88]),
    ("body of christ", [0.90, 0.80, 0.60, 0.80]),
    ("son of man", [0.80, 0.80, 0.75, 0.85]),
    ("bread of life", [0.90, 0.65, 0.60, 0.80]),
    ("rule of law", [0.35, 0.95, 0.75, 0.70]),
    ("balance of power", [0.40, 0.85, 0.80, 0.70]),
    ("common good", [0.85, 0.80, 0.45, 0.75]),
    ("golden rule", [0.90, 0.85, 0.40, 0.80]),
    ("tree of knowledge", [0.45, 0.60, 0.50, 0.92]),
    ("light of the world", [0.80, 0.75, 0.70, 0.90]),
];

impl Default for Lexicon {
    /// Create the built-in lexicon.
    ///
    /// Covers each axis with a few dozen words plus their common roots,
    /// and a small set of words that sit low on every axis.
    fn default() -> Self {
        let mut lexicon = Self::new();
        for (word, values) in WORDS {
            lexicon.insert_word(word, Coordinate::from_array_clamped(*values));
        }
        for (root, values) in ROOTS {
            lexicon.insert_root(root, Coordinate::from_array_clamped(*values));
        }
        lexicon
    }
}

impl Default for PhraseTable {
    /// Create the built-in phrase table.
    fn default() -> Self {
        Self::from_entries(PHRASES.iter().map(|(phrase, values)| (*phrase, *values)))
    }
}
