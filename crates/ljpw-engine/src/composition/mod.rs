//! Phrase composition.
//!
//! The [`Composer`] recognizes the structure of a phrase (negation, list,
//! "X of Y", "X Y"), resolves each part against the concept store and
//! blends their coordinates by semantic weight. Two-part phrases also get a
//! bounded synergy adjustment.

mod composer;
mod parser;
mod synergy;
mod types;

pub use composer::Composer;
pub use parser::{parse, strip_articles, ParsedPhrase};
pub use synergy::{raw_synergy, synergy};
pub use types::{Component, CompositionResult, Role, Structure, Synergy};
