//! Pairwise synergy between two composed concepts.
//!
//! Love pairs with Wisdom and Justice with Power; Love set against Power
//! counts as opposition. The result scales the blended coordinate by a
//! bounded factor.

use ljpw_core::Coordinate;

use super::types::Synergy;
use crate::config::ComposerConfig;

/// Upper bound of the raw score, used to normalize.
const RAW_SCALE: f64 = 4.0;

/// `[min(L₁,W₂) + min(L₂,W₁)] + [min(J₁,P₂) + min(J₂,P₁)] − [|L₁−P₂| + |L₂−P₁|]`.
pub fn raw_synergy(a: &Coordinate, b: &Coordinate) -> f64 {
    let love_wisdom = a.l().min(b.w()) + b.l().min(a.w());
    let justice_power = a.j().min(b.p()) + b.j().min(a.p());
    let opposition = (a.l() - b.p()).abs() + (b.l() - a.p()).abs();
    love_wisdom + justice_power - opposition
}

/// Synergy of a pair under `config`.
pub fn synergy(a: &Coordinate, b: &Coordinate, config: &ComposerConfig) -> Synergy {
    let raw = raw_synergy(a, b);
    let normalized = raw / RAW_SCALE;
    let factor = 1.0 + (normalized * config.synergy_gain).clamp(-config.max_penalty, config.max_boost);
    Synergy {
        raw,
        normalized,
        factor,
    }
}
