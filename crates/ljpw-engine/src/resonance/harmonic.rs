//! Harmonic ratio bands between axis pairs.
//!
//! For each of the six axis pairs the ratio `v_i / v_j` is taken for query
//! and candidate, folded to `≥ 1`, and compared against a small set of
//! musical/natural ratios. Both sides must sit in the same band and agree
//! on the directed ratio.

use ljpw_core::{Axis, Coordinate};
use serde::{Deserialize, Serialize};

use crate::config::MatcherConfig;

/// Golden ratio φ.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Target ratios, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicBand {
    /// 1:1
    Unison,
    /// 3:2
    PerfectFifth,
    /// φ:1
    GoldenRatio,
}

impl HarmonicBand {
    pub const ALL: [HarmonicBand; 3] = [
        HarmonicBand::Unison,
        HarmonicBand::PerfectFifth,
        HarmonicBand::GoldenRatio,
    ];

    /// Folded ratio this band is centred on.
    pub const fn target(self) -> f64 {
        match self {
            HarmonicBand::Unison => 1.0,
            HarmonicBand::PerfectFifth => 1.5,
            HarmonicBand::GoldenRatio => GOLDEN_RATIO,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HarmonicBand::Unison => "unison",
            HarmonicBand::PerfectFifth => "perfect_fifth",
            HarmonicBand::GoldenRatio => "golden_ratio",
        }
    }

    fn contains(self, folded: f64, band_width: f64) -> bool {
        (folded - self.target()).abs() <= band_width
    }
}

impl std::fmt::Display for HarmonicBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A harmonic agreement on one axis pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonicMatch {
    pub axes: (Axis, Axis),
    pub band: HarmonicBand,
    /// Directed ratio `q_i / q_j`.
    pub query_ratio: f64,
    /// Directed ratio `c_i / c_j`.
    pub candidate_ratio: f64,
}

/// Fold a ratio to `≥ 1`; the flag is true when it was inverted.
fn fold(ratio: f64) -> (f64, bool) {
    if ratio < 1.0 {
        (1.0 / ratio, true)
    } else {
        (ratio, false)
    }
}

/// All axis pairs on which `query` and `candidate` agree harmonically.
pub fn harmonic_matches(
    query: &Coordinate,
    candidate: &Coordinate,
    config: &MatcherConfig,
) -> Vec<HarmonicMatch> {
    let eps = config.harmonic_epsilon;
    let mut matches = Vec::new();

    for (a, b) in Axis::pairs() {
        let (qa, qb) = (query.get(a), query.get(b));
        let (ca, cb) = (candidate.get(a), candidate.get(b));
        if qa <= eps || qb <= eps || ca <= eps || cb <= eps {
            continue;
        }

        let query_ratio = qa / qb;
        let candidate_ratio = ca / cb;
        if (query_ratio - candidate_ratio).abs() > config.agreement_tolerance {
            continue;
        }

        let (q_folded, q_inverted) = fold(query_ratio);
        let (c_folded, c_inverted) = fold(candidate_ratio);

        let band = HarmonicBand::ALL.into_iter().find(|band| {
            (q_inverted == c_inverted || *band == HarmonicBand::Unison)
                && band.contains(q_folded, config.band_width)
                && band.contains(c_folded, config.band_width)
        });

        if let Some(band) = band {
            matches.push(HarmonicMatch {
                axes: (a, b),
                band,
                query_ratio,
                candidate_ratio,
            });
        }
    }

    matches
}

/// `harmonic_bonus × matches`, capped at 1.
pub fn harmonic_strength(match_count: usize, config: &MatcherConfig) -> f64 {
    (config.harmonic_bonus * match_count as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unison_pair_matches() {
        let config = MatcherConfig::default();
        let q = Coordinate::clamped(0.6, 0.6, 0.2, 0.9);
        let matches = harmonic_matches(&q, &q, &config);

        let lj = matches
            .iter()
            .find(|m| m.axes == (Axis::Love, Axis::Justice))
            .unwrap();
        assert_eq!(lj.band, HarmonicBand::Unison);
        // L/W and J/W fold to 1.5
        assert_eq!(matches.len(), 3);
        assert!(harmonic_strength(matches.len(), &config) > 0.0);
    }

    #[test]
    fn test_no_band_means_zero() {
        let config = MatcherConfig::default();
        let q = Coordinate::clamped(0.2, 0.5, 0.9, 0.35);
        let matches = harmonic_matches(&q, &q, &config);
        assert!(matches.is_empty());
        assert_eq!(harmonic_strength(matches.len(), &config), 0.0);
    }

    #[test]
    fn test_opposite_orientation_rejected_outside_unison() {
        let config = MatcherConfig {
            agreement_tolerance: 10.0,
            ..MatcherConfig::default()
        };
        // L/J = 1.5 vs L/J = 1/1.5
        let q = Coordinate::clamped(0.9, 0.6, 0.05, 0.05);
        let c = Coordinate::clamped(0.6, 0.9, 0.05, 0.05);
        let matches = harmonic_matches(&q, &c, &config);
        assert!(matches
            .iter()
            .all(|m| m.axes != (Axis::Love, Axis::Justice)));
    }

    #[test]
    fn test_near_zero_axes_skipped() {
        let config = MatcherConfig::default();
        let q = Coordinate::clamped(0.0, 0.0, 0.0, 0.0);
        assert!(harmonic_matches(&q, &q, &config).is_empty());
    }

    #[test]
    fn test_directed_ratios_must_agree() {
        let config = MatcherConfig::default();
        // Both L/J sit in the golden band, but 1.60 vs 1.66 differs by 0.06
        let q = Coordinate::clamped(0.80, 0.50, 0.01, 0.01);
        let c = Coordinate::clamped(0.83, 0.50, 0.01, 0.01);
        let matches = harmonic_matches(&q, &c, &config);
        assert!(matches
            .iter()
            .all(|m| m.axes != (Axis::Love, Axis::Justice)));
    }

    #[test]
    fn test_strength_capped() {
        let config = MatcherConfig::default();
        assert_eq!(harmonic_strength(6, &config), 1.0);
        assert!((harmonic_strength(2, &config) - 0.4).abs() < 1e-12);
    }
}
