//! The four semantic axes of the coordinate space.
//!
//! Every [`Coordinate`](super::Coordinate) has exactly one component per axis,
//! always stored in the fixed order L, J, P, W.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of axes in the coordinate space.
pub const AXIS_COUNT: usize = 4;

/// Number of unordered axis pairs (4 choose 2).
pub const AXIS_PAIR_COUNT: usize = 6;

/// One of the four semantic axes.
///
/// The declaration order is the storage order and the tie-break order
/// used by [`Coordinate::dominant_axis`](super::Coordinate::dominant_axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// L
    Love,
    /// J
    Justice,
    /// P
    Power,
    /// W
    Wisdom,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::Love, Axis::Justice, Axis::Power, Axis::Wisdom];

    /// Storage index of this axis (L=0, J=1, P=2, W=3).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::Love => 0,
            Axis::Justice => 1,
            Axis::Power => 2,
            Axis::Wisdom => 3,
        }
    }

    /// Axis for a storage index, or `None` if out of range.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter symbol (`L`, `J`, `P`, `W`).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Axis::Love => 'L',
            Axis::Justice => 'J',
            Axis::Power => 'P',
            Axis::Wisdom => 'W',
        }
    }

    /// Lowercase axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Love => "love",
            Axis::Justice => "justice",
            Axis::Power => "power",
            Axis::Wisdom => "wisdom",
        }
    }

    /// All six unordered axis pairs `(a, b)` with `a` before `b`.
    pub fn pairs() -> [(Axis, Axis); AXIS_PAIR_COUNT] {
        [
            (Axis::Love, Axis::Justice),
            (Axis::Love, Axis::Power),
            (Axis::Love, Axis::Wisdom),
            (Axis::Justice, Axis::Power),
            (Axis::Justice, Axis::Wisdom),
            (Axis::Power, Axis::Wisdom),
        ]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Axis {
    type Err = String;

    /// Accepts the symbol or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "love" => Ok(Axis::Love),
            "j" | "justice" => Ok(Axis::Justice),
            "p" | "power" => Ok(Axis::Power),
            "w" | "wisdom" => Ok(Axis::Wisdom),
            other => Err(format!("unknown axis '{}'", other)),
        }
    }
}
