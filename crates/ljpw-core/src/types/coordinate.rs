//! Points of the 4-dimensional semantic space.
//!
//! A [`Coordinate`] can only be built through validating or clamping
//! constructors, so every value of this type has all four components in
//! `[0, 1]` and never holds NaN or infinity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::axis::{Axis, AXIS_COUNT};
use crate::error::{CoreError, CoreResult};

/// Denominators at or below this magnitude are treated as zero.
pub const NUMERIC_EPSILON: f64 = 1e-9;

/// Neutral reference point derived from fixed mathematical constants.
///
/// - L = 1/φ = (√5 − 1)/2
/// - J = √2 − 1
/// - P = e − 2
/// - W = ln 2
pub const NATURAL_EQUILIBRIUM: Coordinate = Coordinate([
    0.618_033_988_749_895,
    std::f64::consts::SQRT_2 - 1.0,
    std::f64::consts::E - 2.0,
    std::f64::consts::LN_2,
]);

/// Theoretical upper bound of the space, (1, 1, 1, 1).
pub const ANCHOR_POINT: Coordinate = Coordinate([1.0; AXIS_COUNT]);

/// A point in `[0, 1]^4` with axes L, J, P, W.
///
/// Serialized as a plain `[L, J, P, W]` array. Deserialization validates the
/// range and rejects non-finite values.
///
/// # Example
///
/// ```
/// use ljpw_core::{Axis, Coordinate};
///
/// let c = Coordinate::new(0.9, 0.5, 0.3, 0.7).unwrap();
/// assert_eq!(c.dominant_axis(), Axis::Love);
///
/// // Out-of-range input is rejected by `new` and clamped by `clamped`.
/// assert!(Coordinate::new(1.2, 0.5, 0.5, 0.5).is_err());
/// assert_eq!(Coordinate::clamped(1.2, 0.5, 0.5, 0.5).l(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", try_from = "[f64; 4]")]
pub struct Coordinate([f64; AXIS_COUNT]);

/// Map one raw value into `[0, 1]`.
///
/// NaN becomes 0.0, +∞ becomes 1.0, −∞ becomes 0.0, finite values are clamped.
#[inline]
pub fn sanitize_component(value: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!("NaN coordinate component replaced with 0.0");
        return 0.0;
    }
    if value.is_infinite() {
        tracing::warn!(value, "Infinite coordinate component clamped");
        return if value > 0.0 { 1.0 } else { 0.0 };
    }
    value.clamp(0.0, 1.0)
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// # Errors
    ///
    /// `CoreError::ValidationError` if any component is non-finite or outside `[0, 1]`.
    pub fn new(l: f64, j: f64, p: f64, w: f64) -> CoreResult<Self> {
        Self::from_array([l, j, p, w])
    }

    /// Create a validated coordinate from an `[L, J, P, W]` array.
    pub fn from_array(values: [f64; AXIS_COUNT]) -> CoreResult<Self> {
        for axis in Axis::ALL {
            let v = values[axis.index()];
            if !v.is_finite() {
                return Err(CoreError::validation(
                    axis.name(),
                    format!("value {} is not finite", v),
                ));
            }
            if !(0.0..=1.0).contains(&v) {
                return Err(CoreError::validation(
                    axis.name(),
                    format!("value {} outside [0, 1]", v),
                ));
            }
        }
        Ok(Self(values))
    }

    /// Create a coordinate, sanitizing every component into `[0, 1]`.
    pub fn clamped(l: f64, j: f64, p: f64, w: f64) -> Self {
        Self::from_array_clamped([l, j, p, w])
    }

    /// Sanitizing constructor from an array.
    pub fn from_array_clamped(values: [f64; AXIS_COUNT]) -> Self {
        Self(values.map(sanitize_component))
    }

    /// Coordinate with the same value on every axis (sanitized).
    pub fn uniform(value: f64) -> Self {
        Self([sanitize_component(value); AXIS_COUNT])
    }

    /// The Natural Equilibrium reference point.
    #[inline]
    pub const fn natural_equilibrium() -> Self {
        NATURAL_EQUILIBRIUM
    }

    /// Love component.
    #[inline]
    pub fn l(&self) -> f64 {
        self.0[0]
    }

    /// Justice component.
    #[inline]
    pub fn j(&self) -> f64 {
        self.0[1]
    }

    /// Power component.
    #[inline]
    pub fn p(&self) -> f64 {
        self.0[2]
    }

    /// Wisdom component.
    #[inline]
    pub fn w(&self) -> f64 {
        self.0[3]
    }

    /// Component for an axis.
    #[inline]
    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// Components as an `[L, J, P, W]` array.
    #[inline]
    pub fn as_array(&self) -> [f64; AXIS_COUNT] {
        self.0
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn squared_distance(&self, other: &Coordinate) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Euclidean distance. Always in `[0, 2]`.
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Elementwise `1 − x`.
    pub fn inverted(&self) -> Self {
        Self(self.0.map(|v| 1.0 - v))
    }

    /// Multiply every component by `factor`, then clamp.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_array_clamped(self.0.map(|v| v * factor))
    }

    /// Linear interpolation toward `target` by `t` (clamped to `[0, 1]`).
    pub fn lerp(&self, target: &Coordinate, t: f64) -> Self {
        let t = sanitize_component(t);
        let mut out = [0.0; AXIS_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i] * (1.0 - t) + target.0[i] * t;
        }
        Self::from_array_clamped(out)
    }

    /// Axis with the largest component; ties resolve to the earliest axis.
    pub fn dominant_axis(&self) -> Axis {
        let mut best = Axis::Love;
        for axis in Axis::ALL {
            if self.get(axis) > self.get(best) {
                best = axis;
            }
        }
        best
    }

    /// Mean of the four components.
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / AXIS_COUNT as f64
    }

    /// Derived composite axes `((L+W) − (J+P), (L+P) − (J+W))`, each in `[-2, 2]`.
    pub fn emergent_composites(&self) -> (f64, f64) {
        let [l, j, p, w] = self.0;
        ((l + w) - (j + p), (l + p) - (j + w))
    }

    /// Distance to the Anchor Point (1, 1, 1, 1).
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance(&ANCHOR_POINT)
    }

    /// `1 / (1 + distance_to_anchor)`, in `(0, 1]`.
    pub fn harmony_index(&self) -> f64 {
        1.0 / (1.0 + self.distance_to_anchor())
    }

    /// Weighted mean of coordinates.
    ///
    /// Non-finite or negative weights count as zero. Returns `None` when the
    /// total weight is not positive.
    pub fn weighted_mean<I>(items: I) -> Option<Coordinate>
    where
        I: IntoIterator<Item = (Coordinate, f64)>,
    {
        let mut acc = [0.0; AXIS_COUNT];
        let mut total = 0.0;
        for (coord, weight) in items {
            let weight = if weight.is_finite() && weight > 0.0 {
                weight
            } else {
                0.0
            };
            for (slot, v) in acc.iter_mut().zip(coord.0.iter()) {
                *slot += v * weight;
            }
            total += weight;
        }
        if total <= NUMERIC_EPSILON {
            return None;
        }
        Some(Self::from_array_clamped(acc.map(|v| v / total)))
    }

    /// Check approximate equality on every axis.
    pub fn approx_eq(&self, other: &Coordinate, tolerance: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for Coordinate {
    /// The Natural Equilibrium.
    fn default() -> Self {
        NATURAL_EQUILIBRIUM
    }
}

impl TryFrom<[f64; AXIS_COUNT]> for Coordinate {
    type Error = CoreError;

    fn try_from(values: [f64; AXIS_COUNT]) -> Result<Self, Self::Error> {
        Self::from_array(values)
    }
}

impl From<Coordinate> for [f64; AXIS_COUNT] {
    fn from(c: Coordinate) -> Self {
        c.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[L={:.3} J={:.3} P={:.3} W={:.3}]",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
