//! Core domain types for the semantic coordinate space.

mod axis;
mod concept;
mod coordinate;

pub use axis::{Axis, AXIS_COUNT, AXIS_PAIR_COUNT};
pub use concept::{normalize_key, Concept};
pub use coordinate::{
    sanitize_component, Coordinate, ANCHOR_POINT, NATURAL_EQUILIBRIUM, NUMERIC_EPSILON,
};
