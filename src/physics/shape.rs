use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The collision geometry of a body.
///
/// A closed set of shape kinds: the narrow phase dispatches on the pair of
/// kinds with an exhaustive match, so adding a variant here surfaces every
/// pairing that still needs an implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A circle centered at the owning body's position plus `offset`
    Circle {
        /// The circle radius
        radius: f32,

        /// Offset of the circle center from the owning body's position
        offset: Vector2,
    },
}

impl Shape {
    /// Creates a circle shape centered on the owning body
    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius,
            offset: Vector2::zero(),
        }
    }

    /// Creates a circle shape with a local offset from the owning body
    pub fn circle_with_offset(radius: f32, offset: Vector2) -> Self {
        Self::Circle { radius, offset }
    }

    /// The default mass for a body with this shape, proportional to its area
    pub fn default_mass(&self) -> f32 {
        match *self {
            Shape::Circle { radius, .. } => std::f32::consts::PI * radius * radius,
        }
    }

    /// The local offset of the shape from the owning body's position
    pub fn offset(&self) -> Vector2 {
        match *self {
            Shape::Circle { offset, .. } => offset,
        }
    }
}
