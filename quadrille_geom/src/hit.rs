// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap results and rays.

use kurbo::Vec2;

use crate::vector::{Axis, Position, Vector};

/// Result of a box/box overlap test.
///
/// Both fields are signed by the direction from the tested box's center towards the
/// other box's center. A hit is transient: it is handed to a resolver and dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Penetration depth per planar axis, signed towards the other box.
    pub delta: Vec2,
    /// Separation direction per planar axis (`±1` on each axis).
    pub normal: Vec2,
}

impl Hit {
    /// The planar axis with the smaller penetration.
    ///
    /// Ties favor [`Axis::X`].
    pub fn shallow_axis(&self) -> Axis {
        if self.delta.x.abs() <= self.delta.y.abs() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Smallest translation that, applied to the other box, separates the pair.
    ///
    /// Negate it to move the tested box instead.
    pub fn minimum_translation(&self) -> Vector {
        match self.shallow_axis() {
            Axis::X => Vector::planar(self.delta.x, 0.0),
            _ => Vector::planar(0.0, self.delta.y),
        }
    }

    /// The same hit seen from the other box.
    pub fn flipped(&self) -> Self {
        Self {
            delta: -self.delta,
            normal: -self.normal,
        }
    }
}

/// A half-line starting at `origin` and extending along `direction`.
///
/// The direction is not normalized; ray parameters are expressed in multiples of it,
/// so a ray built from a segment reaches the segment end at `t = 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Position,
    /// Direction (and parameter scale) of the ray.
    pub direction: Vector,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    pub const fn new(origin: Position, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Ray from `start` towards `end`, with `t = 1` at `end`.
    pub fn between(start: Position, end: Position) -> Self {
        Self::new(start, end - start)
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f64) -> Position {
        self.origin.add_scaled(self.direction, t)
    }
}
