// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector and position value types.

use core::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use kurbo::{Point, Vec2};

/// Coordinate axis selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical (plane) axis.
    Y,
    /// Elevation axis.
    Z,
}

impl Axis {
    /// All three axes in `x, y, z` order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The two planar axes.
    pub const PLANE: [Self; 2] = [Self::X, Self::Y];
}

/// A displacement in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with every component set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Planar vector with a zero z component.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or [`Vector::ZERO`] for a (near) zero vector.
    pub fn normalized(self) -> Self {
        let m = self.magnitude();
        if m < 1e-12 {
            return Self::ZERO;
        }
        self * (1.0 / m)
    }

    /// `self + other * scale`.
    #[inline]
    pub fn add_scaled(self, other: Self, scale: f64) -> Self {
        self + other * scale
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// True if every component is exactly zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Component-wise product.
    pub fn scale_by(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Planar part of the vector as a kurbo `Vec2`.
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::planar(v.x, v.y)
    }
}

impl Index<Axis> for Vector {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A location in world space.
///
/// `z` is elevation; the collision grid and navigation graph partition the `x`/`y` plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (elevation).
    pub z: f64,
}

impl Position {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position on the ground plane (`z = 0`).
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// `self + v * scale`.
    #[inline]
    pub fn add_scaled(self, v: Vector, scale: f64) -> Self {
        self + v * scale
    }

    /// Offset of this position from the origin.
    pub const fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Planar part of the position as a kurbo `Point`.
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Planar distance to `other`, ignoring elevation.
    pub fn planar_distance(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self::planar(p.x, p.y)
    }
}

impl Index<Axis> for Position {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Add<Vector> for Position {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vector> for Position {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub<Vector> for Position {
    type Output = Self;

    fn sub(self, rhs: Vector) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
