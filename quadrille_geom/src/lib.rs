// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Geom: value types for a 2.5D game world.
//!
//! - [`Vector`] and [`Position`]: three-component displacements and locations. `z` is
//!   elevation; spatial partitioning happens on the `x`/`y` plane.
//! - [`Aabb`]: an axis-aligned box placed through a configurable anchor, with
//!   inclusive containment, epsilon-guarded overlap, Minkowski difference and a slab ray test.
//! - [`Hit`]: signed per-axis penetration returned by [`Aabb::overlap`].
//! - [`Ray`]: origin plus direction, with `t = 1` at the end of a segment ray.
//!
//! Planar quantities interoperate with [`kurbo`]: `Hit` fields are `Vec2`, and positions
//! convert to and from `Point`.
//!
//! # Example
//!
//! ```rust
//! use quadrille_geom::{Aabb, Position, Ray, Vector};
//!
//! let wall = Aabb::new(Position::planar(10.0, 10.0), Vector::splat(5.0));
//! let crate_box = Aabb::new(Position::planar(15.0, 13.0), Vector::splat(5.0));
//!
//! // Penetration is signed towards the other box.
//! let hit = wall.overlap(&crate_box).unwrap();
//! assert_eq!(hit.delta.x, 5.0);
//! assert_eq!(hit.normal.y, 1.0);
//!
//! // Segment ray from the origin through the wall.
//! let ray = Ray::between(Position::ORIGIN, Position::planar(20.0, 20.0));
//! assert_eq!(wall.raycast(&ray, true), Some(Position::planar(5.0, 5.0)));
//! ```

pub mod aabb;
pub mod hit;
pub mod vector;

pub use aabb::{Aabb, OVERLAP_EPSILON};
pub use hit::{Hit, Ray};
pub use vector::{Axis, Position, Vector};
