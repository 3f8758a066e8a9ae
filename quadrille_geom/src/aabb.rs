// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored axis-aligned bounding boxes.

use kurbo::Vec2;

use crate::hit::{Hit, Ray};
use crate::vector::{Axis, Position, Vector};

/// Minimum per-axis penetration reported as an overlap.
///
/// Boxes that merely touch (or overlap by float noise) are not hits.
pub const OVERLAP_EPSILON: f64 = 1e-6;

/// Axis-aligned bounding box with a configurable anchor.
///
/// The box is placed by `position`, which sits at the fraction `anchor` of the box on each
/// axis: an anchor of `0.5` puts `position` at the center, `0.0` at the minimum corner and
/// `1.0` at the maximum corner.
///
/// The center and corners are derived and recomputed by every mutator, so they are never
/// stale:
///
/// - `center = position + halfwidths * 2 * (0.5 - anchor)`
/// - `minimum = center - halfwidths`
/// - `maximum = center + halfwidths`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    position: Position,
    halfwidths: Vector,
    anchor: Vector,
    center: Position,
    minimum: Position,
    maximum: Position,
}

impl Aabb {
    /// Anchor placing `position` at the box center.
    pub const CENTERED: Vector = Vector::splat(0.5);

    /// Create a centered box.
    pub fn new(position: Position, halfwidths: Vector) -> Self {
        Self::with_anchor(position, halfwidths, Self::CENTERED)
    }

    /// Create a box whose `position` sits at `anchor` (per-axis fraction in `[0, 1]`).
    pub fn with_anchor(position: Position, halfwidths: Vector, anchor: Vector) -> Self {
        debug_assert!(
            halfwidths.x >= 0.0 && halfwidths.y >= 0.0 && halfwidths.z >= 0.0,
            "halfwidths must be non-negative"
        );
        let mut aabb = Self {
            position,
            halfwidths,
            anchor,
            center: position,
            minimum: position,
            maximum: position,
        };
        aabb.recompute();
        aabb
    }

    /// Anchor-space origin of the box.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Per-axis half extents.
    pub fn halfwidths(&self) -> Vector {
        self.halfwidths
    }

    /// Anchor fractions.
    pub fn anchor(&self) -> Vector {
        self.anchor
    }

    /// Box center.
    pub fn center(&self) -> Position {
        self.center
    }

    /// Minimum corner.
    pub fn minimum(&self) -> Position {
        self.minimum
    }

    /// Maximum corner.
    pub fn maximum(&self) -> Position {
        self.maximum
    }

    /// Move the box.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.recompute();
    }

    /// Resize the box around its anchor.
    pub fn set_halfwidths(&mut self, halfwidths: Vector) {
        debug_assert!(
            halfwidths.x >= 0.0 && halfwidths.y >= 0.0 && halfwidths.z >= 0.0,
            "halfwidths must be non-negative"
        );
        self.halfwidths = halfwidths;
        self.recompute();
    }

    /// Change the anchor, keeping `position` fixed.
    pub fn set_anchor(&mut self, anchor: Vector) {
        self.anchor = anchor;
        self.recompute();
    }

    /// Whether the point lies within the box (inclusive on all three axes).
    pub fn contains(&self, point: Position) -> bool {
        Axis::ALL
            .iter()
            .all(|&a| point[a] >= self.minimum[a] && point[a] <= self.maximum[a])
    }

    /// Overlap test against `other`.
    ///
    /// Per axis the penetration is `(halfwidths + other.halfwidths) - |center distance|`.
    /// Any axis below [`OVERLAP_EPSILON`] means no hit. Otherwise the hit carries the planar
    /// penetrations, signed by the direction from this center to the other's.
    pub fn overlap(&self, other: &Self) -> Option<Hit> {
        let d = other.center - self.center;
        let reach = self.halfwidths + other.halfwidths;
        let px = reach.x - d.x.abs();
        if px < OVERLAP_EPSILON {
            return None;
        }
        let py = reach.y - d.y.abs();
        if py < OVERLAP_EPSILON {
            return None;
        }
        let pz = reach.z - d.z.abs();
        if pz < OVERLAP_EPSILON {
            return None;
        }
        let sx = if d.x < 0.0 { -1.0 } else { 1.0 };
        let sy = if d.y < 0.0 { -1.0 } else { 1.0 };
        Some(Hit {
            delta: Vec2::new(px * sx, py * sy),
            normal: Vec2::new(sx, sy),
        })
    }

    /// Minkowski difference `self ⊖ other` as a centered box.
    ///
    /// The two boxes overlap iff the result contains the origin.
    pub fn minkowski_difference(&self, other: &Self) -> Self {
        let halfwidths = self.halfwidths + other.halfwidths;
        let position = (self.minimum - other.maximum.to_vector()) + halfwidths;
        Self::new(position, halfwidths)
    }

    /// First point where `ray` meets the box (slab method).
    ///
    /// Rays starting inside the box report the exit point. With `ignore_z` the box is
    /// treated as an infinite column along the z axis.
    pub fn raycast(&self, ray: &Ray, ignore_z: bool) -> Option<Position> {
        self.ray_parameter(ray, ignore_z).map(|t| ray.at(t))
    }

    /// Ray parameter of the point reported by [`Aabb::raycast`].
    pub fn ray_parameter(&self, ray: &Ray, ignore_z: bool) -> Option<f64> {
        let (near, far) = self.ray_interval(ray, ignore_z)?;
        if near == f64::NEG_INFINITY && far == f64::INFINITY {
            // Zero-length direction with the origin inside every slab.
            return Some(0.0);
        }
        Some(if near < 0.0 || far < 0.0 {
            near.max(far)
        } else {
            near.min(far)
        })
    }

    /// Parameters `(near, far)` where the infinite line through `ray` enters and leaves
    /// the box.
    ///
    /// `None` when the line misses the box or the box lies entirely behind the origin, so
    /// `far >= 0` always holds. `near` is negative when the origin is inside. A zero-length
    /// direction inside the box yields `(-inf, inf)`.
    pub fn ray_interval(&self, ray: &Ray, ignore_z: bool) -> Option<(f64, f64)> {
        let mut near = f64::NEG_INFINITY;
        let mut far = f64::INFINITY;
        let axes: &[Axis] = if ignore_z { &Axis::PLANE } else { &Axis::ALL };
        for &axis in axes {
            if !self.clip_slab(ray, axis, &mut near, &mut far) {
                return None;
            }
        }
        Some((near, far))
    }

    fn clip_slab(&self, ray: &Ray, axis: Axis, near: &mut f64, far: &mut f64) -> bool {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];
        let (lo, hi) = (self.minimum[axis], self.maximum[axis]);
        if direction == 0.0 {
            return origin >= lo && origin <= hi;
        }
        let mut t1 = (lo - origin) / direction;
        let mut t2 = (hi - origin) / direction;
        if t1 > t2 {
            core::mem::swap(&mut t1, &mut t2);
        }
        *near = near.max(t1);
        *far = far.min(t2);
        *near <= *far && *far >= 0.0
    }

    fn recompute(&mut self) {
        let h = self.halfwidths;
        let offset = h.scale_by(Vector::splat(0.5) - self.anchor) * 2.0;
        self.center = self.position + offset;
        self.minimum = self.center - h;
        self.maximum = self.center + h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(x: f64, y: f64, half: f64) -> Aabb {
        Aabb::new(Position::planar(x, y), Vector::splat(half))
    }

    #[test]
    fn derived_fields_follow_anchor() {
        let mut b = Aabb::with_anchor(
            Position::planar(0.0, 0.0),
            Vector::new(1.0, 2.0, 0.5),
            Vector::new(0.0, 0.0, 0.5),
        );
        assert_eq!(b.center(), Position::new(1.0, 2.0, 0.0));
        assert_eq!(b.minimum(), Position::new(0.0, 0.0, -0.5));
        assert_eq!(b.maximum(), Position::new(2.0, 4.0, 0.5));

        b.set_position(Position::planar(10.0, 0.0));
        assert_eq!(b.minimum(), Position::new(10.0, 0.0, -0.5));

        b.set_anchor(Aabb::CENTERED);
        assert_eq!(b.center(), Position::planar(10.0, 0.0));

        b.set_halfwidths(Vector::splat(3.0));
        assert_eq!(b.maximum(), Position::new(13.0, 3.0, 3.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = cube(0.0, 0.0, 1.0);
        assert!(b.contains(Position::new(1.0, -1.0, 1.0)));
        assert!(!b.contains(Position::new(1.000_001, 0.0, 0.0)));
        assert!(!b.contains(Position::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn overlap_signs_towards_other() {
        let a = cube(10.0, 10.0, 5.0);
        let b = cube(15.0, 13.0, 5.0);
        let hit = a.overlap(&b).expect("boxes overlap");
        assert_eq!(hit.delta, Vec2::new(5.0, 7.0));
        assert_eq!(hit.normal, Vec2::new(1.0, 1.0));

        let back = b.overlap(&a).expect("overlap is symmetric");
        assert_eq!(back.delta, Vec2::new(-5.0, -7.0));
        assert_eq!(back.normal, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn coincident_centers_push_positive_both_ways() {
        let a = cube(3.0, 3.0, 1.0);
        let b = cube(3.0, 3.0, 2.0);
        let ab = a.overlap(&b).expect("boxes overlap");
        let ba = b.overlap(&a).expect("boxes overlap");
        assert_eq!(ab.normal, Vec2::new(1.0, 1.0));
        assert_eq!(ba.normal, Vec2::new(1.0, 1.0));
        assert_eq!(ab.delta, ba.delta);
    }

    #[test]
    fn edge_contact_is_not_a_hit() {
        let a = cube(0.0, 0.0, 1.0);
        assert!(a.overlap(&cube(2.0, 0.0, 1.0)).is_none());
        assert!(a.overlap(&cube(2.0 - 1e-9, 0.0, 1.0)).is_none());
        assert!(a.overlap(&cube(1.9, 0.0, 1.0)).is_some());
    }

    #[test]
    fn overlap_requires_elevation_overlap() {
        let a = cube(0.0, 0.0, 1.0);
        let b = Aabb::new(Position::new(0.0, 0.0, 5.0), Vector::splat(1.0));
        assert!(a.overlap(&b).is_none());
    }

    #[test]
    fn minkowski_difference_contains_origin_on_overlap() {
        let a = cube(5.0, 5.0, 5.0);
        let b = cube(5.0, 10.0, 5.0);
        assert!(a.minkowski_difference(&b).contains(Position::ORIGIN));
    }

    #[test]
    fn minkowski_difference_misses_just_outside() {
        let a = cube(10.0, 10.0, 5.0);
        for other in [
            cube(-0.00001, 0.0, 5.0),
            cube(0.0, 20.00001, 5.0),
            cube(20.0, -0.00001, 5.0),
            cube(20.00001, 20.0, 5.0),
        ] {
            assert!(
                !a.minkowski_difference(&other).contains(Position::ORIGIN),
                "{other:?} should not overlap"
            );
        }
    }

    #[test]
    fn raycast_slab_cases() {
        let b = Aabb::new(Position::ORIGIN, Vector::splat(10.0));
        let miss_parallel = Ray::new(Position::planar(0.0, 25.0), Vector::new(1.0, 0.0, 0.0));
        assert!(b.raycast(&miss_parallel, false).is_none());

        let miss_vertical = Ray::new(Position::planar(50.0, 50.0), Vector::new(0.0, 5.0, 0.0));
        assert!(b.raycast(&miss_vertical, false).is_none());

        let diagonal = Ray::new(Position::planar(-10.0, -10.0), Vector::new(1.0, 1.0, 0.0));
        assert_eq!(b.raycast(&diagonal, false), Some(Position::planar(-10.0, -10.0)));

        let from_inside = Ray::new(Position::planar(10.0, 10.0), Vector::new(1.0, 1.0, 0.0));
        assert_eq!(b.raycast(&from_inside, false), Some(Position::planar(10.0, 10.0)));
    }

    #[test]
    fn raycast_from_center_reports_exit() {
        let b = Aabb::new(Position::ORIGIN, Vector::splat(2.0));
        let ray = Ray::new(Position::ORIGIN, Vector::new(1.0, 0.0, 0.0));
        assert_eq!(b.raycast(&ray, false), Some(Position::planar(2.0, 0.0)));
    }

    #[test]
    fn raycast_behind_origin_misses() {
        let b = Aabb::new(Position::planar(-20.0, 0.0), Vector::splat(2.0));
        let ray = Ray::new(Position::ORIGIN, Vector::new(1.0, 0.0, 0.0));
        assert!(b.raycast(&ray, false).is_none());
    }

    #[test]
    fn ray_interval_spans_entry_and_exit() {
        let b = Aabb::new(Position::planar(5.0, 0.0), Vector::splat(1.0));
        let ray = Ray::new(Position::ORIGIN, Vector::new(1.0, 0.0, 0.0));
        assert_eq!(b.ray_interval(&ray, true), Some((4.0, 6.0)));

        let inside = Ray::new(Position::planar(5.0, 0.0), Vector::new(2.0, 0.0, 0.0));
        assert_eq!(b.ray_interval(&inside, true), Some((-0.5, 0.5)));

        let still = Ray::new(Position::planar(5.0, 0.0), Vector::ZERO);
        assert_eq!(
            b.ray_interval(&still, true),
            Some((f64::NEG_INFINITY, f64::INFINITY))
        );
    }

    #[test]
    fn raycast_ignoring_z() {
        let b = Aabb::new(Position::planar(6.0, 6.0), Vector::splat(5.0));
        let ray = Ray::new(Position::new(0.0, 0.0, 6.0), Vector::new(1.0, 1.0, 1.0));
        assert!(b.raycast(&ray, true).is_some());
        assert!(b.raycast(&ray, false).is_none());
    }
}
