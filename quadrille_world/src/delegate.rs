// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision classification and resolution.

use quadrille_geom::{Hit, Position, Vector};

use crate::entity::Body;
use crate::types::EntityId;

/// Read-only view of one side of an overlapping pair.
#[derive(Copy, Clone, Debug)]
pub struct BodyView<'a> {
    /// The entity.
    pub id: EntityId,
    /// Its position.
    pub position: Position,
    /// Its velocity.
    pub velocity: Vector,
    /// Its body.
    pub body: &'a Body,
}

/// Game rules for overlapping bodies.
///
/// The world asks the delegate to classify every overlapping pair found by the narrow
/// phase. Contact and collision are independent: a pair may be either, both or neither.
/// Results are taken as given; the world does not check them for plausibility.
pub trait CollisionDelegate {
    /// Whether `a` and `b` report a contact.
    fn is_contactable(&self, a: &BodyView<'_>, b: &BodyView<'_>) -> bool;

    /// Whether `a` and `b` are pushed apart.
    fn is_collidable(&self, a: &BodyView<'_>, b: &BodyView<'_>) -> bool;

    /// Corrections for `a` and `b` given `hit`, computed from `a`'s side (its delta points
    /// towards `b`).
    fn resolve_collision(
        &mut self,
        a: &BodyView<'_>,
        b: &BodyView<'_>,
        hit: &Hit,
    ) -> (Vector, Vector);
}

/// Stock delegate driven by the bodies' category masks.
///
/// Collisions are resolved by pushing the two boxes apart along the axis of least
/// penetration, each body taking half of the correction.
#[derive(Copy, Clone, Debug, Default)]
pub struct CategoryDelegate;

impl CollisionDelegate for CategoryDelegate {
    fn is_contactable(&self, a: &BodyView<'_>, b: &BodyView<'_>) -> bool {
        a.body.is_contactable_with(b.body)
    }

    fn is_collidable(&self, a: &BodyView<'_>, b: &BodyView<'_>) -> bool {
        a.body.is_collidable_with(b.body)
    }

    fn resolve_collision(
        &mut self,
        _a: &BodyView<'_>,
        _b: &BodyView<'_>,
        hit: &Hit,
    ) -> (Vector, Vector) {
        let half = hit.minimum_translation() * 0.5;
        (-half, half)
    }
}
