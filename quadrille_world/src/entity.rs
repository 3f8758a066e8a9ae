// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entities: physical bodies, per-entity state, and behavior hooks.

use core::fmt;

use quadrille_geom::{Aabb, Position, Vector};

use crate::types::{CollisionCategories, EntityFlags, EntityId};

/// Physical aspect of an entity: its box and collision masks.
///
/// A pair of bodies is *contactable* when either body's category intersects the other's
/// contact mask, and *collidable* likewise with the collision masks. Disabling contacts or
/// collisions makes the corresponding mask read as [`CollisionCategories::NONE`].
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    aabb: Aabb,
    /// Categories this body belongs to.
    pub category: CollisionCategories,
    /// Categories this body reports contacts with.
    pub contact_mask: CollisionCategories,
    /// Categories this body is pushed apart from.
    pub collision_mask: CollisionCategories,
    /// Whether contact tests consider this body.
    pub contacts_enabled: bool,
    /// Whether collision tests consider this body.
    pub collisions_enabled: bool,
}

impl Body {
    /// Centered box with the given half extents, in every category and every mask.
    pub fn new(halfwidths: Vector) -> Self {
        Self::from_aabb(Aabb::new(Position::ORIGIN, halfwidths))
    }

    /// Box with the given half extents whose entity position sits at `anchor`.
    pub fn anchored(halfwidths: Vector, anchor: Vector) -> Self {
        Self::from_aabb(Aabb::with_anchor(Position::ORIGIN, halfwidths, anchor))
    }

    fn from_aabb(aabb: Aabb) -> Self {
        Self {
            aabb,
            category: CollisionCategories::ALL,
            contact_mask: CollisionCategories::ALL,
            collision_mask: CollisionCategories::ALL,
            contacts_enabled: true,
            collisions_enabled: true,
        }
    }

    /// Same body with the given category and masks.
    pub fn with_masks(
        mut self,
        category: CollisionCategories,
        contact_mask: CollisionCategories,
        collision_mask: CollisionCategories,
    ) -> Self {
        self.category = category;
        self.contact_mask = contact_mask;
        self.collision_mask = collision_mask;
        self
    }

    /// Current world-space box.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Contact mask, or `NONE` while contacts are disabled.
    pub fn effective_contact_mask(&self) -> CollisionCategories {
        if self.contacts_enabled {
            self.contact_mask
        } else {
            CollisionCategories::NONE
        }
    }

    /// Collision mask, or `NONE` while collisions are disabled.
    pub fn effective_collision_mask(&self) -> CollisionCategories {
        if self.collisions_enabled {
            self.collision_mask
        } else {
            CollisionCategories::NONE
        }
    }

    /// Whether the two bodies report contacts with each other.
    pub fn is_contactable_with(&self, other: &Self) -> bool {
        self.category.intersects(other.effective_contact_mask())
            || self.effective_contact_mask().intersects(other.category)
    }

    /// Whether the two bodies are pushed apart when they overlap.
    pub fn is_collidable_with(&self, other: &Self) -> bool {
        self.category.intersects(other.effective_collision_mask())
            || self.effective_collision_mask().intersects(other.category)
    }
}

/// Timing for one tick, handed to behaviors and terrain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Elapsed time.
    pub dt: f64,
    /// World gravity.
    pub gravity: f64,
    /// Tick counter, starting at 1 for the first tick.
    pub tick: u64,
}

/// Mutable state of an entity, owned by the world.
#[derive(Clone, Debug)]
pub struct EntityState {
    position: Position,
    /// Velocity, integrated by [`EntityState::integrate`].
    pub velocity: Vector,
    body: Option<Body>,
    flags: EntityFlags,
}

impl EntityState {
    pub(crate) fn new(position: Position, velocity: Vector, mut body: Option<Body>) -> Self {
        if let Some(b) = body.as_mut() {
            b.aabb.set_position(position);
        }
        Self {
            position,
            velocity,
            body,
            flags: EntityFlags::STAGED,
        }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to `position`, keeping the body's box in step and flagging the change.
    pub fn set_position(&mut self, position: Position) {
        if position == self.position {
            return;
        }
        self.position = position;
        if let Some(b) = self.body.as_mut() {
            b.aabb.set_position(position);
        }
        self.flags |= EntityFlags::POSITION_CHANGED;
    }

    /// Move by `offset`.
    pub fn translate(&mut self, offset: Vector) {
        if !offset.is_zero() {
            self.set_position(self.position + offset);
        }
    }

    /// Move by `velocity * dt`.
    pub fn integrate(&mut self, dt: f64) {
        self.translate(self.velocity * dt);
    }

    /// Physical body, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Box of the physical body, if any.
    pub fn aabb(&self) -> Option<&Aabb> {
        self.body.as_ref().map(Body::aabb)
    }

    /// Resize the body's box. Flags the change like a move.
    pub fn set_halfwidths(&mut self, halfwidths: Vector) {
        if let Some(b) = self.body.as_mut() {
            if b.aabb.halfwidths() != halfwidths {
                b.aabb.set_halfwidths(halfwidths);
                self.flags |= EntityFlags::POSITION_CHANGED;
            }
        }
    }

    /// Change the body's masks and toggles without touching its box.
    pub fn update_body(&mut self, f: impl FnOnce(&mut Body)) {
        if let Some(b) = self.body.as_mut() {
            f(b);
        }
    }

    /// Lifecycle and change flags.
    pub fn flags(&self) -> EntityFlags {
        self.flags
    }

    /// Whether the position changed since the flag was last cleared.
    pub fn position_changed(&self) -> bool {
        self.flags.contains(EntityFlags::POSITION_CHANGED)
    }

    pub(crate) fn flags_mut(&mut self) -> &mut EntityFlags {
        &mut self.flags
    }
}

/// Per-entity hooks invoked by the world.
///
/// Every method has a no-op default, so implementors override only what they need.
pub trait Behavior {
    /// Advance the entity by one tick. May move it.
    fn update(&mut self, state: &mut EntityState, step: &Step) {
        let _ = (state, step);
    }

    /// The entity's box overlaps `other` and the pair is contactable.
    fn handle_contact(&mut self, state: &mut EntityState, other: EntityId) {
        let _ = (state, other);
    }

    /// The entity collided with `other` and was moved by `correction` (already applied).
    fn handle_collision(&mut self, state: &mut EntityState, other: EntityId, correction: Vector) {
        let _ = (state, other, correction);
    }
}

/// Description of an entity to stage into a world.
///
/// ```rust
/// use quadrille_geom::{Position, Vector};
/// use quadrille_world::{Body, Entity};
///
/// let crate_box = Entity::new(Position::planar(3.0, 3.0))
///     .with_body(Body::new(Vector::splat(0.5)))
///     .with_velocity(Vector::planar(1.0, 0.0));
/// # let _ = crate_box;
/// ```
pub struct Entity {
    pub(crate) position: Position,
    pub(crate) velocity: Vector,
    pub(crate) body: Option<Body>,
    pub(crate) behavior: Option<Box<dyn Behavior>>,
    pub(crate) parent: Option<EntityId>,
}

impl Entity {
    /// An entity at `position` with no body and no behavior.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            body: None,
            behavior: None,
            parent: None,
        }
    }

    /// Attach a physical body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach behavior hooks.
    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Make the entity a child of `parent`, which then advances it.
    pub fn child_of(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("body", &self.body)
            .field("has_behavior", &self.behavior.is_some())
            .field("parent", &self.parent)
            .finish()
    }
}
