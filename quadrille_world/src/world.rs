// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The world: entity arena, staging, and the tick loop.

use core::fmt;
use std::collections::BTreeSet;

use kurbo::{Point, Size};
use quadrille_geom::Position;
use quadrille_grid::CollisionGrid;
use quadrille_nav::{NavGraph, NavSurface, PathCost};

use crate::config::WorldConfig;
use crate::delegate::{BodyView, CategoryDelegate, CollisionDelegate};
use crate::entity::{Behavior, Entity, EntityState, Step};
use crate::error::WorldError;
use crate::terrain::{Terrain, Tile};
use crate::types::{EntityFlags, EntityId};

struct Slot {
    generation: u32,
    state: EntityState,
    behavior: Option<Box<dyn Behavior>>,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
}

/// A simulated world.
///
/// The world owns its entities, its terrain, a [`CollisionGrid`] indexing every installed
/// entity that has a body, and optionally a [`NavGraph`] built over all of these.
///
/// Entities enter and leave through staging: [`World::stage_entry`] and
/// [`World::stage_exit`] take effect at the start of the next tick, so the set of
/// installed entities never changes while a tick runs.
///
/// Each call to [`World::update`] runs one tick:
///
/// 1. apply staged exits, then staged entries;
/// 2. advance the terrain;
/// 3. for each root entity in id order, advance its children (recursively), then the
///    entity itself: run its behavior, reindex it if it moved, then narrow-phase it against
///    every grid neighbor it has not yet been tested against this tick, invoking contact and
///    collision hooks and applying corrections (which reindex immediately);
/// 4. clear every entity's change flag.
pub struct World<D = CategoryDelegate> {
    config: WorldConfig,
    delegate: D,
    grid: CollisionGrid<EntityId>,
    terrain: Terrain,
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: BTreeSet<EntityId>,
    staged_entries: Vec<EntityId>,
    staged_exits: Vec<EntityId>,
    paused: bool,
    tick: u64,
    nav: Option<NavGraph>,
    checkpoints: Vec<Position>,
}

impl<D: CollisionDelegate> World<D> {
    /// Create an empty world.
    pub fn new(config: WorldConfig, delegate: D) -> Result<Self, WorldError> {
        config.validate()?;
        let grid = CollisionGrid::new(config.cell_size)?;
        Ok(Self {
            config,
            delegate,
            grid,
            terrain: Terrain::new(config.tile_size),
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: BTreeSet::new(),
            staged_entries: Vec::new(),
            staged_exits: Vec::new(),
            paused: false,
            tick: 0,
            nav: None,
            checkpoints: Vec::new(),
        })
    }

    /// Configuration the world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Collision delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable collision delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// The collision grid.
    pub fn grid(&self) -> &CollisionGrid<EntityId> {
        &self.grid
    }

    /// The terrain.
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Size covered by terrain.
    pub fn extents(&self) -> Size {
        self.terrain.extents()
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Add a terrain tile. Returns `false` if a tile already answers for its origin.
    pub fn add_tile(&mut self, tile: Tile) -> bool {
        self.terrain.add(tile)
    }

    /// Terrain elevation at `point`.
    pub fn elevation(&self, point: Point) -> f64 {
        self.terrain.elevation(point)
    }

    /// Record a checkpoint. The list stays ordered by `x`, then `y`; equal positions keep
    /// insertion order.
    pub fn add_checkpoint(&mut self, at: Position) {
        let index = self
            .checkpoints
            .partition_point(|p| p.x.total_cmp(&at.x).then(p.y.total_cmp(&at.y)).is_le());
        self.checkpoints.insert(index, at);
    }

    /// Checkpoints in order.
    pub fn checkpoints(&self) -> &[Position] {
        &self.checkpoints
    }

    /// Pause or resume. A paused world ignores [`World::update`].
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether the world is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Queue `entity` for installation at the start of the next tick.
    ///
    /// The handle is live immediately, so it can be used as a parent for other staged
    /// entities. A child whose parent is gone by installation time is installed as a root.
    pub fn stage_entry(&mut self, entity: Entity) -> EntityId {
        let Entity {
            position,
            velocity,
            body,
            behavior,
            parent,
        } = entity;
        let state = EntityState::new(position, velocity, body);
        let id = self.allocate(|generation| Slot {
            generation,
            state,
            behavior,
            parent,
            children: Vec::new(),
        });
        self.staged_entries.push(id);
        id
    }

    /// Queue `id` (and its children) for removal at the start of the next tick.
    ///
    /// Returns `false` if the handle is stale.
    pub fn stage_exit(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if !self.staged_exits.contains(&id) {
            self.staged_exits.push(id);
        }
        true
    }

    /// Whether `id` refers to a staged or installed entity.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slot(id).is_some()
    }

    /// Whether `id` is installed.
    pub fn is_active(&self, id: EntityId) -> bool {
        self.slot(id)
            .is_some_and(|s| s.state.flags().contains(EntityFlags::ACTIVE))
    }

    /// Number of installed entities.
    pub fn entity_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.state.flags().contains(EntityFlags::ACTIVE))
            .count()
    }

    /// Installed entities in id order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &EntityState)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            let s = s.as_ref()?;
            s.state
                .flags()
                .contains(EntityFlags::ACTIVE)
                .then(|| (Self::id_for(i, s.generation), &s.state))
        })
    }

    /// State of a staged or installed entity.
    pub fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.slot(id).map(|s| &s.state)
    }

    /// Mutable state of a staged or installed entity.
    ///
    /// Moves made through it are picked up by the grid at the start of the next tick.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.slot_mut(id).map(|s| &mut s.state)
    }

    /// Move an entity. Returns `false` if the handle is stale.
    pub fn set_position(&mut self, id: EntityId, position: Position) -> bool {
        self.entity_mut(id)
            .map(|s| s.set_position(position))
            .is_some()
    }

    /// Parent of an entity, if it has one.
    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.slot(id).and_then(|s| s.parent)
    }

    /// Children of an entity, in installation order.
    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.slot(id).map_or(&[][..], |s| s.children.as_slice())
    }

    /// Run one tick for every installed entity.
    pub fn update(&mut self, dt: f64) {
        self.update_matching(dt, |_, _| true);
    }

    /// Run one tick, advancing only entities accepted by `include`.
    ///
    /// A rejected entity is skipped together with its children. Skipped entities still
    /// take part in collisions with the entities that are advanced.
    pub fn update_matching(
        &mut self,
        dt: f64,
        mut include: impl FnMut(EntityId, &EntityState) -> bool,
    ) {
        if self.paused {
            return;
        }
        self.apply_staging();
        self.sync_moved_between_ticks();
        self.grid.begin_tick();
        self.tick += 1;

        let step = Step {
            dt,
            gravity: self.config.gravity,
            tick: self.tick,
        };
        self.terrain.advance(&step);

        let roots: Vec<EntityId> = self.roots.iter().copied().collect();
        for id in roots {
            self.advance(id, &step, &mut include);
        }

        for slot in self.slots.iter_mut().flatten() {
            slot.state
                .flags_mut()
                .remove(EntityFlags::POSITION_CHANGED);
        }
        tracing::debug!(
            tick = self.tick,
            entities = self.roots.len(),
            indexed = self.grid.len(),
            pairs = self.grid.tested_pairs(),
            "tick complete"
        );
    }

    /// Build (or rebuild) the navigation graph with nodes `spacing` apart.
    ///
    /// Entities rejected by `include` neither remove nodes nor block edges.
    pub fn build_nav_graph(
        &mut self,
        spacing: Size,
        include: impl FnMut(EntityId) -> bool,
    ) -> Result<&NavGraph, WorldError> {
        let graph = NavGraph::generate(&*self, spacing, include)?;
        Ok(&*self.nav.insert(graph))
    }

    /// The last navigation graph built.
    pub fn nav_graph(&self) -> Option<&NavGraph> {
        self.nav.as_ref()
    }

    /// Shortest path over the navigation graph, or empty when there is no graph.
    ///
    /// See [`NavGraph::path`].
    pub fn path<C: PathCost + ?Sized>(
        &self,
        start: Position,
        goal: Position,
        cost: &C,
    ) -> Vec<Position> {
        self.nav
            .as_ref()
            .map_or_else(Vec::new, |g| g.path(start, goal, cost))
    }

    fn apply_staging(&mut self) {
        for id in core::mem::take(&mut self.staged_exits) {
            self.retire(id);
        }
        for id in core::mem::take(&mut self.staged_entries) {
            self.install(id);
        }
    }

    fn install(&mut self, id: EntityId) {
        let parent = self.slot(id).and_then(|s| s.parent);
        let parent = parent.filter(|&p| p != id && self.is_alive(p));
        let Some(slot) = self.slot_mut(id) else {
            return;
        };
        slot.parent = parent;
        let flags = slot.state.flags_mut();
        flags.remove(EntityFlags::STAGED);
        flags.insert(EntityFlags::ACTIVE);

        match parent {
            Some(p) => {
                if let Some(ps) = self.slot_mut(p) {
                    ps.children.push(id);
                }
            }
            None => {
                self.roots.insert(id);
            }
        }
        self.sync_index(id);
        tracing::debug!(?id, ?parent, "installed entity");
    }

    fn retire(&mut self, id: EntityId) {
        let Some(slot) = self.slot(id) else {
            return;
        };
        let (parent, children) = (slot.parent, slot.children.clone());
        for child in children {
            self.retire(child);
        }
        if let Some(ps) = parent.and_then(|p| self.slot_mut(p)) {
            ps.children.retain(|&c| c != id);
        }
        self.roots.remove(&id);
        self.grid.remove(id);
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        tracing::debug!(?id, "retired entity");
    }

    fn advance(
        &mut self,
        id: EntityId,
        step: &Step,
        include: &mut impl FnMut(EntityId, &EntityState) -> bool,
    ) {
        let Some(slot) = self.slot(id) else {
            return;
        };
        if !slot.state.flags().contains(EntityFlags::ACTIVE) || !include(id, &slot.state) {
            return;
        }
        let children = slot.children.clone();
        for child in children {
            self.advance(child, step, include);
        }

        if let Some(slot) = self.slot_mut(id) {
            if let Some(behavior) = slot.behavior.as_mut() {
                behavior.update(&mut slot.state, step);
            }
        }
        self.resolve(id);
    }

    /// Broad and narrow phase for one entity.
    fn resolve(&mut self, id: EntityId) {
        let moved = self.slot(id).is_some_and(|s| s.state.position_changed());
        if moved {
            self.sync_index(id);
        }
        if !self.grid.contains(id) {
            return;
        }
        self.grid.seed_tested(id);
        for other in self.grid.neighbors(id) {
            if self.grid.already_tested(id, other) {
                continue;
            }
            self.test_pair(id, other);
            self.grid.mark_tested(id, other);
        }
    }

    fn test_pair(&mut self, a: EntityId, b: EntityId) {
        let (Some(va), Some(vb)) = (view(&self.slots, a), view(&self.slots, b)) else {
            return;
        };
        let Some(hit) = va.body.aabb().overlap(vb.body.aabb()) else {
            return;
        };
        tracing::trace!(?a, ?b, delta = ?hit.delta, "overlap");

        let contactable = self.delegate.is_contactable(&va, &vb);
        let collidable = self.delegate.is_collidable(&va, &vb);
        let corrections =
            collidable.then(|| self.delegate.resolve_collision(&va, &vb, &hit));

        if contactable {
            self.notify(a, |behavior, state| behavior.handle_contact(state, b));
            self.notify(b, |behavior, state| behavior.handle_contact(state, a));
        }
        if let Some((ca, cb)) = corrections {
            for (id, other, correction) in [(a, b, ca), (b, a, cb)] {
                if let Some(slot) = self.slot_mut(id) {
                    slot.state.translate(correction);
                }
                self.notify(id, |behavior, state| {
                    behavior.handle_collision(state, other, correction);
                });
            }
            self.sync_index(a);
            self.sync_index(b);
        } else if contactable {
            // Contact handlers may move their entity.
            self.sync_index(a);
            self.sync_index(b);
        }
    }

    fn notify(&mut self, id: EntityId, f: impl FnOnce(&mut dyn Behavior, &mut EntityState)) {
        if let Some(slot) = self.slot_mut(id) {
            if let Some(behavior) = slot.behavior.as_mut() {
                f(&mut **behavior, &mut slot.state);
            }
        }
    }

    /// Reindex `id` if its box differs from the one the grid holds.
    fn sync_index(&mut self, id: EntityId) {
        let Some(slot) = self.slot(id) else {
            return;
        };
        if !slot.state.flags().contains(EntityFlags::ACTIVE) {
            return;
        }
        match slot.state.aabb().copied() {
            Some(aabb) => {
                if self.grid.aabb_of(id) != Some(&aabb) {
                    self.grid.reindex(id, &aabb);
                }
            }
            None => {
                self.grid.remove(id);
            }
        }
    }

    fn sync_moved_between_ticks(&mut self) {
        let moved: Vec<EntityId> = self
            .entities()
            .filter(|(_, s)| s.position_changed())
            .map(|(id, _)| id)
            .collect();
        for id in moved {
            self.sync_index(id);
            if let Some(slot) = self.slot_mut(id) {
                slot.state
                    .flags_mut()
                    .remove(EntityFlags::POSITION_CHANGED);
            }
        }
    }

    fn allocate(&mut self, make: impl FnOnce(u32) -> Slot) -> EntityId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(make(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(make(generation)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        Self::id_for(idx, generation)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "EntityId uses 32-bit slot indices."
    )]
    fn id_for(idx: usize, generation: u32) -> EntityId {
        EntityId::new(idx as u32, generation)
    }

    fn slot(&self, id: EntityId) -> Option<&Slot> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|s| s.generation == id.generation())
    }

    fn slot_mut(&mut self, id: EntityId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|s| s.generation == id.generation())
    }
}

fn view(slots: &[Option<Slot>], id: EntityId) -> Option<BodyView<'_>> {
    let slot = slots.get(id.idx())?.as_ref()?;
    if slot.generation != id.generation() {
        return None;
    }
    Some(BodyView {
        id,
        position: slot.state.position(),
        velocity: slot.state.velocity,
        body: slot.state.body()?,
    })
}

impl<D: CollisionDelegate> NavSurface for World<D> {
    type Key = EntityId;

    fn extents(&self) -> Size {
        self.terrain.extents()
    }

    fn has_ground(&self, point: Point) -> bool {
        self.terrain.tile_at(point).is_some()
    }

    fn elevation(&self, point: Point) -> f64 {
        self.terrain.elevation(point)
    }

    fn is_occupied(&self, at: Position, include: &mut dyn FnMut(EntityId) -> bool) -> bool {
        self.grid.query(at, |k| include(k))
    }

    fn is_obstructed(
        &self,
        from: Position,
        to: Position,
        include: &mut dyn FnMut(EntityId) -> bool,
    ) -> bool {
        self.grid.has_any_between(from, to, |k| include(k))
    }
}

impl<D: fmt::Debug> fmt::Debug for World<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("World")
            .field("config", &self.config)
            .field("delegate", &self.delegate)
            .field("terrain", &self.terrain)
            .field("grid", &self.grid)
            .field("entities_alive", &alive)
            .field("roots", &self.roots.len())
            .field("staged_entries", &self.staged_entries.len())
            .field("staged_exits", &self.staged_exits.len())
            .field("paused", &self.paused)
            .field("tick", &self.tick)
            .field("nav", &self.nav)
            .field("checkpoints", &self.checkpoints.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Body;
    use quadrille_geom::Vector;

    fn world() -> World {
        World::new(WorldConfig::default(), CategoryDelegate).unwrap()
    }

    fn boxed(x: f64, y: f64, half: f64) -> Entity {
        Entity::new(Position::planar(x, y)).with_body(Body::new(Vector::splat(half)))
    }

    struct Drift;

    impl Behavior for Drift {
        fn update(&mut self, state: &mut EntityState, step: &Step) {
            state.integrate(step.dt);
        }
    }

    #[test]
    fn checkpoints_stay_sorted() {
        let mut w = world();
        w.add_checkpoint(Position::planar(4.0, 1.0));
        w.add_checkpoint(Position::planar(1.0, 9.0));
        w.add_checkpoint(Position::planar(4.0, 0.5));
        w.add_checkpoint(Position::new(1.0, 9.0, 2.0));
        assert_eq!(
            w.checkpoints(),
            &[
                Position::planar(1.0, 9.0),
                Position::new(1.0, 9.0, 2.0),
                Position::planar(4.0, 0.5),
                Position::planar(4.0, 1.0),
            ]
        );
    }

    #[test]
    fn staging_takes_effect_next_tick() {
        let mut w = world();
        let a = w.stage_entry(boxed(0.5, 0.5, 0.25));
        assert!(w.is_alive(a));
        assert!(!w.is_active(a));
        assert!(!w.grid().contains(a));
        assert_eq!(w.entity(a).unwrap().flags(), EntityFlags::STAGED);

        w.update(0.0);
        assert!(w.is_active(a));
        assert!(w.grid().contains(a));
        assert_eq!(w.entity_count(), 1);

        assert!(w.stage_exit(a));
        assert!(w.is_alive(a));
        w.update(0.0);
        assert!(!w.is_alive(a));
        assert!(!w.grid().contains(a));
        assert!(!w.stage_exit(a));
    }

    #[test]
    fn handles_are_generational() {
        let mut w = world();
        let a = w.stage_entry(boxed(0.5, 0.5, 0.25));
        w.update(0.0);
        w.stage_exit(a);
        w.update(0.0);
        let b = w.stage_entry(boxed(0.5, 0.5, 0.25));
        assert_eq!(a.slot(), b.slot());
        assert!(b.generation() > a.generation());
        assert!(!w.is_alive(a));
        assert!(w.entity(a).is_none());
        assert!(!w.set_position(a, Position::ORIGIN));
    }

    #[test]
    fn exit_before_entry_cancels_staging() {
        let mut w = world();
        let a = w.stage_entry(boxed(0.5, 0.5, 0.25));
        w.stage_exit(a);
        w.update(0.0);
        assert!(!w.is_alive(a));
        assert_eq!(w.entity_count(), 0);
    }

    #[test]
    fn moving_entities_are_reindexed() {
        let mut w = world();
        let a = w.stage_entry(
            boxed(0.5, 0.5, 0.25)
                .with_velocity(Vector::planar(4.0, 0.0))
                .with_behavior(Drift),
        );
        w.update(0.0);
        assert_eq!(w.grid().cells_of(a).count(), 1);
        w.update(1.0);
        assert_eq!(w.entity(a).unwrap().position(), Position::planar(4.5, 0.5));
        assert_eq!(
            w.grid().aabb_of(a).map(|b| b.center()),
            Some(Position::planar(4.5, 0.5))
        );
        assert!(!w.entity(a).unwrap().position_changed());
    }

    #[test]
    fn moves_between_ticks_are_picked_up() {
        let mut w = world();
        let a = w.stage_entry(boxed(0.5, 0.5, 0.25));
        w.update(0.0);
        assert!(w.set_position(a, Position::planar(7.5, 7.5)));
        assert!(w.entity(a).unwrap().position_changed());
        w.update(0.0);
        assert!(w.grid().query(Position::planar(7.5, 7.5), |k| k == a));
    }

    #[test]
    fn paused_world_does_nothing() {
        let mut w = world();
        let a = w.stage_entry(boxed(0.5, 0.5, 0.25));
        w.set_paused(true);
        w.update(1.0);
        assert!(!w.is_active(a));
        assert_eq!(w.tick_count(), 0);
        w.set_paused(false);
        w.update(1.0);
        assert!(w.is_active(a));
        assert_eq!(w.tick_count(), 1);
    }

    #[test]
    fn selective_update_skips_subtrees() {
        let mut w = world();
        let parent = w.stage_entry(
            boxed(0.5, 0.5, 0.25)
                .with_velocity(Vector::planar(1.0, 0.0))
                .with_behavior(Drift),
        );
        let child = w.stage_entry(
            boxed(5.5, 5.5, 0.25)
                .with_velocity(Vector::planar(0.0, 1.0))
                .with_behavior(Drift)
                .child_of(parent),
        );
        w.update(0.0);
        assert_eq!(w.children(parent), &[child]);
        assert_eq!(w.parent(child), Some(parent));

        w.update_matching(1.0, |id, _| id != parent);
        assert_eq!(w.entity(parent).unwrap().position(), Position::planar(0.5, 0.5));
        assert_eq!(w.entity(child).unwrap().position(), Position::planar(5.5, 5.5));

        w.update(1.0);
        assert_eq!(w.entity(parent).unwrap().position(), Position::planar(1.5, 0.5));
        assert_eq!(w.entity(child).unwrap().position(), Position::planar(5.5, 6.5));
    }

    #[test]
    fn parent_exit_retires_subtree() {
        let mut w = world();
        let parent = w.stage_entry(boxed(0.5, 0.5, 0.25));
        let child = w.stage_entry(boxed(2.5, 0.5, 0.25).child_of(parent));
        let grandchild = w.stage_entry(boxed(4.5, 0.5, 0.25).child_of(child));
        w.update(0.0);
        assert_eq!(w.grid().len(), 3);

        w.stage_exit(parent);
        w.update(0.0);
        for id in [parent, child, grandchild] {
            assert!(!w.is_alive(id));
        }
        assert!(w.grid().is_empty());
    }

    #[test]
    fn bodiless_entities_are_not_indexed() {
        let mut w = world();
        let a = w.stage_entry(Entity::new(Position::planar(1.0, 1.0)));
        w.update(0.0);
        assert!(w.is_active(a));
        assert!(w.grid().is_empty());
    }

    #[test]
    fn overlapping_boxes_are_separated() {
        let mut w = world();
        let a = w.stage_entry(boxed(1.0, 1.0, 0.5));
        let b = w.stage_entry(boxed(1.6, 1.0, 0.5));
        w.update(0.0);
        let pa = w.entity(a).unwrap().aabb().copied().unwrap();
        let pb = w.entity(b).unwrap().aabb().copied().unwrap();
        assert!(pa.overlap(&pb).is_none());
        assert!((pa.center().x - 0.8).abs() < 1e-9);
        assert!((pb.center().x - 1.8).abs() < 1e-9);
        assert_eq!(w.grid().tested_pairs(), 1);
    }

    #[test]
    fn world_rejects_bad_config() {
        let config = WorldConfig::default().with_cell_size(Size::new(-1.0, 1.0));
        assert!(matches!(
            World::new(config, CategoryDelegate),
            Err(WorldError::Grid(_))
        ));
    }

    #[test]
    fn nav_graph_requires_terrain() {
        let mut w = world();
        assert!(matches!(
            w.build_nav_graph(Size::new(1.0, 1.0), |_| true),
            Err(WorldError::Nav(_))
        ));
        assert!(w.nav_graph().is_none());
        assert!(
            w.path(Position::ORIGIN, Position::planar(1.0, 1.0), &quadrille_nav::EuclideanCost)
                .is_empty()
        );
    }
}
