// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collision grid: a uniform-cell broad phase keyed by entity handles.

use core::fmt::Debug;
use std::collections::{BTreeMap, BTreeSet};

use kurbo::Size;
use quadrille_geom::{Aabb, Position, Ray, Vector};

use crate::cell::{CellKey, cells_under};
use crate::error::GridError;
use crate::ledger::PairLedger;
use crate::walk::CellWalk;

#[derive(Clone, Debug)]
struct Tracked {
    aabb: Aabb,
    cells: BTreeSet<CellKey>,
}

/// Nearest entity found by [`CollisionGrid::cast_ray`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit<K> {
    /// The entity hit.
    pub entity: K,
    /// Offset from the ray start to the hit point.
    pub offset: Vector,
    /// World-space hit point.
    pub point: Position,
}

/// Uniform-cell broad-phase index.
///
/// Every tracked entity is recorded in each cell its box touches, and the grid keeps the
/// reverse mapping from entity to cells. Both maps are updated together by every mutator,
/// so an entity is listed in a cell exactly when that cell is in the entity's cell set.
/// Empty cells are dropped.
///
/// The grid also stores the box each entity was last indexed with; point and ray queries
/// test against that snapshot.
///
/// `K` is the entity handle. It must be cheap to copy and totally ordered so that every
/// iteration over a cell is deterministic.
#[derive(Clone)]
pub struct CollisionGrid<K> {
    cell_size: Size,
    tracked: BTreeMap<K, Tracked>,
    cells: BTreeMap<CellKey, BTreeSet<K>>,
    ledger: PairLedger<K>,
}

impl<K: Copy + Ord + Debug> CollisionGrid<K> {
    /// Create an empty grid.
    ///
    /// Fails if either cell dimension is not a positive finite number.
    pub fn new(cell_size: Size) -> Result<Self, GridError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(cell_size.width) && valid(cell_size.height)) {
            tracing::debug!(?cell_size, "rejected collision grid cell size");
            return Err(GridError::InvalidCellSize {
                width: cell_size.width,
                height: cell_size.height,
            });
        }
        Ok(Self {
            cell_size,
            tracked: BTreeMap::new(),
            cells: BTreeMap::new(),
            ledger: PairLedger::new(),
        })
    }

    /// Cell dimensions.
    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Number of tracked entities.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Whether no entity is tracked.
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Whether `entity` is tracked.
    pub fn contains(&self, entity: K) -> bool {
        self.tracked.contains_key(&entity)
    }

    /// Index `entity` under `aabb`.
    ///
    /// Computes every cell touched by the box and diffs it against the previous cell set,
    /// leaving vacated cells and joining new ones. Returns `true` if the cell set changed.
    /// The stored box is always refreshed, so calling this unconditionally is cheap.
    pub fn reindex(&mut self, entity: K, aabb: &Aabb) -> bool {
        let current: BTreeSet<CellKey> = cells_under(aabb, self.cell_size).collect();
        let previous = match self.tracked.get_mut(&entity) {
            Some(t) => {
                t.aabb = *aabb;
                if t.cells == current {
                    return false;
                }
                core::mem::replace(&mut t.cells, current.clone())
            }
            None => {
                self.tracked.insert(
                    entity,
                    Tracked {
                        aabb: *aabb,
                        cells: current.clone(),
                    },
                );
                BTreeSet::new()
            }
        };

        for cell in previous.difference(&current) {
            self.leave(*cell, entity);
        }
        for cell in current.difference(&previous) {
            self.cells.entry(*cell).or_default().insert(entity);
        }
        tracing::trace!(?entity, cells = current.len(), "reindexed");
        true
    }

    /// Stop tracking `entity`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, entity: K) -> bool {
        let Some(tracked) = self.tracked.remove(&entity) else {
            return false;
        };
        for cell in tracked.cells {
            self.leave(cell, entity);
        }
        true
    }

    /// Forget every entity and the pair ledger.
    pub fn clear(&mut self) {
        self.tracked.clear();
        self.cells.clear();
        self.ledger.clear();
    }

    /// Cells `entity` currently occupies.
    pub fn cells_of(&self, entity: K) -> impl Iterator<Item = CellKey> + '_ {
        self.tracked
            .get(&entity)
            .into_iter()
            .flat_map(|t| t.cells.iter().copied())
    }

    /// Entities listed in `cell`.
    pub fn entities_in(&self, cell: CellKey) -> impl Iterator<Item = K> + '_ {
        self.cells
            .get(&cell)
            .into_iter()
            .flat_map(|s| s.iter().copied())
    }

    /// Non-empty cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells.keys().copied()
    }

    /// Box `entity` was last indexed with.
    pub fn aabb_of(&self, entity: K) -> Option<&Aabb> {
        self.tracked.get(&entity).map(|t| &t.aabb)
    }

    /// Invoke `action` for every other entity sharing a cell with `entity`.
    ///
    /// An entity sharing several cells is reported once per shared cell.
    pub fn for_each_neighbor(&self, entity: K, mut action: impl FnMut(K)) {
        let Some(tracked) = self.tracked.get(&entity) else {
            return;
        };
        for cell in &tracked.cells {
            if let Some(members) = self.cells.get(cell) {
                for &other in members {
                    if other != entity {
                        action(other);
                    }
                }
            }
        }
    }

    /// Collected form of [`CollisionGrid::for_each_neighbor`].
    pub fn neighbors(&self, entity: K) -> Vec<K> {
        let mut out = Vec::new();
        self.for_each_neighbor(entity, |k| out.push(k));
        out
    }

    /// Whether some entity accepted by `matches` contains `point`.
    pub fn query(&self, point: Position, matches: impl FnMut(K) -> bool) -> bool {
        self.first_at(point, matches).is_some()
    }

    /// Lowest-ordered entity accepted by `matches` whose box contains `point`.
    ///
    /// Only the cell containing `point` is inspected.
    pub fn first_at(&self, point: Position, mut matches: impl FnMut(K) -> bool) -> Option<K> {
        let cell = CellKey::containing(point, self.cell_size);
        self.cells.get(&cell)?.iter().copied().find(|&k| {
            matches(k) && self.tracked.get(&k).is_some_and(|t| t.aabb.contains(point))
        })
    }

    /// Nearest entity accepted by `matches` along the segment from `start` to `end`.
    ///
    /// Candidates are ordered by where the segment first enters their box, so a segment
    /// that starts inside a box hits it even when the box extends past `end`. Boxes
    /// entered only past `end` are ignored, and boxes are treated as infinite along `z`.
    /// The reported point is the one [`Aabb::raycast`] gives, which is the exit point for a
    /// segment starting inside the box.
    ///
    /// Cells are visited in order along the segment. A box spanning several cells can be
    /// met in an earlier cell than the one where the segment enters it, so the search only
    /// stops once the best entry found so far lies before the end of the current cell.
    pub fn cast_ray(
        &self,
        start: Position,
        end: Position,
        mut matches: impl FnMut(K) -> bool,
    ) -> Option<RayHit<K>> {
        let ray = Ray::between(start, end);
        let mut best: Option<(K, f64, &Aabb)> = None;
        for cell in CellWalk::new(start, end, self.cell_size) {
            if let Some(members) = self.cells.get(&cell) {
                for &k in members {
                    if !matches(k) {
                        continue;
                    }
                    let Some(tracked) = self.tracked.get(&k) else {
                        continue;
                    };
                    let Some((near, _)) = tracked.aabb.ray_interval(&ray, true) else {
                        continue;
                    };
                    let entry = near.max(0.0);
                    if entry <= 1.0 && best.is_none_or(|(_, b, _)| entry < b) {
                        best = Some((k, entry, &tracked.aabb));
                    }
                }
            }
            if best.is_some_and(|(_, entry, _)| entry <= self.cell_exit(cell, &ray)) {
                break;
            }
        }
        let (entity, _, aabb) = best?;
        let t = aabb.ray_parameter(&ray, true)?;
        Some(RayHit {
            entity,
            offset: ray.direction * t,
            point: ray.at(t),
        })
    }

    /// Ray parameter at which `ray` leaves `cell`.
    fn cell_exit(&self, cell: CellKey, ray: &Ray) -> f64 {
        let (w, h) = (self.cell_size.width, self.cell_size.height);
        let half = Vector::new(w * 0.5, h * 0.5, 0.0);
        let center = Position::planar((cell.x as f64 + 0.5) * w, (cell.y as f64 + 0.5) * h);
        Aabb::new(center, half)
            .ray_interval(ray, true)
            .map_or(f64::INFINITY, |(_, far)| far)
    }

    /// Whether [`CollisionGrid::cast_ray`] finds anything between `start` and `end`.
    pub fn has_any_between(
        &self,
        start: Position,
        end: Position,
        matches: impl FnMut(K) -> bool,
    ) -> bool {
        self.cast_ray(start, end, matches).is_some()
    }

    /// Reset the pair ledger. Called once at the start of every tick.
    pub fn begin_tick(&mut self) {
        self.ledger.clear();
    }

    /// Seed `entity`'s tested set with itself.
    pub fn seed_tested(&mut self, entity: K) {
        self.ledger.seed(entity);
    }

    /// Whether the pair was already tested this tick, in either direction.
    pub fn already_tested(&self, a: K, b: K) -> bool {
        self.ledger.contains(a, b)
    }

    /// Record that `entity` tested `other` this tick.
    pub fn mark_tested(&mut self, entity: K, other: K) {
        self.ledger.mark(entity, other);
    }

    /// Number of pairs tested since the last [`CollisionGrid::begin_tick`].
    pub fn tested_pairs(&self) -> usize {
        self.ledger.pair_count()
    }

    fn leave(&mut self, cell: CellKey, entity: K) {
        if let Some(members) = self.cells.get_mut(&cell) {
            members.remove(&entity);
            if members.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }
}

impl<K: Debug> Debug for CollisionGrid<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CollisionGrid")
            .field("cell_size", &self.cell_size)
            .field("entities", &self.tracked.len())
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
