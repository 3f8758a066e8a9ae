// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The world as seen by graph generation.

use kurbo::{Point, Size};
use quadrille_geom::Position;

/// Read-only view of a world that a [`NavGraph`](crate::NavGraph) can be generated over.
///
/// Occupancy and obstruction queries take an `include` filter over the world's entity
/// handles; entities it rejects are ignored.
pub trait NavSurface {
    /// Entity handle passed to `include` filters.
    type Key: Copy;

    /// Planar size of the world, measured from the origin.
    fn extents(&self) -> Size;

    /// Whether there is terrain under `point`.
    fn has_ground(&self, point: Point) -> bool;

    /// Terrain elevation at `point`, or zero where there is no terrain.
    fn elevation(&self, point: Point) -> f64;

    /// Whether an included entity occupies `at`.
    fn is_occupied(&self, at: Position, include: &mut dyn FnMut(Self::Key) -> bool) -> bool;

    /// Whether an included entity blocks the straight segment between `from` and `to`.
    fn is_obstructed(
        &self,
        from: Position,
        to: Position,
        include: &mut dyn FnMut(Self::Key) -> bool,
    ) -> bool;
}
