// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation graph generation and queries.

use core::fmt;
use core::ops::Index;
use std::collections::BTreeMap;

use kurbo::{Point, Size};
use quadrille_geom::Position;

use crate::astar;
use crate::cost::PathCost;
use crate::error::NavError;
use crate::surface::NavSurface;

/// Integer coordinate in navigation-grid space.
///
/// Node `(i, j)` sits at world `(i * spacing.width, j * spacing.height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavCoord {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl NavCoord {
    /// Create a coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinate offset by `(dx, dy)`.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Index of a node within its [`NavGraph`].
///
/// Only meaningful for the graph that produced it; regenerating a graph invalidates ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavNodeId(usize);

impl NavNodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in [`NavGraph::nodes`].
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A traversable waypoint.
#[derive(Clone, Debug, PartialEq)]
pub struct NavNode {
    coord: NavCoord,
    position: Position,
    neighbors: Vec<NavNodeId>,
}

impl NavNode {
    /// Grid coordinate of the node.
    pub fn coord(&self) -> NavCoord {
        self.coord
    }

    /// World position, with `z` set to the terrain elevation.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Adjacent nodes. Adjacency is symmetric.
    pub fn neighbors(&self) -> &[NavNodeId] {
        &self.neighbors
    }
}

/// Grid-aligned waypoint graph over a [`NavSurface`].
///
/// A node exists at a grid point iff there is ground under it and no included entity
/// occupies it. Four-neighbors are connected iff no included entity blocks the straight
/// segment between them. Graphs are rebuilt wholesale, never patched.
#[derive(Clone)]
pub struct NavGraph {
    spacing: Size,
    nodes: Vec<NavNode>,
    by_coord: BTreeMap<NavCoord, NavNodeId>,
}

impl NavGraph {
    /// Build a graph over `surface` with nodes `spacing` apart.
    ///
    /// Grid points run from the origin to `floor(extents / spacing)` inclusive on each axis.
    /// Fails if the spacing is not positive or the surface is smaller than two spacings on
    /// either axis.
    pub fn generate<S: NavSurface + ?Sized>(
        surface: &S,
        spacing: Size,
        mut include: impl FnMut(S::Key) -> bool,
    ) -> Result<Self, NavError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(spacing.width) && valid(spacing.height)) {
            tracing::debug!(?spacing, "rejected navigation spacing");
            return Err(NavError::InvalidSpacing {
                width: spacing.width,
                height: spacing.height,
            });
        }
        let extents = surface.extents();
        if extents.width < 2.0 * spacing.width || extents.height < 2.0 * spacing.height {
            tracing::debug!(?extents, ?spacing, "surface too small for navigation graph");
            return Err(NavError::WorldTooSmall { extents, spacing });
        }

        let upper_x = to_i64((extents.width / spacing.width).floor());
        let upper_y = to_i64((extents.height / spacing.height).floor());

        let mut graph = Self {
            spacing,
            nodes: Vec::new(),
            by_coord: BTreeMap::new(),
        };
        let include: &mut dyn FnMut(S::Key) -> bool = &mut include;

        for j in 0..=upper_y {
            for i in 0..=upper_x {
                let point = Point::new(i as f64 * spacing.width, j as f64 * spacing.height);
                if !surface.has_ground(point) {
                    continue;
                }
                let position = Position::new(point.x, point.y, surface.elevation(point));
                if surface.is_occupied(position, include) {
                    continue;
                }
                let id = NavNodeId::new(graph.nodes.len());
                let coord = NavCoord::new(i, j);
                graph.nodes.push(NavNode {
                    coord,
                    position,
                    neighbors: Vec::new(),
                });
                graph.by_coord.insert(coord, id);
            }
        }

        // Each unordered pair is considered once, from its lower-left member.
        let mut edges = 0_usize;
        for index in 0..graph.nodes.len() {
            let id = NavNodeId::new(index);
            let here = &graph.nodes[index];
            let (coord, from) = (here.coord, here.position);
            for candidate in [coord.offset(1, 0), coord.offset(0, 1)] {
                let Some(&other) = graph.by_coord.get(&candidate) else {
                    continue;
                };
                let to = graph.nodes[other.index()].position;
                if !surface.is_obstructed(from, to, include) && graph.connect(id, other) {
                    edges += 1;
                }
            }
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges,
            columns = upper_x + 1,
            rows = upper_y + 1,
            "generated navigation graph"
        );
        Ok(graph)
    }

    /// Node spacing the graph was generated with.
    pub fn spacing(&self) -> Size {
        self.spacing
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, indexed by [`NavNodeId::index`].
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Node id at a grid coordinate.
    pub fn id_at(&self, coord: NavCoord) -> Option<NavNodeId> {
        self.by_coord.get(&coord).copied()
    }

    /// Node at a grid coordinate.
    pub fn node_at(&self, coord: NavCoord) -> Option<&NavNode> {
        self.id_at(coord).map(|id| &self.nodes[id.index()])
    }

    /// Grid coordinate nearest to a world position.
    pub fn nearest_coord(&self, position: Position) -> NavCoord {
        NavCoord::new(
            to_i64((position.x / self.spacing.width).round()),
            to_i64((position.y / self.spacing.height).round()),
        )
    }

    /// Shortest path from `start` to `goal` under `cost`.
    ///
    /// Both endpoints snap to the nearest grid coordinate. The result lists node positions
    /// after the start node up to and including the goal node; it is empty when either
    /// endpoint has no node, when both snap to the same node, or when the goal is unreachable.
    pub fn path<C: PathCost + ?Sized>(
        &self,
        start: Position,
        goal: Position,
        cost: &C,
    ) -> Vec<Position> {
        let (Some(s), Some(g)) = (
            self.id_at(self.nearest_coord(start)),
            self.id_at(self.nearest_coord(goal)),
        ) else {
            return Vec::new();
        };
        astar::search(self, s, g, cost)
            .into_iter()
            .map(|id| self.nodes[id.index()].position)
            .collect()
    }

    /// Add an undirected edge. Returns `false` if it already existed.
    fn connect(&mut self, a: NavNodeId, b: NavNodeId) -> bool {
        if a == b || self.nodes[a.index()].neighbors.contains(&b) {
            return false;
        }
        self.nodes[a.index()].neighbors.push(b);
        self.nodes[b.index()].neighbors.push(a);
        true
    }
}

impl Index<NavNodeId> for NavGraph {
    type Output = NavNode;

    fn index(&self, id: NavNodeId) -> &NavNode {
        &self.nodes[id.index()]
    }
}

impl fmt::Debug for NavGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavGraph")
            .field("spacing", &self.spacing)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count())
            .finish_non_exhaustive()
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "grid coordinates are small integral values."
)]
fn to_i64(v: f64) -> i64 {
    v as i64
}
