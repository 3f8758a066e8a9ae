// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge costs and heuristics for path queries.

use crate::graph::NavNode;

/// Edge weight and remaining-cost estimate used by A*.
///
/// The heuristic should not overestimate the true remaining cost. This is not checked: an
/// overestimating heuristic still yields a path, just not necessarily the cheapest one.
pub trait PathCost {
    /// Cost of moving along the edge from `from` to `to`.
    fn cost(&self, from: &NavNode, to: &NavNode) -> f64;

    /// Estimated cost from `from` to `goal`.
    fn heuristic(&self, from: &NavNode, goal: &NavNode) -> f64;
}

/// Straight-line planar distance for both cost and heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct EuclideanCost;

impl PathCost for EuclideanCost {
    fn cost(&self, from: &NavNode, to: &NavNode) -> f64 {
        from.position().planar_distance(to.position())
    }

    fn heuristic(&self, from: &NavNode, goal: &NavNode) -> f64 {
        from.position().planar_distance(goal.position())
    }
}

/// Taxicab planar distance for both cost and heuristic.
///
/// Exact on a four-connected grid without obstacles.
#[derive(Copy, Clone, Debug, Default)]
pub struct ManhattanCost;

impl PathCost for ManhattanCost {
    fn cost(&self, from: &NavNode, to: &NavNode) -> f64 {
        taxicab(from, to)
    }

    fn heuristic(&self, from: &NavNode, goal: &NavNode) -> f64 {
        taxicab(from, goal)
    }
}

fn taxicab(a: &NavNode, b: &NavNode) -> f64 {
    let d = b.position() - a.position();
    d.x.abs() + d.y.abs()
}
