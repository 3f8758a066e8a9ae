// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A* over a generated graph finds paths as short as a breadth-first search does.

use std::collections::{BTreeSet, VecDeque};

use kurbo::{Point, Size};
use proptest::prelude::*;
use quadrille_geom::Position;
use quadrille_nav::{EuclideanCost, ManhattanCost, NavCoord, NavGraph, NavNodeId, NavSurface};

const SIDE: i64 = 12;

/// Square field with blocked grid points.
struct Field {
    blocked: BTreeSet<(i64, i64)>,
}

impl NavSurface for Field {
    type Key = ();

    fn extents(&self) -> Size {
        Size::new(SIDE as f64, SIDE as f64)
    }

    fn has_ground(&self, _: Point) -> bool {
        true
    }

    fn elevation(&self, _: Point) -> f64 {
        0.0
    }

    fn is_occupied(&self, at: Position, include: &mut dyn FnMut(()) -> bool) -> bool {
        let key = (at.x.round() as i64, at.y.round() as i64);
        self.blocked.contains(&key) && include(())
    }

    fn is_obstructed(&self, _: Position, _: Position, _: &mut dyn FnMut(()) -> bool) -> bool {
        false
    }
}

fn hops(graph: &NavGraph, from: NavNodeId, to: NavNodeId) -> Option<usize> {
    let mut dist = vec![usize::MAX; graph.len()];
    let mut queue = VecDeque::from([from]);
    dist[from.index()] = 0;
    while let Some(id) = queue.pop_front() {
        if id == to {
            return Some(dist[id.index()]);
        }
        for &next in graph[id].neighbors() {
            if dist[next.index()] == usize::MAX {
                dist[next.index()] = dist[id.index()] + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn astar_matches_breadth_first_search(
        blocked in prop::collection::btree_set((0..=SIDE, 0..=SIDE), 0..50),
        start in (0..=SIDE, 0..=SIDE),
        goal in (0..=SIDE, 0..=SIDE),
    ) {
        prop_assume!(start != goal);
        prop_assume!(!blocked.contains(&start) && !blocked.contains(&goal));

        let field = Field { blocked };
        let graph = NavGraph::generate(&field, Size::new(1.0, 1.0), |_| true).unwrap();
        let s = graph.id_at(NavCoord::new(start.0, start.1)).unwrap();
        let g = graph.id_at(NavCoord::new(goal.0, goal.1)).unwrap();
        let from = Position::planar(start.0 as f64, start.1 as f64);
        let to = Position::planar(goal.0 as f64, goal.1 as f64);

        let expected = hops(&graph, s, g);
        for path in [
            graph.path(from, to, &EuclideanCost),
            graph.path(from, to, &ManhattanCost),
        ] {
            match expected {
                Some(n) => {
                    prop_assert_eq!(path.len(), n);
                    prop_assert_eq!(path.last().copied(), Some(to));
                }
                None => prop_assert!(path.is_empty()),
            }
        }
    }
}
