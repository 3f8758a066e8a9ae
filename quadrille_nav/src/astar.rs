// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A* over a [`NavGraph`].

use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cost::PathCost;
use crate::graph::{NavGraph, NavNodeId};

/// Frontier entry. The heap pops the lowest priority first; equal priorities pop the most
/// recently pushed entry first.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    priority: f64,
    cost: f64,
    seq: u64,
    node: NavNodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Nodes from `start` (exclusive) to `goal` (inclusive), or empty if the goal is unreachable
/// or equal to the start.
pub(crate) fn search<C: PathCost + ?Sized>(
    graph: &NavGraph,
    start: NavNodeId,
    goal: NavNodeId,
    cost: &C,
) -> Vec<NavNodeId> {
    if start == goal {
        return Vec::new();
    }
    let n = graph.len();
    let mut cost_so_far = vec![f64::INFINITY; n];
    let mut came_from: Vec<Option<NavNodeId>> = vec![None; n];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0_u64;
    let goal_node = &graph[goal];

    cost_so_far[start.index()] = 0.0;
    frontier.push(Frontier {
        priority: 0.0,
        cost: 0.0,
        seq,
        node: start,
    });

    let mut expanded = 0_usize;
    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        if current == goal {
            break;
        }
        if entry.cost > cost_so_far[current.index()] {
            continue;
        }
        expanded += 1;
        let current_node = &graph[current];
        for &next in current_node.neighbors() {
            let next_node = &graph[next];
            let new_cost = entry.cost + cost.cost(current_node, next_node);
            if new_cost < cost_so_far[next.index()] {
                cost_so_far[next.index()] = new_cost;
                came_from[next.index()] = Some(current);
                seq += 1;
                frontier.push(Frontier {
                    priority: new_cost + cost.heuristic(next_node, goal_node),
                    cost: new_cost,
                    seq,
                    node: next,
                });
            }
        }
    }
    tracing::trace!(expanded, "path search finished");

    if came_from[goal.index()].is_none() {
        return Vec::new();
    }
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current.index()] {
        if prev == start {
            break;
        }
        path.push(prev);
        current = prev;
        if path.len() > n {
            // Negative edge costs can close a cycle.
            return Vec::new();
        }
    }
    path.reverse();
    path
}
