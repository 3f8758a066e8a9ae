// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Nav: a grid-derived navigation graph with A* path queries.
//!
//! [`NavGraph::generate`] samples a [`NavSurface`] on a regular grid. A sample point
//! becomes a node when there is ground under it and no included entity occupies it;
//! each pair of four-neighbor nodes is connected when no included entity blocks the
//! straight segment between them. The surface is usually a game world backed by a
//! collision grid, but anything implementing the trait works.
//!
//! [`NavGraph::path`] snaps both endpoints to the nearest node and runs A* with a
//! [`PathCost`] delegate supplying edge costs and the heuristic. [`EuclideanCost`] and
//! [`ManhattanCost`] cover the common cases.
//!
//! Graphs are snapshots: they do not observe the surface after generation and are
//! rebuilt from scratch when it changes.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use quadrille_geom::Position;
//! use quadrille_nav::{EuclideanCost, NavGraph, NavSurface};
//!
//! /// A 10x10 field with a single blocked point.
//! struct Field;
//!
//! impl NavSurface for Field {
//!     type Key = ();
//!     fn extents(&self) -> Size { Size::new(10.0, 10.0) }
//!     fn has_ground(&self, _: Point) -> bool { true }
//!     fn elevation(&self, _: Point) -> f64 { 0.0 }
//!     fn is_occupied(&self, at: Position, _: &mut dyn FnMut(()) -> bool) -> bool {
//!         at.to_point() == Point::new(5.0, 5.0)
//!     }
//!     fn is_obstructed(&self, _: Position, _: Position, _: &mut dyn FnMut(()) -> bool) -> bool {
//!         false
//!     }
//! }
//!
//! let graph = NavGraph::generate(&Field, Size::new(1.0, 1.0), |_| true).unwrap();
//! assert_eq!(graph.len(), 11 * 11 - 1);
//!
//! let path = graph.path(Position::planar(5.0, 4.0), Position::planar(5.0, 6.0), &EuclideanCost);
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.last(), Some(&Position::planar(5.0, 6.0)));
//! ```

mod astar;
mod cost;
mod error;
mod graph;
mod surface;

pub use cost::{EuclideanCost, ManhattanCost, PathCost};
pub use error::NavError;
pub use graph::{NavCoord, NavGraph, NavNode, NavNodeId};
pub use surface::NavSurface;
