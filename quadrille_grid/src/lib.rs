// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Grid: a uniform-cell broad-phase collision index.
//!
//! [`CollisionGrid`] maps integer [`CellKey`]s to the entities whose boxes touch them and
//! keeps the inverse mapping from each entity to its cells. It is maintained incrementally:
//! [`CollisionGrid::reindex`] diffs an entity's new cell set against the old one and only
//! touches the cells that changed, so callers can reindex every moved entity every tick.
//!
//! Queries:
//! - [`CollisionGrid::for_each_neighbor`]: entities sharing a cell with a given entity.
//! - [`CollisionGrid::query`]: is a point covered by a matching entity?
//! - [`CollisionGrid::cast_ray`]: nearest matching entity along a segment, found by walking
//!   the crossed cells in order with [`CellWalk`].
//!
//! The grid also carries the per-tick [`PairLedger`] used by a simulation loop to test each
//! entity pair at most once per tick.
//!
//! Entity handles are any `Copy + Ord + Debug` type; iteration over cells and members is
//! ordered by handle, so results are deterministic.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use quadrille_geom::{Aabb, Position, Vector};
//! use quadrille_grid::CollisionGrid;
//!
//! let mut grid: CollisionGrid<u32> = CollisionGrid::new(Size::new(1.0, 1.0)).unwrap();
//! grid.reindex(1, &Aabb::new(Position::planar(3.0, 3.0), Vector::splat(0.55)));
//! grid.reindex(2, &Aabb::new(Position::planar(3.5, 3.0), Vector::splat(0.5)));
//!
//! assert!(grid.neighbors(1).contains(&2));
//! assert!(grid.query(Position::planar(3.0, 3.0), |_| true));
//!
//! let hit = grid
//!     .cast_ray(Position::ORIGIN, Position::planar(20.0, 20.0), |_| true)
//!     .unwrap();
//! assert_eq!(hit.entity, 1);
//! ```

mod cell;
mod error;
mod grid;
mod ledger;
mod walk;

pub use cell::{CellKey, cells_under};
pub use error::GridError;
pub use grid::{CollisionGrid, RayHit};
pub use ledger::PairLedger;
pub use walk::CellWalk;
