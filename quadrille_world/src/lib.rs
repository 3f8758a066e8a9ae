// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille World: a tick-driven game world over a uniform collision grid.
//!
//! A [`World`] owns:
//! - entities, addressed by generational [`EntityId`] handles and arranged in a
//!   parent/child hierarchy;
//! - tiled [`Terrain`] with per-tile elevation profiles;
//! - a [`CollisionGrid`](quadrille_grid::CollisionGrid) indexing every installed body;
//! - optionally a [`NavGraph`](quadrille_nav::NavGraph) sampled over the terrain.
//!
//! Entities are described with [`Entity`] and staged with [`World::stage_entry`]; they are
//! installed at the start of the next [`World::update`]. Per-entity logic lives in
//! [`Behavior`] implementations, and the rules for overlapping bodies live in a
//! [`CollisionDelegate`]. The stock [`CategoryDelegate`] classifies pairs by
//! [`CollisionCategories`] masks and pushes colliding boxes apart along their axis of least
//! penetration.
//!
//! Within a tick every overlapping pair is narrow-phased at most once, and corrections are
//! reindexed immediately, so entities advanced later in the same tick see the corrected
//! positions.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use quadrille_geom::{Position, Vector};
//! use quadrille_nav::EuclideanCost;
//! use quadrille_world::{Body, CategoryDelegate, Entity, Tile, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default(), CategoryDelegate).unwrap();
//! for x in 0..8 {
//!     for y in 0..8 {
//!         let origin = Point::new(f64::from(x), f64::from(y));
//!         world.add_tile(Tile::new(origin, Size::new(1.0, 1.0)));
//!     }
//! }
//!
//! let a = world.stage_entry(
//!     Entity::new(Position::planar(2.0, 2.0)).with_body(Body::new(Vector::splat(0.5))),
//! );
//! let b = world.stage_entry(
//!     Entity::new(Position::planar(2.5, 2.0)).with_body(Body::new(Vector::splat(0.5))),
//! );
//! world.update(1.0 / 60.0);
//!
//! // The two boxes were pushed apart along x.
//! let (pa, pb) = (world.entity(a).unwrap(), world.entity(b).unwrap());
//! assert!(pa.aabb().unwrap().overlap(pb.aabb().unwrap()).is_none());
//!
//! world.build_nav_graph(Size::new(1.0, 1.0), |_| true).unwrap();
//! let path = world.path(Position::planar(0.0, 0.0), Position::planar(6.0, 6.0), &EuclideanCost);
//! assert_eq!(path.last(), Some(&Position::planar(6.0, 6.0)));
//! ```

mod config;
mod delegate;
mod entity;
mod error;
mod terrain;
mod types;
mod world;

pub use config::WorldConfig;
pub use delegate::{BodyView, CategoryDelegate, CollisionDelegate};
pub use entity::{Behavior, Body, Entity, EntityState, Step};
pub use error::WorldError;
pub use terrain::{FlatSurface, RampSurface, Terrain, Tile, TileSurface};
pub use types::{CollisionCategories, EntityFlags, EntityId};
pub use world::World;
