// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation over a world.
//!
//! Lay out terrain with a wall across it, build a navigation graph, and print the route
//! around the wall as an ASCII map.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p quadrille_demos --example nav_path`

use std::collections::BTreeSet;

use kurbo::{Point, Size};
use quadrille_geom::{Position, Vector};
use quadrille_nav::{EuclideanCost, NavCoord};
use quadrille_world::{Body, CategoryDelegate, Entity, Tile, World, WorldConfig};
use tracing_subscriber::EnvFilter;

const WIDTH: i32 = 16;
const HEIGHT: i32 = 8;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut world = World::new(WorldConfig::default(), CategoryDelegate).unwrap();
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            world.add_tile(Tile::new(
                Point::new(f64::from(x), f64::from(y)),
                Size::new(1.0, 1.0),
            ));
        }
    }
    // A wall from the bottom edge up to y = 5.
    world.stage_entry(
        Entity::new(Position::planar(8.0, 2.5)).with_body(Body::new(Vector::new(0.3, 3.0, 1.0))),
    );
    world.update(0.0);

    let graph = world.build_nav_graph(Size::new(1.0, 1.0), |_| true).unwrap();
    println!("{} nodes, {} edges", graph.len(), graph.edge_count());

    let start = Position::planar(2.0, 2.0);
    let goal = Position::planar(13.0, 2.0);
    let path = world.path(start, goal, &EuclideanCost);
    println!("{} steps", path.len());

    let graph = world.nav_graph().unwrap();
    let route: BTreeSet<NavCoord> = path.iter().map(|p| graph.nearest_coord(*p)).collect();
    for y in (0..HEIGHT).rev() {
        let row: String = (0..WIDTH)
            .map(|x| {
                let coord = NavCoord::new(i64::from(x), i64::from(y));
                if coord == graph.nearest_coord(start) {
                    'S'
                } else if route.contains(&coord) {
                    if coord == graph.nearest_coord(goal) { 'G' } else { '*' }
                } else if graph.node_at(coord).is_some() {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("{row}");
    }
}
