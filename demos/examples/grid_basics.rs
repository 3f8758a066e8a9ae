// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision grid basics.
//!
//! Index a few boxes, move one, list neighbors, and cast a ray across the grid.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p quadrille_demos --example grid_basics`

use kurbo::Size;
use quadrille_geom::{Aabb, Position, Vector};
use quadrille_grid::{CellWalk, CollisionGrid};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut grid: CollisionGrid<&str> = CollisionGrid::new(Size::new(1.0, 1.0)).unwrap();
    let mut crate_box = Aabb::new(Position::planar(3.0, 3.0), Vector::splat(0.55));
    grid.reindex("crate", &crate_box);
    grid.reindex("barrel", &Aabb::new(Position::planar(6.0, 6.0), Vector::splat(0.5)));
    grid.reindex("rock", &Aabb::new(Position::planar(3.5, 4.0), Vector::splat(0.5)));

    println!("crate covers {:?}", grid.cells_of("crate").collect::<Vec<_>>());
    println!("crate neighbors: {:?}", grid.neighbors("crate"));

    // Push the crate away from the rock; only the changed cells are touched.
    crate_box.set_position(Position::planar(1.5, 3.0));
    grid.reindex("crate", &crate_box);
    println!("crate now covers {:?}", grid.cells_of("crate").collect::<Vec<_>>());
    println!("crate neighbors: {:?}", grid.neighbors("crate"));

    let (start, end) = (Position::ORIGIN, Position::planar(20.0, 20.0));
    let walked: Vec<_> = CellWalk::new(start, end, grid.cell_size()).take(6).collect();
    println!("first cells along the ray: {walked:?}");

    let hit = grid.cast_ray(start, end, |_| true).unwrap();
    println!(
        "ray hits {} at ({:.2}, {:.2})",
        hit.entity, hit.point.x, hit.point.y
    );
    assert_eq!(hit.entity, "rock", "the moved crate is off the diagonal");

    let blocked = grid.has_any_between(start, end, |name| name != "rock");
    println!("anything but the rock on the diagonal? {blocked}");
}
