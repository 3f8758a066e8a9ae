// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World tick loop.
//!
//! Stage a player, a wall and a coin, then run a few ticks and watch contact and
//! collision hooks fire. Category masks decide which pairs touch and which push apart.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p quadrille_demos --example world_tick`

use kurbo::{Point, Size};
use quadrille_geom::{Position, Vector};
use quadrille_world::{
    Behavior, Body, CategoryDelegate, CollisionCategories, Entity, EntityId, EntityState, Step,
    Tile, World, WorldConfig,
};
use tracing_subscriber::EnvFilter;

const PLAYER: CollisionCategories = CollisionCategories::bit(0);
const WALL: CollisionCategories = CollisionCategories::bit(1);
const COIN: CollisionCategories = CollisionCategories::bit(2);

struct Walker;

impl Behavior for Walker {
    fn update(&mut self, state: &mut EntityState, step: &Step) {
        state.integrate(step.dt);
    }

    fn handle_contact(&mut self, _state: &mut EntityState, other: EntityId) {
        println!("player touched {other:?}");
    }

    fn handle_collision(&mut self, state: &mut EntityState, other: EntityId, correction: Vector) {
        println!(
            "player bumped into {other:?}, pushed by ({:.2}, {:.2})",
            correction.x, correction.y
        );
        state.velocity = Vector::ZERO;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut world = World::new(WorldConfig::default(), CategoryDelegate).unwrap();
    for x in 0..12 {
        for y in 0..4 {
            world.add_tile(Tile::new(
                Point::new(f64::from(x), f64::from(y)),
                Size::new(1.0, 1.0),
            ));
        }
    }

    let player = world.stage_entry(
        Entity::new(Position::planar(1.0, 1.5))
            .with_body(Body::new(Vector::splat(0.4)).with_masks(PLAYER, COIN, WALL))
            .with_velocity(Vector::planar(4.0, 0.0))
            .with_behavior(Walker),
    );
    let coin = world.stage_entry(Entity::new(Position::planar(3.0, 1.5)).with_body(
        Body::new(Vector::splat(0.25)).with_masks(
            COIN,
            CollisionCategories::NONE,
            CollisionCategories::NONE,
        ),
    ));
    let wall = world.stage_entry(Entity::new(Position::planar(6.0, 1.5)).with_body(
        Body::new(Vector::new(0.5, 2.0, 1.0)).with_masks(
            WALL,
            CollisionCategories::NONE,
            CollisionCategories::NONE,
        ),
    ));
    println!("player {player:?}, coin {coin:?}, wall {wall:?}");

    for _ in 0..12 {
        world.update(0.125);
        let p = world.entity(player).unwrap().position();
        println!("tick {:>2}: player at ({:.3}, {:.3})", world.tick_count(), p.x, p.y);
    }

    // The coin is collected; the wall stays.
    world.stage_exit(coin);
    world.update(0.0);
    println!(
        "coin alive: {}, entities: {}",
        world.is_alive(coin),
        world.entity_count()
    );
}
