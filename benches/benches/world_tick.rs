// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use quadrille_geom::{Position, Vector};
use quadrille_nav::EuclideanCost;
use quadrille_world::{
    Behavior, Body, CategoryDelegate, Entity, EntityId, EntityState, Step, Tile, World,
    WorldConfig,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

struct Wander;

impl Behavior for Wander {
    fn update(&mut self, state: &mut EntityState, step: &Step) {
        state.integrate(step.dt);
    }

    fn handle_collision(&mut self, state: &mut EntityState, _: EntityId, c: Vector) {
        if c.x != 0.0 {
            state.velocity.x = -state.velocity.x;
        }
        if c.y != 0.0 {
            state.velocity.y = -state.velocity.y;
        }
    }
}

fn gen_world(side: usize, crates: usize) -> World {
    let config = WorldConfig::default().with_cell_size(Size::new(2.0, 2.0));
    let mut world = World::new(config, CategoryDelegate).unwrap();
    for y in 0..side {
        for x in 0..side {
            world.add_tile(Tile::new(
                Point::new(x as f64, y as f64),
                Size::new(1.0, 1.0),
            ));
        }
    }
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let extent = side as f64;
    for _ in 0..crates {
        let p = Position::planar(rng.next_f64() * extent, rng.next_f64() * extent);
        let v = Vector::planar(rng.next_f64() - 0.5, rng.next_f64() - 0.5);
        world.stage_entry(
            Entity::new(p)
                .with_body(Body::new(Vector::splat(0.3 + rng.next_f64() * 0.4)))
                .with_velocity(v)
                .with_behavior(Wander),
        );
    }
    world.update(0.0);
    world
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");
    for &crates in &[256usize, 1024, 4096] {
        group.throughput(Throughput::Elements(crates as u64));
        group.bench_function(format!("update_{crates}"), |b| {
            b.iter_batched(
                || gen_world(128, crates),
                |mut world| {
                    for _ in 0..8 {
                        world.update(1.0 / 60.0);
                    }
                    black_box(world.grid().tested_pairs());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_nav(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav");
    let mut world = gen_world(96, 512);

    group.bench_function("generate_96", |b| {
        b.iter(|| {
            let graph = world.build_nav_graph(Size::new(1.0, 1.0), |_| true).unwrap();
            black_box(graph.edge_count());
        });
    });

    world.build_nav_graph(Size::new(1.0, 1.0), |_| true).unwrap();
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let queries: Vec<(Position, Position)> = (0..16)
        .map(|_| {
            let s = Position::planar(rng.next_f64() * 95.0, rng.next_f64() * 95.0);
            let g = Position::planar(rng.next_f64() * 95.0, rng.next_f64() * 95.0);
            (s, g)
        })
        .collect();
    group.bench_function("path_16", |b| {
        b.iter(|| {
            let steps: usize = queries
                .iter()
                .map(|(s, g)| world.path(*s, *g, &EuclideanCost).len())
                .sum();
            black_box(steps)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tick, bench_nav);
criterion_main!(benches);
