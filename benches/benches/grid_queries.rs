// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use quadrille_geom::{Aabb, Position, Vector};
use quadrille_grid::CollisionGrid;

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

fn gen_lattice_boxes(n: usize, spacing: f64, half: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let p = Position::planar(x as f64 * spacing, y as f64 * spacing);
            out.push(Aabb::new(p, Vector::splat(half)));
        }
    }
    out
}

fn gen_random_boxes(count: usize, extent: f64, max_half: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let p = Position::planar(rng.next_f64() * extent, rng.next_f64() * extent);
        let half = 0.1 + rng.next_f64() * max_half;
        out.push(Aabb::new(p, Vector::splat(half)));
    }
    out
}

fn filled(boxes: &[Aabb]) -> CollisionGrid<u32> {
    let mut grid = CollisionGrid::new(Size::new(4.0, 4.0)).unwrap();
    for (i, b) in boxes.iter().enumerate() {
        grid.reindex(i as u32, b);
    }
    grid
}

fn bench_reindex(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_reindex");
    for &n in &[32usize, 64, 128] {
        let boxes = gen_lattice_boxes(n, 3.0, 1.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_lattice_n{n}"), |b| {
            b.iter_batched(
                || CollisionGrid::<u32>::new(Size::new(4.0, 4.0)).unwrap(),
                |mut grid| {
                    for (i, aabb) in boxes.iter().enumerate() {
                        grid.reindex(i as u32, aabb);
                    }
                    black_box(grid.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    let boxes = gen_random_boxes(4096, 500.0, 3.0);
    group.bench_function("move_all_small_step", |b| {
        b.iter_batched(
            || filled(&boxes),
            |mut grid| {
                for (i, aabb) in boxes.iter().enumerate() {
                    let mut moved = *aabb;
                    moved.set_position(aabb.position() + Vector::planar(1.5, -0.5));
                    grid.reindex(i as u32, &moved);
                }
                black_box(grid.occupied_cells().count());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_queries");
    let boxes = gen_random_boxes(4096, 500.0, 3.0);
    let grid = filled(&boxes);

    group.bench_function("neighbors_all", |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for i in 0..boxes.len() as u32 {
                grid.for_each_neighbor(i, |_| total += 1);
            }
            black_box(total)
        });
    });

    group.bench_function("point_query_256", |b| {
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        let points: Vec<Position> = (0..256)
            .map(|_| Position::planar(rng.next_f64() * 500.0, rng.next_f64() * 500.0))
            .collect();
        b.iter(|| {
            let hits = points
                .iter()
                .filter(|p| grid.query(**p, |_| true))
                .count();
            black_box(hits)
        });
    });

    group.bench_function("cast_ray_64", |b| {
        let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
        let segments: Vec<(Position, Position)> = (0..64)
            .map(|_| {
                let start = Position::planar(rng.next_f64() * 500.0, rng.next_f64() * 500.0);
                let end = Position::planar(rng.next_f64() * 500.0, rng.next_f64() * 500.0);
                (start, end)
            })
            .collect();
        b.iter(|| {
            let hits = segments
                .iter()
                .filter_map(|(s, e)| grid.cast_ray(*s, *e, |_| true))
                .count();
            black_box(hits)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_reindex, bench_queries);
criterion_main!(benches);
