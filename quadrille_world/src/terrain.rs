// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiled terrain.

use core::fmt;
use std::collections::BTreeMap;

use kurbo::{Point, Size, Vec2};

use crate::entity::Step;

/// Elevation profile of a single tile.
pub trait TileSurface {
    /// Elevation at `local`, a point relative to the tile origin.
    fn elevation_at(&self, local: Point) -> f64;

    /// Advance animated terrain by one tick.
    fn advance(&mut self, step: &Step) {
        let _ = step;
    }
}

/// Level ground at zero elevation.
#[derive(Copy, Clone, Debug, Default)]
pub struct FlatSurface;

impl TileSurface for FlatSurface {
    fn elevation_at(&self, _local: Point) -> f64 {
        0.0
    }
}

/// Planar ramp: `base + gradient · local`.
#[derive(Copy, Clone, Debug, Default)]
pub struct RampSurface {
    /// Elevation at the tile origin.
    pub base: f64,
    /// Elevation change per unit along each axis.
    pub gradient: Vec2,
}

impl TileSurface for RampSurface {
    fn elevation_at(&self, local: Point) -> f64 {
        self.base + self.gradient.dot(local.to_vec2())
    }
}

/// A terrain tile.
pub struct Tile {
    origin: Point,
    size: Size,
    surface: Box<dyn TileSurface>,
}

impl Tile {
    /// Flat tile with its minimum corner at `origin`.
    pub fn new(origin: Point, size: Size) -> Self {
        Self::with_surface(origin, size, FlatSurface)
    }

    /// Tile with a custom elevation profile.
    pub fn with_surface(origin: Point, size: Size, surface: impl TileSurface + 'static) -> Self {
        Self {
            origin,
            size,
            surface: Box::new(surface),
        }
    }

    /// Minimum corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Extent.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Elevation at a world-space point, using tile-local coordinates.
    pub fn elevation(&self, point: Point) -> f64 {
        self.surface.elevation_at((point - self.origin).to_point())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("origin", &self.origin)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Tiles keyed by `round(position / tile_size)`.
///
/// A point maps to the tile whose key it rounds to, so each tile answers for the region
/// within half a tile of its origin.
pub struct Terrain {
    tile_size: Size,
    tiles: BTreeMap<(i64, i64), Tile>,
    extents: Size,
}

impl Terrain {
    pub(crate) fn new(tile_size: Size) -> Self {
        Self {
            tile_size,
            tiles: BTreeMap::new(),
            extents: Size::ZERO,
        }
    }

    /// Add a tile. Returns `false` (and drops the tile) if its key is taken.
    ///
    /// The terrain extents grow to cover the tile's far corner.
    pub fn add(&mut self, tile: Tile) -> bool {
        let key = self.key(tile.origin);
        if self.tiles.contains_key(&key) {
            tracing::debug!(?key, origin = ?tile.origin, "tile slot already taken");
            return false;
        }
        self.extents.width = self.extents.width.max(tile.origin.x + tile.size.width);
        self.extents.height = self.extents.height.max(tile.origin.y + tile.size.height);
        self.tiles.insert(key, tile);
        true
    }

    /// Tile answering for `point`.
    pub fn tile_at(&self, point: Point) -> Option<&Tile> {
        self.tiles.get(&self.key(point))
    }

    /// Elevation at `point`, or zero where there is no tile.
    pub fn elevation(&self, point: Point) -> f64 {
        self.tile_at(point).map_or(0.0, |t| t.elevation(point))
    }

    /// Size covered by tiles, measured from the origin.
    pub fn extents(&self) -> Size {
        self.extents
    }

    /// Tile size.
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether there are no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in key order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    pub(crate) fn advance(&mut self, step: &Step) {
        for tile in self.tiles.values_mut() {
            tile.surface.advance(step);
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "tile keys are small integral values."
    )]
    fn key(&self, point: Point) -> (i64, i64) {
        (
            (point.x / self.tile_size.width).round() as i64,
            (point.y / self.tile_size.height).round() as i64,
        )
    }
}

impl fmt::Debug for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terrain")
            .field("tile_size", &self.tile_size)
            .field("tiles", &self.tiles.len())
            .field("extents", &self.extents)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut t = Terrain::new(Size::new(2.0, 2.0));
        assert!(t.add(Tile::new(Point::new(2.0, 0.0), Size::new(2.0, 2.0))));
        // Rounds to the same key.
        assert!(!t.add(Tile::new(Point::new(2.5, 0.4), Size::new(2.0, 2.0))));
        assert_eq!(t.len(), 1);
        assert_eq!(t.extents(), Size::new(4.0, 2.0));
    }

    #[test]
    fn lookup_rounds_to_nearest_key() {
        let mut t = Terrain::new(Size::new(2.0, 2.0));
        t.add(Tile::new(Point::new(0.0, 0.0), Size::new(2.0, 2.0)));
        assert!(t.tile_at(Point::new(0.9, 0.9)).is_some());
        assert!(t.tile_at(Point::new(-0.9, 0.0)).is_some());
        assert!(t.tile_at(Point::new(1.1, 0.0)).is_none());
    }

    #[test]
    fn elevation_uses_tile_local_coordinates() {
        let mut t = Terrain::new(Size::new(4.0, 4.0));
        t.add(Tile::with_surface(
            Point::new(8.0, 0.0),
            Size::new(4.0, 4.0),
            RampSurface {
                base: 1.0,
                gradient: Vec2::new(0.5, 0.0),
            },
        ));
        assert_eq!(t.elevation(Point::new(9.0, 0.0)), 1.5);
        assert_eq!(t.elevation(Point::new(100.0, 0.0)), 0.0);
    }

    #[test]
    fn advance_reaches_every_surface() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counting(Rc<Cell<u32>>);
        impl TileSurface for Counting {
            fn elevation_at(&self, _: Point) -> f64 {
                0.0
            }
            fn advance(&mut self, _: &Step) {
                self.0.set(self.0.get() + 1);
            }
        }

        let hits = Rc::new(Cell::new(0));
        let mut t = Terrain::new(Size::new(1.0, 1.0));
        for x in 0..3 {
            t.add(Tile::with_surface(
                Point::new(f64::from(x), 0.0),
                Size::new(1.0, 1.0),
                Counting(hits.clone()),
            ));
        }
        t.advance(&Step {
            dt: 0.1,
            gravity: 0.0,
            tick: 1,
        });
        assert_eq!(hits.get(), 3);
    }
}
