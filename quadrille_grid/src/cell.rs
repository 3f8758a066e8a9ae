// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer cell coordinates.

use core::fmt;

use kurbo::Size;
use quadrille_geom::{Aabb, Position};

/// Integer coordinate of a collision cell.
///
/// Obtained by dividing a world position by the cell size and flooring each axis, so
/// negative coordinates map to negative cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
}

impl CellKey {
    /// Create a key from its indices.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell containing `point` (elevation is ignored).
    pub fn containing(point: Position, cell_size: Size) -> Self {
        Self::new(
            floor_to_i64(point.x / cell_size.width),
            floor_to_i64(point.y / cell_size.height),
        )
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every cell touched by the planar extent of `aabb`, row by row.
///
/// The range is inclusive on both ends, so a box whose maximum sits exactly on a cell
/// boundary also occupies the cell beyond it.
pub fn cells_under(aabb: &Aabb, cell_size: Size) -> impl Iterator<Item = CellKey> {
    let lo = CellKey::containing(aabb.minimum(), cell_size);
    let hi = CellKey::containing(aabb.maximum(), cell_size);
    (lo.y..=hi.y).flat_map(move |y| (lo.x..=hi.x).map(move |x| CellKey::new(x, y)))
}

#[inline]
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "world coordinates divided by the cell size stay well inside i64."
    )]
    let i = v as i64;
    if (i as f64) > v { i - 1 } else { i }
}
