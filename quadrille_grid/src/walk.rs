// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell traversal along a segment.
//!
//! [`CellWalk`] visits every cell crossed by a segment, in order from the start cell to the
//! end cell. It is an incremental digital differential analyzer: the walk keeps a running
//! error term that compares how far the segment has progressed along each axis, and steps
//! one cell along whichever axis boundary is crossed first. Only integer cell steps and one
//! addition per step are needed, which makes it a floating-point generalization of
//! Bresenham's line algorithm.
//!
//! A step that crosses a cell corner exactly moves along `x` first.

use kurbo::Size;
use quadrille_geom::Position;

use crate::cell::{CellKey, floor_to_i64};

/// Iterator over the cells crossed by a segment, nearest first.
///
/// ```rust
/// use kurbo::Size;
/// use quadrille_geom::Position;
/// use quadrille_grid::{CellKey, CellWalk};
///
/// let cells: Vec<_> = CellWalk::new(
///     Position::planar(0.5, 0.5),
///     Position::planar(2.5, 0.5),
///     Size::new(1.0, 1.0),
/// )
/// .collect();
/// assert_eq!(cells, vec![CellKey::new(0, 0), CellKey::new(1, 0), CellKey::new(2, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct CellWalk {
    x: i64,
    y: i64,
    x_inc: i64,
    y_inc: i64,
    dx: f64,
    dy: f64,
    error: f64,
    remaining: u64,
}

impl CellWalk {
    /// Walk the cells from `start` to `end` for a grid with the given cell size.
    ///
    /// Elevation is ignored. A degenerate segment visits only the start cell.
    pub fn new(start: Position, end: Position, cell_size: Size) -> Self {
        let x0 = start.x / cell_size.width;
        let y0 = start.y / cell_size.height;
        let x1 = end.x / cell_size.width;
        let y1 = end.y / cell_size.height;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x = floor_to_i64(x0);
        let y = floor_to_i64(y0);

        let mut n: i64 = 1;
        let x_inc;
        let y_inc;
        let mut error;

        if dx == 0.0 {
            x_inc = 0;
            error = f64::INFINITY;
        } else if x1 > x0 {
            x_inc = 1;
            n += floor_to_i64(x1) - x;
            error = (x0.floor() + 1.0 - x0) * dy;
        } else {
            x_inc = -1;
            n += x - floor_to_i64(x1);
            error = (x0 - x0.floor()) * dy;
        }

        if dy == 0.0 {
            y_inc = 0;
            error -= f64::INFINITY;
        } else if y1 > y0 {
            y_inc = 1;
            n += floor_to_i64(y1) - y;
            error -= (y0.floor() + 1.0 - y0) * dx;
        } else {
            y_inc = -1;
            n += y - floor_to_i64(y1);
            error -= (y0 - y0.floor()) * dx;
        }

        Self {
            x,
            y,
            x_inc,
            y_inc,
            dx,
            dy,
            error,
            remaining: u64::try_from(n).unwrap_or(1),
        }
    }
}

impl Iterator for CellWalk {
    type Item = CellKey;

    fn next(&mut self) -> Option<CellKey> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = CellKey::new(self.x, self.y);
        if self.error > 0.0 {
            self.y += self.y_inc;
            self.error -= self.dx;
        } else {
            self.x += self.x_inc;
            self.error += self.dy;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}
