// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World configuration.

use kurbo::Size;
use quadrille_grid::GridError;

use crate::error::WorldError;

/// Construction-time settings for a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Size of one terrain tile. Tiles are keyed by their origin divided by this size.
    pub tile_size: Size,
    /// Size of one collision grid cell.
    pub cell_size: Size,
    /// Gravity handed to behaviors every tick. The world itself applies no forces.
    pub gravity: f64,
}

impl WorldConfig {
    /// Check every setting, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), WorldError> {
        if !positive(self.tile_size) {
            return Err(WorldError::InvalidTileSize {
                width: self.tile_size.width,
                height: self.tile_size.height,
            });
        }
        if !positive(self.cell_size) {
            return Err(GridError::InvalidCellSize {
                width: self.cell_size.width,
                height: self.cell_size.height,
            }
            .into());
        }
        Ok(())
    }

    /// Same settings with a different tile size.
    pub fn with_tile_size(mut self, tile_size: Size) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Same settings with a different collision cell size.
    pub fn with_cell_size(mut self, cell_size: Size) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Same settings with a different gravity.
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: Size::new(1.0, 1.0),
            cell_size: Size::new(1.0, 1.0),
            gravity: -9.8,
        }
    }
}

fn positive(size: Size) -> bool {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    valid(size.width) && valid(size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn reports_bad_sizes() {
        let bad_tile = WorldConfig::default().with_tile_size(Size::new(0.0, 2.0));
        assert_eq!(
            bad_tile.validate(),
            Err(WorldError::InvalidTileSize {
                width: 0.0,
                height: 2.0
            })
        );

        let bad_cell = WorldConfig::default().with_cell_size(Size::new(1.0, f64::NAN));
        assert!(matches!(
            bad_cell.validate(),
            Err(WorldError::Grid(GridError::InvalidCellSize { .. }))
        ));
    }
}
