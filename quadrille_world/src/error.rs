// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for world construction and navigation builds.

use quadrille_grid::GridError;
use quadrille_nav::NavError;

/// Errors reported by the world.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum WorldError {
    /// Both tile dimensions must be positive and finite.
    #[error("tile size must be positive and finite, got {width}x{height}")]
    InvalidTileSize {
        /// Requested tile width.
        width: f64,
        /// Requested tile height.
        height: f64,
    },

    /// The collision grid rejected its configuration.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Navigation graph generation failed.
    #[error(transparent)]
    Nav(#[from] NavError),
}
