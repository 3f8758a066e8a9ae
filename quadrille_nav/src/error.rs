// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for graph generation.

use kurbo::Size;

/// Errors reported by [`NavGraph::generate`](crate::NavGraph::generate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum NavError {
    /// Node spacing must be positive and finite on both axes.
    #[error("node spacing must be positive and finite, got {width}x{height}")]
    InvalidSpacing {
        /// Requested horizontal spacing.
        width: f64,
        /// Requested vertical spacing.
        height: f64,
    },
    /// The surface must span at least two node spacings on each axis.
    #[error("surface extents {extents:?} are smaller than twice the spacing {spacing:?}")]
    WorldTooSmall {
        /// Extents of the surface.
        extents: Size,
        /// Requested spacing.
        spacing: Size,
    },
}
