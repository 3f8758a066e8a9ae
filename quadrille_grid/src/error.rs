// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for grid construction.

/// Errors reported when building a [`CollisionGrid`](crate::CollisionGrid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// Both cell dimensions must be positive and finite.
    #[error("cell size must be positive and finite, got {width}x{height}")]
    InvalidCellSize {
        /// Requested cell width.
        width: f64,
        /// Requested cell height.
        height: f64,
    },
}
