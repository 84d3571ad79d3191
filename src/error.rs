//! Structured error types for tablegrid.
//!
//! Layout and mutation operations are best-effort at the public surface:
//! a failing operation logs a diagnostic and leaves the previous valid
//! layout intact. These types carry the failure causes inside the crate
//! so tests and internal helpers can reason about them.

use crate::types::Orientation;

/// All errors that can occur during table layout and drop routing.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Grid dimensions must be at least 1x1.
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },

    /// The hosting scene cannot instantiate entities yet.
    #[error("scene host is not ready")]
    HostUnavailable,

    /// No container is configured on the host.
    #[error("no container configured")]
    NoContainer,

    /// The container has a zero or negative extent.
    #[error("container extent is empty")]
    EmptyContainer,

    /// Spacing, padding or a derived cell dimension is invalid.
    #[error("invalid table metrics: {0}")]
    InvalidMetrics(String),

    /// Cell collection does not match the grid shape.
    #[error("cell count {cells} does not match {rows}x{cols} grid")]
    ShapeMismatch { cells: usize, rows: u32, cols: u32 },

    /// A border index does not exist in its orientation chain.
    #[error("no {orientation:?} border at index {index}")]
    UnknownBorder {
        orientation: Orientation,
        index: usize,
    },

    /// Structural mutation needs an existing border to chain from.
    #[error("no {0} border to chain the new border from")]
    NoBorderToChainFrom(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
