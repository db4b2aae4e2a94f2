//! Error types for paintbox-core
//!
//! Provides a unified error type for surface and palette operations.
//! Each variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// Paintbox core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} surface")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Incompatible surface sizes
    #[error("incompatible surface sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Empty palette
    #[error("palette has no colors")]
    EmptyPalette,
}

/// Result type alias for paintbox operations
pub type Result<T> = std::result::Result<T, Error>;
