//! Error types for paintbox-fill

use thiserror::Error;

/// Errors that can occur during fill operations
#[derive(Debug, Error)]
pub enum FillError {
    /// Seed position outside the surface bounds
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;
