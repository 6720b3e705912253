//! Error types for motionkernel-core
//!
//! Provides a unified error type for buffer, view and region construction.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! The filtering kernels themselves are infallible; every check lives at
//! construction time or at the validated entry points of
//! `motionkernel-filter`.

use thiserror::Error;

/// motionkernel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than the row itself
    #[error("invalid stride: {stride} words per line for width {width}")]
    InvalidStride { stride: u32, width: u32 },

    /// Backing slice does not cover the described grid
    #[error("buffer too small: need {required} words, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Index out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Region with negative origin or empty extent
    #[error("invalid region: [{left}, {right}) x [{top}, {bottom})")]
    InvalidRegion {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
