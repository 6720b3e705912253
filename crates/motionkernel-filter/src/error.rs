//! Error types for motionkernel-filter
//!
//! The kernels themselves cannot fail. These errors come from the checks the
//! validated entry points run before touching the destination, so a call
//! either writes its whole region or nothing.

use motionkernel_core::Region;
use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] motionkernel_core::Error),

    /// The region grown by the 1-pixel window margin leaves the image
    #[error(
        "region [{}, {}) x [{}, {}) plus its 1-pixel margin exceeds the {width}x{height} image",
        .region.left, .region.right, .region.top, .region.bottom
    )]
    RegionOutOfBounds {
        /// Region as requested
        region: Region,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Source and destination grids differ
    #[error(
        "size mismatch: source {}x{} (wpl {}), destination {}x{} (wpl {})",
        .src.0, .src.1, .src.2, .dst.0, .dst.1, .dst.2
    )]
    SizeMismatch {
        /// Source (width, height, wpl)
        src: (u32, u32, u32),
        /// Destination (width, height, wpl)
        dst: (u32, u32, u32),
    },

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
