//! motionkernel-filter - 3x3 preprocessing filters for motion detection
//!
//! This crate provides the two passes a motion detector runs on a frame
//! difference before looking for changed areas:
//!
//! - Median filtering (impulse noise removal)
//! - Gaussian-weighted adaptive thresholding (binarization)
//!
//! Both passes sample the same fixed 3x3 window and write one destination
//! pixel per source pixel of a caller-given region.
//!
//! # Border policy
//!
//! Nothing is clamped, mirrored or wrapped at the image edge. A region must
//! keep a 1-pixel margin from every edge so that all windows exist. The
//! validated entry points ([`blur_median`], [`adaptive_threshold`]) reject
//! regions that break this before writing anything; the `_unchecked`
//! variants trust the caller. To cover edge pixels, pad the source first
//! with [`Pix::add_repeated_border`](motionkernel_core::Pix::add_repeated_border).

mod error;
pub mod kernel;
pub mod neighborhood;
pub mod process;
pub mod rank;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use kernel::KernelWeights;
pub use neighborhood::Neighborhood;
pub use process::check_pass;

// Re-export commonly used functions
pub use rank::{blur_median, blur_median_unchecked, median_filter_3x3, median_of, median_pixel};
pub use threshold::{
    DEFAULT_CONSTANT, ThresholdOptions, adaptive_threshold, adaptive_threshold_pix,
    adaptive_threshold_unchecked, is_foreground, weighted_sum,
};
