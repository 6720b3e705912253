//! motionkernel - Pixel kernels for frame-difference motion detection
//!
//! A motion detector subtracts consecutive frames and looks for changed
//! areas. Before that search the difference image goes through two 3x3
//! passes, both provided here:
//!
//! - Median filtering, which removes isolated noisy pixels
//! - Gaussian-weighted adaptive thresholding, which turns the cleaned
//!   difference into detect-colored foreground on a black background
//!
//! Pixels are packed 32-bit words. A pass runs over a caller-given region
//! that keeps a 1-pixel margin from every image edge.
//!
//! # Example
//!
//! ```
//! use motionkernel::filter::{ThresholdOptions, adaptive_threshold, blur_median};
//! use motionkernel::{PixMut, Region, color};
//!
//! let mut frame = PixMut::new(64, 48).unwrap();
//! frame.set_pixel(10, 10, 5000).unwrap();
//! let frame: motionkernel::Pix = frame.into();
//!
//! let region = Region::interior(64, 48, 1).unwrap();
//! let mut smoothed = PixMut::new(64, 48).unwrap();
//! blur_median(&frame.view(), &mut smoothed.view_mut(), region).unwrap();
//!
//! let mut mask = PixMut::new(64, 48).unwrap();
//! let options = ThresholdOptions::new(0, color::WHITE);
//! adaptive_threshold(&smoothed.view(), &mut mask.view_mut(), region, &options).unwrap();
//!
//! // The lone pixel was filtered out before thresholding
//! assert_eq!(mask.get_pixel(10, 10), Some(color::BLACK));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use motionkernel_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use motionkernel_filter as filter;
