//! Gaussian-weighted adaptive thresholding
//!
//! Each pixel is compared against a threshold estimated from its own 3x3
//! window, so the cut follows the local illumination instead of one global
//! level. Pixels brighter than `estimate - constant` become `detect_color`,
//! all others become opaque black.
//!
//! # Integer semantics
//!
//! - The estimate is accumulated in `f32` over the pixels reinterpreted as
//!   `i32`, divided by 9 and truncated toward zero.
//! - The comparison is done on `u32`: the estimate is reinterpreted as
//!   unsigned and `constant` is subtracted with wrap-around.
//!
//! With small non-negative pixels and `0 <= constant <= estimate` this is
//! the plain arithmetic comparison. Outside that range the wrap-around is
//! part of the result and is kept as is.

use crate::kernel::{KernelWeights, OFFSETS, WINDOW_NORM, sample_index};
use crate::neighborhood::Neighborhood;
use crate::process::{run_checked_pass, run_pass};
use crate::FilterResult;
use motionkernel_core::{Pix, PixMut, PixView, PixViewMut, Region, color};

/// Default bias: 15 steps of a squared 8-bit channel range.
pub const DEFAULT_CONSTANT: i32 = 255 * 255 * 15;

/// Weighted estimate of the window, in pixel units.
///
/// Sums `pixel * weight` in sample order, pairing each pixel with the
/// weight of the same offset, then divides by 9 and truncates.
#[inline]
pub fn weighted_sum(window: &Neighborhood, weights: &KernelWeights) -> i32 {
    let mut acc = 0.0f32;
    for dx in OFFSETS {
        for dy in OFFSETS {
            let pixel = window.values()[sample_index(dx, dy)] as i32;
            acc += pixel as f32 * weights.get(dx, dy);
        }
    }
    (acc / WINDOW_NORM) as i32
}

/// Foreground test for one pixel against its estimate.
#[inline]
pub fn is_foreground(pixel: u32, estimate: i32, constant: i32) -> bool {
    pixel > (estimate as u32).wrapping_sub(constant as u32)
}

/// Parameters of the threshold pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdOptions {
    /// Bias subtracted from the local estimate
    pub constant: i32,
    /// Value written for foreground pixels
    pub detect_color: u32,
    /// Weights of the local estimate
    pub weights: KernelWeights,
}

impl Default for ThresholdOptions {
    /// Opaque red foreground in ABGR memory order, [`DEFAULT_CONSTANT`]
    /// bias and [`KernelWeights::GAUSSIAN`] weights.
    fn default() -> Self {
        Self {
            constant: DEFAULT_CONSTANT,
            detect_color: color::argb_to_abgr(color::RED),
            weights: KernelWeights::GAUSSIAN,
        }
    }
}

impl ThresholdOptions {
    /// Options with the given bias and foreground value and Gaussian weights.
    pub fn new(constant: i32, detect_color: u32) -> Self {
        Self {
            constant,
            detect_color,
            weights: KernelWeights::GAUSSIAN,
        }
    }

    pub fn with_constant(mut self, constant: i32) -> Self {
        self.constant = constant;
        self
    }

    pub fn with_detect_color(mut self, detect_color: u32) -> Self {
        self.detect_color = detect_color;
        self
    }

    pub fn with_weights(mut self, weights: KernelWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Output value for the window: `detect_color` or [`color::BLACK`].
    #[inline]
    pub fn classify(&self, window: &Neighborhood) -> u32 {
        let estimate = weighted_sum(window, &self.weights);
        if is_foreground(window.center(), estimate, self.constant) {
            self.detect_color
        } else {
            color::BLACK
        }
    }
}

impl Neighborhood {
    /// Weighted estimate of the window, see [`weighted_sum`].
    #[inline]
    pub fn weighted_sum(&self, weights: &KernelWeights) -> i32 {
        weighted_sum(self, weights)
    }
}

/// Threshold `region` of `src` into the same region of `dst`.
///
/// Every pixel of the region in `dst` becomes either
/// `options.detect_color` or [`color::BLACK`]. Pixels outside the region
/// are left untouched.
///
/// # Errors
///
/// Fails without writing anything if the geometry checks of
/// [`check_pass`](crate::check_pass) fail.
pub fn adaptive_threshold(
    src: &PixView<'_>,
    dst: &mut PixViewMut<'_>,
    region: Region,
    options: &ThresholdOptions,
) -> FilterResult<()> {
    log::debug!(
        "adaptive_threshold: region [{}, {}) x [{}, {}) on {}x{}, constant {}, detect {:#010x}",
        region.left,
        region.right,
        region.top,
        region.bottom,
        src.width(),
        src.height(),
        options.constant,
        options.detect_color
    );
    run_checked_pass(src, dst, &region, |window| options.classify(window))
}

/// Threshold `region` of a flat buffer without any geometry checks.
///
/// Same contract as [`blur_median_unchecked`](crate::blur_median_unchecked).
pub fn adaptive_threshold_unchecked(
    src: &[u32],
    dst: &mut [u32],
    wpl: u32,
    region: Region,
    options: &ThresholdOptions,
) {
    log::trace!("adaptive_threshold_unchecked: {region:?}, wpl {wpl}");
    run_pass(src, dst, wpl, &region, |window| options.classify(window));
}

/// Threshold a whole image.
///
/// The 1-pixel frame of the result, where no full window exists, is zero.
///
/// # Errors
///
/// Returns an error if the image is smaller than 3x3.
pub fn adaptive_threshold_pix(pix: &Pix, options: &ThresholdOptions) -> FilterResult<Pix> {
    let region = Region::interior(pix.width(), pix.height(), 1)?;
    let mut out = PixMut::new(pix.width(), pix.height())?;
    adaptive_threshold(&pix.view(), &mut out.view_mut(), region, options)?;
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum_uniform_gaussian() {
        // 900 * 4.2304 / 9 = 423.04
        let n = Neighborhood::uniform(900);
        assert_eq!(weighted_sum(&n, &KernelWeights::GAUSSIAN), 423);
    }

    #[test]
    fn test_weighted_sum_uniform_unit_gain() {
        for v in [0u32, 1, 9, 128, 255, 1000, 65_025] {
            let n = Neighborhood::uniform(v);
            let est = weighted_sum(&n, &KernelWeights::GAUSSIAN_UNIT_GAIN);
            assert!((est - v as i32).abs() <= 1, "v={v} est={est}");
        }
    }

    #[test]
    fn test_weighted_sum_pairs_transposed_weights() {
        // Only the pixel at (dx, dy) = (0, -1) is set; it must meet the
        // weight of kernel index 1, not sample index 1.
        let mut values = [0u32; 9];
        values[sample_index(0, -1)] = 900;
        let n = Neighborhood::from_values(values);
        let expected = (900.0f32 * 0.210_747_73 / 9.0) as i32;
        assert_eq!(n.weighted_sum(&KernelWeights::GAUSSIAN), expected);
        assert_eq!(expected, 21);
    }

    #[test]
    fn test_weighted_sum_truncates_toward_zero() {
        let neg = Neighborhood::uniform(-900i32 as u32);
        assert_eq!(weighted_sum(&neg, &KernelWeights::GAUSSIAN), -423);
    }

    #[test]
    fn test_is_foreground() {
        assert!(is_foreground(101, 100, 0));
        assert!(!is_foreground(100, 100, 0));
        assert!(is_foreground(95, 100, 10));
        assert!(!is_foreground(95, 100, -10));
        // estimate - constant wraps below zero: nothing is above it
        assert!(!is_foreground(5000, 100, 200));
    }

    #[test]
    fn test_classify_outputs() {
        let options = ThresholdOptions::new(0, 0xFFFF_FFFF);
        let mut values = [0u32; 9];
        values[4] = 1000;
        assert_eq!(
            options.classify(&Neighborhood::from_values(values)),
            0xFFFF_FFFF
        );
        assert_eq!(options.classify(&Neighborhood::uniform(0)), color::BLACK);
    }

    #[test]
    fn test_default_options() {
        let options = ThresholdOptions::default();
        assert_eq!(options.constant, 975_375);
        assert_eq!(options.detect_color, 0xFF00_00FF);
        assert_eq!(options.weights, KernelWeights::GAUSSIAN);

        let tuned = options
            .with_constant(3)
            .with_detect_color(color::WHITE)
            .with_weights(KernelWeights::GAUSSIAN_UNIT_GAIN);
        assert_eq!(tuned.constant, 3);
        assert_eq!(tuned.detect_color, color::WHITE);
        assert_eq!(tuned.weights, KernelWeights::GAUSSIAN_UNIT_GAIN);
    }

    #[test]
    fn test_adaptive_threshold_pix_values() {
        let pix = Pix::from_vec(3, 3, vec![0, 0, 0, 0, 1000, 0, 0, 0, 0]).unwrap();
        let out = adaptive_threshold_pix(&pix, &ThresholdOptions::new(0, color::WHITE)).unwrap();
        assert_eq!(out.get_pixel(1, 1), Some(color::WHITE));
        assert_eq!(out.get_pixel(0, 0), Some(0));
    }
}
