//! 3x3 median filtering
//!
//! Replaces each pixel by the median of its 3x3 window. Impulse noise (a
//! lone bright or dark pixel) disappears while step edges survive, which a
//! mean filter would smear.
//!
//! Pixels are ranked as whole 32-bit words reinterpreted as `i32`, the
//! signed `int` a platform bitmap hands out. For opaque pixels (alpha
//! 0xFF) every value is negative and the order equals the unsigned one.

use crate::kernel::WINDOW_LEN;
use crate::neighborhood::Neighborhood;
use crate::process::{run_checked_pass, run_pass};
use crate::FilterResult;
use motionkernel_core::{Pix, PixMut, PixView, PixViewMut, Region};

/// Median of nine packed pixels.
#[inline]
pub fn median_of(values: &[u32; WINDOW_LEN]) -> u32 {
    let mut ranked = values.map(|v| v as i32);
    ranked.sort_unstable();
    ranked[WINDOW_LEN / 2] as u32
}

impl Neighborhood {
    /// Median of the window.
    #[inline]
    pub fn median(&self) -> u32 {
        median_of(self.values())
    }
}

/// Median of the 3x3 window centered on `(x, y)`.
///
/// # Panics
///
/// Panics if the window leaves the view's backing slice.
#[inline]
pub fn median_pixel(src: &PixView<'_>, x: u32, y: u32) -> u32 {
    Neighborhood::sample(src, x, y).median()
}

/// Median-filter `region` of `src` into the same region of `dst`.
///
/// Pixels of `dst` outside `region` are left untouched.
///
/// # Errors
///
/// Fails without writing anything if the geometry checks of
/// [`check_pass`](crate::check_pass) fail.
pub fn blur_median(
    src: &PixView<'_>,
    dst: &mut PixViewMut<'_>,
    region: Region,
) -> FilterResult<()> {
    log::debug!(
        "blur_median: region [{}, {}) x [{}, {}) on {}x{}",
        region.left,
        region.right,
        region.top,
        region.bottom,
        src.width(),
        src.height()
    );
    run_checked_pass(src, dst, &region, Neighborhood::median)
}

/// Median-filter `region` of a flat buffer without any geometry checks.
///
/// `src` and `dst` are row-major grids with `wpl` words per line. This is
/// the bare kernel: the caller guarantees the region keeps a 1-pixel
/// margin from every image edge. Windows that leave the slices panic.
pub fn blur_median_unchecked(src: &[u32], dst: &mut [u32], wpl: u32, region: Region) {
    log::trace!("blur_median_unchecked: {region:?}, wpl {wpl}");
    run_pass(src, dst, wpl, &region, Neighborhood::median);
}

/// Median-filter a whole image.
///
/// The result has the size of `pix`; its interior holds the filtered
/// pixels and its 1-pixel frame, where no full window exists, is zero.
///
/// # Errors
///
/// Returns an error if the image is smaller than 3x3.
pub fn median_filter_3x3(pix: &Pix) -> FilterResult<Pix> {
    let region = Region::interior(pix.width(), pix.height(), 1)?;
    let mut out = PixMut::new(pix.width(), pix.height())?;
    blur_median(&pix.view(), &mut out.view_mut(), region)?;
    Ok(out.into())
}
