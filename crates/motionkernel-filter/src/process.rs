//! Region processing
//!
//! Drives a per-neighborhood function over a region and writes one output
//! pixel per center. Each output depends only on source pixels, so the
//! destination is never read and the visiting order does not affect the
//! result. Pixels are visited column by column.

use crate::neighborhood::Neighborhood;
use crate::{FilterError, FilterResult};
use motionkernel_core::{PixView, PixViewMut, Region};

/// Check that a pass over `region` can read `src` and write `dst`.
///
/// The region must be non-empty with a non-negative origin, and the region
/// grown by one pixel on every side must lie inside the image. Source and
/// destination must share width, height and stride.
///
/// # Errors
///
/// - [`FilterError::SizeMismatch`] if the two grids differ
/// - [`FilterError::Core`] wrapping `InvalidRegion` for empty or negative
///   regions
/// - [`FilterError::RegionOutOfBounds`] if the 3x3 windows would leave the
///   image
pub fn check_pass(src: &PixView<'_>, dst: &PixView<'_>, region: &Region) -> FilterResult<()> {
    if !src.same_geometry(dst) {
        return Err(FilterError::SizeMismatch {
            src: (src.width(), src.height(), src.wpl()),
            dst: (dst.width(), dst.height(), dst.wpl()),
        });
    }
    Region::new(region.left, region.top, region.right, region.bottom)?;
    if !region.fits_within_margin(1, src.width(), src.height()) {
        return Err(FilterError::RegionOutOfBounds {
            region: *region,
            width: src.width(),
            height: src.height(),
        });
    }
    Ok(())
}

/// Apply `op` to every neighborhood of `region` and store the results.
///
/// No geometry checks beyond slice indexing: negative coordinates are
/// skipped, and windows that leave the buffer panic.
pub(crate) fn run_pass<F>(src: &[u32], dst: &mut [u32], wpl: u32, region: &Region, op: F)
where
    F: Fn(&Neighborhood) -> u32,
{
    for (x, y) in region.columns() {
        let window = Neighborhood::gather(src, wpl, x, y);
        dst[x as usize + (wpl as usize) * (y as usize)] = op(&window);
    }
}

/// Validate, then run `op` over `region` from `src` into `dst`.
pub(crate) fn run_checked_pass<F>(
    src: &PixView<'_>,
    dst: &mut PixViewMut<'_>,
    region: &Region,
    op: F,
) -> FilterResult<()>
where
    F: Fn(&Neighborhood) -> u32,
{
    check_pass(src, &dst.as_view(), region)?;
    let wpl = src.wpl();
    run_pass(src.data(), dst.data_mut(), wpl, region, op);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_pass_accepts_interior() {
        let a = vec![0u32; 25];
        let b = vec![0u32; 25];
        let src = PixView::new(&a, 5, 5, 5).unwrap();
        let dst = PixView::new(&b, 5, 5, 5).unwrap();
        assert!(check_pass(&src, &dst, &Region::from_ltrb(1, 1, 4, 4)).is_ok());
        assert!(check_pass(&src, &dst, &Region::from_ltrb(2, 2, 3, 3)).is_ok());
    }

    #[test]
    fn test_check_pass_rejects_edge_regions() {
        let a = vec![0u32; 25];
        let b = vec![0u32; 25];
        let src = PixView::new(&a, 5, 5, 5).unwrap();
        let dst = PixView::new(&b, 5, 5, 5).unwrap();

        for region in [
            Region::from_ltrb(0, 1, 4, 4),
            Region::from_ltrb(1, 0, 4, 4),
            Region::from_ltrb(1, 1, 5, 4),
            Region::from_ltrb(1, 1, 4, 5),
        ] {
            assert!(
                matches!(
                    check_pass(&src, &dst, &region),
                    Err(FilterError::RegionOutOfBounds { .. })
                ),
                "{region:?}"
            );
        }
    }

    #[test]
    fn test_check_pass_rejects_bad_regions() {
        let a = vec![0u32; 25];
        let b = vec![0u32; 25];
        let src = PixView::new(&a, 5, 5, 5).unwrap();
        let dst = PixView::new(&b, 5, 5, 5).unwrap();

        assert!(matches!(
            check_pass(&src, &dst, &Region::from_ltrb(2, 2, 2, 3)),
            Err(FilterError::Core(_))
        ));
        assert!(matches!(
            check_pass(&src, &dst, &Region::from_ltrb(-1, 1, 3, 3)),
            Err(FilterError::Core(_))
        ));
    }

    #[test]
    fn test_check_pass_rejects_mismatch() {
        let a = vec![0u32; 25];
        let b = vec![0u32; 30];
        let src = PixView::new(&a, 5, 5, 5).unwrap();
        let dst = PixView::new(&b, 5, 5, 6).unwrap();
        assert!(matches!(
            check_pass(&src, &dst, &Region::from_ltrb(1, 1, 4, 4)),
            Err(FilterError::SizeMismatch {
                src: (5, 5, 5),
                dst: (5, 5, 6)
            })
        ));
    }

    #[test]
    fn test_run_pass_writes_region_only() {
        let src: Vec<u32> = (0..16).collect();
        let mut dst = vec![u32::MAX; 16];
        run_pass(&src, &mut dst, 4, &Region::from_ltrb(1, 1, 3, 2), |n| n.center());

        let written: Vec<usize> = (0..16).filter(|&i| dst[i] != u32::MAX).collect();
        assert_eq!(written, vec![5, 6]);
        assert_eq!(dst[5], 5);
        assert_eq!(dst[6], 6);
    }
}
