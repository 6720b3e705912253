//! motionkernel-test - Regression test framework for motionkernel
//!
//! This crate provides the regression harness shared by the workspace's
//! `tests/*_reg.rs` files, plus synthetic images to run the filters on.
//! Two modes are supported:
//!
//! - **Compare**: Check results against expected values (default)
//! - **Display**: Also print the images under test as hex grids
//!
//! # Usage
//!
//! ```ignore
//! use motionkernel_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("rank");
//! let pix = fixtures::uniform(5, 5, 128)?;
//! rp.compare_values(128.0, pix.get_pixel(2, 2).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Filter for the log output of the crates under test

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Synthetic test images
///
/// Every builder returns a packed-pixel [`Pix`](motionkernel_core::Pix)
/// with rows of exactly `width` words.
pub mod fixtures {
    use crate::{TestError, TestResult};
    use motionkernel_core::{Pix, PixMut, Region};

    fn build(width: u32, height: u32, f: impl Fn(u32, u32) -> u32) -> TestResult<Pix> {
        let mut pix = PixMut::new(width, height)?;
        for y in 0..height {
            let row = pix.row_data_mut(y);
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as u32, y);
            }
        }
        Ok(pix.into())
    }

    /// Image with every pixel set to `value`.
    pub fn uniform(width: u32, height: u32, value: u32) -> TestResult<Pix> {
        build(width, height, |_, _| value)
    }

    /// `background` image with a single `value` pixel at `(x, y)`.
    pub fn impulse(
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        value: u32,
        background: u32,
    ) -> TestResult<Pix> {
        if x >= width || y >= height {
            return Err(TestError::InvalidFixture(format!(
                "impulse at ({x}, {y}) outside {width}x{height}"
            )));
        }
        build(width, height, |px, py| {
            if (px, py) == (x, y) { value } else { background }
        })
    }

    /// Checkerboard of `cell` x `cell` squares, `a` at the origin.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: u32, b: u32) -> TestResult<Pix> {
        if cell == 0 {
            return Err(TestError::InvalidFixture("cell size is 0".to_string()));
        }
        build(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { a } else { b }
        })
    }

    /// Horizontal ramp: pixel `(x, y)` holds `start + x * step`.
    pub fn gradient(width: u32, height: u32, start: u32, step: u32) -> TestResult<Pix> {
        build(width, height, |x, _| start.wrapping_add(x.wrapping_mul(step)))
    }

    /// Copy of `pix` with every pixel outside `region` set to `sentinel`.
    ///
    /// Used to check that a pass leaves pixels outside its region alone.
    pub fn with_sentinel_frame(pix: &Pix, region: &Region, sentinel: u32) -> TestResult<Pix> {
        let mut out = pix.to_mut();
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if !region.contains(x as i32, y as i32) {
                    out.set_pixel_unchecked(x, y, sentinel);
                }
            }
        }
        Ok(out.into())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_uniform_and_impulse() {
            let pix = uniform(3, 2, 7).unwrap();
            assert!(pix.data().iter().all(|&p| p == 7));

            let pix = impulse(5, 5, 2, 2, 1000, 0).unwrap();
            assert_eq!(pix.get_pixel(2, 2), Some(1000));
            assert_eq!(pix.data().iter().filter(|&&p| p != 0).count(), 1);
            assert!(impulse(5, 5, 5, 0, 1, 0).is_err());
        }

        #[test]
        fn test_checkerboard_and_gradient() {
            let pix = checkerboard(4, 4, 2, 1, 9).unwrap();
            assert_eq!(pix.get_pixel(0, 0), Some(1));
            assert_eq!(pix.get_pixel(2, 0), Some(9));
            assert_eq!(pix.get_pixel(2, 2), Some(1));
            assert!(checkerboard(4, 4, 0, 1, 9).is_err());

            let pix = gradient(4, 2, 10, 5).unwrap();
            assert_eq!(pix.row_data(1), &[10, 15, 20, 25]);
        }

        #[test]
        fn test_with_sentinel_frame() {
            let pix = uniform(4, 4, 1).unwrap();
            let region = Region::new(1, 1, 3, 3).unwrap();
            let framed = with_sentinel_frame(&pix, &region, 0xDEAD_BEEF).unwrap();
            assert_eq!(framed.get_pixel(0, 0), Some(0xDEAD_BEEF));
            assert_eq!(framed.get_pixel(1, 1), Some(1));
            assert_eq!(framed.get_pixel(3, 2), Some(0xDEAD_BEEF));
        }
    }
}
