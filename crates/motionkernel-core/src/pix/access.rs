//! Pixel access functions
//!
//! Getting and setting individual pixels of owned images, plus bulk fills
//! over a [`Region`]. Every accessor has a checked form returning
//! `Option`/`Result` and an `_unchecked` form that relies on slice
//! indexing.

use super::{Pix, PixMut};
use crate::error::{Error, Result};
use crate::region::Region;

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.view().get_pixel(x, y)
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.view().get_pixel_unchecked(x, y)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.view().get_pixel(x, y)
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.view().get_pixel_unchecked(x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        self.view_mut().set_pixel(x, y, val)
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = x as usize + (self.wpl() as usize) * (y as usize);
        self.data_mut()[idx] = val;
    }

    /// Set every pixel to `val`.
    pub fn set_all_arbitrary(&mut self, val: u32) {
        self.data_mut().fill(val);
    }

    /// Set every pixel inside `region` to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is empty or does not
    /// fit inside the image.
    pub fn set_in_region(&mut self, region: &Region, val: u32) -> Result<()> {
        if region.is_empty() || !region.fits_within(self.width(), self.height()) {
            return Err(Error::InvalidRegion {
                left: region.left,
                top: region.top,
                right: region.right,
                bottom: region.bottom,
            });
        }
        let (left, right) = (region.left as usize, region.right as usize);
        for y in region.top as u32..region.bottom as u32 {
            self.row_data_mut(y)[left..right].fill(val);
        }
        Ok(())
    }
}
