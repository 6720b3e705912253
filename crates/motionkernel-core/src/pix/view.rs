//! Borrowed pixel views
//!
//! A view describes a caller-owned buffer: a slice, the grid it holds
//! (`width` x `height`) and the distance between rows in words (`wpl`).
//! Creating a view checks that the slice covers the grid; nothing else is
//! checked later, so reading past the grid edge is a bug in the caller and
//! panics on the slice bounds.
//!
//! Views never allocate and never outlive the borrow they were made from.

use crate::error::{Error, Result};
use crate::region::Region;

/// Verify that `len` words can hold a `width` x `height` grid with `wpl`
/// words per line.
fn check_layout(len: usize, width: u32, height: u32, wpl: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if wpl < width {
        return Err(Error::InvalidStride { stride: wpl, width });
    }
    // The last row only needs `width` words, not a full stride.
    let required = (wpl as usize) * (height as usize - 1) + width as usize;
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Read-only view of a 32 bpp pixel grid.
#[derive(Debug, Clone, Copy)]
pub struct PixView<'a> {
    data: &'a [u32],
    width: u32,
    height: u32,
    wpl: u32,
}

impl<'a> PixView<'a> {
    /// Wrap `data` as a `width` x `height` grid with `wpl` words per line.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidStride`] if `wpl < width`
    /// - [`Error::BufferTooSmall`] if `data` is shorter than the grid
    pub fn new(data: &'a [u32], width: u32, height: u32, wpl: u32) -> Result<Self> {
        check_layout(data.len(), width, height, wpl)?;
        Ok(Self::from_parts(data, width, height, wpl))
    }

    pub(super) fn from_parts(data: &'a [u32], width: u32, height: u32, wpl: u32) -> Self {
        Self {
            data,
            width,
            height,
            wpl,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.wpl
    }

    #[inline]
    pub fn data(&self) -> &'a [u32] {
        self.data
    }

    /// The full extent of the grid as a region.
    pub fn bounds(&self) -> Region {
        Region::from_ltrb(0, 0, self.width as i32, self.height as i32)
    }

    /// Word offset of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + (self.wpl as usize) * (y as usize)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel value without checking it against the grid.
    ///
    /// # Panics
    ///
    /// Panics if the word offset falls outside the backing slice.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }

    /// Check whether two views describe the same grid geometry.
    pub fn same_geometry(&self, other: &PixView<'_>) -> bool {
        self.width == other.width && self.height == other.height && self.wpl == other.wpl
    }
}

/// Writable view of a 32 bpp pixel grid.
#[derive(Debug)]
pub struct PixViewMut<'a> {
    data: &'a mut [u32],
    width: u32,
    height: u32,
    wpl: u32,
}

impl<'a> PixViewMut<'a> {
    /// Wrap `data` as a writable `width` x `height` grid with `wpl` words
    /// per line.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PixView::new`].
    pub fn new(data: &'a mut [u32], width: u32, height: u32, wpl: u32) -> Result<Self> {
        check_layout(data.len(), width, height, wpl)?;
        Ok(Self::from_parts(data, width, height, wpl))
    }

    pub(super) fn from_parts(data: &'a mut [u32], width: u32, height: u32, wpl: u32) -> Self {
        Self {
            data,
            width,
            height,
            wpl,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.wpl
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut *self.data
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> PixView<'_> {
        PixView::from_parts(&*self.data, self.width, self.height, self.wpl)
    }

    /// Word offset of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + (self.wpl as usize) * (y as usize)
    }

    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.as_view().get_pixel(x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without checking it against the grid.
    ///
    /// # Panics
    ///
    /// Panics if the word offset falls outside the backing slice.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.index(x, y);
        self.data[idx] = val;
    }
}
