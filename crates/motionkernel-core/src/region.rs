//! Region - half-open pixel rectangles
//!
//! A [`Region`] is the rectangle `[left, right) x [top, bottom)` a filter
//! pass runs over. Coordinates are signed so that a region received from a
//! platform API can be represented before it is validated.

use crate::error::{Error, Result};

/// A half-open rectangle of pixel coordinates.
///
/// Like a platform `Rect`, this is a small `Copy` value described by its
/// four edges. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate (inclusive)
    pub left: i32,
    /// Top y coordinate (inclusive)
    pub top: i32,
    /// Right x coordinate (exclusive)
    pub right: i32,
    /// Bottom y coordinate (exclusive)
    pub bottom: i32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] unless `0 <= left < right` and
    /// `0 <= top < bottom`.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        let region = Self::from_ltrb(left, top, right, bottom);
        if left < 0 || top < 0 || region.is_empty() {
            return Err(Error::InvalidRegion {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(region)
    }

    /// Create a region without validation
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The region of a `width` x `height` image left after removing a
    /// `margin`-pixel frame on every side.
    ///
    /// With `margin = 1` this is the largest region whose 3x3
    /// neighborhoods stay inside the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the frame consumes the whole image.
    pub fn interior(width: u32, height: u32, margin: u32) -> Result<Self> {
        let to_i32 = |v: u32| {
            i32::try_from(v).map_err(|_| Error::InvalidParameter(format!("{v} exceeds i32")))
        };
        let (w, h, m) = (to_i32(width)?, to_i32(height)?, to_i32(margin)?);
        Self::new(m, m, w - m, h - m)
    }

    /// Get the width (zero for inverted regions)
    #[inline]
    pub fn width(&self) -> u32 {
        (i64::from(self.right) - i64::from(self.left)).max(0) as u32
    }

    /// Get the height (zero for inverted regions)
    #[inline]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom) - i64::from(self.top)).max(0) as u32
    }

    /// Get the number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the region covers no pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Grow the region by `margin` pixels on all sides
    ///
    /// Edges saturate at the `i32` range.
    pub fn dilate(&self, margin: i32) -> Region {
        Region {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: self.right.saturating_add(margin),
            bottom: self.bottom.saturating_add(margin),
        }
    }

    /// Check that the region lies inside a `width` x `height` grid
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.fits_within_margin(0, width, height)
    }

    /// Check that the region grown by `margin` pixels on all sides lies
    /// inside a `width` x `height` grid.
    ///
    /// Computed in `i64`, so edges near the `i32` limits cannot overflow.
    pub fn fits_within_margin(&self, margin: u32, width: u32, height: u32) -> bool {
        let m = i64::from(margin);
        i64::from(self.left) - m >= 0
            && i64::from(self.top) - m >= 0
            && i64::from(self.right) + m <= i64::from(width)
            && i64::from(self.bottom) + m <= i64::from(height)
    }

    /// Compute the intersection of two regions
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let region = Region {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (!region.is_empty()).then_some(region)
    }

    /// Iterate over the pixel coordinates of the region, column by column.
    ///
    /// The outer loop runs over x and the inner loop over y, the order in
    /// which the filter passes visit pixels.
    pub fn columns(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (top, bottom) = (self.top.max(0), self.bottom.max(0));
        (self.left.max(0)..self.right.max(0))
            .flat_map(move |x| (top..bottom).map(move |y| (x as u32, y as u32)))
    }
}
