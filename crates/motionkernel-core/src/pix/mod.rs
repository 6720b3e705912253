//! PIX - The 32 bpp pixel container
//!
//! `Pix` holds a grid of packed 32-bit pixels. A pixel is one opaque
//! integer; the filters order and sum it as a whole and never split it into
//! channels (see [`crate::color`] for the packing helpers).
//!
//! # Pixel layout
//!
//! - One pixel per 32-bit word
//! - Rows are stored top to bottom, `wpl` (words per line) apart
//! - Owned images use `wpl == width`; borrowed views may be wider
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.
//!
//! Buffers owned by someone else (a locked platform bitmap, a frame from a
//! capture API) are wrapped in the borrowed [`PixView`] / [`PixViewMut`]
//! instead, which is what the filter kernels operate on.

mod access;
mod border;
mod view;

pub use view::{PixView, PixViewMut};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (one packed pixel per word)
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data_size = (width as usize) * (height as usize);
        Ok(PixData {
            width,
            height,
            wpl: width,
            data: vec![0u32; data_size],
        })
    }

    #[inline]
    fn row(&self, y: u32) -> std::ops::Range<usize> {
        let start = (y as usize) * (self.wpl as usize);
        start..start + self.width as usize
    }
}

/// PIX - 32 bpp image container
///
/// `Pix` uses reference counting via `Arc` for cheap cloning.
///
/// # Examples
///
/// ```
/// use motionkernel_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height)?),
        })
    }

    /// Create a PIX that takes ownership of row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferTooSmall`] / [`Error::InvalidParameter`] if
    /// `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let required = (width as usize) * (height as usize);
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        if data.len() > required {
            return Err(Error::InvalidParameter(format!(
                "expected {} pixels for {}x{}, got {}",
                required,
                width,
                height,
                data.len()
            )));
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                wpl: width,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the raw image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Number of `Pix` handles sharing this image data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row(y)]
    }

    /// Borrow the image as a read-only view.
    #[inline]
    pub fn view(&self) -> PixView<'_> {
        PixView::from_parts(
            &self.inner.data,
            self.inner.width,
            self.inner.height,
            self.inner.wpl,
        )
    }

    /// Create a zeroed image with the same dimensions.
    pub fn create_template(&self) -> Self {
        let inner = PixData {
            width: self.inner.width,
            height: self.inner.height,
            wpl: self.inner.wpl,
            data: vec![0u32; self.inner.data.len()],
        };
        Pix {
            inner: Arc::new(inner),
        }
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Copy the image data into a new, unshared `Pix`.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.clone_data()),
        }
    }

    /// Convert into a mutable image without copying, if this is the only
    /// handle to the data.
    ///
    /// Returns `Err(self)` when the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of the image.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.clone_data(),
        }
    }

    fn clone_data(&self) -> PixData {
        PixData {
            width: self.inner.width,
            height: self.inner.height,
            wpl: self.inner.wpl,
            data: self.inner.data.clone(),
        }
    }
}

/// Mutable 32 bpp image
///
/// Obtained from [`Pix::try_into_mut`], [`Pix::to_mut`] or
/// [`PixMut::new`]; converts back into a [`Pix`] with `Into`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new zeroed mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::zeroed(width, height)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the pixels of row `y` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row(y);
        &mut self.inner.data[range]
    }

    /// Borrow the image as a read-only view.
    #[inline]
    pub fn view(&self) -> PixView<'_> {
        PixView::from_parts(
            &self.inner.data,
            self.inner.width,
            self.inner.height,
            self.inner.wpl,
        )
    }

    /// Borrow the image as a writable view.
    #[inline]
    pub fn view_mut(&mut self) -> PixViewMut<'_> {
        let (width, height, wpl) = (self.inner.width, self.inner.height, self.inner.wpl);
        PixViewMut::from_parts(&mut self.inner.data, width, height, wpl)
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_creation() {
        let pix = Pix::new(100, 200).unwrap();
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.wpl(), 100);
        assert_eq!(pix.data().len(), 20_000);
    }

    #[test]
    fn test_pix_creation_invalid() {
        assert!(Pix::new(0, 100).is_err());
        assert!(Pix::new(100, 0).is_err());
        assert!(PixMut::new(0, 0).is_err());
    }

    #[test]
    fn test_pix_from_vec() {
        let pix = Pix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(pix.row_data(1), &[4, 5, 6]);

        assert!(matches!(
            Pix::from_vec(3, 2, vec![1, 2, 3]),
            Err(Error::BufferTooSmall {
                required: 6,
                actual: 3
            })
        ));
        assert!(Pix::from_vec(3, 2, vec![0; 7]).is_err());
    }

    #[test]
    fn test_pix_clone_shares_data() {
        let pix1 = Pix::new(100, 100).unwrap();
        let pix2 = pix1.clone();

        assert_eq!(pix1.ref_count(), 2);
        assert_eq!(pix2.ref_count(), 2);
        assert_eq!(pix1.data().as_ptr(), pix2.data().as_ptr());
    }

    #[test]
    fn test_pix_deep_clone() {
        let pix1 = Pix::new(100, 100).unwrap();
        let pix2 = pix1.deep_clone();

        assert_eq!(pix1.ref_count(), 1);
        assert_eq!(pix2.ref_count(), 1);
        assert_ne!(pix1.data().as_ptr(), pix2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix1 = Pix::new(4, 4).unwrap();
        let pix2 = pix1.clone();

        let pix1 = pix1.try_into_mut().unwrap_err();
        drop(pix2);
        assert!(pix1.try_into_mut().is_ok());
    }

    #[test]
    fn test_create_template() {
        let mut pm = PixMut::new(10, 20).unwrap();
        pm.set_pixel(5, 10, 0xFF00_FF00).unwrap();
        let src: Pix = pm.into();

        let tmpl = src.create_template();
        assert!(tmpl.sizes_equal(&src));
        assert_eq!(tmpl.get_pixel(5, 10), Some(0));
        assert!(tmpl.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_row_data_mut() {
        let mut pm = PixMut::new(3, 3).unwrap();
        pm.row_data_mut(2).copy_from_slice(&[7, 8, 9]);
        assert_eq!(pm.get_pixel(0, 2), Some(7));
        assert_eq!(pm.get_pixel(2, 2), Some(9));
    }

    #[test]
    fn test_view_matches_owner() {
        let pix = Pix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let view = pix.view();
        assert_eq!(view.width(), 2);
        assert_eq!(view.height(), 2);
        assert_eq!(view.get_pixel(1, 1), Some(4));
    }
}
