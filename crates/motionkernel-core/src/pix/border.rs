//! Border operations for images
//!
//! The 3x3 filters never clamp or wrap at the image edge: a pass only covers
//! pixels whose whole neighborhood exists. To filter every pixel of an
//! image, pad it first, run the pass over the interior of the padded image,
//! then strip the padding again.
//!
//! - Constant borders (fill with one value)
//! - Repeated borders (replicate the nearest edge pixel)

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Add a uniform border of `npix` pixels filled with `val`.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*npix, height + 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if the padded dimensions overflow.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        let mut out = self.padded(npix)?;
        out.set_all_arbitrary(val);
        self.blit_into(&mut out, npix);
        Ok(out.into())
    }

    /// Add a border of `npix` pixels that replicates the edge pixels.
    ///
    /// Corners take the value of the nearest corner pixel. A 3x3 median over
    /// the interior of the result behaves at the original edge as if the
    /// image continued with its outermost row and column.
    ///
    /// # Errors
    ///
    /// Returns error if the padded dimensions overflow.
    pub fn add_repeated_border(&self, npix: u32) -> Result<Pix> {
        let mut out = self.padded(npix)?;
        let (w, h) = (self.width(), self.height());

        for y in 0..out.height() {
            let sy = y.saturating_sub(npix).min(h - 1);
            let src_row = self.row_data(sy);
            let dst_row = out.row_data_mut(y);
            let (left, rest) = dst_row.split_at_mut(npix as usize);
            let (middle, right) = rest.split_at_mut(w as usize);
            left.fill(src_row[0]);
            middle.copy_from_slice(src_row);
            right.fill(src_row[w as usize - 1]);
        }

        Ok(out.into())
    }

    /// Remove a uniform border of `npix` pixels.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if the border is as large as the image.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        let (w, h) = (self.width(), self.height());
        if npix.saturating_mul(2) >= w || npix.saturating_mul(2) >= h {
            return Err(Error::InvalidParameter(format!(
                "border {npix} too large for {w}x{h} image"
            )));
        }

        let mut out = PixMut::new(w - 2 * npix, h - 2 * npix)?;
        let (start, end) = (npix as usize, (w - npix) as usize);
        for y in 0..out.height() {
            out.row_data_mut(y)
                .copy_from_slice(&self.row_data(y + npix)[start..end]);
        }
        Ok(out.into())
    }

    fn padded(&self, npix: u32) -> Result<PixMut> {
        let grow = |v: u32| {
            npix.checked_mul(2)
                .and_then(|b| v.checked_add(b))
                .ok_or_else(|| Error::InvalidParameter(format!("border {npix} overflows")))
        };
        PixMut::new(grow(self.width())?, grow(self.height())?)
    }

    fn blit_into(&self, out: &mut PixMut, npix: u32) {
        let (start, end) = (npix as usize, (npix + self.width()) as usize);
        for y in 0..self.height() {
            out.row_data_mut(y + npix)[start..end].copy_from_slice(self.row_data(y));
        }
    }
}
