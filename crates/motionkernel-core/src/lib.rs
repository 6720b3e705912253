//! motionkernel core - pixel containers and geometry
//!
//! This crate provides the data structures the motionkernel filters work on:
//!
//! - [`Pix`] / [`PixMut`] - Owned 32 bpp image (immutable / mutable)
//! - [`PixView`] / [`PixViewMut`] - Borrowed views over caller-owned buffers
//! - [`Region`] - Half-open pixel rectangles
//! - [`color`] - Packed 32-bit color helpers

pub mod error;
pub mod pix;
pub mod region;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixView, PixViewMut};
pub use region::Region;

/// Packed 32-bit color helpers.
///
/// # Pixel format
///
/// Colors are written `0xAARRGGBB` (alpha in the MSB). The filters do not
/// depend on this layout: they treat a pixel as a single integer.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Opaque black, written for background pixels by the threshold pass.
    pub const BLACK: u32 = 0xFF00_0000;
    /// Opaque white
    pub const WHITE: u32 = 0xFFFF_FFFF;
    /// Opaque red
    pub const RED: u32 = 0xFFFF_0000;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose an opaque gray pixel.
    #[inline]
    pub fn gray(v: u8) -> u32 {
        compose_rgb(v, v, v)
    }

    /// Swap the red and blue channels of an ARGB pixel.
    ///
    /// Bitmaps stored as R, G, B, A bytes read back as `0xAABBGGRR` words on
    /// little-endian machines, so a color constant written as ARGB has to be
    /// converted before it is stored into such a buffer.
    #[inline]
    pub fn argb_to_abgr(pixel: u32) -> u32 {
        (pixel & 0xFF00_FF00) | ((pixel >> 16) & 0xFF) | ((pixel & 0xFF) << 16)
    }

}
