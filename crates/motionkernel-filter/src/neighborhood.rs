//! 3x3 neighborhood sampling
//!
//! Gathers the nine pixels around a center in sample order (`dx` outer,
//! `dy` inner). Sampling performs no bounds checking of its own: a
//! neighborhood that leaves the grid horizontally reads the adjacent row,
//! and one that leaves the backing slice panics. Keeping every center one
//! pixel away from the edge is the job of the pass that calls it.

use crate::kernel::{OFFSETS, WINDOW_LEN, sample_index};
use motionkernel_core::PixView;

/// The nine pixels of a 3x3 window, in sample order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    values: [u32; WINDOW_LEN],
}

impl Neighborhood {
    /// Gather the window centered on `(x, y)` from a flat buffer with `wpl`
    /// words per line.
    ///
    /// # Panics
    ///
    /// Panics if any of the nine word offsets falls outside `data`.
    #[inline]
    pub fn gather(data: &[u32], wpl: u32, x: u32, y: u32) -> Self {
        let wpl = wpl as usize;
        let mut values = [0u32; WINDOW_LEN];
        let mut i = 0;
        for dx in OFFSETS {
            let xpos = x.wrapping_add_signed(dx) as usize;
            for dy in OFFSETS {
                let ypos = y.wrapping_add_signed(dy) as usize;
                values[i] = data[xpos + wpl * ypos];
                i += 1;
            }
        }
        Self { values }
    }

    /// Gather the window centered on `(x, y)` from a view.
    ///
    /// # Panics
    ///
    /// Same as [`Neighborhood::gather`].
    #[inline]
    pub fn sample(view: &PixView<'_>, x: u32, y: u32) -> Self {
        Self::gather(view.data(), view.wpl(), x, y)
    }

    /// Wrap nine values that are already in sample order.
    pub const fn from_values(values: [u32; WINDOW_LEN]) -> Self {
        Self { values }
    }

    /// A window holding `value` nine times.
    pub const fn uniform(value: u32) -> Self {
        Self {
            values: [value; WINDOW_LEN],
        }
    }

    #[inline]
    pub fn values(&self) -> &[u32; WINDOW_LEN] {
        &self.values
    }

    /// The pixel at offset `(dx, dy)` from the center.
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> u32 {
        self.values[sample_index(dx, dy)]
    }

    /// The center pixel.
    #[inline]
    pub fn center(&self) -> u32 {
        self.get(0, 0)
    }
}
