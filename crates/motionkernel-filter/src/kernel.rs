//! Fixed 3x3 kernel geometry and weights
//!
//! Both filters look at the same 3x3 window. Two index orders exist over
//! that window and they are not interchangeable:
//!
//! - the *sample order* of a [`Neighborhood`](crate::Neighborhood):
//!   `dx` outer, `dy` inner, `i = 3*(dx+1) + (dy+1)`
//! - the *kernel order* of [`KernelWeights`]: `k = (dx+1) + 3*(dy+1)`
//!
//! The weighted sum pairs each sample with the weight at the kernel index
//! of the same offset.

use crate::{FilterError, FilterResult};

/// Relative offsets of the 3x3 window along one axis.
pub const OFFSETS: [i32; 3] = [-1, 0, 1];

/// Number of pixels in the window.
pub const WINDOW_LEN: usize = 9;

/// Divisor applied to the weighted sum (the window size).
pub const WINDOW_NORM: f32 = WINDOW_LEN as f32;

/// Position of offset `(dx, dy)` in sample order.
#[inline]
pub const fn sample_index(dx: i32, dy: i32) -> usize {
    (3 * (dx + 1) + (dy + 1)) as usize
}

/// Position of offset `(dx, dy)` in kernel order.
#[inline]
pub const fn kernel_index(dx: i32, dy: i32) -> usize {
    ((dx + 1) + 3 * (dy + 1)) as usize
}

/// Weights of the 3x3 threshold estimator, in kernel order.
///
/// Two tables are provided as constants. Any other table must still be a
/// 3x3 one; [`KernelWeights::from_slice`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelWeights {
    weights: [f32; WINDOW_LEN],
}

impl KernelWeights {
    /// Gaussian-shaped table peaking at 1.0 in the center.
    ///
    /// The weights sum to about 4.23, so the estimate of a flat patch is
    /// roughly 47% of its value.
    pub const GAUSSIAN: Self = Self::new([
        0.062_777_03,
        0.210_747_73,
        0.500_553_13,
        0.841_128_9,
        1.0,
        0.841_128_9,
        0.500_553_13,
        0.210_747_73,
        0.062_777_03,
    ]);

    /// [`Self::GAUSSIAN`] rescaled so the weights sum to 9: the estimate of
    /// a flat patch is the patch value itself.
    pub const GAUSSIAN_UNIT_GAIN: Self = Self::GAUSSIAN.scaled_to(WINDOW_NORM);

    /// Create weights from a kernel-order table.
    pub const fn new(weights: [f32; WINDOW_LEN]) -> Self {
        Self { weights }
    }

    /// Create weights from a slice, checking length and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `data` does not hold
    /// exactly 9 finite values.
    pub fn from_slice(data: &[f32]) -> FilterResult<Self> {
        let weights: [f32; WINDOW_LEN] = data.try_into().map_err(|_| {
            FilterError::InvalidKernel(format!(
                "expected {WINDOW_LEN} weights, got {}",
                data.len()
            ))
        })?;
        if let Some(bad) = weights.iter().find(|w| !w.is_finite()) {
            return Err(FilterError::InvalidKernel(format!(
                "weight {bad} is not finite"
            )));
        }
        Ok(Self::new(weights))
    }

    /// Get the table in kernel order.
    #[inline]
    pub const fn weights(&self) -> &[f32; WINDOW_LEN] {
        &self.weights
    }

    /// Get the weight for offset `(dx, dy)`.
    #[inline]
    pub const fn get(&self, dx: i32, dy: i32) -> f32 {
        self.weights[kernel_index(dx, dy)]
    }

    /// Sum of all weights.
    pub const fn sum(&self) -> f32 {
        let mut total = 0.0;
        let mut i = 0;
        while i < WINDOW_LEN {
            total += self.weights[i];
            i += 1;
        }
        total
    }

    /// Rescale the table so that its weights sum to `total`.
    pub const fn scaled_to(self, total: f32) -> Self {
        let factor = total / self.sum();
        let mut weights = self.weights;
        let mut i = 0;
        while i < WINDOW_LEN {
            weights[i] *= factor;
            i += 1;
        }
        Self { weights }
    }
}

impl Default for KernelWeights {
    fn default() -> Self {
        Self::GAUSSIAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_orders() {
        assert_eq!(sample_index(-1, -1), 0);
        assert_eq!(sample_index(-1, 1), 2);
        assert_eq!(sample_index(1, -1), 6);
        assert_eq!(sample_index(0, 0), 4);

        assert_eq!(kernel_index(-1, -1), 0);
        assert_eq!(kernel_index(1, -1), 2);
        assert_eq!(kernel_index(-1, 1), 6);
        assert_eq!(kernel_index(0, 0), 4);
    }

    #[test]
    fn test_gaussian_shape() {
        let k = KernelWeights::GAUSSIAN;
        assert_eq!(k.get(0, 0), 1.0);
        assert!(k.weights().iter().all(|&w| w > 0.0 && w <= 1.0));
        // Symmetric under a half-turn, not under transposition
        assert_eq!(k.get(-1, -1), k.get(1, 1));
        assert_eq!(k.get(0, -1), k.get(0, 1));
        assert_ne!(k.get(0, -1), k.get(-1, 0));
        assert!((k.sum() - 4.230_414).abs() < 1e-4);
    }

    #[test]
    fn test_unit_gain() {
        let k = KernelWeights::GAUSSIAN_UNIT_GAIN;
        assert!((k.sum() - 9.0).abs() < 1e-4);
        let ratio = k.get(0, 0) / k.get(1, 1);
        let expected = KernelWeights::GAUSSIAN.get(0, 0) / KernelWeights::GAUSSIAN.get(1, 1);
        assert!((ratio - expected).abs() < 1e-3);
    }

    #[test]
    fn test_from_slice() {
        let k = KernelWeights::from_slice(&[1.0; 9]).unwrap();
        assert_eq!(k.sum(), 9.0);

        assert!(matches!(
            KernelWeights::from_slice(&[1.0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
        let mut bad = [1.0; 9];
        bad[3] = f32::NAN;
        assert!(KernelWeights::from_slice(&bad).is_err());
    }

    #[test]
    fn test_default_is_gaussian() {
        assert_eq!(KernelWeights::default(), KernelWeights::GAUSSIAN);
    }
}
