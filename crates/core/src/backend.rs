//! Transform backend seam.
//!
//! Grids never compute a transform themselves; they hand their buffers to a
//! [`TransformBackend`] implementation. Backends are unnormalized in both
//! directions, so a forward followed by an inverse multiplies every sample
//! by the total number of samples. All scaling policy lives in the grids.

use std::fmt::Debug;

use num_complex::Complex;
use num_traits::Float;

/// Scalar element type the engine is generic over.
pub trait SpectralScalar: Float + Default + Debug + Send + Sync + 'static {
    /// Lossy conversion from `f64`, for scale factors and test fixtures.
    fn scalar_from_f64(x: f64) -> Self;
}

impl SpectralScalar for f32 {
    fn scalar_from_f64(x: f64) -> Self {
        x as f32
    }
}

impl SpectralScalar for f64 {
    fn scalar_from_f64(x: f64) -> Self {
        x
    }
}

/// Unnormalized real-to-complex transforms over column-major buffers.
///
/// Dimensions are listed first-axis-first, and the first axis always varies
/// fastest in memory. The complex buffer holds the non-redundant half of
/// the spectrum: the first axis is halved to `ni/2 + 1`, the remaining
/// axes keep their full extent.
///
/// `forward_*` leaves the real input untouched. `inverse_*` may use the
/// complex input as scratch and clobber it.
///
/// Methods take `&self`, so a backend shared between threads must make its
/// plan storage internally synchronized.
pub trait TransformBackend<T: SpectralScalar> {
    fn forward_1d(&self, ni: usize, input: &[T], output: &mut [Complex<T>]);

    fn inverse_1d(&self, ni: usize, input: &mut [Complex<T>], output: &mut [T]);

    fn forward_2d(&self, dims: [usize; 2], input: &[T], output: &mut [Complex<T>]);

    fn inverse_2d(&self, dims: [usize; 2], input: &mut [Complex<T>], output: &mut [T]);

    fn forward_3d(&self, dims: [usize; 3], input: &[T], output: &mut [Complex<T>]);

    fn inverse_3d(&self, dims: [usize; 3], input: &mut [Complex<T>], output: &mut [T]);
}
