//! One-dimensional convenience layer.
//!
//! These functions transform a raw sequence without requiring the caller to
//! manage a grid: the forward path pads with an edge taper, transforms, and
//! mirrors the half spectrum out to a full-length complex vector; the
//! inverse path transforms back and discards the padded tail.

use num_complex::Complex;

use crate::backend::{SpectralScalar, TransformBackend};
use crate::padding::find_padded_size;

/// Forward transform of a raw sequence, with edge-tapered padding.
///
/// `min_pad_size` controls the padding hint: `None` pads by the input
/// length, `Some(0)` disables padding, and `Some(p)` pads by at least `p`
/// samples. Whenever padding is requested, the total length is rounded up
/// to the next 7-smooth size.
///
/// Returns the full spectrum (padded length), with the redundant upper half
/// reconstructed by conjugate symmetry. With `scale_forward` the samples
/// are pre-scaled by `1/sqrt(n_tot)`; otherwise all scaling is deferred to
/// the inverse. An empty input yields an empty output.
pub fn compute_fft_1d<T, B>(
    backend: &B,
    input: &[T],
    scale_forward: bool,
    min_pad_size: Option<usize>,
) -> Vec<Complex<T>>
where
    T: SpectralScalar,
    B: TransformBackend<T>,
{
    if input.is_empty() {
        return Vec::new();
    }

    let orig_size = input.len();
    let mut pad_size = min_pad_size.unwrap_or(orig_size);
    if pad_size > 0 {
        pad_size = find_padded_size(pad_size + orig_size, false) - orig_size;
    }
    let tot_size = orig_size + pad_size;

    let scale = if scale_forward {
        T::scalar_from_f64(1.0 / (tot_size as f64).sqrt())
    } else {
        T::one()
    };

    let mut real = vec![T::zero(); tot_size];
    for (dst, &src) in real.iter_mut().zip(input) {
        *dst = scale * src;
    }
    edge_taper(&mut real[orig_size..], input[0], input[orig_size - 1], scale);

    let mut half = vec![Complex::default(); tot_size / 2 + 1];
    backend.forward_1d(tot_size, &real, &mut half);

    // Unfold the half spectrum into a full-length one. For even totals the
    // Nyquist bin is its own mirror image.
    let mut out = vec![Complex::default(); tot_size];
    out[0] = half[0];
    for i in 1..half.len() {
        out[i] = half[i];
        out[tot_size - i] = half[i].conj();
    }
    out
}

/// Inverse of [`compute_fft_1d`]: recovers `output.len()` leading samples.
///
/// The transform length is `input.len()`; only the non-redundant lower half
/// of `input` is read. `scale_forward` must match the value given to the
/// forward call so that the round trip is the identity. An empty input
/// leaves `output` untouched.
pub fn compute_fft_inv_1d<T, B>(
    backend: &B,
    input: &[Complex<T>],
    output: &mut [T],
    scale_forward: bool,
) where
    T: SpectralScalar,
    B: TransformBackend<T>,
{
    if input.is_empty() {
        return;
    }

    let tot_size = input.len();
    assert!(
        output.len() <= tot_size,
        "output length {} exceeds transform length {tot_size}",
        output.len()
    );

    // The backend may clobber its complex input, so work on a copy.
    let mut half = input[..tot_size / 2 + 1].to_vec();
    let mut real = vec![T::zero(); tot_size];
    backend.inverse_1d(tot_size, &mut half, &mut real);

    let scale = if scale_forward {
        T::scalar_from_f64(1.0 / (tot_size as f64).sqrt())
    } else {
        T::scalar_from_f64(1.0 / tot_size as f64)
    };
    for (dst, &src) in output.iter_mut().zip(&real) {
        *dst = src * scale;
    }
}

/// Fill `pad` with a linear ramp from `last` back to `first`.
///
/// The ramp makes the periodic extension of the signal continuous at the
/// seam between its tail and its head, which reduces spectral leakage. A
/// single pad cell is set to `first`. Every written value is multiplied by
/// `scale`, matching the pre-scaling of the signal itself.
pub fn edge_taper<T: SpectralScalar>(pad: &mut [T], first: T, last: T, scale: T) {
    match pad.len() {
        0 => {}
        1 => pad[0] = scale * first,
        n => {
            for (i, cell) in pad.iter_mut().enumerate() {
                let t = T::scalar_from_f64(i as f64 / (n - 1) as f64);
                *cell = scale * (first * t + (T::one() - t) * last);
            }
        }
    }
}
