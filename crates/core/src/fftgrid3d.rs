//! Padded 3D transform grid.
//!
//! An [`FftGrid3D`] owns two coupled buffers: a real-domain buffer spanning
//! the total (padded) grid and a complex buffer holding the non-redundant
//! half of its spectrum. Convolution and covariance shaping are pointwise
//! products between the complex buffers of two grids; padding pushes the
//! circular wraparound of the underlying transform outside the logical
//! region of interest.

use num_complex::Complex;

use crate::backend::{SpectralScalar, TransformBackend};
use crate::grid::{Grid3D, GridError};
use crate::shape::PaddedShape3;

/// Real grid coupled to its half spectrum, with padded storage.
///
/// Grids are deliberately not cloneable. They are sized buffers mutated in
/// place by the transform operations; each thread works on its own
/// instances.
#[derive(Debug)]
pub struct FftGrid3D<T> {
    shape: PaddedShape3,
    /// Scale by `1/sqrt(n)` in both directions instead of `1/n` on the
    /// inverse only.
    scale_forward: bool,
    real_data: Vec<T>,
    complex_data: Vec<Complex<T>>,
}

impl<T: SpectralScalar> FftGrid3D<T> {
    /// Create a zero-filled grid.
    ///
    /// Total sizes are the smallest 7-smooth values at or above logical
    /// size plus padding hint; the first axis total is forced even.
    pub fn new(
        ni: usize,
        nj: usize,
        nk: usize,
        padding_ni: usize,
        padding_nj: usize,
        padding_nk: usize,
        scale_forward: bool,
    ) -> Self {
        let shape = PaddedShape3::with_padding(ni, nj, nk, padding_ni, padding_nj, padding_nk);
        log::debug!(
            "3D grid: logical {}x{}x{}, total {}x{}x{}",
            shape.ni,
            shape.nj,
            shape.nk,
            shape.ni_tot,
            shape.nj_tot,
            shape.nk_tot
        );
        Self {
            shape,
            scale_forward,
            real_data: vec![T::zero(); shape.n_total()],
            complex_data: vec![Complex::default(); shape.n_complex()],
        }
    }

    pub fn shape(&self) -> PaddedShape3 {
        self.shape
    }

    /// Copy `values`, whose dimensions must equal the total (padded)
    /// sizes, into the real buffer.
    pub fn initialize(&mut self, values: &Grid3D<T>) -> Result<(), GridError> {
        let s = self.shape;
        if values.ni() != s.ni_tot || values.nj() != s.nj_tot || values.nk() != s.nk_tot {
            return Err(GridError::DimensionMismatch {
                expected: vec![s.ni_tot, s.nj_tot, s.nk_tot],
                actual: vec![values.ni(), values.nj(), values.nk()],
            });
        }
        self.real_data.copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Copy `values`, whose dimensions must equal the logical sizes, into
    /// the top sub-block of the real buffer and zero every padding cell.
    pub fn initialize_pad_zero(&mut self, values: &Grid3D<T>) -> Result<(), GridError> {
        let s = self.shape;
        if values.ni() != s.ni || values.nj() != s.nj || values.nk() != s.nk {
            return Err(GridError::DimensionMismatch {
                expected: vec![s.ni, s.nj, s.nk],
                actual: vec![values.ni(), values.nj(), values.nk()],
            });
        }
        let mut index = 0;
        for k in 0..s.nk_tot {
            for j in 0..s.nj_tot {
                for i in 0..s.ni_tot {
                    self.real_data[index] = if i < s.ni && j < s.nj && k < s.nk {
                        values[(i, j, k)]
                    } else {
                        T::zero()
                    };
                    index += 1;
                }
            }
        }
        Ok(())
    }

    /// Fill the entire padded real buffer with one value.
    pub fn initialize_constant(&mut self, value: T) {
        self.real_data.fill(value);
    }

    /// Real-domain sample at a logical position. Padding cells are not
    /// reachable through this accessor.
    #[inline]
    pub fn real(&self, i: usize, j: usize, k: usize) -> T {
        self.check_logical(i, j, k);
        self.real_data[self.shape.real_idx(i, j, k)]
    }

    #[inline]
    pub fn real_mut(&mut self, i: usize, j: usize, k: usize) -> &mut T {
        self.check_logical(i, j, k);
        let idx = self.shape.real_idx(i, j, k);
        &mut self.real_data[idx]
    }

    /// Real-domain sample addressed with wrapping signed indices, for
    /// kernels centered at the origin. See
    /// [`PaddedShape3::cyclic_idx`].
    #[inline]
    pub fn real_cyclic(&self, i: isize, j: isize, k: isize) -> T {
        self.real_data[self.shape.cyclic_idx(i, j, k)]
    }

    #[inline]
    pub fn real_cyclic_mut(&mut self, i: isize, j: isize, k: isize) -> &mut T {
        let idx = self.shape.cyclic_idx(i, j, k);
        &mut self.real_data[idx]
    }

    /// Spectral sample; the first index runs over the halved axis,
    /// `0..=ni_tot/2`.
    #[inline]
    pub fn complex(&self, i: usize, j: usize, k: usize) -> Complex<T> {
        self.check_complex(i, j, k);
        self.complex_data[self.shape.complex_idx(i, j, k)]
    }

    #[inline]
    pub fn complex_mut(&mut self, i: usize, j: usize, k: usize) -> &mut Complex<T> {
        self.check_complex(i, j, k);
        let idx = self.shape.complex_idx(i, j, k);
        &mut self.complex_data[idx]
    }

    /// Copy of the logical real region, without padding.
    pub fn real_grid(&self) -> Grid3D<T> {
        let s = self.shape;
        let mut out = Grid3D::new(s.ni, s.nj, s.nk);
        for k in 0..s.nk {
            for j in 0..s.nj {
                for i in 0..s.ni {
                    out[(i, j, k)] = self.real_data[s.real_idx(i, j, k)];
                }
            }
        }
        out
    }

    /// Copy of the full half-spectrum complex region.
    pub fn complex_grid(&self) -> Grid3D<Complex<T>> {
        let s = self.shape;
        let mut out = Grid3D::new(s.complex_ni(), s.complex_nj(), s.complex_nk());
        out.as_mut_slice().copy_from_slice(&self.complex_data);
        out
    }

    /// Raw real buffer over the total grid, column-major.
    pub fn real_data(&self) -> &[T] {
        &self.real_data
    }

    pub fn real_data_mut(&mut self) -> &mut [T] {
        &mut self.real_data
    }

    /// Raw half-spectrum buffer, column-major.
    pub fn complex_data(&self) -> &[Complex<T>] {
        &self.complex_data
    }

    pub fn complex_data_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.complex_data
    }

    /// Forward transform: populate the complex buffer from the real
    /// buffer. In symmetric mode the real samples are pre-scaled by
    /// `1/sqrt(n_total)` first; the backend itself never normalizes.
    pub fn forward_fft<B: TransformBackend<T>>(&mut self, backend: &B) {
        if self.scale_forward {
            let scale = T::scalar_from_f64(1.0 / (self.shape.n_total() as f64).sqrt());
            for v in &mut self.real_data {
                *v = *v * scale;
            }
        }
        let s = self.shape;
        backend.forward_3d(
            [s.ni_tot, s.nj_tot, s.nk_tot],
            &self.real_data,
            &mut self.complex_data,
        );
    }

    /// Inverse transform: populate the real buffer from the complex
    /// buffer, then scale by `1/sqrt(n_total)` (symmetric mode) or
    /// `1/n_total` (asymmetric). The complex buffer is used as backend
    /// scratch and holds no meaningful values afterwards.
    pub fn inverse_fft<B: TransformBackend<T>>(&mut self, backend: &B) {
        let s = self.shape;
        backend.inverse_3d(
            [s.ni_tot, s.nj_tot, s.nk_tot],
            &mut self.complex_data,
            &mut self.real_data,
        );
        let n = s.n_total() as f64;
        let scale = if self.scale_forward {
            T::scalar_from_f64(1.0 / n.sqrt())
        } else {
            T::scalar_from_f64(1.0 / n)
        };
        for v in &mut self.real_data {
            *v = *v * scale;
        }
    }

    /// Circular convolution with `filter` over the total grid.
    ///
    /// Transforms both grids, multiplies the spectra pointwise into self,
    /// and transforms self back. The filter is left in the spectral domain
    /// so it can be reused via [`convolve_no_fft`](Self::convolve_no_fft).
    pub fn convolve<B: TransformBackend<T>>(
        &mut self,
        filter: &mut FftGrid3D<T>,
        backend: &B,
    ) -> Result<(), GridError> {
        self.check_same_total(filter)?;
        self.forward_fft(backend);
        filter.forward_fft(backend);
        for (c, f) in self.complex_data.iter_mut().zip(&filter.complex_data) {
            *c = *c * *f;
        }
        self.inverse_fft(backend);
        Ok(())
    }

    /// Convolution with the square root of `filter`'s spectrum.
    ///
    /// Treats the filter as a covariance (power) spectrum; its pointwise
    /// square root is the amplitude spectrum whose kernel, applied twice,
    /// reproduces the covariance. Shapes white noise into a field with the
    /// filter's spatial correlation.
    pub fn convolve_covariance<B: TransformBackend<T>>(
        &mut self,
        filter: &mut FftGrid3D<T>,
        backend: &B,
    ) -> Result<(), GridError> {
        self.check_same_total(filter)?;
        self.forward_fft(backend);
        filter.forward_fft(backend);
        for (c, f) in self.complex_data.iter_mut().zip(&filter.complex_data) {
            *c = *c * f.sqrt();
        }
        self.inverse_fft(backend);
        Ok(())
    }

    /// Pointwise spectral multiply without any transform, for chaining
    /// several spectral operations before a single inverse.
    pub fn convolve_no_fft(&mut self, filter: &FftGrid3D<T>) -> Result<(), GridError> {
        self.check_same_total(filter)?;
        for (c, f) in self.complex_data.iter_mut().zip(&filter.complex_data) {
            *c = *c * *f;
        }
        Ok(())
    }

    fn check_same_total(&self, other: &FftGrid3D<T>) -> Result<(), GridError> {
        let (s, o) = (self.shape, other.shape);
        if s.ni_tot != o.ni_tot || s.nj_tot != o.nj_tot || s.nk_tot != o.nk_tot {
            return Err(GridError::OperandMismatch {
                lhs: vec![s.ni_tot, s.nj_tot, s.nk_tot],
                rhs: vec![o.ni_tot, o.nj_tot, o.nk_tot],
            });
        }
        Ok(())
    }

    #[inline]
    fn check_logical(&self, i: usize, j: usize, k: usize) {
        let s = self.shape;
        assert!(
            i < s.ni && j < s.nj && k < s.nk,
            "real index ({i}, {j}, {k}) outside logical {}x{}x{}",
            s.ni,
            s.nj,
            s.nk
        );
    }

    #[inline]
    fn check_complex(&self, i: usize, j: usize, k: usize) {
        let s = self.shape;
        assert!(
            i < s.complex_ni() && j < s.complex_nj() && k < s.complex_nk(),
            "complex index ({i}, {j}, {k}) outside {}x{}x{}",
            s.complex_ni(),
            s.complex_nj(),
            s.complex_nk()
        );
    }
}
