//! Padded 2D transform grid.
//!
//! Same design as [`FftGrid3D`](crate::fftgrid3d::FftGrid3D) with one axis
//! fewer; see that module for the buffer-coupling and padding rationale.

use num_complex::Complex;

use crate::backend::{SpectralScalar, TransformBackend};
use crate::grid::{Grid2D, GridError};
use crate::shape::PaddedShape2;

/// Real grid coupled to its half spectrum, with padded storage.
#[derive(Debug)]
pub struct FftGrid2D<T> {
    shape: PaddedShape2,
    scale_forward: bool,
    /// One scratch element is kept past the total grid; transforms only
    /// touch the first `n_total` elements.
    real_data: Vec<T>,
    complex_data: Vec<Complex<T>>,
}

impl<T: SpectralScalar> FftGrid2D<T> {
    /// Create a zero-filled grid; see
    /// [`FftGrid3D::new`](crate::fftgrid3d::FftGrid3D::new).
    pub fn new(
        ni: usize,
        nj: usize,
        padding_ni: usize,
        padding_nj: usize,
        scale_forward: bool,
    ) -> Self {
        let shape = PaddedShape2::with_padding(ni, nj, padding_ni, padding_nj);
        log::debug!(
            "2D grid: logical {}x{}, total {}x{}",
            shape.ni,
            shape.nj,
            shape.ni_tot,
            shape.nj_tot
        );
        Self {
            shape,
            scale_forward,
            real_data: vec![T::zero(); shape.n_total() + 1],
            complex_data: vec![Complex::default(); shape.n_complex()],
        }
    }

    pub fn shape(&self) -> PaddedShape2 {
        self.shape
    }

    /// Copy `values`, whose dimensions must equal the total (padded)
    /// sizes, into the real buffer.
    pub fn initialize(&mut self, values: &Grid2D<T>) -> Result<(), GridError> {
        let s = self.shape;
        if values.ni() != s.ni_tot || values.nj() != s.nj_tot {
            return Err(GridError::DimensionMismatch {
                expected: vec![s.ni_tot, s.nj_tot],
                actual: vec![values.ni(), values.nj()],
            });
        }
        self.real_data[..s.n_total()].copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Real-domain sample at a logical position. Padding cells are not
    /// reachable through this accessor.
    #[inline]
    pub fn real(&self, i: usize, j: usize) -> T {
        self.check_logical(i, j);
        self.real_data[self.shape.real_idx(i, j)]
    }

    #[inline]
    pub fn real_mut(&mut self, i: usize, j: usize) -> &mut T {
        self.check_logical(i, j);
        let idx = self.shape.real_idx(i, j);
        &mut self.real_data[idx]
    }

    /// Spectral sample; the first index runs over the halved axis,
    /// `0..=ni_tot/2`.
    #[inline]
    pub fn complex(&self, i: usize, j: usize) -> Complex<T> {
        self.check_complex(i, j);
        self.complex_data[self.shape.complex_idx(i, j)]
    }

    #[inline]
    pub fn complex_mut(&mut self, i: usize, j: usize) -> &mut Complex<T> {
        self.check_complex(i, j);
        let idx = self.shape.complex_idx(i, j);
        &mut self.complex_data[idx]
    }

    /// Copy of the logical real region, without padding.
    pub fn real_grid(&self) -> Grid2D<T> {
        let s = self.shape;
        let mut out = Grid2D::new(s.ni, s.nj);
        for j in 0..s.nj {
            for i in 0..s.ni {
                out[(i, j)] = self.real_data[s.real_idx(i, j)];
            }
        }
        out
    }

    /// Copy of the full half-spectrum complex region.
    pub fn complex_grid(&self) -> Grid2D<Complex<T>> {
        let s = self.shape;
        let mut out = Grid2D::new(s.complex_ni(), s.complex_nj());
        out.as_mut_slice().copy_from_slice(&self.complex_data);
        out
    }

    /// Raw real buffer over the total grid, column-major.
    pub fn real_data(&self) -> &[T] {
        &self.real_data[..self.shape.n_total()]
    }

    pub fn real_data_mut(&mut self) -> &mut [T] {
        let n = self.shape.n_total();
        &mut self.real_data[..n]
    }

    /// Raw half-spectrum buffer, column-major.
    pub fn complex_data(&self) -> &[Complex<T>] {
        &self.complex_data
    }

    pub fn complex_data_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.complex_data
    }

    /// Forward transform; see
    /// [`FftGrid3D::forward_fft`](crate::fftgrid3d::FftGrid3D::forward_fft).
    pub fn forward_fft<B: TransformBackend<T>>(&mut self, backend: &B) {
        let s = self.shape;
        let n = s.n_total();
        if self.scale_forward {
            let scale = T::scalar_from_f64(1.0 / (n as f64).sqrt());
            for v in &mut self.real_data[..n] {
                *v = *v * scale;
            }
        }
        backend.forward_2d(
            [s.ni_tot, s.nj_tot],
            &self.real_data[..n],
            &mut self.complex_data,
        );
    }

    /// Inverse transform; see
    /// [`FftGrid3D::inverse_fft`](crate::fftgrid3d::FftGrid3D::inverse_fft).
    pub fn inverse_fft<B: TransformBackend<T>>(&mut self, backend: &B) {
        let s = self.shape;
        let n = s.n_total();
        backend.inverse_2d(
            [s.ni_tot, s.nj_tot],
            &mut self.complex_data,
            &mut self.real_data[..n],
        );
        let scale = if self.scale_forward {
            T::scalar_from_f64(1.0 / (n as f64).sqrt())
        } else {
            T::scalar_from_f64(1.0 / n as f64)
        };
        for v in &mut self.real_data[..n] {
            *v = *v * scale;
        }
    }

    /// Circular convolution with `filter` over the total grid; see
    /// [`FftGrid3D::convolve`](crate::fftgrid3d::FftGrid3D::convolve).
    pub fn convolve<B: TransformBackend<T>>(
        &mut self,
        filter: &mut FftGrid2D<T>,
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

    /// Convolution with the square root of `filter`'s spectrum; see
    /// [`FftGrid3D::convolve_covariance`](crate::fftgrid3d::FftGrid3D::convolve_covariance).
    pub fn convolve_covariance<B: TransformBackend<T>>(
        &mut self,
        filter: &mut FftGrid2D<T>,
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

    fn check_same_total(&self, other: &FftGrid2D<T>) -> Result<(), GridError> {
        let (s, o) = (self.shape, other.shape);
        if s.ni_tot != o.ni_tot || s.nj_tot != o.nj_tot {
            return Err(GridError::OperandMismatch {
                lhs: vec![s.ni_tot, s.nj_tot],
                rhs: vec![o.ni_tot, o.nj_tot],
            });
        }
        Ok(())
    }

    #[inline]
    fn check_logical(&self, i: usize, j: usize) {
        let s = self.shape;
        assert!(
            i < s.ni && j < s.nj,
            "real index ({i}, {j}) outside logical {}x{}",
            s.ni,
            s.nj
        );
    }

    #[inline]
    fn check_complex(&self, i: usize, j: usize) {
        let s = self.shape;
        assert!(
            i < s.complex_ni() && j < s.complex_nj(),
            "complex index ({i}, {j}) outside {}x{}",
            s.complex_ni(),
            s.complex_nj()
        );
    }
}
