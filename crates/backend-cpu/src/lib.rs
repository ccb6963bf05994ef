//! CPU transform backend built on realfft and rustfft.
//!
//! The halved first axis is handled by real-to-complex (and back)
//! transforms per contiguous line; the remaining axes are complex
//! strided passes. Plans are cached by their planners, which sit behind
//! mutexes so a backend can be shared across threads while serving
//! concurrent grids.

use num_complex::Complex;
use parking_lot::Mutex;
use realfft::RealFftPlanner;
use rustfft::{FftNum, FftPlanner};

use gridfft_core::backend::{SpectralScalar, TransformBackend};

pub struct CpuBackend<T: SpectralScalar + FftNum> {
    real_planner: Mutex<RealFftPlanner<T>>,
    complex_planner: Mutex<FftPlanner<T>>,
}

impl<T: SpectralScalar + FftNum> CpuBackend<T> {
    pub fn new() -> Self {
        Self {
            real_planner: Mutex::new(RealFftPlanner::new()),
            complex_planner: Mutex::new(FftPlanner::new()),
        }
    }

    /// Forward transform over `dims` (first axis fastest): real-to-complex
    /// along the first axis, then complex passes along the others.
    fn forward(&self, dims: [usize; 3], input: &[T], output: &mut [Complex<T>]) {
        let [ni, nj, nk] = dims;
        let nc = ni / 2 + 1;
        assert_eq!(input.len(), ni * nj * nk);
        assert_eq!(output.len(), nc * nj * nk);

        let r2c = self.real_planner.lock().plan_fft_forward(ni);
        // The r2c pass clobbers its input, so each line is transformed
        // from a copy and the caller's buffer survives intact.
        let mut line = vec![T::zero(); ni];
        let mut spectrum = vec![Complex::default(); nc];
        for l in 0..nj * nk {
            line.copy_from_slice(&input[l * ni..(l + 1) * ni]);
            r2c.process(&mut line, &mut spectrum)
                .expect("real-to-complex transform failed");
            output[l * nc..(l + 1) * nc].copy_from_slice(&spectrum);
        }

        self.complex_pass(output, [nc, nj, nk], 1, true);
        self.complex_pass(output, [nc, nj, nk], 2, true);
    }

    /// Inverse of [`forward`](Self::forward); uses `input` as scratch.
    fn inverse(&self, dims: [usize; 3], input: &mut [Complex<T>], output: &mut [T]) {
        let [ni, nj, nk] = dims;
        let nc = ni / 2 + 1;
        assert_eq!(input.len(), nc * nj * nk);
        assert_eq!(output.len(), ni * nj * nk);

        self.complex_pass(input, [nc, nj, nk], 2, false);
        self.complex_pass(input, [nc, nj, nk], 1, false);

        let c2r = self.real_planner.lock().plan_fft_inverse(ni);
        let mut spectrum = vec![Complex::default(); nc];
        let mut line = vec![T::zero(); ni];
        for l in 0..nj * nk {
            spectrum.copy_from_slice(&input[l * nc..(l + 1) * nc]);
            // A real signal has purely real DC and Nyquist bins; spectra
            // produced by pointwise manipulation may carry numerical dust
            // there, which the c2r plan rejects.
            spectrum[0].im = T::zero();
            if ni % 2 == 0 {
                spectrum[nc - 1].im = T::zero();
            }
            c2r.process(&mut spectrum, &mut line)
                .expect("complex-to-real transform failed");
            output[l * ni..(l + 1) * ni].copy_from_slice(&line);
        }
    }

    /// In-place complex transform of every line along `axis`, gathering
    /// strided elements into a contiguous scratch line.
    fn complex_pass(&self, data: &mut [Complex<T>], dims: [usize; 3], axis: usize, forward: bool) {
        let n = dims[axis];
        if n < 2 {
            return;
        }
        let fft = {
            let mut planner = self.complex_planner.lock();
            if forward {
                planner.plan_fft_forward(n)
            } else {
                planner.plan_fft_inverse(n)
            }
        };
        let stride: usize = dims[..axis].iter().product();
        let outer: usize = dims[axis + 1..].iter().product();
        let mut line = vec![Complex::default(); n];
        for o in 0..outer {
            for s in 0..stride {
                let base = o * stride * n + s;
                for t in 0..n {
                    line[t] = data[base + t * stride];
                }
                fft.process(&mut line);
                for t in 0..n {
                    data[base + t * stride] = line[t];
                }
            }
        }
    }
}

impl<T: SpectralScalar + FftNum> Default for CpuBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SpectralScalar + FftNum> TransformBackend<T> for CpuBackend<T> {
    fn forward_1d(&self, ni: usize, input: &[T], output: &mut [Complex<T>]) {
        self.forward([ni, 1, 1], input, output);
    }

    fn inverse_1d(&self, ni: usize, input: &mut [Complex<T>], output: &mut [T]) {
        self.inverse([ni, 1, 1], input, output);
    }

    fn forward_2d(&self, dims: [usize; 2], input: &[T], output: &mut [Complex<T>]) {
        self.forward([dims[0], dims[1], 1], input, output);
    }

    fn inverse_2d(&self, dims: [usize; 2], input: &mut [Complex<T>], output: &mut [T]) {
        self.inverse([dims[0], dims[1], 1], input, output);
    }

    fn forward_3d(&self, dims: [usize; 3], input: &[T], output: &mut [Complex<T>]) {
        self.forward(dims, input, output);
    }

    fn inverse_3d(&self, dims: [usize; 3], input: &mut [Complex<T>], output: &mut [T]) {
        self.inverse(dims, input, output);
    }
}
