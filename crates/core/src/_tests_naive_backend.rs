#![cfg(test)]

//! Reference transform backend for the grid tests.
//!
//! A direct O(n^2) DFT per axis, with the half spectrum truncated on the
//! forward pass and rebuilt by conjugate symmetry on the inverse. Slow but
//! obviously correct, and it keeps the core crate free of transform
//! dependencies.

use num_complex::Complex;

use super::backend::TransformBackend;

pub struct NaiveDftBackend;

fn dft_line(input: &[Complex<f64>], sign: f64) -> Vec<Complex<f64>> {
    let n = input.len();
    let mut out = vec![Complex::new(0.0, 0.0); n];
    for (k, o) in out.iter_mut().enumerate() {
        for (t, v) in input.iter().enumerate() {
            let angle = sign * 2.0 * std::f64::consts::PI * (k * t) as f64 / n as f64;
            *o += v * Complex::new(angle.cos(), angle.sin());
        }
    }
    out
}

fn transform_axis(data: &mut [Complex<f64>], dims: [usize; 3], axis: usize, sign: f64) {
    let n = dims[axis];
    let stride: usize = dims[..axis].iter().product();
    let outer: usize = dims[axis + 1..].iter().product();
    let mut line = vec![Complex::new(0.0, 0.0); n];
    for o in 0..outer {
        for s in 0..stride {
            let base = o * stride * n + s;
            for t in 0..n {
                line[t] = data[base + t * stride];
            }
            let transformed = dft_line(&line, sign);
            for t in 0..n {
                data[base + t * stride] = transformed[t];
            }
        }
    }
}

impl NaiveDftBackend {
    fn forward(&self, dims: [usize; 3], input: &[f64], output: &mut [Complex<f64>]) {
        let [ni, nj, nk] = dims;
        assert_eq!(input.len(), ni * nj * nk);
        let nc = ni / 2 + 1;
        assert_eq!(output.len(), nc * nj * nk);

        let mut full: Vec<Complex<f64>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        for axis in 0..3 {
            transform_axis(&mut full, dims, axis, -1.0);
        }
        for k in 0..nk {
            for j in 0..nj {
                for i in 0..nc {
                    output[i + j * nc + k * nc * nj] = full[i + j * ni + k * ni * nj];
                }
            }
        }
    }

    fn inverse(&self, dims: [usize; 3], input: &[Complex<f64>], output: &mut [f64]) {
        let [ni, nj, nk] = dims;
        assert_eq!(output.len(), ni * nj * nk);
        let nc = ni / 2 + 1;
        assert_eq!(input.len(), nc * nj * nk);

        // Rebuild the redundant half from conjugate symmetry:
        // X[i,j,k] = conj(X[ni-i, (nj-j) mod nj, (nk-k) mod nk]).
        let mut full = vec![Complex::new(0.0, 0.0); ni * nj * nk];
        for k in 0..nk {
            for j in 0..nj {
                for i in 0..ni {
                    full[i + j * ni + k * ni * nj] = if i < nc {
                        input[i + j * nc + k * nc * nj]
                    } else {
                        let jm = (nj - j) % nj;
                        let km = (nk - k) % nk;
                        input[(ni - i) + jm * nc + km * nc * nj].conj()
                    };
                }
            }
        }
        for axis in 0..3 {
            transform_axis(&mut full, dims, axis, 1.0);
        }
        for (dst, src) in output.iter_mut().zip(&full) {
            *dst = src.re;
        }
    }
}

impl TransformBackend<f64> for NaiveDftBackend {
    fn forward_1d(&self, ni: usize, input: &[f64], output: &mut [Complex<f64>]) {
        self.forward([ni, 1, 1], input, output);
    }

    fn inverse_1d(&self, ni: usize, input: &mut [Complex<f64>], output: &mut [f64]) {
        self.inverse([ni, 1, 1], input, output);
    }

    fn forward_2d(&self, dims: [usize; 2], input: &[f64], output: &mut [Complex<f64>]) {
        self.forward([dims[0], dims[1], 1], input, output);
    }

    fn inverse_2d(&self, dims: [usize; 2], input: &mut [Complex<f64>], output: &mut [f64]) {
        self.inverse([dims[0], dims[1], 1], input, output);
    }

    fn forward_3d(&self, dims: [usize; 3], input: &[f64], output: &mut [Complex<f64>]) {
        self.forward(dims, input, output);
    }

    fn inverse_3d(&self, dims: [usize; 3], input: &mut [Complex<f64>], output: &mut [f64]) {
        self.inverse(dims, input, output);
    }
}

#[test]
fn naive_backend_round_trip_scales_by_sample_count() {
    let dims = [4, 3, 2];
    let n = 24;
    let input: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin()).collect();
    let backend = NaiveDftBackend;
    let mut spectrum = vec![Complex::new(0.0, 0.0); (dims[0] / 2 + 1) * dims[1] * dims[2]];
    backend.forward_3d(dims, &input, &mut spectrum);
    let mut output = vec![0.0; n];
    backend.inverse_3d(dims, &mut spectrum, &mut output);
    for (orig, after) in input.iter().zip(&output) {
        assert!((orig * n as f64 - after).abs() < 1e-9);
    }
}

#[test]
fn naive_backend_dc_bin_is_the_sample_sum() {
    let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let backend = NaiveDftBackend;
    let mut spectrum = vec![Complex::new(0.0, 0.0); 4];
    backend.forward_1d(6, &input, &mut spectrum);
    assert!((spectrum[0].re - 21.0).abs() < 1e-9);
    assert!(spectrum[0].im.abs() < 1e-9);
}
