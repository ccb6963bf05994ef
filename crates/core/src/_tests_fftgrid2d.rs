#![cfg(test)]

use super::_tests_naive_backend::NaiveDftBackend;
use super::fftgrid2d::FftGrid2D;
use super::grid::{Grid2D, GridError};

fn filled_grid(ni: usize, nj: usize) -> Grid2D<f64> {
    let data = (0..ni * nj)
        .map(|i| (i as f64 * 0.53).cos() - 0.02 * i as f64)
        .collect();
    Grid2D::from_vec(ni, nj, data).unwrap()
}

#[test]
fn construction_pads_each_axis_and_zeroes_both_buffers() {
    let grid = FftGrid2D::<f64>::new(9, 9, 2, 2, false);
    let s = grid.shape();
    assert_eq!((s.ni_tot, s.nj_tot), (12, 12));
    assert!(grid.real_data().iter().all(|&v| v == 0.0));
    assert_eq!(grid.complex_data().len(), 7 * 12);
}

#[test]
fn round_trip_reproduces_the_padded_region_in_both_modes() {
    let backend = NaiveDftBackend;
    for scale_forward in [false, true] {
        let mut grid = FftGrid2D::new(8, 7, 0, 0, scale_forward);
        let values = filled_grid(8, 7);
        grid.initialize(&values).unwrap();
        grid.forward_fft(&backend);
        grid.inverse_fft(&backend);
        for (orig, after) in values.as_slice().iter().zip(grid.real_data()) {
            assert!((orig - after).abs() < 1e-9, "mode {scale_forward}");
        }
    }
}

#[test]
fn initialize_requires_total_dimensions() {
    let mut grid = FftGrid2D::<f64>::new(9, 9, 2, 2, false);
    let err = grid.initialize(&filled_grid(9, 9)).unwrap_err();
    assert_eq!(
        err,
        GridError::DimensionMismatch {
            expected: vec![12, 12],
            actual: vec![9, 9],
        }
    );
}

#[test]
fn impulse_at_the_origin_has_a_flat_spectrum() {
    let backend = NaiveDftBackend;
    let mut grid = FftGrid2D::new(6, 5, 0, 0, false);
    *grid.real_mut(0, 0) = 1.0;
    grid.forward_fft(&backend);
    for j in 0..grid.shape().complex_nj() {
        for i in 0..grid.shape().complex_ni() {
            let c = grid.complex(i, j);
            assert!((c.re - 1.0).abs() < 1e-9 && c.im.abs() < 1e-9);
        }
    }

    grid.inverse_fft(&backend);
    for (idx, &v) in grid.real_data().iter().enumerate() {
        let expected = if idx == 0 { 1.0 } else { 0.0 };
        assert!((v - expected).abs() < 1e-9);
    }
}

#[test]
fn real_and_complex_copies_match_their_regions() {
    let backend = NaiveDftBackend;
    let mut grid = FftGrid2D::new(4, 3, 2, 2, false);
    let s = grid.shape();
    for j in 0..3 {
        for i in 0..4 {
            *grid.real_mut(i, j) = (i + j) as f64;
        }
    }
    let real_copy = grid.real_grid();
    assert_eq!((real_copy.ni(), real_copy.nj()), (4, 3));
    assert_eq!(real_copy[(1, 2)], grid.real(1, 2));

    grid.forward_fft(&backend);
    let complex_copy = grid.complex_grid();
    assert_eq!(
        (complex_copy.ni(), complex_copy.nj()),
        (s.complex_ni(), s.complex_nj())
    );
    assert_eq!(complex_copy[(1, 1)], grid.complex(1, 1));
}

#[test]
fn unit_impulse_is_the_convolution_identity() {
    let backend = NaiveDftBackend;
    let mut grid = FftGrid2D::new(8, 7, 0, 0, false);
    let values = filled_grid(8, 7);
    grid.initialize(&values).unwrap();

    let mut filter = FftGrid2D::new(8, 7, 0, 0, false);
    *filter.real_mut(0, 0) = 1.0;

    grid.convolve(&mut filter, &backend).unwrap();
    for (orig, after) in values.as_slice().iter().zip(grid.real_data()) {
        assert!((orig - after).abs() < 1e-9);
    }
}

#[test]
fn covariance_convolution_applied_twice_matches_plain_convolution() {
    let backend = NaiveDftBackend;
    let c = 9.0;

    let values = filled_grid(8, 7);
    let mut twice = FftGrid2D::new(8, 7, 0, 0, false);
    let mut once = FftGrid2D::new(8, 7, 0, 0, false);
    twice.initialize(&values).unwrap();
    once.initialize(&values).unwrap();

    let mut f1 = FftGrid2D::new(8, 7, 0, 0, false);
    *f1.real_mut(0, 0) = c;
    let mut f2 = FftGrid2D::new(8, 7, 0, 0, false);
    *f2.real_mut(0, 0) = c;
    let mut f3 = FftGrid2D::new(8, 7, 0, 0, false);
    *f3.real_mut(0, 0) = c;

    twice.convolve_covariance(&mut f1, &backend).unwrap();
    twice.convolve_covariance(&mut f2, &backend).unwrap();
    once.convolve(&mut f3, &backend).unwrap();

    for (a, b) in twice.real_data().iter().zip(once.real_data()) {
        assert!((a - b).abs() < 1e-8);
    }
}

#[test]
fn convolution_rejects_grids_with_different_totals() {
    let backend = NaiveDftBackend;
    let mut grid = FftGrid2D::<f64>::new(8, 7, 0, 0, false);
    let mut filter = FftGrid2D::<f64>::new(8, 8, 0, 0, false);
    let err = grid.convolve(&mut filter, &backend).unwrap_err();
    assert_eq!(
        err,
        GridError::OperandMismatch {
            lhs: vec![8, 7],
            rhs: vec![8, 8],
        }
    );
}

#[test]
#[should_panic]
fn real_accessor_rejects_padding_cells() {
    let grid = FftGrid2D::<f64>::new(6, 5, 2, 2, false);
    grid.real(0, 5);
}
