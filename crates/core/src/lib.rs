//! Core types and algorithms for the padded spectral grid engine.
//!
//! Grids couple a real-domain buffer to the non-redundant half of its
//! spectrum; convolution and covariance shaping are pointwise products in
//! the spectral domain. The transform itself is a collaborator behind
//! [`backend::TransformBackend`].

pub mod backend;
pub mod fft1d;
pub mod fftgrid2d;
pub mod fftgrid3d;
pub mod grid;
pub mod padding;
pub mod shape;

#[cfg(test)]
mod _tests_fftgrid2d;
#[cfg(test)]
mod _tests_naive_backend;
