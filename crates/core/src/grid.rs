//! Plain column-major containers and the shared error type.

use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Errors reported by grid construction and spectral operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("data has the wrong dimensions: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("operand grids have different total sizes: {lhs:?} vs {rhs:?}")]
    OperandMismatch { lhs: Vec<usize>, rhs: Vec<usize> },
}

/// Dense 2D array, column-major (first index fastest).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    ni: usize,
    nj: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn new(ni: usize, nj: usize) -> Self {
        Self {
            ni,
            nj,
            data: vec![T::default(); ni * nj],
        }
    }
}

impl<T> Grid2D<T> {
    pub fn from_vec(ni: usize, nj: usize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != ni * nj {
            return Err(GridError::DimensionMismatch {
                expected: vec![ni, nj],
                actual: vec![data.len()],
            });
        }
        Ok(Self { ni, nj, data })
    }

    pub fn ni(&self) -> usize {
        self.ni
    }

    pub fn nj(&self) -> usize {
        self.nj
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.ni && j < self.nj);
        i + j * self.ni
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.idx(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let idx = self.idx(i, j);
        &mut self.data[idx]
    }
}

/// Dense 3D array, column-major (first index fastest).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3D<T> {
    ni: usize,
    nj: usize,
    nk: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid3D<T> {
    pub fn new(ni: usize, nj: usize, nk: usize) -> Self {
        Self {
            ni,
            nj,
            nk,
            data: vec![T::default(); ni * nj * nk],
        }
    }
}

impl<T> Grid3D<T> {
    pub fn from_vec(ni: usize, nj: usize, nk: usize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != ni * nj * nk {
            return Err(GridError::DimensionMismatch {
                expected: vec![ni, nj, nk],
                actual: vec![data.len()],
            });
        }
        Ok(Self { ni, nj, nk, data })
    }

    pub fn ni(&self) -> usize {
        self.ni
    }

    pub fn nj(&self) -> usize {
        self.nj
    }

    pub fn nk(&self) -> usize {
        self.nk
    }

    #[inline]
    fn idx(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.ni && j < self.nj && k < self.nk);
        i + j * self.ni + k * self.ni * self.nj
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize, usize)> for Grid3D<T> {
    type Output = T;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.data[self.idx(i, j, k)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Grid3D<T> {
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        let idx = self.idx(i, j, k);
        &mut self.data[idx]
    }
}
