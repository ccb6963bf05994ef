//! Size records coupling logical grid dimensions to padded totals.
//!
//! A shape derives its total (padded) sizes from the logical sizes plus a
//! padding hint via [`find_padded_size`](crate::padding::find_padded_size).
//! The first axis is forced even because the real-input transform stores
//! only `ni_tot/2 + 1` complex elements along it. All index maps are
//! column-major: the first axis varies fastest.

use serde::{Deserialize, Serialize};

use crate::padding::find_padded_size;

/// Logical and padded sizes of a 2D transform grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedShape2 {
    pub ni: usize,
    pub nj: usize,
    pub ni_tot: usize,
    pub nj_tot: usize,
}

impl PaddedShape2 {
    pub fn with_padding(ni: usize, nj: usize, padding_ni: usize, padding_nj: usize) -> Self {
        Self {
            ni,
            nj,
            ni_tot: find_padded_size(ni + padding_ni, true),
            nj_tot: find_padded_size(nj + padding_nj, false),
        }
    }

    /// Number of real samples over the total (padded) grid.
    pub fn n_total(&self) -> usize {
        self.ni_tot * self.nj_tot
    }

    /// Half-spectrum extent along the first axis.
    pub fn complex_ni(&self) -> usize {
        self.ni_tot / 2 + 1
    }

    pub fn complex_nj(&self) -> usize {
        self.nj_tot
    }

    pub fn n_complex(&self) -> usize {
        self.complex_ni() * self.complex_nj()
    }

    #[inline]
    pub fn real_idx(&self, i: usize, j: usize) -> usize {
        i + j * self.ni_tot
    }

    #[inline]
    pub fn complex_idx(&self, i: usize, j: usize) -> usize {
        i + j * self.complex_ni()
    }
}

/// Logical and padded sizes of a 3D transform grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedShape3 {
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
    pub ni_tot: usize,
    pub nj_tot: usize,
    pub nk_tot: usize,
}

impl PaddedShape3 {
    pub fn with_padding(
        ni: usize,
        nj: usize,
        nk: usize,
        padding_ni: usize,
        padding_nj: usize,
        padding_nk: usize,
    ) -> Self {
        Self {
            ni,
            nj,
            nk,
            ni_tot: find_padded_size(ni + padding_ni, true),
            nj_tot: find_padded_size(nj + padding_nj, false),
            nk_tot: find_padded_size(nk + padding_nk, false),
        }
    }

    /// Number of real samples over the total (padded) grid.
    pub fn n_total(&self) -> usize {
        self.ni_tot * self.nj_tot * self.nk_tot
    }

    /// Half-spectrum extent along the first axis.
    pub fn complex_ni(&self) -> usize {
        self.ni_tot / 2 + 1
    }

    pub fn complex_nj(&self) -> usize {
        self.nj_tot
    }

    pub fn complex_nk(&self) -> usize {
        self.nk_tot
    }

    pub fn n_complex(&self) -> usize {
        self.complex_ni() * self.complex_nj() * self.complex_nk()
    }

    #[inline]
    pub fn real_idx(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.ni_tot + k * self.ni_tot * self.nj_tot
    }

    /// Index into the total grid with signed, wrapping indices.
    ///
    /// A negative index `i` addresses cell `ni_tot + i`, so a kernel
    /// centered at the origin can be written with offsets in
    /// `-n_tot < i < n_tot`.
    #[inline]
    pub fn cyclic_idx(&self, i: isize, j: isize, k: isize) -> usize {
        let ni = self.ni_tot as isize;
        let nj = self.nj_tot as isize;
        let nk = self.nk_tot as isize;
        assert!(
            i > -ni && i < ni && j > -nj && j < nj && k > -nk && k < nk,
            "cyclic index ({i}, {j}, {k}) outside ±({ni}, {nj}, {nk})"
        );
        let i = if i < 0 { i + ni } else { i } as usize;
        let j = if j < 0 { j + nj } else { j } as usize;
        let k = if k < 0 { k + nk } else { k } as usize;
        self.real_idx(i, j, k)
    }

    #[inline]
    pub fn complex_idx(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.complex_ni() + k * self.complex_ni() * self.complex_nj()
    }
}
