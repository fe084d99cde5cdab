//! 5x5 homogeneous matrix for affine transforms of 4D points
//!
//! Storage is column-major: cell `(col, row)` lives at `row + 5 * col`.

use crate::Vec4;

const N: usize = 5;

/// 5x5 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix5 {
    cells: [f64; N * N],
}

impl Default for Matrix5 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix5 {
    pub const ZERO: Self = Self { cells: [0.0; N * N] };

    pub const IDENTITY: Self = Self {
        cells: [
            1.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Build from 25 values listed column by column
    #[inline]
    pub const fn from_cols_array(cells: [f64; N * N]) -> Self {
        Self { cells }
    }

    /// Build from five columns
    pub fn from_cols(cols: [[f64; N]; N]) -> Self {
        let mut m = Self::ZERO;
        for (c, col) in cols.iter().enumerate() {
            m.cells[N * c..N * (c + 1)].copy_from_slice(col);
        }
        m
    }

    /// Pure translation
    pub fn from_translation(offset: Vec4) -> Self {
        let mut m = Self::IDENTITY;
        for row in 0..4 {
            m.set_cell(4, row, offset[row]);
        }
        m
    }

    #[inline]
    pub fn as_cols_array(&self) -> &[f64; N * N] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> f64 {
        self.cells[row + N * col]
    }

    #[inline]
    pub fn set_cell(&mut self, col: usize, row: usize, value: f64) {
        self.cells[row + N * col] = value;
    }

    pub fn column(&self, col: usize) -> [f64; N] {
        let mut out = [0.0; N];
        out.copy_from_slice(&self.cells[N * col..N * (col + 1)]);
        out
    }

    /// Matrix product `self * other`
    pub fn dot_mat(&self, other: &Self) -> Self {
        let mut out = Self::ZERO;
        for (n, cell) in out.cells.iter_mut().enumerate() {
            let row = n % N;
            let col = n / N;
            for i in 0..N {
                *cell += self.cells[row + N * i] * other.cells[N * col + i];
            }
        }
        out
    }

    /// Inverse by Gauss-Jordan elimination on `[self | I]`.
    ///
    /// Pivots are taken from the diagonal as-is with no row swaps. A zero
    /// pivot propagates infinities and NaN into the result.
    pub fn inv(&self) -> Self {
        // Row-major working copy of the augmented matrix
        let mut rows = [[0.0; 2 * N]; N];
        for (r, row) in rows.iter_mut().enumerate() {
            for c in 0..N {
                row[c] = self.cell(c, r);
            }
            row[N + r] = 1.0;
        }

        for pivot in 0..N {
            let scale = 1.0 / rows[pivot][pivot];
            for value in rows[pivot].iter_mut() {
                *value *= scale;
            }

            let pivot_row = rows[pivot];
            for (r, row) in rows.iter_mut().enumerate() {
                if r == pivot {
                    continue;
                }
                let factor = row[pivot];
                for (value, p) in row.iter_mut().zip(pivot_row) {
                    *value -= factor * p;
                }
            }
        }

        let mut out = Self::ZERO;
        for (r, row) in rows.iter().enumerate() {
            for c in 0..N {
                out.set_cell(c, r, row[N + c]);
            }
        }
        out
    }

    /// Transpose
    pub fn transposed(&self) -> Self {
        let mut out = Self::ZERO;
        for c in 0..N {
            for r in 0..N {
                out.set_cell(r, c, self.cell(c, r));
            }
        }
        out
    }

    /// Apply to a point with an implicit fifth coordinate of 1
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        let h = [p.x, p.y, p.z, p.w, 1.0];
        let mut out = Vec4::ZERO;
        for row in 0..4 {
            out[row] = (0..N).map(|c| self.cell(c, row) * h[c]).sum();
        }
        out
    }

    /// Column-major `f32` copy for GPU uniforms
    pub fn to_cols_f32(&self) -> [f32; N * N] {
        self.cells.map(|c| c as f32)
    }
}

impl std::ops::Mul for Matrix5 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.dot_mat(&other)
    }
}
