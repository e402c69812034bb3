//! Immutable row-major matrix of `f64`.
//!
//! - `Matrix::new(rows, cols, elements)` checks `elements.len() == rows * cols`
//! - `row_view()` / `col_view()` are read-only projections of the backing store
//! - every transformation (`with_row`, `map_rows`, arithmetic, reduction)
//!   builds a fresh backing `Vec`; nothing writes through a view

use std::fmt;
use std::ops::Index;
use std::slice::ChunksExact;

use crate::core::algebra::render::render_matrix;
use crate::core::error::{MatrixError, MatrixResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, elements: Vec<f64>) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::dimension(&format!(
                "matrix dimensions must be positive, got {} x {}",
                rows, cols
            )));
        }
        let count = element_count(rows, cols)?;
        if elements.len() != count {
            return Err(MatrixError::dimension(&format!(
                "a {} x {} matrix needs {} elements, got {}",
                rows,
                cols,
                count,
                elements.len()
            )));
        }
        Ok(Self { rows, cols, elements })
    }

    /// Builds a matrix from nested rows; every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> MatrixResult<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.iter().any(|r| r.as_ref().len() != cols) {
            return Err(MatrixError::dimension("all rows must have the same length"));
        }
        let elements = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(rows.len(), cols, elements)
    }

    pub fn identity(size: usize) -> MatrixResult<Self> {
        let mut elements = vec![0.0; element_count(size, size)?];
        for i in 0..size {
            elements[i * size + i] = 1.0;
        }
        Self::new(size, size, elements)
    }

    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        Self::new(rows, cols, vec![0.0; element_count(rows, cols)?])
    }

    /// Single-column matrix holding `values`.
    pub fn column_vector(values: &[f64]) -> MatrixResult<Self> {
        Self::new(values.len(), 1, values.to_vec())
    }

    /// Used by algorithms whose output shape is known to be consistent.
    pub(crate) fn from_parts(rows: usize, cols: usize, elements: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && elements.len() == rows * cols);
        Self { rows, cols, elements }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.cols;
        &self.elements[start..start + self.cols]
    }

    pub fn row_view(&self) -> ChunksExact<'_, f64> {
        self.elements.chunks_exact(self.cols)
    }

    pub fn column(&self, index: usize) -> Vec<f64> {
        self.elements.iter().skip(index).step_by(self.cols).copied().collect()
    }

    pub fn col_view(&self) -> Vec<Vec<f64>> {
        (0..self.cols).map(|j| self.column(j)).collect()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix has a single row or a single column.
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub fn dimensions_equal(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn dim(&self) -> String {
        format!("{} x {}", self.rows, self.cols)
    }

    /// Copy of this matrix with row `index` replaced by `row`.
    pub fn with_row(&self, index: usize, row: &[f64]) -> Matrix {
        debug_assert_eq!(row.len(), self.cols);
        let mut elements = self.elements.clone();
        let start = index * self.cols;
        elements[start..start + self.cols].copy_from_slice(row);
        Matrix::from_parts(self.rows, self.cols, elements)
    }

    /// Applies `f` to each row (with its index) and collects the results into
    /// a new matrix of the same shape.
    pub fn map_rows<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(usize, &[f64]) -> Vec<f64>,
    {
        let mut elements = Vec::with_capacity(self.elements.len());
        for (i, row) in self.row_view().enumerate() {
            let mapped = f(i, row);
            debug_assert_eq!(mapped.len(), self.cols);
            elements.extend(mapped);
        }
        Matrix::from_parts(self.rows, self.cols, elements)
    }

    /// Elementwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.dimensions_equal(other)
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn render(&self) -> String {
        render_matrix(self)
    }
}

/// `rows * cols`, or a `DimensionError` when the product overflows `usize`.
pub fn element_count(rows: usize, cols: usize) -> MatrixResult<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        MatrixError::dimension(&format!("{} x {} matrix is too large", rows, cols))
    })
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.elements[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_matrix(self))
    }
}
