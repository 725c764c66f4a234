/*! Flat, column-major matrix storage shared by all mapping operations.
 *
 * Jacobian assembly splices and concatenates column blocks per body; with column-major
 * storage every block is a contiguous slice, so assembly stays plain slice copies without a
 * backend dependency. Backends (e.g. `ndarray`) convert without reshaping.
 */

use crate::MappingError;
use num_traits::Float;

/// Column-major matrix over a generic scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMatrix<F: Float> {
    data: Vec<F>,
    rows: usize,
    cols: usize,
}

impl<F: Float> ColumnMatrix<F> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![F::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Wraps a column-major buffer. The buffer length must be `rows * cols`.
    pub fn from_vec(data: Vec<F>, rows: usize, cols: usize) -> Result<Self, MappingError> {
        if data.len() != rows * cols {
            Err(MappingError::DimensionMismatch {
                expected: rows * cols,
                actual: data.len(),
            })
        } else {
            Ok(Self { data, rows, cols })
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Column-major storage of the matrix
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> F {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[col * self.rows + row]
    }

    pub fn set(&mut self, row: usize, col: usize, value: F) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[col * self.rows + row] = value;
    }

    /// Copy of the `width` columns starting at column `start`
    pub fn block(&self, start: usize, width: usize) -> Self {
        let offset = start * self.rows;
        Self {
            data: self.data[offset..offset + width * self.rows].to_vec(),
            rows: self.rows,
            cols: width,
        }
    }

    /// Writes `src` over the columns starting at column `start`
    pub fn assign(&mut self, start: usize, src: &Self) {
        debug_assert_eq!(self.rows, src.rows);
        let offset = start * self.rows;
        self.data[offset..offset + src.data.len()].copy_from_slice(&src.data);
    }
}
