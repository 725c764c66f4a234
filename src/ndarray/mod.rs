//! Module for the implementations using the ndarray backend. Contains the conversions between
//! the crate's flat column-major storage and `ndarray` types, so cost/constraint code working
//! with `Array2` Jacobians can feed the mappings without reshaping.

use crate::{ColumnMatrix, MappingError};
use ndarray::prelude::*;
use ndarray::ShapeBuilder;
use num_traits::Float;

/// Converts a [ColumnMatrix] into a column-major `Array2`.
pub fn to_array2<F: Float>(matrix: &ColumnMatrix<F>) -> Result<Array2<F>, MappingError> {
    Ok(Array2::from_shape_vec(
        matrix.dims().f(),
        matrix.as_slice().to_vec(),
    )?)
}

/// Converts an `ndarray` view into a [ColumnMatrix], accepting any memory layout.
pub fn from_array2<F: Float>(array: ArrayView2<'_, F>) -> Result<ColumnMatrix<F>, MappingError> {
    let (rows, cols) = array.dim();
    // iterating the transpose in logical order yields the column-major elements
    let data = array.t().iter().cloned().collect();
    ColumnMatrix::from_vec(data, rows, cols)
}
