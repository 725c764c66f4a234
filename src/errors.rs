//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate.
///
/// Only construction-time validation and backend conversions produce errors; the
/// per-call mapping operations are precondition-checked (`debug_assert!`) hot paths.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("state size {x} does not match q + 2v for q = {q}, v = {v}")]
    NotTripleIntegrator { q: usize, v: usize, x: usize },
    #[error("wrong buffer length: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    // Errors specific to ndarray
    #[cfg(feature = "ndarray")]
    #[error("error raised by `ndarray`: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
}
