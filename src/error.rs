//! Errors reported by vector operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Vector dimensions do not match: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
}

/// Returns `expected` if the two dimensions agree, and a
/// [`VectorError::DimensionMismatch`] otherwise.
pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<usize> {
    if found != expected {
        log::debug!("Vector dimension mismatch: expected {expected}, found {found}");
        return Err(VectorError::DimensionMismatch { expected, found });
    }
    Ok(expected)
}

/// Returns `index` if it lies within `[0, dimension)`, and a
/// [`VectorError::IndexOutOfRange`] otherwise.
pub(crate) fn check_index(index: usize, dimension: usize) -> Result<usize> {
    if index >= dimension {
        log::debug!("Index {index} out of range for vector dimension {dimension}");
        return Err(VectorError::IndexOutOfRange { index, dimension });
    }
    Ok(index)
}
