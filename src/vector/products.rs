//! Dot and cross products.

use super::Vector;
use crate::{
    error::{self, Result},
    num::Float,
};

impl<F: Float> Vector<F> {
    /// Computes the dot product of this vector with `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<F> {
        self.zip_sum(other, |a, b| a * b)
    }

    /// Computes the cross product of this vector with `other`. Both vectors
    /// must be 3-dimensional.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// either vector does not have exactly three components.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        error::check_dimension(3, self.dimension())?;
        error::check_dimension(3, other.dimension())?;

        let [x0, y0, z0] = [self[0], self[1], self[2]];
        let [x1, y1, z1] = [other[0], other[1], other[2]];

        Ok(Self::new(vec![
            y0 * z1 - y1 * z0,
            z0 * x1 - z1 * x0,
            x0 * y1 - x1 * y0,
        ]))
    }
}
