//! Norms, distances and equality.

use super::Vector;
use crate::{
    error::{self, Result},
    num::Float,
};

/// Two vectors are equal when they have the same dimension and every pair of
/// corresponding components compares exactly equal. No tolerance is applied,
/// so a vector containing NaN is never equal to anything. Use the
/// [`approx`] traits for tolerant comparison.
impl<F: Float> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a == b)
    }
}

impl<F: Float> Vector<F> {
    /// Computes the square of the Euclidean distance between this vector and
    /// `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ.
    pub fn squared_distance(&self, other: &Self) -> Result<F> {
        self.zip_sum(other, |a, b| {
            let delta = a - b;
            delta * delta
        })
    }

    /// Computes the Euclidean distance between this vector and `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ.
    pub fn distance(&self, other: &Self) -> Result<F> {
        self.squared_distance(other).map(F::sqrt)
    }

    /// Computes the Manhattan (taxicab) distance between this vector and
    /// `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimension of `other` differs from the dimension of this vector.
    pub fn manhattan_distance(&self, other: &Self) -> Result<F> {
        let dimension = self.dimension();
        error::check_dimension(dimension, other.dimension())?;

        let mut distance = F::ZERO;
        for (&a, &b) in self.components.iter().zip(&other.components) {
            distance += (a - b).abs();
        }
        Ok(distance)
    }

    /// Computes the square of the Euclidean norm of the vector.
    pub fn norm_squared(&self) -> F {
        self.sum(|component| component * component)
    }

    /// Computes the Euclidean norm (length) of the vector.
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the Manhattan norm of the vector, the sum of the absolute
    /// values of its components.
    pub fn manhattan_norm(&self) -> F {
        self.sum(F::abs)
    }
}
