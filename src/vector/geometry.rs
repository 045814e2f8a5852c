//! Geometric helpers: axis versors, orthant reflection, extremal components,
//! normalization and box separation.

use super::Vector;
use crate::{
    error::{self, Result},
    num::Float,
};

impl<F: Float> Vector<F> {
    /// Creates the unit vector of the given dimension pointing along the
    /// coordinate axis with index `axis`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`](crate::VectorError::IndexOutOfRange) if
    /// `axis` is not smaller than `dimension`.
    pub fn axis_versor(dimension: usize, axis: usize) -> Result<Self> {
        error::check_index(axis, dimension)?;
        let mut versor = Self::zeros(dimension);
        versor[axis] = F::ONE;
        Ok(versor)
    }

    /// Computes the reflection of the vector into the first orthant, where
    /// every component is non-negative.
    pub fn first_orthant_reflection(&self) -> Self {
        self.mapped(F::abs)
    }

    /// Reflects the vector into the first orthant in place.
    pub fn reflect_into_first_orthant(&mut self) {
        self.apply(|a| *a = a.abs());
    }

    /// Returns the index of the component with the smallest absolute value.
    /// When several components share that value the lowest index wins. A
    /// vector without components gives zero.
    pub fn min_component_index(&self) -> usize {
        let Some(first) = self.components.first() else {
            return 0;
        };

        let mut best = 0;
        let mut min = first.abs();
        for (index, component) in self.components.iter().enumerate().skip(1) {
            let magnitude = component.abs();
            if magnitude < min {
                min = magnitude;
                best = index;
            }
        }
        best
    }

    /// Returns the index of the component with the largest absolute value.
    /// When several components share that value the lowest index wins. A
    /// vector without components, or with only zero components, gives zero.
    pub fn max_component_index(&self) -> usize {
        let mut best = 0;
        let mut max = F::ZERO;
        for (index, component) in self.components.iter().enumerate() {
            let magnitude = component.abs();
            if magnitude > max {
                max = magnitude;
                best = index;
            }
        }
        best
    }

    /// Computes the unit vector pointing in the same direction as this vector.
    ///
    /// The norm is not checked. For a vector with zero norm the components
    /// of the result are NaN.
    pub fn normalized_unchecked(&self) -> Self {
        self.scaled(inverse_norm(self))
    }

    /// Normalizes the vector in place. See [`Self::normalized_unchecked`].
    pub fn normalize_unchecked(&mut self) {
        let inverse_norm = inverse_norm(self);
        self.scale(inverse_norm);
    }

    /// Computes the largest possible squared distance between a point in the
    /// axis-aligned box spanned by the opposite corners `a0` and `a1` and a
    /// point in the box spanned by `b0` and `b1`. The corners of each pair may
    /// be given in any order along each axis.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// any corner has a different dimension than `a0`.
    pub fn max_squared_distance_between_boxes(
        a0: &Self,
        a1: &Self,
        b0: &Self,
        b1: &Self,
    ) -> Result<F> {
        let dimension = a0.dimension();
        for corner in [a1, b0, b1] {
            error::check_dimension(dimension, corner.dimension())?;
        }

        let mut max_squared_distance = F::ZERO;
        for (((&corner_a0, &corner_a1), &corner_b0), &corner_b1) in a0
            .components
            .iter()
            .zip(&a1.components)
            .zip(&b0.components)
            .zip(&b1.components)
        {
            let (lower_a, upper_a) = ordered(corner_a0, corner_a1);
            let (lower_b, upper_b) = ordered(corner_b0, corner_b1);

            let d0 = lower_b - upper_a;
            let d1 = upper_b - lower_a;
            let d0_squared = d0 * d0;
            let d1_squared = d1 * d1;

            max_squared_distance += if d0_squared > d1_squared {
                d0_squared
            } else {
                d1_squared
            };
        }
        Ok(max_squared_distance)
    }
}

fn inverse_norm<F: Float>(vector: &Vector<F>) -> F {
    let norm = vector.norm();
    if cfg!(debug_assertions) && norm.is_zero() {
        log::warn!("Normalizing a vector with zero norm, the result will not be finite");
    }
    F::ONE / norm
}

fn ordered<F: Float>(a: F, b: F) -> (F, F) {
    if b > a { (a, b) } else { (b, a) }
}
