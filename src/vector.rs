//! Vectors of arbitrary dimension.

mod arithmetic;
mod geometry;
mod metrics;
mod products;

#[cfg(feature = "arbitrary")]
pub mod fuzzing;

use crate::{
    error::{self, Result},
    num::Float,
};
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Index, IndexMut};

/// A real-valued vector whose dimension is fixed once it is created.
///
/// The dimension is the number of components and is not stored anywhere else.
/// Binary operations require their operands to have the same dimension and
/// return a [`DimensionMismatch`](crate::VectorError::DimensionMismatch) error
/// otherwise. Operations returning a new vector leave their operands
/// untouched, while the in-place variants overwrite the components of `self`
/// without reallocating them. A failed in-place operation leaves `self`
/// unmodified.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug)]
pub struct Vector<F = f64> {
    components: Vec<F>,
}

impl<F: Float> Vector<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(components: Vec<F>) -> Self {
        Self { components }
    }

    /// Creates a new vector of the given dimension with all zeros.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![F::ZERO; dimension])
    }

    /// The number of components in the vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Whether the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns a slice over the components.
    #[inline]
    pub fn components(&self) -> &[F] {
        &self.components
    }

    /// Returns a mutable slice over the components. The dimension can not be
    /// changed through it.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [F] {
        &mut self.components
    }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_components(self) -> Vec<F> {
        self.components
    }

    /// Returns the dimension shared by this vector and `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the two dimensions differ.
    #[inline]
    pub fn check_same_dimension(&self, other: &Self) -> Result<usize> {
        error::check_dimension(self.dimension(), other.dimension())
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(F) -> F) -> Self {
        Self::new(self.components.iter().copied().map(f).collect())
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components, after checking that the dimensions agree.
    pub(crate) fn zip_mapped(&self, other: &Self, mut f: impl FnMut(F, F) -> F) -> Result<Self> {
        self.check_same_dimension(other)?;
        Ok(Self::new(
            self.components
                .iter()
                .zip(&other.components)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    pub(crate) fn apply(&mut self, mut f: impl FnMut(&mut F)) {
        for component in &mut self.components {
            f(component);
        }
    }

    /// Applies the given closure to each component of this vector together with
    /// the corresponding component of `other`. Nothing is modified if the
    /// dimensions differ.
    pub(crate) fn zip_apply(&mut self, other: &Self, mut f: impl FnMut(&mut F, F)) -> Result<()> {
        self.check_same_dimension(other)?;
        for (a, &b) in self.components.iter_mut().zip(&other.components) {
            f(a, b);
        }
        Ok(())
    }

    /// Sums the given closure over each pair of corresponding components,
    /// after checking that the dimensions agree.
    pub(crate) fn zip_sum(&self, other: &Self, mut f: impl FnMut(F, F) -> F) -> Result<F> {
        self.check_same_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .fold(F::ZERO, |sum, (&a, &b)| sum + f(a, b)))
    }

    pub(crate) fn sum(&self, mut f: impl FnMut(F) -> F) -> F {
        self.components
            .iter()
            .fold(F::ZERO, |sum, &component| sum + f(component))
    }
}

impl<F> Default for Vector<F> {
    /// Creates a vector with no components.
    fn default() -> Self {
        Self {
            components: Vec::new(),
        }
    }
}

impl<F: Float> From<Vec<F>> for Vector<F> {
    #[inline]
    fn from(components: Vec<F>) -> Self {
        Self::new(components)
    }
}

impl<F: Float, const N: usize> From<[F; N]> for Vector<F> {
    #[inline]
    fn from(components: [F; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl<F> From<Vector<F>> for Vec<F> {
    #[inline]
    fn from(vector: Vector<F>) -> Self {
        vector.components
    }
}

impl<F> AsRef<[F]> for Vector<F> {
    #[inline]
    fn as_ref(&self) -> &[F] {
        &self.components
    }
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<F> IndexMut<usize> for Vector<F> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<F: Float> AbsDiffEq for Vector<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension() == other.dimension()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<F: Float> RelativeEq for Vector<F> {
    fn default_max_relative() -> Self::Epsilon {
        F::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.dimension() == other.dimension()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
