//! Element-wise arithmetic.

use super::Vector;
use crate::{error::Result, num::Float};

impl<F: Float> Vector<F> {
    /// Computes the sum of this vector and `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_mapped(other, |a, b| a + b)
    }

    /// Adds `other` to this vector.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ, in which case this vector is left unmodified.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_apply(other, |a, b| *a += b)
    }

    /// Computes this vector minus `other`.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_mapped(other, |a, b| a - b)
    }

    /// Subtracts `other` from this vector.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ, in which case this vector is left unmodified.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_apply(other, |a, b| *a -= b)
    }

    /// Replaces this vector with `other` minus this vector, without
    /// allocating.
    ///
    /// # Errors
    /// Returns [`DimensionMismatch`](crate::VectorError::DimensionMismatch) if
    /// the dimensions differ, in which case this vector is left unmodified.
    pub fn try_sub_from_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_apply(other, |a, b| *a = b - *a)
    }

    /// Computes the negated vector.
    pub fn negated(&self) -> Self {
        self.mapped(|a| -a)
    }

    /// Negates each component in place.
    pub fn negate(&mut self) {
        self.apply(|a| *a = -*a);
    }

    /// Computes the vector with every component multiplied by `factor`.
    pub fn scaled(&self, factor: F) -> Self {
        self.mapped(|a| factor * a)
    }

    /// Multiplies each component by `factor` in place.
    pub fn scale(&mut self, factor: F) {
        self.apply(|a| *a = factor * *a);
    }
}

impl_unary_op!(Neg, neg, [F: Float], Vector<F>, Vector<F>, |a| { a.negated() });

impl_binop!(Mul, mul, [F: Float], Vector<F>, F, Vector<F>, |a, b| {
    a.scaled(*b)
});

impl_binop!(Mul, mul, [], f32, Vector<f32>, Vector<f32>, |a, b| {
    b.scaled(*a)
});

impl_binop!(Mul, mul, [], f64, Vector<f64>, Vector<f64>, |a, b| {
    b.scaled(*a)
});

impl_binop_assign!(MulAssign, mul_assign, [F: Float], Vector<F>, F, |a, b| {
    a.scale(*b);
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{VectorError, vector::strategies::vector_pair_strategy};
    use proptest::prelude::*;

    #[test]
    fn adding_vectors_works() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);
        assert_eq!(a.try_add(&b), Ok(Vector::from([5.0, 7.0, 9.0])));
        assert_eq!(a, Vector::from([1.0, 2.0, 3.0]));
        assert_eq!(b, Vector::from([4.0, 5.0, 6.0]));
    }

    #[test]
    fn adding_empty_vectors_gives_empty_vector() {
        let a = Vector::<f64>::default();
        assert_eq!(a.try_add(&a), Ok(Vector::default()));
    }

    #[test]
    fn adding_vectors_of_different_dimension_fails() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0]);
        assert_eq!(
            a.try_add(&b),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn adding_vector_in_place_works() {
        let mut a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);
        a.try_add_assign(&b).unwrap();
        assert_eq!(a, Vector::from([5.0, 7.0, 9.0]));
        assert_eq!(b, Vector::from([4.0, 5.0, 6.0]));
    }

    #[test]
    fn failed_in_place_addition_leaves_vector_unmodified() {
        let mut a = Vector::from([1.0, 2.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);
        assert!(a.try_add_assign(&b).is_err());
        assert_eq!(a, Vector::from([1.0, 2.0]));
    }

    #[test]
    fn subtracting_vectors_works() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 6.0, 8.0]);
        assert_eq!(a.try_sub(&b), Ok(Vector::from([-3.0, -4.0, -5.0])));
    }

    #[test]
    fn subtracting_vectors_of_different_dimension_fails() {
        let a = Vector::from([1.0]);
        let b = Vector::from([4.0, 5.0]);
        assert!(matches!(
            a.try_sub(&b),
            Err(VectorError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn subtracting_vector_in_place_works() {
        let mut a = Vector::from([1.0, 2.0, 3.0]);
        a.try_sub_assign(&Vector::from([0.5, 0.5, 0.5])).unwrap();
        assert_eq!(a, Vector::from([0.5, 1.5, 2.5]));
    }

    #[test]
    fn failed_in_place_subtraction_leaves_vector_unmodified() {
        let mut a = Vector::from([1.0, 2.0]);
        assert!(a.try_sub_assign(&Vector::from([1.0])).is_err());
        assert!(a.try_sub_from_assign(&Vector::from([1.0])).is_err());
        assert_eq!(a, Vector::from([1.0, 2.0]));
    }

    #[test]
    fn subtracting_from_other_vector_in_place_works() {
        let mut a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([10.0, 10.0, 10.0]);
        a.try_sub_from_assign(&b).unwrap();
        assert_eq!(a, Vector::from([9.0, 8.0, 7.0]));
        assert_eq!(b, Vector::from([10.0, 10.0, 10.0]));
    }

    #[test]
    fn negating_vector_works() {
        let mut a = Vector::from([1.0, -2.0, 0.0]);
        assert_eq!(a.negated(), Vector::from([-1.0, 2.0, 0.0]));
        assert_eq!(-&a, Vector::from([-1.0, 2.0, 0.0]));
        a.negate();
        assert_eq!(a, Vector::from([-1.0, 2.0, 0.0]));
        assert_eq!(-a, Vector::from([1.0, -2.0, 0.0]));
    }

    #[test]
    fn scaling_vector_works() {
        let mut a = Vector::from([1.0, -2.0, 3.0]);
        let expected = Vector::from([2.0, -4.0, 6.0]);
        assert_eq!(a.scaled(2.0), expected);
        assert_eq!(&a * 2.0, expected);
        assert_eq!(2.0_f64 * &a, expected);
        assert_eq!(&a * &2.0, expected);
        a.scale(2.0);
        assert_eq!(a, expected);
        a *= 0.5;
        assert_eq!(a, Vector::from([1.0, -2.0, 3.0]));
    }

    #[test]
    fn scaling_single_precision_vector_works() {
        let a = Vector::from([1.0_f32, 2.0]);
        assert_eq!(3.0_f32 * a, Vector::from([3.0_f32, 6.0]));
    }

    proptest! {
        #[test]
        fn addition_is_commutative((a, b) in vector_pair_strategy(8)) {
            prop_assert_eq!(a.try_add(&b).unwrap(), b.try_add(&a).unwrap());
        }
    }

    proptest! {
        #[test]
        fn subtraction_is_anti_symmetric((a, b) in vector_pair_strategy(8)) {
            prop_assert_eq!(a.try_sub(&b).unwrap(), b.try_sub(&a).unwrap().negated());
        }
    }

    proptest! {
        #[test]
        fn in_place_operations_agree_with_pure_ones((a, b) in vector_pair_strategy(8), factor in -10.0..10.0_f64) {
            let mut sum = a.clone();
            sum.try_add_assign(&b).unwrap();
            prop_assert_eq!(&sum, &a.try_add(&b).unwrap());

            let mut difference = a.clone();
            difference.try_sub_assign(&b).unwrap();
            prop_assert_eq!(&difference, &a.try_sub(&b).unwrap());

            let mut reversed_difference = a.clone();
            reversed_difference.try_sub_from_assign(&b).unwrap();
            prop_assert_eq!(&reversed_difference, &b.try_sub(&a).unwrap());

            let mut scaled = a.clone();
            scaled.scale(factor);
            prop_assert_eq!(&scaled, &a.scaled(factor));
        }
    }
}
