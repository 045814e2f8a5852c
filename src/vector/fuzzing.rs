//! Fuzz testing of the vector operations.

use super::Vector;
use crate::Result;

/// Checks that the fallible operations succeed exactly when the dimensions
/// agree, that in-place operations agree with their pure counterparts and
/// that a failed in-place operation leaves its target untouched.
pub fn fuzz_test_vector_operations(a: Vector, b: Vector, factor: f64) {
    let dimensions_agree = a.dimension() == b.dimension();

    let sum = a.try_add(&b);
    let difference = a.try_sub(&b);
    let reversed_difference = a.check_same_dimension(&b).and_then(|_| b.try_sub(&a));
    assert_eq!(sum.is_ok(), dimensions_agree);
    assert_eq!(difference.is_ok(), dimensions_agree);
    assert_eq!(a.dot(&b).is_ok(), dimensions_agree);
    assert_eq!(a.squared_distance(&b).is_ok(), dimensions_agree);
    assert_eq!(a.manhattan_distance(&b).is_ok(), dimensions_agree);

    let mut target = a.clone();
    let outcome = target.try_add_assign(&b);
    assert_in_place_outcome(&a, &target, outcome, &sum);

    let mut target = a.clone();
    let outcome = target.try_sub_assign(&b);
    assert_in_place_outcome(&a, &target, outcome, &difference);

    let mut target = a.clone();
    let outcome = target.try_sub_from_assign(&b);
    assert_in_place_outcome(&a, &target, outcome, &reversed_difference);

    let mut scaled = a.clone();
    scaled.scale(factor);
    assert!(bitwise_eq(&scaled, &a.scaled(factor)));

    let mut negated = a.clone();
    negated.negate();
    assert!(bitwise_eq(&negated, &a.negated()));

    assert_eq!(
        a.cross(&b).is_ok(),
        a.dimension() == 3 && b.dimension() == 3
    );

    if !a.is_empty() {
        assert!(a.min_component_index() < a.dimension());
        assert!(a.max_component_index() < a.dimension());
    }
}

fn assert_in_place_outcome(
    original: &Vector,
    target: &Vector,
    outcome: Result<()>,
    pure: &Result<Vector>,
) {
    match (outcome, pure) {
        (Ok(()), Ok(pure)) => assert!(bitwise_eq(target, pure)),
        (Err(in_place_error), Err(pure_error)) => {
            assert_eq!(&in_place_error, pure_error);
            assert!(bitwise_eq(target, original));
        }
        _ => panic!("Pure and in-place operations disagree on success"),
    }
}

/// Like `==`, but NaN components compare equal to each other.
fn bitwise_eq(a: &Vector, b: &Vector) -> bool {
    a.dimension() == b.dimension()
        && a.components()
            .iter()
            .zip(b.components())
            .all(|(x, y)| x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()))
}
