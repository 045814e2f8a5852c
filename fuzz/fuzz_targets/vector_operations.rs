#![no_main]

use libfuzzer_sys::fuzz_target;
use realvec::vector::{Vector, fuzzing::fuzz_test_vector_operations};

fuzz_target!(|input: (Vector, Vector, f64)| {
    let (a, b, factor) = input;
    fuzz_test_vector_operations(a, b, factor);
});
