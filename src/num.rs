//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers traits useful for working with generic floating point vector
/// components.
pub trait Float:
    nt::Float + nt::NumAssign + fmt::Debug + approx::AbsDiffEq<Epsilon = Self> + approx::RelativeEq
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
