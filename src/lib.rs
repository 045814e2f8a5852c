//! Operations on real-valued vectors of arbitrary dimension.

#[macro_use]
mod macros;

pub mod error;
pub mod num;
pub mod vector;

pub use error::{Result, VectorError};
pub use num::Float;
pub use vector::Vector;
