//! Arbitrary-precision unsigned integers stored as a normalized sequence of bits.

mod big;
mod error;

pub use self::big::*;
pub use self::error::*;
