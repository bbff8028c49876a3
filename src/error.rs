/// Errors produced by fallible `BigUint` operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("attempted to divide by zero")]
    DivideByZero,
    #[error("invalid decimal digit {found:?} at position {position}")]
    InvalidFormat { found: char, position: usize },
    #[error("invalid base {radix} digit {found:?} at position {position}")]
    MalformedDigits { radix: u32, found: char, position: usize },
    #[error("unsupported base {0}, expected 2 to 36 or 64")]
    UnsupportedBase(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
