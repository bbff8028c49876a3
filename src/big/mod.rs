mod consts;
mod radix;
mod unsigned;

#[cfg(test)]
mod proptests;

pub use self::consts::*;
pub use self::unsigned::*;
