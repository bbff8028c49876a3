use super::BigUint;

use std::sync::LazyLock;

/// Alphabet used for every base up to 36
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
/// Alphabet used for base 64
pub const BASE64_DIGITS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The values 0 through 10, built once and shared
pub static SMALL: LazyLock<[BigUint; 11]> = LazyLock::new(|| std::array::from_fn(|i| BigUint::new(i as u8)));
