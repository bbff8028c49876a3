use super::{
    consts::{BASE64_DIGITS, DIGITS, SMALL},
    unsigned::BitVec,
    BigUint
};
use crate::{Error, Result};

use num_traits::{Num, Zero};
use std::{fmt, str::FromStr};

fn malformed(radix: u32, found: char, position: usize) -> Error {
    tracing::debug!(radix, %found, position, "rejected malformed digit");
    Error::MalformedDigits { radix, found, position }
}
fn unsupported(radix: u32) -> Error {
    tracing::debug!(radix, "rejected unsupported base");
    Error::UnsupportedBase(radix)
}

/// `offset` is where `input` starts in the string the caller was given, so
/// error positions point into the original text.
fn parse_binary(input: &str, offset: usize) -> Result<BigUint> {
    let mut bits = BitVec::with_capacity(input.len());
    for (position, c) in input.char_indices() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(malformed(2, c, offset + position))
        }
    }
    bits.reverse();
    Ok(BigUint::from_bits(bits))
}
fn parse_hex(input: &str, offset: usize) -> Result<BigUint> {
    let mut bits = BitVec::with_capacity(input.len() * 4);
    for (position, c) in input.char_indices() {
        let nibble = c.to_digit(16).ok_or_else(|| malformed(16, c, offset + position))?;
        bits.extend((0..4).rev().map(|i| nibble >> i & 1 == 1));
    }
    bits.reverse();
    Ok(BigUint::from_bits(bits))
}
/// Halve a string of decimal digits in place, dropping the leading zero
/// this can produce
fn halve(digits: &mut Vec<u8>) {
    let mut carry = 0;
    for digit in digits.iter_mut() {
        let next = *digit % 2 * 5;
        *digit = *digit / 2 + carry;
        carry = next;
    }
    if digits.first() == Some(&0) {
        digits.remove(0);
    }
}
fn parse_decimal(input: &str, offset: usize) -> Result<BigUint> {
    let mut digits = Vec::with_capacity(input.len());
    for (position, c) in input.char_indices() {
        match c.to_digit(10) {
            Some(digit) => digits.push(digit as u8),
            None => {
                tracing::debug!(%c, position, "rejected non-decimal digit");
                return Err(Error::InvalidFormat {
                    found: c,
                    position: offset + position
                });
            }
        }
    }
    let leading = digits.iter().take_while(|&&digit| digit == 0).count();
    digits.drain(..leading);

    // Read the parity of the last digit, halve the whole string, and repeat.
    // Works on the digits themselves so the input length is never limited
    // by a native integer.
    let mut bits = BitVec::new();
    while let Some(&last) = digits.last() {
        bits.push(last % 2 == 1);
        halve(&mut digits);
    }
    Ok(BigUint::from_bits(bits))
}
fn parse_digits(input: &str, radix: u32, offset: usize) -> Result<BigUint> {
    // Zero renders as "0" in every base, even though '0' is the digit 52 in base 64
    if radix == 64 && input == "0" {
        return Ok(BigUint::zero());
    }
    let multiplier = BigUint::new(radix);
    let mut result = BigUint::zero();
    for (position, c) in input.char_indices() {
        let digit = if radix == 64 {
            BASE64_DIGITS.iter().position(|&d| char::from(d) == c).map(|d| d as u32)
        } else {
            c.to_digit(radix)
        };
        let digit = digit.ok_or_else(|| malformed(radix, c, offset + position))?;
        if radix.is_power_of_two() {
            result <<= radix.trailing_zeros() as usize;
        } else {
            result *= &multiplier;
        }
        result += digit;
    }
    Ok(result)
}

impl BigUint {
    /// Render the number in the given base. Bases 2 through 36 use the digits
    /// `0-9a-z`, base 64 uses `A-Za-z0-9+/`. Zero is always `"0"`.
    #[tracing::instrument(level = "trace", skip(self), fields(bits = self.bit_len()))]
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        match radix {
            2 => Ok(self.render_binary()),
            3..=36 => self.render(radix, DIGITS),
            64 => self.render(radix, BASE64_DIGITS),
            _ => Err(unsupported(radix))
        }
    }
    fn render_binary(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        self.bits().rev().map(|bit| if bit { '1' } else { '0' }).collect()
    }
    fn render(&self, radix: u32, alphabet: &[u8]) -> Result<String> {
        if self.is_zero() {
            return Ok(String::from("0"));
        }
        let owned;
        let divisor = match SMALL.get(radix as usize) {
            Some(small) => small,
            None => {
                owned = BigUint::new(radix);
                &owned
            }
        };

        // Least significant digit comes out first
        let mut digits = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (quotient, remainder) = rest.div_rem(divisor)?;
            digits.push(alphabet[remainder.as_u64() as usize]);
            rest = quotient;
        }
        Ok(digits.iter().rev().map(|&digit| char::from(digit)).collect())
    }
}
impl Num for BigUint {
    type FromStrRadixErr = Error;

    /// Parse digits without any prefix. The inverse of `to_str_radix`.
    #[tracing::instrument(level = "trace", skip(input))]
    fn from_str_radix(input: &str, radix: u32) -> Result<Self> {
        match radix {
            2 => parse_binary(input, 0),
            10 => parse_decimal(input, 0),
            16 => parse_hex(input, 0),
            3..=36 | 64 => parse_digits(input, radix, 0),
            _ => Err(unsupported(radix))
        }
    }
}
impl FromStr for BigUint {
    type Err = Error;

    /// Parse a decimal number, or a hexadecimal or binary one prefixed with
    /// `0x` or `0b`. An empty string is zero.
    #[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
    fn from_str(input: &str) -> Result<Self> {
        if input.len() < 3 {
            return parse_decimal(input, 0);
        }
        match input.get(..2) {
            Some("0x") | Some("0X") => parse_hex(&input[2..], 2),
            Some("0b") | Some("0B") => parse_binary(&input[2..], 2),
            _ => parse_decimal(input, 0)
        }
    }
}
impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.render(10, DIGITS).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", &digits)
    }
}
impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0b", &self.render_binary())
    }
}
impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.render(8, DIGITS).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "0o", &digits)
    }
}
impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.render(16, DIGITS).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "0x", &digits)
    }
}
impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.render(16, DIGITS).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "0x", &digits.to_ascii_uppercase())
    }
}
