use super::consts::SMALL;
use crate::{Error, Result};

use num_traits::*;
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    iter::{self, Product, Sum},
    ops::*,
    slice
};

/// Number of bits stored inline before a value spills to the heap
pub const INLINE_BITS: usize = 128;

pub(super) type BitVec = SmallVec<[bool; INLINE_BITS]>;

/// An unsigned integer of unbounded size, stored as one `bool` per bit with
/// the least significant bit first. The highest stored bit is always set,
/// so zero is the empty sequence and every value has exactly one
/// representation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    bits: BitVec
}
impl BigUint {
    /// Alias to `from`
    pub fn new<T: Into<Self>>(value: T) -> Self {
        value.into()
    }
    pub(super) fn from_bits(bits: BitVec) -> Self {
        let mut num = Self { bits };
        num.trim_end();
        num
    }
    /// Return the number of significant bits. Zero has none.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }
    /// Return an iterator over all bits, least significant first
    pub fn bits(&self) -> Bits<'_> {
        Bits {
            inner: self.bits.iter().copied()
        }
    }
    /// Return the bit at position `i`, which is `false` past the end
    pub fn bit(&self, i: usize) -> bool {
        self.bits.get(i).copied().unwrap_or(false)
    }
    /// Set the bit at position `i`, growing or shrinking as needed
    pub fn set_bit(&mut self, i: usize, value: bool) {
        if i >= self.bits.len() {
            if !value {
                return;
            }
            self.bits.resize(i + 1, false);
        }
        self.bits[i] = value;
        self.trim_end();
    }
    fn trim_end(&mut self) {
        while self.bits.last() == Some(&false) {
            self.bits.pop();
        }
    }
    fn common_size(&mut self, other: &Self) {
        if other.bits.len() > self.bits.len() {
            self.bits.resize(other.bits.len(), false);
        }
    }
    /// Return the lowest 128 bits. Larger values are truncated, not saturated.
    pub fn as_u128(&self) -> u128 {
        self.bits.iter().rev().fold(0, |acc, &bit| acc << 1 | bit as u128)
    }
    /// Return the lowest 64 bits. Larger values are truncated, not saturated.
    pub fn as_u64(&self) -> u64 {
        self.as_u128() as u64
    }
    /// A version of `self.clone() & 1u8 == 0u8` that doesn't need to clone anything
    pub fn is_even(&self) -> bool {
        !self.bit(0)
    }
    pub fn is_odd(&self) -> bool {
        self.bit(0)
    }
    /// Add one in place
    pub fn inc(&mut self) -> &mut Self {
        *self += &SMALL[1];
        self
    }
    /// Subtract one in place, staying at zero
    pub fn dec(&mut self) -> &mut Self {
        *self -= &SMALL[1];
        self
    }
    /// Ripple-carry addition of `other << offset` into `self`
    fn add_at(&mut self, other: &Self, offset: usize) {
        if other.is_zero() {
            return;
        }
        let needed = offset + other.bits.len();
        if self.bits.len() < needed {
            self.bits.resize(needed, false);
        }

        let mut carry = false;

        for (i, bit) in self.bits[offset..].iter_mut().enumerate() {
            if i >= other.bits.len() && !carry {
                break;
            }
            let (lhs, rhs) = (*bit, other.bit(i));
            *bit = carry ^ lhs ^ rhs;
            carry = (lhs && rhs) || (lhs && carry) || (rhs && carry);
        }

        if carry {
            self.bits.push(true);
        }
    }
    /// Shift left by one and place `bit` in the freed lowest position
    fn push_low(&mut self, bit: bool) {
        if bit || !self.is_zero() {
            self.bits.insert(0, bit);
        }
    }
    /// Performs division and remainder in one step
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        // Restoring long division in binary. Bring down one bit of the
        // dividend at a time; the running remainder is then always less than
        // twice the divisor, so a single subtraction decides the quotient bit.
        if other.is_zero() {
            tracing::debug!(dividend_bits = self.bits.len(), "division by zero");
            return Err(Error::DivideByZero);
        }
        if self < other {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = self.clone();
        let mut remainder = Self::zero();

        for i in (0..self.bits.len()).rev() {
            remainder.push_low(self.bits[i]);

            let fits = remainder >= *other;
            if fits {
                remainder -= other;
            }
            quotient.bits[i] = fits;
        }

        quotient.trim_end();
        Ok((quotient, remainder))
    }
    /// Multiply by halving `other` and doubling `self` until `other` runs out.
    /// Gives the same result as `*`.
    pub fn mul_peasant(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        let mut doubled = self.clone();
        let mut halved = other.clone();

        while !halved.is_zero() {
            if halved.is_odd() {
                result += &doubled;
            }
            doubled <<= 1;
            halved >>= 1;
        }
        result
    }
    fn bitop<F>(&mut self, other: &Self, mut op: F)
        where F: FnMut(bool, bool) -> bool
    {
        self.common_size(other);

        for (lbit, &rbit) in self.bits.iter_mut().zip(other.bits.iter().chain(iter::repeat(&false))) {
            *lbit = op(*lbit, rbit);
        }

        self.trim_end();
    }
}
impl Zero for BigUint {
    fn zero() -> Self {
        Self {
            bits: SmallVec::new()
        }
    }
    fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }
}
impl One for BigUint {
    fn one() -> Self {
        let mut bits = SmallVec::new();
        bits.push(true);
        Self { bits }
    }
    fn is_one(&self) -> bool {
        self.bits.len() == 1
    }
}
impl Unsigned for BigUint {}
impl<N: Into<u128>> From<N> for BigUint {
    fn from(i: N) -> Self {
        let i = i.into();
        Self::from_bits((0..u128::BITS).map(|bit| i >> bit & 1 == 1).collect())
    }
}
impl AddAssign<&Self> for BigUint {
    fn add_assign(&mut self, other: &Self) {
        self.add_at(other, 0);
    }
}
impl SubAssign<&Self> for BigUint {
    /// Saturating: anything at or below `other` becomes zero.
    fn sub_assign(&mut self, other: &Self) {
        if *self <= *other {
            self.bits.clear();
            return;
        }

        for i in 0..other.bits.len() {
            let (lhs, rhs) = (self.bits[i], other.bits[i]);
            self.bits[i] = lhs ^ rhs;
            if rhs && !lhs {
                // Borrow from the next set bit, turning the zeros on the way into ones
                for bit in &mut self.bits[i + 1..] {
                    *bit = !*bit;
                    if !*bit {
                        break;
                    }
                }
            }
        }

        self.trim_end();
    }
}
impl CheckedAdd for BigUint {
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}
impl CheckedSub for BigUint {
    fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self < other {
            None
        } else {
            Some(self - other)
        }
    }
}
impl SaturatingAdd for BigUint {
    fn saturating_add(&self, other: &Self) -> Self {
        self + other
    }
}
impl SaturatingSub for BigUint {
    fn saturating_sub(&self, other: &Self) -> Self {
        self - other
    }
}
impl ShlAssign<usize> for BigUint {
    fn shl_assign(&mut self, shift: usize) {
        if self.is_zero() || shift == 0 {
            return;
        }
        self.bits.insert_many(0, iter::repeat(false).take(shift));
    }
}
impl Shl<usize> for BigUint {
    type Output = Self;
    fn shl(mut self, shift: usize) -> Self::Output {
        self <<= shift;
        self
    }
}
impl Shl<usize> for &BigUint {
    type Output = BigUint;
    fn shl(self, shift: usize) -> Self::Output {
        self.clone() << shift
    }
}
impl ShrAssign<usize> for BigUint {
    fn shr_assign(&mut self, shift: usize) {
        if shift >= self.bits.len() {
            self.bits.clear();
        } else if shift > 0 {
            self.bits.drain(..shift);
        }
    }
}
impl Shr<usize> for BigUint {
    type Output = Self;
    fn shr(mut self, shift: usize) -> Self::Output {
        self >>= shift;
        self
    }
}
impl Shr<usize> for &BigUint {
    type Output = BigUint;
    fn shr(self, shift: usize) -> Self::Output {
        self.clone() >> shift
    }
}
impl Mul<Self> for &BigUint {
    type Output = BigUint;
    fn mul(self, other: Self) -> Self::Output {
        let mut result = BigUint::zero();

        for (i, &bit) in other.bits.iter().enumerate() {
            if bit {
                result.add_at(self, i);
            }
        }

        result
    }
}
impl CheckedMul for BigUint {
    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Some(self * other)
    }
}
impl Div<Self> for &BigUint {
    type Output = BigUint;
    fn div(self, other: Self) -> Self::Output {
        match self.div_rem(other) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err)
        }
    }
}
impl CheckedDiv for BigUint {
    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.div_rem(other).ok().map(|(quotient, _)| quotient)
    }
}
impl Rem<Self> for &BigUint {
    type Output = BigUint;
    fn rem(self, other: Self) -> Self::Output {
        match self.div_rem(other) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err)
        }
    }
}
impl CheckedRem for BigUint {
    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.div_rem(other).ok().map(|(_, remainder)| remainder)
    }
}
impl BitAndAssign<&Self> for BigUint {
    fn bitand_assign(&mut self, other: &Self) {
        // Missing bits are zero, so nothing past the shorter operand survives
        self.bits.truncate(other.bits.len());
        for (lbit, &rbit) in self.bits.iter_mut().zip(other.bits.iter()) {
            *lbit &= rbit;
        }
        self.trim_end();
    }
}
impl BitOrAssign<&Self> for BigUint {
    fn bitor_assign(&mut self, other: &Self) {
        self.bitop(other, |lbit, rbit| lbit || rbit);
    }
}
impl BitXorAssign<&Self> for BigUint {
    fn bitxor_assign(&mut self, other: &Self) {
        self.bitop(other, |lbit, rbit| lbit ^ rbit);
    }
}
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        let cmp = self.bits.len().cmp(&other.bits.len());
        if cmp != Ordering::Equal {
            return cmp;
        }
        self.bits.iter().rev().cmp(other.bits.iter().rev())
    }
}
impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Into<BigUint> + Copy> PartialEq<T> for BigUint {
    fn eq(&self, other: &T) -> bool {
        *self == (*other).into()
    }
}
impl<T: Into<BigUint> + Copy> PartialOrd<T> for BigUint {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.partial_cmp(&(*other).into())
    }
}
impl<T: Into<Self>> Pow<T> for BigUint {
    type Output = Self;

    fn pow(self, exponent: T) -> Self {
        let mut exponent = exponent.into();
        let mut base = self;
        let mut result = Self::one();

        while !exponent.is_zero() {
            if exponent.is_odd() {
                result *= &base;
            }
            exponent >>= 1;
            if !exponent.is_zero() {
                base = &base * &base;
            }
        }
        result
    }
}
impl ToPrimitive for BigUint {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|i| i.to_i64())
    }
    fn to_u64(&self) -> Option<u64> {
        if self.bits.len() > 64 {
            None
        } else {
            Some(self.as_u64())
        }
    }
    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|i| i.to_i128())
    }
    fn to_u128(&self) -> Option<u128> {
        if self.bits.len() > 128 {
            None
        } else {
            Some(self.as_u128())
        }
    }
}
impl Sum for BigUint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + n)
    }
}
impl<'a> Sum<&'a BigUint> for BigUint {
    fn sum<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + n)
    }
}
impl Product for BigUint {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, n| acc * n)
    }
}
impl<'a> Product<&'a BigUint> for BigUint {
    fn product<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, n| acc * n)
    }
}

macro_rules! impl_op {
    (
        $($op_trait:ident $op_fn:ident = $assign_trait:ident $assign_fn:ident),*
        ---
        $($op_trait2:ident $op_fn2:ident = $assign_trait2:ident $assign_fn2:ident),*) => {
        $(
            impl<T: Into<Self>> $assign_trait<T> for BigUint {
                fn $assign_fn(&mut self, other: T) {
                    self.$assign_fn(&other.into())
                }
            }
            impl $op_trait<&Self> for BigUint {
                type Output = Self;
                fn $op_fn(mut self, other: &Self) -> Self::Output {
                    self.$assign_fn(other);
                    self
                }
            }
            impl<T: Into<Self>> $op_trait<T> for BigUint {
                type Output = Self;
                fn $op_fn(mut self, other: T) -> Self::Output {
                    self.$assign_fn(other);
                    self
                }
            }
            impl $op_trait<&BigUint> for &BigUint {
                type Output = BigUint;
                fn $op_fn(self, other: &BigUint) -> Self::Output {
                    self.clone().$op_fn(other)
                }
            }
            impl<T: Into<BigUint>> $op_trait<T> for &BigUint {
                type Output = BigUint;
                fn $op_fn(self, other: T) -> Self::Output {
                    self.clone().$op_fn(other)
                }
            }
        )*
        $(
            impl $op_trait2<&Self> for BigUint {
                type Output = BigUint;
                fn $op_fn2(self, other: &Self) -> Self::Output {
                    (&self).$op_fn2(other)
                }
            }
            impl<T: Into<Self>> $op_trait2<T> for BigUint {
                type Output = BigUint;
                fn $op_fn2(self, other: T) -> Self::Output {
                    (&self).$op_fn2(&other.into())
                }
            }
            impl<T: Into<BigUint>> $op_trait2<T> for &BigUint {
                type Output = BigUint;
                fn $op_fn2(self, other: T) -> Self::Output {
                    self.$op_fn2(&other.into())
                }
            }
            impl<T: Into<Self>> $assign_trait2<T> for BigUint {
                fn $assign_fn2(&mut self, other: T) {
                    *self = (&*self).$op_fn2(&other.into());
                }
            }
            impl $assign_trait2<&Self> for BigUint {
                fn $assign_fn2(&mut self, other: &Self) {
                    *self = (&*self).$op_fn2(other);
                }
            }
        )*
    }
}
impl_op! {
    Add add = AddAssign add_assign,
    Sub sub = SubAssign sub_assign,
    BitAnd bitand = BitAndAssign bitand_assign,
    BitOr bitor = BitOrAssign bitor_assign,
    BitXor bitxor = BitXorAssign bitxor_assign
    ---
    Mul mul = MulAssign mul_assign,
    Div div = DivAssign div_assign,
    Rem rem = RemAssign rem_assign
}

// Native integers on the left hand side
macro_rules! impl_native {
    (@ops $native:ty: $($op_trait:ident $op_fn:ident),*) => {
        $(
            impl $op_trait<BigUint> for $native {
                type Output = BigUint;
                fn $op_fn(self, other: BigUint) -> Self::Output {
                    BigUint::new(self).$op_fn(&other)
                }
            }
            impl $op_trait<&BigUint> for $native {
                type Output = BigUint;
                fn $op_fn(self, other: &BigUint) -> Self::Output {
                    BigUint::new(self).$op_fn(other)
                }
            }
        )*
    };
    ($($native:ty),*) => {
        $(
            impl PartialEq<BigUint> for $native {
                fn eq(&self, other: &BigUint) -> bool {
                    *other == *self
                }
            }
            impl PartialOrd<BigUint> for $native {
                fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
                    Some(BigUint::new(*self).cmp(other))
                }
            }
            impl_native!(@ops $native: Add add, Sub sub, Mul mul, Div div, Rem rem, BitAnd bitand, BitOr bitor, BitXor bitxor);
        )*
    }
}
impl_native!(u8, u16, u32, u64, u128);

/// Iterator over the bits of a `BigUint`, least significant first
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    inner: iter::Copied<slice::Iter<'a, bool>>
}
impl Iterator for Bits<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl DoubleEndedIterator for Bits<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}
impl ExactSizeIterator for Bits<'_> {}
