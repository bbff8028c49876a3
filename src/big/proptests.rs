use super::*;
use crate::Error;

use num_traits::{Num, Pow, ToPrimitive, Zero};
use proptest::prelude::*;

/// Values of up to 300 bits, well past every native width
fn arb_big() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<bool>(), 0..300).prop_map(|bits| {
        let mut num = BigUint::zero();
        for (i, bit) in bits.into_iter().enumerate() {
            num.set_bit(i, bit);
        }
        num
    })
}

proptest! {
    #[test]
    fn native_round_trip(n: u128) {
        let num = BigUint::new(n);
        prop_assert_eq!(num.as_u128(), n);
        prop_assert_eq!(num.to_u128(), Some(n));
        prop_assert_eq!(num.to_string(), n.to_string());
        prop_assert_eq!(n.to_string().parse::<BigUint>().unwrap(), num);
    }

    #[test]
    fn prefixed_round_trip(n: u64) {
        prop_assert_eq!(format!("0x{:x}", n).parse::<BigUint>().unwrap(), n);
        prop_assert_eq!(format!("0X{:X}", n).parse::<BigUint>().unwrap(), n);
        prop_assert_eq!(format!("0b{:064b}", n).parse::<BigUint>().unwrap(), n);
        prop_assert_eq!(format!("0B{:b}", n).parse::<BigUint>().unwrap(), n);
    }

    #[test]
    fn rendering_matches_native(n: u64) {
        let num = BigUint::new(n);
        prop_assert_eq!(num.to_str_radix(2).unwrap(), format!("{:b}", n));
        prop_assert_eq!(num.to_str_radix(8).unwrap(), format!("{:o}", n));
        prop_assert_eq!(num.to_str_radix(10).unwrap(), n.to_string());
        prop_assert_eq!(num.to_str_radix(16).unwrap(), format!("{:x}", n));
    }

    #[test]
    fn arithmetic_matches_native(a: u64, b: u64) {
        let (x, y) = (BigUint::new(a), BigUint::new(b));
        prop_assert_eq!(&x + &y, a as u128 + b as u128);
        prop_assert_eq!(&x - &y, a.saturating_sub(b));
        prop_assert_eq!(&x * &y, a as u128 * b as u128);
        prop_assert_eq!(x.mul_peasant(&y), a as u128 * b as u128);
        prop_assert_eq!(&x & &y, a & b);
        prop_assert_eq!(&x | &y, a | b);
        prop_assert_eq!(&x ^ &y, a ^ b);
        prop_assert_eq!(x < y, a < b);
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, a / b);
            prop_assert_eq!(&x % &y, a % b);
        }
    }

    #[test]
    fn shifts_match_native(a: u64, k in 0usize..64) {
        let num = BigUint::new(a);
        prop_assert_eq!(&num << k, (a as u128) << k);
        prop_assert_eq!(&num >> k, a >> k);
    }

    #[test]
    fn subtraction_saturates(a: u64, b: u64) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!((BigUint::new(lo) - BigUint::new(hi)).is_zero() || lo == hi);
        prop_assert!((BigUint::new(hi) - BigUint::new(hi)).is_zero());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn addition_laws(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!((&a + &b) - &b, a.clone());
    }

    #[test]
    fn multiplication_laws(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        prop_assert_eq!(a.mul_peasant(&b), &a * &b);
    }

    #[test]
    fn bitwise_laws(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a ^ &b, &b ^ &a);
        prop_assert_eq!((&a & &b) & &c, &a & (&b & &c));
        prop_assert_eq!((&a | &b) | &c, &a | (&b | &c));
        prop_assert_eq!((&a ^ &b) ^ &c, &a ^ (&b ^ &c));
        prop_assert!((&a ^ &a).is_zero());
        prop_assert!((&a & &b).bit_len() <= a.bit_len().min(b.bit_len()));
    }

    #[test]
    fn subtraction_below_is_zero(a in arb_big(), b in arb_big()) {
        if a < b {
            prop_assert!((&a - &b).is_zero());
        } else {
            prop_assert_eq!((&a - &b) + &b, a.clone());
        }
    }

    #[test]
    fn division_invariant(a in arb_big(), b in arb_big()) {
        if b.is_zero() {
            prop_assert_eq!(a.div_rem(&b), Err(Error::DivideByZero));
        } else {
            let (quotient, remainder) = a.div_rem(&b).unwrap();
            prop_assert!(remainder < b);
            prop_assert_eq!(&quotient * &b + &remainder, a.clone());
            prop_assert_eq!(&a / &b, quotient);
            prop_assert_eq!(&a % &b, remainder);
        }
    }

    #[test]
    fn shift_identities(a in arb_big(), k in 0usize..200) {
        prop_assert_eq!((&a << k) >> k, a.clone());
        prop_assert_eq!(&a << 0, a.clone());
        prop_assert_eq!(&a >> 0, a.clone());
        prop_assert_eq!(&a << k, &a * BigUint::new(2u8).pow(k as u128));
        prop_assert!((&a >> (a.bit_len() + k)).is_zero());
    }

    #[test]
    fn radix_round_trip(a in arb_big()) {
        for radix in [2, 8, 10, 16, 36, 64] {
            let rendered = a.to_str_radix(radix).unwrap();
            prop_assert_eq!(BigUint::from_str_radix(&rendered, radix).unwrap(), a.clone());
        }
        prop_assert_eq!(a.to_string().parse::<BigUint>().unwrap(), a.clone());
        prop_assert_eq!(format!("{:#x}", a).parse::<BigUint>().unwrap(), a.clone());
        prop_assert_eq!(format!("{:#b}", a).parse::<BigUint>().unwrap(), a.clone());
    }
}
