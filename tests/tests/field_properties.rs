//! Property-based tests for field element arithmetic

use gfcheck_api::Error;
use gfcheck_common::math_common::is_prime;
use gfcheck_field::FieldElement;
use proptest::prelude::*;

/// Primes below 2^31, drawn by rejection
fn prime() -> impl Strategy<Value = i64> {
    (2i64..(1 << 31)).prop_filter("prime modulus", |&p| is_prime(p as u64))
}

/// Modulus of 64-bit size, prime or not
fn large_modulus() -> impl Strategy<Value = i64> {
    (1i64 << 62)..i64::MAX
}

proptest! {
    #[test]
    fn construct_reduces_into_range(v in any::<i64>(), m in 2i64..=i64::MAX) {
        let e = FieldElement::new(v, m).unwrap();
        prop_assert!(e.value() < e.modulus());
        prop_assert_eq!(e.value() as i128, (v as i128).rem_euclid(m as i128));
    }

    #[test]
    fn construct_rejects_small_moduli(v in any::<i64>(), m in i64::MIN..=1) {
        prop_assert_eq!(FieldElement::new(v, m), Err(Error::InvalidModulus { modulus: m }));
    }

    #[test]
    fn arithmetic_matches_wide_integers(a in any::<i64>(), b in any::<i64>(), m in large_modulus()) {
        let x = FieldElement::new(a, m).unwrap();
        let y = FieldElement::new(b, m).unwrap();
        let (xv, yv, mv) = (x.value() as i128, y.value() as i128, m as i128);

        prop_assert_eq!(x.add(&y).unwrap().value() as i128, (xv + yv) % mv);
        prop_assert_eq!(x.sub(&y).unwrap().value() as i128, (xv - yv).rem_euclid(mv));
        prop_assert_eq!(x.mul(&y).unwrap().value() as u128, (xv as u128 * yv as u128) % mv as u128);
        prop_assert_eq!(x.negate().add(&x).unwrap().value(), 0);
    }

    #[test]
    fn inverse_in_prime_field(a in any::<i64>(), p in prime()) {
        let x = FieldElement::new(a, p).unwrap();
        if x.is_zero() {
            prop_assert_eq!(x.invert(), Err(Error::NoInverse { value: 0, modulus: p as u64 }));
        } else {
            let inv = x.invert().unwrap();
            prop_assert!(x.mul(&inv).unwrap().is_one());
            prop_assert_eq!(inv.invert().unwrap(), x);
        }
    }

    #[test]
    fn fermat_little_theorem(a in 1i64.., p in prime()) {
        let x = FieldElement::new(a, p).unwrap();
        prop_assume!(!x.is_zero());
        prop_assert!(x.pow(p as u64 - 1).is_one());
        prop_assert_eq!(x.pow_signed(-1).unwrap(), x.invert().unwrap());
    }

    #[test]
    fn division_round_trip(a in any::<i64>(), b in any::<i64>(), p in prime()) {
        let x = FieldElement::new(a, p).unwrap();
        let y = FieldElement::new(b, p).unwrap();
        if y.is_zero() {
            prop_assert_eq!(x.div(&y), Err(Error::DivisionByZero { modulus: p as u64 }));
        } else {
            prop_assert_eq!(x.mul(&y).unwrap().div(&y).unwrap(), x);
        }
    }

    #[test]
    fn mismatched_moduli_rejected(a in any::<i64>(), p in 2i64..1000, q in 2i64..1000) {
        prop_assume!(p != q);
        let x = FieldElement::new(a, p).unwrap();
        let y = FieldElement::new(a, q).unwrap();
        let mismatch = Err(Error::ModulusMismatch { left: p as u64, right: q as u64 });
        prop_assert_eq!(x.add(&y), mismatch.clone());
        prop_assert_eq!(x.mul(&y), mismatch.clone());
        prop_assert_eq!(x.div(&y), mismatch);
    }
}
