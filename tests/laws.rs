//! Property tests for the conversion laws.
//!
//! - round-trip: pairs infallible in both directions compose to the identity
//! - consistency: the fallible side of an infallible pair always succeeds
//!   with the same value
//! - narrowing: failure happens exactly outside the target range, and the
//!   error carries the untouched input
//! - floats: integers inside the exact range survive a trip through a float

use conv_core::{try_via, via, Convert, Decimal, NonEmpty, TryConvert};
use num_bigint::BigInt;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Integers inside the `f64` exact range.
fn exact_f64_int() -> impl Strategy<Value = i64> {
    -9_007_199_254_740_991i64..=9_007_199_254_740_991
}

/// Integers inside the `f32` exact range.
fn exact_f32_int() -> impl Strategy<Value = i32> {
    -16_777_215i32..=16_777_215
}

/// Arbitrary-size integers built from a sign and a few 32-bit digits.
fn big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u32>(), 0..6)).prop_map(|(negative, limbs)| {
        let sign = if negative { num_bigint::Sign::Minus } else { num_bigint::Sign::Plus };
        BigInt::from_slice(sign, &limbs)
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decimal_round_trip(n in big_int()) {
        let d = Decimal::<6>::convert_from(n.clone());
        prop_assert_eq!(BigInt::convert_from(d.clone()), n);
        prop_assert_eq!(Decimal::<6>::convert_from(BigInt::convert_from(d.clone())), d);
    }

    #[test]
    fn widening_agrees_with_fallible_family(x in any::<i32>(), y in any::<u16>()) {
        prop_assert_eq!(i64::try_convert_from(x), Ok(i64::convert_from(x)));
        prop_assert_eq!(f64::try_convert_from(x), Ok(f64::convert_from(x)));
        prop_assert_eq!(BigInt::try_convert_from(x), Ok(BigInt::convert_from(x)));
        prop_assert_eq!(usize::try_convert_from(y), Ok(usize::convert_from(y)));
    }

    #[test]
    fn narrowing_fails_exactly_outside_range(x in any::<i64>()) {
        let in_range = (i64::from(i8::MIN)..=i64::from(i8::MAX)).contains(&x);
        match i8::try_convert_from(x) {
            Ok(v) => {
                prop_assert!(in_range);
                prop_assert_eq!(i64::from(v), x);
            }
            Err(err) => {
                prop_assert!(!in_range);
                prop_assert_eq!(*err.input(), x);
            }
        }
    }

    #[test]
    fn unsigned_narrowing_rejects_negatives(x in any::<i32>()) {
        prop_assert_eq!(u32::try_convert_from(x).is_ok(), x >= 0);
    }

    #[test]
    fn bigint_narrowing_matches_fixed_width(x in any::<i64>()) {
        let big = BigInt::convert_from(x);
        prop_assert_eq!(i16::try_convert_from(big).ok(), i16::try_convert_from(x).ok());
    }

    #[test]
    fn f64_exact_integers_round_trip(n in exact_f64_int()) {
        let f = f64::try_convert_from(n).unwrap();
        prop_assert_eq!(i64::try_convert_from(f), Ok(n));
    }

    #[test]
    fn f32_exact_integers_round_trip(n in exact_f32_int()) {
        let f = f32::try_convert_from(n).unwrap();
        prop_assert_eq!(i32::try_convert_from(f), Ok(n));
    }

    #[test]
    fn finite_floats_always_become_rationals(x in any::<f64>()) {
        let r = num_rational::BigRational::try_convert_from(x);
        prop_assert_eq!(r.is_ok(), x.is_finite());
    }

    #[test]
    fn non_empty_vec_round_trip(xs in prop::collection::vec(any::<u8>(), 1..32)) {
        let ne = NonEmpty::try_convert_from(xs.clone()).unwrap();
        prop_assert_eq!(ne.len(), xs.len());
        prop_assert_eq!(Vec::convert_from(ne), xs);
    }

    #[test]
    fn via_equals_direct_widening(x in any::<u8>()) {
        prop_assert_eq!(via::<u16, u8, u64>(x), u64::convert_from(x));
        prop_assert_eq!(via::<i16, u8, i64>(x), i64::convert_from(x));
    }

    #[test]
    fn try_via_keeps_original_input(x in any::<i64>()) {
        match try_via::<i32, i64, u16>(x) {
            Ok(v) => prop_assert_eq!(i64::from(v), x),
            Err(err) => {
                prop_assert!(u16::try_convert_from(x).is_err());
                prop_assert_eq!(*err.input(), x);
            }
        }
    }
}
