//! Arbitrary-precision integers ([`BigInt`]) and naturals ([`BigUint`]).
//!
//! Both are unbounded above, so any sign-compatible fixed-width value goes in
//! infallibly. Coming back out is always fallible, and so is anything that
//! would need a negative natural.

use num_bigint::{BigInt, BigUint, ToBigUint};

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

macro_rules! into_big {
    ($target:ty => $($source:ty),+ $(,)?) => {$(
        impl Convert<$source> for $target {
            #[inline]
            fn convert_from(value: $source) -> Self {
                Self::from(value)
            }
        }
    )+};
}

macro_rules! signed_into_natural {
    ($($source:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for BigUint {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                value.to_biguint().ok_or_else(|| ConversionError::new(value))
            }
        }
    )+};
}

macro_rules! out_of_big {
    ($source:ty => $($target:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for $target {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                Self::try_from(&value).map_err(|_| ConversionError::new(value))
            }
        }
    )+};
}

into_big!(BigInt => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
into_big!(BigUint => u8, u16, u32, u64, usize);
signed_into_natural!(i8, i16, i32, i64, isize);

out_of_big!(BigInt => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
out_of_big!(BigUint => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Convert<BigUint> for BigInt {
    #[inline]
    fn convert_from(value: BigUint) -> Self {
        Self::from(value)
    }
}

impl TryConvert<BigInt> for BigUint {
    fn try_convert_from(value: BigInt) -> Result<Self, ConversionError<BigInt, Self>> {
        value.to_biguint().ok_or_else(|| ConversionError::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_into_bigint() {
        assert_eq!(BigInt::convert_from(i64::MIN), BigInt::from(i64::MIN));
        assert_eq!(BigInt::convert_from(u64::MAX), BigInt::from(u64::MAX));
        assert_eq!(BigUint::convert_from(usize::MAX), BigUint::from(usize::MAX));
    }

    #[test]
    fn test_negative_into_natural_fails() {
        assert!(BigUint::try_convert_from(-1i32).is_err());
        assert_eq!(BigUint::try_convert_from(0i8), Ok(BigUint::from(0u8)));
        let err = BigUint::try_convert_from(BigInt::from(-10)).unwrap_err();
        assert_eq!(*err.input(), BigInt::from(-10));
    }

    #[test]
    fn test_bigint_narrowing_bounds() {
        assert_eq!(u8::try_convert_from(BigInt::from(255)), Ok(255));
        assert!(u8::try_convert_from(BigInt::from(256)).is_err());
        assert_eq!(i64::try_convert_from(BigInt::from(i64::MIN)), Ok(i64::MIN));
        assert!(i64::try_convert_from(BigInt::from(i64::MIN) - 1).is_err());
        assert!(i8::try_convert_from(BigUint::from(128u32)).is_err());
    }

    #[test]
    fn test_natural_round_trips_through_integer() {
        let n = BigUint::from(u64::MAX) * 3u32;
        let i = BigInt::convert_from(n.clone());
        assert_eq!(BigUint::try_convert_from(i), Ok(n));
    }
}
