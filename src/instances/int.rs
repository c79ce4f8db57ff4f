//! Fixed-width integer ↔ fixed-width integer.
//!
//! A pair is infallible only when the target covers the source range on every
//! platform. `isize`/`usize` are assumed to be no wider than guaranteed (16
//! bits), so most pairs touching them are fallible even where a 64-bit target
//! would happen to fit.
//!
//! Fallible pairs fail exactly when the value lies outside the target's
//! `[MIN, MAX]`; both bounds themselves convert.

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

macro_rules! widen {
    ($source:ty => $($target:ty),+ $(,)?) => {$(
        impl Convert<$source> for $target {
            #[inline]
            fn convert_from(value: $source) -> Self {
                Self::from(value)
            }
        }
    )+};
}

macro_rules! narrow {
    ($source:ty => $($target:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for $target {
            #[inline]
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                Self::try_from(value).map_err(|_| ConversionError::new(value))
            }
        }
    )+};
}

// ── Signed sources ──────────────────────────────────────────────────────────

widen!(i8 => i16, i32, i64, isize);
narrow!(i8 => u8, u16, u32, u64, usize);

widen!(i16 => i32, i64, isize);
narrow!(i16 => i8, u8, u16, u32, u64, usize);

widen!(i32 => i64);
narrow!(i32 => i8, i16, isize, u8, u16, u32, u64, usize);

narrow!(i64 => i8, i16, i32, isize, u8, u16, u32, u64, usize);

narrow!(isize => i8, i16, i32, i64, u8, u16, u32, u64, usize);

// ── Unsigned sources ────────────────────────────────────────────────────────

widen!(u8 => u16, u32, u64, usize, i16, i32, i64, isize);
narrow!(u8 => i8);

widen!(u16 => u32, u64, usize, i32, i64);
narrow!(u16 => i8, i16, u8, isize);

widen!(u32 => u64, i64);
narrow!(u32 => i8, i16, i32, isize, u8, u16, usize);

narrow!(u64 => i8, i16, i32, i64, isize, u8, u16, u32, usize);

narrow!(usize => i8, i16, i32, i64, isize, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_preserves_value() {
        assert_eq!(i64::convert_from(i8::MIN), -128);
        assert_eq!(isize::convert_from(i16::MAX), 32_767);
        assert_eq!(i16::convert_from(u8::MAX), 255);
        assert_eq!(i64::convert_from(u32::MAX), 4_294_967_295);
        assert_eq!(usize::convert_from(u16::MAX), 65_535);
    }

    #[test]
    fn test_narrowing_inclusive_bounds() {
        assert_eq!(i8::try_convert_from(127i32), Ok(127));
        assert_eq!(i8::try_convert_from(-128i32), Ok(-128));
        assert!(i8::try_convert_from(128i32).is_err());
        assert!(i8::try_convert_from(-129i32).is_err());
    }

    #[test]
    fn test_cross_signedness() {
        assert_eq!(u8::try_convert_from(0i8), Ok(0));
        assert!(u8::try_convert_from(-1i8).is_err());
        assert_eq!(i8::try_convert_from(127u8), Ok(127));
        assert!(i8::try_convert_from(128u8).is_err());
        assert!(u64::try_convert_from(-1i64).is_err());
        assert_eq!(i64::try_convert_from(i64::MAX as u64), Ok(i64::MAX));
        assert!(i64::try_convert_from(i64::MAX as u64 + 1).is_err());
    }

    #[test]
    fn test_pointer_width_pairs() {
        assert_eq!(usize::try_convert_from(42i64), Ok(42));
        assert!(usize::try_convert_from(-1isize).is_err());
        assert_eq!(isize::try_convert_from(-7i32), Ok(-7));
        assert_eq!(u64::try_convert_from(usize::MAX).map(|v| v as usize), Ok(usize::MAX));
    }

    #[test]
    fn test_failure_carries_original_value() {
        let err = u16::try_convert_from(-5i32).unwrap_err();
        assert_eq!(*err.input(), -5);
        assert_eq!(err.source_type(), "i32");
        assert_eq!(err.target_type(), "u16");
    }
}
