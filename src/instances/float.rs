//! Floating point ↔ integers, rationals, and the other float width.
//!
//! # Exactly-representable range
//!
//! `f32` represents every integer in `[-(2^24 - 1), 2^24 - 1]` exactly and
//! `f64` every integer in `[-(2^53 - 1), 2^53 - 1]`. Conversions in either
//! direction between integers and floats stay inside that range: the bound
//! itself converts, one past it fails. Integer types that fit entirely
//! inside the range convert infallibly.
//!
//! # Floats into exact types
//!
//! NaN and both infinities never convert to an integer or a rational.
//! Integer targets additionally reject fractional values and anything past
//! the exact range. [`BigRational`] accepts every finite value, producing the
//! exact value of the bit pattern.

use num_bigint::{BigInt, BigUint, ToBigUint};
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::ToPrimitive;

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

/// Largest integer magnitude an `f32` represents exactly along with every
/// integer below it (`2^24 - 1`).
pub const MAX_EXACT_F32_INT: i64 = 16_777_215;

/// Largest integer magnitude an `f64` represents exactly along with every
/// integer below it (`2^53 - 1`).
pub const MAX_EXACT_F64_INT: i64 = 9_007_199_254_740_991;

/// Integral value of `value` if it is finite, whole, and within `±limit`.
fn exact_integer<F: FloatCore>(value: F, limit: i64) -> Option<i64> {
    let bound = <F as num_traits::NumCast>::from(limit)?;
    if !value.is_finite() || value < -bound || value > bound {
        return None;
    }
    if value.fract() != F::zero() {
        return None;
    }
    value.to_i64()
}

fn within_exact(value: i128, limit: i64) -> bool {
    let limit = i128::from(limit);
    -limit <= value && value <= limit
}

// ── Integer → float ─────────────────────────────────────────────────────────

macro_rules! lossless_float {
    ($target:ty => $($source:ty),+ $(,)?) => {$(
        impl Convert<$source> for $target {
            #[inline]
            fn convert_from(value: $source) -> Self {
                Self::from(value)
            }
        }
    )+};
}

macro_rules! bounded_float {
    ($target:ty, $limit:expr => $($source:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for $target {
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                if within_exact(value as i128, $limit) {
                    Ok(value as $target)
                } else {
                    Err(ConversionError::new(value))
                }
            }
        }
    )+};
}

lossless_float!(f32 => i8, i16, u8, u16);
lossless_float!(f64 => i8, i16, i32, u8, u16, u32);

bounded_float!(f32, MAX_EXACT_F32_INT => i32, i64, isize, u32, u64, usize);
bounded_float!(f64, MAX_EXACT_F64_INT => i64, isize, u64, usize);

macro_rules! bounded_float_from_big {
    ($target:ty, $limit:expr => $($source:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for $target {
            #[allow(clippy::cast_precision_loss)]
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                match value.to_i64() {
                    Some(n) if within_exact(i128::from(n), $limit) => Ok(n as $target),
                    _ => Err(ConversionError::new(value)),
                }
            }
        }
    )+};
}

bounded_float_from_big!(f32, MAX_EXACT_F32_INT => BigInt, BigUint);
bounded_float_from_big!(f64, MAX_EXACT_F64_INT => BigInt, BigUint);

// ── Float → float ───────────────────────────────────────────────────────────

impl Convert<f32> for f64 {
    #[inline]
    fn convert_from(value: f32) -> Self {
        Self::from(value)
    }
}

// ── Float → integer ─────────────────────────────────────────────────────────

macro_rules! float_to_int {
    ($source:ty, $limit:expr => $($target:ty),+ $(,)?) => {$(
        impl TryConvert<$source> for $target {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                exact_integer(value, $limit)
                    .and_then(|n| Self::try_from(n).ok())
                    .ok_or_else(|| ConversionError::new(value))
            }
        }
    )+};
}

float_to_int!(f32, MAX_EXACT_F32_INT => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float_to_int!(f64, MAX_EXACT_F64_INT => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_to_big {
    ($($source:ty, $limit:expr);+ $(;)?) => {$(
        impl TryConvert<$source> for BigInt {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                exact_integer(value, $limit)
                    .map(BigInt::from)
                    .ok_or_else(|| ConversionError::new(value))
            }
        }

        impl TryConvert<$source> for BigUint {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                exact_integer(value, $limit)
                    .and_then(|n| n.to_biguint())
                    .ok_or_else(|| ConversionError::new(value))
            }
        }

        impl TryConvert<$source> for BigRational {
            fn try_convert_from(value: $source) -> Result<Self, ConversionError<$source, Self>> {
                BigRational::from_float(value).ok_or_else(|| ConversionError::new(value))
            }
        }
    )+};
}

float_to_big! {
    f32, MAX_EXACT_F32_INT;
    f64, MAX_EXACT_F64_INT;
}
