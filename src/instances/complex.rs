//! Plain values ↔ [`Complex`] over the same component type.
//!
//! A value becomes the real part with a zero imaginary part. The reverse only
//! succeeds when the imaginary part is exactly zero; for floats `-0.0` counts
//! as zero and NaN does not.

use num_bigint::{BigInt, BigUint};
use num_complex::Complex;
use num_traits::Zero;

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

macro_rules! complex_over {
    ($($component:ty),+ $(,)?) => {$(
        impl Convert<$component> for Complex<$component> {
            #[inline]
            fn convert_from(value: $component) -> Self {
                Self::new(value, <$component>::zero())
            }
        }

        impl TryConvert<Complex<$component>> for $component {
            fn try_convert_from(
                value: Complex<$component>,
            ) -> Result<Self, ConversionError<Complex<$component>, Self>> {
                if value.im.is_zero() {
                    Ok(value.re)
                } else {
                    Err(ConversionError::new(value))
                }
            }
        }
    )+};
}

complex_over!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, BigInt, BigUint);
