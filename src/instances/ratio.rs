//! Integers ↔ [`Ratio`] over the same integer type.
//!
//! Going in is exact (denominator one). Coming out succeeds only when the
//! stored denominator is exactly one; an unreduced ratio such as `4/2` is not
//! normalised first and fails.

use num_bigint::{BigInt, BigUint};
use num_rational::Ratio;
use num_traits::One;

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

macro_rules! ratio_over {
    ($($int:ty),+ $(,)?) => {$(
        impl Convert<$int> for Ratio<$int> {
            #[inline]
            fn convert_from(value: $int) -> Self {
                Self::from_integer(value)
            }
        }

        impl TryConvert<Ratio<$int>> for $int {
            fn try_convert_from(
                value: Ratio<$int>,
            ) -> Result<Self, ConversionError<Ratio<$int>, Self>> {
                let (numer, denom) = value.into_raw();
                if denom.is_one() {
                    Ok(numer)
                } else {
                    Err(ConversionError::new(Ratio::new_raw(numer, denom)))
                }
            }
        }
    )+};
}

ratio_over!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, BigInt, BigUint);
