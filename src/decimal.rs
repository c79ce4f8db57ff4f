//! Fixed-point decimals with a compile-time number of fractional digits.
//!
//! A [`Decimal<SCALE>`] stores an arbitrary-precision integer mantissa counted
//! in units of `10^-SCALE`: `Decimal::<2>` with mantissa `314` is `3.14`.
//! The mantissa *is* the integer on both sides of the conversion, so
//! [`BigInt`] ↔ `Decimal<SCALE>` is infallible in both directions and each
//! direction undoes the other.

use alloc::format;
use alloc::string::ToString;
use core::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::pow;

use crate::convert::Convert;

/// A decimal number with `SCALE` digits after the point.
///
/// ```
/// use conv_core::{Convert, Decimal};
/// use num_bigint::BigInt;
///
/// let price = Decimal::<2>::convert_from(BigInt::from(1999));
/// assert_eq!(price.to_string(), "19.99");
/// assert_eq!(BigInt::convert_from(price), BigInt::from(1999));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Decimal<const SCALE: u32> {
    mantissa: BigInt,
}

impl<const SCALE: u32> Decimal<SCALE> {
    /// Number of digits after the decimal point.
    pub const FRACTION_DIGITS: u32 = SCALE;

    /// A decimal equal to `mantissa × 10^-SCALE`.
    pub fn new(mantissa: BigInt) -> Self {
        Self { mantissa }
    }

    /// The raw mantissa.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// The raw mantissa, by value.
    pub fn into_mantissa(self) -> BigInt {
        self.mantissa
    }

    /// `10^SCALE`, the number of mantissa units in one whole.
    pub fn resolution() -> BigInt {
        pow(BigInt::from(10u8), SCALE as usize)
    }
}

impl<const SCALE: u32> fmt::Display for Decimal<SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa.sign() == Sign::Minus { "-" } else { "" };
        let digits = self.mantissa.magnitude().to_string();
        let scale = SCALE as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

impl<const SCALE: u32> Convert<BigInt> for Decimal<SCALE> {
    #[inline]
    fn convert_from(value: BigInt) -> Self {
        Self::new(value)
    }
}

impl<const SCALE: u32> Convert<Decimal<SCALE>> for BigInt {
    #[inline]
    fn convert_from(value: Decimal<SCALE>) -> Self {
        value.mantissa
    }
}
