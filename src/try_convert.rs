//! Fallible conversions.
//!
//! [`TryConvert<S>`] is the partial counterpart of [`Convert<S>`]: it either
//! produces the target value or a [`ConversionError`] holding the original
//! input, unchanged.
//!
//! Every infallible pair is lifted by a blanket implementation, so the two
//! families always agree: where `T: Convert<S>`, `T::try_convert_from` returns
//! `Ok` for every input, with the same value. Hand-written `TryConvert`
//! implementations exist only for pairs that have no `Convert`.

use crate::convert::Convert;
use crate::error::ConversionError;

/// Attempt to build `Self` from a value of type `S`.
///
/// On failure the error's payload must be the exact input that was passed
/// in, not a partially transformed value.
pub trait TryConvert<S>: Sized {
    /// Perform the conversion.
    fn try_convert_from(value: S) -> Result<Self, ConversionError<S, Self>>;
}

impl<S, T> TryConvert<S> for T
where
    T: Convert<S>,
{
    #[inline]
    fn try_convert_from(value: S) -> Result<Self, ConversionError<S, Self>> {
        Ok(T::convert_from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Even(u32);

    impl TryConvert<u32> for Even {
        fn try_convert_from(value: u32) -> Result<Self, ConversionError<u32, Self>> {
            if value % 2 == 0 {
                Ok(Self(value))
            } else {
                Err(ConversionError::new(value))
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Wide(u64);

    impl Convert<u32> for Wide {
        fn convert_from(value: u32) -> Self {
            Self(u64::from(value))
        }
    }

    #[test]
    fn test_hand_written_fallible_conversion() {
        assert_eq!(Even::try_convert_from(4), Ok(Even(4)));
        let err = Even::try_convert_from(5).unwrap_err();
        assert_eq!(*err.input(), 5);
    }

    #[test]
    fn test_infallible_pair_is_lifted() {
        for v in [0, 1, u32::MAX] {
            assert_eq!(Wide::try_convert_from(v), Ok(Wide::convert_from(v)));
        }
    }

    #[test]
    fn test_lifted_catalog_pair_agrees() {
        for v in [u8::MIN, 7, u8::MAX] {
            assert_eq!(u16::try_convert_from(v), Ok(u16::convert_from(v)));
        }
    }
}
