//! Convenience entry points built only on [`Convert`] and [`TryConvert`].
//!
//! Nothing here adds conversion logic. The functions exist so call sites can
//! name the type they care about first, chain through an intermediate type,
//! or pick how a failure is reported:
//!
//! | Want | Use |
//! |------|-----|
//! | the structured error | [`try_from`], [`try_into`], [`try_via`], [`try_map`] |
//! | just presence | [`try_from_option`] |
//! | the input back on failure | [`try_from_either`] |
//! | a panic, having ruled failure out yourself | [`unwrap_from`], [`unwrap_into`], [`unwrap_via`], [`unwrap_try_map`] |
//!
//! With the `tracing` feature the panicking variants emit an `error` event
//! describing the failed conversion before they panic.

use core::fmt::Debug;

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

/// Infallible conversion, source type first: `from::<u8, _>(x)`.
#[inline]
pub fn from<S, T>(value: S) -> T
where
    T: Convert<S>,
{
    T::convert_from(value)
}

/// Infallible conversion, target type first: `into::<i64, _>(x)`.
#[inline]
pub fn into<T, S>(value: S) -> T
where
    T: Convert<S>,
{
    T::convert_from(value)
}

/// Fallible conversion, source type first.
#[inline]
pub fn try_from<S, T>(value: S) -> Result<T, ConversionError<S, T>>
where
    T: TryConvert<S>,
{
    T::try_convert_from(value)
}

/// Fallible conversion, target type first.
#[inline]
pub fn try_into<T, S>(value: S) -> Result<T, ConversionError<S, T>>
where
    T: TryConvert<S>,
{
    T::try_convert_from(value)
}

/// Run `f` on the `T` view of a value and convert the result back to `S`.
///
/// Both directions must be infallible; `S` is typically a wrapper and `T`
/// its representation.
///
/// ```
/// use conv_core::{over, Decimal};
/// use num_bigint::BigInt;
///
/// let price = Decimal::<2>::new(BigInt::from(1999));
/// let bumped = over::<BigInt, _>(price, |units| units + 1);
/// assert_eq!(bumped.to_string(), "20.00");
/// ```
pub fn over<T, S>(value: S, f: impl FnOnce(T) -> T) -> S
where
    T: Convert<S>,
    S: Convert<T>,
{
    S::convert_from(f(T::convert_from(value)))
}

/// Infallible conversion through an intermediate type `U`: `S → U → T`.
#[inline]
pub fn via<U, S, T>(value: S) -> T
where
    U: Convert<S>,
    T: Convert<U>,
{
    T::convert_from(U::convert_from(value))
}

/// Fallible conversion through an intermediate type `U`: `S → U → T`.
///
/// Stops at the first failing step. Either way the error carries the
/// original `S` input and names the overall `(S, T)` pair.
///
/// ```
/// use conv_core::try_via;
///
/// // i64 -> i16 fails first
/// let err = try_via::<i16, i64, u8>(70_000).unwrap_err();
/// assert_eq!(*err.input(), 70_000);
/// // i64 -> i16 succeeds, i16 -> u8 fails
/// assert!(try_via::<i16, i64, u8>(-1).is_err());
/// assert_eq!(try_via::<i16, i64, u8>(200), Ok(200));
/// ```
pub fn try_via<U, S, T>(value: S) -> Result<T, ConversionError<S, T>>
where
    S: Clone,
    U: TryConvert<S>,
    T: TryConvert<U>,
{
    let middle = U::try_convert_from(value.clone())
        .map_err(|err| ConversionError::new(err.into_input()))?;
    T::try_convert_from(middle).map_err(|_| ConversionError::new(value))
}

/// Fallible conversion whose success is passed through `f`; failures are
/// returned untouched.
pub fn try_map<S, T, R>(value: S, f: impl FnOnce(T) -> R) -> Result<R, ConversionError<S, T>>
where
    T: TryConvert<S>,
{
    T::try_convert_from(value).map(f)
}

/// Fallible conversion that only reports whether it worked.
#[inline]
pub fn try_from_option<S, T>(value: S) -> Option<T>
where
    T: TryConvert<S>,
{
    T::try_convert_from(value).ok()
}

/// Fallible conversion that hands the input back on failure, without the
/// type names.
#[inline]
pub fn try_from_either<S, T>(value: S) -> Result<T, S>
where
    T: TryConvert<S>,
{
    T::try_convert_from(value).map_err(ConversionError::into_input)
}

/// [`try_from`], panicking on failure.
///
/// # Panics
///
/// If the conversion fails; the message is the error's `Display` output.
#[track_caller]
pub fn unwrap_from<S, T>(value: S) -> T
where
    S: Debug,
    T: TryConvert<S>,
{
    match T::try_convert_from(value) {
        Ok(out) => out,
        Err(err) => fail(err),
    }
}

/// [`try_into`], panicking on failure.
///
/// # Panics
///
/// If the conversion fails.
#[track_caller]
pub fn unwrap_into<T, S>(value: S) -> T
where
    S: Debug,
    T: TryConvert<S>,
{
    match T::try_convert_from(value) {
        Ok(out) => out,
        Err(err) => fail(err),
    }
}

/// [`try_via`], panicking on failure.
///
/// # Panics
///
/// If either step fails.
#[track_caller]
pub fn unwrap_via<U, S, T>(value: S) -> T
where
    S: Clone + Debug,
    U: TryConvert<S>,
    T: TryConvert<U>,
{
    match try_via::<U, S, T>(value) {
        Ok(out) => out,
        Err(err) => fail(err),
    }
}

/// [`try_map`], panicking on failure.
///
/// # Panics
///
/// If the conversion fails.
#[track_caller]
pub fn unwrap_try_map<S, T, R>(value: S, f: impl FnOnce(T) -> R) -> R
where
    S: Debug,
    T: TryConvert<S>,
{
    match try_map(value, f) {
        Ok(out) => out,
        Err(err) => fail(err),
    }
}

#[cold]
#[track_caller]
fn fail<S: Debug, T>(err: ConversionError<S, T>) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        source_type = err.source_type(),
        target_type = err.target_type(),
        input = ?err.input(),
        "unrecoverable conversion failure"
    );
    panic!("{err}")
}

// ── Method syntax ───────────────────────────────────────────────────────────

/// Method-call form of the two capabilities, available on every type.
///
/// ```
/// use conv_core::ConvertExt;
///
/// let wide: i64 = 7i32.convert_as();
/// assert_eq!(wide, 7);
/// assert!(300i32.try_convert_as::<u8>().is_err());
/// ```
pub trait ConvertExt: Sized {
    /// Infallibly convert `self` into `T`.
    #[inline]
    fn convert_as<T>(self) -> T
    where
        T: Convert<Self>,
    {
        T::convert_from(self)
    }

    /// Attempt to convert `self` into `T`.
    #[inline]
    fn try_convert_as<T>(self) -> Result<T, ConversionError<Self, T>>
    where
        T: TryConvert<Self>,
    {
        T::try_convert_from(self)
    }
}

impl<S> ConvertExt for S {}
