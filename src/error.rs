//! The single structured failure value of the crate.
//!
//! A [`ConversionError`] records which pair of types a fallible conversion was
//! attempted between and hands the caller back the original input, untouched.
//! The type names come from [`core::any::type_name`], so they are meant for
//! diagnostics and logs rather than for matching on.

use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A failed conversion from `S` to `T`.
///
/// Carries three things, all inspectable:
/// - the name of the source type ([`source_type`](Self::source_type)),
/// - the name of the target type ([`target_type`](Self::target_type)),
/// - the original input ([`input`](Self::input) / [`into_input`](Self::into_input)).
///
/// Equality and hashing cover all three fields. The target type only appears
/// as a marker, so `T` needs no `Debug`, `PartialEq` or `Send` bounds of its own.
///
/// ```
/// use conv_core::{ConversionError, TryConvert};
///
/// let err: ConversionError<u8, i8> = i8::try_convert_from(128u8).unwrap_err();
/// assert_eq!(*err.input(), 128);
/// assert_eq!(err.source_type(), "u8");
/// assert_eq!(err.target_type(), "i8");
/// assert_eq!(err.to_string(), "failed to convert 128 from `u8` to `i8`");
/// ```
#[derive(thiserror::Error)]
#[error("failed to convert {input:?} from `{source_type}` to `{target_type}`")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionError<S, T> {
    source_type: &'static str,
    target_type: &'static str,
    input: S,
    #[cfg_attr(feature = "serde", serde(skip))]
    target: PhantomData<fn() -> T>,
}

impl<S, T> ConversionError<S, T> {
    /// Record a failed conversion of `input` from `S` into `T`.
    ///
    /// Implementors of [`TryConvert`](crate::TryConvert) build their errors
    /// with this; the input must be passed back exactly as it was received.
    pub fn new(input: S) -> Self {
        Self {
            source_type: type_name::<S>(),
            target_type: type_name::<T>(),
            input,
            target: PhantomData,
        }
    }

    /// Name of the source type.
    pub fn source_type(&self) -> &'static str {
        self.source_type
    }

    /// Name of the target type.
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    /// Borrow the input that could not be converted.
    pub fn input(&self) -> &S {
        &self.input
    }

    /// Take back ownership of the input that could not be converted.
    pub fn into_input(self) -> S {
        self.input
    }
}

impl<S: fmt::Debug, T> fmt::Debug for ConversionError<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionError")
            .field("source_type", &self.source_type)
            .field("target_type", &self.target_type)
            .field("input", &self.input)
            .finish()
    }
}

impl<S: Clone, T> Clone for ConversionError<S, T> {
    fn clone(&self) -> Self {
        Self {
            source_type: self.source_type,
            target_type: self.target_type,
            input: self.input.clone(),
            target: PhantomData,
        }
    }
}

impl<S: PartialEq, T> PartialEq for ConversionError<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.source_type == other.source_type
            && self.target_type == other.target_type
            && self.input == other.input
    }
}

impl<S: Eq, T> Eq for ConversionError<S, T> {}

impl<S: Hash, T> Hash for ConversionError<S, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source_type.hash(state);
        self.target_type.hash(state);
        self.input.hash(state);
    }
}
