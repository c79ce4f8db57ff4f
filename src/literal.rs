//! Compile-time checked integer literals.
//!
//! [`literal!`](crate::literal!) performs a fixed-width integer conversion
//! inside an inline `const` block. An out-of-range value is a build error, not
//! a runtime failure, so no `Result` is involved at the call site. The value
//! must be a constant expression; anything else should go through
//! [`TryConvert`](crate::TryConvert).
//!
//! Only the fixed-width integer catalog has a compile-time form: trait
//! methods cannot run in const contexts, so the range check here is written
//! against `MIN`/`MAX` directly and agrees with the runtime instances.

/// Convert a constant integer expression into the integer type `$target`,
/// rejecting out-of-range values at compile time.
///
/// ```
/// use conv_core::literal;
///
/// let byte: u8 = literal!(u8, 255);
/// let small: i8 = literal!(i8, -128);
/// const LIMIT: u64 = 1_000;
/// assert_eq!(literal!(u16, LIMIT), 1_000u16);
/// assert_eq!((byte, small), (255, -128));
/// ```
///
/// Untyped literals default to `i32`; suffix larger ones (`5_000_000_000u64`).
///
/// ```compile_fail
/// use conv_core::literal;
///
/// let byte: u8 = literal!(u8, 256);
/// ```
///
/// Only integer sources are accepted:
///
/// ```compile_fail
/// use conv_core::literal;
///
/// let byte: u8 = literal!(u8, 1.5);
/// ```
///
/// ```compile_fail
/// use conv_core::literal;
///
/// let byte: u8 = literal!(u8, true);
/// ```
#[macro_export]
macro_rules! literal {
    ($target:ty, $value:expr $(,)?) => {
        const {
            let wide = $crate::literal::integer_source($value) as i128;
            if wide < <$target>::MIN as i128 || wide > <$target>::MAX as i128 {
                ::core::panic!("literal is out of range for the target type");
            }
            wide as $target
        }
    };
}

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer types accepted as [`literal!`](crate::literal!) sources.
#[doc(hidden)]
pub trait IntegerSource: sealed::Sealed + Copy {}

macro_rules! integer_sources {
    ($($ty:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $ty {}
        impl IntegerSource for $ty {}
    )+};
}

integer_sources!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Identity restricted to integer sources.
#[doc(hidden)]
#[inline]
pub const fn integer_source<T: IntegerSource>(value: T) -> T {
    value
}
