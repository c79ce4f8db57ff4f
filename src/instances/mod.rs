//! The numeric instance catalog.
//!
//! Every `(source, target)` pair below is wired into exactly one of
//! [`Convert`](crate::Convert) or [`TryConvert`](crate::TryConvert). The
//! fallible side of an infallible pair comes from the blanket lift and is not
//! listed.
//!
//! | Module | Pairs |
//! |--------|-------|
//! | [`int`] | fixed-width integers among themselves, including `isize`/`usize` |
//! | [`big`] | fixed-width ↔ `BigInt` / `BigUint`, `BigInt` ↔ `BigUint` |
//! | [`float`] | integers ↔ `f32`/`f64`, `f32 → f64`, floats → `BigRational` |
//! | [`ratio`] | `T ↔ Ratio<T>` |
//! | [`complex`] | `T ↔ Complex<T>` |
//!
//! Fixed-point decimals live in [`crate::decimal`] and the container pair in
//! [`crate::nonempty`], next to the types they introduce.

pub mod big;
pub mod complex;
pub mod float;
pub mod int;
pub mod ratio;

pub use float::{MAX_EXACT_F32_INT, MAX_EXACT_F64_INT};
