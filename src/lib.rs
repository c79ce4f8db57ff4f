//! # conv-core
//!
//! Type-directed conversions that say up front whether they can fail.
//!
//! ---
//!
//! ## Two capabilities, keyed by a pair of types
//!
//! **[`Convert<S>`]**: implemented by a target type `T` when every `S` maps to
//! a distinct `T`. Total, pure, panic-free. There is no error path at all.
//!
//! **[`TryConvert<S>`]**: implemented by `T` when some `S` values have no `T`
//! counterpart. Returns a [`ConversionError`] carrying the source type name,
//! the target type name, and the untouched input.
//!
//! Every `Convert` pair is automatically a `TryConvert` pair that always
//! succeeds, so the two never disagree. Which implementation runs is decided
//! by the compiler from the `(S, T)` pair at the call site.
//!
//! ```
//! use conv_core::{Convert, TryConvert};
//!
//! let wide = i64::convert_from(-5i32);
//! assert_eq!(wide, -5);
//!
//! let err = i8::try_convert_from(128u8).unwrap_err();
//! assert_eq!(*err.input(), 128);
//! ```
//!
//! ## Module overview
//!
//! | Module | Key items | What it does |
//! |--------|-----------|--------------|
//! | [`convert`] | [`Convert`] | Infallible capability and its admission rules |
//! | [`try_convert`] | [`TryConvert`] | Fallible capability, lifting of infallible pairs |
//! | [`error`] | [`ConversionError`] | The one failure value |
//! | [`instances`] | | Integers, big integers, floats, rationals, complex numbers |
//! | [`decimal`] | [`Decimal`] | Fixed-point decimals, `BigInt` ↔ `Decimal<SCALE>` |
//! | [`nonempty`] | [`NonEmpty`] | Non-empty sequences, `Vec<T>` ↔ `NonEmpty<T>` |
//! | [`utility`] | [`from`], [`try_via`], [`over`], [`ConvertExt`], … | Wrappers over the two capabilities |
//! | [`literal`] | [`literal!`] | Compile-time checked integer literals |
//!
//! ## Catalog policy
//!
//! | From → to | Capability |
//! |-----------|------------|
//! | integer → wider integer (on every platform) | `Convert` |
//! | integer → narrower / other signedness | `TryConvert`, fails outside `[MIN, MAX]` |
//! | integer → float | `Convert` if always exact, else `TryConvert` bounded by `2^24 - 1` / `2^53 - 1` |
//! | float → integer | `TryConvert`: no NaN, no infinity, no fraction, same bounds |
//! | float → `BigRational` | `TryConvert`: every finite value |
//! | `f32` → `f64` | `Convert` |
//! | `T` → `Ratio<T>` / `Complex<T>` | `Convert` |
//! | `Ratio<T>` / `Complex<T>` → `T` | `TryConvert`: denominator one / imaginary part zero |
//! | `BigInt` ↔ `Decimal<SCALE>` | `Convert` both ways |
//! | `Vec<T>` → `NonEmpty<T>` | `TryConvert`: fails when empty |
//! | `NonEmpty<T>` → `Vec<T>` | `Convert` |
//!
//! ## Features
//!
//! - `std`: link the standard library (the crate is `no_std` + `alloc` by default).
//! - `serde`: serialisation for [`NonEmpty`], [`Decimal`] and [`ConversionError`].
//! - `tracing`: the panicking utilities emit an `error` event before panicking.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod convert;
pub mod decimal;
pub mod error;
pub mod instances;
pub mod literal;
pub mod nonempty;
pub mod try_convert;
pub mod utility;

pub use convert::Convert;
pub use decimal::Decimal;
pub use error::ConversionError;
pub use nonempty::NonEmpty;
pub use try_convert::TryConvert;
pub use utility::{
    from, into, over, try_from, try_from_either, try_from_option, try_into, try_map, try_via,
    unwrap_from, unwrap_into, unwrap_try_map, unwrap_via, via, ConvertExt,
};
