//! Infallible conversions.
//!
//! [`Convert<S>`] is implemented by a *target* type for each source type it can
//! be built from without any possibility of failure. The pair `(S, Self)`
//! selects the implementation at compile time; trait coherence guarantees
//! there is at most one per pair.
//!
//! # Admission rules
//!
//! An implementation may only exist when it is:
//! - **total**: defined for every value of `S`, never panics;
//! - **lossless**: distinct inputs produce distinct outputs;
//! - **reversible**: when `S: Convert<Self>` exists as well, converting there
//!   and back is the identity in both directions;
//! - **transitive**: if `A -> B` and `B -> C` exist, any direct `A -> C`
//!   equals their composition.
//!
//! Anything that can fail belongs in [`TryConvert`](crate::TryConvert)
//! instead. Every `Convert` implementation is lifted into an always-successful
//! `TryConvert` automatically.
//!
//! # Newtypes
//!
//! There is no structural shortcut for wrapper types. A newtype gets explicit
//! implementations in both directions:
//!
//! ```
//! use conv_core::Convert;
//!
//! struct Meters(f64);
//!
//! impl Convert<f64> for Meters {
//!     fn convert_from(value: f64) -> Self {
//!         Self(value)
//!     }
//! }
//!
//! impl Convert<Meters> for f64 {
//!     fn convert_from(value: Meters) -> Self {
//!         value.0
//!     }
//! }
//!
//! let m = Meters::convert_from(2.5);
//! assert_eq!(f64::convert_from(m), 2.5);
//! ```

/// Build `Self` from a value of type `S`; always succeeds.
pub trait Convert<S>: Sized {
    /// Perform the conversion.
    fn convert_from(value: S) -> Self;
}
