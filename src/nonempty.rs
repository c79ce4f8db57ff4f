//! A sequence with at least one element, and its conversions to and from
//! [`Vec`].
//!
//! `Vec<T> → NonEmpty<T>` fails exactly when the vector is empty.
//! `NonEmpty<T> → Vec<T>` always succeeds. Both keep element order.

use alloc::vec::{self, Vec};
use core::iter::{self, Chain, Once};
use core::slice;

use crate::convert::Convert;
use crate::error::ConversionError;
use crate::try_convert::TryConvert;

/// A non-empty sequence: one `head` element followed by a possibly empty
/// `tail`.
///
/// ```
/// use conv_core::{NonEmpty, TryConvert};
///
/// let xs = NonEmpty::try_convert_from(vec![1, 2, 3]).unwrap();
/// assert_eq!(*xs.head(), 1);
/// assert_eq!(xs.tail(), &[2, 3]);
/// assert!(NonEmpty::<i32>::try_convert_from(Vec::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmpty<T> {
    /// Build from a first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// A one-element sequence.
    pub fn singleton(head: T) -> Self {
        Self { head, tail: Vec::new() }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Everything after the first element.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element (the head for a singleton).
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements; never zero.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Chain<Once<&T>, slice::Iter<'_, T>> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> NonEmpty<U> {
        NonEmpty {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl<T> Convert<NonEmpty<T>> for Vec<T> {
    fn convert_from(value: NonEmpty<T>) -> Self {
        let mut out = Vec::with_capacity(value.len());
        out.push(value.head);
        out.extend(value.tail);
        out
    }
}

impl<T> TryConvert<Vec<T>> for NonEmpty<T> {
    fn try_convert_from(value: Vec<T>) -> Result<Self, ConversionError<Vec<T>, Self>> {
        if value.is_empty() {
            return Err(ConversionError::new(value));
        }
        let mut items = value.into_iter();
        match items.next() {
            Some(head) => Ok(Self { head, tail: items.collect() }),
            None => Err(ConversionError::new(Vec::new())),
        }
    }
}
