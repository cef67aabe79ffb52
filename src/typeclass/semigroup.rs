//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{All, Any, First, Last, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces a non-empty iterator with [`Semigroup::combine`].
    ///
    /// Returns `None` when the iterator is empty.
    ///
    /// ```rust
    /// use focal::typeclass::Semigroup;
    ///
    /// assert_eq!(String::reduce_all(vec!["a".to_string(), "b".to_string()]), Some("ab".to_string()));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed on either side; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

/// Keeps the leftmost present value.
impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

/// Keeps the rightmost present value.
impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.or(self.0))
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}
