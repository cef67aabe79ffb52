//! Newtype wrappers selecting a [`Semigroup`](super::Semigroup) /
//! [`Monoid`](super::Monoid) for an underlying type.
//!
//! The same `i32` can be combined by addition ([`Sum`]) or multiplication
//! ([`Product`]); the same `Option<A>` can keep its leftmost ([`First`]) or
//! rightmost ([`Last`]) value. Traversal folds pick a wrapper to decide what
//! "accumulate the focused parts" means.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: `0`)
//! - [`Product`]: multiplication (identity: `1`)
//! - [`Max`]: maximum (identity: the type's minimum, see [`Bounded`])
//! - [`Min`]: minimum (identity: the type's maximum, see [`Bounded`])
//! - [`First`]: leftmost present value (identity: `None`)
//! - [`Last`]: rightmost present value (identity: `None`)
//! - [`All`]: conjunction (identity: `true`)
//! - [`Any`]: disjunction (identity: `false`)

macro_rules! wrapper_accessors {
    ($wrapper:ident<$parameter:ident>, $inner:ty) => {
        impl<$parameter> $wrapper<$parameter> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $inner {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &$inner {
                &self.0
            }
        }

        impl<$parameter> From<$inner> for $wrapper<$parameter> {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }
    };
    ($wrapper:ident, $inner:ty) => {
        impl $wrapper {
            /// Wraps a value.
            #[inline]
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the inner value.
            #[inline]
            #[must_use]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $wrapper {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }
    };
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

wrapper_accessors!(Sum<A>, A);

/// The multiplicative semigroup/monoid.
///
/// ```rust
/// use focal::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i64>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

wrapper_accessors!(Product<A>, A);

/// The semigroup keeping the larger value.
///
/// A monoid when `A: Bounded`, with `Max(A::MIN_VALUE)` as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

wrapper_accessors!(Max<A>, A);

/// The semigroup keeping the smaller value.
///
/// A monoid when `A: Bounded`, with `Min(A::MAX_VALUE)` as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

wrapper_accessors!(Min<A>, A);

// =============================================================================
// Positional Wrappers
// =============================================================================

/// The monoid keeping the leftmost `Some`.
///
/// ```rust
/// use focal::typeclass::{First, Monoid};
///
/// let leftmost = First::combine_all(vec![First(None), First(Some(2)), First(Some(3))]);
/// assert_eq!(leftmost, First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

wrapper_accessors!(First<A>, Option<A>);

/// The monoid keeping the rightmost `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

wrapper_accessors!(Last<A>, Option<A>);

// Derived Default would require `A: Default`.
impl<A> Default for First<A> {
    fn default() -> Self {
        Self(None)
    }
}

impl<A> Default for Last<A> {
    fn default() -> Self {
        Self(None)
    }
}

// =============================================================================
// Boolean Wrappers
// =============================================================================

/// The conjunction monoid. The empty conjunction is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

wrapper_accessors!(All, bool);

/// The disjunction monoid. The empty disjunction is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

wrapper_accessors!(Any, bool);

impl Default for All {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a least and a greatest value.
///
/// Supplies the identity elements of [`Max`] and [`Min`].
///
/// ```rust
/// use focal::typeclass::Bounded;
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Percent(u8);
///
/// impl Bounded for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
/// ```
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! bounded_primitive {
    ($($primitive:ty),+) => {
        $(
            impl Bounded for $primitive {
                const MIN_VALUE: Self = <$primitive>::MIN;
                const MAX_VALUE: Self = <$primitive>::MAX;
            }
        )+
    };
}

bounded_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_accessors() {
        let mut total = Sum::new(5);
        assert_eq!(*total.as_inner(), 5);
        total = Sum::from(7);
        assert_eq!(total.into_inner(), 7);
        assert_eq!(First::new(Some('x')).into_inner(), Some('x'));
        assert!(All::new(true).into_inner());
    }

    #[test]
    fn test_defaults_are_identities() {
        assert_eq!(Sum::<i32>::default(), Sum(0));
        assert_eq!(First::<String>::default(), First(None));
        assert_eq!(Last::<String>::default(), Last(None));
        assert_eq!(All::default(), All(true));
        assert_eq!(Any::default(), Any(false));
    }

    #[rstest]
    #[case(i8::MIN, i8::MAX)]
    fn test_bounded_i8(#[case] minimum: i8, #[case] maximum: i8) {
        assert_eq!(<i8 as Bounded>::MIN_VALUE, minimum);
        assert_eq!(<i8 as Bounded>::MAX_VALUE, maximum);
    }

    #[test]
    fn test_bounded_char_and_bool() {
        assert_eq!(<char as Bounded>::MAX_VALUE, char::MAX);
        assert!(!<bool as Bounded>::MIN_VALUE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wrappers_serialize_transparently() {
        assert_eq!(serde_json::to_string(&Sum(3)).ok(), Some("3".to_string()));
        assert_eq!(
            serde_json::from_str::<First<i32>>("null").ok(),
            Some(First(None))
        );
    }
}
