//! Monoid type class - semigroups with an identity element.
//!
//! A monoid supplies the two ingredients of the accumulating effect context
//! ([`ConstContext`](super::ConstContext)): a neutral element for `pure` and
//! an associative `combine` for `map2`.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of `iterator`, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:literal => $($numeric:ty),+) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_combine_all_of_nothing_is_empty() {
        assert_eq!(String::combine_all(Vec::<String>::new()), "");
        assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
        assert_eq!(All::combine_all(Vec::new()), All(true));
        assert_eq!(Any::combine_all(Vec::new()), Any(false));
    }

    #[test]
    fn test_bounded_identities() {
        assert_eq!(Max::<i32>::empty(), Max(i32::MIN));
        assert_eq!(Min::<u8>::empty(), Min(u8::MAX));
    }

    proptest! {
        #[test]
        fn test_sum_identity_laws(value in any::<i32>()) {
            prop_assert_eq!(Sum::empty().combine(Sum(value)), Sum(value));
            prop_assert_eq!(Sum(value).combine(Sum::empty()), Sum(value));
        }

        #[test]
        fn test_vec_identity_laws(values in prop::collection::vec(any::<u8>(), 0..16)) {
            prop_assert_eq!(Vec::empty().combine(values.clone()), values.clone());
            prop_assert_eq!(values.clone().combine(Vec::empty()), values);
        }

        #[test]
        fn test_first_identity_laws(value in any::<Option<i16>>()) {
            prop_assert_eq!(First::empty().combine(First(value)), First(value));
            prop_assert_eq!(First(value).combine(First::empty()), First(value));
        }
    }
}
