//! Traversable type class - rebuilding a container through an effect.
//!
//! A `Traversable` container can run an effectful function over every element
//! and rebuild itself inside the effect, keeping its shape and length. The
//! effect is chosen at the call site through an [`Applicative`] brand, so one
//! `traverse` serves pure updates ([`IdentityContext`](super::IdentityContext)),
//! folds ([`ConstContext`](super::ConstContext)) and failing computations
//! ([`OptionContext`](super::OptionContext),
//! [`ResultContext`](super::ResultContext)) alike.
//!
//! Elements are visited in the container's iteration order. For the
//! short-circuiting contexts the first failing element decides the outcome.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! container.traverse::<IdentityContext, _>(Identity) == Identity(container)
//! ```
//!
//! ## Naturality
//!
//! Traversal commutes with any transformation between effect contexts that
//! preserves `pure` and `map2`.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{OptionContext, Traversable};
//!
//! let parsed = vec!["1", "2", "3"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect::<Vec<_>>()
//!     .traverse::<OptionContext, _>(|text| text.parse::<i32>().ok().map(|n| (n * 2).to_string()));
//! assert_eq!(parsed, Some(vec!["2".to_string(), "4".to_string(), "6".to_string()]));
//!
//! let failed = vec!["1".to_string(), "x".to_string()]
//!     .traverse::<OptionContext, _>(|text| text.parse::<i32>().ok().map(|n| n.to_string()));
//! assert_eq!(failed, None);
//! ```

use std::collections::{BTreeMap, VecDeque};

use super::applicative::Applicative;
use super::identity::Identity;

/// A container that can be rebuilt element by element inside an effect.
pub trait Traversable: Sized {
    /// The element type visited by [`Traversable::traverse`].
    type Element;

    /// Applies `function` to every element in iteration order and rebuilds
    /// the container inside the effect context `F`.
    fn traverse<F, Function>(self, function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(Self::Element) -> F::WithType<Self::Element>;
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> Traversable for Vec<T> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        let capacity = self.len();
        self.into_iter().fold(
            F::pure(Self::with_capacity(capacity)),
            |accumulator, element| {
                F::map2::<Self, T, Self, _>(
                    accumulator,
                    function(element),
                    |mut collected, element| {
                        collected.push(element);
                        collected
                    },
                )
            },
        )
    }
}

impl<T> Traversable for VecDeque<T> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        let capacity = self.len();
        self.into_iter().fold(
            F::pure(Self::with_capacity(capacity)),
            |accumulator, element| {
                F::map2::<Self, T, Self, _>(
                    accumulator,
                    function(element),
                    |mut collected, element| {
                        collected.push_back(element);
                        collected
                    },
                )
            },
        )
    }
}

// =============================================================================
// Single-slot Containers
// =============================================================================

impl<T> Traversable for Option<T> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        match self {
            Some(element) => F::map::<T, Self, _>(function(element), Some),
            None => F::pure(None),
        }
    }
}

/// Only the `Ok` value is an element; an `Err` is carried through untouched.
impl<T, E> Traversable for Result<T, E> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        match self {
            Ok(element) => F::map::<T, Self, _>(function(element), Ok),
            Err(error) => F::pure(Err(error)),
        }
    }
}

impl<T> Traversable for Box<T> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        F::map::<T, Self, _>(function(*self), Box::new)
    }
}

impl<T> Traversable for Identity<T> {
    type Element = T;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(T) -> F::WithType<T>,
    {
        F::map::<T, Self, _>(function(self.0), Identity)
    }
}

// =============================================================================
// Maps
// =============================================================================

/// Visits the values in ascending key order. Keys are never touched.
impl<K: Ord, V> Traversable for BTreeMap<K, V> {
    type Element = V;

    fn traverse<F, Function>(self, mut function: Function) -> F::WithType<Self>
    where
        F: Applicative,
        Function: FnMut(V) -> F::WithType<V>,
    {
        self.into_iter()
            .fold(F::pure(Self::new()), |accumulator, (key, value)| {
                F::map2::<Self, V, Self, _>(
                    accumulator,
                    function(value),
                    move |mut collected, value| {
                        collected.insert(key, value);
                        collected
                    },
                )
            })
    }
}
