//! The constant functor and the accumulating effect context.
//!
//! `Const<M, A>` holds an `M` and only pretends to hold an `A`. Mapping over it
//! does nothing; combining two of them combines their accumulators with the
//! [`Monoid`] of `M`, and `pure` yields the monoid's neutral element.
//!
//! Running a traversal's `modify_f` in [`ConstContext<M>`] therefore never
//! rebuilds the whole: it only folds the focused parts into an `M`, left to
//! right. Every read-only derivation of a traversal (`fold_map`, `get_all`,
//! `length`, ...) is built this way.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Applicative, Const, ConstContext, Sum};
//!
//! let left: Const<Sum<i32>, &str> = Const::new(Sum(1));
//! let right: Const<Sum<i32>, char> = Const::new(Sum(2));
//! let both = ConstContext::<Sum<i32>>::map2(left, right, |_, _| ());
//! assert_eq!(both.into_inner(), Sum(3));
//! ```

use std::marker::PhantomData;

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// An accumulator `M` tagged with a phantom value type `A`.
pub struct Const<M, A> {
    accumulator: M,
    _marker: PhantomData<fn() -> A>,
}

impl<M, A> Const<M, A> {
    /// Wraps an accumulator.
    #[inline]
    pub const fn new(accumulator: M) -> Self {
        Self {
            accumulator,
            _marker: PhantomData,
        }
    }

    /// Returns the accumulator.
    #[inline]
    pub fn into_inner(self) -> M {
        self.accumulator
    }

    /// Changes the phantom value type.
    #[inline]
    pub fn retag<B>(self) -> Const<M, B> {
        Const::new(self.accumulator)
    }
}

impl<M: Clone, A> Clone for Const<M, A> {
    fn clone(&self) -> Self {
        Self::new(self.accumulator.clone())
    }
}

impl<M: PartialEq, A> PartialEq for Const<M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.accumulator == other.accumulator
    }
}

impl<M: Eq, A> Eq for Const<M, A> {}

impl<M: std::fmt::Debug, A> std::fmt::Debug for Const<M, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Const").field(&self.accumulator).finish()
    }
}

/// The accumulating effect context for the monoid `M`.
pub struct ConstContext<M>(PhantomData<fn() -> M>);

impl<M> TypeConstructor for ConstContext<M> {
    type WithType<T> = Const<M, T>;
}

impl<M> Functor for ConstContext<M> {
    #[inline]
    fn map<A, B, Function>(value: Const<M, A>, _function: Function) -> Const<M, B>
    where
        Function: FnOnce(A) -> B,
    {
        value.retag()
    }
}

impl<M: Monoid> Applicative for ConstContext<M> {
    #[inline]
    fn pure<A>(_value: A) -> Const<M, A> {
        Const::new(M::empty())
    }

    #[inline]
    fn map2<A, B, C, Function>(
        first: Const<M, A>,
        second: Const<M, B>,
        _function: Function,
    ) -> Const<M, C>
    where
        Function: FnOnce(A, B) -> C,
    {
        Const::new(first.accumulator.combine(second.accumulator))
    }
}

impl<M> std::fmt::Debug for ConstContext<M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ConstContext").finish()
    }
}
