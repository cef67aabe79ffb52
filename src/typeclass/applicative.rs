//! Applicative type class - lifting values and combining independent effects.
//!
//! An `Applicative` context can lift a pure value (`pure`) and combine two
//! independent contextual values under a binary function (`map2`). These two
//! operations are all a [`Traversal`](crate::optics::Traversal) needs to
//! rebuild a whole from any number of focused parts.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map2(F::pure(()), v, |(), x| x) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::map2(F::pure(a), F::pure(b), f) == F::pure(f(a, b))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! F::map2(u, F::pure(y), |g, y| g(y)) == F::map2(F::pure(y), u, |y, g| g(y))
//! ```
//!
//! ## Composition (associativity of `map2`)
//!
//! ```text
//! F::map2(F::map2(u, v, pair), w, flatten) == F::map2(u, F::map2(v, w, pair), flatten')
//! ```
//!
//! # Evaluation order
//!
//! `map2(first, second, f)` always treats `first` as the earlier effect. For the
//! short-circuiting contexts the first failure wins; for the accumulating
//! contexts the first log/accumulator is combined on the left.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Applicative, OptionContext, ResultContext};
//!
//! assert_eq!(OptionContext::pure(42), Some(42));
//! assert_eq!(OptionContext::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! assert_eq!(OptionContext::map2(Some(1), None::<i32>, |a, b| a + b), None);
//!
//! let failed: Result<i32, &str> =
//!     ResultContext::<&str>::map2(Err("first"), Err("second"), |a: i32, b: i32| a + b);
//! assert_eq!(failed, Err("first"));
//! ```

use std::marker::PhantomData;

use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A context supporting `pure` and `map2`.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Combines two independent contextual values under `function`.
    ///
    /// `first` is the earlier effect.
    fn map2<A, B, C, Function>(
        first: Self::WithType<A>,
        second: Self::WithType<B>,
        function: Function,
    ) -> Self::WithType<C>
    where
        Function: FnOnce(A, B) -> C;

    /// Pairs two contextual values.
    fn product<A, B>(
        first: Self::WithType<A>,
        second: Self::WithType<B>,
    ) -> Self::WithType<(A, B)> {
        Self::map2::<A, B, (A, B), _>(first, second, |a, b| (a, b))
    }

    /// Keeps the value of `second`, running both effects in order.
    fn product_right<A, B>(first: Self::WithType<A>, second: Self::WithType<B>) -> Self::WithType<B> {
        Self::map2::<A, B, B, _>(first, second, |_, b| b)
    }
}

// =============================================================================
// OptionContext
// =============================================================================

/// Effect context of computations that may produce nothing.
///
/// `map2` yields `None` as soon as either side is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionContext {}

impl TypeConstructor for OptionContext {
    type WithType<T> = Option<T>;
}

impl Functor for OptionContext {
    fn map<A, B, Function>(value: Option<A>, function: Function) -> Option<B>
    where
        Function: FnOnce(A) -> B,
    {
        value.map(function)
    }
}

impl Applicative for OptionContext {
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    fn map2<A, B, C, Function>(first: Option<A>, second: Option<B>, function: Function) -> Option<C>
    where
        Function: FnOnce(A, B) -> C,
    {
        match (first, second) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// ResultContext
// =============================================================================

/// Effect context of computations that may fail with `E`.
///
/// `map2` reports the error of `first` when both sides failed, so the
/// leftmost failure is the one that surfaces. Errors are never wrapped.
pub struct ResultContext<E>(PhantomData<fn() -> E>);

impl<E> TypeConstructor for ResultContext<E> {
    type WithType<T> = Result<T, E>;
}

impl<E> Functor for ResultContext<E> {
    fn map<A, B, Function>(value: Result<A, E>, function: Function) -> Result<B, E>
    where
        Function: FnOnce(A) -> B,
    {
        value.map(function)
    }
}

impl<E> Applicative for ResultContext<E> {
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, Function>(
        first: Result<A, E>,
        second: Result<B, E>,
        function: Function,
    ) -> Result<C, E>
    where
        Function: FnOnce(A, B) -> C,
    {
        let a = first?;
        let b = second?;
        Ok(function(a, b))
    }
}

impl<E> std::fmt::Debug for ResultContext<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ResultContext").finish()
    }
}

// =============================================================================
// WriterContext
// =============================================================================

/// Effect context that carries a log alongside the value.
///
/// `WithType<T>` is `(W, T)`. `map2` appends the log of `second` after the
/// log of `first`, which makes the visiting order of a traversal observable.
pub struct WriterContext<W>(PhantomData<fn() -> W>);

impl<W> TypeConstructor for WriterContext<W> {
    type WithType<T> = (W, T);
}

impl<W> Functor for WriterContext<W> {
    fn map<A, B, Function>((log, value): (W, A), function: Function) -> (W, B)
    where
        Function: FnOnce(A) -> B,
    {
        (log, function(value))
    }
}

impl<W: Monoid> Applicative for WriterContext<W> {
    fn pure<A>(value: A) -> (W, A) {
        (W::empty(), value)
    }

    fn map2<A, B, C, Function>(
        (first_log, a): (W, A),
        (second_log, b): (W, B),
        function: Function,
    ) -> (W, C)
    where
        Function: FnOnce(A, B) -> C,
    {
        (first_log.combine(second_log), function(a, b))
    }
}

impl<W> std::fmt::Debug for WriterContext<W> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("WriterContext").finish()
    }
}
