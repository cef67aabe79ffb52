//! Functor type class - mapping inside an effect context.
//!
//! A `Functor` brand knows how to apply a plain function to the value carried
//! by `F::WithType<A>` without disturbing the effect around it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Functor, OptionContext};
//!
//! let mapped = OptionContext::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(mapped, Some("5".to_string()));
//!
//! let missing = OptionContext::map(None::<i32>, |n| n + 1);
//! assert_eq!(missing, None);
//! ```

use super::higher::TypeConstructor;

/// A context whose carried value can be transformed by a plain function.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside `value`.
    fn map<A, B, Function>(value: Self::WithType<A>, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(A) -> B;

    /// Replaces the carried value, keeping the effect.
    fn replace<A, B>(value: Self::WithType<A>, replacement: B) -> Self::WithType<B> {
        Self::map::<A, B, _>(value, move |_| replacement)
    }
}
