//! Effect contexts and the algebraic structures behind the optics.
//!
//! Rust has no higher-kinded types, so an effect context is named by a
//! zero-sized *brand* implementing [`TypeConstructor`], whose generic
//! associated type `WithType<T>` is the wrapped value. [`Functor`] and
//! [`Applicative`] are implemented on the brands:
//!
//! | Brand                 | `WithType<T>`   | Used for                          |
//! |-----------------------|-----------------|-----------------------------------|
//! | [`IdentityContext`]   | `Identity<T>`   | pure `modify` / `set`             |
//! | [`ConstContext<M>`]   | `Const<M, T>`   | `fold_map`, `get_all`, `length`   |
//! | [`OptionContext`]     | `Option<T>`     | updates that may give up          |
//! | [`ResultContext<E>`]  | `Result<T, E>`  | updates that may fail with `E`    |
//! | [`WriterContext<W>`]  | `(W, T)`        | updates that log as they go       |
//!
//! [`Traversable`] containers rebuild themselves in any of these contexts;
//! [`KeyedMap`] supplies the map operations used by key focusing.
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`], [`All`],
//!   [`Any`]: wrappers selecting a monoid for an underlying type
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Applicative, Monoid, OptionContext, Semigroup, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(String::empty().combine("hello".to_string()), "hello");
//! assert_eq!(OptionContext::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! ```

mod applicative;
mod constant;
mod functor;
mod higher;
mod identity;
mod keyed_map;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, OptionContext, ResultContext, WriterContext};
pub use constant::{Const, ConstContext};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::{Identity, IdentityContext};
pub use keyed_map::KeyedMap;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};
