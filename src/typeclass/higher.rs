//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! Every effect context in this crate is therefore named by a zero-sized
//! *brand* type whose [`TypeConstructor::WithType`] associated type applies the
//! constructor to an argument.
//!
//! ```text
//! OptionContext::WithType<i32>      == Option<i32>
//! ResultContext<E>::WithType<i32>   == Result<i32, E>
//! IdentityContext::WithType<i32>    == Identity<i32>
//! ConstContext<M>::WithType<i32>    == Const<M, i32>
//! ```
//!
//! Code that must stay generic over *every* context (the primitive of a
//! [`Traversal`](crate::optics::Traversal)) is written against the brand and
//! never against a concrete wrapped type.
//!
//! # Example
//!
//! ```rust
//! use focal::typeclass::{OptionContext, TypeConstructor};
//!
//! fn nothing<F: TypeConstructor>() -> Option<F::WithType<u8>> {
//!     None
//! }
//!
//! let value: Option<Option<u8>> = nothing::<OptionContext>();
//! assert_eq!(value, None);
//! ```

/// A brand standing for a unary type constructor.
///
/// Implementors are usually uninhabited or zero-sized: they only exist at the
/// type level to select an effect context.
pub trait TypeConstructor {
    /// The constructor applied to `T`.
    type WithType<T>;
}
