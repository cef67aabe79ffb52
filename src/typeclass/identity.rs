//! Identity wrapper type and the identity effect context.
//!
//! [`Identity`] wraps a value and adds nothing. [`IdentityContext`] is the
//! effect context whose `WithType<T>` is `Identity<T>`: running a traversal's
//! `modify_f` in it is exactly a pure, in-shape update.

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// The effect context of pure computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityContext {}

impl TypeConstructor for IdentityContext {
    type WithType<T> = Identity<T>;
}

impl Functor for IdentityContext {
    #[inline]
    fn map<A, B, Function>(value: Identity<A>, function: Function) -> Identity<B>
    where
        Function: FnOnce(A) -> B,
    {
        Identity(function(value.0))
    }
}

impl Applicative for IdentityContext {
    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn map2<A, B, C, Function>(
        first: Identity<A>,
        second: Identity<B>,
        function: Function,
    ) -> Identity<C>
    where
        Function: FnOnce(A, B) -> C,
    {
        Identity(function(first.0, second.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn test_new_and_into_inner_roundtrip(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[test]
    fn test_as_inner_borrows() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
    }

    #[test]
    fn test_from_wraps() {
        let wrapped: Identity<u8> = 3.into();
        assert_eq!(wrapped, Identity(3));
    }

    #[test]
    fn test_pure_then_map_is_application() {
        let result = IdentityContext::map(IdentityContext::pure(3), |x: i32| x + 4);
        assert_eq!(result.into_inner(), 7);
    }
}
