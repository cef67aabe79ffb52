//! Optional optics - a part that may be missing, rebuilt inside the original
//! whole.
//!
//! An Optional reads like a [`Prism`](super::Prism) (`get_option`) but writes
//! like a [`Lens`](super::Lens): `set` needs the original whole, and is a no-op
//! when the part is missing. Composing a prism with a lens or an optional, and
//! the index and key focusing helpers, all produce Optionals.
//!
//! # Laws
//!
//! ```text
//! optional.get_option(&s) == Some(a)  implies  optional.set(s, a) == s
//! optional.get_option(&s) == Some(_)  implies  optional.get_option(&optional.set(s, b)) == Some(b)
//! optional.get_option(&s) == None     implies  optional.set(s, b) == s
//! ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{FunctionOptional, Optional};
//!
//! let first_char = FunctionOptional::new(
//!     |text: &String| text.chars().next(),
//!     |text: String, head: char| {
//!         let mut chars = text.chars();
//!         match chars.next() {
//!             Some(_) => std::iter::once(head).chain(chars).collect(),
//!             None => text,
//!         }
//!     },
//! );
//!
//! assert_eq!(first_char.get_option(&"ab".to_string()), Some('a'));
//! assert_eq!(first_char.set("ab".to_string(), 'c'), "cb");
//! assert_eq!(first_char.set(String::new(), 'c'), "");
//! ```

use std::marker::PhantomData;

use super::lens::{Lens, LensAsOptional};
use super::prism::{Prism, PrismAsOptional};
use super::traversal::Traversal;
use crate::typeclass::{Applicative, Identity, IdentityContext};

/// An optic focusing on zero or one part that is rebuilt in place.
///
/// `modify` and `modify_option` run [`Optional::modify_f`] in
/// [`IdentityContext`], so an optional that moves its part out of the whole
/// in `modify_f` updates without cloning anything. The provided `modify_f`
/// reads the part with `get_option` and writes it back with `set`.
pub trait Optional<S, A> {
    /// Reads the part, if present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the part. Returns `source` unchanged when the part is missing.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the part with `function` applied to it, or returns `None` when
    /// the part is missing.
    fn modify_option<Function>(&self, source: S, function: Function) -> Option<S>
    where
        Function: FnOnce(A) -> A,
    {
        let mut focused = false;
        let result = self.modify(source, |value| {
            focused = true;
            function(value)
        });
        focused.then_some(result)
    }

    /// Replaces the part with `function` applied to it. A missing part leaves
    /// `source` unchanged.
    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(A) -> A,
    {
        self.modify_f::<IdentityContext, _>(source, |value| Identity::new(function(value)))
            .into_inner()
    }

    /// Returns `true` if the part is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Modifies the part inside the effect context `F`. A missing part is
    /// lifted with `F::pure` without calling `function`.
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(A) -> F::WithType<A>,
    {
        match self.get_option(&source) {
            Some(value) => F::map::<A, S, _>(function(value), |value| self.set(source, value)),
            None => F::pure(source),
        }
    }

    /// Composes this optional with another optional focusing inside the part.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Composes this optional with a prism focusing inside the part.
    fn compose_prism<B, P>(self, other: P) -> ComposedOptional<Self, PrismAsOptional<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(other))
    }

    /// Composes this optional with a lens focusing inside the part.
    fn compose_lens<B, L>(self, other: L) -> ComposedOptional<Self, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(other))
    }

    /// Views this optional as a [`Traversal`] with zero or one focus.
    fn to_traversal(self) -> OptionalAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }
}

// =============================================================================
// FunctionOptional
// =============================================================================

/// An optional built from a `get_option` function and a `set` function.
///
/// `set_function` must leave the whole unchanged when the part is missing.
pub struct FunctionOptional<S, A, GetOption, Set>
where
    GetOption: Fn(&S) -> Option<A>,
    Set: Fn(S, A) -> S,
{
    get_option_function: GetOption,
    set_function: Set,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, GetOption, Set> FunctionOptional<S, A, GetOption, Set>
where
    GetOption: Fn(&S) -> Option<A>,
    Set: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional`.
    #[must_use]
    pub const fn new(get_option_function: GetOption, set_function: Set) -> Self {
        Self {
            get_option_function,
            set_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, GetOption, Set> Optional<S, A> for FunctionOptional<S, A, GetOption, Set>
where
    GetOption: Fn(&S) -> Option<A>,
    Set: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option_function)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.set_function)(source, value)
    }
}

impl<S, A, GetOption, Set> Clone for FunctionOptional<S, A, GetOption, Set>
where
    GetOption: Fn(&S) -> Option<A> + Clone,
    Set: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_option_function.clone(), self.set_function.clone())
    }
}

impl<S, A, GetOption, Set> std::fmt::Debug for FunctionOptional<S, A, GetOption, Set>
where
    GetOption: Fn(&S) -> Option<A>,
    Set: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedOptional
// =============================================================================

/// An optional composed of two optionals.
///
/// A miss at either stage is a miss of the whole composition.
///
/// # Type Parameters
///
/// - `O1`: The outer optional
/// - `O2`: The inner optional
/// - `A`: The intermediate type
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        self.first
            .modify(source, |intermediate| self.second.set(intermediate, value))
    }

    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(B) -> B,
    {
        self.first
            .modify(source, |intermediate| self.second.modify(intermediate, function))
    }

    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(B) -> F::WithType<B>,
    {
        self.first.modify_f::<F, _>(source, |intermediate| {
            self.second.modify_f::<F, _>(intermediate, function)
        })
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// OptionalAsTraversal
// =============================================================================

/// An optional viewed as a [`Traversal`] with zero or one focus.
pub struct OptionalAsTraversal<O, S, A> {
    optional: O,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<O, S, A> OptionalAsTraversal<O, S, A> {
    /// Wraps an optional.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self {
            optional,
            _marker: PhantomData,
        }
    }
}

impl<O, S, A> Traversal<S, A> for OptionalAsTraversal<O, S, A>
where
    O: Optional<S, A>,
{
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        self.optional.modify_f::<F, _>(source, function)
    }
}

impl<O: Clone, S, A> Clone for OptionalAsTraversal<O, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.optional.clone())
    }
}

impl<O: std::fmt::Debug, S, A> std::fmt::Debug for OptionalAsTraversal<O, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionalAsTraversal")
            .field("optional", &self.optional)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{index, some};
    use crate::typeclass::OptionContext;

    fn head() -> impl Optional<Vec<i32>, i32> + Clone {
        index::<Vec<i32>>(0)
    }

    #[test]
    fn test_modify_option_distinguishes_miss() {
        assert_eq!(head().modify_option(vec![1, 2], |n| n + 1), Some(vec![2, 2]));
        assert_eq!(head().modify_option(Vec::new(), |n| n + 1), None);
    }

    #[test]
    fn test_modify_missing_is_noop() {
        assert_eq!(head().modify(Vec::new(), |n| n + 1), Vec::<i32>::new());
    }

    #[test]
    fn test_is_present() {
        assert!(head().is_present(&vec![0]));
        assert!(!head().is_present(&vec![]));
    }

    #[test]
    fn test_modify_f_short_circuits() {
        let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
        assert_eq!(head().modify_f::<OptionContext, _>(vec![4, 3], halve), Some(vec![2, 3]));
        assert_eq!(head().modify_f::<OptionContext, _>(vec![3, 4], halve), None);
        assert_eq!(head().modify_f::<OptionContext, _>(vec![], halve), Some(vec![]));
    }

    #[test]
    fn test_compose_prism() {
        let head_some = index::<Vec<Option<i32>>>(0).compose_prism(some::<i32>());
        assert_eq!(head_some.get_option(&vec![Some(1)]), Some(1));
        assert_eq!(head_some.get_option(&vec![None]), None);
        assert_eq!(head_some.set(vec![Some(1), Some(5)], 9), vec![Some(9), Some(5)]);
        assert_eq!(head_some.set(vec![None], 9), vec![None]);
    }

    #[test]
    fn test_to_traversal() {
        let traversal = head().to_traversal();
        assert_eq!(traversal.get_all(vec![7, 8]), vec![7]);
        assert_eq!(traversal.length(Vec::new()), 0);
    }

    #[test]
    fn test_function_optional_debug() {
        let optional = FunctionOptional::new(|s: &String| s.chars().next(), |s: String, _: char| s);
        assert!(format!("{optional:?}").starts_with("FunctionOptional"));
    }
}
