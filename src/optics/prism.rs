//! Prism optics for focusing on one shape of a whole.
//!
//! A Prism is a partial, reversible view: `get_option` extracts the part when
//! the whole has the targeted shape (an enum variant, the `Some` of an
//! `Option`, the `Ok` of a `Result`), and `reverse_get` builds a whole of that
//! shape from the part alone.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **Round trip**: building then reading yields the original part.
//!    ```text
//!    prism.get_option(&prism.reverse_get(a)) == Some(a)
//!    ```
//!
//! 2. **Match**: if reading succeeds, building from the result yields the
//!    original whole.
//!    ```text
//!    prism.get_option(&s) == Some(a)  implies  prism.reverse_get(a) == s
//!    ```
//!
//! Nothing is promised for wholes of another shape; they are never rebuilt.
//!
//! # Examples
//!
//! ```
//! use focal::optics::Prism;
//! use focal::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.get_option(&Shape::Rectangle(3.0, 4.0)), None);
//!
//! let grown = circle_prism.modify(Shape::Circle(5.0), |radius| radius * 2.0);
//! assert_eq!(grown, Shape::Circle(10.0));
//!
//! let untouched = circle_prism.modify(Shape::Rectangle(3.0, 4.0), |radius| radius * 2.0);
//! assert_eq!(untouched, Shape::Rectangle(3.0, 4.0));
//! ```

use std::marker::PhantomData;

use super::at::AtKey;
use super::filtered::FindFirst;
use super::ixed::Ixed;
use super::lens::{Component, ComponentLens, Lens, LensAsOptional};
use super::optional::{ComposedOptional, Optional};
use super::standard_optics::{LeftPrism, RightPrism, SomePrism};
use super::traversal::{ComposedTraversal, Traversal, TraversableTraversal};
use crate::typeclass::{Applicative, KeyedMap, Traversable};

/// A Prism focuses on the part of a whole that has one particular shape.
///
/// # Type Parameters
///
/// - `S`: The whole
/// - `A`: The part
///
/// # Laws
///
/// 1. `prism.get_option(&prism.reverse_get(a)) == Some(a)`
/// 2. If `prism.get_option(&s) == Some(a)` then `prism.reverse_get(a) == s`
pub trait Prism<S, A> {
    /// Extracts the part if `source` has the targeted shape.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Builds a whole of the targeted shape from a part.
    fn reverse_get(&self, value: A) -> S;

    /// Returns `true` if `source` has the targeted shape.
    fn is_match(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Reads the part without consuming the whole. Same as
    /// [`Prism::get_option`].
    fn preview(&self, source: &S) -> Option<A> {
        self.get_option(source)
    }

    /// Moves the part out of `source`. A whole of another shape is handed
    /// back unchanged in `Err`.
    ///
    /// Writes move the part out through this method. The default clones via
    /// [`Prism::get_option`]; every prism in this crate overrides it.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, some};
    ///
    /// assert_eq!(some::<String>().preview_owned(Some("a".to_string())), Ok("a".to_string()));
    /// assert_eq!(some::<String>().preview_owned(None), Err(None));
    /// ```
    fn preview_owned(&self, source: S) -> Result<A, S> {
        match self.get_option(&source) {
            Some(value) => Ok(value),
            None => Err(source),
        }
    }

    /// Rebuilds the whole around the modified part, or returns `source`
    /// unchanged when it has another shape.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, some};
    ///
    /// let doubled = some::<i32>().modify(Some(21), |n| n * 2);
    /// assert_eq!(doubled, Some(42));
    /// assert_eq!(some::<i32>().modify(None, |n| n * 2), None);
    /// ```
    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(A) -> A,
    {
        match self.preview_owned(source) {
            Ok(value) => self.reverse_get(function(value)),
            Err(source) => {
                trace_focus_miss!(optic = "prism", operation = "modify", "focus miss");
                source
            }
        }
    }

    /// Like [`Prism::modify`], but reports a shape mismatch as `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, right};
    ///
    /// let parsed = right::<i32, String>();
    /// assert_eq!(parsed.modify_option(Ok(1), |n| n + 1), Some(Ok(2)));
    /// assert_eq!(parsed.modify_option(Err("bad".to_string()), |n| n + 1), None);
    /// ```
    fn modify_option<Function>(&self, source: S, function: Function) -> Option<S>
    where
        Function: FnOnce(A) -> A,
    {
        let Ok(value) = self.preview_owned(source) else {
            trace_focus_miss!(optic = "prism", operation = "modify_option", "focus miss");
            return None;
        };
        Some(self.reverse_get(function(value)))
    }

    /// Replaces the part. A whole of another shape is returned unchanged.
    fn set(&self, source: S, value: A) -> S {
        self.modify(source, |_| value)
    }

    /// Modifies the part inside the effect context `F`.
    ///
    /// A whole of another shape is lifted with `F::pure` without calling
    /// `function`; a matching whole is rebuilt with `reverse_get` inside the
    /// effect.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, some};
    /// use focal::typeclass::OptionContext;
    ///
    /// let positive_double = |n: i32| (n > 0).then_some(n * 2);
    /// let prism = some::<i32>();
    ///
    /// assert_eq!(prism.modify_f::<OptionContext, _>(Some(1), positive_double), Some(Some(2)));
    /// assert_eq!(prism.modify_f::<OptionContext, _>(None, positive_double), Some(None));
    /// assert_eq!(prism.modify_f::<OptionContext, _>(Some(-1), positive_double), None);
    /// ```
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(A) -> F::WithType<A>,
    {
        match self.preview_owned(source) {
            Ok(value) => F::map::<A, S, _>(function(value), |value| self.reverse_get(value)),
            Err(source) => F::pure(source),
        }
    }

    /// Views the part through a pair of conversions.
    ///
    /// The result is a lawful Prism when `get` and `reverse` are mutually
    /// inverse on the parts this prism produces.
    fn imap<B, Get, Reverse>(self, get: Get, reverse: Reverse) -> MappedPrism<Self, A, Get, Reverse>
    where
        Self: Sized,
        Get: Fn(A) -> B,
        Reverse: Fn(B) -> A,
    {
        MappedPrism::new(self, get, reverse)
    }

    /// Narrows `get_option` to parts satisfying `predicate`.
    ///
    /// `reverse_get` is not narrowed: it still builds a whole from any part.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, some};
    ///
    /// let positive = some::<i32>().filter(|n| *n > 0);
    /// assert_eq!(positive.get_option(&Some(1)), Some(1));
    /// assert_eq!(positive.get_option(&Some(-1)), None);
    /// assert_eq!(positive.reverse_get(-1), Some(-1));
    /// ```
    fn filter<Predicate>(self, predicate: Predicate) -> FilteredPrism<Self, Predicate>
    where
        Self: Sized,
        Predicate: Fn(&A) -> bool,
    {
        FilteredPrism::new(self, predicate)
    }

    /// Composes this prism with another prism focusing inside the part.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, right, some};
    ///
    /// let ok_value = some::<Result<u8, String>>().compose(right::<u8, String>());
    ///
    /// assert_eq!(ok_value.get_option(&Some(Ok(7))), Some(7));
    /// assert_eq!(ok_value.get_option(&Some(Err("e".to_string()))), None);
    /// assert_eq!(ok_value.get_option(&None), None);
    /// assert_eq!(ok_value.reverse_get(7), Some(Ok(7)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Focuses the `Some` of an optional part.
    fn some<B>(self) -> ComposedPrism<Self, SomePrism<B>, Option<B>>
    where
        Self: Prism<S, Option<B>> + Sized,
    {
        ComposedPrism::new(self, SomePrism::new())
    }

    /// Drops an empty nullable part.
    ///
    /// Rust spells a nullable value as `Option`, so this is [`Prism::some`]
    /// under the name used when the `None` means "no value" rather than a
    /// branch of a sum type.
    fn from_nullable<B>(self) -> ComposedPrism<Self, SomePrism<B>, Option<B>>
    where
        Self: Prism<S, Option<B>> + Sized,
    {
        ComposedPrism::new(self, SomePrism::new())
    }

    /// Focuses the `Err` branch of a `Result` part.
    fn left<T, E>(self) -> ComposedPrism<Self, LeftPrism<T, E>, Result<T, E>>
    where
        Self: Prism<S, Result<T, E>> + Sized,
    {
        ComposedPrism::new(self, LeftPrism::new())
    }

    /// Focuses the `Ok` branch of a `Result` part.
    fn right<T, E>(self) -> ComposedPrism<Self, RightPrism<T, E>, Result<T, E>>
    where
        Self: Prism<S, Result<T, E>> + Sized,
    {
        ComposedPrism::new(self, RightPrism::new())
    }

    /// Views this prism as an [`Optional`].
    fn as_optional(self) -> PrismAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Composes this prism with an optional focusing inside the part.
    ///
    /// Writing through the result rewrites the part with `other.set` and
    /// rebuilds the whole with `reverse_get`; a whole of another shape is
    /// returned unchanged.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<PrismAsOptional<Self, S, A>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), other)
    }

    /// Composes this prism with a lens focusing inside the part.
    fn compose_lens<B, L>(
        self,
        other: L,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), LensAsOptional::new(other))
    }

    /// Focuses one field of the part. The lens is usually built with
    /// [`lens!`](crate::lens) or `#[derive(Lenses)]`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Optional, Prism, some};
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Pair { a: String, b: i32 }
    ///
    /// let a = some::<Pair>().prop(lens!(Pair, a));
    /// assert_eq!(a.get_option(&Some(Pair { a: "a".into(), b: 1 })), Some("a".to_string()));
    /// assert_eq!(a.get_option(&None), None);
    /// ```
    fn prop<B, L>(self, lens: L) -> ComposedOptional<PrismAsOptional<Self, S, A>, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        self.compose_lens(lens)
    }

    /// Focuses several fields of the part at once as a tuple. The lens is
    /// usually built with [`props!`](crate::props).
    fn props<B, L>(self, lens: L) -> ComposedOptional<PrismAsOptional<Self, S, A>, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        self.compose_lens(lens)
    }

    /// Focuses slot `INDEX` of a tuple part.
    fn component<const INDEX: usize>(
        self,
    ) -> ComposedOptional<
        PrismAsOptional<Self, S, A>,
        LensAsOptional<ComponentLens<A, INDEX>, A, <A as Component<INDEX>>::Output>,
        A,
    >
    where
        Self: Sized,
        A: Component<INDEX>,
    {
        self.compose_lens(ComponentLens::new())
    }

    /// Focuses the element at `index` of a sequence part.
    fn index(
        self,
        index: usize,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, <A as Ixed<usize>>::IxOptional, A>
    where
        Self: Sized,
        A: Ixed<usize>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), <A as Ixed<usize>>::ix(index))
    }

    /// Focuses the value under `key` of a keyed part.
    fn key<K>(self, key: K) -> ComposedOptional<PrismAsOptional<Self, S, A>, <A as Ixed<K>>::IxOptional, A>
    where
        Self: Sized,
        A: Ixed<K>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), <A as Ixed<K>>::ix(key))
    }

    /// Focuses the presence of `key` in a map part.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use focal::optics::{prism, Optional, Prism};
    ///
    /// let a = prism::id::<BTreeMap<&str, i32>>().at_key("a");
    /// let map = BTreeMap::from([("a", 1), ("b", 2)]);
    ///
    /// assert_eq!(a.get_option(&map), Some(Some(1)));
    /// assert_eq!(a.set(map, None), BTreeMap::from([("b", 2)]));
    /// ```
    fn at_key(
        self,
        key: <A as KeyedMap>::Key,
    ) -> ComposedOptional<
        PrismAsOptional<Self, S, A>,
        LensAsOptional<AtKey<A>, A, Option<<A as KeyedMap>::Value>>,
        A,
    >
    where
        Self: Sized,
        A: KeyedMap,
        <A as KeyedMap>::Key: Clone,
        <A as KeyedMap>::Value: Clone,
    {
        self.compose_lens(AtKey::new(key))
    }

    /// Focuses the first element of a `Vec` part satisfying `predicate`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{prism, Optional, Prism};
    ///
    /// let first_positive = prism::id::<Option<Vec<i32>>>().some().find_first(|n: &i32| *n > 0);
    ///
    /// assert_eq!(first_positive.get_option(&Some(vec![-1, 2, -3])), Some(2));
    /// assert_eq!(first_positive.set(Some(vec![-1, 2, -3]), 3), Some(vec![-1, 3, -3]));
    /// assert_eq!(first_positive.set(Some(vec![-1, -2]), 3), Some(vec![-1, -2]));
    /// ```
    fn find_first<T, Predicate>(
        self,
        predicate: Predicate,
    ) -> ComposedOptional<PrismAsOptional<Self, S, Vec<T>>, FindFirst<T, Predicate>, Vec<T>>
    where
        Self: Prism<S, Vec<T>> + Sized,
        Predicate: Fn(&T) -> bool,
    {
        ComposedOptional::new(PrismAsOptional::new(self), FindFirst::new(predicate))
    }

    /// Views this prism as a [`Traversal`] with zero or one focus.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }

    /// Composes this prism with a traversal focusing inside the part.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<PrismAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(PrismAsTraversal::new(self), other)
    }

    /// Focuses every element of a [`Traversable`] part.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Prism, Traversal, some};
    ///
    /// let letters = some::<Vec<String>>().traverse();
    /// let shouted = letters.modify(Some(vec!["a".to_string()]), |s| s.to_uppercase());
    /// assert_eq!(shouted, Some(vec!["A".to_string()]));
    /// ```
    fn traverse(self) -> ComposedTraversal<PrismAsTraversal<Self, S, A>, TraversableTraversal<A>, A>
    where
        Self: Sized,
        A: Traversable,
    {
        ComposedTraversal::new(PrismAsTraversal::new(self), TraversableTraversal::new())
    }
}

// =============================================================================
// FunctionPrism
// =============================================================================

/// A prism built from `get_option`, `reverse_get` and `preview_owned`
/// functions.
///
/// This is the most common way to create a prism. The `prism!` macro and
/// `#[derive(Prisms)]` generate a `FunctionPrism`.
///
/// # Type Parameters
///
/// - `GetOption`: Reads a clone of the part
/// - `ReverseGet`: Builds a whole from a part
/// - `PreviewOwned`: Moves the part out of the whole, or hands the whole back
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionPrism, Prism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Tree {
///     Leaf,
///     Node { value: i32, left: Box<Tree>, right: Box<Tree> },
/// }
///
/// let value = FunctionPrism::new(
///     |tree: &Tree| match tree {
///         Tree::Node { value, .. } => Some(*value),
///         Tree::Leaf => None,
///     },
///     |value: i32| Tree::Node { value, left: Box::new(Tree::Leaf), right: Box::new(Tree::Leaf) },
///     |tree: Tree| match tree {
///         Tree::Node { value, .. } => Ok(value),
///         other => Err(other),
///     },
/// );
///
/// assert_eq!(value.get_option(&Tree::Leaf), None);
/// assert_eq!(value.get_option(&value.reverse_get(1)), Some(1));
/// ```
pub struct FunctionPrism<S, A, GetOption, ReverseGet, PreviewOwned>
where
    GetOption: Fn(&S) -> Option<A>,
    ReverseGet: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Result<A, S>,
{
    get_option_function: GetOption,
    reverse_get_function: ReverseGet,
    preview_owned_function: PreviewOwned,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, GetOption, ReverseGet, PreviewOwned> FunctionPrism<S, A, GetOption, ReverseGet, PreviewOwned>
where
    GetOption: Fn(&S) -> Option<A>,
    ReverseGet: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Result<A, S>,
{
    /// Creates a new `FunctionPrism`.
    ///
    /// `preview_owned_function` must agree with `get_option_function`: it
    /// returns `Ok` exactly when `get_option_function` returns `Some`.
    #[must_use]
    pub const fn new(
        get_option_function: GetOption,
        reverse_get_function: ReverseGet,
        preview_owned_function: PreviewOwned,
    ) -> Self {
        Self {
            get_option_function,
            reverse_get_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, GetOption, ReverseGet, PreviewOwned> Prism<S, A>
    for FunctionPrism<S, A, GetOption, ReverseGet, PreviewOwned>
where
    GetOption: Fn(&S) -> Option<A>,
    ReverseGet: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Result<A, S>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }

    fn preview_owned(&self, source: S) -> Result<A, S> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, GetOption, ReverseGet, PreviewOwned> Clone
    for FunctionPrism<S, A, GetOption, ReverseGet, PreviewOwned>
where
    GetOption: Fn(&S) -> Option<A> + Clone,
    ReverseGet: Fn(A) -> S + Clone,
    PreviewOwned: Fn(S) -> Result<A, S> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(
            self.get_option_function.clone(),
            self.reverse_get_function.clone(),
            self.preview_owned_function.clone(),
        )
    }
}

impl<S, A, GetOption, ReverseGet, PreviewOwned> std::fmt::Debug
    for FunctionPrism<S, A, GetOption, ReverseGet, PreviewOwned>
where
    GetOption: Fn(&S) -> Option<A>,
    ReverseGet: Fn(A) -> S,
    PreviewOwned: Fn(S) -> Result<A, S>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// IdPrism
// =============================================================================

/// The identity prism: every whole matches and is its own part.
pub struct IdPrism<S> {
    _marker: PhantomData<fn() -> S>,
}

impl<S> IdPrism<S> {
    /// Creates the identity prism.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates the identity prism on `S`.
///
/// The identity is the starting point of a chain of focusing helpers:
///
/// ```
/// use focal::optics::{prism, Prism};
///
/// let ok = prism::id::<Result<i32, String>>().right();
/// assert_eq!(ok.get_option(&Ok(1)), Some(1));
/// assert_eq!(ok.reverse_get(2), Ok(2));
/// ```
#[must_use]
pub const fn id<S>() -> IdPrism<S> {
    IdPrism::new()
}

impl<S: Clone> Prism<S, S> for IdPrism<S> {
    fn get_option(&self, source: &S) -> Option<S> {
        Some(source.clone())
    }

    fn reverse_get(&self, value: S) -> S {
        value
    }

    fn preview_owned(&self, source: S) -> Result<S, S> {
        Ok(source)
    }

    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(S) -> S,
    {
        function(source)
    }

    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(S) -> F::WithType<S>,
    {
        function(source)
    }
}

impl<S> Default for IdPrism<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for IdPrism<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IdPrism<S> {}

impl<S> std::fmt::Debug for IdPrism<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IdPrism").finish()
    }
}

// =============================================================================
// ComposedPrism
// =============================================================================

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The outer prism
/// - `P2`: The inner prism
/// - `A`: The intermediate type (part of `P1`, whole of `P2`)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }

    fn preview_owned(&self, source: S) -> Result<B, S> {
        let intermediate = self.first.preview_owned(source)?;
        self.second
            .preview_owned(intermediate)
            .map_err(|intermediate| self.first.reverse_get(intermediate))
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

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// MappedPrism
// =============================================================================

/// A prism whose part is viewed through a pair of conversions.
///
/// Created by [`Prism::imap`].
pub struct MappedPrism<P, A, Get, Reverse> {
    prism: P,
    get: Get,
    reverse: Reverse,
    _marker: PhantomData<fn() -> A>,
}

impl<P, A, Get, Reverse> MappedPrism<P, A, Get, Reverse> {
    /// Creates a new mapped prism.
    #[must_use]
    pub const fn new(prism: P, get: Get, reverse: Reverse) -> Self {
        Self {
            prism,
            get,
            reverse,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, Get, Reverse> Prism<S, B> for MappedPrism<P, A, Get, Reverse>
where
    P: Prism<S, A>,
    Get: Fn(A) -> B,
    Reverse: Fn(B) -> A,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.get_option(source).map(&self.get)
    }

    fn reverse_get(&self, value: B) -> S {
        self.prism.reverse_get((self.reverse)(value))
    }

    fn preview_owned(&self, source: S) -> Result<B, S> {
        self.prism.preview_owned(source).map(&self.get)
    }
}

impl<P: Clone, A, Get: Clone, Reverse: Clone> Clone for MappedPrism<P, A, Get, Reverse> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone(), self.get.clone(), self.reverse.clone())
    }
}

impl<P: std::fmt::Debug, A, Get, Reverse> std::fmt::Debug for MappedPrism<P, A, Get, Reverse> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MappedPrism")
            .field("prism", &self.prism)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FilteredPrism
// =============================================================================

/// A prism whose reads are narrowed by a predicate.
///
/// Created by [`Prism::filter`]. Only `get_option` is narrowed.
pub struct FilteredPrism<P, Predicate> {
    prism: P,
    predicate: Predicate,
}

impl<P, Predicate> FilteredPrism<P, Predicate> {
    /// Creates a new filtered prism.
    #[must_use]
    pub const fn new(prism: P, predicate: Predicate) -> Self {
        Self { prism, predicate }
    }
}

impl<S, A, P, Predicate> Prism<S, A> for FilteredPrism<P, Predicate>
where
    P: Prism<S, A>,
    Predicate: Fn(&A) -> bool,
{
    fn get_option(&self, source: &S) -> Option<A> {
        let value = self.prism.get_option(source)?;
        if (self.predicate)(&value) {
            Some(value)
        } else {
            trace_focus_miss!(optic = "filter", "part rejected by predicate");
            None
        }
    }

    fn reverse_get(&self, value: A) -> S {
        self.prism.reverse_get(value)
    }

    fn preview_owned(&self, source: S) -> Result<A, S> {
        let value = self.prism.preview_owned(source)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            trace_focus_miss!(optic = "filter", "part rejected by predicate");
            Err(self.prism.reverse_get(value))
        }
    }
}

impl<P: Clone, Predicate: Clone> Clone for FilteredPrism<P, Predicate> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone(), self.predicate.clone())
    }
}

impl<P: std::fmt::Debug, Predicate> std::fmt::Debug for FilteredPrism<P, Predicate> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FilteredPrism")
            .field("prism", &self.prism)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// A prism viewed as an [`Optional`].
///
/// `set` is [`Prism::set`]: the part is replaced and the whole rebuilt with
/// `reverse_get`, unless the whole has another shape.
pub struct PrismAsOptional<P, S, A> {
    prism: P,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<P, S, A> PrismAsOptional<P, S, A> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Optional<S, A> for PrismAsOptional<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.set(source, value)
    }

    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(A) -> A,
    {
        self.prism.modify(source, function)
    }

    fn modify_option<Function>(&self, source: S, function: Function) -> Option<S>
    where
        Function: FnOnce(A) -> A,
    {
        self.prism.modify_option(source, function)
    }

    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(A) -> F::WithType<A>,
    {
        self.prism.modify_f::<F, _>(source, function)
    }
}

impl<P: Clone, S, A> Clone for PrismAsOptional<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsOptional<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsOptional")
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism viewed as a [`Traversal`] with zero or one focus.
pub struct PrismAsTraversal<P, S, A> {
    prism: P,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
{
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        self.prism.modify_f::<F, _>(source, function)
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Creates a prism for a single-field tuple variant of an enum.
///
/// The generated `get_option` clones the field; writes move it.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// For struct variants or variants with several fields, use
/// `#[derive(Prisms)]` or [`FunctionPrism::new`].
///
/// # Example
///
/// ```
/// use focal::optics::Prism;
/// use focal::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Message<T> {
///     Data(T),
///     Close,
/// }
///
/// let data = prism!(Message<String>, Data);
///
/// assert_eq!(data.get_option(&Message::Data("hi".to_string())), Some("hi".to_string()));
/// assert_eq!(data.get_option(&Message::Close), None);
/// assert_eq!(data.reverse_get("bye".to_string()), Message::Data("bye".to_string()));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => ::core::option::Option::Some(
                    ::core::clone::Clone::clone(value),
                ),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
    ($enum_type:ident < $($generic:ty),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::core::option::Option::Some(
                    ::core::clone::Clone::clone(value),
                ),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |value| -> $enum_type<$($generic),+> { $enum_type::$variant(value) },
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => ::core::option::Option::Some(
                    ::core::clone::Clone::clone(value),
                ),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
        )
    };
}
