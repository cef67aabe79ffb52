//! Traversal optics for focusing on zero or more parts.
//!
//! A Traversal has exactly one required method, [`Traversal::modify_f`], which
//! rebuilds the whole after running an effectful function over every focused
//! part, left to right. Every other operation is `modify_f` run in a fixed
//! effect context:
//!
//! | Operation                       | Context                    |
//! |---------------------------------|----------------------------|
//! | `modify`, `set`                 | `IdentityContext`          |
//! | `fold_map`, `fold`, `get_all`   | `ConstContext<M>`          |
//! | `length`, `for_all`, `exists`   | `ConstContext<Sum/All/Any>`|
//! | `head_option`, `last_option`    | `ConstContext<First/Last>` |
//!
//! Composition nests the two `modify_f` calls, so every derived operation of
//! a composed traversal follows from the operands without knowing their shape.
//!
//! # Laws
//!
//! 1. **Identity**: `traversal.modify(s, |a| a) == s`
//! 2. **Composition**: `traversal.modify(traversal.modify(s, f), g) == traversal.modify(s, |a| g(f(a)))`
//! 3. **Consistency**: `traversal.get_all(traversal.modify(s, f)) == traversal.get_all(s).into_iter().map(f).collect()`
//!
//! # Examples
//!
//! ```
//! use focal::optics::{traversal, Traversal};
//!
//! let nested = traversal::from_traversable::<Vec<Vec<i32>>>().traverse();
//!
//! assert_eq!(nested.get_all(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
//! assert_eq!(
//!     nested.modify(vec![vec![1, 2], vec![3]], |n| n * 10),
//!     vec![vec![10, 20], vec![30]]
//! );
//! ```

use std::marker::PhantomData;

use super::at::AtKey;
use super::filtered::{FilteredTraversal, FindFirst};
use super::ixed::Ixed;
use super::lens::{Component, ComponentLens, Lens, LensAsTraversal};
use super::optional::{Optional, OptionalAsTraversal};
use super::prism::{Prism, PrismAsTraversal};
use crate::typeclass::{
    All, Any, Applicative, Const, ConstContext, First, Identity, IdentityContext, KeyedMap, Last,
    Monoid, Sum, Traversable,
};

/// A Traversal focuses on zero or more parts of a whole.
///
/// # Type Parameters
///
/// - `S`: The whole
/// - `A`: The focused parts
pub trait Traversal<S, A> {
    /// Runs `function` over every focused part, left to right, and rebuilds
    /// the whole inside the effect context `F`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{traversal, Traversal};
    /// use focal::typeclass::ResultContext;
    ///
    /// let parse = |text: String| text.parse::<i32>().map(|n| n.to_string()).map_err(|_| text);
    /// let texts = traversal::from_traversable::<Vec<String>>();
    ///
    /// let ok = texts.modify_f::<ResultContext<String>, _>(vec!["01".into(), "2".into()], parse);
    /// assert_eq!(ok, Ok(vec!["1".to_string(), "2".to_string()]));
    ///
    /// let failed = texts.modify_f::<ResultContext<String>, _>(vec!["x".into(), "y".into()], parse);
    /// assert_eq!(failed, Err("x".to_string()));
    /// ```
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>;

    /// Replaces every focused part with `function` applied to it.
    fn modify<Function>(&self, source: S, mut function: Function) -> S
    where
        Function: FnMut(A) -> A,
    {
        self.modify_f::<IdentityContext, _>(source, |value| Identity::new(function(value)))
            .into_inner()
    }

    /// Replaces every focused part with `value`.
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Maps every focused part into the monoid `M` and combines the results
    /// left to right. No part yields `M::empty()`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{traversal, Traversal};
    /// use focal::typeclass::Max;
    ///
    /// let words = traversal::from_traversable::<Vec<&str>>();
    /// assert_eq!(words.fold_map(vec!["a", "abc", "ab"], |w| Max(w.len())), Max(3));
    /// assert_eq!(words.fold_map(vec![], |w: &str| Max(w.len())), Max(0));
    /// ```
    fn fold_map<M, Function>(&self, source: S, mut function: Function) -> M
    where
        M: Monoid,
        Function: FnMut(A) -> M,
    {
        self.modify_f::<ConstContext<M>, _>(source, |value| Const::new(function(value)))
            .into_inner()
    }

    /// Combines the focused parts, which are themselves a monoid.
    fn fold(&self, source: S) -> A
    where
        A: Monoid,
    {
        self.fold_map(source, |value| value)
    }

    /// Collects the focused parts in focus order.
    fn get_all(&self, source: S) -> Vec<A> {
        self.fold_map(source, |value| vec![value])
    }

    /// Counts the focused parts.
    fn length(&self, source: S) -> usize {
        self.fold_map(source, |_| Sum(1_usize)).0
    }

    /// Returns `true` if there are no focused parts.
    fn is_empty(&self, source: S) -> bool {
        self.length(source) == 0
    }

    /// Returns `true` if every focused part satisfies `predicate`.
    /// Vacuously `true` when nothing is focused.
    fn for_all<Predicate>(&self, source: S, mut predicate: Predicate) -> bool
    where
        Predicate: FnMut(&A) -> bool,
    {
        self.fold_map(source, |value| All(predicate(&value))).0
    }

    /// Returns `true` if some focused part satisfies `predicate`.
    fn exists<Predicate>(&self, source: S, mut predicate: Predicate) -> bool
    where
        Predicate: FnMut(&A) -> bool,
    {
        self.fold_map(source, |value| Any(predicate(&value))).0
    }

    /// Returns the first focused part.
    fn head_option(&self, source: S) -> Option<A> {
        self.fold_map(source, |value| First(Some(value))).0
    }

    /// Returns the last focused part.
    fn last_option(&self, source: S) -> Option<A> {
        self.fold_map(source, |value| Last(Some(value))).0
    }

    /// Keeps only the parts satisfying `predicate` in focus.
    ///
    /// Parts failing the predicate are skipped by reads and left untouched by
    /// writes.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{traversal, Traversal};
    ///
    /// let evens = traversal::from_traversable::<Vec<i32>>().filter(|n| n % 2 == 0);
    ///
    /// assert_eq!(evens.get_all(vec![1, 2, 3, 4]), vec![2, 4]);
    /// assert_eq!(evens.modify(vec![1, 2, 3, 4], |n| n * 10), vec![1, 20, 3, 40]);
    /// ```
    fn filter<Predicate>(self, predicate: Predicate) -> FilteredTraversal<Self, Predicate>
    where
        Self: Sized,
        Predicate: Fn(&A) -> bool,
    {
        FilteredTraversal::new(self, predicate)
    }

    /// Composes this traversal with another traversal focusing inside each
    /// part.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Composes this traversal with a prism; parts of another shape drop out
    /// of focus.
    fn compose_prism<B, P>(self, other: P) -> ComposedTraversal<Self, PrismAsTraversal<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, PrismAsTraversal::new(other))
    }

    /// Composes this traversal with an optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedTraversal<Self, OptionalAsTraversal<O, A, B>, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedTraversal::new(self, OptionalAsTraversal::new(other))
    }

    /// Composes this traversal with a lens.
    fn compose_lens<B, L>(self, other: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, LensAsTraversal::new(other))
    }

    /// Focuses one field of every part.
    fn prop<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        self.compose_lens(lens)
    }

    /// Focuses several fields of every part at once as a tuple.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{traversal, Traversal};
    /// use focal::props;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32, z: i32 }
    ///
    /// let xy = traversal::from_traversable::<Vec<Point>>().props(props!(Point, x, y));
    /// let points = vec![Point { x: 1, y: 2, z: 3 }];
    ///
    /// assert_eq!(xy.get_all(points.clone()), vec![(1, 2)]);
    /// assert_eq!(xy.modify(points, |(x, y)| (y, x)), vec![Point { x: 2, y: 1, z: 3 }]);
    /// ```
    fn props<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        self.compose_lens(lens)
    }

    /// Focuses slot `INDEX` of every tuple part.
    fn component<const INDEX: usize>(
        self,
    ) -> ComposedTraversal<
        Self,
        LensAsTraversal<ComponentLens<A, INDEX>, A, <A as Component<INDEX>>::Output>,
        A,
    >
    where
        Self: Sized,
        A: Component<INDEX>,
    {
        self.compose_lens(ComponentLens::new())
    }

    /// Focuses the element at `index` of every sequence part. Parts too short
    /// to have one drop out of focus.
    fn index(
        self,
        index: usize,
    ) -> ComposedTraversal<
        Self,
        OptionalAsTraversal<<A as Ixed<usize>>::IxOptional, A, <A as Ixed<usize>>::Element>,
        A,
    >
    where
        Self: Sized,
        A: Ixed<usize>,
    {
        self.compose_optional(<A as Ixed<usize>>::ix(index))
    }

    /// Focuses the value under `key` of every keyed part.
    fn key<K>(
        self,
        key: K,
    ) -> ComposedTraversal<
        Self,
        OptionalAsTraversal<<A as Ixed<K>>::IxOptional, A, <A as Ixed<K>>::Element>,
        A,
    >
    where
        Self: Sized,
        A: Ixed<K>,
    {
        self.compose_optional(<A as Ixed<K>>::ix(key))
    }

    /// Focuses the presence of `key` in every map part.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use focal::optics::{traversal, Traversal};
    ///
    /// let flags = traversal::from_traversable::<Vec<BTreeMap<&str, bool>>>().at_key("debug");
    /// let maps = vec![BTreeMap::from([("debug", true)]), BTreeMap::new()];
    ///
    /// assert_eq!(flags.get_all(maps.clone()), vec![Some(true), None]);
    /// assert_eq!(flags.set(maps, None), vec![BTreeMap::new(), BTreeMap::new()]);
    /// ```
    fn at_key(
        self,
        key: <A as KeyedMap>::Key,
    ) -> ComposedTraversal<Self, LensAsTraversal<AtKey<A>, A, Option<<A as KeyedMap>::Value>>, A>
    where
        Self: Sized,
        A: KeyedMap,
        <A as KeyedMap>::Key: Clone,
        <A as KeyedMap>::Value: Clone,
    {
        self.compose_lens(AtKey::new(key))
    }

    /// Focuses the first element satisfying `predicate` of every `Vec` part.
    fn find_first<T, Predicate>(
        self,
        predicate: Predicate,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<FindFirst<T, Predicate>, Vec<T>, T>, Vec<T>>
    where
        Self: Traversal<S, Vec<T>> + Sized,
        Predicate: Fn(&T) -> bool,
    {
        ComposedTraversal::new(self, OptionalAsTraversal::new(FindFirst::new(predicate)))
    }

    /// Focuses every element of every [`Traversable`] part.
    fn traverse(self) -> ComposedTraversal<Self, TraversableTraversal<A>, A>
    where
        Self: Sized,
        A: Traversable,
    {
        ComposedTraversal::new(self, TraversableTraversal::new())
    }
}

// =============================================================================
// IdTraversal
// =============================================================================

/// The identity traversal: the whole is its single focused part.
pub struct IdTraversal<S> {
    _marker: PhantomData<fn() -> S>,
}

impl<S> IdTraversal<S> {
    /// Creates the identity traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates the identity traversal for `S`.
///
/// # Example
///
/// ```
/// use focal::optics::{traversal, Traversal};
///
/// assert_eq!(traversal::id::<i32>().modify(1, |n| n + 1), 2);
/// assert_eq!(traversal::id::<i32>().get_all(1), vec![1]);
/// ```
#[must_use]
pub const fn id<S>() -> IdTraversal<S> {
    IdTraversal::new()
}

impl<S> Traversal<S, S> for IdTraversal<S> {
    fn modify_f<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(S) -> F::WithType<S>,
    {
        function(source)
    }
}

impl<S> Default for IdTraversal<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for IdTraversal<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IdTraversal<S> {}

impl<S> std::fmt::Debug for IdTraversal<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdTraversal")
    }
}

// =============================================================================
// TraversableTraversal
// =============================================================================

/// A traversal over the elements of a [`Traversable`] container, in
/// iteration order.
pub struct TraversableTraversal<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TraversableTraversal<T> {
    /// Creates a traversal over the elements of `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Lifts a [`Traversable`] container type into a traversal over its elements.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use focal::optics::{traversal, Traversal};
///
/// let values = traversal::from_traversable::<BTreeMap<&str, i32>>();
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
///
/// assert_eq!(values.get_all(map.clone()), vec![1, 2]);
/// assert_eq!(values.modify(map, |n| -n), BTreeMap::from([("a", -1), ("b", -2)]));
/// ```
#[must_use]
pub const fn from_traversable<T: Traversable>() -> TraversableTraversal<T> {
    TraversableTraversal::new()
}

impl<T: Traversable> Traversal<T, T::Element> for TraversableTraversal<T> {
    fn modify_f<F, Function>(&self, source: T, function: Function) -> F::WithType<T>
    where
        F: Applicative,
        Function: FnMut(T::Element) -> F::WithType<T::Element>,
    {
        source.traverse::<F, _>(function)
    }
}

impl<T> Default for TraversableTraversal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TraversableTraversal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TraversableTraversal<T> {}

impl<T> std::fmt::Debug for TraversableTraversal<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("TraversableTraversal")
    }
}

// =============================================================================
// ComposedTraversal
// =============================================================================

/// A traversal composed of two traversals.
///
/// # Type Parameters
///
/// - `T1`: The outer traversal
/// - `T2`: The inner traversal
/// - `A`: The intermediate type
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn() -> A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn modify_f<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(B) -> F::WithType<B>,
    {
        self.first.modify_f::<F, _>(source, |intermediate| {
            self.second.modify_f::<F, _>(intermediate, &mut function)
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
