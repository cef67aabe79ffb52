//! Lens optics for focusing on struct fields and tuple slots.
//!
//! A Lens reads and replaces a part that is always present. In this crate
//! lenses mostly appear as arguments to the focusing helpers (`prop`, `props`,
//! `component`) of prisms and traversals, where they are composed into a
//! partial or multi-focus optic.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::Lens;
//! use focal::{lens, props};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32, label: String }
//!
//! let x_lens = lens!(Point, x);
//! let point = Point { x: 10, y: 20, label: "p".into() };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let xy = props!(Point, x, y);
//! let swapped = xy.modify(point, |(x, y)| (y, x));
//! assert_eq!((swapped.x, swapped.y), (20, 10));
//! ```

use std::marker::PhantomData;

use super::optional::{ComposedOptional, Optional};
use super::prism::{Prism, PrismAsOptional};
use super::traversal::Traversal;
use crate::typeclass::Applicative;

/// A Lens focuses on exactly one part of a whole.
///
/// `get` returns an owned copy of the part so that lenses over computed views
/// (several fields gathered into a tuple, a map entry as an `Option`) share one
/// interface with plain field lenses.
///
/// # Type Parameters
///
/// - `S`: The whole
/// - `A`: The part
pub trait Lens<S, A> {
    /// Reads the part.
    fn get(&self, source: &S) -> A;

    /// Replaces the part, returning the rebuilt whole.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the part with `function` applied to it.
    fn modify<Function>(&self, source: S, function: Function) -> S
    where
        Function: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Modifies the part inside the effect context `F`.
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(A) -> F::WithType<A>,
    {
        let current = self.get(&source);
        F::map::<A, S, _>(function(current), |value| self.set(source, value))
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { address: Address }
    ///
    /// let city = lens!(Person, address).compose(lens!(Address, city));
    /// let person = Person { address: Address { city: "Kyoto".into() } };
    ///
    /// assert_eq!(city.get(&person), "Kyoto");
    /// assert_eq!(city.set(person, "Osaka".into()).address.city, "Osaka");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism focusing inside the part.
    fn compose_prism<B, P>(
        self,
        other: P,
    ) -> ComposedOptional<LensAsOptional<Self, S, A>, PrismAsOptional<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), PrismAsOptional::new(other))
    }

    /// Views this lens as an [`Optional`] whose part is always present.
    fn to_optional(self) -> LensAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }

    /// Views this lens as a [`Traversal`] with exactly one focus.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

// =============================================================================
// FunctionLens
// =============================================================================

/// A lens implemented using getter and setter functions.
///
/// The `lens!` and `props!` macros and `#[derive(Lenses)]` generate a
/// `FunctionLens`.
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, Get, Set>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, A) -> S,
{
    getter: Get,
    setter: Set,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, Get, Set> FunctionLens<S, A, Get, Set>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: Get, setter: Set) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Get, Set> Lens<S, A> for FunctionLens<S, A, Get, Set>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, Get, Set> Clone for FunctionLens<S, A, Get, Set>
where
    Get: Fn(&S) -> A + Clone,
    Set: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, Get, Set> std::fmt::Debug for FunctionLens<S, A, Get, Set>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedLens
// =============================================================================

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `A`: The intermediate type
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.first
            .modify(source, |intermediate| self.second.set(intermediate, value))
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

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// Tuple components
// =============================================================================

/// Tuples whose slot `INDEX` can be read and replaced.
///
/// Implemented for tuples of two to four elements.
pub trait Component<const INDEX: usize>: Sized {
    /// The type stored in slot `INDEX`.
    type Output;

    /// Reads slot `INDEX`.
    fn get_component(&self) -> Self::Output;

    /// Replaces slot `INDEX`.
    #[must_use]
    fn set_component(self, value: Self::Output) -> Self;
}

macro_rules! tuple_component {
    ($index:tt => $output:ident; $($element:ident),+) => {
        impl<$($element),+> Component<$index> for ($($element,)+)
        where
            $output: Clone,
        {
            type Output = $output;

            fn get_component(&self) -> $output {
                self.$index.clone()
            }

            fn set_component(mut self, value: $output) -> Self {
                self.$index = value;
                self
            }
        }
    };
}

tuple_component!(0 => A; A, B);
tuple_component!(1 => B; A, B);
tuple_component!(0 => A; A, B, C);
tuple_component!(1 => B; A, B, C);
tuple_component!(2 => C; A, B, C);
tuple_component!(0 => A; A, B, C, D);
tuple_component!(1 => B; A, B, C, D);
tuple_component!(2 => C; A, B, C, D);
tuple_component!(3 => D; A, B, C, D);

/// A lens focusing slot `INDEX` of a tuple.
pub struct ComponentLens<T, const INDEX: usize> {
    _marker: PhantomData<fn() -> T>,
}

impl<T, const INDEX: usize> ComponentLens<T, INDEX> {
    /// Creates a lens on slot `INDEX`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates a lens on slot `INDEX` of a tuple.
///
/// # Example
///
/// ```
/// use focal::optics::{component, Lens};
///
/// let second = component::<(i32, String), 1>();
/// assert_eq!(second.get(&(1, "a".to_string())), "a");
/// assert_eq!(second.set((1, "a".to_string()), "b".to_string()), (1, "b".to_string()));
/// ```
#[must_use]
pub const fn component<T, const INDEX: usize>() -> ComponentLens<T, INDEX>
where
    T: Component<INDEX>,
{
    ComponentLens::new()
}

impl<T, const INDEX: usize> Lens<T, T::Output> for ComponentLens<T, INDEX>
where
    T: Component<INDEX>,
{
    fn get(&self, source: &T) -> T::Output {
        source.get_component()
    }

    fn set(&self, source: T, value: T::Output) -> T {
        source.set_component(value)
    }
}

impl<T, const INDEX: usize> Default for ComponentLens<T, INDEX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const INDEX: usize> Clone for ComponentLens<T, INDEX> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const INDEX: usize> Copy for ComponentLens<T, INDEX> {}

impl<T, const INDEX: usize> std::fmt::Debug for ComponentLens<T, INDEX> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "ComponentLens<{INDEX}>")
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// A lens viewed as an [`Optional`] whose part is always present.
pub struct LensAsOptional<L, S, A> {
    lens: L,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<L, S, A> LensAsOptional<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Optional<S, A> for LensAsOptional<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }

    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnOnce(A) -> F::WithType<A>,
    {
        self.lens.modify_f::<F, _>(source, function)
    }
}

impl<L: Clone, S, A> Clone for LensAsOptional<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsOptional<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsOptional")
            .field("lens", &self.lens)
            .finish()
    }
}

/// A lens viewed as a [`Traversal`] with exactly one focus.
pub struct LensAsTraversal<L, S, A> {
    lens: L,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn modify_f<F, Function>(&self, source: S, function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        self.lens.modify_f::<F, _>(source, function)
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsTraversal<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsTraversal")
            .field("lens", &self.lens)
            .finish()
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Creates a lens for a struct field.
///
/// The generated getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let updated = x_lens.set(Point { x: 10, y: 20 }, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:ty),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

/// Creates a lens focusing several struct fields at once as a tuple, in the
/// order they are listed.
///
/// # Syntax
///
/// ```text
/// props!(StructType, first_field, second_field, ...)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::props;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32, email: String }
///
/// let name_and_age = props!(Person, name, age);
/// let person = Person { name: "Ann".into(), age: 30, email: "a@x".into() };
///
/// assert_eq!(name_and_age.get(&person), ("Ann".to_string(), 30));
/// let renamed = name_and_age.set(person, ("Bo".into(), 31));
/// assert_eq!(renamed.email, "a@x");
/// ```
#[macro_export]
macro_rules! props {
    ($struct_type:ident, $first:ident $(, $rest:ident)+ $(,)?) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| (
                ::core::clone::Clone::clone(&source.$first),
                $(::core::clone::Clone::clone(&source.$rest),)+
            ),
            |mut source: $struct_type, ($first, $($rest,)+)| {
                source.$first = $first;
                $(source.$rest = $rest;)+
                source
            },
        )
    };
    ($struct_type:path, $first:ident $(, $rest:ident)+ $(,)?) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| (
                ::core::clone::Clone::clone(&source.$first),
                $(::core::clone::Clone::clone(&source.$rest),)+
            ),
            |mut source: $struct_type, ($first, $($rest,)+)| {
                source.$first = $first;
                $(source.$rest = $rest;)+
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::some;
    use crate::typeclass::{OptionContext, WriterContext};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get_and_set() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point), 10);
        assert_eq!(x_lens.set(point, 100), Point { x: 100, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let doubled = lens!(Point, x).modify(Point { x: 10, y: 20 }, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_lens_modify_f_option() {
        let x_lens = lens!(Point, x);
        let checked = |x: i32| x.checked_add(1);
        assert_eq!(
            x_lens.modify_f::<OptionContext, _>(Point { x: 1, y: 0 }, checked),
            Some(Point { x: 2, y: 0 })
        );
        assert_eq!(
            x_lens.modify_f::<OptionContext, _>(Point { x: i32::MAX, y: 0 }, checked),
            None
        );
    }

    #[test]
    fn test_composed_lens_modify_f_writer() {
        #[derive(Clone, PartialEq, Debug)]
        struct Outer {
            point: Point,
        }

        let y = lens!(Outer, point).compose(lens!(Point, y));
        let (log, updated) = y.modify_f::<WriterContext<Vec<i32>>, _>(
            Outer { point: Point { x: 1, y: 2 } },
            |value| (vec![value], value + 1),
        );
        assert_eq!(log, vec![2]);
        assert_eq!(updated.point, Point { x: 1, y: 3 });
    }

    #[test]
    fn test_props_macro() {
        let both = props!(Point, y, x);
        let point = Point { x: 1, y: 2 };
        assert_eq!(both.get(&point), (2, 1));
        assert_eq!(both.set(point, (5, 6)), Point { x: 6, y: 5 });
    }

    #[rstest]
    #[case((1, 2), 5, (5, 2))]
    #[case((-1, 0), 0, (0, 0))]
    fn test_component_first(#[case] pair: (i32, i32), #[case] value: i32, #[case] expected: (i32, i32)) {
        assert_eq!(component::<(i32, i32), 0>().set(pair, value), expected);
    }

    #[test]
    fn test_component_last_of_four() {
        let last = component::<(u8, u8, u8, char), 3>();
        assert_eq!(last.get(&(1, 2, 3, 'd')), 'd');
        assert_eq!(last.modify((1, 2, 3, 'd'), |c| c.to_ascii_uppercase()), (1, 2, 3, 'D'));
    }

    #[test]
    fn test_component_lens_debug() {
        assert_eq!(format!("{:?}", component::<(i32, i32, i32), 2>()), "ComponentLens<2>");
    }

    #[test]
    fn test_lens_compose_prism() {
        #[derive(Clone, PartialEq, Debug)]
        struct Config {
            port: Option<u16>,
        }

        let port = lens!(Config, port).compose_prism(some::<u16>());
        assert_eq!(port.get_option(&Config { port: Some(80) }), Some(80));
        assert_eq!(port.set(Config { port: None }, 80), Config { port: None });
    }

    #[test]
    fn test_lens_to_traversal() {
        let traversal = lens!(Point, x).to_traversal();
        assert_eq!(traversal.get_all(Point { x: 10, y: 20 }), vec![10]);
    }

    #[test]
    fn test_lens_to_optional() {
        let optional = lens!(Point, y).to_optional();
        assert_eq!(optional.get_option(&Point { x: 0, y: 4 }), Some(4));
    }
}
