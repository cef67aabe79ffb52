//! Optics for immutable data manipulation.
//!
//! An optic describes where a part `A` lives inside a whole `S`, and can read
//! and rebuild the whole around that part. Optics are plain values: they hold
//! no state, can be reused and shared between threads, and compose into new
//! optics of a fixed shape.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens      exactly one part, always present
//! Prism     zero or one part, rebuildable from the part alone
//! Optional  zero or one part, rebuilt inside the original whole
//! Traversal zero or more parts
//!
//! Prism ∘ Prism     = Prism
//! Prism ∘ Optional  = Optional     Prism ∘ Lens = Optional
//! Lens  ∘ Lens      = Lens         Optional ∘ Optional = Optional
//! anything ∘ Traversal = Traversal
//! ```
//!
//! # Focus miss
//!
//! A wrong variant, a missing key, an out-of-range index or a filtered-out
//! value is never an error: reads come back as `None` (or an empty `Vec`) and
//! writes hand the whole back unchanged. With the `tracing` feature enabled,
//! each miss emits a `TRACE` event with target `focal::optics`.
//!
//! # Traversal and effect contexts
//!
//! [`Traversal::modify_f`] is generic over an
//! [`Applicative`](crate::typeclass::Applicative) brand. Every other traversal
//! operation is that single method run in a particular context:
//!
//! ```
//! use focal::optics::{traversal, Traversal};
//! use focal::typeclass::{OptionContext, Sum};
//!
//! let numbers = traversal::from_traversable::<Vec<i32>>();
//!
//! assert_eq!(numbers.modify(vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//! assert_eq!(numbers.fold_map(vec![1, 2, 3], Sum), Sum(6));
//! assert_eq!(numbers.get_all(vec![1, 2, 3]), vec![1, 2, 3]);
//!
//! let checked = numbers.modify_f::<OptionContext, _>(vec![1, -2], |n| (n > 0).then_some(n));
//! assert_eq!(checked, None);
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use focal::optics::{prism, Prism};
//! use focal::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.get_option(&Shape::Circle(1.5)), Some(1.5));
//! assert_eq!(circle.get_option(&Shape::Square(2.0)), None);
//! assert_eq!(circle.reverse_get(3.0), Shape::Circle(3.0));
//!
//! let maybe_circle = prism::id::<Option<Shape>>().some().compose(circle);
//! assert_eq!(maybe_circle.reverse_get(1.0), Some(Shape::Circle(1.0)));
//! ```
//!
//! # Example with Lens
//!
//! ```
//! use focal::optics::{traversal, Lens, Traversal};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, balance: i64 }
//!
//! let accounts = vec![
//!     Account { owner: "ann".into(), balance: 10 },
//!     Account { owner: "bob".into(), balance: 20 },
//! ];
//!
//! let balances = traversal::from_traversable::<Vec<Account>>().prop(lens!(Account, balance));
//! let paid = balances.modify(accounts, |balance| balance + 5);
//! assert_eq!(paid[1].balance, 25);
//! assert_eq!(paid[0].owner, "ann");
//! ```

/// Reports a focus miss when the `tracing` feature is enabled.
macro_rules! trace_focus_miss {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "focal::optics", $($field)*);
    };
}

pub mod at;
pub mod filtered;
pub mod ixed;
pub mod lens;
pub mod optional;
pub mod prism;
pub mod standard_optics;
pub mod traversal;

pub use at::{At, AtKey, at_key};
pub use filtered::{FilteredTraversal, FindFirst, find_first};
pub use ixed::{Ixed, KeyIx, SequenceIx, index, key};
pub use lens::{
    Component, ComponentLens, ComposedLens, FunctionLens, Lens, LensAsOptional, LensAsTraversal,
    component,
};
pub use optional::{ComposedOptional, FunctionOptional, Optional, OptionalAsTraversal};
pub use prism::{
    ComposedPrism, FilteredPrism, FunctionPrism, IdPrism, MappedPrism, Prism, PrismAsOptional,
    PrismAsTraversal,
};
pub use standard_optics::{
    LeftPrism, PredicatePrism, RightPrism, SomePrism, from_nullable, from_predicate, left, right,
    some,
};
pub use traversal::{ComposedTraversal, IdTraversal, TraversableTraversal, Traversal};
