//! # focal
//!
//! Composable optics for immutable data: prisms, traversals, and the
//! focusing helpers that chain them.
//!
//! ## Overview
//!
//! An optic names a part of a larger value and knows how to read it and how
//! to rebuild the value around a new version of it. This crate provides:
//!
//! - **Prism**: zero-or-one focus that can also build the whole from the
//!   part (enum variants, `Some`, `Ok`/`Err`)
//! - **Traversal**: zero-or-more focus driven by a single effectful
//!   primitive, `modify_f`, from which `modify`, `set`, `fold_map` and
//!   `get_all` are derived
//! - **Optional** and **Lens**: the partial and total single-focus optics
//!   produced when prisms are composed with field, index and key lookups
//! - **Effect contexts**: `Identity`, `Const`, `Option`, `Result` and a
//!   writer, implemented as `Applicative` brands
//!
//! ## Feature Flags
//!
//! - `typeclass`: Effect contexts, `Traversable`, `Semigroup`/`Monoid`
//! - `optics`: Prism, Traversal, Optional, Lens and focusing helpers
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]`
//! - `serde`: `Serialize`/`Deserialize` for the value wrappers
//! - `tracing`: `TRACE` events when an optic misses its focus
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Event {
//!     Click { x: i32, y: i32 },
//!     Key(char),
//! }
//!
//! let key = focal::prism!(Event, Key);
//! let events = vec![Event::Key('a'), Event::Click { x: 1, y: 2 }, Event::Key('b')];
//!
//! let keys = traversal::from_traversable::<Vec<Event>>().compose_prism(key);
//! assert_eq!(keys.get_all(events.clone()), vec!['a', 'b']);
//!
//! let shouted = keys.modify(events, |c| c.to_ascii_uppercase());
//! assert_eq!(shouted[2], Event::Key('B'));
//! assert_eq!(shouted[1], Event::Click { x: 1, y: 2 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use focal_derive::{Lenses, Prisms};
