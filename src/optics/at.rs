//! Focusing the presence of a key.
//!
//! [`AtKey`] is a lens from a map to `Option<V>`: reading reports whether the
//! key is present, writing `Some(v)` inserts or overwrites, and writing `None`
//! removes the key. Compare [`key`](super::key), which focuses the value only
//! and never changes the key set.
//!
//! # Laws
//!
//! ```text
//! at.get(&at.set(m, v)) == v                    for v = Some(_) or None
//! at.set(at.set(m, None), None) == at.set(m, None)
//! at.set(m, at.get(&m)) == m
//! ```
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use focal::optics::{at_key, Lens};
//!
//! let retries = at_key::<HashMap<&str, u32>>("retries");
//!
//! let config = retries.set(HashMap::new(), Some(3));
//! assert_eq!(retries.get(&config), Some(3));
//!
//! let config = retries.set(config, None);
//! assert!(config.is_empty());
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use crate::typeclass::{Applicative, KeyedMap};

/// A lens focusing whether `key` is present in a map, and its value if so.
pub struct AtKey<M: KeyedMap> {
    key: M::Key,
    _marker: PhantomData<fn() -> M>,
}

impl<M: KeyedMap> AtKey<M> {
    /// Creates the lens for `key`.
    #[must_use]
    pub const fn new(key: M::Key) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The focused key.
    #[must_use]
    pub const fn key(&self) -> &M::Key {
        &self.key
    }
}

impl<M> Lens<M, Option<M::Value>> for AtKey<M>
where
    M: KeyedMap,
    M::Key: Clone,
    M::Value: Clone,
{
    fn get(&self, source: &M) -> Option<M::Value> {
        source.lookup(&self.key).cloned()
    }

    fn set(&self, source: M, value: Option<M::Value>) -> M {
        match value {
            Some(value) => source.insert_entry(self.key.clone(), value),
            None => source.remove_entry_of(&self.key),
        }
    }

    fn modify<Function>(&self, source: M, function: Function) -> M
    where
        Function: FnOnce(Option<M::Value>) -> Option<M::Value>,
    {
        let (map, current) = source.take_entry_of(&self.key);
        self.set(map, function(current))
    }

    fn modify_f<F, Function>(&self, source: M, function: Function) -> F::WithType<M>
    where
        F: Applicative,
        Function: FnOnce(Option<M::Value>) -> F::WithType<Option<M::Value>>,
    {
        let (map, current) = source.take_entry_of(&self.key);
        F::map::<Option<M::Value>, M, _>(function(current), move |value| self.set(map, value))
    }
}

impl<M: KeyedMap> Clone for AtKey<M>
where
    M::Key: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<M: KeyedMap> std::fmt::Debug for AtKey<M>
where
    M::Key: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("AtKey").field("key", &self.key).finish()
    }
}

/// Maps whose keys can be focused with [`AtKey`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use focal::optics::{At, Lens};
///
/// let a = BTreeMap::<char, i32>::at('a');
/// assert_eq!(a.set(BTreeMap::new(), Some(1)), BTreeMap::from([('a', 1)]));
/// ```
pub trait At: KeyedMap {
    /// Returns the lens focusing the presence of `key`.
    fn at(key: Self::Key) -> AtKey<Self> {
        AtKey::new(key)
    }
}

impl<M: KeyedMap> At for M {}

/// Creates the lens focusing the presence of `key` in a map.
#[must_use]
pub const fn at_key<M: KeyedMap>(key: M::Key) -> AtKey<M> {
    AtKey::new(key)
}
