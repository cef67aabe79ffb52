//! Keyed mappings - the total operations the key-focusing optics need.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A finite mapping from keys to values.
///
/// Every operation is total: looking up or removing an absent key is not an
/// error. `insert` and `remove` consume the map and return the updated one.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use focal::typeclass::KeyedMap;
///
/// let map = BTreeMap::new().insert_entry("a", 1);
/// assert!(map.contains_key_of(&"a"));
/// assert_eq!(map.lookup(&"a"), Some(&1));
/// assert!(map.remove_entry_of(&"a").is_empty());
/// ```
pub trait KeyedMap: Sized {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if `key` is present.
    fn contains_key_of(&self, key: &Self::Key) -> bool;

    /// Borrows the value stored under `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    #[must_use]
    fn insert_entry(self, key: Self::Key, value: Self::Value) -> Self;

    /// Removes `key`. Removing an absent key returns the map unchanged.
    #[must_use]
    fn remove_entry_of(self, key: &Self::Key) -> Self;

    /// Removes `key` and moves its value out, if there was one.
    #[must_use]
    fn take_entry_of(self, key: &Self::Key) -> (Self, Option<Self::Value>);
}

impl<K: Eq + Hash, V, H: BuildHasher> KeyedMap for HashMap<K, V, H> {
    type Key = K;
    type Value = V;

    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_entry(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    fn remove_entry_of(mut self, key: &K) -> Self {
        self.remove(key);
        self
    }

    fn take_entry_of(mut self, key: &K) -> (Self, Option<V>) {
        let value = self.remove(key);
        (self, value)
    }
}

impl<K: Ord, V> KeyedMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_entry(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    fn remove_entry_of(mut self, key: &K) -> Self {
        self.remove(key);
        self
    }

    fn take_entry_of(mut self, key: &K) -> (Self, Option<V>) {
        let value = self.remove(key);
        (self, value)
    }
}
