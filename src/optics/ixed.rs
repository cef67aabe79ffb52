//! Index- and key-based focusing on existing elements.
//!
//! [`Ixed`] picks the optional used to focus one element of a container:
//! a position of a `Vec`/`VecDeque`, or the value under a key of a
//! `HashMap`/`BTreeMap`. Only existing elements are focused; writing to an
//! out-of-range position or an absent key returns the container unchanged.
//! Use [`at_key`](super::at_key) to insert or remove keys.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use focal::optics::{index, key, Optional};
//!
//! let third = index::<Vec<i32>>(2);
//! assert_eq!(third.get_option(&vec![1, 2, 3]), Some(3));
//! assert_eq!(third.set(vec![1, 2], 9), vec![1, 2]);
//!
//! let port = key::<HashMap<String, u16>>("port".to_string());
//! let config = HashMap::from([("port".to_string(), 80)]);
//! assert_eq!(port.modify(config, |p| p + 8000)["port"], 8080);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::optional::Optional;
use crate::typeclass::{Applicative, KeyedMap};

/// Containers with an optional focusing the element at an index of type `I`.
pub trait Ixed<I>: Sized {
    /// The element type.
    type Element;

    /// The optional focusing one element.
    type IxOptional: Optional<Self, Self::Element>;

    /// Returns the optional focusing the element at `index`.
    fn ix(index: I) -> Self::IxOptional;
}

// =============================================================================
// SequenceIx
// =============================================================================

/// An optional focusing one position of the sequence `C`, a `Vec` or a
/// `VecDeque`.
///
/// Effectful updates move the element out of the sequence and back in, so
/// neither the sequence nor the element is cloned.
pub struct SequenceIx<C> {
    index: usize,
    _marker: PhantomData<fn() -> C>,
}

impl<C> SequenceIx<C> {
    /// Creates the optional for position `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// The focused position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Runs `function` on the element at `position`, moved out of `source`, and
/// puts the result back at the same position.
///
/// `position` must be in range.
pub(super) fn modify_vec_position_f<F, T, Function>(
    mut source: Vec<T>,
    position: usize,
    function: Function,
) -> F::WithType<Vec<T>>
where
    F: Applicative,
    Function: FnOnce(T) -> F::WithType<T>,
{
    let value = source.swap_remove(position);
    F::map::<T, Vec<T>, _>(function(value), move |value| {
        source.push(value);
        let last = source.len() - 1;
        source.swap(position, last);
        source
    })
}

impl<T: Clone> Optional<Vec<T>, T> for SequenceIx<Vec<T>> {
    fn get_option(&self, source: &Vec<T>) -> Option<T> {
        let element = source.get(self.index).cloned();
        if element.is_none() {
            trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
        }
        element
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        match source.get_mut(self.index) {
            Some(slot) => *slot = value,
            None => {
                trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
            }
        }
        source
    }

    fn modify_f<F, Function>(&self, source: Vec<T>, function: Function) -> F::WithType<Vec<T>>
    where
        F: Applicative,
        Function: FnOnce(T) -> F::WithType<T>,
    {
        if self.index < source.len() {
            modify_vec_position_f::<F, T, Function>(source, self.index, function)
        } else {
            trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
            F::pure(source)
        }
    }
}

impl<T: Clone> Optional<VecDeque<T>, T> for SequenceIx<VecDeque<T>> {
    fn get_option(&self, source: &VecDeque<T>) -> Option<T> {
        let element = source.get(self.index).cloned();
        if element.is_none() {
            trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
        }
        element
    }

    fn set(&self, mut source: VecDeque<T>, value: T) -> VecDeque<T> {
        match source.get_mut(self.index) {
            Some(slot) => *slot = value,
            None => {
                trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
            }
        }
        source
    }

    fn modify_f<F, Function>(&self, mut source: VecDeque<T>, function: Function) -> F::WithType<VecDeque<T>>
    where
        F: Applicative,
        Function: FnOnce(T) -> F::WithType<T>,
    {
        let Some(value) = source.swap_remove_back(self.index) else {
            trace_focus_miss!(optic = "index", index = self.index, length = source.len(), "out of range");
            return F::pure(source);
        };
        let position = self.index;
        F::map::<T, VecDeque<T>, _>(function(value), move |value| {
            source.push_back(value);
            let last = source.len() - 1;
            source.swap(position, last);
            source
        })
    }
}

impl<C> Clone for SequenceIx<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SequenceIx<C> {}

impl<C> std::fmt::Debug for SequenceIx<C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SequenceIx")
            .field("index", &self.index)
            .finish()
    }
}

impl<T: Clone> Ixed<usize> for Vec<T> {
    type Element = T;
    type IxOptional = SequenceIx<Self>;

    fn ix(index: usize) -> Self::IxOptional {
        SequenceIx::new(index)
    }
}

impl<T: Clone> Ixed<usize> for VecDeque<T> {
    type Element = T;
    type IxOptional = SequenceIx<Self>;

    fn ix(index: usize) -> Self::IxOptional {
        SequenceIx::new(index)
    }
}

// =============================================================================
// KeyIx
// =============================================================================

/// An optional focusing the value under one key of a [`KeyedMap`].
///
/// Unlike [`AtKey`](super::AtKey), `set` never inserts: writing under an
/// absent key returns the map unchanged. Effectful updates take the value out
/// of the map and insert the result under the same key.
pub struct KeyIx<M: KeyedMap> {
    key: M::Key,
    _marker: PhantomData<fn() -> M>,
}

impl<M: KeyedMap> KeyIx<M> {
    /// Creates the optional for `key`.
    #[must_use]
    pub const fn new(key: M::Key) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<M> Optional<M, M::Value> for KeyIx<M>
where
    M: KeyedMap,
    M::Key: Clone,
    M::Value: Clone,
{
    fn get_option(&self, source: &M) -> Option<M::Value> {
        let value = source.lookup(&self.key).cloned();
        if value.is_none() {
            trace_focus_miss!(optic = "key", "key not present");
        }
        value
    }

    fn set(&self, source: M, value: M::Value) -> M {
        if source.contains_key_of(&self.key) {
            source.insert_entry(self.key.clone(), value)
        } else {
            trace_focus_miss!(optic = "key", "key not present");
            source
        }
    }

    fn modify_f<F, Function>(&self, source: M, function: Function) -> F::WithType<M>
    where
        F: Applicative,
        Function: FnOnce(M::Value) -> F::WithType<M::Value>,
    {
        match source.take_entry_of(&self.key) {
            (map, Some(value)) => F::map::<M::Value, M, _>(function(value), move |value| {
                map.insert_entry(self.key.clone(), value)
            }),
            (map, None) => {
                trace_focus_miss!(optic = "key", "key not present");
                F::pure(map)
            }
        }
    }
}

impl<M: KeyedMap> Clone for KeyIx<M>
where
    M::Key: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<M: KeyedMap> std::fmt::Debug for KeyIx<M>
where
    M::Key: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("KeyIx").field("key", &self.key).finish()
    }
}

impl<K, V, H> Ixed<K> for HashMap<K, V, H>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher,
{
    type Element = V;
    type IxOptional = KeyIx<Self>;

    fn ix(key: K) -> Self::IxOptional {
        KeyIx::new(key)
    }
}

impl<K, V> Ixed<K> for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Element = V;
    type IxOptional = KeyIx<Self>;

    fn ix(key: K) -> Self::IxOptional {
        KeyIx::new(key)
    }
}

/// Creates the optional focusing position `index` of a sequence.
#[must_use]
pub fn index<T: Ixed<usize>>(index: usize) -> T::IxOptional {
    T::ix(index)
}

/// Creates the optional focusing the value under `key` of a map.
#[must_use]
pub const fn key<M: KeyedMap>(key: M::Key) -> KeyIx<M> {
    KeyIx::new(key)
}
