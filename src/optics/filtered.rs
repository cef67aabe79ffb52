//! Predicate-driven optics.
//!
//! - [`FilteredTraversal`]: keeps only the parts satisfying a predicate in
//!   focus, for reads and writes alike.
//! - [`FindFirst`]: focuses the first element of a `Vec` satisfying a
//!   predicate.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{find_first, traversal, Optional, Traversal};
//!
//! let large = traversal::from_traversable::<Vec<u32>>().filter(|n| *n >= 10);
//! assert_eq!(large.modify(vec![5, 10, 20], |n| n / 10), vec![5, 1, 2]);
//!
//! let first_large = find_first(|n: &u32| *n >= 10);
//! assert_eq!(first_large.set(vec![5, 10, 20], 0), vec![5, 0, 20]);
//! ```

use std::marker::PhantomData;

use super::ixed::modify_vec_position_f;
use super::optional::Optional;
use super::traversal::Traversal;
use crate::typeclass::Applicative;

// =============================================================================
// FilteredTraversal
// =============================================================================

/// A traversal narrowed to the parts satisfying a predicate.
///
/// Non-matching parts are excluded from `get_all`/`fold_map` and handed back
/// unchanged by `modify`/`set`. The predicate is tested against the part as
/// it is before the update, so a write may produce a part that no longer
/// matches.
pub struct FilteredTraversal<T, Predicate> {
    traversal: T,
    predicate: Predicate,
}

impl<T, Predicate> FilteredTraversal<T, Predicate> {
    /// Narrows `traversal` to the parts satisfying `predicate`.
    #[must_use]
    pub const fn new(traversal: T, predicate: Predicate) -> Self {
        Self {
            traversal,
            predicate,
        }
    }
}

impl<S, A, T, Predicate> Traversal<S, A> for FilteredTraversal<T, Predicate>
where
    T: Traversal<S, A>,
    Predicate: Fn(&A) -> bool,
{
    fn modify_f<F, Function>(&self, source: S, mut function: Function) -> F::WithType<S>
    where
        F: Applicative,
        Function: FnMut(A) -> F::WithType<A>,
    {
        self.traversal.modify_f::<F, _>(source, |value| {
            if (self.predicate)(&value) {
                function(value)
            } else {
                F::pure(value)
            }
        })
    }
}

impl<T: Clone, Predicate: Clone> Clone for FilteredTraversal<T, Predicate> {
    fn clone(&self) -> Self {
        Self::new(self.traversal.clone(), self.predicate.clone())
    }
}

impl<T: std::fmt::Debug, Predicate> std::fmt::Debug for FilteredTraversal<T, Predicate> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FilteredTraversal")
            .field("traversal", &self.traversal)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FindFirst
// =============================================================================

/// An optional focusing the first element of a `Vec<T>` that satisfies a
/// predicate.
///
/// Writing replaces only that one position; every other element is moved
/// into the result as it was. When no element matches, reads give `None` and
/// writes return the vector unchanged.
pub struct FindFirst<T, Predicate> {
    predicate: Predicate,
    _marker: PhantomData<fn() -> T>,
}

impl<T, Predicate> FindFirst<T, Predicate>
where
    Predicate: Fn(&T) -> bool,
{
    /// Creates the optional.
    #[must_use]
    pub const fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

/// Creates an optional focusing the first element satisfying `predicate`.
///
/// # Example
///
/// ```
/// use focal::optics::{find_first, Optional};
///
/// let first_word = find_first(|token: &String| token.chars().all(char::is_alphabetic));
/// let tokens = vec!["42".to_string(), "hello".to_string(), "world".to_string()];
///
/// assert_eq!(first_word.get_option(&tokens), Some("hello".to_string()));
/// assert_eq!(
///     first_word.modify(tokens, |word| word.to_uppercase()),
///     vec!["42".to_string(), "HELLO".to_string(), "world".to_string()]
/// );
/// ```
#[must_use]
pub const fn find_first<T, Predicate>(predicate: Predicate) -> FindFirst<T, Predicate>
where
    Predicate: Fn(&T) -> bool,
{
    FindFirst::new(predicate)
}

impl<T, Predicate> Optional<Vec<T>, T> for FindFirst<T, Predicate>
where
    T: Clone,
    Predicate: Fn(&T) -> bool,
{
    fn get_option(&self, source: &Vec<T>) -> Option<T> {
        let found = source.iter().find(|element| (self.predicate)(element)).cloned();
        if found.is_none() {
            trace_focus_miss!(optic = "find_first", length = source.len(), "no element matched");
        }
        found
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        match source.iter_mut().find(|element| (self.predicate)(&**element)) {
            Some(slot) => *slot = value,
            None => {
                trace_focus_miss!(optic = "find_first", length = source.len(), "no element matched");
            }
        }
        source
    }

    fn modify_f<F, Function>(&self, source: Vec<T>, function: Function) -> F::WithType<Vec<T>>
    where
        F: Applicative,
        Function: FnOnce(T) -> F::WithType<T>,
    {
        match source.iter().position(|element| (self.predicate)(element)) {
            Some(position) => modify_vec_position_f::<F, T, Function>(source, position, function),
            None => {
                trace_focus_miss!(optic = "find_first", length = source.len(), "no element matched");
                F::pure(source)
            }
        }
    }
}

impl<T, Predicate: Clone> Clone for FindFirst<T, Predicate> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, Predicate> std::fmt::Debug for FindFirst<T, Predicate> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FindFirst").finish_non_exhaustive()
    }
}
