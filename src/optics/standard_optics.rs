//! Prisms for the standard sum types.
//!
//! `Option` and `Result` are the two-branch types every Rust program already
//! uses, so their prisms are provided ready-made. `left` and `right` follow the
//! usual convention that the right branch is the success value: `right`
//! focuses `Ok`, `left` focuses `Err`.

use std::marker::PhantomData;

use super::prism::Prism;

// =============================================================================
// SomePrism
// =============================================================================

/// A prism focusing the `Some` of an `Option<A>`.
pub struct SomePrism<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> SomePrism<A> {
    /// Creates the prism.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates a prism focusing the `Some` of an `Option<A>`.
///
/// # Example
///
/// ```
/// use focal::optics::{Prism, some};
///
/// let prism = some::<String>();
/// assert_eq!(prism.get_option(&Some("a".to_string())), Some("a".to_string()));
/// assert_eq!(prism.get_option(&None), None);
/// assert_eq!(prism.reverse_get("b".to_string()), Some("b".to_string()));
/// ```
#[must_use]
pub const fn some<A: Clone>() -> SomePrism<A> {
    SomePrism::new()
}

/// Creates a prism that drops an absent value.
///
/// A nullable value is an `Option` in Rust, so this is [`some`] under the
/// name used when `None` stands for "no value" rather than a branch.
///
/// # Example
///
/// ```
/// use focal::optics::{Prism, from_nullable};
///
/// let present = from_nullable::<u32>();
/// assert!(present.is_match(&Some(0)));
/// assert!(!present.is_match(&None));
/// ```
#[must_use]
pub const fn from_nullable<A: Clone>() -> SomePrism<A> {
    SomePrism::new()
}

impl<A: Clone> Prism<Option<A>, A> for SomePrism<A> {
    fn get_option(&self, source: &Option<A>) -> Option<A> {
        source.clone()
    }

    fn reverse_get(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn preview_owned(&self, source: Option<A>) -> Result<A, Option<A>> {
        source.ok_or(None)
    }
}

impl<A> Default for SomePrism<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for SomePrism<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SomePrism<A> {}

impl<A> std::fmt::Debug for SomePrism<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SomePrism")
    }
}

// =============================================================================
// LeftPrism / RightPrism
// =============================================================================

/// A prism focusing the `Err` branch of a `Result<T, E>`.
pub struct LeftPrism<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> LeftPrism<T, E> {
    /// Creates the prism.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates a prism focusing the `Err` branch of a `Result<T, E>`.
///
/// # Example
///
/// ```
/// use focal::optics::{Prism, left};
///
/// let error = left::<i32, String>();
/// assert_eq!(error.get_option(&Err("boom".to_string())), Some("boom".to_string()));
/// assert_eq!(error.get_option(&Ok(1)), None);
/// ```
#[must_use]
pub const fn left<T, E: Clone>() -> LeftPrism<T, E> {
    LeftPrism::new()
}

impl<T, E: Clone> Prism<Result<T, E>, E> for LeftPrism<T, E> {
    fn get_option(&self, source: &Result<T, E>) -> Option<E> {
        source.as_ref().err().cloned()
    }

    fn reverse_get(&self, value: E) -> Result<T, E> {
        Err(value)
    }

    fn preview_owned(&self, source: Result<T, E>) -> Result<E, Result<T, E>> {
        match source {
            Err(error) => Ok(error),
            ok => Err(ok),
        }
    }
}

impl<T, E> Default for LeftPrism<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for LeftPrism<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for LeftPrism<T, E> {}

impl<T, E> std::fmt::Debug for LeftPrism<T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("LeftPrism")
    }
}

/// A prism focusing the `Ok` branch of a `Result<T, E>`.
pub struct RightPrism<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> RightPrism<T, E> {
    /// Creates the prism.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates a prism focusing the `Ok` branch of a `Result<T, E>`.
#[must_use]
pub const fn right<T: Clone, E>() -> RightPrism<T, E> {
    RightPrism::new()
}

impl<T: Clone, E> Prism<Result<T, E>, T> for RightPrism<T, E> {
    fn get_option(&self, source: &Result<T, E>) -> Option<T> {
        source.as_ref().ok().cloned()
    }

    fn reverse_get(&self, value: T) -> Result<T, E> {
        Ok(value)
    }

    fn preview_owned(&self, source: Result<T, E>) -> Result<T, Result<T, E>> {
        match source {
            Ok(value) => Ok(value),
            error => Err(error),
        }
    }
}

impl<T, E> Default for RightPrism<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for RightPrism<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for RightPrism<T, E> {}

impl<T, E> std::fmt::Debug for RightPrism<T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("RightPrism")
    }
}

// =============================================================================
// PredicatePrism
// =============================================================================

/// A prism that matches a value satisfying a predicate, unchanged.
///
/// `reverse_get` is the identity, so the round-trip law holds only for values
/// that satisfy the predicate.
pub struct PredicatePrism<A, Predicate> {
    predicate: Predicate,
    _marker: PhantomData<fn() -> A>,
}

impl<A, Predicate> PredicatePrism<A, Predicate>
where
    Predicate: Fn(&A) -> bool,
{
    /// Creates the prism.
    #[must_use]
    pub const fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

/// Creates a prism matching values that satisfy `predicate`.
///
/// # Example
///
/// ```
/// use focal::optics::{Prism, from_predicate};
///
/// let even = from_predicate(|n: &i32| n % 2 == 0);
/// assert_eq!(even.get_option(&4), Some(4));
/// assert_eq!(even.get_option(&3), None);
/// assert_eq!(even.modify(3, |n| n + 1), 3);
/// ```
#[must_use]
pub const fn from_predicate<A, Predicate>(predicate: Predicate) -> PredicatePrism<A, Predicate>
where
    A: Clone,
    Predicate: Fn(&A) -> bool,
{
    PredicatePrism::new(predicate)
}

impl<A, Predicate> Prism<A, A> for PredicatePrism<A, Predicate>
where
    A: Clone,
    Predicate: Fn(&A) -> bool,
{
    fn get_option(&self, source: &A) -> Option<A> {
        (self.predicate)(source).then(|| source.clone())
    }

    fn reverse_get(&self, value: A) -> A {
        value
    }

    fn preview_owned(&self, source: A) -> Result<A, A> {
        if (self.predicate)(&source) {
            Ok(source)
        } else {
            Err(source)
        }
    }
}

impl<A, Predicate: Clone> Clone for PredicatePrism<A, Predicate> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, Predicate> std::fmt::Debug for PredicatePrism<A, Predicate> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PredicatePrism")
            .finish_non_exhaustive()
    }
}
