//! Foldable type class - folding over data structures.
//!
//! `Foldable` provides a unified interface for traversing a structure and
//! accumulating its elements into a summary value.
//!
//! # Laws
//!
//! `Foldable` has no formal laws as strict as the other type classes, but
//! implementations should satisfy:
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: left-associative fold
/// - `fold_right`: right-associative fold
///
/// All other methods have default implementations based on `fold_left`.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4];
/// let total = values.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(total, 10);
///
/// let total: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(total.0, 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results in order.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements in fold
    /// order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }

    /// Returns whether any element satisfies a predicate.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns whether all elements satisfy a predicate.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(true, |all, element| all && predicate(&element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.into_inner())
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.into_inner(), init)
    }
}
