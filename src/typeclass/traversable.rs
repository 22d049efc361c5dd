//! Traversable type class - mapping with effects and collecting results.
//!
//! A `Traversable` applies an effectful function to each element of a
//! structure, in order, and collects the rebuilt structure inside the
//! effect: traversing a `Vec<&str>` with a parser yields
//! `Option<Vec<i32>>` that is `Some` only if every parse succeeded.
//!
//! # Limitations in Rust
//!
//! Rust lacks Higher-Kinded Types, which would allow a single generic
//! `traverse` over any `Applicative`. Instead, specialized methods cover
//! the common effect types:
//!
//! - `traverse_option` / `sequence_option` for `Option`
//! - `traverse_result` / `sequence_result` for `Result`
//!
//! # Laws
//!
//! ## Identity
//!
//! Traversing with a pure effect is the same as mapping:
//!
//! ```text
//! fa.traverse_option(|x| Some(f(x))) == Some(fa.fmap_mut(f))
//! ```

use super::foldable::Foldable;
use super::functor::FunctorMut;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Traversable;
///
/// let strings = vec!["1", "2", "3"];
/// let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
///
/// let with_error = vec!["1", "not a number", "3"];
/// let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
/// assert_eq!(result, None);
/// ```
pub trait Traversable: FunctorMut + Foldable {
    /// Applies a function returning `Option` to each element, in order,
    /// and collects the results.
    ///
    /// Returns `None` as soon as any application returns `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element, in order,
    /// and collects the results.
    ///
    /// Returns the first `Err` encountered.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out: `F<Option<A>>` becomes
    /// `Option<F<A>>`, keeping element order.
    fn sequence_option<B>(self) -> Option<Self::WithType<B>>
    where
        Self: Sized + TypeConstructor<Inner = Option<B>>,
    {
        self.traverse_option(|element| element)
    }

    /// Turns a structure of `Result`s inside out: `F<Result<A, E>>`
    /// becomes `Result<F<A>, E>`, keeping element order.
    fn sequence_result<B, E>(self) -> Result<Self::WithType<B>, E>
    where
        Self: Sized + TypeConstructor<Inner = Result<B, E>>,
    {
        self.traverse_result(|element| element)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Traversable for Vec<A> {
    #[inline]
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.into_inner()).map(Identity::new)
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.into_inner()).map(Identity::new)
    }
}
