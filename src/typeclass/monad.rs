//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which allows the result
//! of one computation to determine what computation to perform next.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// In Haskell this operation is `>>=` (bind); in Rust's standard library
/// it corresponds to `and_then` on `Option` and `Result`.
///
/// Multi-element containers whose bind must call the function once per
/// element provide an `FnMut` counterpart as an inherent method (see
/// `CatList::flat_map_mut`), for the same reason [`FunctorMut`] exists
/// next to [`Functor`].
///
/// [`Functor`]: super::Functor
/// [`FunctorMut`]: super::FunctorMut
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Monad;
///
/// let x = Some(5);
/// let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(y, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Delegate to Option's built-in and_then
        Self::and_then(self, function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
