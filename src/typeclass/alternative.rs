//! Alternative type class - monoid structure on applicative functors.
//!
//! `Alternative` extends `Applicative` with a failure/zero value (`empty`)
//! and a choice operation (`alt`). For `Option`, `alt` picks the first
//! success; for sequence types such as `CatList`, `alt` is concatenation
//! and `empty` the empty sequence, matching the classic list instance.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with a monoid structure.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Alternative;
///
/// let empty: Option<i32> = <Option<()>>::empty();
/// assert_eq!(empty, None);
///
/// let first: Option<i32> = None;
/// let second = Some(42);
/// assert_eq!(first.alt(second), Some(42));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt` — a failed or empty
    /// computation.
    fn empty<A>() -> Self::WithType<A>
    where
        A: 'static;

    /// Combines two alternatives.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Returns `pure(())` if the condition is true, otherwise `empty`.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Chooses from multiple alternatives by folding `alt` from `empty`.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
        Self::Inner: 'static;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B>
    where
        B: 'static,
    {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        A: 'static,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}
