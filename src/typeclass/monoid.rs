//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(M::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
///
/// let total = Vec::combine_all(vec![vec![1], vec![2, 3], vec![]]);
/// assert_eq!(total, vec![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for `combine`.
    #[must_use]
    fn empty() -> Self;

    /// Combines every value in an iterator, starting from the identity.
    #[must_use]
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(Self::empty(), Semigroup::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }
}
