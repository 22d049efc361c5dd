//! Numeric wrapper types selecting a monoid operation.
//!
//! A number supports more than one lawful monoid (addition, multiplication),
//! so plain numbers carry no `Monoid` instance. [`Sum`] and [`Product`]
//! pick one explicitly, which is what `fold_map` needs.

use std::ops::{Add, Mul};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A wrapper selecting addition as the combine operation.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::{Foldable, Sum};
///
/// let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum);
/// assert_eq!(total.0, 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sum<T>(pub T);

impl<T> Sum<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    #[inline]
    fn empty() -> Self {
        Self(T::default())
    }
}

/// A wrapper selecting multiplication as the combine operation.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::{Foldable, Product};
///
/// let product: Product<i32> = vec![2, 3, 4].fold_map(Product);
/// assert_eq!(product.0, 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Product<T>(pub T);

impl<T> Product<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + From<u8>> Monoid for Product<T> {
    #[inline]
    fn empty() -> Self {
        Self(T::from(1))
    }
}
