//! Functor type class - mapping over container values.
//!
//! This module provides two flavours of mapping:
//!
//! - [`Functor`]: mapping with an `FnOnce` function. This is the cleanest
//!   signature, but a function that can only be called once can only be
//!   applied meaningfully to containers holding at most one value.
//! - [`FunctorMut`]: mapping with an `FnMut` function, which multi-element
//!   containers such as `Vec` or `CatList` need to visit every element.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers that can be mapped over with an `FnOnce`
/// function.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Functor;
///
/// let value = Some(5);
/// assert_eq!(value.fmap(|x| x * 2), Some(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value(s) inside the
    /// container, leaving the original untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

/// A type class for containers that map with an `FnMut` function, calling
/// it once per element.
///
/// Multi-element containers implement their real, order-preserving map
/// here; [`Functor`] on such containers is limited by `FnOnce`.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::FunctorMut;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(values.fmap_mut(|x| x * 10), vec![10, 20, 30]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a function to every element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to every element by reference.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> FunctorMut for Option<A> {
    #[inline]
    fn fmap_mut<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(&mut function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(&mut function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> FunctorMut for Vec<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.into_inner()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}

impl<A> FunctorMut for Identity<A> {
    #[inline]
    fn fmap_mut<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity::new(function(self.into_inner()))
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> Identity<B>
    where
        F: FnMut(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_some() {
        assert_eq!(Some(5).fmap(|x| x + 1), Some(6));
    }

    #[rstest]
    fn option_fmap_none() {
        let none: Option<i32> = None;
        assert_eq!(none.fmap(|x| x + 1), None);
    }

    #[rstest]
    fn option_fmap_ref_preserves_original() {
        let value = Some(String::from("abc"));
        let length = value.fmap_ref(|s| s.len());
        assert_eq!(length, Some(3));
        assert_eq!(value, Some(String::from("abc")));
    }

    #[rstest]
    fn vec_fmap_mut_visits_all_elements() {
        let values = vec![1, 2, 3];
        assert_eq!(values.fmap_mut(|x| x * 2), vec![2, 4, 6]);
    }

    #[rstest]
    fn identity_fmap_transforms() {
        assert_eq!(Identity::new(5).fmap(|x| x * 2), Identity::new(10));
    }

    // Functor laws

    #[rstest]
    fn option_identity_law() {
        let value = Some(42);
        assert_eq!(value.fmap(|x| x), value);
    }

    #[rstest]
    fn option_composition_law() {
        let value = Some(5);
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        assert_eq!(value.fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[rstest]
    fn vec_identity_law() {
        let values = vec![1, 2, 3];
        assert_eq!(values.clone().fmap_mut(|x| x), values);
    }

    #[rstest]
    fn vec_composition_law() {
        let values = vec![1, 2, 3];
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        assert_eq!(
            values.clone().fmap_mut(f).fmap_mut(g),
            values.fmap_mut(|x| g(f(x)))
        );
    }
}
