//! Applicative type class - lifting values and combining contexts.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value
//! into the context, and `map2`/`apply`, which combine two values inside
//! the context.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(1).map2(Some(2), |a, b| a + b);
/// assert_eq!(sum, Some(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Combines two values in context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function held in the context to a value held in the
    /// context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<T>(value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip(other).map(|(function, value)| function(value))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<T>(value: T) -> Identity<T> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new(self.into_inner()(other.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_wraps_value() {
        let x: Option<&str> = <Option<()>>::pure("hello");
        assert_eq!(x, Some("hello"));
    }

    #[rstest]
    fn option_map2_combines_two_somes() {
        assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    }

    #[rstest]
    fn option_map2_propagates_none() {
        let none: Option<i32> = None;
        assert_eq!(Some(1).map2(none, |a, b| a + b), None);
    }

    #[rstest]
    fn option_apply_applies_wrapped_function() {
        let function: Option<fn(i32) -> i32> = Some(|x| x * 3);
        assert_eq!(function.apply(Some(7)), Some(21));
    }

    #[rstest]
    fn identity_homomorphism_law() {
        let f: fn(i32) -> i32 = |x| x + 1;
        let left = Identity::new(f).apply(<Identity<()>>::pure(5));
        let right: Identity<i32> = <Identity<()>>::pure(f(5));
        assert_eq!(left, right);
    }
}
