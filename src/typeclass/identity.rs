//! Identity wrapper type - the identity functor.
//!
//! [`Identity`] wraps a plain value and adds no effect at all. It is the
//! simplest lawful instance of the type-class hierarchy, and serves as the
//! baseline for the traversable identity law: traversing with `Identity`
//! must be equivalent to mapping.

use super::higher::TypeConstructor;

/// A wrapper that carries a value with no additional effect.
///
/// # Examples
///
/// ```rust
/// use catlist::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Identity<A>(A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
