//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: there is no way to abstract over
//! `Option<_>` or `CatList<_>` as bare type constructors. This module uses
//! Generic Associated Types to work around that limitation, which is the
//! foundation for the Functor/Applicative/Monad hierarchy.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types using Generic Associated Types.
/// It allows abstracting over type constructors like `Option<_>`,
/// `Vec<_>`, or `CatList<_>`.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// should be equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use catlist::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Option<i32>>();
/// assert_inner::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
