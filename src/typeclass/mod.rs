//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that the
//! persistent structures in this crate implement:
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Lifting values and combining contexts
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Traversable`]: Traversing structures with effects
//! - [`Alternative`]: Failure and choice on applicative functors
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to be defined
//! generically; see [`TypeConstructor`].
//!
//! ## Foundation Types
//!
//! - [`Identity`]: Identity wrapper type (identity functor)
//! - [`Sum`], [`Product`]: Numeric wrappers selecting a monoid operation
//!
//! # Examples
//!
//! ```rust
//! use catlist::typeclass::{Semigroup, Monoid, Sum};
//!
//! // String concatenation is a semigroup
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Folding a collection with combine_all
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
