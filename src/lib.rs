//! # catlist
//!
//! Persistent catenable lists for Rust: concatenation, front/back insertion,
//! and front decomposition, each in amortized O(1), with the functional
//! type classes to drive them.
//!
//! ## Overview
//!
//! The centrepiece is [`persistent::CatList`], a purely functional sequence
//! in the style of Okasaki's "Purely Functional Data Structures": a
//! non-empty list is a head element plus a FIFO queue of pending sub-lists,
//! and the queue is only collapsed back into a flat order when a
//! decomposition forces it. Around it the crate provides:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Alternative, Semigroup, Monoid
//! - **Persistent Data Structures**: [`persistent::CatList`] and its FIFO
//!   collaborator [`persistent::BatchedQueue`]
//!
//! All structures are immutable and use structural sharing: every operation
//! returns a new value and never mutates its inputs, so values can be read
//! from multiple threads without synchronization (enable the `arc` feature
//! for `Send + Sync` handles).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `persistent`: Persistent data structures
//! - `arc`: Use `Arc` instead of `Rc` for shared substructure
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use catlist::persistent::CatList;
//!
//! let front = CatList::from_foldable(vec![1, 2]);
//! let back = CatList::from_foldable(vec![3, 4]);
//!
//! // O(1) concatenation, both operands stay valid
//! let joined = front.append(&back);
//! assert_eq!(joined.len(), 4);
//!
//! let drained: Vec<i32> = joined.into_iter().collect();
//! assert_eq!(drained, vec![1, 2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use catlist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
