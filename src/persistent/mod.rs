//! Persistent (immutable) data structures.
//!
//! This module provides immutable data structures that use structural
//! sharing to minimize copying:
//!
//! - [`CatList`]: Persistent catenable list with amortized O(1)
//!   concatenation, front/back insertion, and front decomposition
//! - [`BatchedQueue`]: Persistent FIFO queue with amortized O(1)
//!   enqueue/dequeue, used by [`CatList`] to hold pending sub-lists
//!
//! # Structural Sharing
//!
//! All operations return new values without modifying the originals;
//! shared substructure is reference-counted, so "copying" a list or a
//! queue is O(1).
//!
//! # Examples
//!
//! ## `CatList`
//!
//! ```rust
//! use catlist::persistent::CatList;
//!
//! let list = CatList::new().cons(2).cons(1).snoc(3);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```
//!
//! ## `BatchedQueue`
//!
//! ```rust
//! use catlist::persistent::BatchedQueue;
//!
//! let queue = BatchedQueue::new().enqueue(1).enqueue(2);
//! let (oldest, rest) = queue.dequeue().unwrap();
//! assert_eq!(oldest, 1);
//! assert_eq!(rest.len(), 1);
//! assert_eq!(queue.len(), 2);    // Original unchanged
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod cat_list;
mod queue;

pub use cat_list::CatList;
pub use cat_list::CatListIntoIterator;
pub use queue::BatchedQueue;
pub use queue::BatchedQueueIntoIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
