//! Persistent (immutable) FIFO queue.
//!
//! This module provides [`BatchedQueue`], a persistent first-in-first-out
//! queue built from two immutable stacks, as described in Okasaki's
//! "Purely Functional Data Structures" (1998).
//!
//! # Overview
//!
//! `BatchedQueue` provides:
//!
//! - O(1) `enqueue`
//! - O(1) amortized `dequeue`
//! - O(1) `len` and `is_empty`
//! - O(1) `clone` (structural sharing)
//!
//! The front stack holds the oldest elements in dequeue order; the back
//! stack holds the newest elements in reverse. When a dequeue exhausts the
//! front, the back is reversed into it in one O(n) batch, which amortizes
//! to O(1) per operation.
//!
//! All operations return new queues without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use catlist::persistent::BatchedQueue;
//!
//! let queue = BatchedQueue::new().enqueue(1).enqueue(2).enqueue(3);
//! assert_eq!(queue.len(), 3);
//!
//! let (oldest, rest) = queue.dequeue().unwrap();
//! assert_eq!(oldest, 1);
//! assert_eq!(rest.len(), 2);
//!
//! // The original queue is preserved
//! assert_eq!(queue.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;

// =============================================================================
// Internal Stack
// =============================================================================

/// Internal node of the persistent stack.
///
/// `below` links directly to the next reference-counted node rather than
/// wrapping another `Stack`, so that the iterative `Drop` on `Stack` can
/// walk the chain without going through nested destructors.
struct StackNode<T> {
    element: T,
    below: Option<ReferenceCounter<StackNode<T>>>,
}

/// Persistent LIFO stack; the building block of the queue.
struct Stack<T> {
    head: Option<ReferenceCounter<StackNode<T>>>,
}

impl<T> Stack<T> {
    const fn new() -> Self {
        Self { head: None }
    }

    const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn push(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(StackNode {
                element,
                below: self.head.clone(),
            })),
        }
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Moves every uniquely-owned element into `sink`, leaving the stack
    /// empty. Stops at the first shared node; the remaining owners keep
    /// that suffix alive.
    fn drain_owned(&mut self, sink: &mut Vec<T>) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(inner) => {
                    let StackNode { element, below } = inner;
                    sink.push(element);
                    current = below;
                }
                Err(_) => break,
            }
        }
    }
}

impl<T: Clone> Stack<T> {
    fn pop(&self) -> Option<(T, Self)> {
        self.head.as_ref().map(|node| {
            let rest = Self {
                head: node.below.clone(),
            };
            (node.element.clone(), rest)
        })
    }

    fn reversed(&self) -> Self {
        let mut result = Self::new();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            result = result.push(node.element.clone());
            current = node.below.as_deref();
        }
        result
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

/// Tears the node chain down iteratively. The default recursive drop
/// would overflow the call stack on long chains; shared nodes are left
/// for their remaining owners.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut inner) => current = inner.below.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// BatchedQueue
// =============================================================================

/// A persistent FIFO queue built from two immutable stacks.
///
/// # Invariant
///
/// The front stack is empty only if the whole queue is empty; `dequeue`
/// restores this by reversing the back stack into the front when the front
/// runs out.
///
/// # Time Complexity
///
/// | Operation  | Complexity     |
/// |------------|----------------|
/// | `new`      | O(1)           |
/// | `enqueue`  | O(1)           |
/// | `dequeue`  | O(1) amortized |
/// | `head`     | O(1)           |
/// | `len`      | O(1)           |
/// | `clone`    | O(1)           |
///
/// # Examples
///
/// ```rust
/// use catlist::persistent::BatchedQueue;
///
/// let queue: BatchedQueue<i32> = (1..=3).collect();
/// let drained: Vec<i32> = queue.into_iter().collect();
/// assert_eq!(drained, vec![1, 2, 3]);
/// ```
pub struct BatchedQueue<T> {
    front: Stack<T>,
    back: Stack<T>,
    length: usize,
}

impl<T> BatchedQueue<T> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: Stack::new(),
            back: Stack::new(),
            length: 0,
        }
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns a reference to the oldest element without removing it.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.front.peek()
    }

    /// Adds an element as the newest entry, returning the extended queue.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self {
        if self.front.is_empty() {
            // Front empty means the queue is empty; seed the front so the
            // invariant holds without a reversal.
            Self {
                front: Stack::new().push(element),
                back: Stack::new(),
                length: self.length + 1,
            }
        } else {
            Self {
                front: self.front.clone(),
                back: self.back.push(element),
                length: self.length + 1,
            }
        }
    }

    /// Moves every uniquely-owned element into `sink` without invoking
    /// nested destructors, leaving the queue empty.
    ///
    /// Destructor support for element types whose own drop must stay
    /// iterative (see `CatList`).
    pub(super) fn drain_owned_for_drop(&mut self, sink: &mut Vec<T>) {
        self.front.drain_owned(sink);
        self.back.drain_owned(sink);
        self.length = 0;
    }

    /// References to all elements in dequeue order.
    fn element_refs(&self) -> Vec<&T> {
        let mut refs = Vec::with_capacity(self.length);
        let mut current = self.front.head.as_deref();
        while let Some(node) = current {
            refs.push(&node.element);
            current = node.below.as_deref();
        }
        let back_start = refs.len();
        let mut current = self.back.head.as_deref();
        while let Some(node) = current {
            refs.push(&node.element);
            current = node.below.as_deref();
        }
        refs[back_start..].reverse();
        refs
    }
}

impl<T: Clone> BatchedQueue<T> {
    /// Removes the oldest element, returning it together with the rest of
    /// the queue.
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; a single call may pay O(n) to reverse the back
    /// stack into the front.
    #[must_use]
    pub fn dequeue(&self) -> Option<(T, Self)> {
        let (element, front_rest) = self.front.pop()?;
        let rest = if front_rest.is_empty() {
            Self {
                front: self.back.reversed(),
                back: Stack::new(),
                length: self.length - 1,
            }
        } else {
            Self {
                front: front_rest,
                back: self.back.clone(),
                length: self.length - 1,
            }
        };
        Some((element, rest))
    }

    /// Returns an iterator over clones of the elements in dequeue order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> BatchedQueueIntoIterator<T> {
        BatchedQueueIntoIterator {
            queue: self.clone(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of a [`BatchedQueue`] in dequeue
/// order.
pub struct BatchedQueueIntoIterator<T> {
    queue: BatchedQueue<T>,
}

impl<T: Clone> Iterator for BatchedQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = self.queue.dequeue()?;
        self.queue = rest;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.length, Some(self.queue.length))
    }
}

impl<T: Clone> ExactSizeIterator for BatchedQueueIntoIterator<T> {
    fn len(&self) -> usize {
        self.queue.length
    }
}

impl<T: Clone> IntoIterator for BatchedQueue<T> {
    type Item = T;
    type IntoIter = BatchedQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BatchedQueueIntoIterator { queue: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a BatchedQueue<T> {
    type Item = T;
    type IntoIter = BatchedQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for BatchedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for BatchedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BatchedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |queue, element| queue.enqueue(element))
    }
}

impl<T: PartialEq> PartialEq for BatchedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.element_refs() == other.element_refs()
    }
}

impl<T: Eq> Eq for BatchedQueue<T> {}

impl<T: Hash> Hash for BatchedQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self.element_refs() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BatchedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.element_refs()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
