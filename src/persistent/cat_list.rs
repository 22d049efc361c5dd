//! Persistent (immutable) catenable list.
//!
//! This module provides [`CatList`], a persistent sequence with amortized
//! O(1) concatenation, following the catenable list of Okasaki's "Purely
//! Functional Data Structures" (1998).
//!
//! # Overview
//!
//! `CatList` provides:
//!
//! - O(1) `append`, `cons`, and `snoc`
//! - O(1) amortized `uncons` and `tail`
//! - O(1) `head`, `len`, and `is_empty`
//! - O(1) `clone` (structural sharing)
//!
//! A singly-linked list concatenates in O(n); `CatList` instead records a
//! concatenation by enqueuing the right-hand list onto a FIFO queue of
//! pending sub-lists, deferring the work. `uncons` settles the debt: when
//! the head is removed, the pending sub-lists are relinked front to back
//! so the next head sits on top again.
//!
//! All operations return new lists without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use catlist::persistent::CatList;
//!
//! let left: CatList<i32> = (1..=3).collect();
//! let right: CatList<i32> = (4..=6).collect();
//!
//! let joined = left.append(&right);
//! assert_eq!(joined.len(), 6);
//! assert_eq!(joined.head(), Some(&1));
//!
//! // The originals are preserved
//! assert_eq!(left.len(), 3);
//! assert_eq!(right.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::queue::BatchedQueue;
use super::ReferenceCounter;
use crate::typeclass::{
    Alternative, Applicative, Foldable, Functor, FunctorMut, Monad, Monoid, Semigroup,
    Traversable, TypeConstructor,
};

// =============================================================================
// Node Structure
// =============================================================================

/// Internal node: the first element plus the queue of pending sub-lists.
///
/// The queue never holds an empty list; `append` guards against enqueuing
/// one. No `Drop` impl, so [`CatList`]'s destructor can move the fields
/// out.
struct Node<T> {
    head: ReferenceCounter<T>,
    tail: BatchedQueue<CatList<T>>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

// =============================================================================
// CatList Structure
// =============================================================================

/// A persistent catenable list with amortized O(1) concatenation.
///
/// # Time Complexity
///
/// | Operation  | Complexity     |
/// |------------|----------------|
/// | `new`      | O(1)           |
/// | `cons`     | O(1)           |
/// | `snoc`     | O(1)           |
/// | `append`   | O(1)           |
/// | `head`     | O(1)           |
/// | `uncons`   | O(1) amortized |
/// | `tail`     | O(1) amortized |
/// | `len`      | O(1)           |
/// | `clone`    | O(1)           |
///
/// # Examples
///
/// ```rust
/// use catlist::persistent::CatList;
///
/// let list = CatList::new().cons(2).cons(1).snoc(3);
///
/// let collected: Vec<i32> = list.iter().collect();
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
pub struct CatList<T> {
    root: Option<Node<T>>,
    length: usize,
}

impl<T> CatList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list: CatList<i32> = CatList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::singleton(42);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.head(), Some(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            root: Some(Node {
                head: ReferenceCounter::new(element),
                tail: BatchedQueue::new(),
            }),
            length: 1,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::singleton(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.root.as_ref().map(|node| node.head.as_ref())
    }

    /// Concatenates two lists, returning a new list.
    ///
    /// The work is deferred: the right-hand list is enqueued onto the
    /// left-hand list's queue of pending sub-lists, and `uncons` relinks
    /// them on demand. An empty side is never enqueued.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let left: CatList<i32> = (1..=2).collect();
    /// let right: CatList<i32> = (3..=4).collect();
    ///
    /// let joined = left.append(&right);
    /// let collected: Vec<i32> = joined.iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            other.clone()
        } else if other.is_empty() {
            self.clone()
        } else {
            self.clone().link(other.clone())
        }
    }

    /// Adds an element to the front of the list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::singleton(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self::singleton(element).append(self)
    }

    /// Adds an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::singleton(1).snoc(2).snoc(3);
    /// let collected: Vec<i32> = list.iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn snoc(&self, element: T) -> Self {
        self.append(&Self::singleton(element))
    }

    /// Decomposes the list into its first element and the rest.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// Removing the head is where deferred concatenations are settled:
    /// the pending sub-lists are relinked from back to front so the rest
    /// of the list has its next head on top.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; a single call may pay O(k) to relink k pending
    /// sub-lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list: CatList<i32> = (1..=3).collect();
    /// let (head, rest) = list.uncons().unwrap();
    /// assert_eq!(head, &1);
    /// assert_eq!(rest.len(), 2);
    ///
    /// // The original list is preserved
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.root.as_ref().map(|node| {
            let rest = Self::collapse(&node.tail);
            debug_assert_eq!(rest.length, self.length - 1);
            (node.head.as_ref(), rest)
        })
    }

    /// Returns the list without its first element.
    ///
    /// If the list is empty, returns an empty list.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    #[must_use]
    pub fn tail(&self) -> Self {
        self.root
            .as_ref()
            .map_or_else(Self::new, |node| Self::collapse(&node.tail))
    }

    /// Builds a list from any [`Foldable`] structure, keeping fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::from_foldable(vec![1, 2, 3]);
    /// let collected: Vec<i32> = list.iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_foldable<F>(foldable: F) -> Self
    where
        F: Foldable<Inner = T>,
    {
        foldable.fold_left(Self::new(), |list, element| list.snoc(element))
    }

    /// Attaches `other` after the last pending sub-list of `self`.
    ///
    /// `self` must be non-empty and `other` must be non-empty; `append`
    /// guards both. The empty-left arm keeps the operation total.
    fn link(mut self, other: Self) -> Self {
        // The Drop impl forbids moving `root` out by pattern, so take it.
        let length = self.length + other.length;
        match self.root.take() {
            None => other,
            Some(node) => Self {
                length,
                root: Some(Node {
                    head: node.head,
                    tail: node.tail.enqueue(other),
                }),
            },
        }
    }

    /// Relinks a queue of pending sub-lists into a single list.
    ///
    /// Folds `append` over the sub-lists from back to front with an
    /// explicit accumulator, so deeply nested lists cannot overflow the
    /// call stack. Each step is O(1), making the whole pass linear in the
    /// number of pending sub-lists.
    fn collapse(pending: &BatchedQueue<Self>) -> Self {
        let mut segments: Vec<Self> = Vec::with_capacity(pending.len());
        let mut queue = pending.clone();
        while let Some((segment, rest)) = queue.dequeue() {
            segments.push(segment);
            queue = rest;
        }

        let mut result = Self::new();
        while let Some(segment) = segments.pop() {
            result = segment.append(&result);
        }
        result
    }
}

impl<T: Clone> CatList<T> {
    /// Creates a list from a slice, keeping element order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list = CatList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice
            .iter()
            .fold(Self::new(), |list, element| list.snoc(element.clone()))
    }

    /// Returns an iterator over clones of the elements in list order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CatListIntoIterator<T> {
        CatListIntoIterator { list: self.clone() }
    }

    /// Maps each element to a list and concatenates the results in order.
    ///
    /// This is the list monad's bind with an `FnMut` function, which the
    /// `FnOnce`-based [`Monad::flat_map`] cannot express for
    /// multi-element lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catlist::persistent::CatList;
    ///
    /// let list: CatList<i32> = (1..=2).collect();
    /// let expanded = list.flat_map_mut(|x| CatList::singleton(x).snoc(x * 10));
    /// let collected: Vec<i32> = expanded.iter().collect();
    /// assert_eq!(collected, vec![1, 10, 2, 20]);
    /// ```
    #[must_use]
    pub fn flat_map_mut<B, F>(self, mut function: F) -> CatList<B>
    where
        F: FnMut(T) -> CatList<B>,
    {
        let mut result = CatList::new();
        for element in self {
            let mapped = function(element);
            result = result.append(&mapped);
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of a [`CatList`] in list order.
pub struct CatListIntoIterator<T> {
    list: CatList<T>,
}

impl<T: Clone> Iterator for CatListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = {
            let (head, rest) = self.list.uncons()?;
            (head.clone(), rest)
        };
        self.list = rest;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for CatListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

impl<T: Clone> IntoIterator for CatList<T> {
    type Item = T;
    type IntoIter = CatListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CatListIntoIterator { list: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a CatList<T> {
    type Item = T;
    type IntoIter = CatListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for CatList<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for CatList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Tears the nested structure down iteratively with an explicit worklist.
/// The default recursive drop would overflow the call stack on the deep
/// nesting a long run of `snoc` builds; shared sub-lists are left for
/// their remaining owners.
impl<T> Drop for CatList<T> {
    fn drop(&mut self) {
        let Some(node) = self.root.take() else {
            return;
        };
        if node.tail.is_empty() {
            return;
        }

        let mut pending: Vec<Self> = Vec::new();
        let Node { head, mut tail } = node;
        drop(head);
        tail.drain_owned_for_drop(&mut pending);

        while let Some(mut list) = pending.pop() {
            if let Some(sub_node) = list.root.take() {
                let Node { head: _, mut tail } = sub_node;
                tail.drain_owned_for_drop(&mut pending);
            }
        }
    }
}

impl<T> FromIterator<T> for CatList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |list, element| list.snoc(element))
    }
}

impl<T: PartialEq> PartialEq for CatList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        let mut left = self.clone();
        let mut right = other.clone();
        while let (Some((left_head, left_rest)), Some((right_head, right_rest))) =
            (left.uncons(), right.uncons())
        {
            if left_head != right_head {
                return false;
            }
            left = left_rest;
            right = right_rest;
        }
        // Equal lengths, so both sides exhausted together
        true
    }
}

impl<T: Eq> Eq for CatList<T> {}

impl<T: Hash> Hash for CatList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        let mut current = self.clone();
        while let Some((element, rest)) = current.uncons() {
            element.hash(state);
            current = rest;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CatList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_list();
        let mut current = self.clone();
        while let Some((element, rest)) = current.uncons() {
            builder.entry(element);
            current = rest;
        }
        builder.finish()
    }
}

impl<T: fmt::Display> fmt::Display for CatList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut current = self.clone();
        let mut first = true;
        while let Some((element, rest)) = current.uncons() {
            if !first {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
            first = false;
            current = rest;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for CatList<T> {
    type Inner = T;
    type WithType<B> = CatList<B>;
}

impl<T: Clone> Functor for CatList<T> {
    fn fmap<B, F>(self, function: F) -> CatList<B>
    where
        F: FnOnce(T) -> B,
    {
        // FnOnce can only be called once, so this only works for single-element lists
        self.head().map_or_else(CatList::new, |head| {
            CatList::singleton(function(head.clone()))
        })
    }

    fn fmap_ref<B, F>(&self, function: F) -> CatList<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.head()
            .map_or_else(CatList::new, |head| CatList::singleton(function(head)))
    }
}

impl<T: Clone> FunctorMut for CatList<T> {
    fn fmap_mut<B, F>(self, mut function: F) -> CatList<B>
    where
        F: FnMut(T) -> B,
    {
        let mut result = CatList::new();
        for element in self {
            result = result.snoc(function(element));
        }
        result
    }

    fn fmap_ref_mut<B, F>(&self, mut function: F) -> CatList<B>
    where
        F: FnMut(&T) -> B,
    {
        let mut result = CatList::new();
        let mut current = self.clone();
        while let Some((element, rest)) = current.uncons() {
            result = result.snoc(function(element));
            current = rest;
        }
        result
    }
}

impl<T: Clone> Applicative for CatList<T> {
    fn pure<A>(value: A) -> CatList<A> {
        CatList::singleton(value)
    }

    fn map2<B, C, F>(self, other: Self::WithType<B>, _function: F) -> Self::WithType<C>
    where
        F: FnOnce(T, B) -> C,
    {
        // For FnOnce, we can only support single-element lists
        // This is a type system limitation - the Applicative trait requires FnOnce
        // but we cannot extract elements without Clone on B
        let _ = (self, other);
        CatList::new()
    }

    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        T: FnOnce(B) -> Output,
    {
        // Similar limitation - cannot properly implement without Clone on B
        let _ = (self, other);
        CatList::new()
    }
}

impl<T: Clone> Monad for CatList<T> {
    fn flat_map<B, F>(self, function: F) -> CatList<B>
    where
        F: FnOnce(T) -> CatList<B>,
    {
        // FnOnce can only be called once, so this only works for single-element lists
        self.head()
            .map_or_else(CatList::new, |head| function(head.clone()))
    }
}

impl<T: Clone> Alternative for CatList<T> {
    #[inline]
    fn empty<A>() -> CatList<A>
    where
        A: 'static,
    {
        CatList::new()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.append(&alternative)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        T: 'static,
    {
        alternatives
            .into_iter()
            .fold(Self::new(), |accumulator, alternative| {
                accumulator.append(&alternative)
            })
    }
}

impl<T: Clone> Foldable for CatList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Clone> Traversable for CatList<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<CatList<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        let mut result = CatList::new();
        for element in self {
            result = result.snoc(function(element)?);
        }
        Some(result)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<CatList<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        let mut result = CatList::new();
        for element in self {
            result = result.snoc(function(element)?);
        }
        Ok(result)
    }
}

impl<T> Semigroup for CatList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T> Monoid for CatList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
