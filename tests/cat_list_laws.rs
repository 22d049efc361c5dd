//! Property-based tests for CatList.
//!
//! These tests verify that CatList satisfies the algebraic laws for the
//! type classes it implements, and that every observation path reports
//! the same element order.

use catlist::persistent::CatList;
use catlist::typeclass::{Alternative, Foldable, FunctorMut, Monoid, Semigroup, Sum, Traversable};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating CatList
// =============================================================================

/// Generates a `CatList<i32>` with up to `max_size` elements.
fn cat_list_strategy(max_size: usize) -> impl Strategy<Value = CatList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

/// Generates a small `CatList<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = CatList<i32>> {
    cat_list_strategy(20)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(list in small_list()) {
        prop_assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn prop_cons_increases_len_by_one(list in small_list(), element: i32) {
        let new_list = list.cons(element);
        prop_assert_eq!(new_list.len(), list.len() + 1);
    }

    #[test]
    fn prop_cons_puts_element_at_head(list in small_list(), element: i32) {
        let new_list = list.cons(element);
        prop_assert_eq!(new_list.head(), Some(&element));
    }

    #[test]
    fn prop_snoc_increases_len_by_one(list in small_list(), element: i32) {
        let new_list = list.snoc(element);
        prop_assert_eq!(new_list.len(), list.len() + 1);
    }

    #[test]
    fn prop_snoc_puts_element_at_back(list in small_list(), element: i32) {
        let new_list = list.snoc(element);
        let collected: Vec<i32> = new_list.into_iter().collect();
        prop_assert_eq!(collected.last(), Some(&element));
    }

    #[test]
    fn prop_tail_decreases_len_by_one(list in cat_list_strategy(20).prop_filter("non-empty", |list| !list.is_empty())) {
        let tail = list.tail();
        prop_assert_eq!(tail.len(), list.len() - 1);
    }

    #[test]
    fn prop_uncons_returns_head_and_tail(list in cat_list_strategy(20).prop_filter("non-empty", |list| !list.is_empty())) {
        if let Some((head, tail)) = list.uncons() {
            prop_assert_eq!(list.head(), Some(head));
            prop_assert_eq!(tail.len(), list.len() - 1);
        }
    }

    #[test]
    fn prop_cons_then_uncons_round_trips(list in small_list(), element: i32) {
        let consed = list.cons(element);
        let (head, rest) = consed.uncons().unwrap();
        prop_assert_eq!(head, &element);
        prop_assert_eq!(rest, list);
    }

    // =========================================================================
    // Structural Sharing Properties
    // =========================================================================

    #[test]
    fn prop_tail_preserves_structure(list in cat_list_strategy(20).prop_filter("non-empty", |list| !list.is_empty())) {
        let with_element = list.cons(999);
        let tail_of_new = with_element.tail();
        // tail should be equal to the original list
        prop_assert_eq!(tail_of_new, list);
    }

    #[test]
    fn prop_append_preserves_operands(list1 in small_list(), list2 in small_list()) {
        let length1 = list1.len();
        let length2 = list2.len();
        let _ = list1.append(&list2);
        prop_assert_eq!(list1.len(), length1);
        prop_assert_eq!(list2.len(), length2);
    }

    // =========================================================================
    // Append Properties (Semigroup Laws)
    // =========================================================================

    #[test]
    fn prop_semigroup_associativity(
        list1 in small_list(),
        list2 in small_list(),
        list3 in small_list()
    ) {
        // (a + b) + c == a + (b + c)
        let left = list1.clone().combine(list2.clone()).combine(list3.clone());
        let right = list1.combine(list2.combine(list3));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_append_length(list1 in small_list(), list2 in small_list()) {
        let combined = list1.append(&list2);
        prop_assert_eq!(combined.len(), list1.len() + list2.len());
    }

    #[test]
    fn prop_append_concatenates_in_order(list1 in small_list(), list2 in small_list()) {
        let mut expected: Vec<i32> = list1.iter().collect();
        expected.extend(list2.iter());
        let combined: Vec<i32> = list1.append(&list2).into_iter().collect();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_append_empty_left_identity(list in small_list()) {
        let empty: CatList<i32> = CatList::new();
        let result = empty.append(&list);
        prop_assert_eq!(result, list);
    }

    #[test]
    fn prop_append_empty_right_identity(list in small_list()) {
        let empty: CatList<i32> = CatList::new();
        let result = list.append(&empty);
        prop_assert_eq!(result, list);
    }

    // =========================================================================
    // Monoid Laws
    // =========================================================================

    #[test]
    fn prop_monoid_left_identity(list in small_list()) {
        let empty = <CatList<i32> as Monoid>::empty();
        let result = empty.combine(list.clone());
        prop_assert_eq!(result, list);
    }

    #[test]
    fn prop_monoid_right_identity(list in small_list()) {
        let empty = <CatList<i32> as Monoid>::empty();
        let result = list.clone().combine(empty);
        prop_assert_eq!(result, list);
    }

    // =========================================================================
    // Alternative Laws
    // =========================================================================

    #[test]
    fn prop_alternative_identities(list in small_list()) {
        let empty = <CatList<i32> as Alternative>::empty::<i32>();
        let left = empty.clone().alt(list.clone());
        let right = list.clone().alt(empty);
        prop_assert_eq!(left, list.clone());
        prop_assert_eq!(right, list);
    }

    #[test]
    fn prop_alternative_associativity(
        list1 in small_list(),
        list2 in small_list(),
        list3 in small_list()
    ) {
        let left = list1.clone().alt(list2.clone()).alt(list3.clone());
        let right = list1.alt(list2.alt(list3));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Functor Laws (using FunctorMut)
    // =========================================================================

    #[test]
    fn prop_functor_identity(list in small_list()) {
        // fmap id == id
        let mapped = list.clone().fmap_mut(|element| element);
        prop_assert_eq!(mapped, list);
    }

    #[test]
    fn prop_functor_composition(list in small_list()) {
        // fmap (g . f) == fmap g . fmap f
        let function1 = |element: i32| element.wrapping_add(1);
        let function2 = |element: i32| element.wrapping_mul(2);

        let left = list.clone().fmap_mut(function1).fmap_mut(function2);
        let right = list.fmap_mut(|element| function2(function1(element)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_fmap_mut_preserves_length(list in small_list()) {
        let mapped = list.clone().fmap_mut(|element| element.wrapping_mul(3));
        prop_assert_eq!(mapped.len(), list.len());
    }

    // =========================================================================
    // Monad Laws (via flat_map_mut, with singleton as unit)
    // =========================================================================

    #[test]
    fn prop_bind_left_identity(element: i32) {
        let function = |x: i32| CatList::singleton(x.wrapping_add(1)).snoc(x.wrapping_mul(2));
        let left = CatList::singleton(element).flat_map_mut(function);
        prop_assert_eq!(left, function(element));
    }

    #[test]
    fn prop_bind_right_identity(list in small_list()) {
        let bound = list.clone().flat_map_mut(CatList::singleton);
        prop_assert_eq!(bound, list);
    }

    #[test]
    fn prop_bind_associativity(list in small_list()) {
        let function1 = |x: i32| CatList::singleton(x).snoc(x.wrapping_add(1));
        let function2 = |x: i32| CatList::singleton(x.wrapping_mul(2));

        let left = list.clone().flat_map_mut(function1).flat_map_mut(function2);
        let right = list.flat_map_mut(|x| function1(x).flat_map_mut(function2));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Foldable Laws
    // =========================================================================

    #[test]
    fn prop_fold_left_sum_matches_iter_sum(list in small_list()) {
        // Use wrapping addition to avoid overflow
        let fold_sum = list.clone().fold_left(0i64, |accumulator, element| {
            accumulator.wrapping_add(i64::from(element))
        });
        let iter_sum: i64 = list.iter().map(i64::from).sum();
        prop_assert_eq!(fold_sum, iter_sum);
    }

    #[test]
    fn prop_fold_right_preserves_order(list in small_list()) {
        let from_left = list.clone().fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });
        let from_right = list.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.insert(0, element);
            accumulator
        });
        prop_assert_eq!(from_left, from_right);
    }

    #[test]
    fn prop_fold_map_sum(list in small_list()) {
        // fold_map with Sum should equal the sum of elements
        let fold_map_result: Sum<i64> = list.clone().fold_map(|element| Sum(i64::from(element)));
        let direct_sum: i64 = list.iter().map(i64::from).sum();
        prop_assert_eq!(fold_map_result.0, direct_sum);
    }

    #[test]
    fn prop_to_list_roundtrip(list in small_list()) {
        // Converting to Vec and back should preserve elements
        let as_vec: Vec<i32> = list.clone().into_iter().collect();
        let back_to_list: CatList<i32> = as_vec.into_iter().collect();
        prop_assert_eq!(back_to_list, list);
    }

    #[test]
    fn prop_length_matches_fold(list in small_list()) {
        let fold_count = list.clone().fold_left(0usize, |count, _| count + 1);
        prop_assert_eq!(fold_count, list.len());
    }

    // =========================================================================
    // Traversable Laws
    // =========================================================================

    #[test]
    fn prop_traverse_option_identity(list in small_list()) {
        // Traversing with a pure effect is the same as mapping
        let function = |element: i32| element.wrapping_add(1);
        let traversed = list.clone().traverse_option(|element| Some(function(element)));
        let mapped = list.fmap_mut(function);
        prop_assert_eq!(traversed, Some(mapped));
    }

    #[test]
    fn prop_traverse_option_preserves_order(list in small_list()) {
        let traversed = list.clone().traverse_option(Some).unwrap();
        prop_assert_eq!(traversed, list);
    }

    #[test]
    fn prop_traverse_result_collects_first_error(list in cat_list_strategy(20).prop_filter("non-empty", |list| !list.is_empty())) {
        let poisoned = list.fmap_mut(|_| ());
        let checked: Result<CatList<()>, &str> = poisoned.traverse_result(|()| Err("always fails"));
        prop_assert_eq!(checked, Err("always fails"));
    }

    // =========================================================================
    // FromIterator / IntoIterator Properties
    // =========================================================================

    #[test]
    fn prop_from_iter_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: CatList<i32> = elements.clone().into_iter().collect();
        let back_to_vec: Vec<i32> = list.into_iter().collect();
        prop_assert_eq!(back_to_vec, elements);
    }

    #[test]
    fn prop_from_slice_matches_from_iter(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let from_slice = CatList::from_slice(&elements);
        let from_iter: CatList<i32> = elements.into_iter().collect();
        prop_assert_eq!(from_slice, from_iter);
    }

    #[test]
    fn prop_from_foldable_matches_from_iter(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let from_foldable = CatList::from_foldable(elements.clone());
        let from_iter: CatList<i32> = elements.into_iter().collect();
        prop_assert_eq!(from_foldable, from_iter);
    }

    // =========================================================================
    // Observation Consistency
    // =========================================================================

    #[test]
    fn prop_all_observation_paths_agree(list in small_list()) {
        // uncons draining, iteration, fold_left, fmap_mut, and traversal
        // must all report the same element order
        let via_iter: Vec<i32> = list.iter().collect();

        let mut via_uncons = Vec::new();
        let mut current = list.clone();
        while let Some((head, rest)) = current.uncons() {
            via_uncons.push(*head);
            current = rest;
        }

        let via_fold = list.clone().fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });

        let mut via_fmap = Vec::new();
        let _ = list.clone().fmap_ref_mut(|element| via_fmap.push(*element));

        let mut via_traverse = Vec::new();
        let _ = list.traverse_option(|element| {
            via_traverse.push(element);
            Some(())
        });

        prop_assert_eq!(&via_uncons, &via_iter);
        prop_assert_eq!(&via_fold, &via_iter);
        prop_assert_eq!(&via_fmap, &via_iter);
        prop_assert_eq!(&via_traverse, &via_iter);
    }

    // =========================================================================
    // Equality Properties
    // =========================================================================

    #[test]
    fn prop_eq_reflexive(list in small_list()) {
        prop_assert_eq!(list.clone(), list);
    }

    #[test]
    fn prop_eq_symmetric(list1 in small_list(), list2 in small_list()) {
        prop_assert_eq!(list1 == list2, list2 == list1);
    }

    #[test]
    fn prop_eq_independent_of_history(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        // Building front-to-back with snoc and back-to-front with cons
        // must yield equal lists
        let snoced = elements
            .iter()
            .fold(CatList::new(), |list, element| list.snoc(*element));
        let consed = elements
            .iter()
            .rev()
            .fold(CatList::new(), |list, element| list.cons(*element));
        prop_assert_eq!(snoced, consed);
    }

    // =========================================================================
    // Additional Properties
    // =========================================================================

    #[test]
    fn prop_singleton_has_len_one(element: i32) {
        let singleton = CatList::singleton(element);
        prop_assert_eq!(singleton.len(), 1);
    }

    #[test]
    fn prop_head_of_singleton_is_element(element: i32) {
        let singleton = CatList::singleton(element);
        prop_assert_eq!(singleton.head(), Some(&element));
    }

    #[test]
    fn prop_tail_of_singleton_is_empty(element: i32) {
        let singleton = CatList::singleton(element);
        let tail = singleton.tail();
        prop_assert!(tail.is_empty());
    }
}

// =============================================================================
// Deterministic Scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn cons_chain_yields_front_to_back_order() {
        let list = CatList::singleton(3).cons(2).cons(1);
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn append_of_two_built_lists_flattens_in_order() {
        let left = CatList::from_foldable(vec![1, 2]);
        let right = CatList::from_foldable(vec![3, 4]);
        let collected: Vec<i32> = left.append(&right).into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn flat_map_interleaves_expanded_elements() {
        let list: CatList<i32> = vec![1, 2].into_iter().collect();
        let expanded = list.flat_map_mut(|x| CatList::singleton(x).snoc(x * 10));
        let collected: Vec<i32> = expanded.into_iter().collect();
        assert_eq!(collected, vec![1, 10, 2, 20]);
    }

    #[test]
    fn alternating_cons_and_snoc_interleave_correctly() {
        // cons grows the front, snoc the back; draining must read
        // front-to-back regardless of the interleaving
        let list = CatList::singleton(0).cons(-1).snoc(1).cons(-2).snoc(2);
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn hundred_thousand_snocs_drain_in_order() {
        let count: i64 = 100_000;
        let mut list = CatList::new();
        for value in 0..count {
            list = list.snoc(value);
        }
        assert_eq!(list.len(), 100_000);

        let mut expected = 0;
        let mut current = list;
        while let Some((head, rest)) = current.uncons() {
            assert_eq!(*head, expected);
            expected += 1;
            current = rest;
        }
        assert_eq!(expected, count);
    }

    #[test]
    fn balanced_append_tree_drains_in_order() {
        // Build by repeatedly appending pairs, so the pending queues nest
        let mut segments: Vec<CatList<i64>> = (0..1024).map(CatList::singleton).collect();
        while segments.len() > 1 {
            let mut next = Vec::with_capacity(segments.len() / 2);
            for pair in segments.chunks(2) {
                next.push(pair[0].append(&pair[1]));
            }
            segments = next;
        }
        let tree = segments.pop().unwrap();
        let collected: Vec<i64> = tree.into_iter().collect();
        assert_eq!(collected, (0..1024).collect::<Vec<i64>>());
    }
}
