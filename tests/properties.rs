//! Property-based tests for QueryableList using proptest.

use proptest::prelude::*;
use queryable_list::collections::list::QueryableList;
use queryable_list::collections::matcher::{by_accessor, by_predicate, by_value, constant};

fn small_list() -> impl Strategy<Value = QueryableList<i8>> {
    prop::collection::vec(-8_i8..8, 0..24).prop_map(QueryableList::from)
}

proptest! {
    /// Contains should agree with search finding a position.
    #[test]
    fn contains_agrees_with_search(list in small_list(), value in -10_i8..10) {
        prop_assert_eq!(
            list.contains(by_value(value)),
            list.search(by_value(value)).is_some()
        );
    }

    /// The position returned by search should hold the first matching element.
    #[test]
    fn search_finds_first_match(list in small_list(), value in -10_i8..10) {
        match list.search(by_value(value)) {
            Some(index) => {
                prop_assert_eq!(list[index], value);
                prop_assert!(!list[..index].contains(&value));
            }
            None => prop_assert!(!list[..].contains(&value)),
        }
    }

    /// Count should equal the length of the selected list.
    #[test]
    fn count_equals_select_len(list in small_list(), threshold in -10_i8..10) {
        let above = by_predicate(|n: &i8| *n > threshold);
        prop_assert_eq!(list.count(&above), list.select(&above).len());

        let by_sign = by_accessor(|n: &i8| n.signum(), 1_i8);
        prop_assert_eq!(list.count(&by_sign), list.select(&by_sign).len());
    }

    /// Transform should keep the length and convert every element in place.
    #[test]
    fn transform_into_preserves_order(list in small_list()) {
        let widened = list.transform_into::<i32>();
        prop_assert_eq!(widened.len(), list.len());
        for (converted, original) in widened.iter().zip(list.iter()) {
            prop_assert_eq!(*converted, i32::from(*original));
        }
    }

    /// Replace should swap exactly the matching elements and nothing else.
    #[test]
    fn replace_by_value_is_pointwise(list in small_list(), old in -8_i8..8, new in -8_i8..8) {
        let replaced = list.replace(constant(new), by_value(old));
        prop_assert_eq!(replaced.len(), list.len());
        for (after, before) in replaced.iter().zip(list.iter()) {
            prop_assert_eq!(*after, if *before == old { new } else { *before });
        }
    }

    /// Slicing the whole list should give the list back, and a zero length should give nothing.
    #[test]
    fn slice_identity_and_empty(list in small_list(), start in -30_isize..30) {
        prop_assert_eq!(list.slice(0, list.len() as isize), list.clone());
        prop_assert!(list.slice(start, 0).is_empty());
    }

    /// Splice should leave the list equal to the corresponding slice.
    #[test]
    fn splice_matches_slice(list in small_list(), start in -30_isize..30, length in -30_isize..30) {
        let expected = list.slice(start, length);
        let mut spliced = list.clone();
        spliced.splice(start, length);
        prop_assert_eq!(spliced, expected);
    }

    /// Reversing twice should be the identity.
    #[test]
    fn reverse_is_an_involution(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    /// Unifying a list with itself should only remove duplicates.
    #[test]
    fn self_unify_removes_duplicates(list in small_list()) {
        prop_assert_eq!(list.unify(&list), list.remove_duplicates());
    }

    /// Shares should be true exactly when disjoin finds something.
    #[test]
    fn shares_agrees_with_disjoin(list in small_list(), other in small_list()) {
        prop_assert_eq!(list.shares(&other), !list.disjoin(&other).is_empty());
    }

    /// Every value of either list should appear in the union exactly once.
    #[test]
    fn unify_contains_each_value_once(list in small_list(), other in small_list()) {
        let union = list.unify(&other);
        for value in list.iter().chain(other.iter()) {
            prop_assert_eq!(union.count(by_value(*value)), 1);
        }
        prop_assert_eq!(union.len(), union.remove_duplicates().len());
    }

    /// The power set should hold 2^k subsets for k distinct values.
    #[test]
    fn power_set_size(list in prop::collection::vec(0_u8..6, 0..10).prop_map(QueryableList::from)) {
        let distinct = list.remove_duplicates().len();
        let subsets = list.power_set();
        prop_assert_eq!(subsets.len(), 1 << distinct);
        prop_assert!(subsets[0].is_empty());
        prop_assert_eq!(subsets.remove_duplicates().len(), subsets.len());
    }

    /// Sorting should produce an ordered permutation, bounded by min and max.
    #[test]
    fn sort_orders_and_bounds(list in small_list()) {
        let mut sorted = list.clone();
        sorted.sort();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(sorted.len(), list.len());
        if let (Ok(min), Ok(max)) = (list.min(), list.max()) {
            prop_assert_eq!(Some(min), sorted.first());
            prop_assert_eq!(Some(max), sorted.last());
        } else {
            prop_assert!(list.is_empty());
        }
    }
}
