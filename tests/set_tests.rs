//! Tests for the persistent set.

use currycomb::persistent::PersistentSet;
use currycomb::typeclass::{Foldable, Monoid, Semigroup};
use proptest::prelude::*;

fn from_slice(elements: &[i64]) -> PersistentSet<i64> {
    elements.iter().copied().collect()
}

proptest! {
    /// Union is associative and commutative.
    #[test]
    fn prop_union_associativity(
        a in prop::collection::vec(any::<i64>(), 0..8),
        b in prop::collection::vec(any::<i64>(), 0..8),
        c in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let (a, b, c) = (from_slice(&a), from_slice(&b), from_slice(&c));
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.clone().combine(b.clone().combine(c.clone()))
        );
        prop_assert_eq!(a.clone().combine(b.clone()), b.combine(a));
    }

    /// The empty set is the identity for combine.
    #[test]
    fn prop_monoid_identity(elements in prop::collection::vec(any::<i64>(), 0..10)) {
        let set = from_slice(&elements);
        prop_assert_eq!(PersistentSet::empty().combine(set.clone()), set.clone());
        prop_assert_eq!(set.clone().combine(PersistentSet::empty()), set);
    }

    /// Inserting twice equals inserting once.
    #[test]
    fn prop_insert_idempotent(elements in prop::collection::vec(any::<i64>(), 0..10), x in any::<i64>()) {
        let set = from_slice(&elements);
        prop_assert_eq!(set.insert(x).insert(x), set.insert(x));
    }

    /// Membership after insert; absence after remove.
    #[test]
    fn prop_insert_remove_membership(elements in prop::collection::vec(any::<i64>(), 0..10), x in any::<i64>()) {
        let set = from_slice(&elements);
        prop_assert!(set.insert(x).contains(&x));
        prop_assert!(!set.insert(x).remove(&x).contains(&x));
    }

    /// Intersection is a subset of both operands.
    #[test]
    fn prop_intersection_subset(
        a in prop::collection::vec(any::<i64>(), 0..10),
        b in prop::collection::vec(any::<i64>(), 0..10),
    ) {
        let (a, b) = (from_slice(&a), from_slice(&b));
        let shared = a.intersection(&b);
        prop_assert!(shared.is_subset(&a));
        prop_assert!(shared.is_subset(&b));
    }

    /// Fold visits every element exactly once.
    #[test]
    fn prop_fold_counts_elements(elements in prop::collection::vec(any::<i64>(), 0..10)) {
        let set = from_slice(&elements);
        let expected = set.len();
        prop_assert_eq!(set.fold_left(0usize, |count, _| count + 1), expected);
    }
}

#[test]
fn operations_never_mutate_the_receiver() {
    let base: PersistentSet<&str> = ["a", "b"].into_iter().collect();
    let grown = base.insert("c");
    let shrunk = base.remove(&"a");

    assert_eq!(base.len(), 2);
    assert_eq!(grown.len(), 3);
    assert_eq!(shrunk.len(), 1);
}

#[test]
fn no_ordering_is_promised_but_contents_are_stable() {
    let forward: PersistentSet<i32> = (0..100).collect();
    let backward: PersistentSet<i32> = (0..100).rev().collect();
    assert_eq!(forward, backward);
}
