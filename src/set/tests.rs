#![cfg(test)]

use std::collections::BTreeSet;

use super::*;
use crate::error::SetError;
use crate::pair::Pair;
use crate::util::hash::{TaggedState, tagged};

fn sorted<'a, T: Ord + 'a>(iter: impl IntoIterator<Item = &'a T>) -> Vec<&'a T> {
    let mut items: Vec<_> = iter.into_iter().collect();
    items.sort();
    items
}

#[test]
fn test_uniqueness() {
    let set = set![1, 2, 3];
    assert_eq!(set.len(), 3);

    let set = set![1, 2, 2, 3];
    assert_eq!(
        set.len(), 3,
        "Duplicate elements should collapse into a single element."
    );

    let mut set = Set::new();
    for item in [5, 1, 5, 5, 2, 1] {
        set.insert(item);
    }
    assert_eq!(set.len(), 3);
    assert_eq!(sorted(&set), [&1, &2, &5]);
}

#[test]
fn test_insert_remove_idempotence() {
    let mut set = Set::new();
    assert!(set.insert("a"), "Inserting a new element should report a change.");
    assert!(!set.insert("a"), "Inserting an existing element should be a no-op.");
    assert_eq!(set, set!["a"]);

    set.insert("b");
    assert_eq!(set.remove("b"), Some("b"));
    assert_eq!(set.remove("b"), None, "Removing a missing element should be a no-op.");
    assert_eq!(set, set!["a"]);
}

#[test]
fn test_contains_borrowed() {
    let set: Set<String> = ["x", "y"].into_iter().map(String::from).collect();
    assert!(set.contains("x"), "Lookup by a borrowed form should work.");
    assert!(!set.contains("z"));
}

#[test]
fn test_empty() {
    let mut set = Set::<i32>::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.get_one(), Err(SetError::EmptySet));
    assert!(set.take_one().is_err_and(|e| e.is_empty_set()));

    set.insert(0);
    assert!(!set.is_empty());
    set.clear();
    assert!(set.is_empty(), "Clearing should remove every element.");
}

#[test]
fn test_get_one() {
    let set = set![4, 8, 15];
    let item = set.get_one().expect("set isn't empty");
    assert!(set.contains(item), "get_one should return a member of the set.");

    let set = set!['q'];
    assert_eq!(set.get_one(), Ok(&'q'));
}

#[test]
fn test_take_one() {
    let mut set = set![1, 2, 3];
    let mut taken = BTreeSet::new();
    while let Ok(item) = set.take_one() {
        assert!(!set.contains(&item), "take_one should remove the returned element.");
        taken.insert(item);
    }
    assert!(set.is_empty());
    assert_eq!(
        taken.into_iter().collect::<Vec<_>>(), [1, 2, 3],
        "Every element should be taken exactly once."
    );
}

#[test]
fn test_subset_superset() {
    let empty = Set::<u8>::new();
    let small = set![1, 2];
    let large = set![1, 2, 3];

    assert!(empty.is_subset(&empty), "The empty set should be a subset of itself.");
    assert!(empty.is_subset(&small), "The empty set should be a subset of every set.");
    assert!(small.is_subset(&small), "Every set should be a subset of itself.");
    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));

    assert!(large.is_superset(&small));
    assert!(!small.is_superset(&large));
    assert!(small.is_superset(&empty));
}

#[test]
fn test_equality() {
    assert_eq!(set![1, 2, 3], set![3, 2, 1], "Equality shouldn't depend on order.");
    assert_ne!(set![1, 2], set![1, 2, 3]);
    assert_ne!(set![1, 2, 4], set![1, 2, 3]);
    assert_eq!(Set::<u8>::new(), Set::new());
}

#[test]
fn test_disjoint() {
    assert!(set![1, 2].is_disjoint(&set![3, 4]));
    assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    assert!(Set::<u8>::new().is_disjoint(&Set::new()));
}

#[test]
fn test_retain() {
    let mut set: Set<u32> = (0..10).collect();
    set.retain(|i| i % 3 == 0);
    assert_eq!(set, set![0, 3, 6, 9]);
}

#[test]
fn test_extend() {
    let mut set = set![1, 2];
    set.extend([2, 3]);
    set.extend(&[3, 4]);
    assert_eq!(set, set![1, 2, 3, 4]);
}

#[test]
fn test_clone_is_independent() {
    let original = set!["a", "b"];
    let mut copy = original.clone();
    copy.insert("c");
    copy.remove("a");

    assert_eq!(original, set!["a", "b"], "Modifying a clone shouldn't affect the original.");
    assert_eq!(copy, set!["b", "c"]);
}

#[test]
fn test_iteration() {
    let set = set![3, 1, 2];
    assert_eq!(set.iter().len(), 3);
    assert_eq!(sorted(set.iter()), [&1, &2, &3]);

    let mut owned: Vec<_> = set.into_iter().collect();
    owned.sort();
    assert_eq!(owned, [1, 2, 3]);
}

#[test]
fn test_lazy_views() {
    let a = set![1, 2];
    let b = set![2, 3];

    assert_eq!(sorted(a.union(&b)), [&1, &2, &3]);
    assert_eq!(sorted(a.intersection(&b)), [&2]);
    assert_eq!(sorted(a.difference(&b)), [&1]);
    assert_eq!(sorted(a.symmetric_difference(&b)), [&1, &3]);
}

#[test]
fn test_lazy_product() {
    let a = set![1, 2];
    let b = set!["x", "y"];

    let product = a.product(&b);
    assert_eq!(product.size_hint(), (4, Some(4)));

    let mut pairs: Vec<_> = product.map(|p| p.cloned()).collect();
    pairs.sort();
    assert_eq!(
        pairs,
        [Pair::new(1, "x"), Pair::new(1, "y"), Pair::new(2, "x"), Pair::new(2, "y")],
    );

    let empty = Set::<char>::new();
    assert_eq!(a.product(&empty).count(), 0, "A product with the empty set should be empty.");
    assert_eq!(empty.product(&a).count(), 0);
}

#[test]
fn test_const_with_hasher() {
    const EMPTY: Set<u8, TaggedState> = Set::with_hasher(TaggedState(7));

    let mut set = EMPTY;
    assert!(set.is_empty());
    assert_eq!(set.hasher(), &TaggedState(7), "The provided hasher should be kept.");
    set.insert(1);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_colliding_hashes() {
    let mut set = tagged(1, ["zero", "one", "two", "three", "four"]);
    assert_eq!(set.len(), 5, "Elements sharing a hash should all be kept.");
    assert!(!set.insert("one"), "An equal element should be detected within a shared bucket.");

    set.retain(|item| item.len() > 3);
    let mut kept: Vec<_> = set.iter().copied().collect();
    kept.sort();
    assert_eq!(kept, ["four", "three", "zero"]);

    let taken = set.take_one().expect("set isn't empty");
    assert!(!set.contains(taken), "take_one should remove only the returned element.");
    assert_eq!(set.len(), 2, "take_one shouldn't drop the other colliding elements.");

    let other = tagged(2, kept);
    assert_eq!(sorted(other.difference(&set)), [&taken]);
    assert!(set.is_subset(&other));
    assert_eq!(set.hasher(), &TaggedState(1), "Mutation should keep the original hasher.");
}

#[test]
fn test_formatting() {
    assert_eq!(format!("{:?}", set![1]), "{1}");
    assert_eq!(format!("{}", set!["a"]), "#{a}");
    assert_eq!(format!("{}", Set::<u8>::new()), "#{}");

    let shown = format!("{}", set![1, 2]);
    assert!(
        shown == "#{1, 2}" || shown == "#{2, 1}",
        "Elements should be separated by commas, got {shown}."
    );
}

#[cfg(feature = "ops")]
#[test]
fn test_operators() {
    let a = set![1, 2];
    let b = set![2, 3];

    assert_eq!(&a | &b, set![1, 2, 3]);
    assert_eq!(&a & &b, set![2]);
    assert_eq!(&a - &b, set![1]);
    assert_eq!(&a ^ &b, set![1, 3]);
    assert_eq!((&a * &set!['x']).len(), 2);

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c, set![1, 2, 3]);

    let mut c = a.clone();
    c &= b.clone();
    assert_eq!(c, set![2]);

    let mut c = a.clone();
    c -= b.clone();
    assert_eq!(c, set![1]);

    let mut c = a.clone();
    c ^= b;
    assert_eq!(c, set![1, 3]);
}
