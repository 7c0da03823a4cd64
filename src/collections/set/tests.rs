#![cfg(test)]

use rstest::{fixture, rstest};

use super::*;
use crate::collections::traits::Collection;
use crate::util::hash::{IdentityHasherBuilder, PinnedHash};

#[fixture]
fn words() -> HashSet<&'static str> {
    let mut set = HashSet::new();
    set.insert_all(["foo", "bar", "baz", "baz", "bar"]);
    set
}

#[rstest]
fn test_construction_deduplicates(words: HashSet<&'static str>) {
    assert_eq!(words.len(), 3, "Duplicate insertions should be absorbed.");
    assert_eq!(words.sorted(), [&"bar", &"baz", &"foo"]);

    let set = HashSet::<_>::from(["foo", "bar", "baz", "baz", "bar"]);
    assert_eq!(set.len(), 3, "Construction from an array should deduplicate as well.");
}

#[rstest]
fn test_insert(mut words: HashSet<&'static str>) {
    assert!(words.contains("foo"));
    assert!(!words.contains("foo2"));

    assert!(words.insert("foo2"), "Inserting a new element should report a change.");
    assert_eq!(words.len(), 4);
    assert!(words.contains("foo2"));

    assert!(!words.insert("foo2"), "Inserting an existing element should be a no-op.");
    assert_eq!(words.len(), 4);
}

#[rstest]
fn test_insert_all(mut words: HashSet<&'static str>) {
    words.insert_all(["a", "b", "a"]);
    assert_eq!(words.len(), 5);
    assert_eq!(words.sorted(), [&"a", &"b", &"bar", &"baz", &"foo"]);

    words.extend(["a", "c"]);
    assert_eq!(words.len(), 6, "Extend should behave like insert_all.");
}

#[rstest]
fn test_remove(mut words: HashSet<&'static str>) {
    assert_eq!(words.remove("foo"), Ok("foo"));
    assert_eq!(words.len(), 2);
    assert!(!words.contains("foo"));

    assert_eq!(
        words.remove("foo"),
        Err(ElementNotFound),
        "Removing an element twice should fail the second time."
    );
}

#[rstest]
fn test_remove_unknown(mut words: HashSet<&'static str>) {
    let error = words.remove("asdfasdf").unwrap_err();
    assert_eq!(error, ElementNotFound);
    assert_eq!(error.to_string(), "the set does not contain the provided element");
    assert_eq!(words.len(), 3, "A failed removal shouldn't change the set.");
}

#[rstest]
fn test_clear(mut words: HashSet<&'static str>) {
    assert!(!words.is_empty());
    let cap = words.cap();

    words.clear();
    assert!(words.is_empty());
    assert_eq!(words.len(), 0);
    assert_eq!(words.iter().count(), 0);
    assert_eq!(words.cap(), cap, "Clearing should keep the allocation.");

    words.clear();
    assert!(words.is_empty(), "Clearing an empty set should be harmless.");
}

#[test]
fn test_empty_set_has_no_allocation() {
    let set = HashSet::<u32>::new();
    assert_eq!(set.cap(), 0);
    assert!(!set.contains(&0), "Lookups in an unallocated set should simply miss.");
    assert_eq!(set.iter().next(), None);
}

#[rstest]
fn test_iteration_is_restartable(mut words: HashSet<&'static str>) {
    let iter = words.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.count(), 3);

    words.insert("qux");
    let mut seen: Vec<_> = words.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(
        seen,
        ["bar", "baz", "foo", "qux"],
        "A fresh iterator should reflect the current contents."
    );

    let mut owned: Vec<_> = words.into_iter().collect();
    owned.sort_unstable();
    assert_eq!(owned, ["bar", "baz", "foo", "qux"]);
}

#[test]
fn test_filter() {
    let set = HashSet::<_>::from(["a", "b", "c", "d", "e", "f"]);

    let kept = set.filter(|v| *v == "d");
    assert_eq!(set.len(), 6, "Filtering shouldn't modify the receiver.");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.sorted(), [&"d"]);

    let rejected = set.filter_not(|v| *v == "d");
    assert_eq!(set.len(), 6, "Filtering shouldn't modify the receiver.");
    assert_eq!(rejected.len(), 5);
    assert_eq!(rejected.sorted(), [&"a", &"b", &"c", &"e", &"f"]);
}

#[test]
fn test_filter_keeps_hasher() {
    let set: HashSet<_, IdentityHasherBuilder> = (0_u64..20).collect();
    let even = set.filter(|i| i % 2 == 0);
    assert_eq!(even.len(), 10);
    assert!(even.iter().all(|i| i % 2 == 0));
}

#[test]
fn test_folds_are_not_implemented() {
    let set = HashSet::<_>::from([1, 2, 3]);

    let left = set.fold_left(0, |acc, i| acc + i);
    assert_eq!(left, Err(NotImplemented { operation: "fold_left" }));

    let right = set.fold_right(0, |i, acc| acc + i);
    assert_eq!(right, Err(NotImplemented { operation: "fold_right" }));
    assert_eq!(
        right.unwrap_err().to_string(),
        "fold_right is not implemented for sets"
    );

    let empty = HashSet::<i32>::new();
    assert!(empty.fold_left(0, |acc, _| acc).is_err(), "Folds should fail even on empty sets.");
}

#[test]
fn test_errors_convert() {
    fn drain_then_fold(set: &mut HashSet<u8>) -> Result<u8, SetError> {
        set.remove(&1)?;
        let sum = set.fold_left(0, |acc, i| acc + i)?;
        Ok(sum)
    }

    let mut set = HashSet::<_>::from([1, 2]);
    let error = drain_then_fold(&mut set).unwrap_err();
    assert!(error.is_not_implemented());
    assert_eq!(set.len(), 1);

    let error = drain_then_fold(&mut set).unwrap_err();
    assert!(error.is_not_found());
    assert!(matches!(ElementNotFound::try_from(error), Ok(ElementNotFound)));
}

#[test]
fn test_equals() {
    let mut first = HashSet::<_>::from(["a", "b", "c"]);
    let second = HashSet::<_>::from(["b", "a", "c"]);
    assert!(first.equals(&second));
    assert!(second.equals(&first));
    assert_eq!(first, second);

    first.insert("d");
    assert!(!first.equals(&second));
    assert!(!second.equals(&first));
    assert_ne!(first, second);
}

#[test]
fn test_equals_does_not_reorder() {
    let first: HashSet<_> = (0..50).rev().collect();
    let second: HashSet<_> = (0..50).collect();
    let before: Vec<_> = first.iter().copied().collect();

    assert!(first.equals(&second));
    let after: Vec<_> = first.iter().copied().collect();
    assert_eq!(before, after, "Comparing sets shouldn't modify either of them.");
}

#[test]
fn test_equals_across_hashers() {
    let first: HashSet<u64> = (0..10).collect();
    let second: HashSet<u64, IdentityHasherBuilder> = (0..10).rev().collect();
    assert!(first.equals(&second));
    assert_eq!(first, second);
}

#[rstest]
fn test_union_with(mut words: HashSet<&'static str>) {
    let mut other = HashSet::<_>::from(["foo", "boo"]);
    words.union_with(&other);
    assert_eq!(words.sorted(), [&"bar", &"baz", &"boo", &"foo"]);
    assert_eq!(other.len(), 2, "The argument shouldn't be modified.");

    other.union_with(&words);
    assert_eq!(other, words, "Unioning in both directions should make the sets equal.");
    assert_eq!(words.sorted(), [&"bar", &"baz", &"boo", &"foo"]);
}

#[rstest]
fn test_union_with_self(mut words: HashSet<&'static str>) {
    let copy = words.clone();
    words.union_with(&copy);
    assert_eq!(words, copy, "Unioning a set with its own contents should change nothing.");
    words.union_with(&HashSet::<&str>::new());
    assert_eq!(words.len(), 3);
}

#[rstest]
fn test_intersect_with(mut words: HashSet<&'static str>) {
    let mut other = HashSet::<_>::from(["foo", "boo"]);
    let other_copy = other.clone();

    words.intersect_with(&other);
    assert_eq!(words, HashSet::<_>::from(["foo"]));
    assert_eq!(other, other_copy, "The argument shouldn't be modified.");

    other.intersect_with(&HashSet::<_>::from(["foo", "bar", "baz"]));
    assert_eq!(other, HashSet::<_>::from(["foo"]));

    other.intersect_with(&HashSet::<&str>::new());
    assert!(other.is_empty());
}

#[rstest]
fn test_subtract_with(mut words: HashSet<&'static str>) {
    let mut other = HashSet::<_>::from(["foo", "boo"]);

    words.subtract_with(&other);
    assert_eq!(words, HashSet::<_>::from(["bar", "baz"]));

    other.subtract_with(&HashSet::<_>::from(["foo", "bar", "baz"]));
    assert_eq!(other, HashSet::<_>::from(["boo"]), "Subtraction shouldn't be commutative.");

    other.subtract_with(&HashSet::<_>::from(["missing"]));
    assert_eq!(other.len(), 1, "Absent elements should be skipped rather than fail.");
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_cap_and_hasher(10, IdentityHasherBuilder);
    set.insert(PinnedHash::new(0, "zero"));
    set.insert(PinnedHash::new(0, "one"));
    set.insert(PinnedHash::new(2, "two"));
    set.insert(PinnedHash::new(0, "three"));
    set.insert(PinnedHash::new(2, "four"));
    set.insert(PinnedHash::new(1, "five"));
    assert_eq!(set.cap(), 10, "Six elements should fit in ten buckets without growing.");

    assert!(set.remove(&PinnedHash::new(0, "zero")).is_ok());
    assert!(set.remove(&PinnedHash::new(2, "two")).is_ok());

    for (hash, value) in [(0, "one"), (0, "three"), (2, "four"), (1, "five")] {
        assert!(
            set.contains(&PinnedHash::new(hash, value)),
            "Removal shouldn't lose colliding elements, but {value} went missing."
        );
    }
    assert_eq!(set.len(), 4);
}

#[test]
fn test_removal_repairs_later_chains() {
    // "c" is displaced past "b", which sits in its own ideal bucket.
    let mut set = HashSet::with_cap_and_hasher(5, IdentityHasherBuilder);
    set.insert(PinnedHash::new(0, "a"));
    set.insert(PinnedHash::new(1, "b"));
    set.insert(PinnedHash::new(0, "c"));

    assert!(set.remove(&PinnedHash::new(0, "a")).is_ok());
    assert!(
        set.contains(&PinnedHash::new(0, "c")),
        "An element displaced beyond an ideally placed one should still be found."
    );
    assert!(set.contains(&PinnedHash::new(1, "b")));
}

#[test]
fn test_collisions_wrap() {
    let mut set = HashSet::with_cap_and_hasher(5, IdentityHasherBuilder);
    set.insert(PinnedHash::new(4, "zero"));
    set.insert(PinnedHash::new(4, "one"));
    set.insert(PinnedHash::new(4, "two"));

    assert!(set.remove(&PinnedHash::new(4, "zero")).is_ok());

    let mut remaining: Vec<_> = set.iter().map(|i| *i.value()).collect();
    remaining.sort_unstable();
    assert_eq!(remaining, ["one", "two"], "Hash collisions should be handled in a wrapping manner.");
    assert!(set.contains(&PinnedHash::new(4, "two")));
}

#[test]
fn test_retain_with_collisions() {
    let mut set = HashSet::with_cap_and_hasher(10, IdentityHasherBuilder);
    for (i, value) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
        set.insert(PinnedHash::new(i as u64 % 2, value));
    }

    set.retain(|item| !matches!(*item.value(), "a" | "d"));
    assert_eq!(set.len(), 4);
    for (hash, value) in [(1, "b"), (0, "c"), (0, "e"), (1, "f")] {
        assert!(set.contains(&PinnedHash::new(hash, value)), "{value} should have been kept.");
    }
}

#[test]
fn test_growth() {
    let mut set = HashSet::<usize>::new();
    for i in 0..1000 {
        set.insert(i);
    }
    assert_eq!(set.len(), 1000);
    assert!(set.cap() * 4 / 5 >= set.len(), "The load factor should never be exceeded.");
    assert!((0..1000).all(|i| set.contains(&i)));

    for i in (0..1000).step_by(2) {
        assert_eq!(set.remove(&i), Ok(i));
    }
    assert_eq!(set.len(), 500);
    assert!((0..1000).all(|i| set.contains(&i) == (i % 2 == 1)));
}

#[test]
fn test_reserve() {
    let mut set = HashSet::<u32>::new();
    set.reserve(100);
    let cap = set.cap();
    assert!(cap >= 100);

    for i in 0..100 {
        set.insert(i);
    }
    assert_eq!(set.cap(), cap, "Reserved capacity should be enough to avoid growing.");
}

#[test]
fn test_get_borrowed() {
    let set: HashSet<String> = ["alpha", "beta"].into_iter().map(String::from).collect();
    assert_eq!(set.get("alpha").map(String::as_str), Some("alpha"));
    assert_eq!(set.get("gamma"), None);
}

#[test]
fn test_fmt() {
    let set = HashSet::<_>::from([7]);
    assert_eq!(set.to_string(), "#{7}");
    assert!(format!("{set:?}").starts_with("HashSet { contents: {7}, len: 1, cap: "));

    let set = HashSet::<_>::from([1, 2]);
    let shown = set.to_string();
    assert!(shown == "#{1, 2}" || shown == "#{2, 1}", "Unexpected display output: {shown}");

    assert_eq!(HashSet::<u8>::new().to_string(), "#{}");
}
