use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{ElementNotFound, Iter, NotImplemented};
use super::table::Table;
use crate::collections::traits::{Collection, Set};
use crate::util::fmt::DebugSet;

/// A mutable set of unique values which relies on the values implementing [`Hash`] and [`Eq`].
///
/// No two elements of a HashSet are ever equal. Inserting a value that is already present is a
/// no-op, and iteration happens in no particular order, which may change after any mutation.
///
/// The set algebra comes in two forms. The methods [`union_with`](HashSet::union_with),
/// [`intersect_with`](HashSet::intersect_with) and [`subtract_with`](HashSet::subtract_with)
/// mutate the receiver in place, while the free functions in
/// [`algebra`](crate::collections::algebra) leave both operands untouched and return a new set.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set. HashSet isn't designed for concurrent mutation, it needs external
/// locking to be shared between writers.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the HashSet.
/// - `m`: The number of elements in the other operand.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `union_with` | `O(m)`* |
/// | `intersect_with` | `O(n)`* |
/// | `subtract_with` | `O(m)`* |
///
/// \* Hash collisions add a probing cost. If the set needs to grow, `insert` takes `O(n)`.
#[derive(Clone)]
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) table: Table<T, B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new, empty HashSet with capacity 0. Memory is allocated on the first insertion.
    pub fn new() -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(0, B::default())
    }

    /// Creates a new HashSet with `cap` buckets, using the default hasher.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(0, hasher)
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            table: Table::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.table.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets currently allocated. Not every bucket can be filled before
    /// the set grows.
    pub fn cap(&self) -> usize {
        self.table.cap()
    }

    pub const fn hasher(&self) -> &B {
        &self.table.hasher
    }

    /// Adds `item` to the set if no equal element is present. Returns true if the set changed.
    pub fn insert(&mut self, item: T) -> bool {
        self.table.insert(item)
    }

    /// Inserts every item in order. Duplicates, within `items` or with the existing elements, are
    /// absorbed.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes and returns the element equal to `item`.
    ///
    /// # Errors
    /// Returns [`ElementNotFound`] if the set has no such element.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, ElementNotFound>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(item).ok_or(ElementNotFound)
    }

    /// Returns a reference to the element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains(item)
    }

    /// Removes every element. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Ensures that `extra` more elements can be inserted without growing.
    pub fn reserve(&mut self, extra: usize) {
        self.table.reserve(extra)
    }

    /// Keeps only the elements for which `keep` returns true. All elements are judged before any
    /// of them is removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.table.retain(keep)
    }

    /// Returns an iterator over all elements in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the elements as references in ascending order. The set itself isn't reordered.
    pub fn sorted(&self) -> Vec<&T>
    where
        T: Ord,
    {
        let mut items: Vec<&T> = self.iter().collect();
        items.sort_unstable();
        items
    }

    /// Folding a set isn't supported.
    ///
    /// # Errors
    /// Always returns [`NotImplemented`].
    pub fn fold_left<U, F: FnMut(U, &T) -> U>(&self, _initial: U, _f: F) -> Result<U, NotImplemented> {
        Err(NotImplemented { operation: "fold_left" })
    }

    /// Folding a set isn't supported.
    ///
    /// # Errors
    /// Always returns [`NotImplemented`].
    pub fn fold_right<U, F: FnMut(&T, U) -> U>(&self, _initial: U, _f: F) -> Result<U, NotImplemented> {
        Err(NotImplemented { operation: "fold_right" })
    }

    /// Adds every element of `other` to `self`. (`self ← self ∪ other`)
    ///
    /// Unioning two sets into each other in either order leaves both holding the same elements.
    pub fn union_with<C: BuildHasher>(&mut self, other: &HashSet<T, C>)
    where
        T: Clone,
    {
        self.reserve(other.len());
        for item in other {
            self.insert(item.clone());
        }
    }

    /// Removes every element of `self` that isn't also in `other`. (`self ← self ∩ other`)
    pub fn intersect_with<C: BuildHasher>(&mut self, other: &HashSet<T, C>) {
        self.retain(|item| other.contains(item))
    }

    /// Removes every element of `other` from `self`. (`self ← self \ other`)
    ///
    /// Unlike [`remove`](HashSet::remove), elements of `other` that `self` doesn't contain are
    /// skipped.
    pub fn subtract_with<C: BuildHasher>(&mut self, other: &HashSet<T, C>) {
        for item in other {
            if self.contains(item) {
                self.table.remove(item);
            }
        }
    }

    /// Returns true if both sets contain exactly the same elements, regardless of order. Neither
    /// set is modified.
    pub fn equals<C: BuildHasher>(&self, other: &HashSet<T, C>) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }

    pub(crate) fn filter_internal<F>(&self, mut predicate: F, keep: bool) -> HashSet<T, B>
    where
        T: Clone,
        B: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut set = HashSet::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if predicate(item) == keep {
                set.insert(item.clone());
            }
        }
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Collection<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }

    fn filter<F: FnMut(&T) -> bool>(&self, predicate: F) -> Self {
        self.filter_internal(predicate, true)
    }

    fn filter_not<F: FnMut(&T) -> bool>(&self, predicate: F) -> Self {
        self.filter_internal(predicate, false)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Set<T> for HashSet<T, B> {
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::new();
        set.reserve(iter.size_hint().0);
        set.insert_all(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for HashSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter)
    }
}

impl<T: Hash + Eq, B: BuildHasher, C: BuildHasher> PartialEq<HashSet<T, C>> for HashSet<T, B> {
    fn eq(&self, other: &HashSet<T, C>) -> bool {
        self.equals(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugSet(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
