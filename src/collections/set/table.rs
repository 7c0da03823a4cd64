use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::{cmp, iter, mem};

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// The storage behind a [`HashSet`](super::HashSet): an open-addressing table of unique items which
/// resolves hash collisions with linear probing.
///
/// The load factor is fixed at 4/5, so there is always at least one empty bucket once the table has
/// allocated. Probing relies on that to terminate.
#[derive(Clone)]
pub(crate) struct Table<T, B> {
    pub(crate) buckets: Box<[Option<T>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

fn empty_buckets<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

/// Returns true if `index` lies in the cyclic range `(start, end]`.
const fn cyclic_between(start: usize, index: usize, end: usize) -> bool {
    if start <= end {
        start < index && index <= end
    } else {
        start < index || index <= end
    }
}

impl<T, B> Table<T, B> {
    pub(crate) fn with_cap_and_hasher(cap: usize, hasher: B) -> Table<T, B> {
        Table {
            buckets: empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    pub(crate) fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Empties every bucket, keeping the current allocation.
    pub(crate) fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }
}

impl<T: Hash + Eq, B: BuildHasher> Table<T, B> {
    /// Inserts `item` unless an equal item is already present. Returns true if the item was added.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        if self.should_grow() {
            self.grow();
        }

        let Some(index) = self.find_index(&item) else {
            unreachable!("a table which has just grown has a non-zero capacity");
        };

        // The bucket at index is either empty or holds an equal item.
        match &self.buckets[index] {
            Some(_) => false,
            None => {
                self.buckets[index] = Some(item);
                self.len += 1;
                true
            },
        }
    }

    pub(crate) fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(item)?;
        self.buckets[index].as_ref()
    }

    pub(crate) fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Removes and returns the item equal to `item`, if there is one.
    ///
    /// Removal leaves a hole that could cut later probe chains short, so every following item up to
    /// the next empty bucket is shifted back into the hole when its ideal index doesn't lie between
    /// the hole and its current position.
    pub(crate) fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut hole = self.find_index(item)?;
        let removed = self.buckets[hole].take()?;
        self.len -= 1;

        let cap = self.cap();
        let mut probe = (hole + 1) % cap;

        while let Some(next) = &self.buckets[probe] {
            let Some(ideal) = self.ideal_index(next) else { break };

            if !cyclic_between(hole, ideal, probe) {
                self.buckets[hole] = self.buckets[probe].take();
                hole = probe;
            }
            probe = (probe + 1) % cap;
        }

        Some(removed)
    }

    /// Keeps only the items for which `keep` returns true.
    ///
    /// Every item is judged before any bucket is touched. The survivors are then rehashed into a
    /// fresh set of buckets with the same capacity.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let doomed: Box<[bool]> = self.buckets.iter()
            .map(|bucket| matches!(bucket, Some(item) if !keep(item)))
            .collect();

        if !doomed.contains(&true) { return; }

        for (bucket, doomed) in self.buckets.iter_mut().zip(doomed.iter()) {
            if *doomed {
                *bucket = None;
                self.len -= 1;
            }
        }

        self.realloc_with_cap(self.cap());
    }

    /// Increases the capacity so that len + `extra` items fit without exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity can't be allocated.
    pub(crate) fn reserve(&mut self, extra: usize) {
        let wanted = self.len.saturating_add(extra).saturating_mul(LOAD_FACTOR_DENOMINATOR)
            / LOAD_FACTOR_NUMERATOR + 1;

        if wanted <= self.cap() { return; }

        self.realloc_with_cap(wanted);
    }

    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.buckets.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Moves every item into `new_cap` fresh buckets. Shrinking below the point where the current
    /// items would overload the table is ignored.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_cap));

        for item in old_buckets.into_vec().into_iter().flatten() {
            // Items are unique, so this always lands on an empty bucket.
            let Some(index) = self.find_index(&item) else {
                unreachable!("a table holding items has a non-zero capacity");
            };
            self.buckets[index] = Some(item);
        }
    }

    /// The bucket `hashable` would occupy without any collisions, or None if nothing is allocated.
    pub(crate) fn ideal_index<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let hash = self.hasher.hash_one(hashable);
        hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the bucket that is either empty or holds an item equal to `item`, starting from the
    /// ideal index and wrapping at the capacity. Returns None if nothing is allocated.
    pub(crate) fn find_index<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.ideal_index(item)?;

        while let Some(existing) = &self.buckets[index]
            && existing.borrow() != item
        {
            index = (index + 1) % self.cap();
        }

        Some(index)
    }
}
