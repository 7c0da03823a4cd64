use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice::Iter as BucketIter;
use std::vec::IntoIter as BucketIntoIter;

use super::HashSet;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.table.len,
            inner: self.table.buckets.into_vec().into_iter(),
        }
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T` in no particular
/// order.
pub struct IntoIter<T> {
    pub(crate) inner: BucketIntoIter<Option<T>>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.by_ref().flatten().next();
        if next.is_some() {
            self.len -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.table.len,
            inner: self.table.buckets.iter(),
        }
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T` in no particular
/// order.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: BucketIter<'a, Option<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.by_ref().flatten().next();
        if next.is_some() {
            self.len -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
