/// The capabilities shared by every collection in this crate: counting, borrowed iteration and
/// filtering into a new collection of the same type.
pub trait Collection<T>: Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all items in the collection, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns a new collection holding exactly the items for which `predicate` returns true.
    /// `self` is left unchanged.
    fn filter<F: FnMut(&T) -> bool>(&self, predicate: F) -> Self;

    /// Returns a new collection holding exactly the items for which `predicate` returns false.
    /// `self` is left unchanged.
    fn filter_not<F: FnMut(&T) -> bool>(&self, predicate: F) -> Self;
}
