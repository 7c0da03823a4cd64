use crate::collections::traits::Set;

/// Returns a new set holding every item of `a` followed by every item of `b`. (`a ∪ b`)
///
/// Neither operand is modified.
pub fn union<T, S>(a: &S, b: &S) -> S
where
    T: Clone,
    S: Set<T> + FromIterator<T>,
{
    a.union(b).cloned().collect()
}

/// Returns a new set holding the items of `a` which are also in `b`. (`a ∩ b`)
///
/// Only `a` is iterated; `b` is only queried for membership. Neither operand is modified.
pub fn intersect<T, S>(a: &S, b: &S) -> S
where
    T: Clone,
    S: Set<T> + FromIterator<T>,
{
    a.intersection(b).cloned().collect()
}

/// Returns a new set holding the items of `a` which aren't in `b`. (`a \ b`)
///
/// Unlike [`union`] and [`intersect`], the result depends on the order of the operands. Neither
/// operand is modified.
pub fn subtract<T, S>(a: &S, b: &S) -> S
where
    T: Clone,
    S: Set<T> + FromIterator<T>,
{
    a.difference(b).cloned().collect()
}
