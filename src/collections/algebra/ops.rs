use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use super::{intersect, subtract, union};
use crate::collections::set::HashSet;

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher, C: BuildHasher> BitOrAssign<HashSet<T, C>> for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: HashSet<T, C>) {
        self.reserve(rhs.len());
        self.insert_all(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersect(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher, C: BuildHasher> BitAndAssign<&HashSet<T, C>> for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: &HashSet<T, C>) {
        self.intersect_with(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher, C: BuildHasher> SubAssign<&HashSet<T, C>> for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: &HashSet<T, C>) {
        self.subtract_with(rhs)
    }
}
