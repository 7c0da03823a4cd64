#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// A value that always hashes to `hash`, regardless of `value`. Equality only considers `value`,
/// so two equal values must be created with the same hash.
#[derive(Debug, Clone)]
pub struct PinnedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> PinnedHash<T> {
    pub const fn new(hash: u64, value: T) -> PinnedHash<T> {
        PinnedHash {
            hash,
            value,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Eq> Hash for PinnedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for PinnedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for PinnedHash<T> {}

/// A hasher that reports the last `u64` written to it, so that a [`PinnedHash`] lands exactly on
/// `hash % cap`.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
