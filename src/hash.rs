//! Key hashing and bucket selection.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Bucket of `hash` in a table of `capacity` buckets.
///
/// The sign bit is masked off first so the modulo treats the hash as a
/// non-negative integer.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn bucket_index(hash: u64, capacity: usize) -> usize {
    ((hash & (u64::MAX >> 1)) % capacity as u64) as usize
}
