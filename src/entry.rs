//! Hash map entry stored in the entry array.

use safe_bump::Idx;

/// Link to an entry: its absolute position in the entry array.
pub type Link<K, V> = Idx<Entry<K, V>>;

/// Key-value pair with its precomputed hash and the next entry of its
/// collision chain.
pub struct Entry<K, V> {
    /// Precomputed 64-bit hash of the key.
    pub hash: u64,
    /// Next entry in the same bucket, `None` at the chain's tail.
    pub next: Option<Link<K, V>>,
    /// The key.
    pub key: K,
    /// The value.
    pub value: V,
}

/// Converts an array position into a chain link.
#[inline]
#[must_use]
pub const fn link<K, V>(position: usize) -> Link<K, V> {
    Idx::from_raw(position)
}

/// Array position of a chain link.
#[inline]
#[must_use]
pub const fn position<K, V>(link: Link<K, V>) -> usize {
    link.into_raw()
}
