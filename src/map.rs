//! Separate-chaining hash map over chunked storage.

use std::fmt;
use std::hash::Hash;
use std::ops;

use crate::codec::{Doubling, GrowthPolicy};
use crate::config::MapConfig;
use crate::error::{ChunkError, Result};
use crate::hash;
use crate::iter::{Entries, Keys, Values};
use crate::table::Table;

/// Hash map whose bucket and entry arrays are both [`ChunkedArray`]s.
///
/// Growth doubles the bucket count and re-buckets entries in place, so no
/// entry is ever copied into new memory. Removed entries' slots are recycled
/// by later insertions.
///
/// [`ChunkedArray`]: crate::ChunkedArray
pub struct ChunkedMap<K, V, P = Doubling> {
    table: Table<K, V, P>,
}

// ---------------------------------------------------------------------------
// Construction & accessors (no trait bounds on K/V)
// ---------------------------------------------------------------------------

impl<K, V> ChunkedMap<K, V> {
    /// Creates an empty map with `initial_capacity` buckets, holding at most
    /// `max_size` entries.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if either parameter is zero.
    pub fn new(initial_capacity: usize, max_size: usize) -> Result<Self> {
        Self::with_config(MapConfig::new(initial_capacity, max_size))
    }
}

impl<K, V, P: GrowthPolicy> ChunkedMap<K, V, P> {
    /// Creates an empty map from a full config.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if the config or the growth
    /// policy rejects the parameters.
    pub fn with_config(config: MapConfig) -> Result<Self> {
        Ok(Self {
            table: Table::new(&config)?,
        })
    }

    /// Drops every entry. The bucket count and allocated chunks are kept.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K, V, P> ChunkedMap<K, V, P> {
    /// Returns the number of key-value pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.table.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Current number of buckets.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.table.capacity
    }

    /// Declared maximum number of entries.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.table.entries.max_size()
    }

    /// Backing blocks allocated by the bucket and entry arrays.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.table.buckets.block_count() + self.table.entries.block_count()
    }

    /// Returns an iterator over `(&K, &V)` pairs in entry position order.
    #[must_use]
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries::new(self.table.entries.iter())
    }

    /// Returns an iterator over the keys.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Keyed operations (K: Hash + Eq)
// ---------------------------------------------------------------------------

impl<K: Hash + Eq, V, P: GrowthPolicy> ChunkedMap<K, V, P> {
    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns `None` if the key was new, or `Some(old_value)` if an existing
    /// value was replaced.
    ///
    /// # Errors
    ///
    /// [`ChunkError::CapacityExceeded`] if the key is new and the map already
    /// holds `max_size` entries.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let hash = hash::hash_one(&key);
        self.table.insert(hash, key, value)
    }

    /// Returns a reference to the value associated with `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        intact(self.table.value(hash::hash_one(key), key))
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        intact(self.table.value_mut(hash::hash_one(key), key))
    }

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    ///
    /// [`ChunkError::KeyNotFound`] if the key is absent.
    pub fn lookup(&self, key: &K) -> Result<&V> {
        self.table
            .value(hash::hash_one(key), key)?
            .ok_or(ChunkError::KeyNotFound)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map and returns its value.
    ///
    /// # Errors
    ///
    /// [`ChunkError::KeyNotFound`] if the map is empty or the key is absent.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let hash = hash::hash_one(key);
        self.table.remove(hash, key)
    }
}

/// Result of a chain walk on a read path. Chains only link live entries, so
/// a failed walk means the table is corrupt.
fn intact<T>(walk: Result<Option<T>>) -> Option<T> {
    debug_assert!(walk.is_ok(), "collision chain links a vacant entry");
    walk.ok().flatten()
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V, P> fmt::Debug for ChunkedMap<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedMap")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("max_size", &self.max_size())
            .finish_non_exhaustive()
    }
}

impl<K: Hash + Eq, V, P: GrowthPolicy> ops::Index<&K> for ChunkedMap<K, V, P> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V, P> IntoIterator for &'a ChunkedMap<K, V, P> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Entries<'a, K, V> {
        self.iter()
    }
}
