//! Removal: splices an entry out of its chain and releases its slot.

use crate::codec::GrowthPolicy;
use crate::entry;
use crate::error::{ChunkError, Result};
use crate::table::Table;

impl<K: Eq, V, P: GrowthPolicy> Table<K, V, P> {
    /// Removes `key` and returns its value.
    pub fn remove(&mut self, hash: u64, key: &K) -> Result<V> {
        if self.entries.is_empty() {
            return Err(ChunkError::KeyNotFound);
        }
        let found = self.locate(hash, key)?;
        let link = found.link.ok_or(ChunkError::KeyNotFound)?;
        let next = self.entry(link)?.next;
        self.relink(found.bucket, found.prev, next)?;
        let removed = self.entries.remove_at(entry::position(link))?;
        Ok(removed.value)
    }
}
