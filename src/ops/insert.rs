//! Insertion: upsert into a collision chain, growing the table first when
//! it is full.

use std::mem;

use crate::codec::GrowthPolicy;
use crate::entry::{self, Entry};
use crate::error::{ChunkError, Result};
use crate::table::Table;

impl<K: Eq, V, P: GrowthPolicy> Table<K, V, P> {
    /// Inserts or overwrites `key`. Returns the replaced value, if any.
    ///
    /// A new entry is linked after the tail reached by the lookup walk, so
    /// the chain is walked once unless the table grows first.
    pub fn insert(&mut self, hash: u64, key: K, value: V) -> Result<Option<V>> {
        let mut located = self.locate(hash, &key)?;
        if let Some(link) = located.link {
            let entry = self.entry_mut(link)?;
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        if self.entries.len() == self.entries.max_size() {
            return Err(ChunkError::CapacityExceeded {
                max_size: self.entries.max_size(),
            });
        }
        if self.capacity <= self.entries.len() {
            self.grow()?;
            // Growth re-buckets chains; find the new tail.
            located = self.locate(hash, &key)?;
        }

        let position = self.entries.insert(Entry {
            hash,
            next: None,
            key,
            value,
        })?;
        let link = entry::link(position.absolute());
        self.relink(located.bucket, located.prev, Some(link))?;
        Ok(None)
    }
}
