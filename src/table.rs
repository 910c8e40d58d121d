//! Bucket and entry storage of a chunked hash map.
//!
//! Both arrays are [`ChunkedArray`]s, so the table grows without copying
//! entries. Collision chains are singly linked lists threaded through the
//! entry array by position. Operations live in [`crate::ops`].

use crate::array::ChunkedArray;
use crate::codec::GrowthPolicy;
use crate::config::MapConfig;
use crate::entry::{self, Entry, Link};
use crate::error::Result;

/// Separate-chaining table: bucket heads plus the entry arena.
pub struct Table<K, V, P> {
    /// Head of each bucket's chain, one slot per bucket.
    pub buckets: ChunkedArray<Option<Link<K, V>>, P>,
    /// Entry arena; positions are chain links.
    pub entries: ChunkedArray<Entry<K, V>, P>,
    /// Current number of buckets.
    pub capacity: usize,
}

impl<K, V, P: GrowthPolicy> Table<K, V, P> {
    /// Creates an empty table with `initial_capacity` empty buckets.
    pub fn new(config: &MapConfig) -> Result<Self> {
        config.validate()?;
        let mut buckets = ChunkedArray::new(config.max_buckets(), config.block_size)?;
        for _ in 0..config.initial_capacity {
            buckets.insert(None)?;
        }
        Ok(Self {
            buckets,
            entries: ChunkedArray::new(config.max_size, config.block_size)?,
            capacity: config.initial_capacity,
        })
    }

    /// Head of the chain rooted at `bucket`.
    #[inline]
    pub fn head(&self, bucket: usize) -> Result<Option<Link<K, V>>> {
        self.buckets.get(bucket).copied()
    }

    #[inline]
    pub fn set_head(&mut self, bucket: usize, head: Option<Link<K, V>>) -> Result<()> {
        self.buckets.set(bucket, head)?;
        Ok(())
    }

    #[inline]
    pub fn entry(&self, link: Link<K, V>) -> Result<&Entry<K, V>> {
        self.entries.get(entry::position(link))
    }

    #[inline]
    pub fn entry_mut(&mut self, link: Link<K, V>) -> Result<&mut Entry<K, V>> {
        self.entries.get_mut(entry::position(link))
    }

    /// Points `prev`'s successor (or the bucket head when `prev` is `None`)
    /// at `next`, splicing out whatever sat between them.
    pub fn relink(
        &mut self,
        bucket: usize,
        prev: Option<Link<K, V>>,
        next: Option<Link<K, V>>,
    ) -> Result<()> {
        match prev {
            Some(prev) => {
                self.entry_mut(prev)?.next = next;
                Ok(())
            }
            None => self.set_head(bucket, next),
        }
    }

    /// Empties every bucket and drops every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
    }
}
