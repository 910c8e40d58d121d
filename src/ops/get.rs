//! Lookup: walks a bucket's collision chain.

use crate::codec::GrowthPolicy;
use crate::entry::Link;
use crate::error::Result;
use crate::hash;
use crate::table::Table;

/// Where a chain walk for a key stopped.
pub struct Located<K, V> {
    /// Bucket whose chain was walked.
    pub bucket: usize,
    /// Entry before `link`. On a miss this is the chain's tail, `None` if
    /// the chain is empty.
    pub prev: Option<Link<K, V>>,
    /// The entry holding the key, `None` on a miss.
    pub link: Option<Link<K, V>>,
}

impl<K: Eq, V, P: GrowthPolicy> Table<K, V, P> {
    /// Walks the chain of `hash` looking for `key`.
    ///
    /// Fails only if the chain links a vacant entry.
    pub fn locate(&self, hash: u64, key: &K) -> Result<Located<K, V>> {
        let bucket = hash::bucket_index(hash, self.capacity);
        let mut prev = None;
        let mut cursor = if self.entries.is_empty() {
            None
        } else {
            self.head(bucket)?
        };
        while let Some(link) = cursor {
            let entry = self.entry(link)?;
            if entry.hash == hash && entry.key == *key {
                break;
            }
            prev = Some(link);
            cursor = entry.next;
        }
        Ok(Located {
            bucket,
            prev,
            link: cursor,
        })
    }

    /// Returns the entry link for `key`, if present.
    pub fn find(&self, hash: u64, key: &K) -> Result<Option<Link<K, V>>> {
        Ok(self.locate(hash, key)?.link)
    }

    /// Returns the value stored under `key`, if present.
    pub fn value(&self, hash: u64, key: &K) -> Result<Option<&V>> {
        let Some(link) = self.find(hash, key)? else {
            return Ok(None);
        };
        Ok(Some(&self.entry(link)?.value))
    }

    /// Returns the value stored under `key` for writing, if present.
    pub fn value_mut(&mut self, hash: u64, key: &K) -> Result<Option<&mut V>> {
        let Some(link) = self.find(hash, key)? else {
            return Ok(None);
        };
        Ok(Some(&mut self.entry_mut(link)?.value))
    }
}
