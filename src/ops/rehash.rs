//! Growth: doubles the bucket count and re-buckets entries in place.
//!
//! No entry moves in the entry array; only chain links and bucket heads are
//! rewritten. With `h mod 2c ∈ {h mod c, h mod c + c}`, an entry either stays
//! in its bucket or moves to a bucket in the new upper half, which is never
//! walked, so each entry is visited exactly once.

use crate::codec::GrowthPolicy;
use crate::error::{ChunkError, Result};
use crate::hash;
use crate::table::Table;

impl<K, V, P: GrowthPolicy> Table<K, V, P> {
    /// Doubles the bucket count and re-buckets every entry.
    pub fn grow(&mut self) -> Result<()> {
        let old = self.capacity;
        let new = old
            .checked_mul(2)
            .filter(|&new| new <= self.buckets.max_size())
            .ok_or_else(|| ChunkError::CapacityExceeded {
                max_size: self.entries.max_size(),
            })?;

        for _ in old..new {
            self.buckets.insert(None)?;
        }
        self.capacity = new;

        for bucket in (0..old).rev() {
            let mut prev = None;
            let mut cursor = self.head(bucket)?;
            while let Some(link) = cursor {
                // Capture the successor before the entry is re-linked.
                let (entry_hash, next) = {
                    let entry = self.entry(link)?;
                    (entry.hash, entry.next)
                };
                let target = hash::bucket_index(entry_hash, new);
                if target == bucket {
                    prev = Some(link);
                } else {
                    self.relink(bucket, prev, next)?;
                    let head = self.head(target)?;
                    self.entry_mut(link)?.next = head;
                    self.set_head(target, Some(link))?;
                }
                cursor = next;
            }
        }

        log::debug!(
            "grew hash table from {old} to {new} buckets ({} entries)",
            self.entries.len()
        );
        Ok(())
    }
}
