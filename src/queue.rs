//! FIFO queue over fixed-size chunks.

use std::fmt;

use crate::chunks::Chunks;
use crate::codec::{GrowthPolicy, Incremental};
use crate::error::{ChunkError, Result};
use crate::iter::Iter;

/// A first-in first-out queue that never moves stored elements.
///
/// Elements are appended at the tail and removed from the head. Once the head
/// drains the front chunk, that chunk is rotated to the back of the chunk table
/// and reused, so a queue whose length stays bounded stops allocating.
pub struct ChunkedQueue<T> {
    chunks: Chunks<T>,
    policy: Incremental,
    head: usize,
    len: usize,
    max_size: usize,
}

impl<T> ChunkedQueue<T> {
    /// Creates an empty queue holding at most `max_size` elements in chunks
    /// of `block_size` slots.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if `max_size` is zero or
    /// `block_size` is not a power of two.
    pub fn new(max_size: usize, block_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "max size must be at least 1",
            });
        }
        let policy = Incremental::new(block_size)?;
        // A partially drained front chunk can push the tail one chunk further.
        let max_chunks = policy.chunks_for(max_size) + 1;
        Ok(Self {
            chunks: Chunks::new(max_chunks, max_size),
            policy,
            head: 0,
            len: 0,
            max_size,
        })
    }

    /// Number of queued elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots allocated across all chunks.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.chunks.capacity()
    }

    /// Declared maximum number of elements.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of chunks allocated so far.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    ///
    /// [`ChunkError::CapacityExceeded`] if the queue already holds
    /// `max_size` elements.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.len == self.max_size {
            return Err(ChunkError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        let tail = self.policy.encode(self.head + self.len);
        if tail.chunk() == self.chunks.len() {
            self.chunks.push_chunk(self.policy.block_size())?;
        }
        *self.chunks.slot_mut(tail.chunk(), tail.offset()) = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// [`ChunkError::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ChunkError::EmptyContainer);
        }
        let value = self.chunks.slot_mut(0, self.head).take();
        self.head += 1;
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        } else if self.head == self.policy.block_size() {
            self.chunks.rotate_front();
            self.head = 0;
        }
        value.ok_or(ChunkError::EmptyContainer)
    }

    /// Returns the oldest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.chunks.slot(0, self.head)
    }

    /// Drops every element. Allocated chunks are kept for reuse.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.head = 0;
        self.len = 0;
    }

    /// Iterates from the oldest element to the newest.
    ///
    /// The queue must not be mutated while the iterator is alive.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chunks, self.head, self.len, self.len)
    }
}

impl<T> fmt::Debug for ChunkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedQueue")
            .field("len", &self.len)
            .field("capacity", &self.chunks.capacity())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoIterator for &'a ChunkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
