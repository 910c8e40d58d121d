//! LIFO stack over fixed-size chunks.

use std::fmt;

use crate::chunks::Chunks;
use crate::codec::{GrowthPolicy, Incremental};
use crate::error::{ChunkError, Result};
use crate::iter::Iter;

/// A stack that grows one chunk at a time without moving stored elements.
///
/// The head is tracked as a running `(chunk, offset)` pair, so `push` and
/// `pop` need neither a division nor a shift.
pub struct ChunkedStack<T> {
    chunks: Chunks<T>,
    block_size: usize,
    head_chunk: usize,
    head_offset: usize,
    len: usize,
    max_size: usize,
}

impl<T> ChunkedStack<T> {
    /// Creates an empty stack holding at most `max_size` elements in chunks
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
        Ok(Self {
            chunks: Chunks::new(policy.chunks_for(max_size), max_size),
            block_size: policy.block_size(),
            head_chunk: 0,
            head_offset: 0,
            len: 0,
            max_size,
        })
    }

    /// Number of elements on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
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

    /// Pushes `value` on top of the stack.
    ///
    /// # Errors
    ///
    /// [`ChunkError::CapacityExceeded`] if the stack already holds
    /// `max_size` elements.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.max_size {
            return Err(ChunkError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        if self.head_offset == self.block_size {
            self.head_chunk += 1;
            self.head_offset = 0;
        }
        if self.head_chunk == self.chunks.len() {
            self.chunks.push_chunk(self.block_size)?;
        }
        *self.chunks.slot_mut(self.head_chunk, self.head_offset) = Some(value);
        self.head_offset += 1;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// [`ChunkError::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ChunkError::EmptyContainer);
        }
        if self.head_offset == 0 {
            self.head_chunk -= 1;
            self.head_offset = self.block_size;
        }
        self.head_offset -= 1;
        self.len -= 1;
        self.chunks
            .slot_mut(self.head_chunk, self.head_offset)
            .take()
            .ok_or(ChunkError::EmptyContainer)
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        if self.head_offset == 0 {
            self.chunks.slot(self.head_chunk - 1, self.block_size - 1)
        } else {
            self.chunks.slot(self.head_chunk, self.head_offset - 1)
        }
    }

    /// Drops every element. Allocated chunks are kept for reuse.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.head_chunk = 0;
        self.head_offset = 0;
        self.len = 0;
    }

    /// Iterates from the bottom of the stack to the top.
    ///
    /// The stack must not be mutated while the iterator is alive.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chunks, 0, self.len, self.len)
    }
}

impl<T> fmt::Debug for ChunkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedStack")
            .field("len", &self.len)
            .field("capacity", &self.chunks.capacity())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoIterator for &'a ChunkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
