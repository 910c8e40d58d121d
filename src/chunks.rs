//! Chunk-block storage shared by every container.
//!
//! A chunk is a boxed slice allocated once and never resized or moved. The
//! chunk table is reserved for the maximum number of chunks up front, so
//! growing only ever allocates the new chunk itself.

use std::collections::VecDeque;
use std::iter;

use crate::error::{ChunkError, Result};

/// Append-only sequence of fixed-size slot blocks.
///
/// An empty slot (`None`) is the zero value: removed and cleared slots hold no
/// reference to their former element.
pub struct Chunks<T> {
    blocks: VecDeque<Box<[Option<T>]>>,
    capacity: usize,
    chunk_limit: usize,
    max_size: usize,
}

impl<T> Chunks<T> {
    /// Creates an empty chunk table able to hold `chunk_limit` chunks.
    ///
    /// `max_size` is only reported back in [`ChunkError::CapacityExceeded`].
    pub fn new(chunk_limit: usize, max_size: usize) -> Self {
        Self {
            blocks: VecDeque::with_capacity(chunk_limit),
            capacity: 0,
            chunk_limit,
            max_size,
        }
    }

    /// Number of allocated chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Total slots across all allocated chunks.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots in chunk `chunk`.
    #[inline]
    pub fn chunk_len(&self, chunk: usize) -> usize {
        self.blocks[chunk].len()
    }

    /// Allocates one more chunk of `len` empty slots.
    pub fn push_chunk(&mut self, len: usize) -> Result<()> {
        if self.blocks.len() == self.chunk_limit {
            return Err(ChunkError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        let block: Box<[Option<T>]> = iter::repeat_with(|| None).take(len).collect();
        log::trace!("allocated chunk {} with {len} slots", self.blocks.len());
        self.blocks.push_back(block);
        self.capacity += len;
        Ok(())
    }

    /// The element in a slot, `None` if the slot is empty.
    #[inline]
    pub fn slot(&self, chunk: usize, offset: usize) -> Option<&T> {
        self.blocks[chunk][offset].as_ref()
    }

    #[inline]
    pub fn slot_mut(&mut self, chunk: usize, offset: usize) -> &mut Option<T> {
        &mut self.blocks[chunk][offset]
    }

    /// Empties every slot of every chunk. Chunks stay allocated.
    pub fn clear(&mut self) {
        for block in &mut self.blocks {
            block.fill_with(|| None);
        }
    }

    /// Moves the first chunk to the back of the table.
    ///
    /// Only the chunk pointer moves; the slots themselves stay in place.
    pub fn rotate_front(&mut self) {
        if let Some(front) = self.blocks.pop_front() {
            self.blocks.push_back(front);
        }
    }
}
