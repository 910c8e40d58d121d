//! Chunked growable array with stable positions.

use std::fmt;
use std::mem;
use std::ops;

use crate::chunks::Chunks;
use crate::codec::{Doubling, GrowthPolicy};
use crate::config::ArrayConfig;
use crate::error::{ChunkError, Result};
use crate::index::ChunkedIndex;
use crate::iter::Iter;
use crate::recycler::Recycler;

/// Indexed container over independently allocated chunks.
///
/// `insert` returns the element's position, which stays valid until that
/// element is removed. Removal never shifts other elements: the slot is
/// emptied and recorded for reuse by a later insertion. Growth allocates the
/// next chunk chosen by the policy `P` and never copies stored elements.
pub struct ChunkedArray<T, P = Doubling> {
    policy: P,
    chunks: Chunks<T>,
    free: Recycler,
    len: usize,
    high_water: usize,
    max_size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<T, P: GrowthPolicy> ChunkedArray<T, P> {
    /// Creates an empty array holding at most `max_size` elements, with a
    /// first chunk of `block_size` slots.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if the parameters are rejected by
    /// the config or by the growth policy.
    pub fn new(max_size: usize, block_size: usize) -> Result<Self> {
        Self::with_config(ArrayConfig::new(max_size, block_size))
    }

    /// Creates an empty array from a full config.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if the parameters are rejected by
    /// the config or by the growth policy.
    pub fn with_config(config: ArrayConfig) -> Result<Self> {
        config.validate()?;
        let policy = P::new(config.block_size)?;
        let max_chunks = policy.chunks_for(config.max_size);
        Ok(Self {
            policy,
            chunks: Chunks::new(max_chunks, config.max_size),
            free: Recycler::new(config.recycle, config.max_size)?,
            len: 0,
            high_water: 0,
            max_size: config.max_size,
        })
    }
}

impl<T, P> ChunkedArray<T, P> {
    /// Number of live elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no live elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots allocated across all chunks.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.chunks.capacity()
    }

    /// One past the highest position written since creation or the last
    /// [`clear`](Self::clear).
    #[must_use]
    pub const fn high_water(&self) -> usize {
        self.high_water
    }

    /// Declared maximum number of elements.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of released slots waiting for reuse.
    #[must_use]
    pub const fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Number of data chunks allocated so far.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Data chunks plus free-list chunks allocated so far.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.chunks.len() + self.free.chunk_count()
    }

    /// The growth policy, which also exposes the index codec.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Drops every element and forgets released slots.
    ///
    /// Allocated chunks are kept, so the next fill cycle allocates nothing
    /// until it passes the capacity already reached.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing chunked array: {} live, {} slots allocated",
            self.len,
            self.chunks.capacity()
        );
        self.chunks.clear();
        self.free.clear();
        self.len = 0;
        self.high_water = 0;
    }

    /// Iterates over live elements in ascending position order.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chunks, 0, self.high_water, self.len)
    }
}

// ---------------------------------------------------------------------------
// Positional operations
// ---------------------------------------------------------------------------

impl<T, P: GrowthPolicy> ChunkedArray<T, P> {
    /// Stores `value` and returns its position.
    ///
    /// A released slot is reused first; otherwise the value is written at the
    /// high-water mark, allocating the next chunk if storage is full.
    ///
    /// # Errors
    ///
    /// [`ChunkError::CapacityExceeded`] if no slot is free and `max_size`
    /// positions are already in use.
    pub fn insert(&mut self, value: T) -> Result<ChunkedIndex> {
        if let Some(position) = self.free.pop() {
            *self.chunks.slot_mut(position.chunk(), position.offset()) = Some(value);
            self.len += 1;
            return Ok(position);
        }
        if self.high_water == self.max_size {
            return Err(ChunkError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        let position = self.policy.encode(self.high_water);
        while position.chunk() >= self.chunks.len() {
            self.grow()?;
        }
        *self.chunks.slot_mut(position.chunk(), position.offset()) = Some(value);
        self.len += 1;
        self.high_water += 1;
        Ok(position)
    }

    /// Returns `true` if `index` holds a live element.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_ok()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ChunkError::IndexOutOfRange`] if `index` holds no live element.
    pub fn get(&self, index: usize) -> Result<&T> {
        let position = self.locate(index)?;
        self.chunks
            .slot(position.chunk(), position.offset())
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ChunkError::IndexOutOfRange`] if `index` holds no live element.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let position = self.locate(index)?;
        let error = self.out_of_range(index);
        self.chunks
            .slot_mut(position.chunk(), position.offset())
            .as_mut()
            .ok_or(error)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`ChunkError::IndexOutOfRange`] if `index` holds no live element.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Writes `value` into `count` consecutive positions starting at `start`.
    ///
    /// Every position is checked before anything is written.
    ///
    /// # Errors
    ///
    /// [`ChunkError::IndexOutOfRange`] if any position in the range holds no
    /// live element.
    pub fn set_range(&mut self, start: usize, count: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        let end = start
            .checked_add(count)
            .ok_or_else(|| self.out_of_range(usize::MAX))?;
        if let Some(missing) = (start..end).find(|&i| !self.contains(i)) {
            return Err(self.out_of_range(missing));
        }
        for index in start..end {
            *self.get_mut(index)? = value.clone();
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// The slot is emptied and recorded for reuse; no other element moves.
    ///
    /// # Errors
    ///
    /// [`ChunkError::EmptyContainer`] if the array is empty, otherwise
    /// [`ChunkError::IndexOutOfRange`] if `index` holds no live element.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.len == 0 {
            return Err(ChunkError::EmptyContainer);
        }
        let position = self.locate(index)?;
        let (chunk, offset) = (position.chunk(), position.offset());
        if self.chunks.slot(chunk, offset).is_none() {
            return Err(self.out_of_range(index));
        }
        self.free.push(position)?;
        self.len -= 1;
        self.chunks
            .slot_mut(chunk, offset)
            .take()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Decodes `index` if it lies below the high-water mark.
    fn locate(&self, index: usize) -> Result<ChunkedIndex> {
        if index >= self.high_water {
            return Err(self.out_of_range(index));
        }
        Ok(self.policy.encode(index))
    }

    const fn out_of_range(&self, index: usize) -> ChunkError {
        ChunkError::IndexOutOfRange {
            index,
            bound: self.high_water,
        }
    }

    /// Allocates the next chunk, truncated so storage ends at `max_size`.
    fn grow(&mut self) -> Result<()> {
        let chunk = self.chunks.len();
        let room = self.max_size.saturating_sub(self.policy.chunk_start(chunk));
        let len = self.policy.chunk_len(chunk).min(room);
        self.chunks.push_chunk(len)
    }
}

impl<T: Clone, P> ChunkedArray<T, P> {
    /// Overwrites every live element with `value`.
    pub fn fill(&mut self, value: T) {
        let mut remaining = self.len;
        let mut chunk = 0;
        while remaining > 0 && chunk < self.chunks.len() {
            for offset in 0..self.chunks.chunk_len(chunk) {
                let slot = self.chunks.slot_mut(chunk, offset);
                if slot.is_some() {
                    *slot = Some(value.clone());
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
            chunk += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, P> fmt::Debug for ChunkedArray<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedArray")
            .field("len", &self.len)
            .field("high_water", &self.high_water)
            .field("capacity", &self.chunks.capacity())
            .field("chunks", &self.chunks.len())
            .finish_non_exhaustive()
    }
}

impl<T, P: GrowthPolicy> ops::Index<usize> for ChunkedArray<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of range")
    }
}

impl<T, P: GrowthPolicy> ops::IndexMut<usize> for ChunkedArray<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of range")
    }
}

impl<'a, T, P> IntoIterator for &'a ChunkedArray<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
