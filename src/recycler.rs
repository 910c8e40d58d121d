//! Free-slot recycler: positions released by removals, handed back to
//! insertions before storage is extended.

use crate::error::Result;
use crate::index::ChunkedIndex;
use crate::queue::ChunkedQueue;
use crate::stack::ChunkedStack;

/// Largest chunk used for a free list.
const FREE_LIST_BLOCK: usize = 2048;

/// Order in which released slots are reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Recycle {
    /// Most recently released slot first. Keeps reuse cache-local.
    #[default]
    Lifo,
    /// Oldest released slot first.
    Fifo,
}

/// Record of released positions, owned by a single container.
pub enum Recycler {
    Lifo(ChunkedStack<ChunkedIndex>),
    Fifo(ChunkedQueue<ChunkedIndex>),
}

impl Recycler {
    /// Creates an empty recycler able to hold `max_size` positions.
    pub fn new(discipline: Recycle, max_size: usize) -> Result<Self> {
        let block_size = max_size
            .checked_next_power_of_two()
            .map_or(FREE_LIST_BLOCK, |b| b.min(FREE_LIST_BLOCK));
        Ok(match discipline {
            Recycle::Lifo => Self::Lifo(ChunkedStack::new(max_size, block_size)?),
            Recycle::Fifo => Self::Fifo(ChunkedQueue::new(max_size, block_size)?),
        })
    }

    pub const fn len(&self) -> usize {
        match self {
            Self::Lifo(stack) => stack.len(),
            Self::Fifo(queue) => queue.len(),
        }
    }

    pub fn chunk_count(&self) -> usize {
        match self {
            Self::Lifo(stack) => stack.chunk_count(),
            Self::Fifo(queue) => queue.chunk_count(),
        }
    }

    /// Records `position` as reusable.
    pub fn push(&mut self, position: ChunkedIndex) -> Result<()> {
        match self {
            Self::Lifo(stack) => stack.push(position),
            Self::Fifo(queue) => queue.enqueue(position),
        }
    }

    /// Takes the next reusable position, if any.
    pub fn pop(&mut self) -> Option<ChunkedIndex> {
        match self {
            Self::Lifo(stack) => stack.pop().ok(),
            Self::Fifo(queue) => queue.dequeue().ok(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Lifo(stack) => stack.clear(),
            Self::Fifo(queue) => queue.clear(),
        }
    }
}
