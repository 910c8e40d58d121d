//! Garbage-free chunked containers.
//!
//! Every container stores its elements in a sequence of independently
//! allocated chunks. Growing allocates one more chunk; nothing already stored
//! is ever copied into new memory, and removed slots are recycled before
//! storage is extended. Once a workload has reached its peak size, repeating
//! it allocates nothing.
//!
//! # Containers
//!
//! - [`ChunkedArray`]: indexed array with stable positions, skip-aware
//!   iteration, and three growth policies ([`Incremental`], [`Doubling`],
//!   [`Exponential`]).
//! - [`ChunkedMap`]: separate-chaining hash map whose bucket and entry
//!   arrays are chunked arrays; grows by in-place rehashing.
//! - [`ChunkedStack`]: LIFO stack.
//! - [`ChunkedQueue`]: FIFO queue.
//!
//! All containers are single-owner and bounded by a `max_size` declared at
//! construction; exceeding it fails with [`ChunkError::CapacityExceeded`].
//!
//! # Example
//!
//! ```
//! use chunked_collections::{ChunkedArray, ChunkedMap, Incremental};
//!
//! let mut map = ChunkedMap::new(4, 1024)?;
//! map.insert(1, "one")?;
//! assert_eq!(map[&1], "one");
//!
//! let mut array = ChunkedArray::<u32, Incremental>::new(1024, 64)?;
//! let at = array.insert(7)?;
//! assert_eq!(array[at.absolute()], 7);
//! # Ok::<(), chunked_collections::ChunkError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod config;
pub mod error;
pub mod index;
pub mod iter;

mod array;
mod chunks;
mod entry;
mod hash;
mod map;
mod ops;
mod queue;
mod recycler;
mod stack;
mod table;

#[cfg(test)]
mod tests;

pub use array::ChunkedArray;
pub use codec::{Doubling, Exponential, GrowthPolicy, Incremental, floor_log2};
pub use config::{ArrayConfig, MapConfig};
pub use error::{ChunkError, Result};
pub use index::ChunkedIndex;
pub use map::ChunkedMap;
pub use queue::ChunkedQueue;
pub use recycler::Recycle;
pub use stack::ChunkedStack;
