//! Error taxonomy shared by every container.

use thiserror::Error;

/// Errors reported by the chunked containers.
///
/// No error is retried internally. Bounds and configuration checks run before
/// any write, so a returned error leaves the container unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// Positional access to a slot that is not live.
    #[error("index {index} out of range (high-water mark {bound})")]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// One past the highest position ever written.
        bound: usize,
    },

    /// Lookup, removal or indexer miss on a map.
    #[error("key not found")]
    KeyNotFound,

    /// Pop, dequeue or positional removal on an empty container.
    #[error("container is empty")]
    EmptyContainer,

    /// An insertion would grow the container past its declared maximum.
    #[error("capacity exceeded: maximum size is {max_size}")]
    CapacityExceeded {
        /// The caller-declared maximum number of elements.
        max_size: usize,
    },

    /// Construction parameters were rejected.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChunkError>;
