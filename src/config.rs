//! Construction parameters.

use crate::error::{ChunkError, Result};
use crate::recycler::Recycle;

/// Parameters of a [`ChunkedArray`](crate::ChunkedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Upper bound on the number of live elements.
    pub max_size: usize,
    /// Size of the first chunk; the growth policy derives the rest.
    pub block_size: usize,
    /// Reuse order of removed slots.
    pub recycle: Recycle,
}

impl ArrayConfig {
    /// Config with LIFO slot reuse.
    #[must_use]
    pub const fn new(max_size: usize, block_size: usize) -> Self {
        Self {
            max_size,
            block_size,
            recycle: Recycle::Lifo,
        }
    }

    /// Sets the reuse order of removed slots.
    #[must_use]
    pub const fn recycle(mut self, recycle: Recycle) -> Self {
        self.recycle = recycle;
        self
    }

    /// Checks the policy-independent parameters.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] on a zero `max_size` or
    /// `block_size`.
    pub const fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "max size must be at least 1",
            });
        }
        if self.block_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "block size must be at least 1",
            });
        }
        Ok(())
    }
}

/// Parameters of a [`ChunkedMap`](crate::ChunkedMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    /// Initial number of buckets.
    pub initial_capacity: usize,
    /// Upper bound on the number of live entries.
    pub max_size: usize,
    /// First-chunk size of the bucket and entry arrays.
    pub block_size: usize,
}

impl MapConfig {
    /// Config whose arrays start with a chunk the size of the initial table.
    #[must_use]
    pub const fn new(initial_capacity: usize, max_size: usize) -> Self {
        Self {
            initial_capacity,
            max_size,
            block_size: initial_capacity,
        }
    }

    /// Overrides the first-chunk size of the backing arrays.
    #[must_use]
    pub const fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Maximum bucket count: every doubling triggered below `max_size` fits.
    #[must_use]
    pub const fn max_buckets(&self) -> usize {
        let doubled = self.max_size.saturating_mul(2);
        if doubled > self.initial_capacity {
            doubled
        } else {
            self.initial_capacity
        }
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] on a zero field.
    pub const fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "initial capacity must be at least 1",
            });
        }
        if self.max_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "max size must be at least 1",
            });
        }
        if self.block_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "block size must be at least 1",
            });
        }
        Ok(())
    }
}
