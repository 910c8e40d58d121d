//! Chunk index codec: maps absolute positions to `(chunk, offset)` pairs.
//!
//! Three growth policies share one interface. They differ only in how large
//! each chunk is and in the formula recovering the chunk of a position:
//!
//! - [`Incremental`]: every chunk holds `B` slots (`B` a power of two),
//!   decoded with a shift and a mask.
//! - [`Doubling`]: chunk `k` holds `B·2^k` slots, decoded with an integer
//!   `log2` of `(i + B) / B`.
//! - [`Exponential`]: chunk `k` holds `B^(k+1) − B^k` slots (chunk 0 holds
//!   `B`), decoded with an integer `log_B(i)`.

use crate::error::{ChunkError, Result};
use crate::index::ChunkedIndex;

/// Growth policy of a chunked container.
///
/// Every policy must satisfy `decode(encode(i)) == i` for every position and
/// must never require resizing an already allocated chunk.
pub trait GrowthPolicy: Sized {
    /// Builds the policy for the given first-chunk size.
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfiguration`] if the policy cannot use
    /// `block_size`.
    fn new(block_size: usize) -> Result<Self>;

    /// Size of the first chunk.
    fn block_size(&self) -> usize;

    /// Number of slots in chunk `chunk`.
    fn chunk_len(&self, chunk: usize) -> usize;

    /// Absolute position of the first slot in chunk `chunk`.
    fn chunk_start(&self, chunk: usize) -> usize;

    /// Chunk holding absolute position `absolute`.
    fn chunk_of(&self, absolute: usize) -> usize;

    /// Splits an absolute position into its physical location.
    #[inline]
    fn encode(&self, absolute: usize) -> ChunkedIndex {
        let chunk = self.chunk_of(absolute);
        ChunkedIndex::new(chunk, absolute - self.chunk_start(chunk), absolute)
    }

    /// Recovers the absolute position of a physical location.
    #[inline]
    fn decode(&self, chunk: usize, offset: usize) -> usize {
        self.chunk_start(chunk) + offset
    }

    /// Number of chunks needed to hold `max_size` slots.
    fn chunks_for(&self, max_size: usize) -> usize {
        let mut chunks = 0;
        let mut capacity = 0_usize;
        while capacity < max_size {
            capacity = capacity.saturating_add(self.chunk_len(chunks));
            chunks += 1;
        }
        chunks
    }
}

// ---------------------------------------------------------------------------
// Integer logarithm
// ---------------------------------------------------------------------------

const DE_BRUIJN_POSITIONS: [u32; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];

/// `floor(log2(v))` of a 32-bit value; `0` for `v == 0`.
#[inline]
const fn log2_u32(mut v: u32) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    DE_BRUIJN_POSITIONS[(v.wrapping_mul(0x07C4_ACDD) >> 27) as usize]
}

/// Integer `floor(log2(v))` via a De Bruijn multiply-and-lookup.
///
/// Returns `0` for `v == 0`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn floor_log2(v: usize) -> u32 {
    let wide = v as u64;
    let high = (wide >> 32) as u32;
    if high == 0 {
        log2_u32(wide as u32)
    } else {
        32 + log2_u32(high)
    }
}

/// `2^k`, saturating at `usize::MAX`.
#[inline]
fn pow2(k: usize) -> usize {
    u32::try_from(k)
        .ok()
        .and_then(|k| 1_usize.checked_shl(k))
        .unwrap_or(usize::MAX)
}

// ---------------------------------------------------------------------------
// Incremental
// ---------------------------------------------------------------------------

/// Constant chunk size `B`, a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incremental {
    shift: u32,
    mask: usize,
}

impl Incremental {
    /// Offset of `absolute` inside its chunk.
    #[inline]
    #[must_use]
    pub const fn offset_of(&self, absolute: usize) -> usize {
        absolute & self.mask
    }
}

impl GrowthPolicy for Incremental {
    fn new(block_size: usize) -> Result<Self> {
        if !block_size.is_power_of_two() {
            return Err(ChunkError::InvalidConfiguration {
                reason: "block size must be a power of two",
            });
        }
        Ok(Self {
            shift: block_size.trailing_zeros(),
            mask: block_size - 1,
        })
    }

    #[inline]
    fn block_size(&self) -> usize {
        1 << self.shift
    }

    #[inline]
    fn chunk_len(&self, _chunk: usize) -> usize {
        1 << self.shift
    }

    #[inline]
    fn chunk_start(&self, chunk: usize) -> usize {
        chunk << self.shift
    }

    #[inline]
    fn chunk_of(&self, absolute: usize) -> usize {
        absolute >> self.shift
    }

    #[inline]
    fn encode(&self, absolute: usize) -> ChunkedIndex {
        ChunkedIndex::new(absolute >> self.shift, absolute & self.mask, absolute)
    }

    fn chunks_for(&self, max_size: usize) -> usize {
        max_size.div_ceil(1 << self.shift)
    }
}

// ---------------------------------------------------------------------------
// Doubling
// ---------------------------------------------------------------------------

/// Chunk `k` holds `B·2^k` slots; capacity after `k` chunks is `B·2^k − B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doubling {
    block_size: usize,
}

impl GrowthPolicy for Doubling {
    fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "block size must be at least 1",
            });
        }
        Ok(Self { block_size })
    }

    #[inline]
    fn block_size(&self) -> usize {
        self.block_size
    }

    #[inline]
    fn chunk_len(&self, chunk: usize) -> usize {
        self.block_size.saturating_mul(pow2(chunk))
    }

    #[inline]
    fn chunk_start(&self, chunk: usize) -> usize {
        self.chunk_len(chunk) - self.block_size
    }

    #[inline]
    fn chunk_of(&self, absolute: usize) -> usize {
        floor_log2(absolute.saturating_add(self.block_size) / self.block_size) as usize
    }
}

// ---------------------------------------------------------------------------
// Exponential
// ---------------------------------------------------------------------------

/// Power-law growth: chunk `k` covers `[B^k, B^(k+1))`, chunk 0 covers `[0, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponential {
    base: usize,
}

impl Exponential {
    #[inline]
    fn power(self, exp: usize) -> usize {
        u32::try_from(exp).map_or(usize::MAX, |exp| self.base.saturating_pow(exp))
    }
}

impl GrowthPolicy for Exponential {
    fn new(block_size: usize) -> Result<Self> {
        if block_size < 2 {
            return Err(ChunkError::InvalidConfiguration {
                reason: "exponential block size must be at least 2",
            });
        }
        Ok(Self { base: block_size })
    }

    #[inline]
    fn block_size(&self) -> usize {
        self.base
    }

    #[inline]
    fn chunk_len(&self, chunk: usize) -> usize {
        self.power(chunk + 1) - self.chunk_start(chunk)
    }

    #[inline]
    fn chunk_start(&self, chunk: usize) -> usize {
        if chunk == 0 { 0 } else { self.power(chunk) }
    }

    #[inline]
    fn chunk_of(&self, absolute: usize) -> usize {
        // The first two chunks are resolved without a logarithm.
        if absolute < self.base {
            0
        } else if absolute <= self.base + 1 {
            1
        } else {
            absolute.ilog(self.base) as usize
        }
    }
}
