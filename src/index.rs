//! Physical/logical position of an element.

/// A position split into its chunk, the offset inside that chunk, and the
/// caller-visible absolute index.
///
/// The absolute index is stable for the lifetime of the element: growth and
/// removal of other elements never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkedIndex {
    chunk: usize,
    offset: usize,
    absolute: usize,
}

impl ChunkedIndex {
    /// Creates a position from its parts.
    #[must_use]
    pub const fn new(chunk: usize, offset: usize, absolute: usize) -> Self {
        Self {
            chunk,
            offset,
            absolute,
        }
    }

    /// Index of the chunk holding the slot.
    #[must_use]
    pub const fn chunk(self) -> usize {
        self.chunk
    }

    /// Offset of the slot inside its chunk.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Caller-visible logical index.
    #[must_use]
    pub const fn absolute(self) -> usize {
        self.absolute
    }
}

impl From<ChunkedIndex> for usize {
    fn from(index: ChunkedIndex) -> Self {
        index.absolute
    }
}
