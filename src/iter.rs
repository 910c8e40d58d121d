//! Iterator types for chunked containers and maps.

use std::iter::FusedIterator;

use crate::chunks::Chunks;
use crate::entry::Entry;

/// Iterator over references to the live elements of a chunked container,
/// in ascending position order.
///
/// Walks the chunks physically and skips empty (removed) slots, so it is
/// correct for any removal order. Single pass; the container must not be
/// mutated while it is alive, which the borrow enforces.
pub struct Iter<'a, T> {
    chunks: &'a Chunks<T>,
    chunk: usize,
    offset: usize,
    span: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Scans at most `span` slots starting at `offset` in the first chunk and
    /// yields the first `live` occupied ones.
    pub(crate) const fn new(
        chunks: &'a Chunks<T>,
        offset: usize,
        span: usize,
        live: usize,
    ) -> Self {
        Self {
            chunks,
            chunk: 0,
            offset,
            span,
            remaining: live,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while self.remaining > 0 && self.span > 0 {
            let slot = self.chunks.slot(self.chunk, self.offset);
            self.span -= 1;
            self.offset += 1;
            if self.offset == self.chunks.chunk_len(self.chunk) {
                self.chunk += 1;
                self.offset = 0;
            }
            if let Some(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ---------------------------------------------------------------------------
// Map iterators
// ---------------------------------------------------------------------------

/// Iterator over `(&K, &V)` pairs of a [`ChunkedMap`](crate::ChunkedMap),
/// in entry position order.
pub struct Entries<'a, K, V> {
    inner: Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Entries<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, Entry<K, V>>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

/// Iterator over the keys of a [`ChunkedMap`](crate::ChunkedMap).
pub struct Keys<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Entries<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`ChunkedMap`](crate::ChunkedMap).
pub struct Values<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Entries<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
