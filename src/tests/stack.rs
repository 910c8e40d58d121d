use crate::{ChunkError, ChunkedStack};

#[test]
fn pushes_and_pops_in_lifo_order() {
    let mut stack = ChunkedStack::new(1024, 64).unwrap();
    for i in 0..1000 {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.len(), 1000);
    for i in (0..1000).rev() {
        assert_eq!(stack.pop(), Ok(i));
    }
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(ChunkError::EmptyContainer));
}

#[test]
fn pop_on_empty() {
    let mut stack = ChunkedStack::<u8>::new(8, 4).unwrap();
    assert_eq!(stack.pop(), Err(ChunkError::EmptyContainer));
    assert_eq!(stack.peek(), None);
}

#[test]
fn peek_tracks_top_across_chunk_boundaries() {
    let mut stack = ChunkedStack::new(64, 4).unwrap();
    for i in 0..9 {
        stack.push(i).unwrap();
        assert_eq!(stack.peek(), Some(&i));
    }
    // Pop back over the chunk boundaries at 8 and 4.
    for i in (1..9).rev() {
        assert_eq!(stack.pop(), Ok(i));
        assert_eq!(stack.peek(), Some(&(i - 1)));
    }
    assert_eq!(stack.len(), 1);
}

#[test]
fn capacity_exceeded() {
    let mut stack = ChunkedStack::new(6, 4).unwrap();
    for i in 0..6 {
        stack.push(i).unwrap();
    }
    assert_eq!(
        stack.push(6),
        Err(ChunkError::CapacityExceeded { max_size: 6 })
    );
    assert_eq!(stack.len(), 6);
    assert_eq!(stack.peek(), Some(&5));
}

#[test]
fn rejects_invalid_configuration() {
    assert!(matches!(
        ChunkedStack::<u8>::new(0, 4),
        Err(ChunkError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        ChunkedStack::<u8>::new(16, 6),
        Err(ChunkError::InvalidConfiguration { .. })
    ));
}

#[test]
fn iterates_bottom_to_top() {
    let mut stack = ChunkedStack::new(64, 4).unwrap();
    for i in 0..10 {
        stack.push(i).unwrap();
    }
    stack.pop().unwrap();
    assert!(stack.iter().copied().eq(0..9));
    assert_eq!((&stack).into_iter().len(), 9);
}

#[test]
fn clear_keeps_chunks() {
    let mut stack = ChunkedStack::new(64, 4).unwrap();
    for i in 0..20 {
        stack.push(i).unwrap();
    }
    let chunks = stack.chunk_count();
    assert_eq!(chunks, 5);
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.chunk_count(), chunks);
    assert_eq!(stack.capacity(), 20);

    stack.push(42).unwrap();
    assert_eq!(stack.pop(), Ok(42));
}

#[test]
fn refill_reuses_chunks() {
    let mut stack = ChunkedStack::new(256, 16).unwrap();
    for _ in 0..3 {
        for i in 0..200 {
            stack.push(i).unwrap();
        }
        while stack.pop().is_ok() {}
    }
    assert_eq!(stack.chunk_count(), 13);
}

#[test]
fn debug_format() {
    let stack = ChunkedStack::<u8>::new(8, 4).unwrap();
    let dbg = format!("{stack:?}");
    assert!(dbg.contains("ChunkedStack"));
    assert_eq!(stack.max_size(), 8);
}
