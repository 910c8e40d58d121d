//! Repeating a workload that already reached its peak size allocates no
//! further blocks.

use crate::{
    ArrayConfig, ChunkedArray, ChunkedMap, ChunkedQueue, ChunkedStack, Doubling, Exponential,
    GrowthPolicy, Incremental, Recycle,
};

fn churn<P: GrowthPolicy>(array: &mut ChunkedArray<usize, P>, n: usize) -> usize {
    for i in 0..n {
        array.insert(i).unwrap();
    }
    for i in (0..n).rev() {
        array.remove_at(i).unwrap();
    }
    array.block_count()
}

#[test]
fn array_refill_is_allocation_free() {
    let mut incremental = ChunkedArray::<usize, Incremental>::new(4096, 64).unwrap();
    let mut doubling = ChunkedArray::<usize, Doubling>::new(4096, 64).unwrap();
    let mut exponential = ChunkedArray::<usize, Exponential>::new(4096, 4).unwrap();
    let first = (
        churn(&mut incremental, 4000),
        churn(&mut doubling, 4000),
        churn(&mut exponential, 4000),
    );
    let second = (
        churn(&mut incremental, 4000),
        churn(&mut doubling, 4000),
        churn(&mut exponential, 4000),
    );
    assert_eq!(first, second);
}

#[test]
fn fifo_recycling_is_allocation_free() {
    let config = ArrayConfig::new(4096, 64).recycle(Recycle::Fifo);
    let mut array = ChunkedArray::<usize, Doubling>::with_config(config).unwrap();
    let first = churn(&mut array, 3000);
    let second = churn(&mut array, 3000);
    assert_eq!(first, second);
}

#[test]
fn array_clear_is_allocation_free() {
    let mut array = ChunkedArray::<usize, Doubling>::new(4096, 16).unwrap();
    for i in 0..4096 {
        array.insert(i).unwrap();
    }
    let blocks = array.block_count();
    array.clear();
    for i in 0..4096 {
        array.insert(i).unwrap();
    }
    assert_eq!(array.block_count(), blocks);
}

#[test]
fn stack_and_queue_refill_are_allocation_free() {
    let mut stack = ChunkedStack::new(4096, 64).unwrap();
    let mut queue = ChunkedQueue::new(4096, 64).unwrap();
    let mut chunks = Vec::new();
    for _ in 0..2 {
        for i in 0..4000 {
            stack.push(i).unwrap();
            queue.enqueue(i).unwrap();
        }
        while stack.pop().is_ok() {}
        while queue.dequeue().is_ok() {}
        chunks.push((stack.chunk_count(), queue.chunk_count()));
    }
    assert_eq!(chunks[0], chunks[1]);
}

#[test]
fn map_refill_is_allocation_free() {
    let mut map = ChunkedMap::new(4, 4096).unwrap();
    let mut blocks = Vec::new();
    for _ in 0..2 {
        for i in 0..4000_u32 {
            map.insert(i, i).unwrap();
        }
        for i in 0..4000_u32 {
            map.remove(&i).unwrap();
        }
        blocks.push((map.capacity(), map.block_count()));
    }
    assert_eq!(blocks[0], blocks[1]);
}
