use std::collections::{BTreeMap, HashMap, VecDeque};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ChunkError, ChunkedArray, ChunkedMap, ChunkedQueue, ChunkedStack, Exponential};

/// 1000 entries: insert all, verify all, remove all.
#[test]
fn thousand_entries() {
    let mut map = ChunkedMap::new(4, 1000).unwrap();
    for i in 0_u64..1000 {
        map.insert(i, i * 3).unwrap();
    }
    assert_eq!(map.len(), 1000);

    for i in 0_u64..1000 {
        assert_eq!(map.get(&i), Some(&(i * 3)), "missing key {i}");
    }

    for i in 0_u64..1000 {
        assert!(map.remove(&i).is_ok(), "failed to remove key {i}");
    }
    assert!(map.is_empty());
}

/// Random operations checked against `std::collections::HashMap`.
#[test]
fn map_matches_std_model() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut map = ChunkedMap::new(4, 512).unwrap();
    let mut model = HashMap::new();

    for _ in 0..20_000 {
        let key = rng.gen_range(0_u32..600);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let value = rng.r#gen::<u32>();
                let result = map.insert(key, value);
                if model.contains_key(&key) || model.len() < 512 {
                    assert_eq!(result, Ok(model.insert(key, value)));
                } else {
                    assert_eq!(result, Err(ChunkError::CapacityExceeded { max_size: 512 }));
                }
            }
            2 => {
                let expected = model.remove(&key).ok_or(ChunkError::KeyNotFound);
                assert_eq!(map.remove(&key), expected);
            }
            _ => assert_eq!(map.get(&key), model.get(&key)),
        }
        assert_eq!(map.len(), model.len());
    }

    for (key, value) in &model {
        assert_eq!(map.get(key), Some(value));
    }
    assert_eq!(map.iter().count(), model.len());
}

/// Random insertions and removals checked against a position-keyed model.
#[test]
fn array_matches_model() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut array = ChunkedArray::<u64, Exponential>::new(2048, 4).unwrap();
    let mut model = BTreeMap::new();

    for step in 0..20_000_u64 {
        if model.is_empty() || rng.gen_bool(0.55) {
            if let Ok(pos) = array.insert(step) {
                assert!(model.insert(pos.absolute(), step).is_none());
            } else {
                assert_eq!(model.len(), 2048);
            }
        } else {
            let nth = rng.gen_range(0..model.len());
            let index = *model.keys().nth(nth).unwrap();
            assert_eq!(array.remove_at(index), Ok(model.remove(&index).unwrap()));
        }
        assert_eq!(array.len(), model.len());
    }

    assert!(array.iter().eq(model.values()));
    for (&index, value) in &model {
        assert_eq!(array.get(index), Ok(value));
    }
}

#[test]
fn stack_and_queue_match_models() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut stack = ChunkedStack::new(256, 8).unwrap();
    let mut queue = ChunkedQueue::new(256, 8).unwrap();
    let mut stack_model = Vec::new();
    let mut queue_model = VecDeque::new();

    for step in 0..10_000_u32 {
        if rng.gen_bool(0.5) {
            if stack_model.len() < 256 {
                stack.push(step).unwrap();
                stack_model.push(step);
                queue.enqueue(step).unwrap();
                queue_model.push_back(step);
            }
        } else {
            assert_eq!(stack.pop().ok(), stack_model.pop());
            assert_eq!(queue.dequeue().ok(), queue_model.pop_front());
        }
        assert_eq!(stack.peek(), stack_model.last());
        assert_eq!(queue.peek(), queue_model.front());
    }

    assert!(stack.iter().eq(stack_model.iter()));
    assert!(queue.iter().eq(queue_model.iter()));
}
