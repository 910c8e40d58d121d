//! Insert and remove must never lose data.

use crate::{ChunkError, ChunkedMap};

fn map<K, V>() -> ChunkedMap<K, V> {
    ChunkedMap::new(4, 4096).unwrap()
}

// ---------------------------------------------------------------------------
// insert must return the old value when updating
// ---------------------------------------------------------------------------

#[test]
fn insert_new_returns_none() {
    let mut map = map();
    let old = map.insert("key", 42).unwrap();
    assert_eq!(old, None, "inserting new key should return None");
}

#[test]
fn insert_update_chain() {
    let mut map = map();
    assert_eq!(map.insert("k", 10), Ok(None));
    assert_eq!(map.insert("k", 20), Ok(Some(10)));
    assert_eq!(map.insert("k", 30), Ok(Some(20)));
    assert_eq!(map.get(&"k"), Some(&30));
    assert_eq!(map.len(), 1);
}

// ---------------------------------------------------------------------------
// remove must return the removed value
// ---------------------------------------------------------------------------

#[test]
fn remove_returns_correct_value_among_many() {
    let mut map = map();
    for i in 0..100 {
        map.insert(i, i * 10).unwrap();
    }
    assert_eq!(map.remove(&50), Ok(500));
    assert_eq!(map.remove(&50), Err(ChunkError::KeyNotFound));
    assert_eq!(map.len(), 99);
}

// ---------------------------------------------------------------------------
// Every key stays reachable through growth and churn
// ---------------------------------------------------------------------------

#[test]
fn every_key_reachable_after_growth() {
    let mut map = map();
    for i in 0..3000_u32 {
        map.insert(i, i ^ 0x5555).unwrap();
    }
    assert_eq!(map.len(), 3000);
    for i in 0..3000_u32 {
        assert_eq!(map.get(&i), Some(&(i ^ 0x5555)), "lost key {i}");
    }
}

#[test]
fn remove_half_keeps_other_half() {
    let mut map = map();
    for i in 0..1000_u32 {
        map.insert(i, i).unwrap();
    }
    for i in (0..1000).filter(|i| i % 2 == 0) {
        assert_eq!(map.remove(&i), Ok(i));
    }
    assert_eq!(map.len(), 500);
    for i in 0..1000_u32 {
        if i % 2 == 0 {
            assert!(!map.contains_key(&i));
        } else {
            assert_eq!(map.get(&i), Some(&i));
        }
    }
}

#[test]
fn iteration_visits_every_entry_once() {
    let mut map = map();
    for i in 0..500_u32 {
        map.insert(i, ()).unwrap();
    }
    for i in (0..500).step_by(7) {
        map.remove(&i).unwrap();
    }
    let mut keys: Vec<u32> = map.keys().copied().collect();
    keys.sort_unstable();
    let expected: Vec<u32> = (0..500).filter(|i| i % 7 != 0).collect();
    assert_eq!(keys, expected);
}

#[test]
fn string_keys() {
    let mut map = map();
    for i in 0..200 {
        map.insert(format!("key-{i}"), i).unwrap();
    }
    for i in 0..200 {
        assert_eq!(map.get(&format!("key-{i}")), Some(&i));
    }
    assert_eq!(map.remove(&"key-17".to_owned()), Ok(17));
    assert_eq!(map.get(&"key-17".to_owned()), None);
}
