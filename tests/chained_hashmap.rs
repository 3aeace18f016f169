#![allow(clippy::arithmetic_side_effects, clippy::unwrap_used)]
use chainmap::{ChainedHashMap, INITIAL_CAPACITY, bucket_index};

#[test]
fn example_scenario_set_get_remove() {
    let mut map = ChainedHashMap::new();
    map.set("a", 1);
    map.set("b", 2);

    assert_eq!(map.get("a"), Some(&1));
    assert!(map.remove("a"));
    assert_eq!(map.get("a"), None);
    assert!(map.has("b"));
    assert_eq!(map.len(), 1);
}

#[test]
fn example_scenario_overwrite() {
    let mut map = ChainedHashMap::new();
    map.set("x", 1);
    map.set("x", 2);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x"), Some(&2));
}

#[test]
fn thirteen_keys_stay_retrievable_across_growth() {
    let mut map = ChainedHashMap::new();
    let keys: Vec<String> = (0..13).map(|i| format!("user:{i}")).collect();
    for (i, key) in keys.iter().enumerate() {
        map.set(key.as_str(), i);
    }

    // 13 entries exceed 0.75 * 16; the table doubles on the next set
    assert_eq!(map.capacity(), INITIAL_CAPACITY);
    assert!(map.load_factor() > 0.75);

    map.set("user:13", 13);
    assert_eq!(map.capacity(), 32);

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(map.get(key), Some(&i));
    }
    assert_eq!(map.get("user:13"), Some(&13));
}

#[test]
fn colliding_keys_are_independent() {
    // Brute-force two keys sharing a bucket at the initial capacity
    let base = "key-0";
    let other = (1..10_000)
        .map(|i| format!("key-{i}"))
        .find(|k| bucket_index(k, INITIAL_CAPACITY) == bucket_index(base, INITIAL_CAPACITY))
        .unwrap();

    let mut map = ChainedHashMap::new();
    map.set(base, "first");
    map.set(other.as_str(), "second");

    assert_eq!(map.get(base), Some(&"first"));
    assert_eq!(map.get(&other), Some(&"second"));

    assert!(map.remove(&other));
    assert!(map.has(base));
    assert!(!map.has(&other));

    map.set(other.as_str(), "again");
    assert!(map.remove(base));
    assert_eq!(map.get(&other), Some(&"again"));
    assert_eq!(map.len(), 1);
}

#[test]
fn entries_clear_and_reinsert_gives_equivalent_map() {
    let mut map = ChainedHashMap::new();
    for i in 0..200 {
        map.set(format!("item-{i}"), i * 3);
    }
    for i in (0..200).step_by(7) {
        map.remove(&format!("item-{i}"));
    }

    let snapshot = map.entries();
    let keys = map.keys();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.capacity(), INITIAL_CAPACITY);

    for (k, v) in snapshot.clone() {
        map.set(k, v);
    }

    assert_eq!(map.len(), snapshot.len());
    for (k, v) in &snapshot {
        assert_eq!(map.get(k), Some(v));
    }
    for i in (0..200).step_by(7) {
        assert!(!map.has(&format!("item-{i}")));
    }

    let mut before = keys;
    let mut after = map.keys();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn enumeration_is_deterministic() {
    let build = || {
        let mut map = ChainedHashMap::new();
        for i in 0..64 {
            map.set(format!("{i:x}"), i);
        }
        map
    };

    let first = build();
    let second = build();
    assert_eq!(first.entries(), second.entries());
    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.values(), first.iter().map(|(_, v)| *v).collect::<Vec<_>>());
}

#[test]
fn chain_lengths_cover_every_entry() {
    let map: ChainedHashMap<usize> = (0..500).map(|i| (format!("k{i}"), i)).collect();

    let lengths = map.chain_lengths();
    assert_eq!(lengths.len(), map.capacity());
    assert_eq!(lengths.iter().sum::<usize>(), map.len());

    let stats = map.chain_stats();
    assert_eq!(stats.len, 500);
    assert!(stats.occupied_buckets <= stats.capacity);
    assert!(stats.longest_chain >= 1);
}

#[test]
fn values_are_opaque_payloads() {
    let mut map: ChainedHashMap<Vec<u8>> = ChainedHashMap::new();
    map.set("bytes", vec![1, 2, 3]);
    if let Some(v) = map.get_mut("bytes") {
        v.push(4);
    }

    assert_eq!(map.take("bytes"), Some(vec![1, 2, 3, 4]));
    assert!(map.is_empty());
}
