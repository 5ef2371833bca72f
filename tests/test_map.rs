use trailmap::OrderMode;
use trailmap::TrailMap;

#[test]
fn test_insertion_order_stable_across_updates() {
    let mut map = TrailMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    map.insert("b", 22);

    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [("a", 1), ("b", 22), ("c", 3)]);
}

#[test]
fn test_access_order_reorders_on_read() {
    let mut map = TrailMap::with_order(OrderMode::Access);
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    map.get(&"a");

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, ["b", "c", "a"]);
}

#[test]
fn test_insertion_order_ignores_reads() {
    let mut map = TrailMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    map.get(&"a");
    map.get(&"c");
    map.get(&"b");

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn test_round_trip() {
    let mut map = TrailMap::new();
    assert_eq!(map.insert(7, Some("value")), None);
    assert_eq!(map.get(&7), Some(&Some("value")));

    // A stored "no value" is still distinguishable from an absent key.
    assert_eq!(map.insert(8, None), None);
    assert_eq!(map.get(&8), Some(&None));
    assert_eq!(map.get(&9), None);
}

#[test]
fn test_remove_is_idempotent() {
    let mut map = TrailMap::new();
    map.insert(1, "one");
    map.insert(2, "two");

    assert_eq!(map.remove(&1), Some("one"));
    assert_eq!(map.remove(&1), None);

    // The map looks as if 1 had never been inserted.
    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [(2, "two")]);
    assert_eq!(map.len(), 1);
    assert!(!map.contains_key(&1));
}

#[test]
fn test_empty_map_boundaries() {
    let mut map: TrailMap<i32, i32> = TrailMap::new();

    assert_eq!(map.get(&1), None);
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.pop_eldest(), None);
    assert_eq!(map.eldest(), None);
    assert_eq!(map.newest(), None);
    assert!(!map.contains_key(&1));
    assert!(!map.contains_value(&1));
    assert_eq!(map.len(), 0);
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn test_len_matches_iteration() {
    let mut map = TrailMap::new();
    for i in 0..100 {
        map.insert(i, i * 2);
    }
    for i in (0..100).step_by(3) {
        map.remove(&i);
    }

    assert_eq!(map.len(), map.iter().count());
    assert_eq!(map.len(), map.keys().count());
}

#[test]
fn test_contains_value_scans_all() {
    let mut map = TrailMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(3, "three");

    assert!(map.contains_value(&"one"));
    assert!(map.contains_value(&"three"));
    assert!(!map.contains_value(&"four"));
}

#[test]
fn test_eldest_and_newest_track_boundaries() {
    let mut map = TrailMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(3, "three");

    assert_eq!(map.eldest(), Some((&1, &"one")));
    assert_eq!(map.newest(), Some((&3, &"three")));

    map.remove(&1);
    assert_eq!(map.eldest(), Some((&2, &"two")));

    map.remove(&3);
    assert_eq!(map.newest(), Some((&2, &"two")));
    assert_eq!(map.eldest(), map.newest());
}

#[test]
fn test_interleaved_operations_keep_order() {
    let mut map = TrailMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    map.remove(&1);
    map.insert(3, "three");
    map.insert(1, "one again");
    map.remove(&2);
    map.insert(4, "four");

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [3, 1, 4]);
}

#[test]
fn test_double_ended_iteration() {
    let mut map = TrailMap::new();
    for i in 0..5 {
        map.insert(i, i);
    }

    let forward: Vec<_> = map.keys().copied().collect();
    let mut backward: Vec<_> = map.iter().rev().map(|(k, _)| *k).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_into_iter_consumes_in_order() {
    let mut map = TrailMap::with_order(OrderMode::Access);
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);
    map.get(&"a");

    let entries: Vec<_> = map.into_iter().collect();
    assert_eq!(entries, [("b", 2), ("c", 3), ("a", 1)]);
}

#[test]
fn test_from_iterator_collects_in_order() {
    let map: TrailMap<i32, &str> = vec![(3, "three"), (1, "one"), (2, "two")]
        .into_iter()
        .collect();

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [3, 1, 2]);
}

#[test]
fn test_debug_output_in_order() {
    let mut map = TrailMap::new();
    map.insert(1, "one");
    map.insert(2, "two");

    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
}
