use std::num::NonZeroUsize;

use trailmap::Lru;

fn cap(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_lru_new_empty() {
    let cache = Lru::<i32, String>::with_max(cap(3));
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
    assert_eq!(cache.policy().max().get(), 3);
    assert_eq!(cache.into_iter().collect::<Vec<_>>(), vec![]);
}

#[test]
fn test_lru_insert_single() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    assert_eq!(cache.len(), 1);
    assert!(!cache.is_empty());
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(1, "one".to_string())]
    );
}

#[test]
fn test_lru_insert_overflow() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.insert(3, "three".to_string());
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string()), (3, "three".to_string())]
    );
}

#[test]
fn test_lru_get_refreshes_order() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.insert(3, "three".to_string());
    assert_eq!(cache.get(&2), Some(&"two".to_string()));
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![
            (1, "one".to_string()),
            (3, "three".to_string()),
            (2, "two".to_string())
        ]
    );
}

#[test]
fn test_lru_get_nonexistent() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    assert_eq!(cache.get(&2), None);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(1, "one".to_string())]
    );
}

#[test]
fn test_lru_access_protects_from_eviction() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.insert(3, "three".to_string());
    cache.get(&1);
    cache.insert(4, "four".to_string());
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![
            (3, "three".to_string()),
            (1, "one".to_string()),
            (4, "four".to_string())
        ]
    );
}

// The classic law: with a bound of 2, inserting A and B, touching A, then
// inserting C must evict B and leave A, C.
#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.get(&"a");
    cache.insert("c", 3);

    assert!(!cache.contains_key(&"b"));
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![("a", 1), ("c", 3)]
    );
}

#[test]
fn test_lru_peek_does_not_refresh() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    assert_eq!(cache.peek(&1), Some(&"one".to_string()));
    cache.insert(3, "three".to_string());
    // 1 was peeked, not touched, so it went first.
    assert!(!cache.contains_key(&1));
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string()), (3, "three".to_string())]
    );
}

#[test]
fn test_lru_get_mut_refreshes_order() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    if let Some(value) = cache.get_mut(&1) {
        *value = "ONE".to_string();
    }
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string()), (1, "ONE".to_string())]
    );
}

#[test]
fn test_lru_update_existing_does_not_evict() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    // Updating a present key is not an insertion; nothing may be evicted.
    cache.insert(1, "ONE".to_string());
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string()), (1, "ONE".to_string())]
    );
}

#[test]
fn test_lru_capacity_one() {
    let mut cache = Lru::with_max(cap(1));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string())]
    );
}

#[test]
fn test_lru_remove() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    assert_eq!(cache.remove(&1), Some("one".to_string()));
    assert_eq!(cache.remove(&1), None);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string())]
    );
}

#[test]
fn test_lru_pop_eldest() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.get(&1);
    // 2 is now the least recently used.
    assert_eq!(cache.pop_eldest(), Some((2, "two".to_string())));
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(1, "one".to_string())]
    );
}

#[test]
fn test_lru_pop_eldest_empty() {
    let mut cache = Lru::<i32, String>::with_max(cap(3));
    assert_eq!(cache.pop_eldest(), None);
}

#[test]
fn test_lru_eldest_is_eviction_candidate() {
    let mut cache = Lru::with_max(cap(3));
    assert_eq!(cache.eldest(), None);
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    assert_eq!(cache.eldest(), Some((&1, &"one".to_string())));
    cache.get(&1);
    assert_eq!(cache.eldest(), Some((&2, &"two".to_string())));
}

#[test]
fn test_lru_clear() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.clear();
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
    assert_eq!(cache.into_iter().collect::<Vec<_>>(), vec![]);
}

#[test]
fn test_lru_get_or_insert_with() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());

    let value = cache.get_or_insert_with(1, |&key| format!("value_{key}"));
    assert_eq!(value, &"one".to_string());

    // The miss inserts and evicts the least recently used (2).
    let value = cache.get_or_insert_with(3, |&key| format!("value_{key}"));
    assert_eq!(value, &"value_3".to_string());
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(1, "one".to_string()), (3, "value_3".to_string())]
    );
}

#[test]
fn test_lru_extend_respects_bound() {
    let mut cache = Lru::with_max(cap(2));
    cache.insert(1, "one".to_string());
    cache.extend(vec![(2, "two".to_string()), (3, "three".to_string())]);
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.into_iter().collect::<Vec<_>>(),
        vec![(2, "two".to_string()), (3, "three".to_string())]
    );
}

#[test]
fn test_lru_raising_bound_via_policy_mut() {
    let mut cache = Lru::with_max(cap(1));
    cache.insert(1, 10);
    *cache.policy_mut() = trailmap::Bounded::new(cap(2));
    cache.insert(2, 20);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_lru_iter_matches_into_iter() {
    let mut cache = Lru::with_max(cap(3));
    cache.insert(1, "one".to_string());
    cache.insert(2, "two".to_string());
    cache.insert(3, "three".to_string());

    let borrowed = cache
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect::<Vec<_>>();
    let owned: Vec<_> = cache.into_iter().collect();

    assert_eq!(borrowed, owned);
}
