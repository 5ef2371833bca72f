use std::hash::BuildHasher;
use std::hash::Hash;
use std::mem;
use std::num::NonZeroUsize;

use hashbrown::HashTable;
use hashbrown::hash_table;
use slab::Slab;

use crate::Bounded;
use crate::EvictionPolicy;
use crate::IntoIter;
use crate::Iter;
use crate::OrderMode;
use crate::RandomState;
use crate::Unbounded;
use crate::Walk;
use crate::trail::Node;
use crate::trail::Ptr;
use crate::trail::Trail;

#[cold]
#[inline(never)]
fn evicted_on_insert() -> ! {
    panic!("eviction policy discarded the entry that was just inserted")
}

/// A hash map that threads every live entry on an intrusive doubly-linked
/// trail, giving deterministic iteration order with O(1) average-case
/// operations.
///
/// The trail runs from the eldest entry to the newest. Which end an entry
/// gravitates to is governed by the [`OrderMode`] chosen at construction:
/// insertion order fixes an entry's position when it is first inserted,
/// access order refreshes it on every successful lookup or update. After
/// each insertion of a new key the [`EvictionPolicy`] `P` is consulted and
/// may discard the eldest entry, which is how bounded caches such as
/// [`Lru`](crate::Lru) are built.
///
/// Internally the entries live in a slab; the hash table and the trail both
/// address slots through stable handles, so neither structure holds
/// references into the other and rehashing never disturbs the trail.
///
/// Lookups distinguish "absent" from any stored value by returning
/// [`Option`]; no value is reserved as a sentinel.
///
/// # Examples
///
/// ```
/// use trailmap::TrailMap;
///
/// let mut map = TrailMap::new();
/// map.insert("apple", 5);
/// map.insert("banana", 3);
/// map.insert("cherry", 8);
///
/// // Updating a value does not disturb insertion order.
/// map.insert("banana", 4);
///
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"apple", &5), (&"banana", &4), (&"cherry", &8)]);
/// ```
pub struct TrailMap<K, V, P = Unbounded, S = RandomState> {
    pub(crate) nodes: Slab<Node<K, V>>,
    pub(crate) table: HashTable<Ptr>,
    pub(crate) trail: Trail,
    pub(crate) hasher: S,
    pub(crate) order: OrderMode,
    pub(crate) policy: P,
    pub(crate) version: u64,
}

impl<K, V> TrailMap<K, V> {
    /// Creates an empty unbounded map in insertion order.
    ///
    /// Does not allocate until the first insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map: TrailMap<&str, i32> = TrailMap::new();
    /// assert!(map.is_empty());
    /// map.insert("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty unbounded map in insertion order with room for at
    /// least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, OrderMode::Insertion)
    }

    /// Creates an empty unbounded map with the given order mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::OrderMode;
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::with_order(OrderMode::Access);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// map.get(&1);
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn with_order(order: OrderMode) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty unbounded map with the given capacity and order mode.
    pub fn with_capacity_and_order(capacity: usize, order: OrderMode) -> Self {
        Self::with_capacity_policy_and_hasher(capacity, order, Unbounded, RandomState::default())
    }
}

impl<K, V, P> TrailMap<K, V, P> {
    /// Creates an empty map with the given order mode and eviction policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use trailmap::Bounded;
    /// use trailmap::OrderMode;
    /// use trailmap::TrailMap;
    ///
    /// let max = NonZeroUsize::new(8).unwrap();
    /// let map: TrailMap<u32, u32, _> =
    ///     TrailMap::with_policy(OrderMode::Access, Bounded::new(max));
    /// assert!(map.is_empty());
    /// ```
    pub fn with_policy(order: OrderMode, policy: P) -> Self {
        Self::with_capacity_policy_and_hasher(0, order, policy, RandomState::default())
    }
}

impl<K, V, P, S> TrailMap<K, V, P, S> {
    /// Creates an empty map from all construction parameters.
    pub fn with_capacity_policy_and_hasher(
        capacity: usize,
        order: OrderMode,
        policy: P,
        hasher: S,
    ) -> Self {
        TrailMap {
            nodes: Slab::with_capacity(capacity),
            table: HashTable::with_capacity(capacity),
            trail: Trail::new(),
            hasher,
            order,
            policy,
            version: 0,
        }
    }
}

impl<K: Hash + Eq, V> TrailMap<K, V, Bounded> {
    /// Creates a least-recently-used cache holding at most `max` entries.
    ///
    /// Shorthand for [`OrderMode::Access`] with a [`Bounded`] policy; see
    /// [`Lru`](crate::Lru).
    pub fn with_max(max: NonZeroUsize) -> Self {
        Self::with_capacity_policy_and_hasher(
            max.get(),
            OrderMode::Access,
            Bounded::new(max),
            RandomState::default(),
        )
    }
}

impl<K, V, P: Default, S: Default> Default for TrailMap<K, V, P, S> {
    fn default() -> Self {
        Self::with_capacity_policy_and_hasher(
            0,
            OrderMode::default(),
            P::default(),
            S::default(),
        )
    }
}

impl<K, V, P, S> TrailMap<K, V, P, S> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The order mode the map was constructed with.
    pub fn order(&self) -> OrderMode {
        self.order
    }

    /// The eviction policy the map was constructed with.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the eviction policy, e.g. to adjust a bound.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Removes all entries, keeping allocated memory for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes.clear();
        self.trail.clear();
        self.version += 1;
    }

    /// Reduces memory usage as much as possible.
    ///
    /// Handles stay valid, so slots in the middle of the slab cannot move;
    /// only trailing free space is reclaimed.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit(|p| self.nodes[p.index()].hash);
        self.nodes.shrink_to_fit();
    }

    /// Returns the eldest entry: the first inserted in insertion order, the
    /// least recently used in access order. This is the entry the eviction
    /// policy is asked about.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// assert_eq!(map.eldest(), None);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.eldest(), Some((&1, &"one")));
    /// ```
    pub fn eldest(&self) -> Option<(&K, &V)> {
        let ptr = self.trail.head()?;
        let node = &self.nodes[ptr.index()];
        Some((&node.key, &node.value))
    }

    /// Returns the newest entry, the opposite end of the trail from
    /// [`eldest`](Self::eldest).
    pub fn newest(&self) -> Option<(&K, &V)> {
        let ptr = self.trail.tail()?;
        let node = &self.nodes[ptr.index()];
        Some((&node.key, &node.value))
    }

    /// Removes and returns the eldest entry, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.pop_eldest(), Some((1, "one")));
    /// assert_eq!(map.pop_eldest(), Some((2, "two")));
    /// assert_eq!(map.pop_eldest(), None);
    /// ```
    pub fn pop_eldest(&mut self) -> Option<(K, V)> {
        let head = self.trail.head()?;
        self.remove_ptr(head)
    }

    /// Returns an iterator over the entries from eldest to newest.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            fwd: self.trail.head_ptr(),
            rev: self.trail.tail_ptr(),
            remaining: self.len(),
            nodes: &self.nodes,
        }
    }

    /// Returns an iterator over the keys from eldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values from eldest to newest.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Returns `true` if some entry holds `value`.
    ///
    /// This scans the trail from eldest to newest, so it is O(n); values are
    /// not indexed.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Keeps only the entries for which `f` returns `true`, visiting them
    /// from eldest to newest.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// for i in 0..6 {
    ///     map.insert(i, i * 10);
    /// }
    /// map.retain(|&k, _| k % 2 == 0);
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [0, 2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut cursor = self.trail.head();
        while let Some(ptr) = cursor {
            let node = &mut self.nodes[ptr.index()];
            let keep = f(&node.key, &mut node.value);
            cursor = node.next.check();
            if !keep {
                self.remove_ptr(ptr);
            }
        }
    }

    /// Begins a detached traversal from the eldest entry.
    ///
    /// Unlike [`iter`](Self::iter), a [`Walk`] does not borrow the map
    /// between steps, so the map can be mutated while a walk exists. Any
    /// structural change desynchronizes the walk, which then fails on its
    /// next step instead of yielding stale entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// let mut walk = map.walk();
    /// assert_eq!(walk.advance(&map), Ok(Some((&1, &"one"))));
    ///
    /// map.insert(3, "three");
    /// assert!(walk.advance(&map).is_err());
    ///
    /// // A fresh walk observes the new state.
    /// let mut walk = map.walk();
    /// assert_eq!(walk.advance(&map), Ok(Some((&1, &"one"))));
    /// ```
    pub fn walk(&self) -> Walk {
        Walk {
            next: self.trail.head_ptr(),
            current: Ptr::null(),
            version: self.version,
        }
    }

    /// Removes the entry behind `ptr` from the table, the trail, and the
    /// slab. `ptr` must be live or null; null returns `None`.
    pub(crate) fn remove_ptr(&mut self, ptr: Ptr) -> Option<(K, V)> {
        let hash = self.nodes.get(ptr.index())?.hash;
        match self.table.find_entry(hash, |p| *p == ptr) {
            Ok(occupied) => {
                occupied.remove();
            }
            Err(_) => {
                #[cfg(debug_assertions)]
                unreachable!("live pointer missing from table: {ptr:?}");
                #[cfg(not(debug_assertions))]
                return None;
            }
        }
        self.trail.unlink(&mut self.nodes, ptr);
        let node = self.nodes.remove(ptr.index());
        self.version += 1;
        Some((node.key, node.value))
    }

    /// Moves `ptr` to the newest position when the map is in access order,
    /// counting the change when the trail actually moved.
    fn touch(&mut self, ptr: Ptr) {
        if self.order == OrderMode::Access && self.trail.move_to_tail(&mut self.nodes, ptr) {
            self.version += 1;
        }
    }

    /// Asks the policy about the current eldest entry and removes it when
    /// told to. Called after every insertion of a new key.
    fn enforce_policy(&mut self)
    where
        P: EvictionPolicy<K, V>,
    {
        let Some(head) = self.trail.head() else {
            return;
        };
        let len = self.table.len();
        let node = &self.nodes[head.index()];
        if self.policy.should_evict(len, (&node.key, &node.value)) {
            self.remove_ptr(head);
        }
    }

    /// Validates the trail against the table. Expensive; debugging only.
    #[cfg(all(debug_assertions, feature = "internal-debugging"))]
    #[doc(hidden)]
    pub fn debug_validate(&self) {
        let Some(head) = self.trail.head() else {
            assert_eq!(self.trail.tail(), None, "tail set on empty trail");
            assert_eq!(self.table.len(), 0, "table entries without trail");
            return;
        };
        let tail = self.trail.tail().expect("head set without tail");
        assert!(self.nodes[head.index()].prev.is_null(), "head has a prev link");
        assert!(self.nodes[tail.index()].next.is_null(), "tail has a next link");

        let mut count = 0;
        let mut prev = None;
        let mut cursor = Some(head);
        while let Some(ptr) = cursor {
            count += 1;
            assert!(count <= self.table.len(), "trail longer than table");
            let node = &self.nodes[ptr.index()];
            assert_eq!(node.prev.check(), prev, "broken backlink at {ptr:?}");
            prev = Some(ptr);
            cursor = node.next.check();
        }
        assert_eq!(prev, Some(tail), "trail does not end at tail");
        assert_eq!(count, self.table.len(), "trail shorter than table");
        assert_eq!(count, self.nodes.len(), "slab holds unlinked nodes");
    }
}

impl<K: Hash + Eq, V, P, S: BuildHasher> TrailMap<K, V, P, S> {
    fn find_ptr(&self, key: &K) -> Option<Ptr> {
        let hash = self.hasher.hash_one(key);
        self.table
            .find(hash, |p| self.nodes[p.index()].key == *key)
            .copied()
    }

    /// Returns a reference to the value for `key`, counting the lookup as an
    /// access.
    ///
    /// In [`OrderMode::Access`] a hit moves the entry to the newest
    /// position; in [`OrderMode::Insertion`] the trail is untouched. Use
    /// [`peek`](Self::peek) to look without refreshing.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let ptr = self.find_ptr(key)?;
        self.touch(ptr);
        Some(&self.nodes[ptr.index()].value)
    }

    /// Returns a mutable reference to the value for `key`, counting the
    /// lookup as an access.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "a");
    /// if let Some(v) = map.get_mut(&1) {
    ///     *v = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let ptr = self.find_ptr(key)?;
        self.touch(ptr);
        Some(&mut self.nodes[ptr.index()].value)
    }

    /// Returns a reference to the value for `key` without counting an
    /// access. The trail never changes.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let ptr = self.find_ptr(key)?;
        Some(&self.nodes[ptr.index()].value)
    }

    /// Returns a mutable reference to the value for `key` without counting
    /// an access.
    pub fn peek_mut(&mut self, key: &K) -> Option<&mut V> {
        let ptr = self.find_ptr(key)?;
        Some(&mut self.nodes[ptr.index()].value)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_ptr(key).is_some()
    }

    /// Removes `key` from the map, returning its value.
    ///
    /// The table slot and the trail link go in one step; a missing key
    /// changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key` from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hasher.hash_one(key);
        let ptr = match self
            .table
            .find_entry(hash, |p| self.nodes[p.index()].key == *key)
        {
            Ok(occupied) => {
                let ptr = *occupied.get();
                occupied.remove();
                ptr
            }
            Err(_) => return None,
        };
        self.trail.unlink(&mut self.nodes, ptr);
        let node = self.nodes.remove(ptr.index());
        self.version += 1;
        Some((node.key, node.value))
    }
}

impl<K: Hash + Eq, V, P: EvictionPolicy<K, V>, S: BuildHasher> TrailMap<K, V, P, S> {
    /// Inserts a key-value pair, returning the previous value if the key was
    /// present.
    ///
    /// A new key is linked at the newest position and the eviction policy is
    /// then consulted about the eldest entry. An existing key has its value
    /// replaced in place; in [`OrderMode::Access`] it also moves to the
    /// newest position, and the policy is *not* consulted.
    ///
    /// Only under a degenerate policy (one that evicts regardless of
    /// length) can the entry just inserted be its own eviction victim, in
    /// which case the map ends up without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash_one(&key);
        match self.table.entry(
            hash,
            |p| self.nodes[p.index()].key == key,
            |p| self.nodes[p.index()].hash,
        ) {
            hash_table::Entry::Occupied(occupied) => {
                let ptr = *occupied.get();
                let old = mem::replace(&mut self.nodes[ptr.index()].value, value);
                self.touch(ptr);
                Some(old)
            }
            hash_table::Entry::Vacant(vacant) => {
                let ptr = Ptr::from_index(self.nodes.insert(Node {
                    key,
                    value,
                    hash,
                    prev: Ptr::null(),
                    next: Ptr::null(),
                }));
                vacant.insert(ptr);
                self.trail.link_tail(&mut self.nodes, ptr);
                self.version += 1;
                self.enforce_policy();
                None
            }
        }
    }

    /// Returns the value for `key`, inserting one built by `or_insert` when
    /// the key is absent.
    ///
    /// A hit counts as an access; a miss counts as an insertion and
    /// consults the eviction policy.
    ///
    /// # Panics
    ///
    /// Panics if a degenerate policy evicts the entry that was just
    /// inserted, since there is then no value to return.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::TrailMap;
    ///
    /// let mut map = TrailMap::new();
    /// let value = map.get_or_insert_with(1, |&key| format!("value_{key}"));
    /// assert_eq!(value, "value_1");
    ///
    /// // The key exists now, so the closure is not called again.
    /// let value = map.get_or_insert_with(1, |_| unreachable!());
    /// assert_eq!(value, "value_1");
    /// ```
    pub fn get_or_insert_with(&mut self, key: K, or_insert: impl FnOnce(&K) -> V) -> &V {
        self.get_or_insert_with_mut(key, or_insert)
    }

    /// Mutable variant of [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// # Panics
    ///
    /// Panics if a degenerate policy evicts the entry that was just
    /// inserted.
    pub fn get_or_insert_with_mut(&mut self, key: K, or_insert: impl FnOnce(&K) -> V) -> &mut V {
        let hash = self.hasher.hash_one(&key);
        let ptr = match self.table.entry(
            hash,
            |p| self.nodes[p.index()].key == key,
            |p| self.nodes[p.index()].hash,
        ) {
            hash_table::Entry::Occupied(occupied) => {
                let ptr = *occupied.get();
                self.touch(ptr);
                ptr
            }
            hash_table::Entry::Vacant(vacant) => {
                let value = or_insert(&key);
                let ptr = Ptr::from_index(self.nodes.insert(Node {
                    key,
                    value,
                    hash,
                    prev: Ptr::null(),
                    next: Ptr::null(),
                }));
                vacant.insert(ptr);
                self.trail.link_tail(&mut self.nodes, ptr);
                self.version += 1;
                self.enforce_policy();
                ptr
            }
        };
        match self.nodes.get_mut(ptr.index()) {
            Some(node) => &mut node.value,
            None => evicted_on_insert(),
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, P, S> std::fmt::Debug for TrailMap<K, V, P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone, V: Clone, P: Clone, S: Clone> Clone for TrailMap<K, V, P, S> {
    fn clone(&self) -> Self {
        // Handles are slab indices, so cloning the slab keeps every link and
        // table slot valid in the clone.
        TrailMap {
            nodes: self.nodes.clone(),
            table: self.table.clone(),
            trail: self.trail,
            hasher: self.hasher.clone(),
            order: self.order,
            policy: self.policy.clone(),
            version: self.version,
        }
    }
}

impl<K: Hash + Eq, V, P: EvictionPolicy<K, V>, S: BuildHasher> Extend<(K, V)>
    for TrailMap<K, V, P, S>
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, P, S> FromIterator<(K, V)> for TrailMap<K, V, P, S>
where
    K: Hash + Eq,
    P: EvictionPolicy<K, V> + Default,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, P, S> IntoIterator for &'a TrailMap<K, V, P, S> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, P, S> IntoIterator for TrailMap<K, V, P, S> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            fwd: self.trail.head_ptr(),
            rev: self.trail.tail_ptr(),
            remaining: self.table.len(),
            nodes: self.nodes,
        }
    }
}
