#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod iter;
mod map;
mod policy;
mod trail;
mod walk;

pub use iter::IntoIter;
pub use iter::Iter;
pub use map::TrailMap;
pub use policy::Bounded;
pub use policy::PolicyFn;
pub use policy::Unbounded;
pub use walk::Desynced;
pub use walk::Walk;

#[cfg(not(feature = "ahash"))]
type RandomState = std::hash::RandomState;
#[cfg(feature = "ahash")]
type RandomState = ahash::RandomState;

/// The discipline governing where an entry sits on the trail.
///
/// Fixed at construction; it cannot change over a map's lifetime.
///
/// # Examples
///
/// ```
/// use trailmap::OrderMode;
/// use trailmap::TrailMap;
///
/// let mut map = TrailMap::with_order(OrderMode::Access);
/// map.insert("a", 1);
/// map.insert("b", 2);
/// map.insert("c", 3);
///
/// // Reading "a" moves it to the newest position.
/// map.get(&"a");
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["b", "c", "a"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    /// Position is assigned once, on first insertion, and never changes.
    /// Updating an existing key's value does not move it.
    #[default]
    Insertion,
    /// Position is reset to newest on every successful lookup or update of
    /// an existing entry, yielding least-recently-used-first iteration.
    Access,
}

/// Decides whether the eldest entry is discarded after an insertion.
///
/// The map evaluates the policy exactly once immediately after every
/// insertion of a *new* key, passing the post-insertion length and a
/// read-only view of the eldest entry. Updates to existing keys never
/// trigger it. Returning `true` removes the eldest entry through the normal
/// removal path.
///
/// The policy has no access to the map itself, so it cannot reenter it.
///
/// A bounded LRU cache is [`Bounded`] combined with [`OrderMode::Access`];
/// see [`Lru`]. Ad-hoc policies can be written as closures via
/// [`PolicyFn`].
pub trait EvictionPolicy<K, V> {
    /// Returns `true` when the eldest entry should be evicted.
    ///
    /// `len` is the number of entries currently in the map, including the
    /// one that was just inserted.
    fn should_evict(&mut self, len: usize, eldest: (&K, &V)) -> bool;
}

/// A least-recently-used cache: a [`TrailMap`] in [`OrderMode::Access`]
/// bounded by [`Bounded`].
///
/// Reads and updates refresh an entry's position, so the entry evicted when
/// the bound is exceeded is always the least recently used one.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use trailmap::Lru;
///
/// let mut cache = Lru::with_max(NonZeroUsize::new(2).unwrap());
/// cache.insert("a", 1);
/// cache.insert("b", 2);
///
/// cache.get(&"a"); // "b" is now the least recently used
/// cache.insert("c", 3); // evicts "b"
///
/// assert!(cache.contains_key(&"a"));
/// assert!(!cache.contains_key(&"b"));
/// assert!(cache.contains_key(&"c"));
/// ```
pub type Lru<K, V> = TrailMap<K, V, Bounded>;
