use crate::map::TrailMap;
use crate::trail::Ptr;

/// The error returned when a [`Walk`] observes that its map changed.
///
/// A structural change (insertion of a new key, any removal, `clear`, or a
/// reorder in access-order mode) bumps the map's version counter; a walk
/// created before the change fails with this error on its next step rather
/// than yielding stale or reordered entries. Detection is a versioned
/// comparison, so it is reliable for every change that actually bumps the
/// counter, but it is a debugging aid, not a synchronization mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Desynced;

impl std::fmt::Display for Desynced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("map was structurally modified during an active walk")
    }
}

impl std::error::Error for Desynced {}

/// A detached traversal over a [`TrailMap`], from eldest to newest.
///
/// A `Walk` holds no borrow of the map; each step takes the map again and
/// re-validates that nothing changed in between. This is what makes the
/// fail-fast contract expressible at all: a borrowing iterator can never
/// observe a structural modification, a walk can.
///
/// Created by [`TrailMap::walk`]; the walk is `Copy`, so a position can be
/// saved and resumed cheaply.
///
/// # Examples
///
/// Removing through the walk is the one mutation that does not
/// desynchronize it:
///
/// ```
/// use trailmap::TrailMap;
///
/// let mut map = TrailMap::new();
/// map.insert(1, "one");
/// map.insert(2, "two");
/// map.insert(3, "three");
///
/// let mut walk = map.walk();
/// while let Some((key, _)) = walk.advance(&map).unwrap() {
///     if *key == 2 {
///         walk.remove_current(&mut map).unwrap();
///     }
/// }
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Walk {
    pub(crate) next: Ptr,
    pub(crate) current: Ptr,
    pub(crate) version: u64,
}

impl Walk {
    /// Yields the next entry, or `Ok(None)` once the walk has passed the
    /// newest entry.
    ///
    /// Fails with [`Desynced`] when the map was structurally modified since
    /// the walk was created or last resynchronized. A matching version
    /// means every handle the walk holds is still live, so a successful
    /// step never observes freed or reordered slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap::Desynced;
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
    /// assert_eq!(walk.advance(&map), Err(Desynced));
    /// ```
    pub fn advance<'m, K, V, P, S>(
        &mut self,
        map: &'m TrailMap<K, V, P, S>,
    ) -> Result<Option<(&'m K, &'m V)>, Desynced> {
        if self.version != map.version {
            return Err(Desynced);
        }
        let Some(ptr) = self.next.check() else {
            self.current = Ptr::null();
            return Ok(None);
        };
        let node = &map.nodes[ptr.index()];
        self.current = ptr;
        self.next = node.next;
        Ok(Some((&node.key, &node.value)))
    }

    /// Re-reads the most recently yielded entry without advancing.
    ///
    /// Returns `Ok(None)` before the first step, after the walk is
    /// exhausted, or after the current entry was removed through the walk.
    pub fn peek_current<'m, K, V, P, S>(
        &self,
        map: &'m TrailMap<K, V, P, S>,
    ) -> Result<Option<(&'m K, &'m V)>, Desynced> {
        if self.version != map.version {
            return Err(Desynced);
        }
        let Some(ptr) = self.current.check() else {
            return Ok(None);
        };
        let node = &map.nodes[ptr.index()];
        Ok(Some((&node.key, &node.value)))
    }

    /// Removes the most recently yielded entry through the walk itself.
    ///
    /// This is the one structural modification that keeps the walk valid:
    /// the walk resynchronizes with the map's new version and continues
    /// with the entry after the removed one. Returns `Ok(None)` when there
    /// is no current entry to remove.
    pub fn remove_current<K, V, P, S>(
        &mut self,
        map: &mut TrailMap<K, V, P, S>,
    ) -> Result<Option<(K, V)>, Desynced> {
        if self.version != map.version {
            return Err(Desynced);
        }
        let Some(ptr) = self.current.check() else {
            return Ok(None);
        };
        self.current = Ptr::null();
        let removed = map.remove_ptr(ptr);
        self.version = map.version;
        Ok(removed)
    }
}
