#![no_main]

use std::num::NonZeroUsize;

use libfuzzer_sys::fuzz_target;
use trailmap::Lru;
use trailmap::OrderMode;
use trailmap::TrailMap;
use trailmap::Unbounded;

#[derive(Debug)]
enum MapOperation {
    Insert(u8, u16),
    Get(u8),
    Peek(u8),
    Remove(u8),
    PopEldest,
    Clear,
    GetOrInsertWith(u8, u16),
    Retain,
}

impl<'a> arbitrary::Arbitrary<'a> for MapOperation {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        match u.int_in_range(0..=7)? {
            0 => Ok(MapOperation::Insert(u.arbitrary()?, u.arbitrary()?)),
            1 => Ok(MapOperation::Get(u.arbitrary()?)),
            2 => Ok(MapOperation::Peek(u.arbitrary()?)),
            3 => Ok(MapOperation::Remove(u.arbitrary()?)),
            4 => Ok(MapOperation::PopEldest),
            5 => Ok(MapOperation::Clear),
            6 => Ok(MapOperation::GetOrInsertWith(u.arbitrary()?, u.arbitrary()?)),
            7 => Ok(MapOperation::Retain),
            _ => unreachable!(),
        }
    }
}

/// Reference model: a vector kept in exactly the order the trail should
/// have, with the same order mode and bound semantics.
struct Model {
    entries: Vec<(u8, u16)>,
    access: bool,
    max: Option<usize>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|&(k, _)| k == key)
    }

    fn touch(&mut self, pos: usize) {
        if self.access {
            let entry = self.entries.remove(pos);
            self.entries.push(entry);
        }
    }

    fn insert(&mut self, key: u8, value: u16) {
        if let Some(pos) = self.position(key) {
            self.entries[pos].1 = value;
            self.touch(pos);
        } else {
            self.entries.push((key, value));
            if let Some(max) = self.max {
                if self.entries.len() > max {
                    self.entries.remove(0);
                }
            }
        }
    }

    fn get(&mut self, key: u8) -> Option<u16> {
        let pos = self.position(key)?;
        let value = self.entries[pos].1;
        self.touch(pos);
        Some(value)
    }

    fn get_or_insert(&mut self, key: u8, value: u16) -> u16 {
        match self.position(key) {
            Some(pos) => {
                let value = self.entries[pos].1;
                self.touch(pos);
                value
            }
            None => {
                self.insert(key, value);
                value
            }
        }
    }

    fn remove(&mut self, key: u8) -> Option<u16> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos).1)
    }

    fn pop_eldest(&mut self) -> Option<(u8, u16)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }
}

fn check<P>(map: &TrailMap<u8, u16, P>, model: &Model) {
    assert_eq!(map.len(), model.entries.len());
    assert_eq!(map.is_empty(), model.entries.is_empty());

    let actual: Vec<(u8, u16)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(actual, model.entries);

    assert_eq!(
        map.eldest().map(|(&k, &v)| (k, v)),
        model.entries.first().copied()
    );
    assert_eq!(
        map.newest().map(|(&k, &v)| (k, v)),
        model.entries.last().copied()
    );

    #[cfg(debug_assertions)]
    map.debug_validate();
}

fn apply<P: trailmap::EvictionPolicy<u8, u16>>(
    map: &mut TrailMap<u8, u16, P>,
    model: &mut Model,
    op: &MapOperation,
) {
    match *op {
        MapOperation::Insert(key, value) => {
            map.insert(key, value);
            model.insert(key, value);
        }
        MapOperation::Get(key) => {
            assert_eq!(map.get(&key).copied(), model.get(key));
        }
        MapOperation::Peek(key) => {
            let expected = model.position(key).map(|pos| model.entries[pos].1);
            assert_eq!(map.peek(&key).copied(), expected);
        }
        MapOperation::Remove(key) => {
            assert_eq!(map.remove(&key), model.remove(key));
        }
        MapOperation::PopEldest => {
            assert_eq!(map.pop_eldest(), model.pop_eldest());
        }
        MapOperation::Clear => {
            map.clear();
            model.entries.clear();
        }
        MapOperation::GetOrInsertWith(key, value) => {
            let actual = *map.get_or_insert_with(key, |_| value);
            assert_eq!(actual, model.get_or_insert(key, value));
        }
        MapOperation::Retain => {
            map.retain(|&k, _| k % 2 == 0);
            model.entries.retain(|&(k, _)| k % 2 == 0);
        }
    }
    check(map, model);
}

fuzz_target!(|data: (u8, Vec<MapOperation>)| {
    let (max_raw, operations) = data;
    let max = NonZeroUsize::new((max_raw % 8).max(1) as usize).unwrap();

    let mut insertion: TrailMap<u8, u16, Unbounded> = TrailMap::new();
    let mut insertion_model = Model {
        entries: Vec::new(),
        access: false,
        max: None,
    };

    let mut access: TrailMap<u8, u16, Unbounded> =
        TrailMap::with_order(OrderMode::Access);
    let mut access_model = Model {
        entries: Vec::new(),
        access: true,
        max: None,
    };

    let mut lru: Lru<u8, u16> = Lru::with_max(max);
    let mut lru_model = Model {
        entries: Vec::new(),
        access: true,
        max: Some(max.get()),
    };

    for op in &operations {
        apply(&mut insertion, &mut insertion_model, op);
        apply(&mut access, &mut access_model, op);
        apply(&mut lru, &mut lru_model, op);
        assert!(lru.len() <= max.get());
    }

    // A full walk agrees with iteration when nothing intervenes.
    let mut walk = insertion.walk();
    let mut walked = Vec::new();
    while let Some((&k, &v)) = walk.advance(&insertion).unwrap() {
        walked.push((k, v));
    }
    assert_eq!(walked, insertion_model.entries);
});
