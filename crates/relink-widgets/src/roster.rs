#![forbid(unsafe_code)]

//! The collection store: two rosters, replaced only as a pair.

use ahash::AHashMap;

use crate::item::{Item, ItemId, Side};

/// Owner of the two ordered rosters.
///
/// The store exposes no per-item mutation; the only write is
/// [`Rosters::replace_all`], which publishes both sides together so no
/// partial update is ever observable. Id lookups go through per-side index
/// maps, rebuilt on every publish.
///
/// Callers guarantee per-side id uniqueness at seed time; a duplicated id
/// resolves to its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rosters {
    sides: [Vec<Item>; 2],
    index: [AHashMap<ItemId, usize>; 2],
}

fn build_index(items: &[Item]) -> AHashMap<ItemId, usize> {
    let mut map = AHashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        map.entry(item.id).or_insert(i);
    }
    map
}

impl Rosters {
    /// Seed both rosters.
    #[must_use]
    pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        let index = [build_index(&left), build_index(&right)];
        Self {
            sides: [left, right],
            index,
        }
    }

    /// The items of one side, in display order.
    #[must_use]
    pub fn side(&self, side: Side) -> &[Item] {
        &self.sides[side.index()]
    }

    /// Number of items on one side.
    #[must_use]
    pub fn len(&self, side: Side) -> usize {
        self.sides[side.index()].len()
    }

    /// Whether one side is empty.
    #[must_use]
    pub fn is_empty(&self, side: Side) -> bool {
        self.sides[side.index()].is_empty()
    }

    /// Look up an item by side and id.
    #[must_use]
    pub fn get(&self, side: Side, id: ItemId) -> Option<&Item> {
        self.position(side, id)
            .map(|i| &self.sides[side.index()][i])
    }

    /// The index of an id within its side, if present.
    #[must_use]
    pub fn position(&self, side: Side, id: ItemId) -> Option<usize> {
        self.index[side.index()].get(&id).copied()
    }

    /// Whether the id exists on the given side.
    #[must_use]
    pub fn contains(&self, side: Side, id: ItemId) -> bool {
        self.index[side.index()].contains_key(&id)
    }

    /// Atomically replace both rosters.
    ///
    /// Both sides swap together or neither does; the index maps are rebuilt
    /// in the same step.
    pub fn replace_all(&mut self, left: Vec<Item>, right: Vec<Item>) {
        self.index = [build_index(&left), build_index(&right)];
        self.sides = [left, right];
    }
}
