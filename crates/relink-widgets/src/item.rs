#![forbid(unsafe_code)]

//! The connector's data model: items and sides.

use std::fmt;

/// Stable identifier of a roster item.
///
/// Unique per roster at seed time and never reused; an item keeps its id when
/// a commit relocates it to the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// One of the connector's two rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Stable array index (`Left` = 0, `Right` = 1) for per-side storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A reassignable roster entry.
///
/// `value` is opaque to the connector; `category` drives visual grouping
/// only and places no constraint on pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identity.
    pub id: ItemId,

    /// Display label.
    pub name: String,

    /// Numeric payload carried through swaps untouched.
    pub value: i64,

    /// Short grouping tag (coloring only).
    pub category: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        value: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemId, Side};

    #[test]
    fn side_opposite_involutes() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite().opposite(), Side::Right);
    }

    #[test]
    fn side_indices_are_distinct() {
        assert_ne!(Side::Left.index(), Side::Right.index());
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId(42).to_string(), "#42");
    }

    #[test]
    fn item_constructor_converts() {
        let item = Item::new(7u64, "North Clinic", 120, "clinic");
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.name, "North Clinic");
    }
}
