#![forbid(unsafe_code)]

//! The anchor registry: screen positions of item endpoints, as data.
//!
//! The render pass records where each visible item's link endpoint landed;
//! link routing and the rubber band read those positions back. Nothing in
//! the state machine ever queries the presentation layer — geometry flows
//! one way, from render into this registry.

use ahash::AHashMap;
use relink_core::geometry::Point;

use crate::item::{ItemId, Side};

/// Registry mapping `(side, item id)` to the item's current link anchor.
///
/// Rebuilt every render pass; items scrolled out of view simply have no
/// entry, which downstream drawing treats as "do not draw".
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    anchors: AHashMap<(Side, ItemId), Point>,
}

impl AnchorMap {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or move) the anchor for an item.
    pub fn record(&mut self, side: Side, id: ItemId, anchor: Point) {
        self.anchors.insert((side, id), anchor);
    }

    /// The anchor for an item, if it is currently on screen.
    #[must_use]
    pub fn get(&self, side: Side, id: ItemId) -> Option<Point> {
        self.anchors.get(&(side, id)).copied()
    }

    /// Forget every recorded anchor (start of a render pass).
    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Number of recorded anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether no anchors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AnchorMap;
    use crate::item::{ItemId, Side};
    use relink_core::geometry::Point;

    #[test]
    fn record_and_get() {
        let mut map = AnchorMap::new();
        map.record(Side::Left, ItemId(3), Point::new(10, 2));
        assert_eq!(map.get(Side::Left, ItemId(3)), Some(Point::new(10, 2)));
        assert_eq!(map.get(Side::Right, ItemId(3)), None);
    }

    #[test]
    fn re_recording_moves_the_anchor() {
        let mut map = AnchorMap::new();
        map.record(Side::Right, ItemId(7), Point::new(1, 1));
        map.record(Side::Right, ItemId(7), Point::new(1, 5));
        assert_eq!(map.get(Side::Right, ItemId(7)), Some(Point::new(1, 5)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut map = AnchorMap::new();
        map.record(Side::Left, ItemId(1), Point::new(0, 0));
        map.clear();
        assert!(map.is_empty());
    }
}
