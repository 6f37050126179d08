#![forbid(unsafe_code)]

//! Gutter routing for connector links.
//!
//! Each pending pairing is routed through the gutter between the two
//! columns as an elbow path: out of the left anchor, along a vertical lane,
//! into the right anchor. Lanes rotate across the gutter interior so
//! parallel links overlap as little as the width allows; where they do
//! cross, the path rasterizer merges the strokes into junctions.

use relink_core::geometry::{Point, Rect};

/// The x column of the vertical lane for the `lane`-th link.
///
/// Lanes cycle through the gutter interior (excluding the two columns that
/// butt against the rosters). Degenerate gutters collapse every lane onto
/// the single available column.
#[must_use]
pub fn lane_x(gutter: Rect, lane: usize) -> u16 {
    if gutter.width <= 2 {
        return gutter.x;
    }
    let usable = (gutter.width - 2) as usize;
    gutter.x + 1 + (lane % usable) as u16
}

/// Waypoints for a pairing's elbow path from `from` (left anchor) to `to`
/// (right anchor) through the given lane.
#[must_use]
pub fn route(gutter: Rect, from: Point, to: Point, lane: usize) -> Vec<Point> {
    let x = lane_x(gutter, lane);
    vec![
        from,
        Point::new(x, from.y),
        Point::new(x, to.y),
        to,
    ]
}
