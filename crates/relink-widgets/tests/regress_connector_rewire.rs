//! Regression: a second pairing cycle over already-relocated items must
//! resolve against the published rosters, not the seed ones, and chained
//! batches must see their own earlier swaps.

use relink_core::geometry::Rect;
use relink_render::Buffer;
use relink_widgets::item::{Item, ItemId, Side};
use relink_widgets::{Connector, ConnectorState, StatefulWidget};

fn ids(state: &ConnectorState, side: Side) -> Vec<u64> {
    state.rosters().side(side).iter().map(|i| i.id.0).collect()
}

#[test]
fn chained_batch_resolves_against_post_swap_occupancy() {
    let mut state = ConnectorState::new(
        vec![Item::new(1u64, "a", 1, "t"), Item::new(2u64, "b", 2, "t")],
        vec![Item::new(11u64, "c", 3, "t"), Item::new(12u64, "d", 4, "t")],
    );

    // {1,11} relocates 11 into the left roster; committing again with a
    // pairing that names 11 as a *left* endpoint must find it there.
    state.select(Side::Left, ItemId(1));
    state.select(Side::Right, ItemId(11));
    assert!(state.commit());
    assert_eq!(ids(&state, Side::Left), vec![11, 2]);

    state.select(Side::Left, ItemId(11));
    state.select(Side::Right, ItemId(12));
    assert!(state.commit());
    assert_eq!(ids(&state, Side::Left), vec![12, 2]);
    assert_eq!(ids(&state, Side::Right), vec![1, 11]);
}

#[test]
fn rendering_between_cycles_tracks_relocated_items() {
    let mut state = ConnectorState::new(
        vec![Item::new(1u64, "alpha", 1, "t")],
        vec![Item::new(11u64, "omega", 2, "t")],
    );
    let widget = Connector::new();
    let area = Rect::from_size(30, 3);

    let mut buf = Buffer::new(30, 3);
    widget.render(area, &mut buf, &mut state);
    assert!(state.anchors().get(Side::Left, ItemId(1)).is_some());
    assert!(state.anchors().get(Side::Left, ItemId(11)).is_none());

    state.select(Side::Left, ItemId(1));
    state.select(Side::Right, ItemId(11));
    state.commit();

    // After the swap the anchors follow the ids to their new sides.
    let mut buf = Buffer::new(30, 3);
    widget.render(area, &mut buf, &mut state);
    assert!(state.anchors().get(Side::Left, ItemId(11)).is_some());
    assert!(state.anchors().get(Side::Right, ItemId(1)).is_some());
    assert!(state.anchors().get(Side::Left, ItemId(1)).is_none());

    let text = buf.to_text().join("\n");
    assert!(text.contains("omega"));
    assert!(text.contains("alpha"));
}
