#![forbid(unsafe_code)]

//! The pairwise reassignment connector widget.
//!
//! Two roster columns with a gutter between them. Clicking (or keyboard-
//! selecting) an item arms it; selecting an item on the opposite side
//! resolves the two into a pending pairing, drawn as an elbow link through
//! the gutter. Pending pairings commit as one batch of position-preserving
//! swaps, or can be removed individually or cleared.
//!
//! Row markers: `◆` armed, `◌` claimed by a pending pairing, `·` otherwise.

use relink_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use relink_core::geometry::{Point, Rect};
use relink_render::{Buffer, path};
use relink_style::{Color, Style};

use crate::anchor::AnchorMap;
use crate::block::Block;
use crate::commit::apply_pairings;
use crate::item::{Item, ItemId, Side};
use crate::links;
use crate::roster::Rosters;
use crate::session::{Arm, Pairing, PairingSession, SelectOutcome};
use crate::{StatefulWidget, Widget, draw_label};

/// What a mouse event did to the connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event did not change anything.
    Ignored,

    /// An item became armed.
    Armed(Side, ItemId),

    /// A pairing was resolved.
    Paired(Pairing),

    /// A click away from the rosters dropped the pending arm.
    Disarmed,

    /// Hover or the rubber-band endpoint moved; a redraw is warranted.
    HoverChanged,

    /// A roster scrolled.
    Scrolled,
}

/// Hit rectangle of one rendered roster row.
#[derive(Debug, Clone, Copy)]
struct RowHit {
    area: Rect,
    side: Side,
    id: ItemId,
    index: usize,
}

/// Mutable state for a [`Connector`].
///
/// Owns the rosters, the pairing session, cursor/hover/scroll bookkeeping,
/// and the geometry the last render pass recorded (anchor registry and row
/// hit rectangles). Input handling reads that recorded geometry as plain
/// data; nothing here queries the presentation layer.
#[derive(Debug, Clone)]
pub struct ConnectorState {
    rosters: Rosters,
    session: PairingSession,
    focus: Side,
    cursors: [usize; 2],
    offsets: [usize; 2],
    hovered: Option<(Side, usize)>,
    /// Transient rubber-band endpoint; set only while armed.
    pointer: Option<Point>,
    /// Whether the next render should drag the viewport to the cursor.
    scroll_into_view: bool,
    anchors: AnchorMap,
    rows: Vec<RowHit>,
    columns: [Rect; 2],
}

impl ConnectorState {
    /// Seed the connector with the two rosters.
    #[must_use]
    pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        Self {
            rosters: Rosters::new(left, right),
            session: PairingSession::new(),
            focus: Side::Left,
            cursors: [0; 2],
            offsets: [0; 2],
            hovered: None,
            pointer: None,
            scroll_into_view: false,
            anchors: AnchorMap::new(),
            rows: Vec::new(),
            columns: [Rect::default(); 2],
        }
    }

    /// The collection store.
    #[must_use]
    pub fn rosters(&self) -> &Rosters {
        &self.rosters
    }

    /// The pairing session.
    #[must_use]
    pub fn session(&self) -> &PairingSession {
        &self.session
    }

    /// The anchor registry recorded by the last render pass.
    #[must_use]
    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    /// The side keyboard input acts on.
    #[must_use]
    pub const fn focus(&self) -> Side {
        self.focus
    }

    /// Move keyboard focus to a side.
    pub fn focus_side(&mut self, side: Side) {
        self.focus = side;
    }

    /// Cursor index on a side.
    #[must_use]
    pub fn cursor(&self, side: Side) -> usize {
        self.cursors[side.index()]
    }

    /// Scroll offset of a side.
    #[must_use]
    pub fn offset(&self, side: Side) -> usize {
        self.offsets[side.index()]
    }

    /// Currently hovered row, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<(Side, usize)> {
        self.hovered
    }

    /// Select an item by side and id: arm, re-arm, or resolve a pairing.
    ///
    /// Unknown and claimed ids are ignored (see [`PairingSession::select`]).
    pub fn select(&mut self, side: Side, id: ItemId) -> SelectOutcome {
        let outcome = self.session.select(side, id, &self.rosters);
        if outcome == SelectOutcome::Paired {
            self.pointer = None;
        }
        outcome
    }

    /// Drop the pending arm, if any.
    pub fn disarm(&mut self) {
        self.session.disarm();
        self.pointer = None;
    }

    /// Remove one pending pairing by position.
    pub fn remove_pairing(&mut self, index: usize) -> Option<Pairing> {
        self.session.remove(index)
    }

    /// Clear every pending pairing and return to idle.
    pub fn clear(&mut self) {
        self.session.clear();
        self.pointer = None;
    }

    /// Apply all pending pairings as one batch of swaps.
    ///
    /// Inert when nothing is pending (returns `false`). Otherwise both
    /// rosters are replaced atomically, the session resets to idle with an
    /// empty pairing set, and `true` is returned.
    pub fn commit(&mut self) -> bool {
        if self.session.is_empty() {
            return false;
        }
        let (left, right) = apply_pairings(
            self.session.pairings(),
            self.rosters.side(Side::Left),
            self.rosters.side(Side::Right),
        );
        self.rosters.replace_all(left, right);
        self.session.clear();
        self.pointer = None;
        true
    }

    /// Scroll a side up by `lines`.
    pub fn scroll_up(&mut self, side: Side, lines: usize) {
        let offset = &mut self.offsets[side.index()];
        *offset = offset.saturating_sub(lines);
    }

    /// Scroll a side down by `lines`, clamped so the last item can still
    /// reach the top of the viewport.
    pub fn scroll_down(&mut self, side: Side, lines: usize) {
        let max = self.rosters.len(side).saturating_sub(1);
        let offset = &mut self.offsets[side.index()];
        *offset = offset.saturating_add(lines).min(max);
    }

    fn row_at(&self, p: Point) -> Option<RowHit> {
        self.rows.iter().copied().find(|row| row.area.contains(p))
    }

    fn column_at(&self, p: Point) -> Option<Side> {
        if self.columns[Side::Left.index()].contains(p) {
            Some(Side::Left)
        } else if self.columns[Side::Right.index()].contains(p) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Handle a mouse event against the geometry of the last render pass.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> MouseResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(hit) = self.row_at(event.point()) {
                    self.focus = hit.side;
                    self.cursors[hit.side.index()] = hit.index;
                    return match self.select(hit.side, hit.id) {
                        SelectOutcome::Armed => MouseResult::Armed(hit.side, hit.id),
                        SelectOutcome::Paired => self
                            .session
                            .pairings()
                            .last()
                            .copied()
                            .map_or(MouseResult::Ignored, MouseResult::Paired),
                        SelectOutcome::Ignored => MouseResult::Ignored,
                    };
                }
                // A click away from both rosters drops the pending arm.
                if self.session.arm() != Arm::Idle {
                    self.disarm();
                    return MouseResult::Disarmed;
                }
                MouseResult::Ignored
            }
            MouseEventKind::Moved => {
                let hover = self.row_at(event.point()).map(|hit| (hit.side, hit.index));
                let hover_changed = hover != self.hovered;
                self.hovered = hover;

                let mut rubber_moved = false;
                if self.session.arm() != Arm::Idle {
                    let p = Some(event.point());
                    rubber_moved = self.pointer != p;
                    self.pointer = p;
                }

                if hover_changed || rubber_moved {
                    MouseResult::HoverChanged
                } else {
                    MouseResult::Ignored
                }
            }
            MouseEventKind::ScrollUp => {
                let side = self.column_at(event.point()).unwrap_or(self.focus);
                self.scroll_up(side, 3);
                MouseResult::Scrolled
            }
            MouseEventKind::ScrollDown => {
                let side = self.column_at(event.point()).unwrap_or(self.focus);
                self.scroll_down(side, 3);
                MouseResult::Scrolled
            }
            _ => MouseResult::Ignored,
        }
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.rosters.len(self.focus);
        if len == 0 {
            return false;
        }
        let cursor = &mut self.cursors[self.focus.index()];
        let next = (*cursor as isize + delta).clamp(0, len as isize - 1) as usize;
        if next == *cursor {
            return false;
        }
        *cursor = next;
        self.scroll_into_view = true;
        true
    }

    fn select_cursor(&mut self) -> bool {
        let side = self.focus;
        let index = self.cursors[side.index()];
        let Some(item) = self.rosters.side(side).get(index) else {
            return false;
        };
        let id = item.id;
        self.select(side, id) != SelectOutcome::Ignored
    }

    /// Handle a key event. Returns whether anything changed.
    ///
    /// Bindings: `Up`/`Down`/`k`/`j` move the cursor, `Home`/`End` jump,
    /// `Tab`/`BackTab`/`Left`/`Right` switch sides, `Enter`/space selects,
    /// `Esc` disarms, `u` removes the newest pairing, `c` clears.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home => {
                let changed = self.cursors[self.focus.index()] != 0;
                self.cursors[self.focus.index()] = 0;
                self.scroll_into_view |= changed;
                changed
            }
            KeyCode::End => {
                let last = self.rosters.len(self.focus).saturating_sub(1);
                let changed = self.cursors[self.focus.index()] != last;
                self.cursors[self.focus.index()] = last;
                self.scroll_into_view |= changed;
                changed
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.opposite();
                true
            }
            KeyCode::Left => {
                let changed = self.focus != Side::Left;
                self.focus = Side::Left;
                changed
            }
            KeyCode::Right => {
                let changed = self.focus != Side::Right;
                self.focus = Side::Right;
                changed
            }
            KeyCode::Enter => self.select_cursor(),
            KeyCode::Char(' ') => self.select_cursor(),
            KeyCode::Escape => {
                if self.session.arm() == Arm::Idle {
                    return false;
                }
                self.disarm();
                true
            }
            KeyCode::Char('u') => {
                let len = self.session.len();
                if len == 0 {
                    return false;
                }
                self.remove_pairing(len - 1).is_some()
            }
            KeyCode::Char('c') => {
                if self.session.is_empty() && self.session.arm() == Arm::Idle {
                    return false;
                }
                self.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(feature = "state-persistence")]
mod snapshot {
    use super::ConnectorState;
    use crate::item::Side;
    use crate::session::{Arm, Pairing, PairingSession};

    /// Serializable capture of connector state (pairings, arm, focus,
    /// cursors, scroll offsets). Geometry is never captured; it is rebuilt
    /// by the next render pass.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct ConnectorSnapshot {
        pub pairings: Vec<Pairing>,
        pub arm: Arm,
        pub focus: Side,
        pub cursors: [usize; 2],
        pub offsets: [usize; 2],
    }

    impl ConnectorState {
        /// Capture the restorable parts of the state.
        #[must_use]
        pub fn snapshot(&self) -> ConnectorSnapshot {
            ConnectorSnapshot {
                pairings: self.session.pairings().to_vec(),
                arm: self.session.arm(),
                focus: self.focus,
                cursors: self.cursors,
                offsets: self.offsets,
            }
        }

        /// Restore a snapshot against the live rosters.
        ///
        /// Pairings and the arm are replayed through the session's own
        /// `select`, so entries whose ids no longer exist (or that would
        /// double-claim an endpoint) drop out silently. Cursors and offsets
        /// clamp to the current roster lengths.
        pub fn restore(&mut self, snapshot: ConnectorSnapshot) {
            let mut session = PairingSession::new();
            for pairing in &snapshot.pairings {
                session.select(Side::Left, pairing.left, &self.rosters);
                session.select(Side::Right, pairing.right, &self.rosters);
                // A half-resolved replay leaves an arm behind; drop it so
                // the next pairing starts from idle.
                session.disarm();
            }
            if let Some((side, id)) = snapshot.arm.armed() {
                session.select(side, id, &self.rosters);
            }
            self.session = session;
            self.focus = snapshot.focus;
            for side in [Side::Left, Side::Right] {
                let max = self.rosters.len(side).saturating_sub(1);
                self.cursors[side.index()] = snapshot.cursors[side.index()].min(max);
                self.offsets[side.index()] = snapshot.offsets[side.index()].min(max);
            }
            self.pointer = None;
            self.hovered = None;
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use snapshot::ConnectorSnapshot;

/// The connector widget: configuration and rendering.
///
/// Built with the usual builder methods; all state lives in
/// [`ConnectorState`].
#[derive(Debug, Clone, Default)]
pub struct Connector<'a> {
    left_block: Option<Block<'a>>,
    right_block: Option<Block<'a>>,
    style: Style,
    hover_style: Style,
    armed_style: Style,
    claimed_style: Style,
    cursor_style: Style,
    link_style: Style,
    rubber_style: Style,
    category_colors: Vec<(&'a str, Color)>,
    gutter_width: u16,
}

impl<'a> Connector<'a> {
    /// A connector with default styling and an 8-column gutter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gutter_width: 8,
            ..Self::default()
        }
    }

    /// Chrome around the left column.
    #[must_use]
    pub fn left_block(mut self, block: Block<'a>) -> Self {
        self.left_block = Some(block);
        self
    }

    /// Chrome around the right column.
    #[must_use]
    pub fn right_block(mut self, block: Block<'a>) -> Self {
        self.right_block = Some(block);
        self
    }

    /// Base style for the whole widget area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style patched onto the hovered row.
    #[must_use]
    pub fn hover_style(mut self, style: Style) -> Self {
        self.hover_style = style;
        self
    }

    /// Style patched onto the armed row.
    #[must_use]
    pub fn armed_style(mut self, style: Style) -> Self {
        self.armed_style = style;
        self
    }

    /// Style patched onto rows claimed by a pending pairing.
    #[must_use]
    pub fn claimed_style(mut self, style: Style) -> Self {
        self.claimed_style = style;
        self
    }

    /// Style patched onto the focused side's cursor row.
    #[must_use]
    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    /// Style for committed link lines.
    #[must_use]
    pub fn link_style(mut self, style: Style) -> Self {
        self.link_style = style;
        self
    }

    /// Style for the rubber-band line while armed.
    #[must_use]
    pub fn rubber_style(mut self, style: Style) -> Self {
        self.rubber_style = style;
        self
    }

    /// Accent color for a category tag's row marker.
    #[must_use]
    pub fn category_color(mut self, category: &'a str, color: Color) -> Self {
        self.category_colors.push((category, color));
        self
    }

    /// Width of the gutter between the columns.
    #[must_use]
    pub fn gutter_width(mut self, width: u16) -> Self {
        self.gutter_width = width;
        self
    }

    fn accent(&self, category: &str) -> Option<Color> {
        self.category_colors
            .iter()
            .find(|(tag, _)| *tag == category)
            .map(|(_, color)| *color)
    }

    fn render_side(
        &self,
        side: Side,
        column: Rect,
        gutter: Rect,
        buf: &mut Buffer,
        state: &mut ConnectorState,
    ) {
        let block = match side {
            Side::Left => &self.left_block,
            Side::Right => &self.right_block,
        };
        let inner = match block {
            Some(block) => {
                block.render(column, buf);
                block.inner(column)
            }
            None => column,
        };
        if inner.is_empty() {
            return;
        }

        let len = state.rosters.len(side);
        if len == 0 {
            return;
        }
        let visible = inner.height as usize;

        // Clamp the cursor; drag the viewport to it only when a cursor
        // move requested it, so manual scrolling stays where the user put
        // it.
        let cursor = state.cursors[side.index()].min(len - 1);
        state.cursors[side.index()] = cursor;
        let mut offset = state.offsets[side.index()].min(len - 1);
        if state.scroll_into_view && state.focus == side {
            if cursor < offset {
                offset = cursor;
            }
            if cursor >= offset + visible {
                offset = cursor + 1 - visible;
            }
        }
        state.offsets[side.index()] = offset;

        let armed = state.session.arm().armed();
        let anchor_x = match side {
            Side::Left => gutter.x,
            Side::Right => gutter.right().saturating_sub(1),
        };

        for (row, index) in (offset..len.min(offset + visible)).enumerate() {
            let item = &state.rosters.side(side)[index];
            let row_area = inner.row(row as u16);
            let y = row_area.y;

            let is_armed = armed == Some((side, item.id));
            let is_claimed = state.session.is_claimed(side, item.id);
            let is_hovered = state.hovered == Some((side, index));
            let is_cursor = state.focus == side && index == cursor;

            let mut row_style = Style::new();
            if is_claimed {
                row_style = row_style.patch(self.claimed_style);
            }
            if is_hovered {
                row_style = row_style.patch(self.hover_style);
            }
            if is_armed {
                row_style = row_style.patch(self.armed_style);
            }
            if is_cursor {
                row_style = row_style.patch(self.cursor_style);
            }

            let marker = if is_armed {
                '◆'
            } else if is_claimed {
                '◌'
            } else {
                '·'
            };
            let mut marker_style = row_style;
            if let Some(accent) = self.accent(&item.category) {
                marker_style = marker_style.patch(Style::new().fg(accent));
            }
            buf.set_string(
                inner.x,
                y,
                marker.encode_utf8(&mut [0u8; 4]),
                marker_style,
                1,
            );

            // Name on the left, value right-aligned when the row is wide
            // enough to show both.
            let value = item.value.to_string();
            let value_width = value.len() as u16;
            let label_x = inner.x + 2;
            let label_budget = inner.width.saturating_sub(2);
            if label_budget > value_width + 3 {
                draw_label(
                    buf,
                    label_x,
                    y,
                    &item.name,
                    row_style,
                    label_budget - value_width - 1,
                );
                buf.set_string(
                    inner.x + inner.width - value_width,
                    y,
                    &value,
                    row_style,
                    value_width,
                );
            } else {
                draw_label(buf, label_x, y, &item.name, row_style, label_budget);
            }

            let id = item.id;
            state.anchors.record(side, id, Point::new(anchor_x, y));
            state.rows.push(RowHit {
                area: row_area,
                side,
                id,
                index,
            });
        }
    }

    fn render_links(&self, gutter: Rect, buf: &mut Buffer, state: &ConnectorState) {
        if gutter.is_empty() {
            return;
        }

        for (lane, pairing) in state.session.pairings().iter().enumerate() {
            let (Some(from), Some(to)) = (
                state.anchors.get(Side::Left, pairing.left),
                state.anchors.get(Side::Right, pairing.right),
            ) else {
                // An endpoint is scrolled out of view; the link reappears
                // once both rows are visible again.
                continue;
            };
            let waypoints = links::route(gutter, from, to, lane);
            path::draw_path(buf, &waypoints, self.link_style, false);
        }

        if let Some((side, id)) = state.session.arm().armed()
            && let (Some(anchor), Some(pointer)) = (state.anchors.get(side, id), state.pointer)
        {
            path::draw_path(buf, &[anchor, pointer], self.rubber_style, true);
        }
    }
}

impl StatefulWidget for Connector<'_> {
    type State = ConnectorState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut ConnectorState) {
        state.rows.clear();
        state.anchors.clear();
        state.columns = [Rect::default(); 2];
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style);

        let gutter_width = self.gutter_width.clamp(1, area.width);
        let column_width = area.width.saturating_sub(gutter_width) / 2;
        let left = Rect::new(area.x, area.y, column_width, area.height);
        let gutter = Rect::new(left.right(), area.y, gutter_width, area.height);
        let right = Rect::new(
            gutter.right(),
            area.y,
            area.width
                .saturating_sub(column_width)
                .saturating_sub(gutter_width),
            area.height,
        );
        state.columns = [left, right];

        self.render_side(Side::Left, left, gutter, buf, state);
        self.render_side(Side::Right, right, gutter, buf, state);
        state.scroll_into_view = false;
        self.render_links(gutter, buf, state);
    }
}
