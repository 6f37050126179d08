#![forbid(unsafe_code)]

//! Connector widgets for Relink.
//!
//! The centerpiece is [`Connector`]/[`ConnectorState`]: an interactive
//! widget for proposing, visualizing, and atomically committing a batch of
//! pairwise swaps between two rosters. Supporting modules hold the data
//! model ([`item`], [`roster`]), the pairing state machine ([`session`]),
//! the pure commit engine ([`commit`]), the anchor registry ([`anchor`]),
//! and the gutter link routing ([`links`]).

pub mod anchor;
pub mod block;
pub mod borders;
pub mod commit;
pub mod connector;
pub mod item;
pub mod links;
pub mod roster;
pub mod session;

pub use anchor::AnchorMap;
pub use block::Block;
pub use borders::{BorderType, Borders};
pub use connector::{Connector, ConnectorState, MouseResult};
pub use item::{Item, ItemId, Side};
pub use roster::Rosters;
pub use session::{Arm, Pairing, PairingSession, SelectOutcome};

use relink_core::geometry::Rect;
use relink_render::Buffer;
use relink_style::Style;
use unicode_width::UnicodeWidthChar;

/// A `Widget` renders itself into a buffer within a given area.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Draw `text` at `(x, y)` clipped to `max_width` display columns, with an
/// ellipsis when it does not fit. Returns the number of columns written.
pub(crate) fn draw_label(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_width: u16,
) -> u16 {
    if max_width == 0 {
        return 0;
    }

    let total: u32 = text.chars().map(|c| c.width().unwrap_or(0) as u32).sum();
    let truncate = total > u32::from(max_width);
    let budget = if truncate { max_width.saturating_sub(1) } else { max_width };

    let mut written = 0u16;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if written + w > budget {
            break;
        }
        buf.set_string(x + written, y, ch.encode_utf8(&mut [0u8; 4]), style, w);
        written += w;
    }
    if truncate && written < max_width {
        buf.set_string(x + written, y, "…", style, 1);
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::draw_label;
    use relink_render::Buffer;
    use relink_style::Style;

    #[test]
    fn short_label_fits() {
        let mut buf = Buffer::new(8, 1);
        let w = draw_label(&mut buf, 0, 0, "abc", Style::new(), 8);
        assert_eq!(w, 3);
        assert_eq!(buf.to_text(), vec!["abc     "]);
    }

    #[test]
    fn long_label_gets_ellipsis() {
        let mut buf = Buffer::new(5, 1);
        let w = draw_label(&mut buf, 0, 0, "abcdefgh", Style::new(), 5);
        assert_eq!(w, 5);
        assert_eq!(buf.to_text(), vec!["abcd…"]);
    }

    #[test]
    fn wide_chars_count_double() {
        let mut buf = Buffer::new(6, 1);
        // "漢" is two columns wide; only two fit in a budget of 5 with
        // room left for the ellipsis.
        draw_label(&mut buf, 0, 0, "漢漢漢", Style::new(), 5);
        let text = buf.to_text().remove(0);
        assert!(text.contains('…'));
    }

    #[test]
    fn zero_width_budget_writes_nothing() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(draw_label(&mut buf, 0, 0, "abc", Style::new(), 0), 0);
        assert_eq!(buf.to_text(), vec!["    "]);
    }
}
