#![forbid(unsafe_code)]

//! Bordered container chrome for the connector columns.

use relink_core::geometry::Rect;
use relink_render::{Buffer, Cell};
use relink_style::Style;

use crate::borders::{BorderType, Borders};
use crate::{Widget, draw_label};

/// A block draws borders and an optional title and yields its inner area to
/// whatever it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_type: BorderType,
    border_style: Style,
    title: Option<&'a str>,
    style: Style,
}

impl<'a> Block<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with all four borders.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The area remaining inside the borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;
        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn edge(&self, c: char) -> Cell {
        Cell::styled(c, self.border_style)
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style);

        let set = self.border_type.to_border_set();
        let right = area.right().saturating_sub(1);
        let bottom = area.bottom().saturating_sub(1);

        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.edge(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                buf.set(x, bottom, self.edge(set.horizontal));
            }
        }
        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.edge(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                buf.set(right, y, self.edge(set.vertical));
            }
        }

        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            buf.set(area.x, area.y, self.edge(set.top_left));
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            buf.set(right, area.y, self.edge(set.top_right));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            buf.set(area.x, bottom, self.edge(set.bottom_left));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            buf.set(right, bottom, self.edge(set.bottom_right));
        }

        if let Some(title) = self.title
            && self.borders.contains(Borders::TOP)
            && area.width > 4
        {
            draw_label(
                buf,
                area.x + 2,
                area.y,
                title,
                self.border_style,
                area.width - 4,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::Widget;
    use crate::borders::Borders;
    use relink_core::geometry::Rect;
    use relink_render::Buffer;

    #[test]
    fn bordered_block_draws_corners() {
        let mut buf = Buffer::new(5, 3);
        Block::bordered().render(Rect::new(0, 0, 5, 3), &mut buf);
        assert_eq!(buf.to_text(), vec!["┌───┐", "│   │", "└───┘"]);
    }

    #[test]
    fn inner_shrinks_by_enabled_borders_only() {
        let block = Block::new().borders(Borders::LEFT | Borders::TOP);
        let inner = block.inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 9, 4));
    }

    #[test]
    fn title_renders_on_top_border() {
        let mut buf = Buffer::new(10, 3);
        Block::bordered()
            .title("ward")
            .render(Rect::new(0, 0, 10, 3), &mut buf);
        let top = buf.to_text().remove(0);
        assert!(top.contains("ward"));
    }

    #[test]
    fn empty_area_is_a_no_op() {
        let mut buf = Buffer::new(4, 2);
        Block::bordered().render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf.to_text(), vec!["    ", "    "]);
    }
}
