#![forbid(unsafe_code)]

//! Row-major cell buffer with clipping writes.

use relink_core::geometry::Rect;
use relink_style::Style;

use crate::cell::Cell;

/// A rectangular grid of [`Cell`]s.
///
/// All writes clip silently against the buffer bounds; widgets never need to
/// bounds-check before drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with default cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area as a rectangle at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read the cell at `(x, y)`, if in bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Mutably borrow the cell at `(x, y)`, if in bounds.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Fill a rectangle with copies of `cell`, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let clipped = self.area().intersection(&area);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Overlay a style onto every cell of a rectangle.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        let clipped = self.area().intersection(&area);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.apply(style);
                }
            }
        }
    }

    /// Write a string starting at `(x, y)`, one char per cell, stopping at
    /// `max_width` cells or the buffer edge. Returns the number of cells
    /// written.
    ///
    /// Width-aware truncation of multi-column graphemes is the caller's
    /// concern; this writes chars as-is.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        let mut written = 0u16;
        for ch in text.chars() {
            if written >= max_width {
                break;
            }
            let cx = x.saturating_add(written);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::styled(ch, style));
            written += 1;
        }
        written
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Render the buffer's characters as lines of text (styling discarded).
    ///
    /// Intended for tests and golden comparisons.
    #[must_use]
    pub fn to_text(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(x, y).map_or(' ', |c| c.ch))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Buffer;
    use crate::cell::Cell;
    use relink_core::geometry::Rect;
    use relink_style::{Color, Style};

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buf = Buffer::new(4, 2);
        buf.set(10, 10, Cell::from_char('x'));
        assert!(buf.get(10, 10).is_none());
        assert_eq!(buf.to_text(), vec!["    ", "    "]);
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(3, 3);
        buf.fill(Rect::new(1, 1, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.to_text(), vec!["   ", " ##", " ##"]);
    }

    #[test]
    fn set_string_respects_max_width() {
        let mut buf = Buffer::new(8, 1);
        let written = buf.set_string(1, 0, "abcdef", Style::new(), 3);
        assert_eq!(written, 3);
        assert_eq!(buf.to_text(), vec![" abc    "]);
    }

    #[test]
    fn set_string_stops_at_edge() {
        let mut buf = Buffer::new(4, 1);
        let written = buf.set_string(2, 0, "xyz", Style::new(), 10);
        assert_eq!(written, 2);
        assert_eq!(buf.to_text(), vec!["  xy"]);
    }

    #[test]
    fn set_style_overlays_without_replacing_chars() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('a'));
        buf.set_style(Rect::new(0, 0, 2, 1), Style::new().fg(Color::rgb(5, 5, 5)));
        assert_eq!(buf.get(0, 0).unwrap().ch, 'a');
        assert_eq!(buf.get(0, 0).unwrap().fg, Some(Color::rgb(5, 5, 5)));
        assert_eq!(buf.get(1, 0).unwrap().fg, Some(Color::rgb(5, 5, 5)));
    }
}
