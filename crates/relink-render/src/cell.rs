#![forbid(unsafe_code)]

//! A single grid cell.

use relink_style::{Color, Style, StyleFlags};

/// One cell of the render surface: a character plus resolved styling.
///
/// Unlike [`Style`], a cell's colors are resolved — `None` means the surface
/// default, not "inherit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,

    /// Foreground color (`None` = surface default).
    pub fg: Option<Color>,

    /// Background color (`None` = surface default).
    pub bg: Option<Color>,

    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }
}

impl Cell {
    /// A cell holding `ch` with default styling.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// A cell holding `ch` styled by `style`.
    #[must_use]
    pub fn styled(ch: char, style: Style) -> Self {
        let mut cell = Self::from_char(ch);
        cell.apply(style);
        cell
    }

    /// Replace the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Replace the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Replace the attribute flags.
    #[must_use]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Overlay a style onto the cell; fields the style leaves unset keep
    /// their current value.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = style.bg {
            self.bg = Some(bg);
        }
        if let Some(attrs) = style.attrs {
            self.attrs = attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use relink_style::{Color, Style, StyleFlags};

    #[test]
    fn styled_resolves_all_fields() {
        let style = Style::new().fg(Color::rgb(1, 2, 3)).bold();
        let cell = Cell::styled('x', style);
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.fg, Some(Color::rgb(1, 2, 3)));
        assert_eq!(cell.bg, None);
        assert!(cell.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let mut cell = Cell::from_char('y').with_bg(Color::rgb(9, 9, 9));
        cell.apply(Style::new().fg(Color::rgb(4, 4, 4)));
        assert_eq!(cell.bg, Some(Color::rgb(9, 9, 9)));
        assert_eq!(cell.fg, Some(Color::rgb(4, 4, 4)));
    }
}
