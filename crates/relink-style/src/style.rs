#![forbid(unsafe_code)]

//! Text styling with cascade semantics.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
        const STRIKE    = 0b0010_0000;
    }
}

/// A partial style: unset fields inherit from whatever is already in place.
///
/// `patch` composes styles the way a cascade does — the patch wins where it
/// specifies a value, the base shows through where it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if specified.
    pub fg: Option<Color>,

    /// Background color, if specified.
    pub bg: Option<Color>,

    /// Attribute flags, if specified.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// The empty style: specifies nothing, inherits everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Convenience: add `BOLD` to the attribute flags.
    #[must_use]
    pub fn bold(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::BOLD;
        Self {
            attrs: Some(attrs),
            ..self
        }
    }

    /// Convenience: add `DIM` to the attribute flags.
    #[must_use]
    pub fn dim(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::DIM;
        Self {
            attrs: Some(attrs),
            ..self
        }
    }

    /// Convenience: add `REVERSE` to the attribute flags.
    #[must_use]
    pub fn reverse(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::REVERSE;
        Self {
            attrs: Some(attrs),
            ..self
        }
    }

    /// Overlay `other` on top of `self`; `other` wins where it specifies.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Style, StyleFlags};
    use crate::color::Color;

    #[test]
    fn patch_prefers_overlay_where_set() {
        let base = Style::new().fg(Color::rgb(1, 1, 1)).bg(Color::rgb(2, 2, 2));
        let overlay = Style::new().fg(Color::rgb(9, 9, 9));
        let merged = base.patch(overlay);
        assert_eq!(merged.fg, Some(Color::rgb(9, 9, 9)));
        assert_eq!(merged.bg, Some(Color::rgb(2, 2, 2)));
    }

    #[test]
    fn patch_with_empty_is_identity() {
        let base = Style::new().fg(Color::rgb(3, 4, 5)).bold();
        assert_eq!(base.patch(Style::new()), base);
    }

    #[test]
    fn bold_accumulates_flags() {
        let style = Style::new().bold().dim();
        assert_eq!(style.attrs, Some(StyleFlags::BOLD | StyleFlags::DIM));
    }
}
