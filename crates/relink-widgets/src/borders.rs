#![forbid(unsafe_code)]

//! Border styling primitives.

/// The characters a border is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    /// Single light lines.
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
    };

    /// Heavy lines.
    pub const THICK: Self = Self {
        vertical: '┃',
        horizontal: '━',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
    };
}

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Single light lines.
    #[default]
    Plain,
    /// Single light lines with rounded corners.
    Rounded,
    /// Heavy lines.
    Thick,
}

impl BorderType {
    /// The character set for this preset.
    #[must_use]
    pub const fn to_border_set(self) -> BorderSet {
        match self {
            BorderType::Plain => BorderSet::PLAIN,
            BorderType::Rounded => BorderSet::ROUNDED,
            BorderType::Thick => BorderSet::THICK,
        }
    }
}

bitflags::bitflags! {
    /// Which edges of a block get a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}
