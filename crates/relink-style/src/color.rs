#![forbid(unsafe_code)]

//! Color types.

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The 16 base ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// A color value as widgets specify it.
///
/// `Default` defers to the host surface's default foreground/background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Use the surface default.
    #[default]
    Reset,

    /// One of the 16 base ANSI colors.
    Ansi(Ansi16),

    /// A 24-bit RGB color.
    Rgb(Rgb),
}

impl Color {
    /// Construct a 24-bit color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Construct an ANSI-16 color.
    #[inline]
    pub const fn ansi(c: Ansi16) -> Self {
        Self::Ansi(c)
    }
}

impl From<Ansi16> for Color {
    fn from(c: Ansi16) -> Self {
        Self::Ansi(c)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}
