/// Number of palette slots: 16 named colors plus the default foreground
/// and background.
pub const COLOR_NUM: usize = 18;

/// Palette slot indices.
///
/// The first eight are the dark colors, the next eight their light
/// variants; slots 16 and 17 hold the session's default foreground and
/// background. Attribute color codes store these indices (or `-1` for an
/// explicit RGB color), so the discriminants are part of the contract.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorSlot {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGrey,
    DarkGrey,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Foreground,
    Background,
}

/// An sRGB triple.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
