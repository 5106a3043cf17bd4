mod attr;
mod charset;
mod color;
mod control;
mod csi;
mod esc;
mod keyboard;
mod mode;
mod palette;
mod screen;
mod sgr;
mod vte;

pub use attr::Attr;
pub use charset::{
    Charset, CharsetIndex, DEC_SPECIAL_GRAPHICS, DEC_SUPPLEMENTAL_GRAPHICS,
    UNICODE_LOWER, UNICODE_UPPER,
};
pub use color::{COLOR_NUM, ColorSlot, Rgb};
pub use keyboard::{Key, Mods};
pub use mode::VteFlags;
pub use palette::PaletteTable;
pub use screen::{Screen, ScreenFlags};
pub use tern_vte as vte_parser;
pub use vte::Vte;
