use crate::color::Rgb;

/// Rendition attribute attached to every written cell.
///
/// Colors are carried twice: as a palette color code (`-1` when the color
/// was given as explicit RGB) and as the resolved RGB components. The
/// screen layer only ever looks at the RGB side; the codes exist so that
/// palette swaps and bold-brightening can re-resolve coded colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Attr {
    /// Foreground color code, `-1` for explicit RGB.
    pub fccode: i8,
    /// Background color code, `-1` for explicit RGB.
    pub bccode: i8,
    pub fr: u8,
    pub fg: u8,
    pub fb: u8,
    pub br: u8,
    pub bg: u8,
    pub bb: u8,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
    pub protect: bool,
    pub blink: bool,
}

impl Attr {
    /// Resolved foreground color.
    #[must_use]
    pub fn foreground(&self) -> Rgb {
        Rgb::new(self.fr, self.fg, self.fb)
    }

    /// Resolved background color.
    #[must_use]
    pub fn background(&self) -> Rgb {
        Rgb::new(self.br, self.bg, self.bb)
    }

    pub(crate) fn copy_fcolor(&mut self, src: &Attr) {
        self.fccode = src.fccode;
        self.fr = src.fr;
        self.fg = src.fg;
        self.fb = src.fb;
    }

    pub(crate) fn copy_bcolor(&mut self, src: &Attr) {
        self.bccode = src.bccode;
        self.br = src.br;
        self.bg = src.bg;
        self.bb = src.bb;
    }
}
