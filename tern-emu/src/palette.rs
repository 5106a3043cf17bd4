use crate::attr::Attr;
use crate::color::{COLOR_NUM, ColorSlot};

/// An 18-slot color table: 16 named colors plus default foreground and
/// background.
pub type PaletteTable = [[u8; 3]; COLOR_NUM];

static VGA: PaletteTable = [
    [0, 0, 0],       // black
    [205, 0, 0],     // red
    [0, 205, 0],     // green
    [205, 205, 0],   // yellow
    [0, 0, 238],     // blue
    [205, 0, 205],   // magenta
    [0, 205, 205],   // cyan
    [229, 229, 229], // light grey
    [127, 127, 127], // dark grey
    [255, 0, 0],     // light red
    [0, 255, 0],     // light green
    [255, 255, 0],   // light yellow
    [92, 92, 255],   // light blue
    [255, 0, 255],   // light magenta
    [0, 255, 255],   // light cyan
    [255, 255, 255], // white
    [229, 229, 229], // foreground: light grey
    [0, 0, 0],       // background: black
];

static SOLARIZED: PaletteTable = [
    [7, 54, 66],     // black
    [220, 50, 47],   // red
    [133, 153, 0],   // green
    [181, 137, 0],   // yellow
    [38, 139, 210],  // blue
    [211, 54, 130],  // magenta
    [42, 161, 152],  // cyan
    [238, 232, 213], // light grey
    [0, 43, 54],     // dark grey
    [203, 75, 22],   // light red
    [88, 110, 117],  // light green
    [101, 123, 131], // light yellow
    [131, 148, 150], // light blue
    [108, 113, 196], // light magenta
    [147, 161, 161], // light cyan
    [253, 246, 227], // white
    [238, 232, 213], // foreground: light grey
    [7, 54, 66],     // background: black
];

static SOLARIZED_BLACK: PaletteTable = [
    [0, 0, 0],
    [220, 50, 47],
    [133, 153, 0],
    [181, 137, 0],
    [38, 139, 210],
    [211, 54, 130],
    [42, 161, 152],
    [238, 232, 213],
    [0, 43, 54],
    [203, 75, 22],
    [88, 110, 117],
    [101, 123, 131],
    [131, 148, 150],
    [108, 113, 196],
    [147, 161, 161],
    [253, 246, 227],
    [238, 232, 213], // foreground: light grey
    [0, 0, 0],       // background: black
];

static SOLARIZED_WHITE: PaletteTable = [
    [7, 54, 66],
    [220, 50, 47],
    [133, 153, 0],
    [181, 137, 0],
    [38, 139, 210],
    [211, 54, 130],
    [42, 161, 152],
    [238, 232, 213],
    [0, 43, 54],
    [203, 75, 22],
    [88, 110, 117],
    [101, 123, 131],
    [131, 148, 150],
    [108, 113, 196],
    [147, 161, 161],
    [253, 246, 227],
    [7, 54, 66],     // foreground: black
    [238, 232, 213], // background: light grey
];

static SOFT_BLACK: PaletteTable = [
    [0x3f, 0x3f, 0x3f],
    [0x70, 0x50, 0x50],
    [0x60, 0xb4, 0x8a],
    [0xdf, 0xaf, 0x8f],
    [0x9a, 0xb8, 0xd7],
    [0xdc, 0x8c, 0xc3],
    [0x8c, 0xd0, 0xd3],
    [0xff, 0xff, 0xff],
    [0x70, 0x90, 0x80],
    [0xdc, 0xa3, 0xa3],
    [0x72, 0xd5, 0xa3],
    [0xf0, 0xdf, 0xaf],
    [0x94, 0xbf, 0xf3],
    [0xec, 0x93, 0xd3],
    [0x93, 0xe0, 0xe3],
    [0xdc, 0xdc, 0xcc],
    [0xdc, 0xdc, 0xcc], // foreground
    [0x2c, 0x2c, 0x2c], // background
];

static BASE16_DARK: PaletteTable = [
    [0x00, 0x00, 0x00], // base00
    [0xab, 0x46, 0x42], // base08
    [0xa1, 0xb5, 0x6c], // base0B
    [0xf7, 0xca, 0x88], // base0A
    [0x7c, 0xaf, 0xc2], // base0D
    [0xba, 0x8b, 0xaf], // base0E
    [0x86, 0xc1, 0xb9], // base0C
    [0xaa, 0xaa, 0xaa],
    [0x55, 0x55, 0x55],
    [0xab, 0x46, 0x42],
    [0xa1, 0xb5, 0x6c],
    [0xf7, 0xca, 0x88],
    [0x7c, 0xaf, 0xc2],
    [0xba, 0x8b, 0xaf],
    [0x86, 0xc1, 0xb9],
    [0xff, 0xff, 0xff],
    [0xd8, 0xd8, 0xd8], // foreground
    [0x18, 0x18, 0x18], // background
];

static BASE16_LIGHT: PaletteTable = [
    [0x00, 0x00, 0x00],
    [0xab, 0x46, 0x42],
    [0xa1, 0xb5, 0x6c],
    [0xf7, 0xca, 0x88],
    [0x7c, 0xaf, 0xc2],
    [0xba, 0x8b, 0xaf],
    [0x86, 0xc1, 0xb9],
    [0xaa, 0xaa, 0xaa],
    [0x55, 0x55, 0x55],
    [0xab, 0x46, 0x42],
    [0xa1, 0xb5, 0x6c],
    [0xf7, 0xca, 0x88],
    [0x7c, 0xaf, 0xc2],
    [0xba, 0x8b, 0xaf],
    [0x86, 0xc1, 0xb9],
    [0xff, 0xff, 0xff],
    [0x18, 0x18, 0x18], // foreground
    [0xd8, 0xd8, 0xd8], // background
];

/// Active palette selection: a name resolving to one of the built-in
/// tables, or an owned custom table when the name is `custom`.
///
/// Unknown or unset names fall back to the VGA-like default.
#[derive(Default)]
pub(crate) struct Palette {
    name: Option<String>,
    custom: Option<Box<PaletteTable>>,
}

impl Palette {
    pub(crate) fn set_name(&mut self, name: Option<&str>) {
        self.name = name.map(str::to_owned);
    }

    pub(crate) fn set_custom(&mut self, table: Option<PaletteTable>) {
        self.custom = table.map(Box::new);
    }

    pub(crate) fn table(&self) -> &PaletteTable {
        match self.name.as_deref() {
            Some("custom") => self.custom.as_deref().unwrap_or(&VGA),
            Some("solarized") => &SOLARIZED,
            Some("solarized-black") => &SOLARIZED_BLACK,
            Some("solarized-white") => &SOLARIZED_WHITE,
            Some("soft-black") => &SOFT_BLACK,
            Some("base16-dark") => &BASE16_DARK,
            Some("base16-light") => &BASE16_LIGHT,
            _ => &VGA,
        }
    }

    /// Resolve the coded colors of `attr` into RGB components.
    ///
    /// Bold promotes a coded dark color to its light variant; out-of-range
    /// codes resolve as the default foreground/background. Codes below
    /// zero mark explicit RGB colors and are left untouched.
    pub(crate) fn resolve(&self, attr: &mut Attr) {
        let table = self.table();

        let mut code = attr.fccode;
        if code >= 0 {
            if attr.bold && code < 8 {
                code += 8;
            }
            if code >= COLOR_NUM as i8 {
                code = ColorSlot::Foreground as i8;
            }
            [attr.fr, attr.fg, attr.fb] = table[code as usize];
        }

        let mut code = attr.bccode;
        if code >= 0 {
            if code >= COLOR_NUM as i8 {
                code = ColorSlot::Background as i8;
            }
            [attr.br, attr.bg, attr.bb] = table[code as usize];
        }
    }
}
