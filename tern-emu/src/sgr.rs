use log::debug;
use tern_vte::{CSI_ARG_MAX, CsiParams};

use crate::mode::VteFlags;
use crate::screen::Screen;
use crate::vte::Vte;

/// Color cube levels for the 256-color 6x6x6 block.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Decode a 256-color index into a color code and RGB components.
///
/// Indices below 16 stay palette codes so that bold brightening keeps
/// working; their stored RGB is zeroed and re-resolved afterwards.
fn decode_256(index: i32) -> (i8, (u8, u8, u8)) {
    if index < 16 {
        (index as i8, (0, 0, 0))
    } else if index < 232 {
        let index = (index - 16) as u32;
        let b = CUBE_LEVELS[(index % 6) as usize];
        let g = CUBE_LEVELS[((index / 6) % 6) as usize];
        let r = CUBE_LEVELS[((index / 36) % 6) as usize];
        (-1, (r, g, b))
    } else {
        let level = ((index - 232) * 10 + 8) as u8;
        (-1, (level, level, level))
    }
}

/// SGR: apply a graphic rendition parameter list to the current
/// attribute.
pub(crate) fn perform<S: Screen>(vte: &mut Vte<S>, params: &CsiParams) {
    let mut argv = [-1i32; CSI_ARG_MAX];
    let mut argc = params.argc();
    for (slot, arg) in argv[..argc].iter_mut().zip(params.iter()) {
        *slot = arg;
    }

    // A bare `CSI m` acts as a full reset.
    if argc <= 1 && argv[0] == -1 {
        argc = 1;
        argv[0] = 0;
    }

    let mut i = 0;
    while i < argc {
        match argv[i] {
            -1 => {},
            0 => {
                let def = vte.def_attr;
                vte.cattr.copy_fcolor(&def);
                vte.cattr.copy_bcolor(&def);
                vte.cattr.bold = false;
                vte.cattr.italic = false;
                vte.cattr.underline = false;
                vte.cattr.inverse = false;
                vte.cattr.blink = false;
            },
            1 => vte.cattr.bold = true,
            3 => vte.cattr.italic = true,
            4 => vte.cattr.underline = true,
            5 => vte.cattr.blink = true,
            7 => vte.cattr.inverse = true,
            22 => vte.cattr.bold = false,
            23 => vte.cattr.italic = false,
            24 => vte.cattr.underline = false,
            25 => vte.cattr.blink = false,
            27 => vte.cattr.inverse = false,
            // Named colors map straight onto the palette slots: 30-37 are
            // the dark foregrounds, 90-97 the light ones, and the 40s and
            // 100s their background counterparts.
            n @ 30..=37 => vte.cattr.fccode = (n - 30) as i8,
            39 => {
                let def = vte.def_attr;
                vte.cattr.copy_fcolor(&def);
            },
            n @ 40..=47 => vte.cattr.bccode = (n - 40) as i8,
            49 => {
                let def = vte.def_attr;
                vte.cattr.copy_bcolor(&def);
            },
            n @ 90..=97 => vte.cattr.fccode = (n - 90 + 8) as i8,
            n @ 100..=107 => vte.cattr.bccode = (n - 100 + 8) as i8,
            n @ (38 | 48) => {
                let resolved = match argv.get(i + 1).copied().unwrap_or(-1) {
                    // 256-color index.
                    5 => {
                        let index = argv.get(i + 2).copied().unwrap_or(-1);
                        if i + 2 >= argc || index < 0 {
                            debug!("invalid 256color SGR");
                            None
                        } else {
                            i += 2;
                            Some(decode_256(index))
                        }
                    },
                    // Direct RGB.
                    2 => {
                        let r = argv.get(i + 2).copied().unwrap_or(-1);
                        let g = argv.get(i + 3).copied().unwrap_or(-1);
                        let b = argv.get(i + 4).copied().unwrap_or(-1);
                        if i + 4 >= argc || r < 0 || g < 0 || b < 0 {
                            debug!("invalid true color SGR");
                            None
                        } else {
                            i += 4;
                            Some((-1, (r as u8, g as u8, b as u8)))
                        }
                    },
                    _ => {
                        debug!("invalid SGR");
                        None
                    },
                };

                if let Some((code, (r, g, b))) = resolved {
                    if n == 38 {
                        vte.cattr.fccode = code;
                        vte.cattr.fr = r;
                        vte.cattr.fg = g;
                        vte.cattr.fb = b;
                    } else {
                        vte.cattr.bccode = code;
                        vte.cattr.br = r;
                        vte.cattr.bg = g;
                        vte.cattr.bb = b;
                    }
                }
            },
            n => debug!("unhandled SGR attr {n}"),
        }

        i += 1;
    }

    vte.palette.resolve(&mut vte.cattr);
    if vte.flags.contains(VteFlags::BACKGROUND_COLOR_ERASE_MODE) {
        vte.screen.set_def_attr(&vte.cattr);
    }
}
