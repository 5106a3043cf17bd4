//! Keyboard-to-byte encoding.
//!
//! Maps a key press plus modifier state onto the byte sequence a real
//! terminal would transmit, honoring DECCKM for the navigation keys,
//! DECKPAM for the keypad and LNM for Return.

use bitflags::bitflags;
use log::debug;

use crate::mode::VteFlags;
use crate::screen::Screen;
use crate::vte::Vte;

bitflags! {
    /// Keyboard modifier state.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mods: u8 {
        const SHIFT   = 0x01;
        const CONTROL = 0x02;
        const ALT     = 0x04;
    }
}

/// Keys the encoder understands.
///
/// Plain text input arrives as [`Key::Char`] together with the `unicode`
/// argument; everything else names a function or navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Tab,
    IsoLeftTab,
    Linefeed,
    Clear,
    SysReq,
    Escape,
    Return,
    KpEnter,
    Find,
    Insert,
    Delete,
    Select,
    PageUp,
    PageDown,
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    KpSpace,
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpSubtract,
    KpSeparator,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpAdd,
    /// Function keys F1 through F20.
    F(u8),
}

/// Navigation keys: `ESC [1;5X` with control held, `ESC OX` in cursor
/// key mode, `ESC [X` otherwise.
fn cursor_key<S: Screen>(vte: &mut Vte<S>, mods: Mods, letter: u8) {
    if mods.contains(Mods::CONTROL) {
        vte.reply(&[0x1b, b'[', b'1', b';', b'5', letter]);
    } else if vte.flags.contains(VteFlags::CURSOR_KEY_MODE) {
        vte.reply(&[0x1b, b'O', letter]);
    } else {
        vte.reply(&[0x1b, b'[', letter]);
    }
}

/// Keypad keys: `ESC O<x>` in application keypad mode, the literal
/// character otherwise.
fn keypad<S: Screen>(vte: &mut Vte<S>, application: u8, numeric: &[u8]) {
    if vte.flags.contains(VteFlags::KEYPAD_APPLICATION_MODE) {
        vte.reply(&[0x1b, b'O', application]);
    } else {
        vte.reply(numeric);
    }
}

/// F1-F20. Shift maps F1-F10 onto the F11-F20 codes and F11-F20 onto
/// their `;2` variants.
fn function_key<S: Screen>(vte: &mut Vte<S>, n: u8, mods: Mods) {
    const CODES: [u8; 20] = [
        11, 12, 13, 14, 15, 17, 18, 19, 20, 21, 23, 24, 25, 26, 28, 29, 31,
        32, 33, 34,
    ];

    let shift = mods.contains(Mods::SHIFT);

    if n <= 4 && !shift {
        let letter = [b'P', b'Q', b'R', b'S'][usize::from(n) - 1];
        vte.reply(&[0x1b, b'O', letter]);
        return;
    }

    if n <= 10 {
        let code = CODES[usize::from(if shift { n + 10 } else { n }) - 1];
        vte.reply(format!("\x1b[{code}~").as_bytes());
        return;
    }

    let code = CODES[usize::from(n) - 1];
    if shift {
        vte.reply(format!("\x1b[{code};2~").as_bytes());
    } else {
        vte.reply(format!("\x1b[{code}~").as_bytes());
    }
}

pub(crate) fn perform<S: Screen>(
    vte: &mut Vte<S>,
    key: Key,
    ascii: Option<char>,
    mods: Mods,
    unicode: Option<char>,
) -> bool {
    // Alt prepends an escape character to whatever the key produces.
    if mods.contains(Mods::ALT) {
        vte.flags.insert(VteFlags::PREPEND_ESCAPE);
    }

    // Control shortcuts resolve against the ascii-mapped keysym so that
    // e.g. ctrl+c works regardless of the active keyboard layout.
    let sym = ascii.or(match key {
        Key::Char(c) => Some(c),
        _ => None,
    });

    if mods.contains(Mods::CONTROL) {
        if let Some(c) = sym {
            match c {
                ' ' | '2' => {
                    vte.reply(&[0x00]);
                    return true;
                },
                'a'..='z' | 'A'..='Z' => {
                    vte.reply(&[c as u8 & 0x1f]);
                    return true;
                },
                '3' | '[' | '{' => {
                    vte.reply(&[0x1b]);
                    return true;
                },
                '4' | '\\' | '|' => {
                    vte.reply(&[0x1c]);
                    return true;
                },
                '5' | ']' | '}' => {
                    vte.reply(&[0x1d]);
                    return true;
                },
                '6' | '`' | '~' => {
                    vte.reply(&[0x1e]);
                    return true;
                },
                '7' | '/' | '?' => {
                    vte.reply(&[0x1f]);
                    return true;
                },
                '8' => {
                    vte.reply(&[0x7f]);
                    return true;
                },
                _ => {},
            }
        }
    }

    match key {
        Key::Backspace => {
            vte.reply(&[0x08]);
            return true;
        },
        Key::Tab => {
            vte.reply(&[0x09]);
            return true;
        },
        Key::IsoLeftTab => {
            vte.reply(b"\x1b[Z");
            return true;
        },
        Key::Linefeed => {
            vte.reply(&[0x0a]);
            return true;
        },
        Key::Clear => {
            vte.reply(&[0x0b]);
            return true;
        },
        Key::SysReq => {
            vte.reply(&[0x15]);
            return true;
        },
        Key::Escape => {
            vte.reply(&[0x1b]);
            return true;
        },
        Key::KpEnter | Key::Return => {
            if key == Key::KpEnter
                && vte.flags.contains(VteFlags::KEYPAD_APPLICATION_MODE)
            {
                vte.reply(b"\x1bOM");
            } else if vte.flags.contains(VteFlags::LINE_FEED_NEW_LINE_MODE) {
                vte.reply(b"\x0d\x0a");
            } else {
                vte.reply(&[0x0d]);
            }
            return true;
        },
        Key::Find => {
            vte.reply(b"\x1b[1~");
            return true;
        },
        Key::Insert => {
            vte.reply(b"\x1b[2~");
            return true;
        },
        Key::Delete => {
            vte.reply(b"\x1b[3~");
            return true;
        },
        Key::Select => {
            vte.reply(b"\x1b[4~");
            return true;
        },
        Key::PageUp => {
            vte.reply(b"\x1b[5~");
            return true;
        },
        Key::PageDown => {
            vte.reply(b"\x1b[6~");
            return true;
        },
        Key::Up => {
            cursor_key(vte, mods, b'A');
            return true;
        },
        Key::Down => {
            cursor_key(vte, mods, b'B');
            return true;
        },
        Key::Right => {
            cursor_key(vte, mods, b'C');
            return true;
        },
        Key::Left => {
            cursor_key(vte, mods, b'D');
            return true;
        },
        Key::Home => {
            cursor_key(vte, mods, b'H');
            return true;
        },
        Key::End => {
            cursor_key(vte, mods, b'F');
            return true;
        },
        Key::KpSpace => {
            vte.reply(b" ");
            return true;
        },
        Key::Kp0 => {
            keypad(vte, b'p', b"0");
            return true;
        },
        Key::Kp1 => {
            keypad(vte, b'q', b"1");
            return true;
        },
        Key::Kp2 => {
            keypad(vte, b'r', b"2");
            return true;
        },
        Key::Kp3 => {
            keypad(vte, b's', b"3");
            return true;
        },
        Key::Kp4 => {
            keypad(vte, b't', b"4");
            return true;
        },
        Key::Kp5 => {
            keypad(vte, b'u', b"5");
            return true;
        },
        Key::Kp6 => {
            keypad(vte, b'v', b"6");
            return true;
        },
        Key::Kp7 => {
            keypad(vte, b'w', b"7");
            return true;
        },
        Key::Kp8 => {
            keypad(vte, b'x', b"8");
            return true;
        },
        Key::Kp9 => {
            keypad(vte, b'y', b"9");
            return true;
        },
        Key::KpSubtract => {
            keypad(vte, b'm', b"-");
            return true;
        },
        Key::KpSeparator => {
            keypad(vte, b'l', b",");
            return true;
        },
        Key::KpDecimal => {
            keypad(vte, b'n', b".");
            return true;
        },
        Key::KpDivide => {
            keypad(vte, b'j', b"/");
            return true;
        },
        Key::KpMultiply => {
            keypad(vte, b'o', b"*");
            return true;
        },
        Key::KpAdd => {
            keypad(vte, b'k', b"+");
            return true;
        },
        Key::F(n @ 1..=20) => {
            function_key(vte, n, mods);
            return true;
        },
        _ => {},
    }

    if let Some(c) = unicode {
        let cp = c as u32;
        if vte.flags.contains(VteFlags::SEVEN_BIT_MODE) {
            let byte = if cp & 0x80 != 0 {
                debug!(
                    "invalid keyboard input in 7bit mode U+{cp:X}; mapping to '?'"
                );
                b'?'
            } else {
                cp as u8
            };
            vte.reply(&[byte]);
        } else if vte.flags.contains(VteFlags::EIGHT_BIT_MODE) {
            let byte = if cp > 0xff {
                debug!(
                    "invalid keyboard input in 8bit mode U+{cp:X}; mapping to '?'"
                );
                b'?'
            } else {
                cp as u8
            };
            vte.reply(&[byte]);
        } else {
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            vte.reply(encoded.as_bytes());
        }
        return true;
    }

    vte.flags.remove(VteFlags::PREPEND_ESCAPE);
    false
}
