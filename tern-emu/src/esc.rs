use log::debug;
use tern_vte::CsiFlags;

use crate::charset::{
    Charset, CharsetIndex, DEC_SPECIAL_GRAPHICS, DEC_SUPPLEMENTAL_GRAPHICS,
    UNICODE_LOWER, UNICODE_UPPER,
};
use crate::mode::VteFlags;
use crate::screen::Screen;
use crate::vte::Vte;

/// Designate `set` into the G-slot selected by the collected
/// intermediate, if any.
fn designate<S: Screen>(
    vte: &mut Vte<S>,
    flags: CsiFlags,
    set: &'static Charset,
) -> bool {
    let index = if flags.contains(CsiFlags::POPEN) {
        CharsetIndex::G0
    } else if flags.contains(CsiFlags::PCLOSE) {
        CharsetIndex::G1
    } else if flags.contains(CsiFlags::MULT) {
        CharsetIndex::G2
    } else if flags.contains(CsiFlags::PLUS) {
        CharsetIndex::G3
    } else {
        return false;
    };

    vte.charsets.designate(index, set);
    true
}

/// Dispatch a completed escape sequence.
pub(crate) fn perform<S: Screen>(vte: &mut Vte<S>, flags: CsiFlags, byte: u32) {
    let c = char::from_u32(byte).unwrap_or('\0');

    match c {
        // Map ASCII into G0-G3.
        'B' => {
            if designate(vte, flags, &UNICODE_LOWER) {
                return;
            }
        },
        // Map DEC supplemental graphics into G0-G3.
        '<' => {
            if designate(vte, flags, &DEC_SUPPLEMENTAL_GRAPHICS) {
                return;
            }
        },
        // Map DEC special graphics into G0-G3.
        '0' => {
            if designate(vte, flags, &DEC_SPECIAL_GRAPHICS) {
                return;
            }
        },
        // National replacement sets (British, Dutch, Finnish, French,
        // French-Canadian, German, Italian, Norwegian/Danish, Spanish,
        // Swedish, Swiss) are stubs mapped to the Unicode upper half.
        'A' | '4' | '5' | 'C' | 'R' | 'Q' | 'K' | 'Y' | 'E' | '6' | 'Z'
        | '7' | 'H' | '=' => {
            if designate(vte, flags, &UNICODE_UPPER) {
                return;
            }
        },
        // S7C1T: disable 8-bit C1 replies.
        'F' => {
            if flags.contains(CsiFlags::SPACE) {
                vte.flags.remove(VteFlags::USE_C1);
                return;
            }
        },
        // S8C1T: enable 8-bit C1 replies.
        'G' => {
            if flags.contains(CsiFlags::SPACE) {
                vte.flags.insert(VteFlags::USE_C1);
                return;
            }
        },
        _ => {},
    }

    // Everything below is only valid without intermediates.
    if !flags.is_empty() {
        debug!("unhandled escape sequence {c:?}");
        return;
    }

    match c {
        // IND: move down one row, scroll if needed.
        'D' => vte.screen.move_down(1, true),
        // NEL: CR/NL with scroll.
        'E' => vte.screen.newline(),
        // HTS: set a tab stop at the current position.
        'H' => vte.screen.set_tabstop(),
        // RI: move up one row, scroll if needed.
        'M' => vte.screen.move_up(1, true),
        // SS2: map G2 into GL for the next character only.
        'N' => vte.charsets.single_shift(CharsetIndex::G2),
        // SS3: map G3 into GL for the next character only.
        'O' => vte.charsets.single_shift(CharsetIndex::G3),
        // DECID: answer with the primary device attributes.
        'Z' => vte.send_primary_da(),
        // ST: end of a control string, nothing left to do.
        '\\' => {},
        // LS1R: invoke G1 into GR.
        '~' => vte.charsets.invoke_gr(CharsetIndex::G1),
        // LS2: invoke G2 into GL.
        'n' => vte.charsets.invoke_gl(CharsetIndex::G2),
        // LS2R: invoke G2 into GR.
        '}' => vte.charsets.invoke_gr(CharsetIndex::G2),
        // LS3: invoke G3 into GL.
        'o' => vte.charsets.invoke_gl(CharsetIndex::G3),
        // LS3R: invoke G3 into GR.
        '|' => vte.charsets.invoke_gr(CharsetIndex::G3),
        // DECKPAM: application keypad mode.
        '=' => vte.flags.insert(VteFlags::KEYPAD_APPLICATION_MODE),
        // DECKPNM: numeric keypad mode.
        '>' => vte.flags.remove(VteFlags::KEYPAD_APPLICATION_MODE),
        // RIS: hard reset.
        'c' => vte.hard_reset(),
        // DECSC: save terminal state.
        '7' => vte.save_state(),
        // DECRC: restore terminal state.
        '8' => vte.restore_state(),
        _ => debug!("unhandled escape sequence {c:?}"),
    }
}
