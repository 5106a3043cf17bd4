use log::debug;

use crate::charset::CharsetIndex;
use crate::mode::VteFlags;
use crate::screen::Screen;
use crate::vte::Vte;

/// Execute a single C0 or C1 control character.
pub(crate) fn perform<S: Screen>(vte: &mut Vte<S>, ctrl: u32) {
    match ctrl {
        // NUL is ignored on input.
        0x00 => {},
        // ENQ transmits the answerback message.
        0x05 => vte.reply(&[0x06]),
        // BEL sounds the bell tone.
        0x07 => {
            if let Some(cb) = vte.bell_cb.as_mut() {
                cb();
            }
        },
        // BS moves the cursor one position left.
        0x08 => vte.screen.move_left(1),
        // HT moves to the next tab stop or the end of the line.
        0x09 => vte.screen.tab_right(1),
        // LF/VT/FF: line feed, or newline in CR/NL mode.
        0x0a | 0x0b | 0x0c => {
            if vte.flags.contains(VteFlags::LINE_FEED_NEW_LINE_MODE) {
                vte.screen.newline();
            } else {
                vte.screen.move_down(1, true);
            }
        },
        // CR moves the cursor to the left margin.
        0x0d => vte.screen.move_line_home(),
        // SO maps G1 into GL.
        0x0e => vte.charsets.invoke_gl(CharsetIndex::G1),
        // SI maps G0 into GL.
        0x0f => vte.charsets.invoke_gl(CharsetIndex::G0),
        // XON/XOFF flow control is handled at the pty layer.
        0x11 | 0x13 => {},
        // CAN already cancelled the pending sequence in the parser.
        0x18 => {},
        // SUB cancels the sequence and shows an error glyph.
        0x1a => vte.write_glyph('\u{bf}'),
        // ESC introduced a sequence in the parser.
        0x1b => {},
        0x1f => {},
        // IND moves down one row, scrolling if needed.
        0x84 => vte.screen.move_down(1, true),
        // NEL is CR/NL with scroll.
        0x85 => vte.screen.newline(),
        // HTS sets a tab stop at the current position.
        0x88 => vte.screen.set_tabstop(),
        // RI moves up one row, scrolling if needed.
        0x8d => vte.screen.move_up(1, true),
        // SS2 maps G2 into GL for the next character only.
        0x8e => vte.charsets.single_shift(CharsetIndex::G2),
        // SS3 maps G3 into GL for the next character only.
        0x8f => vte.charsets.single_shift(CharsetIndex::G3),
        // DECID answers with the primary device attributes.
        0x9a => vte.send_primary_da(),
        // ST ends a control string.
        0x9c => {},
        _ => debug!("unhandled control char {ctrl:#04x}"),
    }
}
