use log::debug;
use tern_vte::{CsiFlags, CsiParams};

use crate::charset::{CharsetIndex, DEC_SUPPLEMENTAL_GRAPHICS, UNICODE_LOWER};
use crate::mode::VteFlags;
use crate::screen::{Screen, ScreenFlags};
use crate::sgr;
use crate::vte::Vte;

/// Argument at `idx` with the usual default of one.
fn count(params: &CsiParams, idx: usize) -> u32 {
    params.get(idx).max(1) as u32
}

/// Dispatch a completed CSI sequence.
pub(crate) fn perform<S: Screen>(
    vte: &mut Vte<S>,
    params: &CsiParams,
    byte: u32,
) {
    let flags = params.flags();
    let c = char::from_u32(byte).unwrap_or('\0');

    match c {
        // CUU: cursor up, no scrolling.
        'A' => vte.screen.move_up(count(params, 0), false),
        // CUD: cursor down, no scrolling.
        'B' => vte.screen.move_down(count(params, 0), false),
        // CUF: cursor forward.
        'C' => vte.screen.move_right(count(params, 0)),
        // CUB: cursor backward.
        'D' => vte.screen.move_left(count(params, 0)),
        // VPA: line position absolute.
        'd' => {
            let x = vte.screen.cursor_x();
            vte.screen.move_to(x, count(params, 0) - 1);
        },
        // VPR: line position relative.
        'e' => {
            let x = vte.screen.cursor_x();
            let y = vte.screen.cursor_y();
            vte.screen.move_to(x, y + count(params, 0));
        },
        // CUP/HVP: position the cursor, row and column 1-based.
        'H' | 'f' => {
            let row = count(params, 0);
            let col = count(params, 1);
            vte.screen.move_to(col - 1, row - 1);
        },
        // CHA: cursor character absolute.
        'G' => {
            let y = vte.screen.cursor_y();
            vte.screen.move_to(count(params, 0) - 1, y);
        },
        // ED: erase in display. The `?` variant spares protected cells.
        'J' => {
            let protect = flags.contains(CsiFlags::WHAT);
            match params.get(0) {
                n if n <= 0 => vte.screen.erase_cursor_to_screen(protect),
                1 => vte.screen.erase_screen_to_cursor(protect),
                2 => vte.screen.erase_screen(protect),
                n => debug!("unknown parameter to CSI-J: {n}"),
            }
        },
        // EL: erase in line, protect semantics as for ED.
        'K' => {
            let protect = flags.contains(CsiFlags::WHAT);
            match params.get(0) {
                n if n <= 0 => vte.screen.erase_cursor_to_end(protect),
                1 => vte.screen.erase_home_to_cursor(protect),
                2 => vte.screen.erase_current_line(protect),
                n => debug!("unknown parameter to CSI-K: {n}"),
            }
        },
        // ECH: erase characters at the cursor.
        'X' => vte.screen.erase_chars(count(params, 0)),
        'm' => {
            if flags.contains(CsiFlags::GT) {
                // XTMODKEYS: set/reset key modifier options; ignored.
            } else {
                sgr::perform(vte, params);
            }
        },
        'p' => {
            if flags.contains(CsiFlags::GT) {
                // xterm pointer mode; treated as a soft reset.
                vte.reset();
            } else if flags.contains(CsiFlags::BANG) {
                // DECSTR: soft reset.
                vte.reset();
            } else if flags.contains(CsiFlags::CASH) {
                // DECRQM: mode requests are not answered.
                if !flags.contains(CsiFlags::WHAT) {
                    vte.reset();
                }
            } else {
                // DECSCL, occasionally with a stray `"` intermediate.
                compat_mode(vte, params);
            }
        },
        // SM: set mode.
        'h' => set_reset_mode(vte, params, true),
        // RM: reset mode.
        'l' => set_reset_mode(vte, params, false),
        // DECSTBM: set the vertical margins.
        'r' => {
            let top = params.get(0).max(0) as u32;
            let bottom = params.get(1).max(0) as u32;
            vte.screen.set_margins(top, bottom);
        },
        // DA: device attributes.
        'c' => device_attributes(vte, params),
        // IL: insert lines.
        'L' => vte.screen.insert_lines(count(params, 0)),
        // DL: delete lines.
        'M' => vte.screen.delete_lines(count(params, 0)),
        // TBC: tabulation clear.
        'g' => match params.get(0) {
            n if n <= 0 => vte.screen.reset_tabstop(),
            3 => vte.screen.reset_all_tabstops(),
            n => debug!("invalid parameter {n} to TBC CSI"),
        },
        // ICH: insert blank characters.
        '@' => vte.screen.insert_chars(count(params, 0)),
        // DCH: delete characters.
        'P' => vte.screen.delete_chars(count(params, 0)),
        // CBT: cursor backward tabulation.
        'Z' => vte.screen.tab_left(count(params, 0)),
        // CHT: cursor forward tabulation.
        'I' => vte.screen.tab_right(count(params, 0)),
        // DSR: device status report.
        'n' => status_report(vte, params),
        // SU: scroll up.
        'S' => vte.screen.scroll_up(count(params, 0)),
        // SD: scroll down.
        'T' => vte.screen.scroll_down(count(params, 0)),
        _ => debug!("unhandled CSI sequence {c:?}"),
    }
}

fn set_reset_flag<S: Screen>(vte: &mut Vte<S>, set: bool, flag: VteFlags) {
    if set {
        vte.flags.insert(flag);
    } else {
        vte.flags.remove(flag);
    }
}

fn screen_flag<S: Screen>(vte: &mut Vte<S>, set: bool, flag: ScreenFlags) {
    if set {
        vte.screen.set_flags(flag);
    } else {
        vte.screen.reset_flags(flag);
    }
}

/// SM/RM and DECSET/DECRST over every argument in the vector.
fn set_reset_mode<S: Screen>(vte: &mut Vte<S>, params: &CsiParams, set: bool) {
    let private = params.flags().contains(CsiFlags::WHAT);

    for idx in 0..params.argc() {
        let arg = params.get(idx);
        if arg < 0 {
            continue;
        }

        if !private {
            match arg {
                // KAM: keyboard action mode.
                2 => set_reset_flag(vte, set, VteFlags::KEYBOARD_ACTION_MODE),
                // IRM: insert/replace mode.
                4 => {
                    set_reset_flag(vte, set, VteFlags::INSERT_REPLACE_MODE);
                    screen_flag(vte, set, ScreenFlags::INSERT_MODE);
                },
                // SRM: send/receive mode; reset means local echo.
                12 => set_reset_flag(vte, set, VteFlags::SEND_RECEIVE_MODE),
                // LNM: line feed/new line mode.
                20 => {
                    set_reset_flag(vte, set, VteFlags::LINE_FEED_NEW_LINE_MODE)
                },
                m => debug!("unknown non-DEC (re)set-mode {m}"),
            }
            continue;
        }

        match arg {
            // DECCKM: cursor key mode.
            1 => set_reset_flag(vte, set, VteFlags::CURSOR_KEY_MODE),
            // DECANM: VT52 mode is not supported.
            2 => {},
            // DECCOLM: fixed 80/132 column switching is not supported;
            // the buffer follows the window size instead.
            3 => {},
            // DECSCLM: smooth scrolling has no meaning with a scrollback
            // buffer.
            4 => {},
            // DECSCNM: inverse screen.
            5 => {
                set_reset_flag(vte, set, VteFlags::INVERSE_SCREEN_MODE);
                screen_flag(vte, set, ScreenFlags::INVERSE);
            },
            // DECOM: relative origin.
            6 => {
                set_reset_flag(vte, set, VteFlags::ORIGIN_MODE);
                screen_flag(vte, set, ScreenFlags::REL_ORIGIN);
            },
            // DECAWM: auto wrap.
            7 => {
                set_reset_flag(vte, set, VteFlags::AUTO_WRAP_MODE);
                screen_flag(vte, set, ScreenFlags::AUTO_WRAP);
            },
            // DECARM: auto repeat.
            8 => set_reset_flag(vte, set, VteFlags::AUTO_REPEAT_MODE),
            // Blinking cursor is a renderer concern.
            12 => {},
            // DECPFF/DECPEX: no printer attached.
            18 | 19 => {},
            // DECTCEM: text cursor enable; the screen flag is inverted.
            25 => {
                set_reset_flag(vte, set, VteFlags::TEXT_CURSOR_MODE);
                screen_flag(vte, !set, ScreenFlags::HIDE_CURSOR);
            },
            // DECNRCM: national replacement character sets.
            42 => set_reset_flag(vte, set, VteFlags::NATIONAL_CHARSET_MODE),
            // Alternate screen buffer, plain switch.
            47 => {
                if vte.flags.contains(VteFlags::TITE_INHIBIT_MODE) {
                    continue;
                }
                screen_flag(vte, set, ScreenFlags::ALTERNATE);
            },
            // Alternate screen buffer with post-erase.
            1047 => {
                if vte.flags.contains(VteFlags::TITE_INHIBIT_MODE) {
                    continue;
                }
                if set {
                    vte.screen.set_flags(ScreenFlags::ALTERNATE);
                } else {
                    vte.screen.erase_screen(false);
                    vte.screen.reset_flags(ScreenFlags::ALTERNATE);
                }
            },
            // Save/restore the alternate-screen cursor. Independent of
            // DECSC so that ?1049 composes with ESC 7/ESC 8.
            1048 => {
                if vte.flags.contains(VteFlags::TITE_INHIBIT_MODE) {
                    continue;
                }
                if set {
                    vte.alt_cursor_x = vte.screen.cursor_x();
                    vte.alt_cursor_y = vte.screen.cursor_y();
                } else {
                    vte.screen.move_to(vte.alt_cursor_x, vte.alt_cursor_y);
                }
            },
            // Alternate screen buffer with cursor save and pre-erase.
            1049 => {
                if vte.flags.contains(VteFlags::TITE_INHIBIT_MODE) {
                    continue;
                }
                if set {
                    vte.alt_cursor_x = vte.screen.cursor_x();
                    vte.alt_cursor_y = vte.screen.cursor_y();
                    vte.screen.set_flags(ScreenFlags::ALTERNATE);
                    vte.screen.erase_screen(false);
                } else {
                    vte.screen.reset_flags(ScreenFlags::ALTERNATE);
                    vte.screen.move_to(vte.alt_cursor_x, vte.alt_cursor_y);
                }
            },
            m => debug!("unknown DEC private (re)set-mode {m}"),
        }
    }
}

/// DECSCL: select the conformance level. Always soft resets first.
fn compat_mode<S: Screen>(vte: &mut Vte<S>, params: &CsiParams) {
    vte.reset();

    match params.get(0) {
        // VT100 mode. We are compatible enough not to emulate it
        // explicitly, but enforce 7-bit input to sidestep character
        // table problems.
        61 => {
            vte.flags.insert(VteFlags::SEVEN_BIT_MODE);
            vte.charsets.designate(CharsetIndex::G0, &UNICODE_LOWER);
            vte.charsets
                .designate(CharsetIndex::G1, &DEC_SUPPLEMENTAL_GRAPHICS);
        },
        // VT200 through VT400 select 8-bit mode. VT220 defines the
        // second argument value 2 as 7-bit controls but VT3xx and later
        // use it for 8-bit; we conform with the latter.
        62..=64 => {
            if params.get(1) == 1 || params.get(1) == 2 {
                vte.flags.insert(VteFlags::USE_C1);
            }
            vte.flags.insert(VteFlags::EIGHT_BIT_MODE);
            vte.charsets.designate(CharsetIndex::G0, &UNICODE_LOWER);
            vte.charsets
                .designate(CharsetIndex::G1, &DEC_SUPPLEMENTAL_GRAPHICS);
        },
        level => {
            debug!("unhandled DECSCL level {level}, staying in utf-8 mode")
        },
    }
}

/// DA: answer primary or secondary device attribute requests.
fn device_attributes<S: Screen>(vte: &mut Vte<S>, params: &CsiParams) {
    if params.argc() <= 1 && params.get(0) <= 0 {
        if params.flags().is_empty() {
            vte.send_primary_da();
            return;
        }
        if params.flags().contains(CsiFlags::GT) {
            vte.reply(b"\x1b[>1;1;0c");
            return;
        }
    }

    debug!("unhandled device attributes request");
}

/// DSR: operating status and cursor position reports.
fn status_report<S: Screen>(vte: &mut Vte<S>, params: &CsiParams) {
    match params.get(0) {
        5 => vte.reply(b"\x1b[0n"),
        6 => {
            let x = vte.screen.cursor_x();
            let y = vte.screen.cursor_y();
            let report = format!("\x1b[{};{}R", y + 1, x + 1);
            vte.reply(report.as_bytes());
        },
        _ => {},
    }
}
