use std::mem;

use log::debug;
use tern_vte::{Actor, CsiFlags, CsiParams, Decoder, Parser};

use crate::attr::Attr;
use crate::charset::{CharsetIndex, Charsets};
use crate::color::ColorSlot;
use crate::keyboard::{Key, Mods};
use crate::mode::VteFlags;
use crate::palette::{Palette, PaletteTable};
use crate::screen::{Screen, ScreenFlags};
use crate::{control, csi, esc, keyboard};

/// Cursor and rendition state captured by DECSC and restored by DECRC.
#[derive(Default)]
pub(crate) struct SavedState {
    pub(crate) cursor_x: u32,
    pub(crate) cursor_y: u32,
    pub(crate) attr: Attr,
    pub(crate) gl: CharsetIndex,
    pub(crate) gr: CharsetIndex,
    pub(crate) wrap_mode: bool,
    pub(crate) origin_mode: bool,
}

/// A virtual terminal: the byte-stream interpreter of one session.
///
/// The instance owns the screen it drives and a write callback for reply
/// bytes. Input bytes go through the UTF-8 front-end (unless a 7-bit or
/// 8-bit compatibility mode is active), the escape sequence parser, and
/// the dispatcher, which mutates the screen and occasionally answers on
/// the write callback. Keyboard events are encoded onto the same
/// callback.
///
/// All entry points take `&mut self`; the emulator never blocks and never
/// calls back into itself from another thread. Reply bytes are looped
/// back through the parser when local echo is active (SRM off), bounded
/// by a re-entry counter so that echoing cannot recurse.
pub struct Vte<S: Screen> {
    pub(crate) screen: S,
    pub(crate) write_cb: Box<dyn FnMut(&[u8])>,
    pub(crate) bell_cb: Option<Box<dyn FnMut()>>,
    pub(crate) osc_cb: Option<Box<dyn FnMut(&[u8])>>,
    pub(crate) palette: Palette,
    pub(crate) def_attr: Attr,
    pub(crate) cattr: Attr,
    pub(crate) flags: VteFlags,
    parser: Parser,
    utf8: Decoder,
    pub(crate) charsets: Charsets,
    pub(crate) saved: SavedState,
    pub(crate) alt_cursor_x: u32,
    pub(crate) alt_cursor_y: u32,
    parse_depth: u32,
}

impl<S: Screen> Vte<S> {
    /// Create an emulator bound to `screen`, sending reply bytes to
    /// `write_cb`. The new instance is soft-reset and the screen erased.
    pub fn new(screen: S, write_cb: impl FnMut(&[u8]) + 'static) -> Self {
        let palette = Palette::default();
        let mut def_attr = Attr {
            fccode: ColorSlot::Foreground as i8,
            bccode: ColorSlot::Background as i8,
            ..Attr::default()
        };
        palette.resolve(&mut def_attr);

        let mut vte = Self {
            screen,
            write_cb: Box::new(write_cb),
            bell_cb: None,
            osc_cb: None,
            palette,
            def_attr,
            cattr: def_attr,
            flags: VteFlags::empty(),
            parser: Parser::new(),
            utf8: Decoder::new(),
            charsets: Charsets::default(),
            saved: SavedState::default(),
            alt_cursor_x: 0,
            alt_cursor_y: 0,
            parse_depth: 0,
        };

        vte.reset();
        vte.screen.erase_screen(false);
        vte
    }

    /// Register the callback invoked on BEL.
    pub fn set_bell_cb(&mut self, cb: impl FnMut() + 'static) {
        self.bell_cb = Some(Box::new(cb));
    }

    /// Register the callback receiving completed OSC strings.
    pub fn set_osc_cb(&mut self, cb: impl FnMut(&[u8]) + 'static) {
        self.osc_cb = Some(Box::new(cb));
    }

    /// The attribute used for erased cells before any SGR ran.
    #[must_use]
    pub fn def_attr(&self) -> Attr {
        self.def_attr
    }

    /// The attribute applied to the next written glyph.
    #[must_use]
    pub fn current_attr(&self) -> Attr {
        self.cattr
    }

    /// The active terminal mode word.
    #[must_use]
    pub fn flags(&self) -> VteFlags {
        self.flags
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Select a built-in palette by name, `None` for the default.
    ///
    /// Unknown names select the default table; the name `custom` selects
    /// the table installed with [`Vte::set_custom_palette`]. The screen
    /// is erased with the new default attribute.
    pub fn set_palette(&mut self, name: Option<&str>) {
        self.palette.set_name(name);
        self.update_palette();
    }

    /// Install or remove the custom palette table.
    pub fn set_custom_palette(&mut self, table: Option<PaletteTable>) {
        self.palette.set_custom(table);
        self.update_palette();
    }

    fn update_palette(&mut self) {
        self.def_attr.fccode = ColorSlot::Foreground as i8;
        self.def_attr.bccode = ColorSlot::Background as i8;
        self.palette.resolve(&mut self.def_attr);
        self.cattr = self.def_attr;

        self.screen.set_def_attr(&self.def_attr);
        self.screen.erase_screen(false);
    }

    /// Allow or inhibit alternate screen buffer switches (xterm's
    /// `titeInhibit` resource). Cleared by a soft reset.
    pub fn set_tite_inhibit(&mut self, inhibit: bool) {
        self.flags.set(VteFlags::TITE_INHIBIT_MODE, inhibit);
    }

    /// Soft reset: parser, character sets, attribute and mode state
    /// return to power-on values. Screen content is left alone.
    pub fn reset(&mut self) {
        self.flags = VteFlags::TEXT_CURSOR_MODE
            | VteFlags::AUTO_REPEAT_MODE
            | VteFlags::SEND_RECEIVE_MODE
            | VteFlags::AUTO_WRAP_MODE
            | VteFlags::BACKGROUND_COLOR_ERASE_MODE;
        self.screen.reset();
        self.screen.set_flags(ScreenFlags::AUTO_WRAP);

        self.utf8.reset();
        self.parser.reset();
        self.charsets.reset();

        self.cattr = self.def_attr;
        self.palette.resolve(&mut self.cattr);
        self.screen.set_def_attr(&self.def_attr);

        self.reset_saved_state();
    }

    /// Soft reset plus screen erase, scrollback clear and cursor home.
    pub fn hard_reset(&mut self) {
        self.reset();
        self.screen.erase_screen(false);
        self.screen.clear_scrollback();
        self.screen.move_to(0, 0);
    }

    /// Feed a chunk of input bytes from the client.
    pub fn input(&mut self, bytes: &[u8]) {
        self.parse_depth += 1;
        for &byte in bytes {
            if self.flags.contains(VteFlags::SEVEN_BIT_MODE) {
                if byte & 0x80 != 0 {
                    debug!(
                        "receiving 8bit character U+{byte:02X} from pty while in 7bit mode"
                    );
                }
                self.process(u32::from(byte & 0x7f));
            } else if self.flags.contains(VteFlags::EIGHT_BIT_MODE) {
                self.process(u32::from(byte));
            } else if let Some(c) = self.utf8.advance(byte) {
                self.process(c as u32);
            }
        }
        self.parse_depth -= 1;
    }

    /// Encode a key press into outbound bytes.
    ///
    /// `ascii` carries the key's ascii-layout mapping when the active
    /// layout is not Latin, `unicode` the text the key produces. Returns
    /// whether the key was consumed.
    pub fn handle_keyboard(
        &mut self,
        key: Key,
        ascii: Option<char>,
        mods: Mods,
        unicode: Option<char>,
    ) -> bool {
        keyboard::perform(self, key, ascii, mods, unicode)
    }

    fn process(&mut self, cp: u32) {
        let mut parser = mem::take(&mut self.parser);
        parser.advance(cp, self);
        self.parser = parser;
    }

    /// Send reply bytes to the client.
    ///
    /// When local echo is active (SRM off) and no input parse is in
    /// progress, the bytes are first fed back through the input pipeline,
    /// escape prefix included. The one-shot escape prefix is consumed
    /// either way.
    pub(crate) fn reply(&mut self, bytes: &[u8]) {
        if self.parse_depth == 0
            && !self.flags.contains(VteFlags::SEND_RECEIVE_MODE)
        {
            if self.flags.contains(VteFlags::PREPEND_ESCAPE) {
                self.input(&[0x1b]);
            }
            self.input(bytes);
        }

        if self.flags.contains(VteFlags::PREPEND_ESCAPE) {
            (self.write_cb)(&[0x1b]);
        }
        (self.write_cb)(bytes);

        self.flags.remove(VteFlags::PREPEND_ESCAPE);
    }

    pub(crate) fn send_primary_da(&mut self) {
        self.reply(b"\x1b[?60;1;6;9;15c");
    }

    /// Write one glyph with the current attribute, re-resolving coded
    /// colors against the palette first.
    pub(crate) fn write_glyph(&mut self, c: char) {
        self.palette.resolve(&mut self.cattr);
        self.screen.write(c, &self.cattr);
    }

    /// DECSC.
    pub(crate) fn save_state(&mut self) {
        self.saved = SavedState {
            cursor_x: self.screen.cursor_x(),
            cursor_y: self.screen.cursor_y(),
            attr: self.cattr,
            gl: self.charsets.gl,
            gr: self.charsets.gr,
            wrap_mode: self.flags.contains(VteFlags::AUTO_WRAP_MODE),
            origin_mode: self.flags.contains(VteFlags::ORIGIN_MODE),
        };
    }

    /// DECRC.
    pub(crate) fn restore_state(&mut self) {
        self.screen.move_to(self.saved.cursor_x, self.saved.cursor_y);
        self.cattr = self.saved.attr;
        self.palette.resolve(&mut self.cattr);
        if self.flags.contains(VteFlags::BACKGROUND_COLOR_ERASE_MODE) {
            self.screen.set_def_attr(&self.cattr);
        }
        self.charsets.invoke_gl(self.saved.gl);
        self.charsets.invoke_gr(self.saved.gr);

        if self.saved.wrap_mode {
            self.flags.insert(VteFlags::AUTO_WRAP_MODE);
            self.screen.set_flags(ScreenFlags::AUTO_WRAP);
        } else {
            self.flags.remove(VteFlags::AUTO_WRAP_MODE);
            self.screen.reset_flags(ScreenFlags::AUTO_WRAP);
        }

        if self.saved.origin_mode {
            self.flags.insert(VteFlags::ORIGIN_MODE);
            self.screen.set_flags(ScreenFlags::REL_ORIGIN);
        } else {
            self.flags.remove(VteFlags::ORIGIN_MODE);
            self.screen.reset_flags(ScreenFlags::REL_ORIGIN);
        }
    }

    fn reset_saved_state(&mut self) {
        let mut attr = Attr::default();
        attr.copy_fcolor(&self.def_attr);
        attr.copy_bcolor(&self.def_attr);

        self.saved = SavedState {
            cursor_x: 0,
            cursor_y: 0,
            attr,
            gl: CharsetIndex::G0,
            gr: CharsetIndex::G1,
            wrap_mode: true,
            origin_mode: false,
        };
    }
}

impl<S: Screen> Actor for Vte<S> {
    fn print(&mut self, cp: u32) {
        let mapped = self.charsets.map(cp);
        let c = char::from_u32(mapped).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.write_glyph(c);
    }

    fn execute(&mut self, ctrl: u32) {
        control::perform(self, ctrl);
    }

    fn esc_dispatch(&mut self, flags: CsiFlags, byte: u32) {
        esc::perform(self, flags, byte);
    }

    fn csi_dispatch(&mut self, params: &CsiParams, byte: u32) {
        csi::perform(self, params, byte);
    }

    fn dcs_start(&mut self) {
        // Device control strings are parsed for protocol fidelity but
        // their payload is not interpreted.
        debug!("ignoring device control string");
    }

    fn dcs_put(&mut self, _: u32) {}

    fn dcs_end(&mut self) {}

    fn osc_dispatch(&mut self, data: &[u8]) {
        if let Some(cb) = self.osc_cb.as_mut() {
            cb(data);
        }
    }
}
