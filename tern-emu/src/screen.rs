//! Abstraction over the character-cell display the emulator drives.
//!
//! The [`Screen`] trait specifies the operations the interpreter needs
//! from a grid implementation: cursor movement, scrolling, tab stops,
//! margins, insertion/deletion, the erase family, and flag toggles. The
//! emulator owns a `Screen` for its lifetime and mutates it through these
//! operations; rendering, scrollback storage and reflow are entirely the
//! implementation's business.

use bitflags::bitflags;

use crate::attr::Attr;

bitflags! {
    /// Screen behavior toggles pushed down from the mode manager.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScreenFlags: u32 {
        /// Written characters push existing cells to the right.
        const INSERT_MODE = 0x01;
        /// Writes past the last column wrap to the next line.
        const AUTO_WRAP = 0x02;
        /// Do not draw the cursor.
        const HIDE_CURSOR = 0x04;
        /// Swap foreground and background of every cell.
        const INVERSE = 0x08;
        /// Cursor addressing is relative to the scroll margins.
        const REL_ORIGIN = 0x10;
        /// The alternate buffer is active.
        const ALTERNATE = 0x20;
    }
}

/// Consumer interface of a rectangular character-cell display.
pub trait Screen {
    /// Current cursor column, 0-based.
    fn cursor_x(&self) -> u32;

    /// Current cursor row, 0-based.
    fn cursor_y(&self) -> u32;

    /// Move the cursor to an absolute position, clamped to the grid.
    fn move_to(&mut self, x: u32, y: u32);

    /// Move the cursor up, scrolling the region when `scroll` is set and
    /// the cursor sits on the top margin.
    fn move_up(&mut self, num: u32, scroll: bool);

    /// Move the cursor down, scrolling the region when `scroll` is set
    /// and the cursor sits on the bottom margin.
    fn move_down(&mut self, num: u32, scroll: bool);

    fn move_left(&mut self, num: u32);

    fn move_right(&mut self, num: u32);

    /// Carriage return plus line feed.
    fn newline(&mut self);

    /// Move the cursor to the first column of the current line.
    fn move_line_home(&mut self);

    fn scroll_up(&mut self, num: u32);

    fn scroll_down(&mut self, num: u32);

    /// Move the cursor to the `num`-th following tab stop.
    fn tab_right(&mut self, num: u32);

    /// Move the cursor to the `num`-th preceding tab stop.
    fn tab_left(&mut self, num: u32);

    /// Set a tab stop at the cursor column.
    fn set_tabstop(&mut self);

    /// Clear the tab stop at the cursor column.
    fn reset_tabstop(&mut self);

    fn reset_all_tabstops(&mut self);

    /// Set the vertical scroll margins; both are 1-based rows.
    fn set_margins(&mut self, top: u32, bottom: u32);

    fn insert_lines(&mut self, num: u32);

    fn delete_lines(&mut self, num: u32);

    fn insert_chars(&mut self, num: u32);

    fn delete_chars(&mut self, num: u32);

    /// Erase `num` cells starting at the cursor without moving it.
    fn erase_chars(&mut self, num: u32);

    /// Erase from the cursor to the end of the line.
    ///
    /// `protect` spares cells whose attribute carries the protect bit;
    /// the same applies to the rest of the erase family.
    fn erase_cursor_to_end(&mut self, protect: bool);

    fn erase_home_to_cursor(&mut self, protect: bool);

    fn erase_current_line(&mut self, protect: bool);

    fn erase_cursor_to_screen(&mut self, protect: bool);

    fn erase_screen_to_cursor(&mut self, protect: bool);

    fn erase_screen(&mut self, protect: bool);

    fn clear_scrollback(&mut self);

    /// Write one glyph at the cursor with the given attribute, advancing
    /// the cursor.
    fn write(&mut self, c: char, attr: &Attr);

    /// Publish the attribute used when erasing cells.
    fn set_def_attr(&mut self, attr: &Attr);

    fn set_flags(&mut self, flags: ScreenFlags);

    fn reset_flags(&mut self, flags: ScreenFlags);

    /// Reset margins, tab stops and flags to power-on state.
    fn reset(&mut self);
}
