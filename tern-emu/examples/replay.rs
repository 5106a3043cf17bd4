//! Feed a small byte script through the emulator against a no-op screen
//! and print whatever the terminal answers.
use tern_emu::{Attr, Screen, ScreenFlags, Vte};

#[derive(Default)]
struct NullScreen {
    x: u32,
    y: u32,
}

impl Screen for NullScreen {
    fn cursor_x(&self) -> u32 {
        self.x
    }
    fn cursor_y(&self) -> u32 {
        self.y
    }
    fn move_to(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }
    fn move_up(&mut self, num: u32, _scroll: bool) {
        self.y = self.y.saturating_sub(num);
    }
    fn move_down(&mut self, num: u32, _scroll: bool) {
        self.y += num;
    }
    fn move_left(&mut self, num: u32) {
        self.x = self.x.saturating_sub(num);
    }
    fn move_right(&mut self, num: u32) {
        self.x += num;
    }
    fn newline(&mut self) {
        self.x = 0;
        self.y += 1;
    }
    fn move_line_home(&mut self) {
        self.x = 0;
    }
    fn scroll_up(&mut self, _num: u32) {}
    fn scroll_down(&mut self, _num: u32) {}
    fn tab_right(&mut self, _num: u32) {}
    fn tab_left(&mut self, _num: u32) {}
    fn set_tabstop(&mut self) {}
    fn reset_tabstop(&mut self) {}
    fn reset_all_tabstops(&mut self) {}
    fn set_margins(&mut self, _top: u32, _bottom: u32) {}
    fn insert_lines(&mut self, _num: u32) {}
    fn delete_lines(&mut self, _num: u32) {}
    fn insert_chars(&mut self, _num: u32) {}
    fn delete_chars(&mut self, _num: u32) {}
    fn erase_chars(&mut self, _num: u32) {}
    fn erase_cursor_to_end(&mut self, _protect: bool) {}
    fn erase_home_to_cursor(&mut self, _protect: bool) {}
    fn erase_current_line(&mut self, _protect: bool) {}
    fn erase_cursor_to_screen(&mut self, _protect: bool) {}
    fn erase_screen_to_cursor(&mut self, _protect: bool) {}
    fn erase_screen(&mut self, _protect: bool) {}
    fn clear_scrollback(&mut self) {}
    fn write(&mut self, c: char, _attr: &Attr) {
        print!("{c}");
        self.x += 1;
    }
    fn set_def_attr(&mut self, _attr: &Attr) {}
    fn set_flags(&mut self, _flags: ScreenFlags) {}
    fn reset_flags(&mut self, _flags: ScreenFlags) {}
    fn reset(&mut self) {}
}

fn main() {
    let mut vte = Vte::new(NullScreen::default(), |bytes| {
        eprintln!("reply: {:?}", String::from_utf8_lossy(bytes));
    });
    vte.set_bell_cb(|| eprintln!("bell!"));
    vte.set_osc_cb(|data| {
        eprintln!("osc: {:?}", String::from_utf8_lossy(data));
    });

    vte.input(b"\x1b]0;replay\x07\x1b[1;32mhello\x1b[0m world\x07\r\n");
    vte.input(b"\x1b[6n\x1b[c");
    println!();
}
