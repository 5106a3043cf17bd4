use bitflags::bitflags;

bitflags! {
    /// Terminal mode word, driven by SM/RM, DECSET/DECRST, ESC dispatch
    /// and the keyboard handler.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VteFlags: u32 {
        /// DECCKM: cursor keys send application sequences.
        const CURSOR_KEY_MODE = 0x0000_0001;
        /// DECKPAM: keypad sends application sequences.
        const KEYPAD_APPLICATION_MODE = 0x0000_0002;
        /// LNM: line feed implies carriage return.
        const LINE_FEED_NEW_LINE_MODE = 0x0000_0004;
        /// Disable UTF-8 decoding, pass bytes through unchanged.
        const EIGHT_BIT_MODE = 0x0000_0008;
        /// Disable UTF-8 decoding, mask input to seven bits.
        const SEVEN_BIT_MODE = 0x0000_0010;
        /// S8C1T: replies may use 8-bit C1 controls.
        const USE_C1 = 0x0000_0020;
        /// KAM: keyboard locked.
        const KEYBOARD_ACTION_MODE = 0x0000_0040;
        /// IRM: insert instead of replace.
        const INSERT_REPLACE_MODE = 0x0000_0080;
        /// SRM: local echo disabled.
        const SEND_RECEIVE_MODE = 0x0000_0100;
        /// DECTCEM: cursor visible.
        const TEXT_CURSOR_MODE = 0x0000_0200;
        /// DECSCNM: inverse video for the whole screen.
        const INVERSE_SCREEN_MODE = 0x0000_0400;
        /// DECOM: cursor addressing relative to the margins.
        const ORIGIN_MODE = 0x0000_0800;
        /// DECAWM: wrap at the right margin.
        const AUTO_WRAP_MODE = 0x0000_1000;
        /// DECARM: auto repeat key presses.
        const AUTO_REPEAT_MODE = 0x0000_2000;
        /// DECNRCM: national replacement character sets.
        const NATIONAL_CHARSET_MODE = 0x0000_4000;
        /// BCE: erased cells take the current background color.
        const BACKGROUND_COLOR_ERASE_MODE = 0x0000_8000;
        /// One-shot: prefix the next outbound write with ESC (Alt).
        const PREPEND_ESCAPE = 0x0001_0000;
        /// Refuse all alternate screen buffer switches.
        const TITE_INHIBIT_MODE = 0x0002_0000;
    }
}
