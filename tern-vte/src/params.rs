use bitflags::bitflags;

/// Maximum number of CSI arguments kept per sequence.
pub const CSI_ARG_MAX: usize = 16;

/// Maximum length of a collected OSC string in bytes.
pub const OSC_MAX_LEN: usize = 128;

bitflags! {
    /// Intermediate and parameter-prefix bytes observed while collecting
    /// an ESC or CSI sequence.
    ///
    /// Only the bytes that select well-known sequence variants get a bit;
    /// any other intermediate is absorbed without effect.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CsiFlags: u16 {
        /// `!`
        const BANG   = 0x0001;
        /// `$`
        const CASH   = 0x0002;
        /// `?`
        const WHAT   = 0x0004;
        /// `>`
        const GT     = 0x0008;
        /// space
        const SPACE  = 0x0010;
        /// `'`
        const SQUOTE = 0x0020;
        /// `"`
        const DQUOTE = 0x0040;
        /// `*`
        const MULT   = 0x0080;
        /// `+`
        const PLUS   = 0x0100;
        /// `(`
        const POPEN  = 0x0200;
        /// `)`
        const PCLOSE = 0x0400;
    }
}

/// Accumulated CSI argument vector.
///
/// The vector has a fixed capacity of [`CSI_ARG_MAX`] signed slots. A slot
/// holding `-1` was never written and stands for an omitted argument;
/// written slots are clamped to 65535 so that runaway digit strings cannot
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsiParams {
    argv: [i32; CSI_ARG_MAX],
    argc: usize,
    flags: CsiFlags,
}

impl Default for CsiParams {
    fn default() -> Self {
        Self {
            argv: [-1; CSI_ARG_MAX],
            argc: 0,
            flags: CsiFlags::empty(),
        }
    }
}

impl CsiParams {
    /// Number of populated argument slots.
    #[must_use]
    pub fn argc(&self) -> usize {
        self.argc
    }

    /// Argument at `idx`, or `-1` when the slot was never written.
    ///
    /// Reading past `argc()` is allowed and yields the unset sentinel,
    /// which is how omitted trailing arguments are modelled.
    #[must_use]
    pub fn get(&self, idx: usize) -> i32 {
        self.argv.get(idx).copied().unwrap_or(-1)
    }

    /// Intermediate flags collected for the current sequence.
    #[must_use]
    pub fn flags(&self) -> CsiFlags {
        self.flags
    }

    /// Iterate over the populated argument slots.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.argv[..self.argc].iter().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.argv = [-1; CSI_ARG_MAX];
        self.argc = 0;
        self.flags = CsiFlags::empty();
    }

    pub(crate) fn collect(&mut self, cp: u32) {
        let flag = match cp {
            0x21 => CsiFlags::BANG,
            0x24 => CsiFlags::CASH,
            0x3f => CsiFlags::WHAT,
            0x3e => CsiFlags::GT,
            0x20 => CsiFlags::SPACE,
            0x27 => CsiFlags::SQUOTE,
            0x22 => CsiFlags::DQUOTE,
            0x2a => CsiFlags::MULT,
            0x2b => CsiFlags::PLUS,
            0x28 => CsiFlags::POPEN,
            0x29 => CsiFlags::PCLOSE,
            _ => return,
        };

        self.flags.insert(flag);
    }

    pub(crate) fn param(&mut self, cp: u32) {
        if cp == u32::from(b';') {
            if self.argc < CSI_ARG_MAX {
                self.argc += 1;
            }
            return;
        }

        if self.argc >= CSI_ARG_MAX {
            return;
        }

        if let Some(digit) = char::from_u32(cp).and_then(|c| c.to_digit(10)) {
            let current = self.argv[self.argc].max(0);
            self.argv[self.argc] = (current * 10 + digit as i32).min(0xffff);
        }
    }

    /// Count the slot the final byte terminated.
    pub(crate) fn finish(&mut self) {
        if self.argc < CSI_ARG_MAX {
            self.argc += 1;
        }
    }
}

/// Collected OSC payload.
///
/// Codepoints are stored UTF-8 encoded; input that would grow the buffer
/// past [`OSC_MAX_LEN`] - 1 bytes is silently dropped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OscBuffer {
    data: [u8; OSC_MAX_LEN],
    len: usize,
}

impl Default for OscBuffer {
    fn default() -> Self {
        Self {
            data: [0; OSC_MAX_LEN],
            len: 0,
        }
    }
}

impl OscBuffer {
    pub(crate) fn clear(&mut self) {
        self.data = [0; OSC_MAX_LEN];
        self.len = 0;
    }

    pub(crate) fn put(&mut self, cp: u32) {
        let Some(c) = char::from_u32(cp) else {
            return;
        };

        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();
        if self.len + encoded.len() > OSC_MAX_LEN - 1 {
            return;
        }

        self.data[self.len..self.len + encoded.len()].copy_from_slice(encoded);
        self.len += encoded.len();
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_digits(params: &mut CsiParams, s: &str) {
        for b in s.bytes() {
            params.param(u32::from(b));
        }
    }

    #[test]
    fn omitted_arguments_stay_unset() {
        let params = CsiParams::default();
        assert_eq!(params.get(0), -1);
        assert_eq!(params.get(CSI_ARG_MAX + 3), -1);
        assert_eq!(params.argc(), 0);
    }

    #[test]
    fn digits_accumulate_decimal() {
        let mut params = CsiParams::default();
        feed_digits(&mut params, "1048");
        assert_eq!(params.get(0), 1048);
    }

    #[test]
    fn values_clamp_at_16_bits() {
        let mut params = CsiParams::default();
        feed_digits(&mut params, "99999999999");
        assert_eq!(params.get(0), 0xffff);
    }

    #[test]
    fn argc_saturates_at_capacity() {
        let mut params = CsiParams::default();
        for n in 0..32 {
            feed_digits(&mut params, &n.to_string());
            params.param(u32::from(b';'));
        }
        assert_eq!(params.argc(), CSI_ARG_MAX);
        assert_eq!(params.get(0), 0);
        assert_eq!(params.get(CSI_ARG_MAX - 1), 15);
    }

    #[test]
    fn collect_sets_known_flags_only() {
        let mut params = CsiParams::default();
        params.collect(u32::from(b'?'));
        params.collect(u32::from(b'>'));
        params.collect(u32::from(b'#'));
        assert_eq!(params.flags(), CsiFlags::WHAT | CsiFlags::GT);
    }

    #[test]
    fn osc_overflow_drops_input() {
        let mut osc = OscBuffer::default();
        for _ in 0..OSC_MAX_LEN {
            osc.put(u32::from(b'x'));
        }
        assert_eq!(osc.as_bytes().len(), OSC_MAX_LEN - 1);

        // Multi-byte encodings that would straddle the cap are dropped whole.
        osc.clear();
        for _ in 0..63 {
            osc.put(0x00e9);
        }
        assert_eq!(osc.as_bytes().len(), 126);
        osc.put(0x00e9);
        assert_eq!(osc.as_bytes().len(), 126);
        osc.put(u32::from(b'!'));
        assert_eq!(osc.as_bytes().len(), 127);
    }
}
