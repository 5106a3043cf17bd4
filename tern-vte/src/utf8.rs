use utf8parse::Receiver;

#[derive(Default)]
struct Scalar {
    inner: Option<char>,
}

impl Receiver for Scalar {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Byte-fed UTF-8 decoder.
///
/// Wraps the `utf8parse` DFA; a malformed sequence yields U+FFFD and
/// resets the machine.
#[derive(Default)]
pub struct Decoder {
    inner: utf8parse::Parser,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte, returning the decoded scalar value once a sequence
    /// completes.
    pub fn advance(&mut self, byte: u8) -> Option<char> {
        let mut scalar = Scalar::default();
        self.inner.advance(&mut scalar, byte);
        scalar.inner
    }

    /// Discard a partially decoded sequence.
    pub fn reset(&mut self) {
        self.inner = utf8parse::Parser::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<char> {
        let mut decoder = Decoder::new();
        bytes.iter().filter_map(|&b| decoder.advance(b)).collect()
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode(b"az"), vec!['a', 'z']);
    }

    #[test]
    fn multi_byte_sequences_complete() {
        assert_eq!(decode("\u{e9}\u{20ac}\u{1f600}".as_bytes()), vec![
            '\u{e9}', '\u{20ac}', '\u{1f600}'
        ]);
    }

    #[test]
    fn stray_continuation_byte_is_replaced() {
        assert_eq!(decode(b"\x80"), vec![char::REPLACEMENT_CHARACTER]);
    }

    #[test]
    fn reset_discards_partial_sequence() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.advance(0xe2), None);
        decoder.reset();
        assert_eq!(decoder.advance(b'x'), Some('x'));
    }
}
