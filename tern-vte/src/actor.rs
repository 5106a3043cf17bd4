//! Callbacks invoked by the virtual terminal parser.
//!
//! The [`Parser`](crate::parser::Parser) walks through a stream of decoded
//! codepoints and translates it into higher level terminal actions. Those
//! actions are handed over to an [`Actor`] implementation that is
//! responsible for mutating the terminal model, writing replies, logging,
//! or whatever else the embedding application needs. The trait methods
//! mirror the action set defined by the DEC/ECMA-48 escape sequence state
//! machine. Implementations should be prepared to receive any sequence of
//! calls that is valid according to the virtual terminal protocol, and
//! should avoid performing additional parsing themselves.

use crate::params::{CsiFlags, CsiParams};

/// Consumer-facing interface for terminal actions emitted by the parser.
///
/// Each method corresponds to a particular class of escape sequence or
/// printable data encountered while decoding a terminal stream. The
/// semantics follow ECMA-48 where possible, with a few well-established
/// DEC and xterm extensions.
pub trait Actor {
    /// Emits a single printable codepoint.
    ///
    /// The value is the raw codepoint as it came out of the input decoder;
    /// GL/GR character-set translation is the consumer's job.
    fn print(&mut self, cp: u32);

    /// Executes an immediate single-byte control function.
    ///
    /// This covers C0/C1 control characters that are *not* part of longer
    /// sequences (e.g. `BEL`, `BS`, `CR`, `SUB`, `IND`, `NEL`, `HTS`).
    fn execute(&mut self, ctrl: u32);

    /// Dispatches a completed escape sequence.
    ///
    /// `flags` carries the intermediate bytes collected since the
    /// introducing `ESC` (e.g. `(` for G0 charset designation).
    fn esc_dispatch(&mut self, flags: CsiFlags, byte: u32);

    /// Dispatches a Control Sequence Introducer (CSI) escape.
    ///
    /// `params` holds the accumulated argument vector and intermediate
    /// flags; the final slot has already been counted.
    fn csi_dispatch(&mut self, params: &CsiParams, byte: u32);

    /// Signals the start of a Device Control String (DCS).
    fn dcs_start(&mut self);

    /// Passes one codepoint of DCS payload to the active handler.
    fn dcs_put(&mut self, cp: u32);

    /// Marks the end of the current device control string.
    fn dcs_end(&mut self);

    /// Dispatches a completed Operating System Command (OSC) string.
    fn osc_dispatch(&mut self, data: &[u8]);
}
