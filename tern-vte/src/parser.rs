use crate::actor::Actor;
use crate::enums::{Action, State};
use crate::params::{CsiParams, OscBuffer};
use crate::transitions;

/// DEC VT500 escape sequence state machine.
///
/// The parser consumes decoded codepoints one at a time and turns them
/// into [`Actor`] callbacks. It owns the CSI argument accumulator and the
/// OSC payload buffer; dispatch hands the collected data to the actor by
/// reference. Feeding the parser is infallible: malformed sequences take
/// the diagram's ignore paths and never wedge the machine.
#[derive(Default)]
pub struct Parser {
    state: State,
    params: CsiParams,
    osc: OscBuffer,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single codepoint.
    ///
    /// A state change performs the old state's exit action, the transition
    /// action and the new state's entry action, in that order.
    pub fn advance<A: Actor>(&mut self, cp: u32, actor: &mut A) {
        let (next, action) = transitions::transit(self.state, cp);

        if next == self.state {
            self.perform(action, cp, actor);
            return;
        }

        self.perform(transitions::exit_action(self.state), cp, actor);
        self.perform(action, cp, actor);
        self.perform(transitions::entry_action(next), cp, actor);
        self.state = next;
    }

    /// Drop any partially collected sequence and return to ground.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.params.clear();
        self.osc.clear();
    }

    fn perform<A: Actor>(&mut self, action: Action, cp: u32, actor: &mut A) {
        use Action::*;

        match action {
            None | Ignore => {},
            Print => actor.print(cp),
            Execute => actor.execute(cp),
            Clear | OscStart => {
                self.params.clear();
                self.osc.clear();
            },
            Collect => self.params.collect(cp),
            Param => self.params.param(cp),
            EscDispatch => actor.esc_dispatch(self.params.flags(), cp),
            CsiDispatch => {
                self.params.finish();
                actor.csi_dispatch(&self.params, cp);
            },
            DcsStart => actor.dcs_start(),
            DcsPut => actor.dcs_put(cp),
            DcsEnd => actor.dcs_end(),
            OscPut => self.osc.put(cp),
            OscEnd => actor.osc_dispatch(self.osc.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CsiFlags;
    use crate::utf8::Decoder;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Print(u32),
        Execute(u32),
        EscDispatch {
            flags: CsiFlags,
            byte: u32,
        },
        CsiDispatch {
            args: Vec<i32>,
            flags: CsiFlags,
            byte: u32,
        },
        DcsStart,
        DcsPut(u32),
        DcsEnd,
        OscDispatch(Vec<u8>),
    }

    #[derive(Default)]
    struct CollectingActor {
        events: Vec<Event>,
    }

    impl Actor for CollectingActor {
        fn print(&mut self, cp: u32) {
            self.events.push(Event::Print(cp));
        }

        fn execute(&mut self, ctrl: u32) {
            self.events.push(Event::Execute(ctrl));
        }

        fn esc_dispatch(&mut self, flags: CsiFlags, byte: u32) {
            self.events.push(Event::EscDispatch { flags, byte });
        }

        fn csi_dispatch(&mut self, params: &CsiParams, byte: u32) {
            self.events.push(Event::CsiDispatch {
                args: params.iter().collect(),
                flags: params.flags(),
                byte,
            });
        }

        fn dcs_start(&mut self) {
            self.events.push(Event::DcsStart);
        }

        fn dcs_put(&mut self, cp: u32) {
            self.events.push(Event::DcsPut(cp));
        }

        fn dcs_end(&mut self) {
            self.events.push(Event::DcsEnd);
        }

        fn osc_dispatch(&mut self, data: &[u8]) {
            self.events.push(Event::OscDispatch(data.to_vec()));
        }
    }

    fn parse(bytes: &[u8]) -> Vec<Event> {
        let mut parser = Parser::new();
        let mut decoder = Decoder::new();
        let mut actor = CollectingActor::default();

        for &byte in bytes {
            if let Some(c) = decoder.advance(byte) {
                parser.advance(c as u32, &mut actor);
            }
        }

        actor.events
    }

    #[test]
    fn parses_printable_ascii() {
        assert_eq!(
            parse(b"hi\x07"),
            vec![
                Event::Print(u32::from(b'h')),
                Event::Print(u32::from(b'i')),
                Event::Execute(0x07),
            ]
        );
    }

    #[test]
    fn print_utf8() {
        assert_eq!(parse("\u{af}\u{1f600}".as_bytes()), vec![
            Event::Print(0xaf),
            Event::Print(0x1f600)
        ]);
    }

    #[test]
    fn malformed_utf8_prints_replacement() {
        assert_eq!(parse(b"\x80A"), vec![
            Event::Print(0xfffd),
            Event::Print(u32::from(b'A')),
        ]);
    }

    #[test]
    fn csi_with_parameters() {
        assert_eq!(parse(b"\x1b[1;31m"), vec![Event::CsiDispatch {
            args: vec![1, 31],
            flags: CsiFlags::empty(),
            byte: u32::from(b'm'),
        }]);
    }

    #[test]
    fn csi_without_parameters_counts_one_unset_slot() {
        assert_eq!(parse(b"\x1b[J"), vec![Event::CsiDispatch {
            args: vec![-1],
            flags: CsiFlags::empty(),
            byte: u32::from(b'J'),
        }]);
    }

    #[test]
    fn decset_collects_question_mark() {
        assert_eq!(parse(b"\x1b[?25l"), vec![Event::CsiDispatch {
            args: vec![25],
            flags: CsiFlags::WHAT,
            byte: u32::from(b'l'),
        }]);
    }

    #[test]
    fn charset_designation_collects_intermediate() {
        assert_eq!(parse(b"\x1b(B"), vec![Event::EscDispatch {
            flags: CsiFlags::POPEN,
            byte: u32::from(b'B'),
        }]);
    }

    #[test]
    fn cancel_aborts_csi_sequence() {
        assert_eq!(parse(b"\x1b[1;2\x18X"), vec![
            Event::Execute(0x18),
            Event::Print(u32::from(b'X')),
        ]);
    }

    #[test]
    fn colon_sends_sequence_to_ignore() {
        assert_eq!(parse(b"\x1b[4:3mX"), vec![Event::Print(u32::from(b'X'))]);
    }

    #[test]
    fn osc_with_bel_terminator() {
        assert_eq!(parse(b"\x1b]0;title\x07"), vec![Event::OscDispatch(
            b"0;title".to_vec()
        )]);
    }

    #[test]
    fn osc_with_esc_backslash_terminator() {
        assert_eq!(parse(b"\x1b]2;ab\x1b\\"), vec![
            Event::OscDispatch(b"2;ab".to_vec()),
            Event::EscDispatch {
                flags: CsiFlags::empty(),
                byte: u32::from(b'\\'),
            },
        ]);
    }

    #[test]
    fn osc_via_c1_introducer_and_terminator() {
        assert_eq!(parse("\u{9d}7;cwd\u{9c}".as_bytes()), vec![
            Event::OscDispatch(b"7;cwd".to_vec()),
            Event::Execute(0x9c),
        ]);
    }

    #[test]
    fn osc_collects_utf8_payload() {
        assert_eq!(parse("\x1b]0;\u{e9}\x07".as_bytes()), vec![
            Event::OscDispatch("0;\u{e9}".as_bytes().to_vec())
        ]);
    }

    #[test]
    fn dcs_payload_is_forwarded_not_interpreted() {
        assert_eq!(parse(b"\x1bP1000phello\x1b\\"), vec![
            Event::DcsStart,
            Event::DcsPut(u32::from(b'h')),
            Event::DcsPut(u32::from(b'e')),
            Event::DcsPut(u32::from(b'l')),
            Event::DcsPut(u32::from(b'l')),
            Event::DcsPut(u32::from(b'o')),
            Event::DcsEnd,
            Event::EscDispatch {
                flags: CsiFlags::empty(),
                byte: u32::from(b'\\'),
            },
        ]);
    }

    #[test]
    fn sos_pm_apc_strings_are_skipped() {
        assert_eq!(parse(b"\x1bXsecret\x1b\\A"), vec![
            Event::EscDispatch {
                flags: CsiFlags::empty(),
                byte: u32::from(b'\\'),
            },
            Event::Print(u32::from(b'A')),
        ]);
    }

    #[test]
    fn c1_csi_introducer() {
        assert_eq!(parse("\u{9b}2J".as_bytes()), vec![Event::CsiDispatch {
            args: vec![2],
            flags: CsiFlags::empty(),
            byte: u32::from(b'J'),
        }]);
    }

    #[test]
    fn controls_execute_inside_csi() {
        assert_eq!(parse(b"\x1b[1\x0a2m"), vec![
            Event::Execute(0x0a),
            Event::CsiDispatch {
                args: vec![12],
                flags: CsiFlags::empty(),
                byte: u32::from(b'm'),
            },
        ]);
    }

    #[test]
    fn parameters_beyond_capacity_are_dropped() {
        let mut input = String::from("\x1b[");
        for n in 0..24 {
            input.push_str(&n.to_string());
            input.push(';');
        }
        input.push('m');

        assert_eq!(parse(input.as_bytes()), vec![Event::CsiDispatch {
            args: (0..16).collect(),
            flags: CsiFlags::empty(),
            byte: u32::from(b'm'),
        }]);
    }
}
