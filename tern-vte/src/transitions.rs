//! Transition helpers for the `tern-vte` finite state machine.
//!
//! The parser is driven by a table of state transitions that mirrors the
//! DEC VT500 series state diagram. Each function in this module is
//! responsible for a specific parser state: given an input codepoint it
//! returns the next [`State`] and the [`Action`] the higher level
//! controller should perform. This keeps terminal emulation logic
//! table-driven and makes it straightforward to audit coverage for the
//! different control-sequence families (ESC, CSI, DCS, OSC and the
//! SOS/PM/APC strings that are skipped until ST).
//!
//! The machine consumes decoded codepoints rather than raw bytes, so every
//! state needs a default arm: values above 0xFF take the same path the
//! original diagram assigns to its fall-through class (printable in
//! ground, payload in OSC/DCS strings, and so on).

use crate::enums::{Action, State};

/// Transitions that preempt the per-state tables in any state: CAN/SUB,
/// ESC and the C1 controls. These must be checked first so that a control
/// inside an unfinished CSI/OSC/DCS sequence correctly aborts it.
#[inline(always)]
const fn anywhere(cp: u32) -> Option<(State, Action)> {
    use Action::*;
    use State::*;

    match cp {
        0x18 | 0x1a | 0x80..=0x8f | 0x91..=0x97 | 0x99 | 0x9a | 0x9c => {
            Some((Ground, Execute))
        },
        0x1b => Some((Escape, None)),
        0x98 | 0x9e | 0x9f => Some((StIgnore, None)),
        0x90 => Some((DcsEntry, None)),
        0x9d => Some((OscString, None)),
        0x9b => Some((CsiEntry, None)),
        _ => Option::None,
    }
}

/// Ground state handling printable data and C0 controls.
#[inline(always)]
const fn ground(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (Ground, Execute),
        _ => (Ground, Print),
    }
}

/// ESC state waiting for the next codepoint to identify the sequence
/// family.
#[inline(always)]
const fn escape(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (Escape, Execute),
        0x7f => (Escape, Ignore),
        0x30..=0x4f | 0x51..=0x57 | 0x59 | 0x5a | 0x5c | 0x60..=0x7e => {
            (Ground, EscDispatch)
        },
        0x5b => (CsiEntry, None),
        0x5d => (OscString, None),
        0x50 => (DcsEntry, None),
        0x58 | 0x5e | 0x5f => (StIgnore, None),
        _ => (EscapeIntermediate, Collect),
    }
}

/// ESC state that collects intermediate bytes before dispatch.
#[inline(always)]
const fn escape_intermediate(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (EscapeIntermediate, Execute),
        0x7f => (EscapeIntermediate, Ignore),
        0x30..=0x7e => (Ground, EscDispatch),
        _ => (EscapeIntermediate, Collect),
    }
}

/// CSI entry point that validates and routes subsequent parameter bytes.
#[inline(always)]
const fn csi_entry(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiEntry, Execute),
        0x7f => (CsiEntry, Ignore),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x3c..=0x3f => (CsiParam, Collect),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiIgnore, None),
    }
}

/// CSI parameter collection handling numeric fields and separators.
#[inline(always)]
const fn csi_param(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiParam, Execute),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x7f => (CsiParam, Ignore),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiIgnore, None),
    }
}

/// CSI intermediate state collecting extra bytes prior to dispatch.
#[inline(always)]
const fn csi_intermediate(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiIntermediate, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x7f => (CsiIntermediate, Ignore),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiIgnore, None),
    }
}

/// CSI ignore state consuming bytes after an invalid introducer.
#[inline(always)]
const fn csi_ignore(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiIgnore, Execute),
        0x40..=0x7e => (Ground, None),
        _ => (CsiIgnore, Ignore),
    }
}

/// DCS entry point collecting the introducer and preparing parameters.
#[inline(always)]
const fn dcs_entry(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => (DcsEntry, Ignore),
        0x3a => (DcsIgnore, None),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3c..=0x3f => (DcsParam, Collect),
        _ => (DcsPassthrough, None),
    }
}

/// DCS parameter collection equivalent to `csi_param` but for DCS strings.
#[inline(always)]
const fn dcs_param(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => (DcsParam, Ignore),
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3a | 0x3c..=0x3f => (DcsIgnore, None),
        0x20..=0x2f => (DcsIntermediate, Collect),
        _ => (DcsPassthrough, None),
    }
}

/// DCS intermediate handler prior to entering passthrough mode.
#[inline(always)]
const fn dcs_intermediate(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => (DcsIntermediate, Ignore),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x30..=0x3f => (DcsIgnore, None),
        _ => (DcsPassthrough, None),
    }
}

/// DCS passthrough mode forwarding payload to the active handler.
#[inline(always)]
const fn dcs_passthrough(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x7f => (DcsPassthrough, Ignore),
        _ => (DcsPassthrough, DcsPut),
    }
}

/// DCS ignore state swallowing data after a malformed sequence.
#[inline(always)]
const fn dcs_ignore(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    let _ = cp;
    (DcsIgnore, Ignore)
}

/// OSC payload collection until BEL or ST is observed.
#[inline(always)]
const fn osc_string(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match cp {
        0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => (OscString, Ignore),
        0x07 => (Ground, None),
        _ => (OscString, OscPut),
    }
}

/// SOS/PM/APC string handling: unimplemented sequences are skipped until
/// the terminating ST.
#[inline(always)]
const fn st_ignore(cp: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    let _ = cp;
    (StIgnore, Ignore)
}

/// Action to trigger upon entering a new state before reading the next
/// codepoint.
#[inline(always)]
pub(crate) const fn entry_action(state: State) -> Action {
    use Action::*;
    use State::*;

    match state {
        Escape => Clear,
        CsiEntry => Clear,
        DcsEntry => Clear,
        DcsPassthrough => DcsStart,
        OscString => OscStart,
        _ => None,
    }
}

/// Action to trigger after leaving a state, typically to finalize buffers.
#[inline(always)]
pub(crate) const fn exit_action(state: State) -> Action {
    use Action::*;
    use State::*;

    match state {
        DcsPassthrough => DcsEnd,
        OscString => OscEnd,
        _ => None,
    }
}

/// Core transition table that delegates to state-specific helpers after
/// evaluating the preempting `anywhere` bucket.
#[inline(always)]
pub(crate) const fn transit(state: State, cp: u32) -> (State, Action) {
    use State::*;

    if let Some(preempt) = anywhere(cp) {
        return preempt;
    }

    match state {
        Ground => ground(cp),
        Escape => escape(cp),
        EscapeIntermediate => escape_intermediate(cp),
        CsiEntry => csi_entry(cp),
        CsiParam => csi_param(cp),
        CsiIntermediate => csi_intermediate(cp),
        CsiIgnore => csi_ignore(cp),
        DcsEntry => dcs_entry(cp),
        DcsParam => dcs_param(cp),
        DcsIntermediate => dcs_intermediate(cp),
        DcsPassthrough => dcs_passthrough(cp),
        DcsIgnore => dcs_ignore(cp),
        OscString => osc_string(cp),
        StIgnore => st_ignore(cp),
    }
}
