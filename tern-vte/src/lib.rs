mod actor;
mod enums;
mod params;
mod parser;
mod transitions;
mod utf8;

pub use actor::Actor;
pub use params::{CSI_ARG_MAX, CsiFlags, CsiParams, OSC_MAX_LEN};
pub use parser::Parser;
pub use utf8::Decoder;
