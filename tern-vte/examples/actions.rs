//! Print every parser event for a given byte stream.
use tern_vte::{Actor, CsiFlags, CsiParams, Decoder, Parser};

#[derive(Default)]
struct LoggingActor {
    seq: usize,
}

impl LoggingActor {
    fn log(&mut self, line: String) {
        self.seq += 1;
        println!("{:02}: {line}", self.seq);
    }
}

impl Actor for LoggingActor {
    fn print(&mut self, cp: u32) {
        let c = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.log(format!("print {c:?}"));
    }

    fn execute(&mut self, ctrl: u32) {
        self.log(format!("execute 0x{ctrl:02x}"));
    }

    fn esc_dispatch(&mut self, flags: CsiFlags, byte: u32) {
        self.log(format!("esc {:?} final {:?}", flags, byte as u8 as char));
    }

    fn csi_dispatch(&mut self, params: &CsiParams, byte: u32) {
        let args: Vec<i32> = params.iter().collect();
        self.log(format!(
            "csi {args:?} {:?} final {:?}",
            params.flags(),
            byte as u8 as char
        ));
    }

    fn dcs_start(&mut self) {
        self.log("dcs start".into());
    }

    fn dcs_put(&mut self, cp: u32) {
        self.log(format!("dcs put 0x{cp:02x}"));
    }

    fn dcs_end(&mut self) {
        self.log("dcs end".into());
    }

    fn osc_dispatch(&mut self, data: &[u8]) {
        self.log(format!("osc {:?}", String::from_utf8_lossy(data)));
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut decoder = Decoder::new();
    let mut actor = LoggingActor::default();

    let bytes =
        b"Hello \x1b[1;31mTern\x1b[0m!\n\x1b]0;demo title\x07\x1b[?25l\x1b[6n";

    for &byte in bytes {
        if let Some(c) = decoder.advance(byte) {
            parser.advance(c as u32, &mut actor);
        }
    }
}
