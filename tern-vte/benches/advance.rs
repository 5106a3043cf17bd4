use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tern_vte::{Actor, CsiFlags, CsiParams, Decoder, Parser};

struct NullActor;

impl Actor for NullActor {
    fn print(&mut self, _: u32) {}
    fn execute(&mut self, _: u32) {}
    fn esc_dispatch(&mut self, _: CsiFlags, _: u32) {}
    fn csi_dispatch(&mut self, _: &CsiParams, _: u32) {}
    fn dcs_start(&mut self) {}
    fn dcs_put(&mut self, _: u32) {}
    fn dcs_end(&mut self) {}
    fn osc_dispatch(&mut self, _: &[u8]) {}
}

fn mixed_stream() -> Vec<u8> {
    let mut bytes = Vec::new();
    for _ in 0..512 {
        bytes.extend_from_slice(b"ls -la | grep target\r\n");
        bytes.extend_from_slice(b"\x1b[1;32muser\x1b[0m@\x1b[1;34mhost\x1b[0m $ ");
        bytes.extend_from_slice("caf\u{e9} \u{2500}\u{2502}\u{250c}\r\n".as_bytes());
        bytes.extend_from_slice(b"\x1b]0;bench\x07\x1b[2J\x1b[H");
    }
    bytes
}

fn bench_advance(c: &mut Criterion) {
    let bytes = mixed_stream();

    c.bench_function("advance_mixed_stream", |b| {
        b.iter(|| {
            let mut parser = Parser::new();
            let mut decoder = Decoder::new();
            let mut actor = NullActor;
            for &byte in black_box(&bytes) {
                if let Some(ch) = decoder.advance(byte) {
                    parser.advance(ch as u32, &mut actor);
                }
            }
        })
    });
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
