use criterion::{criterion_group, criterion_main, Criterion};
use planestego_core::{FramePlane, ImageCarrier};

pub fn frame_decoding(c: &mut Criterion) {
    c.bench_function("Frame Extraction", |b| {
        let carrier = ImageCarrier::default();
        let frame = FramePlane::from_fn(720, 1280, |row, col| [row as u8, col as u8, 0x7F]);
        let secret = carrier.embed(&frame, "Hello World!".as_bytes()).frame;

        b.iter(|| {
            carrier
                .extract(&secret)
                .expect("Cannot unveil secret message")
        })
    });
}

criterion_group!(benches, frame_decoding);
criterion_main!(benches);
