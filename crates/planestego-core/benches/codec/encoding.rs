use criterion::{criterion_group, criterion_main, Criterion};
use planestego_core::{FramePlane, ImageCarrier, PlaneCodec};

pub fn plane_encoding(c: &mut Criterion) {
    c.bench_function("Plane Encoding", |b| {
        let codec = PlaneCodec::default();
        let secret_message = "Hello World!".repeat(1_000);

        b.iter(|| codec.encode(secret_message.as_bytes(), 720, 1280))
    });

    c.bench_function("Frame Embedding", |b| {
        let frame = FramePlane::from_fn(720, 1280, |row, col| [row as u8, col as u8, 0x7F]);
        let carrier = ImageCarrier::default();
        let secret_message = b"Hello World!";

        b.iter(|| carrier.embed(&frame, &secret_message[..]))
    });
}

criterion_group!(benches, plane_encoding);
criterion_main!(benches);
