use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dropzone::payload::types;
use dropzone::{can_accept, classify, Pasteboard};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

fn png_bytes(size: u32) -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(size, size, Rgba([0u8, 128, 255, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("could not encode benchmark image");
    bytes
}

fn classify_benchmark(c: &mut Criterion) {
    let inputs = [
        ("image_small", 16),
        ("image_medium", 256),
        ("image_large", 1024),
    ];

    for (name, size) in inputs.iter() {
        let payload = Pasteboard::new().with_image(types::PNG, png_bytes(*size));
        let mut group = c.benchmark_group(name.to_string());

        group.bench_function("can_accept", |b| {
            b.iter(|| can_accept(black_box(&payload)))
        });
        group.bench_function("classify", |b| {
            b.iter(|| classify(black_box(&payload)))
        });

        group.finish();
    }

    let remote = (0..100).fold(Pasteboard::new(), |payload, i| {
        payload.with_uri(format!("https://example.com/{}.png", i))
    });
    c.bench_function("classify_remote_uris", |b| {
        b.iter(|| classify(black_box(&remote)))
    });
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
