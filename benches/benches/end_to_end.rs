//! Encrypt/decrypt including PNG encoding and decoding
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixcrypt::{decode_image, encode_png, CodecOptions, Image, Pixel, PixelCodec};

fn create_test_image(size: u32) -> Image {
    let mut pixels = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            pixels.push(Pixel::new(((x * 255) / size) as u8, ((y * 255) / size) as u8, 128));
        }
    }
    Image::from_pixels(size, size, &pixels).unwrap()
}

fn bench_png_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encrypt to PNG and back");
    let codec = PixelCodec::new(CodecOptions::default());

    for &size in &[64u32, 256, 512] {
        let image = create_test_image(size);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &image, |b, image| {
            b.iter(|| {
                let png = encode_png(&codec.encode(black_box(image))).unwrap();
                codec.decode(&decode_image(&png).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_png_roundtrip);
criterion_main!(benches);
