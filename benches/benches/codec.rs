//! Benchmarks for the pixel transforms
//!
//! Run with: cargo bench --bench codec

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixcrypt_codec::{shift_forward, shift_inverse, xor, CodecOptions, Mode, PixelCodec};
use pixcrypt_core::{ChannelLayout, Dimensions, Image};

fn create_test_image(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 255) / width) as u8); // R
            data.push(((y * 255) / height) as u8); // G
            data.push(128); // B
        }
    }
    Image::from_raw(Dimensions::new(width, height), ChannelLayout::Rgb, data).unwrap()
}

fn bench_channel_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channel Ops");
    let samples: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();

    group.bench_function("shift_forward", |b| {
        b.iter(|| samples.iter().map(|&v| shift_forward(black_box(v), 50)).fold(0u8, u8::wrapping_add));
    });
    group.bench_function("shift_inverse", |b| {
        b.iter(|| samples.iter().map(|&v| shift_inverse(black_box(v), 50)).fold(0u8, u8::wrapping_add));
    });
    group.bench_function("xor", |b| {
        b.iter(|| samples.iter().map(|&v| xor(black_box(v), 128)).fold(0u8, u8::wrapping_add));
    });

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Mode");
    let image = create_test_image(512, 512);
    group.throughput(Throughput::Elements(image.pixel_count() as u64));

    for mode in Mode::ALL {
        let codec = PixelCodec::new(CodecOptions::default().mode(mode));
        group.bench_with_input(BenchmarkId::from_parameter(mode), &image, |b, image| {
            b.iter(|| codec.encode(black_box(image)));
        });
    }

    group.finish();
}

fn bench_parallel_vs_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel vs Serial");

    for &size in &[64u32, 256, 1024, 2048] {
        let image = create_test_image(size, size);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        for parallel in [false, true] {
            let codec = PixelCodec::new(CodecOptions::default().parallel(parallel));
            let label = if parallel { "parallel" } else { "serial" };
            group.bench_with_input(
                BenchmarkId::new(label, format!("{size}x{size}")),
                &image,
                |b, image| {
                    let mut work = image.clone();
                    b.iter(|| codec.encode_in_place(black_box(&mut work)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_channel_ops, bench_modes, bench_parallel_vs_serial);
criterion_main!(benches);
