//! Image-level encode and decode

use crate::{invert, shift_forward, shift_inverse, xor, CodecOptions, Mode};
use log::trace;
use pixcrypt_core::consts::COLOR_CHANNELS;
use pixcrypt_core::{Image, Key, Pixel};
use rayon::prelude::*;

/// Pixels handed to one rayon task at a time
const PARALLEL_CHUNK_PIXELS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// Stateless pixel transform.
///
/// `decode(encode(image))` reproduces `image` exactly for every mode and key.
/// Only the R, G and B samples are touched; alpha passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelCodec {
    options: CodecOptions,
}

impl PixelCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode into a new image of the same dimensions
    pub fn encode(&self, image: &Image) -> Image {
        let mut out = image.clone();
        self.encode_in_place(&mut out);
        out
    }

    /// Decode into a new image of the same dimensions
    pub fn decode(&self, image: &Image) -> Image {
        let mut out = image.clone();
        self.decode_in_place(&mut out);
        out
    }

    pub fn encode_in_place(&self, image: &mut Image) {
        self.apply(image, Direction::Forward);
    }

    pub fn decode_in_place(&self, image: &mut Image) {
        self.apply(image, Direction::Inverse);
    }

    pub fn encode_pixel(&self, pixel: Pixel) -> Pixel {
        let key = self.options.key.value();
        match self.options.mode {
            Mode::Shift => pixel.map(|v| shift_forward(v, key)),
            Mode::Xor => pixel.map(|v| xor(v, key)),
            Mode::Invert => pixel.map(invert),
        }
    }

    pub fn decode_pixel(&self, pixel: Pixel) -> Pixel {
        let key = self.options.key.value();
        match self.options.mode {
            Mode::Shift => pixel.map(|v| shift_inverse(v, key)),
            Mode::Xor => pixel.map(|v| xor(v, key)),
            Mode::Invert => pixel.map(invert),
        }
    }

    fn apply(&self, image: &mut Image, direction: Direction) {
        let key = self.options.key.value();
        let channels = image.channel_count();
        let parallel = self.options.parallel && image.pixel_count() > PARALLEL_CHUNK_PIXELS;

        trace!(
            "{:?} {} image {} key={} parallel={}",
            direction,
            self.options.mode,
            image.dimensions(),
            key,
            parallel
        );

        let data = image.as_bytes_mut();
        match (self.options.mode, direction) {
            (Mode::Shift, Direction::Forward) => {
                map_samples(data, channels, parallel, |v| shift_forward(v, key))
            }
            (Mode::Shift, Direction::Inverse) => {
                map_samples(data, channels, parallel, |v| shift_inverse(v, key))
            }
            (Mode::Xor, _) => map_samples(data, channels, parallel, |v| xor(v, key)),
            (Mode::Invert, _) => map_samples(data, channels, parallel, invert),
        }
    }
}

/// Apply `f` to the color samples of every pixel, skipping alpha
fn map_samples<F>(data: &mut [u8], channels: usize, parallel: bool, f: F)
where
    F: Fn(u8) -> u8 + Sync,
{
    let apply = |pixel: &mut [u8]| {
        for v in &mut pixel[..COLOR_CHANNELS] {
            *v = f(*v);
        }
    };

    if parallel {
        data.par_chunks_mut(channels * PARALLEL_CHUNK_PIXELS)
            .for_each(|chunk| chunk.chunks_exact_mut(channels).for_each(|px| apply(px)));
    } else {
        data.chunks_exact_mut(channels).for_each(|px| apply(px));
    }
}

/// Shift every color channel up by `key`, modulo 256
pub fn encode(image: &Image, key: Key) -> Image {
    keyed(Mode::Shift, key).encode(image)
}

/// Exact inverse of [`encode`] for the same key
pub fn decode(image: &Image, key: Key) -> Image {
    keyed(Mode::Shift, key).decode(image)
}

/// XOR every color channel with `key`.
///
/// This is both the encoder and the decoder: `xor_image(xor_image(img, k), k)`
/// is `img`.
pub fn xor_image(image: &Image, key: Key) -> Image {
    keyed(Mode::Xor, key).encode(image)
}

/// Replace every color channel `v` with `255 - v`. Self-inverse.
pub fn invert_image(image: &Image) -> Image {
    keyed(Mode::Invert, Key::default()).encode(image)
}

fn keyed(mode: Mode, key: Key) -> PixelCodec {
    PixelCodec::new(CodecOptions {
        mode,
        key,
        ..CodecOptions::default()
    })
}
