//! PNG/JPEG/BMP loading and PNG saving

use image::{DynamicImage, ImageError, ImageFormat, RgbImage, RgbaImage};
use log::debug;
use pixcrypt_core::{ChannelLayout, Dimensions, Image, PixError, PixResult};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Load an image file. Sources with alpha keep it, everything else (gray,
/// palette, 16-bit) is converted to 8-bit RGB.
pub fn load_image<P: AsRef<Path>>(path: P) -> PixResult<Image> {
    let path = path.as_ref();
    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| map_image_error(e, path))?;
    let image = from_dynamic_image(decoded)?;
    debug!(
        "Loaded {} ({} {:?})",
        path.display(),
        image.dimensions(),
        image.layout()
    );
    Ok(image)
}

/// Decode an in-memory image file
pub fn decode_image(bytes: &[u8]) -> PixResult<Image> {
    let decoded = image::load_from_memory(bytes).map_err(|e| match e {
        ImageError::IoError(io) => PixError::Io(io),
        other => PixError::Decode(other.to_string()),
    })?;
    from_dynamic_image(decoded)
}

/// Write `image` as a PNG at its own resolution, whatever the extension of
/// `path`. Missing parent directories are created.
pub fn save_png<P: AsRef<Path>>(image: &Image, path: P) -> PixResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    to_dynamic_image(image)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => PixError::Io(io),
            other => PixError::Encode(format!("failed to save {}: {other}", path.display())),
        })?;
    debug!("Saved {} ({})", path.display(), image.dimensions());
    Ok(())
}

/// Encode `image` as PNG bytes
pub fn encode_png(image: &Image) -> PixResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    to_dynamic_image(image)?
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| PixError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

pub fn from_dynamic_image(decoded: DynamicImage) -> PixResult<Image> {
    let dimensions = Dimensions::new(decoded.width(), decoded.height());
    if decoded.color().has_alpha() {
        Image::from_raw(dimensions, ChannelLayout::Rgba, decoded.into_rgba8().into_raw())
    } else {
        Image::from_raw(dimensions, ChannelLayout::Rgb, decoded.into_rgb8().into_raw())
    }
}

pub fn to_dynamic_image(image: &Image) -> PixResult<DynamicImage> {
    let (width, height) = (image.width(), image.height());
    let data = image.as_bytes().to_vec();
    let converted = match image.layout() {
        ChannelLayout::Rgb => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        ChannelLayout::Rgba => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    };
    converted.ok_or_else(|| PixError::Encode(format!("sample buffer does not fit {}", image.dimensions())))
}

fn map_image_error(error: ImageError, path: &Path) -> PixError {
    match error {
        ImageError::IoError(io) => PixError::Io(io),
        other => PixError::Decode(format!("failed to decode {}: {other}", path.display())),
    }
}

fn ensure_parent_dir(path: &Path) -> PixResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
