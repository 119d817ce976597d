//! Image data structures

use crate::{ChannelLayout, Dimensions, Pixel, PixError, PixResult};

/// An RGB(A) image with 8-bit interleaved samples in row-major order.
///
/// Width and height are fixed for the lifetime of the value and are never
/// zero. The sample buffer always holds exactly
/// `width * height * layout.count()` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    dimensions: Dimensions,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl Image {
    /// Create a black image
    pub fn new(dimensions: Dimensions, layout: ChannelLayout) -> PixResult<Self> {
        check_dimensions(dimensions)?;
        let size = dimensions.pixel_count() * layout.count();
        Ok(Self {
            dimensions,
            layout,
            data: vec![0; size],
        })
    }

    /// Wrap an existing sample buffer, rejecting any shape mismatch
    pub fn from_raw(dimensions: Dimensions, layout: ChannelLayout, data: Vec<u8>) -> PixResult<Self> {
        check_dimensions(dimensions)?;
        let expected = dimensions.pixel_count() * layout.count();
        if data.len() != expected {
            return Err(PixError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dimensions,
            layout,
            data,
        })
    }

    /// Build an RGB image from pixels in row-major order
    pub fn from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> PixResult<Self> {
        let data = pixels.iter().flat_map(|p| p.to_array()).collect();
        Self::from_raw(Dimensions::new(width, height), ChannelLayout::Rgb, data)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn channel_count(&self) -> usize {
        self.layout.count()
    }

    /// Raw interleaved samples
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples. The length cannot change through a slice, so the
    /// shape invariant holds.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let index = y as usize * self.dimensions.width as usize + x as usize;
        Some(index * self.layout.count())
    }

    /// RGB value of the pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        let i = self.offset(x, y)?;
        Some(Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Overwrite the RGB value at (x, y). Alpha is left as is.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> PixResult<()> {
        let i = self.offset(x, y).ok_or_else(|| {
            PixError::InvalidParameter(format!(
                "pixel ({x}, {y}) outside {} image",
                self.dimensions
            ))
        })?;
        self.data[i..i + 3].copy_from_slice(&pixel.to_array());
        Ok(())
    }

    /// Alpha value at (x, y), if the image carries alpha
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if !self.layout.has_alpha() {
            return None;
        }
        let i = self.offset(x, y)?;
        Some(self.data[i + 3])
    }

    /// Iterate over the RGB values of all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data
            .chunks_exact(self.layout.count())
            .map(|s| Pixel::new(s[0], s[1], s[2]))
    }
}

fn check_dimensions(dimensions: Dimensions) -> PixResult<()> {
    if dimensions.is_empty() {
        return Err(PixError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}
