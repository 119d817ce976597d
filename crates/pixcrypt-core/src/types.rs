//! Core types for pixcrypt

/// Sample layout of an image
///
/// Only the red, green and blue samples are ever transformed; an alpha sample,
/// when present, passes through every operation unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChannelLayout {
    /// RGB
    Rgb = 3,
    /// RGB + Alpha
    Rgba = 4,
}

impl ChannelLayout {
    /// Number of samples stored per pixel
    pub fn count(&self) -> usize {
        *self as usize
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }

    /// Look up a layout from its sample count
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(ChannelLayout::Rgb),
            4 => Some(ChannelLayout::Rgba),
            _ => None,
        }
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to each of the three channels independently
    pub fn map<F: Fn(u8) -> u8>(self, f: F) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Pixel> for (u8, u8, u8) {
    fn from(p: Pixel) -> Self {
        (p.r, p.g, p.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts() {
        assert_eq!(ChannelLayout::Rgb.count(), 3);
        assert_eq!(ChannelLayout::Rgba.count(), 4);
        assert!(!ChannelLayout::Rgb.has_alpha());
        assert_eq!(ChannelLayout::from_count(4), Some(ChannelLayout::Rgba));
        assert_eq!(ChannelLayout::from_count(2), None);
    }

    #[test]
    fn test_pixel_map_is_per_channel() {
        let p = Pixel::new(1, 2, 3).map(|v| v * 10);
        assert_eq!(p, Pixel::new(10, 20, 30));
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(640, 480).to_string(), "640x480");
        assert_eq!(Dimensions::new(3, 7).pixel_count(), 21);
    }
}
