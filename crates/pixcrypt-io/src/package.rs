//! `.pxc` package container
//!
//! A package keeps an encrypted pixel grid together with the mode that produced
//! it, so it can be decrypted later without relying on a lossless image format.
//! The key is deliberately absent.
//!
//! Layout (all integers big-endian):
//!
//! | field      | size | notes                          |
//! |------------|------|--------------------------------|
//! | signature  | 8    | `PXC\r\n\x1a\n\0`              |
//! | version    | 1    | currently 1                    |
//! | mode       | 1    | 0 shift, 1 xor, 2 invert       |
//! | layout     | 1    | samples per pixel, 3 or 4      |
//! | width      | 4    |                                |
//! | height     | 4    |                                |
//! | length     | 8    | payload length in bytes        |
//! | payload    | *    | interleaved samples, row-major |

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use pixcrypt_codec::Mode;
use pixcrypt_core::{ChannelLayout, Dimensions, Image, PixError, PixResult};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Package signature (8 bytes)
pub const PACKAGE_SIGNATURE: [u8; 8] = [
    b'P', b'X', b'C', // magic
    0x0D, 0x0A, // CR LF
    0x1A, // DOS EOF
    0x0A, 0x00, // LF NUL
];

/// Current package format version
pub const PACKAGE_VERSION: u8 = 1;

/// File extension used for packages
pub const PACKAGE_EXTENSION: &str = "pxc";

fn mode_to_byte(mode: Mode) -> u8 {
    match mode {
        Mode::Shift => 0,
        Mode::Xor => 1,
        Mode::Invert => 2,
    }
}

fn mode_from_byte(byte: u8) -> PixResult<Mode> {
    match byte {
        0 => Ok(Mode::Shift),
        1 => Ok(Mode::Xor),
        2 => Ok(Mode::Invert),
        other => Err(PixError::InvalidPackage(format!("unknown mode {other}"))),
    }
}

/// An encrypted image plus the mode it was encrypted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub mode: Mode,
    pub image: Image,
}

impl Package {
    pub fn new(mode: Mode, image: Image) -> Self {
        Self { mode, image }
    }

    /// Write package to output
    pub fn write<W: Write>(&self, writer: &mut W) -> PixResult<()> {
        let dims = self.image.dimensions();
        let payload = self.image.as_bytes();

        writer.write_all(&PACKAGE_SIGNATURE)?;
        writer.write_u8(PACKAGE_VERSION)?;
        writer.write_u8(mode_to_byte(self.mode))?;
        writer.write_u8(self.image.channel_count() as u8)?;
        writer.write_u32::<BigEndian>(dims.width)?;
        writer.write_u32::<BigEndian>(dims.height)?;
        writer.write_u64::<BigEndian>(payload.len() as u64)?;
        writer.write_all(payload)?;

        Ok(())
    }

    /// Read package from input
    pub fn read<R: Read>(reader: &mut R) -> PixResult<Self> {
        let mut signature = [0u8; 8];
        reader.read_exact(&mut signature)?;
        if signature != PACKAGE_SIGNATURE {
            return Err(PixError::InvalidSignature);
        }

        let version = reader.read_u8()?;
        if version != PACKAGE_VERSION {
            return Err(PixError::UnsupportedVersion(version));
        }

        let mode = mode_from_byte(reader.read_u8()?)?;
        let channels = reader.read_u8()?;
        let layout = ChannelLayout::from_count(channels as usize)
            .ok_or_else(|| PixError::InvalidPackage(format!("unsupported channel count {channels}")))?;
        let width = reader.read_u32::<BigEndian>()?;
        let height = reader.read_u32::<BigEndian>()?;
        let dimensions = Dimensions::new(width, height);

        let length = reader.read_u64::<BigEndian>()?;
        let expected = dimensions.pixel_count() as u64 * layout.count() as u64;
        if length != expected {
            return Err(PixError::InvalidPackage(format!(
                "payload is {length} bytes, {dimensions} {layout:?} needs {expected}"
            )));
        }

        let mut payload = Vec::new();
        reader.by_ref().take(length).read_to_end(&mut payload)?;
        if payload.len() as u64 != length {
            return Err(PixError::InvalidPackage(format!(
                "truncated payload: {} of {length} bytes",
                payload.len()
            )));
        }

        let image = Image::from_raw(dimensions, layout, payload)?;
        Ok(Self { mode, image })
    }

    /// Write package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PixResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        debug!("Saved {} package {}", self.mode, path.display());
        Ok(())
    }

    /// Read package from a file
    pub fn load<P: AsRef<Path>>(path: P) -> PixResult<Self> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let package = Self::read(&mut reader)?;
        debug!(
            "Loaded {} package {} ({})",
            package.mode,
            path.display(),
            package.image.dimensions()
        );
        Ok(package)
    }
}

/// Whether `path` names a package file, judged by extension
pub fn is_package_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PACKAGE_EXTENSION))
}
