//! Codec options

use pixcrypt_core::{Key, PixError, PixResult};
use std::fmt;
use std::str::FromStr;

/// Transform applied to each color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Addition modulo 256 on encode, subtraction on decode
    #[default]
    Shift,
    /// XOR with the key; encode and decode are the same operation
    Xor,
    /// `255 - v`; self-inverse and ignores the key
    Invert,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Shift, Mode::Xor, Mode::Invert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Shift => "shift",
            Mode::Xor => "xor",
            Mode::Invert => "invert",
        }
    }

    /// Whether encode and decode are the same function
    pub fn is_involution(&self) -> bool {
        !matches!(self, Mode::Shift)
    }

    pub fn uses_key(&self) -> bool {
        !matches!(self, Mode::Invert)
    }
}

impl FromStr for Mode {
    type Err = PixError;

    fn from_str(s: &str) -> PixResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shift" | "add" => Ok(Mode::Shift),
            "xor" => Ok(Mode::Xor),
            "invert" => Ok(Mode::Invert),
            other => Err(PixError::InvalidParameter(format!(
                "unknown mode '{other}' (expected shift, xor or invert)"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codec options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecOptions {
    /// Channel transform
    pub mode: Mode,
    /// Key shared by encode and decode
    pub key: Key,
    /// Split the image across rayon workers
    pub parallel: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Shift,
            key: Key::default(),
            parallel: true,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the key. Values outside `0..=255` are reduced modulo 256.
    pub fn key(mut self, key: i64) -> Self {
        self.key = Key::from_int(key);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
