//! Session configuration

use pixcrypt_codec::CodecOptions;
use pixcrypt_core::consts::{DEFAULT_DECRYPTED_NAME, DEFAULT_ENCRYPTED_NAME};
use std::path::PathBuf;

/// Where results are written and how images are transformed.
///
/// Each session carries its own copy, so several sessions with different keys
/// or output locations can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Mode, key and parallelism of the transform
    pub codec: CodecOptions,
    /// Directory receiving the encrypted and decrypted images
    pub output_dir: PathBuf,
    /// File name of the encrypted image
    pub encrypted_name: String,
    /// File name of the decrypted image
    pub decrypted_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            codec: CodecOptions::default(),
            output_dir: PathBuf::from("."),
            encrypted_name: DEFAULT_ENCRYPTED_NAME.to_string(),
            decrypted_name: DEFAULT_DECRYPTED_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codec(mut self, codec: CodecOptions) -> Self {
        self.codec = codec;
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn encrypted_name<S: Into<String>>(mut self, name: S) -> Self {
        self.encrypted_name = name.into();
        self
    }

    pub fn decrypted_name<S: Into<String>>(mut self, name: S) -> Self {
        self.decrypted_name = name.into();
        self
    }

    pub fn encrypted_path(&self) -> PathBuf {
        self.output_dir.join(&self.encrypted_name)
    }

    pub fn decrypted_path(&self) -> PathBuf {
        self.output_dir.join(&self.decrypted_name)
    }
}
