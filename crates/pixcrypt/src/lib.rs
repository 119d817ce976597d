//! # pixcrypt
//!
//! Reversible, key-driven scrambling of an image's RGB channels.
//!
//! ## Quick Start
//!
//! ### Transforming pixels
//!
//! ```
//! use pixcrypt::{decode, encode, Image, Key, Pixel};
//!
//! let image = Image::from_pixels(1, 1, &[Pixel::new(250, 10, 5)]).unwrap();
//! let encrypted = encode(&image, Key::new(50));
//! assert_eq!(encrypted.pixel(0, 0), Some(Pixel::new(44, 60, 55)));
//! assert_eq!(decode(&encrypted, Key::new(50)), image);
//! ```
//!
//! ### Driving a session
//!
//! ```no_run
//! use pixcrypt::{CodecOptions, Command, Mode, Session, SessionConfig};
//!
//! let config = SessionConfig::new()
//!     .output_dir("out")
//!     .codec(CodecOptions::default().mode(Mode::Shift).key(50));
//!
//! let mut session = Session::new(config);
//! session.execute(Command::Upload("photo.jpg".into())).unwrap();
//! session.execute(Command::Encrypt).unwrap(); // out/encrypted_image.png
//! session.execute(Command::Decrypt).unwrap(); // out/decrypted_image.png
//! ```
//!
//! ## Modes
//!
//! - `shift`: `(v + key) mod 256`, decoded by `(v - key) mod 256`
//! - `xor`: `v ^ key`, its own inverse
//! - `invert`: `255 - v`, its own inverse, key ignored
//!
//! None of these provide confidentiality against an attacker; they are
//! reversible obfuscation only.

// Re-export core types
pub use pixcrypt_core::{
    consts, ChannelLayout, Dimensions, Image, Key, PixError, PixResult, Pixel,
};

// Re-export codec
pub use pixcrypt_codec::{decode, encode, invert_image, xor_image, CodecOptions, Mode, PixelCodec};

// Re-export I/O
pub use pixcrypt_io::{decode_image, encode_png, is_package_path, load_image, save_png, Package};

// Re-export session
pub use pixcrypt_session::{Action, Command, Outcome, Session, SessionConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_image_creation() {
        let image = Image::new(Dimensions::new(100, 100), ChannelLayout::Rgb);
        assert!(image.is_ok());
        let img = image.unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 100);
    }
}
