//! Constants used throughout pixcrypt

/// Key used when none is given
pub const DEFAULT_KEY: u8 = 50;

/// File name of the encrypted output inside the output directory
pub const DEFAULT_ENCRYPTED_NAME: &str = "encrypted_image.png";

/// File name of the decrypted output inside the output directory
pub const DEFAULT_DECRYPTED_NAME: &str = "decrypted_image.png";

/// Number of key values; keys are reduced modulo this
pub const KEY_SPACE: i128 = 256;

/// Largest sample value of an 8-bit channel
pub const MAX_SAMPLE: u8 = u8::MAX;

/// Number of transformed color channels per pixel
pub const COLOR_CHANNELS: usize = 3;
