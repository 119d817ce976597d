//! Reversible per-pixel transforms for pixcrypt
//!
//! This crate implements the channel arithmetic (modular shift, XOR mask and
//! value inversion) and applies it over whole images, serially or split across
//! rayon workers.

pub mod channel;
pub mod codec;
pub mod options;

pub use channel::*;
pub use codec::*;
pub use options::*;
