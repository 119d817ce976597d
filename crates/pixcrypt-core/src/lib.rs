//! Core types and utilities for pixcrypt
//!
//! This crate provides the fundamental data structures shared by the codec, the
//! I/O layer and the session controller: the RGB image grid, pixels, keys and
//! the common error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod key;
pub mod types;

pub use error::{PixError, PixResult};
pub use image::*;
pub use key::Key;
pub use types::*;
