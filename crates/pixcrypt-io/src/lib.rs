//! Image I/O for pixcrypt
//!
//! Loading PNG/JPEG/BMP files into [`Image`](pixcrypt_core::Image) grids,
//! writing grids back out as PNG, and the `.pxc` package container that keeps
//! an encrypted grid together with the mode it was produced with.

pub mod file;
pub mod package;

pub use file::*;
pub use package::*;
