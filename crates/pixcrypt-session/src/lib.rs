//! UI-agnostic controller for pixcrypt
//!
//! A [`Session`] owns the images a front-end works with (the uploaded source,
//! its encrypted form and the decrypted result) and exposes each user action as
//! a [`Command`]. Front-ends only translate their events into commands and show
//! the returned [`Outcome`]; no transform logic lives in them.

pub mod command;
pub mod config;
pub mod session;

pub use command::*;
pub use config::*;
pub use session::*;
