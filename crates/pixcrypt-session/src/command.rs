//! Commands and their outcomes

use pixcrypt_core::Dimensions;
use std::fmt;
use std::path::PathBuf;

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load an image file as the current source
    Upload(PathBuf),
    /// Encrypt the current source and write the encrypted image
    Encrypt,
    /// Decrypt the current encrypted image and write the result
    Decrypt,
    /// Load an already encrypted image file for decryption
    LoadEncrypted(PathBuf),
    /// Write the current encrypted image as PNG to a chosen path
    SaveImage(PathBuf),
    /// Write the current encrypted image as a `.pxc` package
    SavePackage(PathBuf),
    /// Load a `.pxc` package as the current encrypted image
    LoadPackage(PathBuf),
}

/// Which action produced an [`Outcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Uploaded,
    Encrypted,
    Decrypted,
    LoadedEncrypted,
    SavedImage,
    SavedPackage,
    LoadedPackage,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Uploaded => "upload",
            Action::Encrypted => "encrypt",
            Action::Decrypted => "decrypt",
            Action::LoadedEncrypted => "load encrypted",
            Action::SavedImage => "save image",
            Action::SavedPackage => "save package",
            Action::LoadedPackage => "load package",
        };
        f.write_str(name)
    }
}

/// Result of a successful command, for the front-end to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    /// File that was read or written
    pub path: PathBuf,
    pub dimensions: Dimensions,
}
