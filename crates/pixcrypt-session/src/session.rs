//! Session state and command handlers

use crate::{Action, Command, Outcome, SessionConfig};
use log::{info, warn};
use pixcrypt_codec::{CodecOptions, PixelCodec};
use pixcrypt_core::{Image, PixError, PixResult};
use pixcrypt_io::{load_image, save_png, Package};
use std::path::{Path, PathBuf};

const READY: &str = "Ready";

/// Holds the images of one front-end session.
///
/// Every handler either completes fully or returns an error without touching
/// the held images, so a failed load or write never loses earlier work.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    source: Option<Image>,
    encrypted: Option<Image>,
    decrypted: Option<Image>,
    status: String,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            source: None,
            encrypted: None,
            decrypted: None,
            status: READY.to_string(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace mode, key or parallelism for subsequent commands
    pub fn set_codec(&mut self, codec: CodecOptions) {
        self.config.codec = codec;
    }

    pub fn source(&self) -> Option<&Image> {
        self.source.as_ref()
    }

    pub fn encrypted(&self) -> Option<&Image> {
        self.encrypted.as_ref()
    }

    pub fn decrypted(&self) -> Option<&Image> {
        self.decrypted.as_ref()
    }

    /// One-line description of the last command, for a status bar
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Run a command and record its result in the status line
    pub fn execute(&mut self, command: Command) -> PixResult<Outcome> {
        let result = match command {
            Command::Upload(path) => self.upload(&path),
            Command::Encrypt => self.encrypt(),
            Command::Decrypt => self.decrypt(),
            Command::LoadEncrypted(path) => self.load_encrypted(&path),
            Command::SaveImage(path) => self.save_image(&path),
            Command::SavePackage(path) => self.save_package(&path),
            Command::LoadPackage(path) => self.load_package(&path),
        };

        match &result {
            Ok(outcome) => {
                self.status = describe(outcome);
                info!("{}", self.status);
            }
            Err(e) => {
                self.status = e.to_string();
                warn!("Command failed: {e}");
            }
        }
        result
    }

    pub fn upload(&mut self, path: &Path) -> PixResult<Outcome> {
        let image = load_image(path)?;
        let outcome = outcome(Action::Uploaded, path, &image);
        self.source = Some(image);
        Ok(outcome)
    }

    pub fn encrypt(&mut self) -> PixResult<Outcome> {
        let source = self.source.as_ref().ok_or(PixError::NoSourceImage)?;
        let encrypted = self.codec().encode(source);
        let path = self.config.encrypted_path();
        save_png(&encrypted, &path)?;
        let outcome = outcome(Action::Encrypted, &path, &encrypted);
        self.encrypted = Some(encrypted);
        Ok(outcome)
    }

    pub fn decrypt(&mut self) -> PixResult<Outcome> {
        let encrypted = self.encrypted.as_ref().ok_or(PixError::NoEncryptedImage)?;
        let decrypted = self.codec().decode(encrypted);
        let path = self.config.decrypted_path();
        save_png(&decrypted, &path)?;
        let outcome = outcome(Action::Decrypted, &path, &decrypted);
        self.decrypted = Some(decrypted);
        Ok(outcome)
    }

    pub fn load_encrypted(&mut self, path: &Path) -> PixResult<Outcome> {
        let image = load_image(path)?;
        let outcome = outcome(Action::LoadedEncrypted, path, &image);
        self.encrypted = Some(image);
        Ok(outcome)
    }

    pub fn save_image(&self, path: &Path) -> PixResult<Outcome> {
        let encrypted = self.encrypted.as_ref().ok_or(PixError::NoEncryptedImage)?;
        save_png(encrypted, path)?;
        Ok(outcome(Action::SavedImage, path, encrypted))
    }

    pub fn save_package(&self, path: &Path) -> PixResult<Outcome> {
        let encrypted = self.encrypted.as_ref().ok_or(PixError::NoEncryptedImage)?;
        let package = Package::new(self.config.codec.mode, encrypted.clone());
        package.save(path)?;
        Ok(outcome(Action::SavedPackage, path, encrypted))
    }

    /// Load a package. The session adopts the package's mode, since decoding
    /// with any other mode cannot recover the image.
    pub fn load_package(&mut self, path: &Path) -> PixResult<Outcome> {
        let Package { mode, image } = Package::load(path)?;
        if mode != self.config.codec.mode {
            warn!(
                "Package {} was encrypted with {} mode, switching from {}",
                path.display(),
                mode,
                self.config.codec.mode
            );
            self.config.codec.mode = mode;
        }
        let outcome = outcome(Action::LoadedPackage, path, &image);
        self.encrypted = Some(image);
        Ok(outcome)
    }

    fn codec(&self) -> PixelCodec {
        PixelCodec::new(self.config.codec)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn outcome(action: Action, path: &Path, image: &Image) -> Outcome {
    Outcome {
        action,
        path: PathBuf::from(path),
        dimensions: image.dimensions(),
    }
}

fn describe(outcome: &Outcome) -> String {
    let path = outcome.path.display();
    match outcome.action {
        Action::Uploaded => format!("Loaded {path}"),
        Action::Encrypted => format!("Encryption complete: {path}"),
        Action::Decrypted => format!("Decryption complete: {path}"),
        Action::LoadedEncrypted => format!("Loaded encrypted image {path}"),
        Action::SavedImage | Action::SavedPackage => format!("Saved {path}"),
        Action::LoadedPackage => format!("Loaded package {path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixcrypt_codec::Mode;
    use pixcrypt_core::Pixel;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixcrypt-session-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_source(dir: &Path) -> (PathBuf, Image) {
        let pixels: Vec<Pixel> = (0..16u8).map(|i| Pixel::new(i * 16, 250 - i, i)).collect();
        let image = Image::from_pixels(4, 4, &pixels).unwrap();
        let path = dir.join("source.png");
        save_png(&image, &path).unwrap();
        (path, image)
    }

    #[test]
    fn test_starts_ready_and_empty() {
        let session = Session::default();
        assert_eq!(session.status(), "Ready");
        assert!(session.source().is_none());
        assert!(session.encrypted().is_none());
    }

    #[test]
    fn test_encrypt_without_upload() {
        let mut session = Session::default();
        let err = session.execute(Command::Encrypt).unwrap_err();
        assert!(matches!(err, PixError::NoSourceImage));
        assert_eq!(session.status(), "No image loaded");
        assert!(session.encrypted().is_none());
    }

    #[test]
    fn test_decrypt_without_encrypted() {
        let mut session = Session::default();
        let err = session.execute(Command::Decrypt).unwrap_err();
        assert!(matches!(err, PixError::NoEncryptedImage));
        assert_eq!(session.status(), "No encrypted image");
    }

    #[test]
    fn test_upload_encrypt_decrypt() {
        let dir = scratch_dir("flow");
        let (source_path, source) = write_source(&dir);
        let mut session = Session::new(SessionConfig::new().output_dir(&dir));

        let uploaded = session.execute(Command::Upload(source_path)).unwrap();
        assert_eq!(uploaded.action, Action::Uploaded);

        let encrypted = session.execute(Command::Encrypt).unwrap();
        assert_eq!(encrypted.path, dir.join("encrypted_image.png"));
        assert!(session.status().starts_with("Encryption complete"));
        assert_ne!(session.encrypted(), Some(&source));

        let decrypted = session.execute(Command::Decrypt).unwrap();
        assert_eq!(decrypted.path, dir.join("decrypted_image.png"));
        assert_eq!(decrypted.dimensions, source.dimensions());
        assert_eq!(session.decrypted(), Some(&source));
        assert_eq!(load_image(&decrypted.path).unwrap(), source);
    }

    #[test]
    fn test_failed_upload_keeps_previous_image() {
        let dir = scratch_dir("failed-upload");
        let (source_path, source) = write_source(&dir);
        let mut session = Session::default();
        session.upload(&source_path).unwrap();

        let missing = dir.join("missing.png");
        assert!(session.execute(Command::Upload(missing)).is_err());
        assert_eq!(session.source(), Some(&source));
        assert!(session.status().starts_with("I/O error"));
    }

    #[test]
    fn test_package_switches_mode() {
        let dir = scratch_dir("package");
        let (source_path, source) = write_source(&dir);
        let xor = CodecOptions::default().mode(Mode::Xor).key(9);
        let mut writer = Session::new(SessionConfig::new().output_dir(&dir).codec(xor));
        writer.upload(&source_path).unwrap();
        writer.encrypt().unwrap();
        let package_path = dir.join("secret.pxc");
        writer.execute(Command::SavePackage(package_path.clone())).unwrap();

        let mut reader = Session::new(
            SessionConfig::new()
                .output_dir(&dir)
                .decrypted_name("from_package.png")
                .codec(CodecOptions::default().key(9)),
        );
        reader.execute(Command::LoadPackage(package_path)).unwrap();
        assert_eq!(reader.config().codec.mode, Mode::Xor);
        reader.decrypt().unwrap();
        assert_eq!(reader.decrypted(), Some(&source));
    }

    #[test]
    fn test_load_encrypted_then_decrypt() {
        let dir = scratch_dir("load-encrypted");
        let (source_path, source) = write_source(&dir);
        let config = SessionConfig::new()
            .output_dir(&dir)
            .codec(CodecOptions::default().key(123));
        let mut first = Session::new(config.clone());
        first.upload(&source_path).unwrap();
        let encrypted = first.encrypt().unwrap();

        let copy = dir.join("copy.png");
        first.execute(Command::SaveImage(copy.clone())).unwrap();
        assert_eq!(load_image(&copy).unwrap(), load_image(&encrypted.path).unwrap());

        let mut second = Session::new(config.decrypted_name("second.png"));
        second.execute(Command::LoadEncrypted(copy)).unwrap();
        second.decrypt().unwrap();
        assert_eq!(second.decrypted(), Some(&source));
    }
}
