//! Storage of the uploaded recipe images.
//!
//! Clients upload images inline, as `base64` data URIs:
//!
//! ```text
//! data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABAgMAAABieywaAAAACVBMVEUAAAD///9fX1/S0ecCAAAACXBIWXMAAA7EAAAOxAGVKw4bAAAACklEQVQImWNoAAAAggCByxOyYQAAAABJRU5ErkJggg==
//! ```
//!
//! The decoded file is written under the media root with a random name:
//!
//! ```text
//! <media root>/recipes/images/3f2c9a5e-7a1e-4a4c-9a52-0c3f0e4f3c1d.png
//! ```
//!
//! and the path relative to the media root is what gets persisted. The API
//! serves the media root under the configured URL prefix.
use std::io;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use camino::{Utf8Path, Utf8PathBuf};
use foodgram_configuration::Media;
use foodgram_located_error::{DynError, LocatedError};
use tracing::{debug, warn};
use uuid::Uuid;

/// Directory, relative to the media root, where recipe images are stored.
pub const RECIPE_IMAGES_DIR: &str = "recipes/images";

/// Extensions accepted for uploaded images.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// A decoded image upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub extension: String,
    pub bytes: Vec<u8>,
}

/// Reasons why an uploaded image is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidImage {
    #[error("Upload a valid image. The image must be sent as a base64 data URI.")]
    NotADataUri,
    #[error("Upload a valid image. The format \"{0}\" is not supported.")]
    UnsupportedFormat(String),
    #[error("Upload a valid image. The image data is not valid base64.")]
    BadEncoding,
    #[error("The submitted image is empty.")]
    Empty,
    #[error("Upload a valid image. The file you uploaded was either not an image or a corrupted image.")]
    NotAnImage,
}

/// Errors writing or reading the media files.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to write the media file {path}: {source}")]
    UnableToWrite {
        path: Utf8PathBuf,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl Image {
    /// It decodes a `data:image/<ext>;base64,<data>` URI.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the string is not a base64 image data URI of a
    /// supported format.
    pub fn from_data_uri(data_uri: &str) -> Result<Self, InvalidImage> {
        let rest = data_uri.trim().strip_prefix("data:image/").ok_or(InvalidImage::NotADataUri)?;

        let (format, data) = rest.split_once(";base64,").ok_or(InvalidImage::NotADataUri)?;

        let extension = format.to_lowercase();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(InvalidImage::UnsupportedFormat(extension));
        }

        let bytes = STANDARD.decode(data.trim()).map_err(|_| InvalidImage::BadEncoding)?;

        if bytes.is_empty() {
            return Err(InvalidImage::Empty);
        }

        if !has_image_signature(&bytes) {
            return Err(InvalidImage::NotAnImage);
        }

        Ok(Self { extension, bytes })
    }
}

/// Checks the leading bytes of the file against the signatures of the
/// supported formats.
fn has_image_signature(bytes: &[u8]) -> bool {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    bytes.starts_with(PNG)
        || bytes.starts_with(JPEG)
        || bytes.starts_with(b"GIF87a")
        || bytes.starts_with(b"GIF89a")
        || (bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP")
}

/// Where media files are written and how they are linked.
#[derive(Debug, Clone)]
pub struct Storage {
    root: Utf8PathBuf,
    url_prefix: String,
}

impl Storage {
    #[must_use]
    pub fn new(config: &Media) -> Self {
        let url_prefix = format!("/{}/", config.url_prefix.trim_matches('/'));

        Self {
            root: config.root.clone(),
            url_prefix: url_prefix.replace("//", "/"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// The URL path a stored file is served at.
    #[must_use]
    pub fn url(&self, relative_path: &str) -> String {
        format!("{}{}", self.url_prefix, relative_path.trim_start_matches('/'))
    }

    /// It writes a recipe image with a random name and returns its path
    /// relative to the media root.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be written.
    pub fn save_recipe_image(&self, image: &Image) -> Result<String, Error> {
        let relative_path = format!("{RECIPE_IMAGES_DIR}/{}.{}", Uuid::new_v4(), image.extension);
        let path = self.root.join(&relative_path);

        write(&path, &image.bytes).map_err(|err| Error::UnableToWrite {
            path: path.clone(),
            source: (Arc::new(err) as DynError).into(),
        })?;

        debug!(%path, "media file stored");

        Ok(relative_path)
    }

    /// It removes a stored file. Failures are only logged: a leftover file
    /// does not affect the data.
    pub fn remove(&self, relative_path: &str) {
        if relative_path.is_empty() || relative_path.contains("..") {
            return;
        }

        let path = self.root.join(relative_path);

        match std::fs::remove_file(&path) {
            Ok(()) => debug!(%path, "media file removed"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(%path, %err, "unable to remove media file"),
        }
    }

    /// It tells whether the value sent by a client refers to a file already
    /// stored at `relative_path`, either by its URL or by its path.
    #[must_use]
    pub fn refers_to(&self, value: &str, relative_path: &str) -> bool {
        !relative_path.is_empty() && (value == relative_path || value.ends_with(&self.url(relative_path)))
    }
}

fn write(path: &Utf8Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)
}
