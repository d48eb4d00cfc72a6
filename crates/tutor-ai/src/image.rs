//! Image upload encoding.
//!
//! Uploads are sent to the model as base64 text under a fixed media type.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use tracing::debug;

use crate::{AiError, ContentPart};

/// Extensions accepted by the uploader.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// A transport-safe image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: String,
    pub media_type: String,
}

impl From<EncodedImage> for ContentPart {
    fn from(image: EncodedImage) -> Self {
        ContentPart::Image {
            data: image.data,
            media_type: image.media_type,
        }
    }
}

/// Turns raw upload bytes into an [`EncodedImage`].
pub trait ImageEncoder: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> Result<EncodedImage, AiError>;
}

/// Standard-alphabet base64 encoder with a fixed media type.
#[derive(Debug, Clone)]
pub struct Base64Encoder {
    media_type: String,
    max_bytes: u64,
}

impl Base64Encoder {
    pub fn new(media_type: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            media_type: media_type.into(),
            max_bytes,
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

impl Default for Base64Encoder {
    fn default() -> Self {
        Self::new("image/png", 20 * 1024 * 1024)
    }
}

impl ImageEncoder for Base64Encoder {
    fn encode(&self, bytes: &[u8]) -> Result<EncodedImage, AiError> {
        if bytes.is_empty() {
            return Err(AiError::ImageEncoding("image is empty".into()));
        }
        if bytes.len() as u64 > self.max_bytes {
            return Err(AiError::ImageEncoding(format!(
                "image is {} bytes, limit is {}",
                bytes.len(),
                self.max_bytes
            )));
        }

        let data = B64.encode(bytes);
        debug!(bytes = bytes.len(), base64_len = data.len(), "image encoded");
        Ok(EncodedImage {
            data,
            media_type: self.media_type.clone(),
        })
    }
}

/// Read an uploaded image from disk.
///
/// Only `png`, `jpg` and `jpeg` files are accepted (case-insensitive).
pub fn read_image_file(path: &Path) -> Result<Vec<u8>, AiError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AiError::ImageEncoding(format!(
            "{} is not a png/jpg/jpeg file",
            path.display()
        )));
    }

    std::fs::read(path)
        .map_err(|e| AiError::ImageEncoding(format!("failed to read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_standard_base64() {
        let encoder = Base64Encoder::default();
        let image = encoder.encode(b"\x89PNG\r\n\x1a\n").unwrap();
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.media_type, "image/png");
    }

    #[test]
    fn media_type_is_fixed_regardless_of_content() {
        let encoder = Base64Encoder::new("image/jpeg", 1024);
        let image = encoder.encode(b"\x89PNG").unwrap();
        assert_eq!(image.media_type, "image/jpeg");
    }

    #[test]
    fn empty_image_fails() {
        let err = Base64Encoder::default().encode(&[]).unwrap_err();
        assert!(matches!(err, AiError::ImageEncoding(_)));
    }

    #[test]
    fn oversized_image_fails() {
        let encoder = Base64Encoder::new("image/png", 4);
        let err = encoder.encode(b"12345").unwrap_err();
        assert!(err.to_string().contains("limit is 4"));
    }

    #[test]
    fn encoded_image_becomes_image_part() {
        let part: ContentPart = EncodedImage {
            data: "AAAA".into(),
            media_type: "image/png".into(),
        }
        .into();
        assert!(matches!(part, ContentPart::Image { .. }));
    }

    #[test]
    fn read_rejects_unsupported_extension() {
        let err = read_image_file(Path::new("/tmp/problem.gif")).unwrap_err();
        assert!(err.to_string().contains("png/jpg/jpeg"));
    }

    #[test]
    fn read_accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PROBLEM.JPG");
        std::fs::write(&path, b"\xff\xd8\xff").unwrap();
        assert_eq!(read_image_file(&path).unwrap(), b"\xff\xd8\xff");
    }

    #[test]
    fn read_missing_file_is_encoding_error() {
        let err = read_image_file(Path::new("/tmp/no_such_problem.png")).unwrap_err();
        assert!(matches!(err, AiError::ImageEncoding(_)));
    }
}
