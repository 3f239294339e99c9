//! Image payload encoding — content sniffing and base64 construction.
//!
//! The format is sniffed from file content, never from the extension, so a
//! renamed text file is rejected before any encoding work happens.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncoderError {
    /// Content is not in any recognized image format.
    #[error("unsupported file type — content is not an image")]
    UnsupportedType,
    /// The file could not be read, or was empty.
    #[error("failed to read image data: {0}")]
    ReadFailure(String),
}

/// A base64-encoded image payload ready to attach to a model request.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Standard-alphabet base64 with padding.
    pub data: String,
    /// Sniffed MIME type, always with prefix `image/`.
    pub mime_type: String,
}

/// Read an image file and encode it for the model request.
///
/// Produces exactly one completion: the payload, or a typed failure.
/// No side effects beyond the read.
pub async fn encode_image_file(path: &Path) -> Result<EncodedImage, EncoderError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| EncoderError::ReadFailure(e.to_string()))?;
    encode_image_bytes(&bytes)
}

/// Encode in-memory image bytes.
///
/// Rejects empty input and unrecognized formats before the base64 pass.
pub fn encode_image_bytes(bytes: &[u8]) -> Result<EncodedImage, EncoderError> {
    if bytes.is_empty() {
        return Err(EncoderError::ReadFailure("file is empty".to_string()));
    }

    let format = image::guess_format(bytes).map_err(|_| EncoderError::UnsupportedType)?;
    let mime_type = format.to_mime_type().to_string();

    tracing::debug!(mime = %mime_type, bytes = bytes.len(), "image payload encoded");

    Ok(EncodedImage {
        data: STANDARD.encode(bytes),
        mime_type,
    })
}
