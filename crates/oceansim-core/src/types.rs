//! Core data types: the file picked for upload and the image that comes back.

use std::path::Path;

use base64::Engine;
use bytes::Bytes;

use crate::error::{SimResult, SimulationError};

/// A single user-chosen file, held in memory until submitted
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker (no directory components)
    pub name: String,
    /// Raw file contents
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk. The stored name is the final path component.
    pub async fn from_path(path: &Path) -> SimResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(name, bytes))
    }

    /// MIME type guessed from the file name, `application/octet-stream` if unknown
    pub fn mime(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Image bytes returned by the simulation service
#[derive(Clone, PartialEq, Eq)]
pub struct SimulationImage {
    pub bytes: Bytes,
    /// MIME type, e.g. `image/png`
    pub mime: String,
}

impl SimulationImage {
    /// Validate a response body and work out its MIME type.
    ///
    /// A declared `image/*` content type is trusted as-is. Otherwise the
    /// format is sniffed from the leading bytes.
    pub fn from_response(bytes: Bytes, content_type: Option<&str>) -> SimResult<Self> {
        if bytes.is_empty() {
            return Err(SimulationError::EmptyBody);
        }

        let declared = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        if let Some(mime) = declared.as_deref().filter(|m| m.starts_with("image/")) {
            return Ok(Self {
                bytes,
                mime: mime.to_string(),
            });
        }

        match image::guess_format(&bytes) {
            Ok(format) => Ok(Self {
                mime: format.to_mime_type().to_string(),
                bytes,
            }),
            Err(_) => Err(SimulationError::NotAnImage {
                content_type: declared.unwrap_or_else(|| "none".to_string()),
            }),
        }
    }

    /// Encode as a `data:` URI usable directly as an `img` source
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime, encoded)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for SimulationImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationImage")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
