//! File attachments

use std::{fs, io, path::Path};

use thiserror::Error;
use tracing::debug;

/// MIME type of the code.gov inventory file
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors that can occur when loading an attachment
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The path does not end in a file name
    #[error("{0} does not name a file")]
    MissingFileName(String),

    /// The file could not be read
    #[error("could not read {path}")]
    Io {
        /// The path that was being read
        path: String,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A file attached to an outgoing message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// Name shown to the recipient, without any directory prefix
    pub filename: String,

    /// Raw file contents
    pub content: Vec<u8>,

    /// MIME type of `content`
    pub content_type: String,
}

impl Attachment {
    /// Create an attachment from data already in memory
    pub fn new(filename: &str, content: Vec<u8>, content_type: &str) -> Self {
        Self {
            filename: filename.to_string(),
            content,
            content_type: content_type.to_string(),
        }
    }

    /// Read an attachment from disk.
    ///
    /// The attachment is named after the final component of `path`, so
    /// `data/out/code.json` is sent as `code.json`.
    pub fn from_path(path: impl AsRef<Path>, content_type: &str) -> Result<Self, AttachmentError> {
        let path = path.as_ref();

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AttachmentError::MissingFileName(path.display().to_string()))?;

        let content = fs::read(path).map_err(|source| AttachmentError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!("read {} bytes from {}", content.len(), path.display());

        Ok(Self {
            filename,
            content,
            content_type: content_type.to_string(),
        })
    }
}
