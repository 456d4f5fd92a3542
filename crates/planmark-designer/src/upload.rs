//! Background upload collaborator seam.
//!
//! Uploading is the only asynchronous boundary of the designer. The session
//! awaits the collaborator and applies the outcome in one step, so a partial
//! background is never observable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::serialization::BackgroundKind;

/// File handed to the uploader.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Background kind implied by the file name.
    pub fn kind(&self) -> BackgroundKind {
        BackgroundKind::from_file_name(&self.file_name)
    }
}

/// Where the uploaded file can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_url: String,
}

impl UploadReceipt {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
        }
    }
}

/// Stores background files and returns their URL.
#[async_trait]
pub trait BackgroundUploader: Send + Sync {
    /// Uploads a file. Errors are surfaced to the user as advisory messages.
    async fn upload(&self, file: &UploadFile) -> anyhow::Result<UploadReceipt>;
}
