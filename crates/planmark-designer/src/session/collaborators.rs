//! Background upload and export for the designer session.

use planmark_core::{DesignerError, DesignerResult, Error, Result};

use super::DesignerSession;
use crate::export::{fit_to_page, CanvasExporter, ContentSize, ExportFormat, ExportRequest};
use crate::serialization::Background;
use crate::upload::{BackgroundUploader, UploadFile, UploadReceipt};

impl DesignerSession {
    /// Applies the outcome of a background upload.
    ///
    /// On failure the previous background, if any, is kept.
    pub fn apply_upload(
        &mut self,
        file_name: &str,
        outcome: anyhow::Result<UploadReceipt>,
    ) -> DesignerResult<()> {
        let receipt = match outcome {
            Ok(receipt) if !receipt.file_url.trim().is_empty() => receipt,
            Ok(_) => {
                tracing::warn!("Upload of {} returned no file URL", file_name);
                return Err(DesignerError::UploadFailed {
                    reason: "no file URL returned".to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Upload of {} failed: {:#}", file_name, e);
                return Err(DesignerError::UploadFailed {
                    reason: format!("{:#}", e),
                });
            }
        };

        self.set_background(Background::new(receipt.file_url, file_name));
        Ok(())
    }

    /// Uploads a file through the collaborator and applies the result.
    pub async fn upload_background(
        &mut self,
        uploader: &dyn BackgroundUploader,
        file: UploadFile,
    ) -> DesignerResult<()> {
        tracing::debug!("Uploading background {} ({} bytes)", file.file_name, file.bytes.len());
        let outcome = uploader.upload(&file).await;
        self.apply_upload(&file.file_name, outcome)
    }

    /// Checks that there is something to export.
    pub fn check_export(&self, content: ContentSize) -> DesignerResult<()> {
        if self.background.is_none() {
            return Err(DesignerError::ExportPreconditionFailed {
                reason: "no background is set".to_string(),
            });
        }
        if !content.has_area() {
            return Err(DesignerError::ExportPreconditionFailed {
                reason: "the rendered canvas has no area".to_string(),
            });
        }
        Ok(())
    }

    /// Exports the rendered canvas through a renderer.
    ///
    /// PDF exports are scaled to fit the configured page and centered.
    pub fn export(
        &self,
        exporter: &dyn CanvasExporter,
        format: ExportFormat,
        content: ContentSize,
    ) -> Result<Vec<u8>> {
        self.check_export(content)?;

        let placement = match format {
            ExportFormat::Png => None,
            ExportFormat::Pdf => Some(fit_to_page(content, &self.page).ok_or_else(|| {
                DesignerError::ExportPreconditionFailed {
                    reason: "the page has no drawable area".to_string(),
                }
            })?),
        };

        let layout = self.to_layout();
        let request = ExportRequest {
            format,
            layout: &layout,
            content,
            placement,
        };
        let bytes = exporter
            .export(&request)
            .map_err(|e| Error::other(format!("Export to {} failed: {:#}", format.extension(), e)))?;
        tracing::info!("Exported {} ({} bytes)", format.extension(), bytes.len());
        Ok(bytes)
    }
}
