use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::sources::{DocumentTextSource, SourceError};

/// Reads resumes from disk: PDFs through `pdf-extract`, text files as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

#[async_trait]
impl DocumentTextSource for PdfTextSource {
    async fn extract_text(&self, path: &Path) -> Result<String, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let text = match extension.as_str() {
            "pdf" => {
                let bytes = tokio::fs::read(path).await?;
                tokio::task::spawn_blocking(move || pdf_text(&bytes))
                    .await
                    .map_err(|e| SourceError::Pdf(format!("extraction task failed: {e}")))??
            }
            "txt" | "text" | "md" => tokio::fs::read_to_string(path).await?,
            other => return Err(SourceError::UnsupportedFormat(other.to_string())),
        };

        if text.trim().is_empty() {
            warn!(path = %path.display(), "document contains no extractable text");
        }
        debug!(path = %path.display(), chars = text.len(), "document text extracted");
        Ok(text)
    }
}

/// Pages come back separated by form feeds; normalize them to newlines.
fn pdf_text(bytes: &[u8]) -> Result<String, SourceError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map(|text| text.replace('\u{c}', "\n"))
        .map_err(|e| SourceError::Pdf(e.to_string()))
}
