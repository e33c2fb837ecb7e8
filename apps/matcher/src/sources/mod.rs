//! Collaborator boundaries: where resume text and job postings come from.
//!
//! The core never retries or substitutes data on failure. Callers map a
//! `SourceError` onto `AppError::TextRetrieval` or `AppError::PostingSource`.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::RawPosting;

pub mod document;
pub mod file;
pub mod linkedin;

pub use document::PdfTextSource;
pub use file::FilePostingSource;
pub use linkedin::LinkedInPostingSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// What to search a job board for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingQuery {
    pub keywords: String,
    pub location: String,
}

/// Turns a stored document into plain text (possibly empty).
#[async_trait]
pub trait DocumentTextSource: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, SourceError>;
}

/// Yields postings as categorized text blocks plus pass-through metadata.
#[async_trait]
pub trait PostingSource: Send + Sync {
    async fn fetch_posting_blocks(&self, query: &PostingQuery) -> Result<Vec<RawPosting>, SourceError>;
}
