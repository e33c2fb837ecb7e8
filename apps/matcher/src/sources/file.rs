use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::models::RawPosting;
use crate::sources::{PostingQuery, PostingSource, SourceError};

/// Serves postings from a JSON file (an array of `RawPosting`). The query is
/// logged but not applied; the file is assumed to already hold the search result.
#[derive(Debug, Clone)]
pub struct FilePostingSource {
    path: PathBuf,
}

impl FilePostingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostingSource for FilePostingSource {
    async fn fetch_posting_blocks(&self, query: &PostingQuery) -> Result<Vec<RawPosting>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let postings: Vec<RawPosting> = serde_json::from_str(&raw)?;
        info!(
            path = %self.path.display(),
            keywords = %query.keywords,
            count = postings.len(),
            "postings loaded from file"
        );
        Ok(postings)
    }
}
