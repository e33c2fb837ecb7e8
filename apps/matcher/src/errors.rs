use thiserror::Error;

/// Application-level error type.
///
/// Extraction and scoring never fail; only the collaborator boundaries do, and
/// each one surfaces as its own named kind.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Text retrieval failed: {0}")]
    TextRetrieval(String),

    #[error("Posting source unavailable: {0}")]
    PostingSource(String),

    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, used in the CLI's JSON error output.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::TextRetrieval(_) => "TEXT_RETRIEVAL_FAILED",
            AppError::PostingSource(_) => "POSTING_SOURCE_UNAVAILABLE",
            AppError::PredictionUnavailable(_) => "PREDICTION_UNAVAILABLE",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
