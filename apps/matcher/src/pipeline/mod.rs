//! End-to-end matching: resume document → profile → predicted role → postings
//! for that role → ranked matches.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::catalog::KeywordCatalog;
use crate::errors::AppError;
use crate::extract::TextExtractor;
use crate::matching::{RankedPosting, Ranker};
use crate::models::{CandidateProfile, RawPosting};
use crate::posting::PostingExtractor;
use crate::predictor::{parse_experience_label, RolePredictorAdapter};
use crate::sources::{DocumentTextSource, PostingQuery, PostingSource};

/// Everything produced for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub profile: CandidateProfile,
    pub predicted_role: String,
    pub matches: Vec<RankedPosting>,
}

/// Per-run knobs. `role` skips the classifier; `experience` overrides the
/// extracted experience fed to it.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub location: String,
    pub role: Option<String>,
    pub experience: Option<String>,
}

pub struct MatchPipeline {
    catalog: Arc<KeywordCatalog>,
    documents: Arc<dyn DocumentTextSource>,
    postings: Arc<dyn PostingSource>,
    predictor: Option<RolePredictorAdapter>,
    ranker: Ranker,
}

impl MatchPipeline {
    pub fn new(
        catalog: Arc<KeywordCatalog>,
        documents: Arc<dyn DocumentTextSource>,
        postings: Arc<dyn PostingSource>,
        predictor: Option<RolePredictorAdapter>,
        limit: usize,
    ) -> Self {
        Self {
            catalog,
            documents,
            postings,
            predictor,
            ranker: Ranker::new(limit),
        }
    }

    pub async fn run(&self, resume: &Path, options: &RunOptions) -> Result<MatchReport, AppError> {
        let text = self
            .documents
            .extract_text(resume)
            .await
            .map_err(|e| AppError::TextRetrieval(e.to_string()))?;

        let profile = TextExtractor::new(&self.catalog).extract_all(&text);
        info!(
            name = profile.name.as_deref().unwrap_or("-"),
            skills = profile.skills.len(),
            "candidate profile built"
        );

        let predicted_role = self.resolve_role(&profile, options).await?;

        let query = PostingQuery {
            keywords: predicted_role.clone(),
            location: options.location.clone(),
        };
        let raw = self
            .postings
            .fetch_posting_blocks(&query)
            .await
            .map_err(|e| AppError::PostingSource(e.to_string()))?;

        let matches = self.match_postings(&profile, raw);
        info!(
            role = %predicted_role,
            matches = matches.len(),
            "matching completed"
        );

        Ok(MatchReport {
            profile,
            predicted_role,
            matches,
        })
    }

    /// Extracts and ranks already-fetched postings against a profile.
    pub fn match_postings(
        &self,
        profile: &CandidateProfile,
        raw: impl IntoIterator<Item = RawPosting>,
    ) -> Vec<RankedPosting> {
        let extractor = PostingExtractor::new(&self.catalog);
        let postings = raw.into_iter().map(|r| extractor.extract_posting(r));
        self.ranker.rank(profile, postings)
    }

    async fn resolve_role(
        &self,
        profile: &CandidateProfile,
        options: &RunOptions,
    ) -> Result<String, AppError> {
        if let Some(role) = options.role.as_deref().filter(|r| !r.trim().is_empty()) {
            return Ok(role.trim().to_string());
        }

        let adapter = self.predictor.as_ref().ok_or_else(|| {
            AppError::Config("no role model configured and no role given".to_string())
        })?;

        let prediction = match options.experience.as_deref() {
            Some(label) => {
                adapter
                    .predict_role_with_experience(profile, parse_experience_label(label))
                    .await
            }
            None => adapter.predict_role(profile).await,
        };
        prediction.map_err(|e| AppError::PredictionUnavailable(e.to_string()))
    }
}
