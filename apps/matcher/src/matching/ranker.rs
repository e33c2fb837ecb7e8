use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::{MatchResult, MatchScorer, OverlapScorer};
use crate::models::{CandidateProfile, Posting};

/// Number of postings returned when the caller does not ask for a specific count.
pub const DEFAULT_LIMIT: usize = 4;

/// A posting that passed the qualification filter, with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPosting {
    pub posting: Posting,
    pub result: MatchResult,
}

/// Filters postings by qualification compatibility and orders them by skill overlap.
#[derive(Debug, Clone)]
pub struct Ranker<S = OverlapScorer> {
    scorer: S,
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Self::with_scorer(OverlapScorer, limit)
    }
}

impl<S: MatchScorer> Ranker<S> {
    pub fn with_scorer(scorer: S, limit: usize) -> Self {
        Self { scorer, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Scores every posting, then applies a single stable sort: postings with
    /// equal skill overlap keep their input order.
    pub fn rank(
        &self,
        candidate: &CandidateProfile,
        postings: impl IntoIterator<Item = Posting>,
    ) -> Vec<RankedPosting> {
        let mut ranked: Vec<RankedPosting> = postings
            .into_iter()
            .filter_map(|posting| {
                let result = self.scorer.score(candidate, &posting.attributes);
                debug!(
                    title = posting.metadata.title.as_deref().unwrap_or("-"),
                    skill_match_count = result.skill_match_count,
                    qualification_match = result.qualification_match,
                    "posting scored"
                );
                result
                    .qualification_match
                    .then_some(RankedPosting { posting, result })
            })
            .collect();

        ranked.sort_by(|a, b| b.result.skill_match_count.cmp(&a.result.skill_match_count));
        ranked.truncate(self.limit);
        ranked
    }
}

/// Ranks with the default overlap scorer.
pub fn rank(
    candidate: &CandidateProfile,
    postings: impl IntoIterator<Item = Posting>,
    limit: usize,
) -> Vec<RankedPosting> {
    Ranker::new(limit).rank(candidate, postings)
}
