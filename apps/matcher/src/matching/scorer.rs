//! Match scoring: pluggable, trait-based scorer comparing a candidate to one posting.
//!
//! Default: `OverlapScorer` (exact canonical-label set overlap).

use serde::{Deserialize, Serialize};

use crate::models::{CandidateProfile, PostingAttributes};

/// Outcome of comparing one candidate with one posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub skill_match_count: usize,
    /// True when a qualification is shared, or the posting states none.
    pub qualification_match: bool,
}

/// Implement this to swap scoring backends without touching the ranker.
///
/// Implementations must be pure so independent pairs can be scored concurrently.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, posting: &PostingAttributes) -> MatchResult;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScorer;

impl MatchScorer for OverlapScorer {
    fn score(&self, candidate: &CandidateProfile, posting: &PostingAttributes) -> MatchResult {
        score(candidate, posting)
    }
}

pub fn score(candidate: &CandidateProfile, posting: &PostingAttributes) -> MatchResult {
    let skill_match_count = candidate.skills.intersection(&posting.skills).count();
    let qualification_match = posting.qualifications.is_empty()
        || !candidate.qualification.is_disjoint(&posting.qualifications);

    MatchResult {
        skill_match_count,
        qualification_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn labels(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn candidate(skills: &[&str], quals: &[&str]) -> CandidateProfile {
        CandidateProfile {
            skills: labels(skills),
            qualification: labels(quals),
            ..Default::default()
        }
    }

    fn posting(skills: &[&str], quals: &[&str]) -> PostingAttributes {
        PostingAttributes {
            skills: labels(skills),
            qualifications: labels(quals),
        }
    }

    #[test]
    fn test_empty_posting_requirement_auto_satisfies() {
        let result = score(
            &candidate(&["Python", "Java"], &[]),
            &posting(&["Python", "C++"], &[]),
        );
        assert_eq!(result.skill_match_count, 1);
        assert!(result.qualification_match);
    }

    #[test]
    fn test_shared_qualification_matches() {
        let result = score(
            &candidate(&[], &["BTech", "MTech"]),
            &posting(&[], &["MTech", "PHD"]),
        );
        assert!(result.qualification_match);
    }

    #[test]
    fn test_disjoint_qualifications_do_not_match() {
        let result = score(&candidate(&[], &["BCA"]), &posting(&[], &["PHD"]));
        assert!(!result.qualification_match);
    }

    #[test]
    fn test_candidate_without_qualifications_fails_stated_requirement() {
        let result = score(&candidate(&["Python"], &[]), &posting(&["Python"], &["BTech"]));
        assert_eq!(result.skill_match_count, 1);
        assert!(!result.qualification_match);
    }

    #[test]
    fn test_labels_compare_exactly() {
        let result = score(&candidate(&["python"], &[]), &posting(&["Python"], &[]));
        assert_eq!(result.skill_match_count, 0);
    }

    #[test]
    fn test_count_bounded_by_smaller_set() {
        let c = candidate(&["Python", "AWS", "Docker", "Git"], &[]);
        let p = posting(&["Python", "AWS"], &[]);
        let result = score(&c, &p);
        assert!(result.skill_match_count <= c.skills.len().min(p.skills.len()));
        assert_eq!(result.skill_match_count, 2);
    }

    #[test]
    fn test_overlap_scorer_delegates() {
        let c = candidate(&["Go"], &[]);
        let p = posting(&["Go"], &[]);
        assert_eq!(OverlapScorer.score(&c, &p), score(&c, &p));
    }
}
