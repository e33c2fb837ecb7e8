// Matching: per-pair scoring and qualification-aware ranking.

pub mod ranker;
pub mod scorer;

pub use ranker::{rank, RankedPosting, Ranker, DEFAULT_LIMIT};
pub use scorer::{score, MatchResult, MatchScorer, OverlapScorer};
