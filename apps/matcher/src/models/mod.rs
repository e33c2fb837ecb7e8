pub mod candidate;
pub mod posting;

pub use candidate::{CandidateProfile, Experience};
pub use posting::{Posting, PostingAttributes, PostingMetadata, RawPosting};
