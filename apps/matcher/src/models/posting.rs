use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::posting::PostingBlocks;

/// Display fields of a posting. Passed through untouched by extraction and scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingMetadata {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_posted: Option<String>,
    #[serde(default)]
    pub applicants: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
}

/// A posting as handed over by a posting source: categorized text plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPosting {
    #[serde(default)]
    pub metadata: PostingMetadata,
    #[serde(default)]
    pub blocks: PostingBlocks,
}

/// Canonical labels found in one posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingAttributes {
    pub skills: BTreeSet<String>,
    pub qualifications: BTreeSet<String>,
}

/// A posting after extraction: what the scorer and ranker operate on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub metadata: PostingMetadata,
    pub attributes: PostingAttributes,
}
