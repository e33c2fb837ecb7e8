use tracing::debug;

use crate::catalog::KeywordCatalog;
use crate::models::{Posting, PostingAttributes, RawPosting};
use crate::posting::blocks::PostingBlocks;

/// Finds catalog skills and qualifications in a posting's description.
#[derive(Debug, Clone, Copy)]
pub struct PostingExtractor<'c> {
    catalog: &'c KeywordCatalog,
}

impl PostingExtractor<'static> {
    pub fn builtin() -> Self {
        Self::new(KeywordCatalog::builtin())
    }
}

impl<'c> PostingExtractor<'c> {
    pub fn new(catalog: &'c KeywordCatalog) -> Self {
        Self { catalog }
    }

    /// Every category is searched; headings themselves are not part of the corpus.
    pub fn extract(&self, blocks: &PostingBlocks) -> PostingAttributes {
        let corpus = blocks.corpus();
        PostingAttributes {
            skills: self.catalog.match_skills(&corpus),
            qualifications: self.catalog.match_qualifications(&corpus),
        }
    }

    pub fn extract_posting(&self, raw: RawPosting) -> Posting {
        let attributes = self.extract(&raw.blocks);
        debug!(
            title = raw.metadata.title.as_deref().unwrap_or("-"),
            skills = attributes.skills.len(),
            qualifications = attributes.qualifications.len(),
            "posting extracted"
        );
        Posting {
            metadata: raw.metadata,
            attributes,
        }
    }
}
