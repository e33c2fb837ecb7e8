// Posting extraction: categorized posting text in, canonical labels out.

pub mod blocks;
pub mod extractor;
pub mod html;

pub use blocks::{PostingBlocks, PostingSection, DEFAULT_CATEGORY, NO_DESCRIPTION};
pub use extractor::PostingExtractor;
