//! Resume-to-job matching: heuristic extraction of candidate and posting
//! attributes, qualification-aware ranking, and role prediction behind an
//! injected classifier.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod posting;
pub mod predictor;
pub mod sources;
