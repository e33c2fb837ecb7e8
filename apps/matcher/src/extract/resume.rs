use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::KeywordCatalog;
use crate::extract::experience::compute_experience;
use crate::extract::name::guess_name;
use crate::extract::noise::strip_noise_section;
use crate::models::CandidateProfile;

/// Turns raw resume text into a `CandidateProfile`.
///
/// Total over its input: every field degrades to absent/empty on its own.
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor<'c> {
    catalog: &'c KeywordCatalog,
}

impl TextExtractor<'static> {
    pub fn builtin() -> Self {
        Self::new(KeywordCatalog::builtin())
    }
}

impl<'c> TextExtractor<'c> {
    pub fn new(catalog: &'c KeywordCatalog) -> Self {
        Self { catalog }
    }

    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        self.catalog.match_skills(text)
    }

    pub fn extract_qualifications(&self, text: &str) -> BTreeSet<String> {
        self.catalog.match_qualifications(text)
    }

    pub fn extract_all(&self, text: &str) -> CandidateProfile {
        let stripped = strip_noise_section(text);
        let lines: Vec<&str> = stripped
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let profile = CandidateProfile {
            name: guess_name(&lines),
            skills: self.extract_skills(&stripped),
            qualification: self.extract_qualifications(&stripped),
            // Date ranges often sit inside the stripped intro, so use the full text.
            experience: compute_experience(text),
        };

        debug!(
            name = profile.name.as_deref().unwrap_or("-"),
            skills = profile.skills.len(),
            qualifications = profile.qualification.len(),
            experience_months = profile.experience.map(|e| e.total_months()).unwrap_or(0),
            "resume extracted"
        );

        profile
    }
}
