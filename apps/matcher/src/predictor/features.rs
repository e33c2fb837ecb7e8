//! Feature shaping for the role classifier.
//!
//! Column layout: one multi-hot column per skill class, then experience (years),
//! encoded degree, encoded domain.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::CandidateProfile;
use crate::predictor::PredictionError;

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)").expect("number pattern must compile"));

/// Fixed-width input row for the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Vocabularies the classifier was trained with. Class lists are kept sorted so a
/// category's code is its position, matching how the model artifact was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEncoder {
    skill_classes: Vec<String>,
    degree_classes: Vec<String>,
    domain_classes: Vec<String>,
}

impl FeatureEncoder {
    pub fn new(
        skill_classes: Vec<String>,
        degree_classes: Vec<String>,
        domain_classes: Vec<String>,
    ) -> Self {
        Self {
            skill_classes: sorted_unique(skill_classes),
            degree_classes: sorted_unique(degree_classes),
            domain_classes: sorted_unique(domain_classes),
        }
    }

    pub fn width(&self) -> usize {
        self.skill_classes.len() + 3
    }

    pub fn skill_classes(&self) -> &[String] {
        &self.skill_classes
    }

    pub fn encode(&self, profile: &CandidateProfile) -> Result<FeatureVector, PredictionError> {
        let years = profile.experience.map(|e| e.as_years()).unwrap_or(0.0);
        self.encode_with_experience(profile, years)
    }

    /// Same as [`encode`](Self::encode) with the experience column supplied by the caller.
    pub fn encode_with_experience(
        &self,
        profile: &CandidateProfile,
        experience_years: f64,
    ) -> Result<FeatureVector, PredictionError> {
        let skills: BTreeSet<String> = profile
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();

        let mut values: Vec<f32> = self
            .skill_classes
            .iter()
            .map(|class| if skills.contains(class) { 1.0 } else { 0.0 })
            .collect();

        let first = profile.qualification.iter().next().map(String::as_str);
        let degree = degree_label(first);
        let domain = domain_label(first);

        values.push(experience_years as f32);
        values.push(class_code(&self.degree_classes, degree, "degree")? as f32);
        values.push(class_code(&self.domain_classes, domain, "domain")? as f32);

        Ok(FeatureVector::new(values))
    }
}

fn sorted_unique(classes: Vec<String>) -> Vec<String> {
    classes
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn class_code(classes: &[String], value: &str, kind: &'static str) -> Result<usize, PredictionError> {
    classes
        .binary_search_by(|c| c.as_str().cmp(value))
        .map_err(|_| PredictionError::UnknownCategory {
            kind,
            value: value.to_string(),
        })
}

/// Degree bucket of a qualification label.
pub fn degree_label(qualification: Option<&str>) -> &'static str {
    let q = qualification.unwrap_or_default().to_lowercase();
    if q.contains("phd") {
        "PhD"
    } else if q.contains("m.sc") || q.contains("msc") {
        "MSc"
    } else if q.contains("b.sc") || q.contains("bsc") {
        "BSc"
    } else if q.contains("m.tech") || q.contains("mtech") {
        "MTech"
    } else if q.contains("b.tech") || q.contains("btech") {
        "BTech"
    } else {
        "Other"
    }
}

/// Subject-area bucket of a qualification label.
pub fn domain_label(qualification: Option<&str>) -> &'static str {
    let q = qualification.unwrap_or_default().to_lowercase();
    if q.contains("cyber") {
        "Cybersecurity"
    } else if q.contains("cloud") {
        "Cloud"
    } else if q.contains("machine learning") {
        "Machine Learning"
    } else if q.contains("data") {
        "Data Science"
    } else if q.contains("computer") || q.contains("cs") {
        "Computer Science"
    } else {
        "General"
    }
}

/// Years of experience from a free-form label such as `"2 Year"`, `"6 months"`
/// or `"2-5"`. Unrecognised labels count as zero.
pub fn parse_experience_label(label: &str) -> f64 {
    let exp = label.trim().to_lowercase();
    if exp.is_empty() {
        return 0.0;
    }
    if exp.contains("less than") || exp.contains("few months") {
        return 0.1;
    }
    if exp.contains("month") {
        return match first_number(&exp) {
            Some(months) => (months as f64 / 12.0 * 100.0).round() / 100.0,
            None => 0.1,
        };
    }
    if exp.contains("0-2") {
        return 1.0;
    }
    if exp.contains("2-5") {
        return 3.5;
    }
    if exp.contains("5+") {
        return 6.0;
    }
    first_number(&exp).map(|y| y as f64).unwrap_or(0.0)
}

fn first_number(text: &str) -> Option<u64> {
    FIRST_NUMBER
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::new(
            strings(&["python", "aws", "java", "docker"]),
            strings(&["BTech", "MTech", "Other", "PhD", "BSc", "MSc"]),
            strings(&["Computer Science", "General", "Data Science", "Cloud"]),
        )
    }

    fn profile(skills: &[&str], quals: &[&str], months: u32) -> CandidateProfile {
        CandidateProfile {
            name: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            qualification: quals.iter().map(|s| s.to_string()).collect(),
            experience: Experience::from_months(months),
        }
    }

    #[test]
    fn test_skill_columns_are_sorted_multi_hot() {
        let enc = encoder();
        assert_eq!(enc.skill_classes(), &strings(&["aws", "docker", "java", "python"])[..]);
        let features = enc.encode(&profile(&["Python", "AWS", "Rust"], &[], 0)).unwrap();
        assert_eq!(&features.values()[..4], &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(features.len(), enc.width());
    }

    #[test]
    fn test_trailing_columns_experience_degree_domain() {
        let enc = encoder();
        let features = enc
            .encode(&profile(&[], &["BTech", "Computer Science"], 18))
            .unwrap();
        let tail = &features.values()[4..];
        assert!((tail[0] - 1.5).abs() < 1e-6);
        // sorted degrees: BSc, BTech, MSc, MTech, Other, PhD
        assert_eq!(tail[1], 1.0);
        // sorted domains: Cloud, Computer Science, Data Science, General
        assert_eq!(tail[2], 3.0);
    }

    #[test]
    fn test_no_qualification_encodes_other_general() {
        let features = encoder().encode(&profile(&[], &[], 0)).unwrap();
        let tail = &features.values()[4..];
        assert_eq!(tail, &[0.0, 4.0, 3.0]);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let enc = FeatureEncoder::new(vec![], strings(&["PhD"]), strings(&["General"]));
        let err = enc.encode(&profile(&[], &["BTech"], 0)).unwrap_err();
        match err {
            PredictionError::UnknownCategory { kind, value } => {
                assert_eq!(kind, "degree");
                assert_eq!(value, "BTech");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(degree_label(Some("PHD")), "PhD");
        assert_eq!(degree_label(Some("M.Sc")), "MSc");
        assert_eq!(degree_label(Some("B.Sc")), "BSc");
        assert_eq!(degree_label(Some("MTech")), "MTech");
        assert_eq!(degree_label(Some("BTech")), "BTech");
        assert_eq!(degree_label(Some("Bachelor")), "Other");
        assert_eq!(degree_label(None), "Other");
    }

    #[test]
    fn test_domain_labels() {
        assert_eq!(domain_label(Some("Cyber Security")), "Cybersecurity");
        assert_eq!(domain_label(Some("Cloud Computing")), "Cloud");
        assert_eq!(domain_label(Some("Machine Learning")), "Machine Learning");
        assert_eq!(domain_label(Some("Data Analytics")), "Data Science");
        assert_eq!(domain_label(Some("Computer Application")), "Computer Science");
        assert_eq!(domain_label(Some("Engineering")), "General");
    }

    #[test]
    fn test_parse_experience_label() {
        assert_eq!(parse_experience_label("2 Year"), 2.0);
        assert_eq!(parse_experience_label("6 months"), 0.5);
        assert_eq!(parse_experience_label("few months"), 0.1);
        assert_eq!(parse_experience_label("less than a year"), 0.1);
        assert_eq!(parse_experience_label("0-2 years"), 1.0);
        assert_eq!(parse_experience_label("2-5"), 3.5);
        assert_eq!(parse_experience_label("5+"), 6.0);
        assert_eq!(parse_experience_label("a while"), 0.0);
        assert_eq!(parse_experience_label(""), 0.0);
    }

    #[test]
    fn test_extracted_experience_uses_total_months_not_display_label() {
        let p = profile(&[], &[], 18);
        let exp = p.experience.unwrap();
        assert_eq!(exp.to_string(), "1 years 6 months");
        assert_eq!(parse_experience_label(&exp.to_string()), 0.08);

        let features = encoder().encode(&p).unwrap();
        assert_eq!(features.values()[4], 1.5);
    }

    #[test]
    fn test_encode_with_experience_override() {
        let features = encoder()
            .encode_with_experience(&profile(&[], &[], 0), 3.5)
            .unwrap();
        assert_eq!(features.values()[4], 3.5);
    }
}
