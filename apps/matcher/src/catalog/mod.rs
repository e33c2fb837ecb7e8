//! Keyword catalog: the canonical skill and qualification vocabulary shared by
//! every extractor, plus the single word-boundary-aware phrase matcher.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Version tag of the built-in vocabulary. Bump whenever a phrase is added or removed.
pub const BUILTIN_VERSION: &str = "2024.1";

const BUILTIN_SKILLS: &[&str] = &[
    "Python",
    "Golang",
    "Go",
    "AWS",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "Docker",
    "Kubernetes",
    "Git",
    "HTML",
    "CSS",
    "C++",
    "C#",
    "Linux",
    "Flask",
    "Django",
    "TensorFlow",
    "PyTorch",
    "Hadoop",
    "Spark",
    "Machine Learning",
    "Deep Learning",
    "REST API",
    "CI/CD",
    "Agile",
    "MySQL",
    "GCP",
    "Azure",
    "Jenkins",
    "Ansible",
    "Terraform",
    "DevOps",
    "Matplotlib",
    "Plotly",
    "Front-end",
    "Back-end",
    "QT",
    "QML",
    "GUI",
    "Geographic Information System",
    "GIS",
    "FPGA",
    "OpenCV",
    "CUDA",
    "OpenCL",
    "Spacy",
    "NLTK",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "Keras",
    "FastAPI",
    "GraphQL",
    "NLP",
];

const BUILTIN_QUALIFICATIONS: &[&str] = &[
    "BTech",
    "MTech",
    "MCA",
    "BCA",
    "B.Sc",
    "M.Sc",
    "Bachelor",
    "Master",
    "Graduate",
    "Post Graduate",
    "PHD",
    "Computer Science",
    "Engineering",
    "Computer Application",
];

static BUILTIN: Lazy<KeywordCatalog> = Lazy::new(|| {
    KeywordCatalog::new(
        BUILTIN_VERSION,
        BUILTIN_SKILLS.iter().copied(),
        BUILTIN_QUALIFICATIONS.iter().copied(),
    )
});

/// An explicit, versioned, ordered list of canonical phrases.
///
/// Labels returned by the matchers are always the exact catalog strings, never
/// the casing found in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    version: String,
    skills: Vec<String>,
    qualifications: Vec<String>,
}

impl KeywordCatalog {
    /// Builds a catalog, dropping duplicate phrases while keeping first-seen order.
    pub fn new<'a>(
        version: impl Into<String>,
        skills: impl IntoIterator<Item = &'a str>,
        qualifications: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            version: version.into(),
            skills: dedup_phrases(skills),
            qualifications: dedup_phrases(qualifications),
        }
    }

    /// The vocabulary the job boards and resumes are scanned with by default.
    pub fn builtin() -> &'static KeywordCatalog {
        &BUILTIN
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn qualifications(&self) -> &[String] {
        &self.qualifications
    }

    pub fn match_skills(&self, text: &str) -> BTreeSet<String> {
        find_phrases(self.skills.iter().map(String::as_str), text)
    }

    pub fn match_qualifications(&self, text: &str) -> BTreeSet<String> {
        find_phrases(self.qualifications.iter().map(String::as_str), text)
    }
}

fn dedup_phrases<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    phrases
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty() && seen.insert(p.to_lowercase()))
        .map(String::from)
        .collect()
}

/// Returns every phrase that occurs in `text` as a whole word or whole phrase,
/// compared case-insensitively.
pub fn find_phrases<'a>(
    phrases: impl IntoIterator<Item = &'a str>,
    text: &str,
) -> BTreeSet<String> {
    let haystack = text.to_lowercase();
    phrases
        .into_iter()
        .filter(|phrase| contains_phrase(&haystack, phrase))
        .map(String::from)
        .collect()
}

/// Word-boundary check: a phrase edge that is a word character must not touch
/// another word character in the haystack. Punctuation edges (`C++`, `C#`) are
/// accepted as-is. `haystack` must already be lowercased.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let needle = phrase.trim().to_lowercase();
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };
    let guard_left = is_word_char(first);
    let guard_right = is_word_char(last);

    // Step one char past each rejected hit so overlapping occurrences are seen.
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle.as_str()) {
        let start = from + offset;
        let end = start + needle.len();
        let left_clear = !guard_left
            || haystack[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_word_char(c));
        let right_clear = !guard_right
            || haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !is_word_char(c));
        if left_clear && right_clear {
            return true;
        }
        from = start + first.len_utf8();
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_catalog_drops_duplicate_phrases() {
        let catalog = KeywordCatalog::builtin();
        let mongo = catalog
            .skills()
            .iter()
            .filter(|s| s.as_str() == "MongoDB")
            .count();
        assert_eq!(mongo, 1);
        assert_eq!(catalog.version(), BUILTIN_VERSION);
    }

    #[test]
    fn test_new_dedups_case_insensitively_keeping_first() {
        let catalog = KeywordCatalog::new("t", ["Rust", "rust", "Go"], ["PHD"]);
        assert_eq!(catalog.skills(), &["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_scenario_skills_line() {
        let found = KeywordCatalog::builtin().match_skills("Skills: Python, AWS, Docker");
        assert_eq!(found, set(&["AWS", "Docker", "Python"]));
    }

    #[test]
    fn test_go_does_not_match_inside_longer_words() {
        let found = KeywordCatalog::builtin().match_skills("Worked at Google, going forward");
        assert!(found.is_empty(), "unexpected: {found:?}");
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let found = KeywordCatalog::builtin().match_skills("Frontend in JavaScript");
        assert_eq!(found, set(&["JavaScript"]));
    }

    #[test]
    fn test_matching_is_case_insensitive_and_returns_canonical_label() {
        let found = KeywordCatalog::builtin().match_skills("built with PYTHON and node.js");
        assert_eq!(found, set(&["Node.js", "Python"]));
    }

    #[test]
    fn test_multi_word_phrases_match() {
        let found =
            KeywordCatalog::builtin().match_skills("Experience in machine learning and REST API design");
        assert!(found.contains("Machine Learning"));
        assert!(found.contains("REST API"));
    }

    #[test]
    fn test_punctuation_edged_phrases_match() {
        let found = KeywordCatalog::builtin().match_skills("Languages: C++, C#; CI/CD pipelines");
        assert!(found.contains("C++"));
        assert!(found.contains("C#"));
        assert!(found.contains("CI/CD"));
    }

    #[test]
    fn test_later_occurrence_can_satisfy_boundary() {
        assert!(contains_phrase("gopher then go", "Go"));
        assert!(!contains_phrase("gopher then goat", "Go"));
    }

    #[test]
    fn test_overlapping_occurrence_after_rejected_hit_matches() {
        let catalog = KeywordCatalog::new("t", ["data data"], []);
        assert_eq!(
            catalog.match_skills("bigdata data data"),
            set(&["data data"])
        );
        assert!(catalog.match_skills("bigdata data dataset").is_empty());
    }

    #[test]
    fn test_qualifications_match_dotted_phrases() {
        let found = KeywordCatalog::builtin()
            .match_qualifications("B.Sc in Computer Science, then a PhD");
        assert_eq!(found, set(&["B.Sc", "Computer Science", "PHD"]));
    }

    #[test]
    fn test_empty_text_and_empty_phrase() {
        assert!(KeywordCatalog::builtin().match_skills("").is_empty());
        assert!(!contains_phrase("anything", "  "));
    }
}
