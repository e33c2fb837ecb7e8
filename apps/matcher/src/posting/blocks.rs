use serde::{Deserialize, Serialize};

/// Bucket used for text that appears before any heading.
pub const DEFAULT_CATEGORY: &str = "General Information";

/// Placeholder fragment for a posting whose description could not be found.
pub const NO_DESCRIPTION: &str = "No description available";

/// One heading and the text fragments listed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingSection {
    pub heading: String,
    #[serde(default)]
    pub fragments: Vec<String>,
}

/// A posting's description, grouped by heading in document order.
///
/// Headings are unique: re-opening an existing heading appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingBlocks {
    sections: Vec<PostingSection>,
}

impl PostingBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback used when a posting has no description at all.
    pub fn placeholder() -> Self {
        let mut blocks = Self::new();
        blocks.push_fragment(DEFAULT_CATEGORY, NO_DESCRIPTION);
        blocks
    }

    /// Ensures a section exists for `heading` and returns its index.
    pub fn open_section(&mut self, heading: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.heading == heading) {
            return idx;
        }
        self.sections.push(PostingSection {
            heading: heading.to_string(),
            fragments: Vec::new(),
        });
        self.sections.len() - 1
    }

    pub fn push_fragment(&mut self, heading: &str, fragment: impl Into<String>) {
        let idx = self.open_section(heading);
        self.sections[idx].fragments.push(fragment.into());
    }

    pub fn sections(&self) -> &[PostingSection] {
        &self.sections
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.fragments.iter().map(String::as_str))
    }

    /// All fragments flattened into one newline-separated search corpus.
    pub fn corpus(&self) -> String {
        self.fragments().collect::<Vec<_>>().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }
}

impl FromIterator<(String, Vec<String>)> for PostingBlocks {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut blocks = Self::new();
        for (heading, fragments) in iter {
            let idx = blocks.open_section(&heading);
            blocks.sections[idx].fragments.extend(fragments);
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_single_default_bucket() {
        let blocks = PostingBlocks::placeholder();
        assert_eq!(blocks.sections().len(), 1);
        assert_eq!(blocks.sections()[0].heading, DEFAULT_CATEGORY);
        assert_eq!(blocks.corpus(), NO_DESCRIPTION);
    }

    #[test]
    fn test_reopened_heading_appends_in_place() {
        let mut blocks = PostingBlocks::new();
        blocks.push_fragment("Requirements", "Python");
        blocks.push_fragment("Benefits", "Lunch");
        blocks.push_fragment("Requirements", "Docker");

        assert_eq!(blocks.sections().len(), 2);
        assert_eq!(blocks.sections()[0].fragments, vec!["Python", "Docker"]);
        assert_eq!(blocks.corpus(), "Python\nDocker\nLunch");
    }

    #[test]
    fn test_empty_sections_have_no_fragments() {
        let mut blocks = PostingBlocks::new();
        blocks.open_section(DEFAULT_CATEGORY);
        assert!(blocks.is_empty());
        assert_eq!(blocks.corpus(), "");
    }

    #[test]
    fn test_collect_from_pairs() {
        let blocks: PostingBlocks = vec![
            ("About".to_string(), vec!["a".to_string()]),
            ("About".to_string(), vec!["b".to_string()]),
        ]
        .into_iter()
        .collect();
        assert_eq!(blocks.sections().len(), 1);
        assert_eq!(blocks.sections()[0].fragments, vec!["a", "b"]);
    }

    #[test]
    fn test_serde_shape_is_list_of_sections() {
        let json = r#"[{"heading": "Requirements", "fragments": ["Rust", "Go"]}]"#;
        let blocks: PostingBlocks = serde_json::from_str(json).unwrap();
        assert_eq!(blocks.sections()[0].heading, "Requirements");
        assert_eq!(blocks.corpus(), "Rust\nGo");
    }
}
