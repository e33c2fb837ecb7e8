/// Any line containing one of these opens an introductory block to discard.
const SECTION_OPENERS: &[&str] = &["summary", "about", "overview", "objective"];

/// Headers that close a discarded block (exact match on the trimmed, lowercased line).
const SECTION_HEADERS: &[&str] = &["skills", "education", "experience", "projects"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Keeping,
    Skipping,
}

/// Removes the summary/about/objective block from a resume.
///
/// Single forward pass. The opener line and the line that ends the block (a
/// blank line or a bare section header) are both dropped; everything else
/// outside the block is kept in order.
pub fn strip_noise_section(text: &str) -> String {
    let mut state = ScanState::Keeping;
    let mut kept = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if SECTION_OPENERS.iter().any(|k| lower.contains(k)) {
            state = ScanState::Skipping;
            continue;
        }

        match state {
            ScanState::Skipping => {
                if trimmed.is_empty() || SECTION_HEADERS.contains(&lower.as_str()) {
                    state = ScanState::Keeping;
                }
            }
            ScanState::Keeping => kept.push(line),
        }
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_opener_keeps_everything() {
        let text = "Jane Doe\n\nSkills\nPython";
        assert_eq!(strip_noise_section(text), text);
    }

    #[test]
    fn test_summary_block_removed_until_blank_line() {
        let text = "Jane Doe\nSummary\nPassionate engineer using Rust\nloves Kafka\n\nSkills\nPython";
        assert_eq!(strip_noise_section(text), "Jane Doe\nSkills\nPython");
    }

    #[test]
    fn test_block_ends_at_section_header() {
        let text = "Objective\nto build Go services\n  Education  \nBTech";
        assert_eq!(strip_noise_section(text), "BTech");
    }

    #[test]
    fn test_opener_inside_block_keeps_skipping() {
        let text = "About me\nsummary of things\nstill intro\n\nkept";
        assert_eq!(strip_noise_section(text), "kept");
    }

    #[test]
    fn test_unterminated_block_drops_the_rest() {
        let text = "Name Here\nOverview\nline one\nline two";
        assert_eq!(strip_noise_section(text), "Name Here");
    }

    #[test]
    fn test_blank_lines_outside_block_are_kept() {
        let text = "a\n\nb";
        assert_eq!(strip_noise_section(text), "a\n\nb");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_noise_section(""), "");
    }
}
