/// How many leading lines are considered when guessing the candidate's name.
const NAME_SCAN_LINES: usize = 10;

const EXCLUDED_TERMS: &[&str] = &[
    "email",
    "resume",
    "linkedin",
    "github",
    "portfolio",
    "phone",
    "contact",
];

/// Best-effort name guess from the first lines of a resume.
///
/// Words from every purely alphabetic line accumulate (the accumulator is not
/// reset by non-candidate lines in between) until at least two words are
/// collected. Returns them title-cased, or `None` if ten lines pass first.
pub fn guess_name<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    let mut words: Vec<&str> = Vec::new();

    for line in lines.iter().take(NAME_SCAN_LINES) {
        let clean = line.as_ref().trim();
        if !is_name_candidate(clean) {
            continue;
        }
        words.extend(clean.split_whitespace());
        if words.len() >= 2 {
            let name: Vec<String> = words.iter().map(|w| title_case(w)).collect();
            return Some(name.join(" "));
        }
    }

    None
}

fn is_name_candidate(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() || !compact.chars().all(char::is_alphabetic) {
        return false;
    }
    let lower = line.to_lowercase();
    !EXCLUDED_TERMS.iter().any(|term| lower.contains(term))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
