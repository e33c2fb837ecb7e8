// Resume extraction: heuristic parsers over plain text.
// Every parser is total; missing signals become `None` or empty sets.

pub mod experience;
pub mod name;
pub mod noise;
pub mod resume;

pub use experience::compute_experience;
pub use name::guess_name;
pub use noise::strip_noise_section;
pub use resume::TextExtractor;
