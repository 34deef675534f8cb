//! Candidate boundaries produced by heading detection

/// A line that looks like the title header of an embedded work.
///
/// Candidates only live between the pattern matcher and the section
/// builder; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBoundary {
    /// 1-based line number inside the volume text
    pub line_number: usize,

    /// Trimmed line text that matched
    pub text: String,

    /// Name of the heading pattern that matched first
    pub pattern: String,
}

impl CandidateBoundary {
    /// Create a new candidate
    pub fn new(line_number: usize, text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
            pattern: pattern.into(),
        }
    }

    /// Length of the matched text in characters
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}
