//! Heading detection over volume text

use crate::config::{ExtractorConfig, HeadingPattern};
use crate::error::ExtractorError;
use ignaria_domain::{split_lines, CandidateBoundary};
use regex::{Regex, RegexBuilder};

const BOM: char = '\u{feff}';

/// Flags lines that look like the title header of an embedded work
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    patterns: Vec<(String, Regex)>,
    min_len: usize,
    max_len: usize,
    max_lines: Option<usize>,
}

impl HeadingMatcher {
    /// Compile the configured pattern table
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let patterns = config
            .patterns
            .iter()
            .map(compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            min_len: config.min_heading_len,
            max_len: config.max_heading_len,
            max_lines: config.max_scan_lines,
        })
    }

    /// Number of compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Whether a line length (in characters) is plausible for a heading
    pub fn plausible_length(&self, len: usize) -> bool {
        self.min_len < len && len < self.max_len
    }

    /// Name of the first pattern matching an already trimmed line
    pub fn match_line(&self, line: &str) -> Option<&str> {
        if !self.plausible_length(line.chars().count()) {
            return None;
        }

        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(line))
            .map(|(name, _)| name.as_str())
    }

    /// Lazily yield candidate boundaries in line order.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. The iterator borrows the
    /// text, so it can be rebuilt as often as needed.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = CandidateBoundary> + 'a {
        split_lines(text)
            .take(self.max_lines.unwrap_or(usize::MAX))
            .enumerate()
            .filter_map(move |(idx, line)| {
                let line = if idx == 0 { line.trim_start_matches(BOM) } else { line };
                let trimmed = line.trim();
                self.match_line(trimmed)
                    .map(|name| CandidateBoundary::new(idx + 1, trimmed, name))
            })
    }
}

fn compile(pattern: &HeadingPattern) -> Result<(String, Regex), ExtractorError> {
    let source = if pattern.regex.starts_with('^') {
        pattern.regex.clone()
    } else {
        format!("^(?:{})", pattern.regex)
    };

    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| ExtractorError::Pattern {
            name: pattern.name.clone(),
            reason: e.to_string(),
        })?;

    Ok((pattern.name.clone(), regex))
}
