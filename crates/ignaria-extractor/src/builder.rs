//! Section assembly from candidate boundaries

use crate::config::ExtractorConfig;
use crate::disambiguator::{AttributionBasis, AuthorDisambiguator};
use crate::error::ExtractorError;
use crate::matcher::HeadingMatcher;
use ignaria_domain::{CandidateBoundary, Section};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^The\s+").expect("valid leading article regex"));
static TRAILING_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[.*?\]\s*$").expect("valid footnote regex"));
static TRAILING_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+https?://.*$").expect("valid url regex"));

/// A built section together with where and why it was found
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedSection {
    /// 1-based line of the heading
    pub line_number: usize,

    /// Heading pattern that matched
    pub pattern: String,

    /// The section record
    pub section: Section,

    /// How the author was chosen
    pub basis: AttributionBasis,
}

/// Turns a volume's text into its ordered, deduplicated sections
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    matcher: HeadingMatcher,
    disambiguator: AuthorDisambiguator,
}

impl SectionBuilder {
    /// Create a builder from its parts
    pub fn new(matcher: HeadingMatcher, disambiguator: AuthorDisambiguator) -> Self {
        Self {
            matcher,
            disambiguator,
        }
    }

    /// Compile a builder from configuration
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let matcher = HeadingMatcher::new(config)?;
        let disambiguator = AuthorDisambiguator::new(config.keyword_rules.clone());
        Ok(Self::new(matcher, disambiguator))
    }

    /// The heading matcher in use
    pub fn matcher(&self) -> &HeadingMatcher {
        &self.matcher
    }

    /// Sections in text order with their line numbers and attribution basis
    pub fn build_located(&self, text: &str, known_authors: &[String]) -> Vec<LocatedSection> {
        self.sections_from_candidates(self.matcher.candidates(text), known_authors)
    }

    /// Sections in text order
    pub fn build(&self, text: &str, known_authors: &[String]) -> Vec<Section> {
        self.build_located(text, known_authors)
            .into_iter()
            .map(|located| located.section)
            .collect()
    }

    /// Attribute and title each candidate, keeping the first of any repeated marker
    pub fn sections_from_candidates<I>(&self, candidates: I, known_authors: &[String]) -> Vec<LocatedSection>
    where
        I: IntoIterator<Item = CandidateBoundary>,
    {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();

        for candidate in candidates {
            if !seen.insert(candidate.text.clone()) {
                continue;
            }

            let attribution = self.disambiguator.attribute(&candidate.text, known_authors);
            let title = normalize_title(&candidate.text);

            sections.push(LocatedSection {
                line_number: candidate.line_number,
                pattern: candidate.pattern,
                section: Section::new(attribution.author, title, candidate.text),
                basis: attribution.basis,
            });
        }

        sections
    }
}

/// Display title for a heading.
///
/// Drops a leading `The`, a trailing bracketed footnote and a trailing URL.
/// Falls back to the trimmed heading when nothing would remain.
pub fn normalize_title(heading: &str) -> String {
    let title = LEADING_ARTICLE.replace(heading, "");
    let title = TRAILING_FOOTNOTE.replace(&title, "");
    let title = TRAILING_URL.replace(&title, "");
    let title = title.trim();

    if title.is_empty() {
        heading.trim().to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> SectionBuilder {
        SectionBuilder::from_config(&ExtractorConfig::default()).unwrap()
    }

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("The Epistle of Ignatius to the Ephesians"),
            "Epistle of Ignatius to the Ephesians"
        );
        assert_eq!(normalize_title("Fragments of Papias [12]"), "Fragments of Papias");
        assert_eq!(
            normalize_title("On the Soul http://www.ccel.org/ccel/schaff/anf03"),
            "On the Soul"
        );
        assert_eq!(normalize_title("  Against Heresies  "), "Against Heresies");
    }

    #[test]
    fn test_leading_article_is_case_sensitive() {
        assert_eq!(normalize_title("THE MARTYRDOM OF POLYCARP"), "THE MARTYRDOM OF POLYCARP");
        assert_eq!(normalize_title("Theophilus to Autolycus"), "Theophilus to Autolycus");
    }

    #[test]
    fn test_empty_title_falls_back_to_heading() {
        assert_eq!(normalize_title("The [1]"), "The [1]");
    }

    #[test]
    fn test_build_dedups_by_marker() {
        let text = "The Epistle of Barnabas\nchapter one\nThe Epistle of Barnabas\nThe Martyrdom of Polycarp\n";
        let located = builder().build_located(text, &authors(&["Barnabas", "Polycarp"]));

        assert_eq!(located.len(), 2);
        assert_eq!(located[0].line_number, 1);
        assert_eq!(located[0].section.author, "Barnabas");
        assert_eq!(located[1].line_number, 4);
        assert_eq!(located[1].section.title, "Martyrdom of Polycarp");
        assert_eq!(located[1].section.start_marker, "The Martyrdom of Polycarp");
    }

    #[test]
    fn test_build_without_headings() {
        let text = "This volume is a single continuous treatise.\nNothing here looks like a title.\n";
        assert!(builder().build(text, &authors(&["Origen"])).is_empty());
    }

    #[test]
    fn test_built_sections_carry_no_annotations() {
        let sections = builder().build("Fragments of Papias\n", &authors(&["Papias"]));
        assert_eq!(sections.len(), 1);
        assert!(sections[0].composition_year.is_none());
        assert!(sections[0].author_region.is_none());
        assert!(sections[0].notes.is_none());
    }
}
