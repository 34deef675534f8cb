//! Author attribution for detected headings

use crate::config::{default_keyword_rules, KeywordRule};
use ignaria_domain::UNKNOWN_AUTHOR;
use std::fmt;

/// Name components this short are too common to count as a direct match
const MIN_COMPONENT_CHARS: usize = 4;

/// Why an author was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributionBasis {
    /// A component of the author's name appears in the heading
    NamedInHeading,

    /// A keyword rule fired and found a matching author
    KeywordRule(String),

    /// No signal matched; the volume's first author was used
    FirstKnownAuthor,

    /// No signal matched and the volume lists no authors
    Unknown,
}

impl fmt::Display for AttributionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributionBasis::NamedInHeading => write!(f, "named"),
            AttributionBasis::KeywordRule(name) => write!(f, "rule:{}", name),
            AttributionBasis::FirstKnownAuthor => write!(f, "default"),
            AttributionBasis::Unknown => write!(f, "unknown"),
        }
    }
}

/// The chosen author and the basis for choosing them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Author name, or the `Unknown` sentinel
    pub author: String,

    /// How the author was selected
    pub basis: AttributionBasis,
}

/// Picks the most likely author of a heading from a volume's known authors
#[derive(Debug, Clone)]
pub struct AuthorDisambiguator {
    rules: Vec<KeywordRule>,
}

impl AuthorDisambiguator {
    /// Create a disambiguator with the given fallback rules
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Create a disambiguator with the built-in keyword table
    pub fn with_default_rules() -> Self {
        Self::new(default_keyword_rules())
    }

    /// Attribute a heading to one author. Never fails.
    ///
    /// 1. First known author with a name component (over 3 characters)
    ///    contained in the heading, case-insensitively.
    /// 2. First keyword rule whose predicate holds decides: its matching
    ///    author, else the default below.
    /// 3. First known author, or `Unknown` when there are none.
    pub fn attribute(&self, heading: &str, known_authors: &[String]) -> Attribution {
        let heading_lower = heading.to_lowercase();

        if let Some(author) = named_in_heading(&heading_lower, known_authors) {
            return Attribution {
                author: author.to_string(),
                basis: AttributionBasis::NamedInHeading,
            };
        }

        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(&heading_lower)) {
            if let Some(author) = rule.resolve(known_authors) {
                return Attribution {
                    author: author.to_string(),
                    basis: AttributionBasis::KeywordRule(rule.name.clone()),
                };
            }
        }

        match known_authors.first() {
            Some(first) => Attribution {
                author: first.clone(),
                basis: AttributionBasis::FirstKnownAuthor,
            },
            None => Attribution {
                author: UNKNOWN_AUTHOR.to_string(),
                basis: AttributionBasis::Unknown,
            },
        }
    }

    /// Author name only
    pub fn resolve(&self, heading: &str, known_authors: &[String]) -> String {
        self.attribute(heading, known_authors).author
    }
}

impl Default for AuthorDisambiguator {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

fn named_in_heading<'a>(heading_lower: &str, known_authors: &'a [String]) -> Option<&'a str> {
    known_authors
        .iter()
        .find(|author| {
            author
                .to_lowercase()
                .split_whitespace()
                .any(|part| part.chars().count() >= MIN_COMPONENT_CHARS && heading_lower.contains(part))
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_direct_name_match() {
        let d = AuthorDisambiguator::default();
        let attribution = d.attribute(
            "The Epistle of Ignatius to the Ephesians",
            &authors(&["Ignatius", "Polycarp"]),
        );
        assert_eq!(attribution.author, "Ignatius");
        assert_eq!(attribution.basis, AttributionBasis::NamedInHeading);
    }

    #[test]
    fn test_first_listed_author_wins_shared_fragment() {
        let d = AuthorDisambiguator::default();
        let known = authors(&["Clement of Rome", "Clement of Alexandria"]);
        assert_eq!(d.resolve("The Stromata of Clement", &known), "Clement of Rome");
    }

    #[test]
    fn test_short_components_are_ignored() {
        let d = AuthorDisambiguator::new(Vec::new());
        // "leo" and "the" are too short to count as direct evidence; "great" is not
        let known = authors(&["Commodian", "Leo the Great"]);
        let attribution = d.attribute("Sermons of Leo the Great on the Nativity", &known);
        assert_eq!(attribution.author, "Leo the Great");
        assert_eq!(attribution.basis, AttributionBasis::NamedInHeading);

        let attribution = d.attribute("A Letter of Leo", &known);
        assert_eq!(attribution.basis, AttributionBasis::FirstKnownAuthor);
        assert_eq!(attribution.author, "Commodian");
    }

    #[test]
    fn test_keyword_rule_recovers_alternate_form() {
        let d = AuthorDisambiguator::default();
        let known = authors(&["Justin Martyr", "Irenaeus"]);
        // "Irenæus" does not contain the component "irenaeus"
        let attribution = d.attribute("Fragments from the Lost Writings of Irenæus", &known);
        assert_eq!(attribution.author, "Irenaeus");
        assert_eq!(attribution.basis, AttributionBasis::KeywordRule("irenaeus".to_string()));
    }

    #[test]
    fn test_irenaeus_rule_does_not_swallow_other_headings() {
        let d = AuthorDisambiguator::default();
        let known = authors(&["Irenaeus", "Pseudo-Barnabas"]);
        // Rule order puts irenaeus before barnabas; it must not fire here
        let attribution = d.attribute("The Epistle of Barnabas", &known);
        assert_eq!(attribution.author, "Pseudo-Barnabas");
        assert_eq!(attribution.basis, AttributionBasis::KeywordRule("barnabas".to_string()));
    }

    #[test]
    fn test_gregory_nazianzen_disambiguation() {
        let d = AuthorDisambiguator::default();
        let known = authors(&["Cyril of Jerusalem", "St. Gregory Nazianzen", "Gregory of Nyssa"]);

        let attribution = d.attribute("Select Orations of Saint Gregory Nazianzen", &known);
        // "gregory" is a direct component of the second author
        assert_eq!(attribution.author, "St. Gregory Nazianzen");

        let d = AuthorDisambiguator::default();
        let known = authors(&["Cyril", "Nazianzenus (Gregorius)"]);
        let attribution = d.attribute("Orations of Gregory Nazianzen", &known);
        assert_eq!(attribution.author, "Nazianzenus (Gregorius)");
    }

    #[test]
    fn test_rule_without_matching_author_defaults_to_first() {
        let d = AuthorDisambiguator::default();
        let known = authors(&["Hippolytus", "Cyprian"]);
        let attribution = d.attribute("On the Epistle of Barnabas", &known);
        assert_eq!(attribution.author, "Hippolytus");
        assert_eq!(attribution.basis, AttributionBasis::FirstKnownAuthor);
    }

    #[test]
    fn test_unknown_when_no_authors() {
        let d = AuthorDisambiguator::default();
        let attribution = d.attribute("The Epistle of Barnabas", &[]);
        assert_eq!(attribution.author, UNKNOWN_AUTHOR);
        assert_eq!(attribution.basis, AttributionBasis::Unknown);
    }

    #[test]
    fn test_substituted_rule_table() {
        let d = AuthorDisambiguator::new(vec![KeywordRule::new("paul", &["apostle"], &["Paul"])]);
        let known = authors(&["Luke", "Paul of Tarsus"]);
        assert_eq!(d.resolve("Acts of the Apostles", &known), "Paul of Tarsus");
    }

    proptest! {
        #[test]
        fn prop_named_author_is_never_unknown(
            name in "[A-Z][a-z]{3,12}",
            prefix in "[A-Za-z ]{0,20}",
            suffix in "[A-Za-z ]{0,20}",
            others in prop::collection::vec("[A-Z][a-z]{0,2}", 0..4),
        ) {
            let d = AuthorDisambiguator::default();
            let mut known: Vec<String> = others;
            known.push(name.clone());
            let heading = format!("{}{}{}", prefix, name, suffix);

            let attribution = d.attribute(&heading, &known);
            prop_assert_ne!(attribution.author.as_str(), UNKNOWN_AUTHOR);
            prop_assert_eq!(attribution.author, name);
        }
    }
}
