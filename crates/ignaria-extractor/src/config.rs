//! Configuration for the Extractor
//!
//! The heading pattern list and the author keyword rules are plain data so
//! they can be replaced from TOML or swapped out in tests.

use serde::{Deserialize, Serialize};

/// One heading shape, tried in table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingPattern {
    /// Short name reported on each candidate
    pub name: String,

    /// Regular expression; matched case-insensitively at line start
    pub regex: String,
}

impl HeadingPattern {
    /// Create a pattern entry
    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
        }
    }
}

/// A fallback author rule: predicate over the heading, resolver over the author list.
///
/// The predicate holds when every `all_of` keyword and at least one `any_of`
/// keyword occur in the lower-cased heading. The resolver picks the first
/// known author whose name contains one of `author_markers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Rule name, reported as the attribution basis
    pub name: String,

    /// Keywords that must all be present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<String>,

    /// Keywords of which one must be present
    pub any_of: Vec<String>,

    /// Case-sensitive fragments to look for in known author names
    pub author_markers: Vec<String>,
}

impl KeywordRule {
    /// Rule that fires on any of `keywords`
    pub fn new(name: impl Into<String>, keywords: &[&str], author_markers: &[&str]) -> Self {
        Self {
            name: name.into(),
            all_of: Vec::new(),
            any_of: to_strings(keywords),
            author_markers: to_strings(author_markers),
        }
    }

    /// Add keywords that must all be present as well
    pub fn requiring(mut self, keywords: &[&str]) -> Self {
        self.all_of = to_strings(keywords);
        self
    }

    /// Whether the rule's predicate holds for an already lower-cased heading
    pub fn matches(&self, heading_lower: &str) -> bool {
        self.all_of
            .iter()
            .all(|k| heading_lower.contains(k.to_lowercase().as_str()))
            && self
                .any_of
                .iter()
                .any(|k| heading_lower.contains(k.to_lowercase().as_str()))
    }

    /// First known author containing one of the rule's markers
    pub fn resolve<'a>(&self, known_authors: &'a [String]) -> Option<&'a str> {
        known_authors
            .iter()
            .find(|author| {
                self.author_markers
                    .iter()
                    .any(|marker| author.contains(marker.as_str()))
            })
            .map(String::as_str)
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Headings must be longer than this many characters
    pub min_heading_len: usize,

    /// Headings must be shorter than this many characters
    pub max_heading_len: usize,

    /// Stop scanning a text after this many lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scan_lines: Option<usize>,

    /// Copy temporal fields and notes from existing sections with the same marker
    pub carry_annotations: bool,

    /// Heading shapes in priority order
    pub patterns: Vec<HeadingPattern>,

    /// Author fallback rules in priority order
    pub keyword_rules: Vec<KeywordRule>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_heading_len == 0 {
            return Err("max_heading_len must be greater than 0".to_string());
        }
        if self.min_heading_len >= self.max_heading_len {
            return Err("min_heading_len must be less than max_heading_len".to_string());
        }
        if self.max_scan_lines == Some(0) {
            return Err("max_scan_lines must be greater than 0 when set".to_string());
        }
        if self.patterns.is_empty() {
            return Err("at least one heading pattern is required".to_string());
        }
        if let Some(p) = self.patterns.iter().find(|p| p.regex.trim().is_empty()) {
            return Err(format!("heading pattern '{}' has an empty regex", p.name));
        }
        if let Some(r) = self.keyword_rules.iter().find(|r| r.any_of.is_empty()) {
            return Err(format!("keyword rule '{}' has no keywords", r.name));
        }
        Ok(())
    }

    /// Preview preset: stops after 100,000 lines per volume
    pub fn preview() -> Self {
        Self {
            max_scan_lines: Some(100_000),
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_heading_len: 10,
            max_heading_len: 150,
            max_scan_lines: None,
            carry_annotations: true,
            patterns: default_patterns(),
            keyword_rules: default_keyword_rules(),
        }
    }
}

/// Heading shapes of embedded works; specific shapes come before generic ones
pub fn default_patterns() -> Vec<HeadingPattern> {
    vec![
        HeadingPattern::new(
            "numbered_work",
            r"^The (?:First|Second|Third|Fourth|Fifth) (?:Epistle|Apology|Book)",
        ),
        HeadingPattern::new("epistle_of", r"^The Epistle of \w+"),
        HeadingPattern::new("epistle", r"^The (?:Encyclical )?Epistle"),
        HeadingPattern::new("apology_of", r"^(?:The )?(?:First |Second )?Apolog(?:y|ia|ies) of \w+"),
        HeadingPattern::new("dialogue", r"^Dialogue (?:of|with|between) \w+"),
        HeadingPattern::new("fragments_of", r"^Fragments? of \w+"),
        HeadingPattern::new("martyrdom_of", r"^(?:The )?Martyrdom of \w+"),
        HeadingPattern::new("church_history", r"^(?:The )?(?:Church|Ecclesiastical) History"),
        HeadingPattern::new("history", r"^(?:The )?History"),
        HeadingPattern::new("book_numeral", r"^Book [IVXLC]+\."),
        HeadingPattern::new("letters_of", r"^(?:The )?Letters? of \w+"),
        HeadingPattern::new("catechetical_lectures", r"^(?:The )?Catechetical Lectures?"),
        HeadingPattern::new("orations_of", r"^(?:The )?Orations? of \w+"),
        HeadingPattern::new("homilies", r"^Homil(?:y|ies) (?:on|of)"),
        HeadingPattern::new("against", r"^Against (?:Heresies|the|Marcion)"),
        HeadingPattern::new("on_the", r"^On the \w+"),
        HeadingPattern::new("concerning_the", r"^Concerning the \w+"),
    ]
}

/// Keyword stems of historical figures whose headings often use another name form
pub fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("clement", &["clement"], &["Clement"]),
        KeywordRule::new("ignatius", &["ignatius"], &["Ignatius"]),
        KeywordRule::new("polycarp", &["polycarp"], &["Polycarp"]),
        KeywordRule::new("justin", &["justin"], &["Justin"]),
        KeywordRule::new("irenaeus", &["irenaeus", "irenæus"], &["Irenaeus", "Irenæus"]),
        KeywordRule::new("barnabas", &["barnabas"], &["Barnabas"]),
        KeywordRule::new("hermas", &["hermas"], &["Hermas"]),
        KeywordRule::new("tatian", &["tatian"], &["Tatian"]),
        KeywordRule::new("athenagoras", &["athenagoras"], &["Athenagoras"]),
        KeywordRule::new("theophilus", &["theophilus"], &["Theophilus"]),
        KeywordRule::new("cyprian", &["cyprian"], &["Cyprian"]),
        KeywordRule::new("origen", &["origen"], &["Origen"]),
        KeywordRule::new("tertullian", &["tertullian"], &["Tertullian"]),
        KeywordRule::new("hippolytus", &["hippolytus"], &["Hippolytus"]),
        KeywordRule::new("lactantius", &["lactantius"], &["Lactantius"]),
        KeywordRule::new("eusebius", &["eusebius"], &["Eusebius"]),
        KeywordRule::new("socrates", &["socrates"], &["Socrates"]),
        KeywordRule::new("sozomen", &["sozomen"], &["Sozomen"]),
        KeywordRule::new("theodoret", &["theodoret"], &["Theodoret"]),
        KeywordRule::new("jerome", &["jerome"], &["Jerome"]),
        KeywordRule::new("cyril", &["cyril"], &["Cyril"]),
        KeywordRule::new("gregory_nazianzen", &["nazianzen", "nazianzus"], &["Nazian"])
            .requiring(&["gregory"]),
        KeywordRule::new("gregory", &["gregory"], &["Gregory"]),
        KeywordRule::new("hilary", &["hilary"], &["Hilary"]),
        KeywordRule::new("john_of_damascus", &["john of damascus", "damascene"], &["Damascus"]),
        KeywordRule::new("cassian", &["cassian"], &["Cassian"]),
        KeywordRule::new("sulpitius_severus", &["sulpitius", "severus"], &["Sulp", "Severus"]),
        KeywordRule::new("vincent", &["vincent"], &["Vincent"]),
        KeywordRule::new("leo", &["leo"], &["Leo"]),
        KeywordRule::new("ephrem", &["ephrem", "ephraim"], &["Ephrem", "Ephraim"]),
        KeywordRule::new("aphrahat", &["aphrahat"], &["Aphrahat"]),
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
