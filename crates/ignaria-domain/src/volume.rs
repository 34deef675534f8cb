//! Volume module - one book-length unit of the corpus

use crate::text_info::TextInfo;

/// A volume loaded for annotation: identity, known authors and raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// File-stem identifier (e.g. `ANF-01`)
    pub id: String,

    /// Volume title
    pub title: String,

    /// Known authors in the order the metadata lists them
    pub authors: Vec<String>,

    /// Full raw text
    pub text: String,
}

impl Volume {
    /// Assemble a volume from its metadata and text
    pub fn new(id: impl Into<String>, info: &TextInfo, text: String) -> Self {
        Self {
            id: id.into(),
            title: info.title.clone(),
            authors: info.known_authors(),
            text,
        }
    }
}

/// Split text into lines at `\r\n`, `\n` or a lone `\r`.
///
/// Terminators are not part of the yielded lines, and a final terminator
/// does not produce a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..end];
                rest = &rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}
