use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::columns::DEFAULT_SDRF_VERSION;

/// Matches a legacy `#key=value` header comment. The key is a bare
/// identifier; the value runs to the end of the line.
static HEADER_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(\w+)=(.+)").expect("header comment pattern is valid")
});

/// Metadata extracted from the legacy `#key=value` comment lines of a
/// template TSV file.
///
/// `#version=` is single-valued with the last occurrence winning;
/// `#template=` accumulates in line order, duplicates retained, because a
/// file derived from several templates repeats the key once per template.
/// Any other key is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMetadata {
    /// SDRF specification version the file targets
    pub version: String,
    /// Source templates, in declaration order
    pub templates: Vec<String>,
}

impl Default for HeaderMetadata {
    fn default() -> Self {
        Self {
            version: DEFAULT_SDRF_VERSION.to_string(),
            templates: Vec::new(),
        }
    }
}

impl HeaderMetadata {
    /// Extract metadata from all header comment lines of a document.
    ///
    /// Pure function over the line sequence: every line starting with `#`
    /// is tried against the `#key=value` pattern, wherever it sits relative
    /// to the column header row. Comment lines that do not match the
    /// pattern are not an error.
    pub fn parse<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut metadata = Self::default();

        for line in lines {
            if !line.starts_with('#') {
                continue;
            }
            if let Some(captures) = HEADER_COMMENT.captures(line) {
                let value = &captures[2];
                match &captures[1] {
                    "version" => metadata.version = value.to_string(),
                    "template" => metadata.templates.push(value.to_string()),
                    _ => {}
                }
            }
        }

        metadata
    }
}
