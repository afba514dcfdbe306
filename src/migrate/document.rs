use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use super::{HeaderMetadata, MigrateError};
use crate::columns::{
    SDRF_ANNOTATION_TOOL_COLUMN, SDRF_TEMPLATE_COLUMN, SDRF_VERSION_COLUMN,
};

/// A template TSV file held fully in memory.
///
/// The whole file is read before any rewrite begins; the original line
/// sequence stays untouched so a failed rewrite leaves nothing behind.
#[derive(Debug, Clone)]
pub struct TsvDocument {
    lines: Vec<String>,
}

impl TsvDocument {
    /// Read a document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MigrateError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_str(&content))
    }

    /// Build a document from raw file content.
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    /// The document's lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Locate the column header row: the first line that is non-blank
    /// (whitespace-only lines count as blank) and does not start with `#`.
    ///
    /// Returns the zero-based line index and the untrimmed line, or `None`
    /// when the file holds only comments and blank lines.
    pub fn locate_header_row(&self) -> Option<(usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .find(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
            .map(|(idx, line)| (idx, line.as_str()))
    }

    /// Produce the converted file content: metadata columns appended to the
    /// header row, comment and blank lines dropped, data rows verbatim.
    ///
    /// Fails with [`MigrateError::NoHeaderRow`] when no column header row
    /// exists; `path` only labels the error.
    pub fn rewrite(&self, path: &Path) -> Result<String, MigrateError> {
        let (header_idx, header_line) =
            self.locate_header_row().ok_or_else(|| MigrateError::NoHeaderRow {
                path: path.to_path_buf(),
            })?;

        // Comment lines are scanned wherever they appear; only position
        // relative to the header row decides what counts as data.
        let metadata = HeaderMetadata::parse(self.lines());

        let columns: Vec<&str> = header_line.split('\t').collect();
        let new_columns = build_columns(&columns, &metadata);

        let mut output = new_columns.join("\t");
        output.push('\n');

        for line in &self.lines[header_idx + 1..] {
            if line.trim().is_empty() {
                continue;
            }
            output.push_str(line);
            output.push('\n');
        }

        Ok(output)
    }
}

/// Append whichever of the three metadata columns the header row is missing.
///
/// Presence is checked by substring containment against the canonical
/// column names, deliberately loose to match the established behavior of
/// converted templates: `comment[sdrf version range]` already satisfies the
/// version check. Appends happen in fixed order: version, one template
/// column per parsed template (or a single one when none were parsed),
/// then the annotation tool. Data rows are not padded for the new columns.
pub fn build_columns(existing: &[&str], metadata: &HeaderMetadata) -> Vec<String> {
    let has_version = existing.iter().any(|c| c.contains(SDRF_VERSION_COLUMN));
    let has_template = existing.iter().any(|c| c.contains(SDRF_TEMPLATE_COLUMN));
    let has_tool = existing
        .iter()
        .any(|c| c.contains(SDRF_ANNOTATION_TOOL_COLUMN));

    let mut columns: Vec<String> = existing.iter().map(|c| c.to_string()).collect();

    if !has_version {
        columns.push(SDRF_VERSION_COLUMN.to_string());
    }
    if !has_template {
        if metadata.templates.is_empty() {
            columns.push(SDRF_TEMPLATE_COLUMN.to_string());
        } else {
            for _ in &metadata.templates {
                columns.push(SDRF_TEMPLATE_COLUMN.to_string());
            }
        }
    }
    if !has_tool {
        columns.push(SDRF_ANNOTATION_TOOL_COLUMN.to_string());
    }

    columns
}

/// Rewrite a template TSV file in place, converting header comments into
/// metadata columns.
///
/// The file is read fully, converted in memory, written to a temporary
/// file in the same directory, and persisted over the original, so a
/// partially written file is never observable. Returns whether the file
/// content actually changed; on [`MigrateError::NoHeaderRow`] the original
/// bytes are left untouched.
pub fn rewrite_file<P: AsRef<Path>>(path: P) -> Result<bool, MigrateError> {
    let path = path.as_ref();
    let original = fs::read_to_string(path)?;
    let document = TsvDocument::from_str(&original);

    let output = document.rewrite(path)?;
    if output == original {
        debug!("{} already converted, nothing to do", path.display());
        return Ok(false);
    }

    let parent = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(output.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!("rewrote {}", path.display());
    Ok(true)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
