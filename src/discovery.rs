//! Locating template TSV files in the versioned repository layout.
//!
//! The versioned layout stores each template as
//! `{root}/{template}/{version}/{template}.sdrf.tsv`, with one version
//! directory per released version. A template is expected to have a single
//! matching TSV file; the scan returns the first one found.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Find the TSV file for a template in the versioned layout.
///
/// Returns `Ok(None)` when the template directory does not exist or no
/// version directory holds a `{template}.sdrf.tsv` file; callers treat
/// that as a skip, not a failure.
pub fn find_template_tsv(root: &Path, template: &str) -> io::Result<Option<PathBuf>> {
    let template_dir = root.join(template);
    if !template_dir.is_dir() {
        debug!("no directory for template {}", template);
        return Ok(None);
    }

    let file_name = format!("{}.sdrf.tsv", template);
    for entry in std::fs::read_dir(&template_dir)? {
        let version_dir = entry?.path();
        if !version_dir.is_dir() {
            continue;
        }
        let candidate = version_dir.join(&file_name);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
