use std::path::PathBuf;

/// Errors that can occur while migrating template files
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// I/O error reading or rewriting a template file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file holds no non-comment, non-blank line to serve as the column header
    #[error("no column header row found in {}", path.display())]
    NoHeaderRow {
        /// File that was being rewritten
        path: PathBuf,
    },

    /// The template's YAML descriptor could not be parsed
    #[error("invalid template descriptor: {0}")]
    Descriptor(#[from] serde_yaml::Error),
}
