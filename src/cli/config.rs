//! TOML configuration file support.
//!
//! The template list and repository roots can be kept in a config file
//! instead of being passed as CLI flags:
//!
//! ```toml
//! # sdrf-migrate.toml
//! [templates]
//! names = ["base", "human", "plants"]
//!
//! [update]
//! root = "/data/sdrf-templates"
//!
//! [import]
//! source = "/data/proteomics-metadata-standard/sdrf-proteomics/templates"
//! target = "/data/sdrf-templates"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Built-in template list, matching the published template collection.
/// Used whenever neither the config file nor the CLI names templates.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "base",
    "human",
    "vertebrates",
    "invertebrates",
    "plants",
    "cell-lines",
    "single-cell",
    "ms-proteomics",
    "affinity-proteomics",
    "dda-acquisition",
    "dia-acquisition",
    "crosslinking",
    "immunopeptidomics",
    "metaproteomics",
    "olink",
    "somascan",
];

/// Root configuration structure for sdrf-migrate.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Template list settings.
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Settings for the update command.
    #[serde(default)]
    pub update: UpdateConfig,

    /// Settings for the import command.
    #[serde(default)]
    pub import: ImportConfig,
}

/// The set of template names to process.
#[derive(Debug, Default, Deserialize)]
pub struct TemplatesConfig {
    /// Template names, overriding the built-in list.
    pub names: Option<Vec<String>>,
}

/// Configuration for the update command.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateConfig {
    /// Root of the versioned template repository.
    pub root: Option<PathBuf>,
}

/// Configuration for the import command.
#[derive(Debug, Default, Deserialize)]
pub struct ImportConfig {
    /// Root of the flat source repository.
    pub source: Option<PathBuf>,

    /// Root of the versioned target repository.
    pub target: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// The effective template list: config names or the built-in default.
    pub fn template_names(&self) -> Vec<String> {
        match &self.templates.names {
            Some(names) => names.clone(),
            None => DEFAULT_TEMPLATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [templates]
            names = ["base", "human"]

            [update]
            root = "/data/sdrf-templates"

            [import]
            source = "/data/old"
            target = "/data/new"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.template_names(), vec!["base", "human"]);
        assert_eq!(
            config.update.root,
            Some(PathBuf::from("/data/sdrf-templates"))
        );
        assert_eq!(config.import.source, Some(PathBuf::from("/data/old")));
        assert_eq!(config.import.target, Some(PathBuf::from("/data/new")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.template_names().len(), DEFAULT_TEMPLATES.len());
        assert!(config.update.root.is_none());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [update]
            root = "templates"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.update.root, Some(PathBuf::from("templates")));
        assert!(config.templates.names.is_none());
    }
}
