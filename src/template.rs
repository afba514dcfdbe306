//! Template YAML descriptors and import from the flat repository layout.
//!
//! The old repository stored each template as a flat pair of files,
//! `{name}/{name}.yaml` and `{name}/{name}-template.sdrf.tsv`. Importing
//! moves the pair into the versioned layout,
//! `{target}/{name}/{version}/{name}.yaml` and `.../{name}.sdrf.tsv`,
//! with the version taken from the YAML descriptor.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::migrate::MigrateError;

/// The subset of a template YAML descriptor the migration needs.
///
/// Descriptors carry the full schema definition; only the version and the
/// optional parent template matter here, so everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDescriptor {
    /// Released template version, used as the version directory name
    #[serde(default = "default_descriptor_version")]
    pub version: String,

    /// Parent template this one extends, if any
    #[serde(default)]
    pub extends: Option<String>,
}

fn default_descriptor_version() -> String {
    "1.0.0".to_string()
}

impl TemplateDescriptor {
    /// Load a descriptor from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, MigrateError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Outcome of importing one template into the versioned layout.
#[derive(Debug, Clone, Serialize)]
pub struct ImportedTemplate {
    /// Template name
    pub name: String,
    /// Version directory the files landed in
    pub version: String,
    /// Parent template, if the descriptor declares one
    pub extends: Option<String>,
    /// Whether the template had a TSV file to copy
    pub has_tsv: bool,
}

/// Import a single template from the flat layout into the versioned layout.
///
/// Returns `Ok(None)` when the template has no YAML descriptor in the
/// source tree; that template is skipped, not failed. A missing TSV file
/// is tolerated since some templates ship only a descriptor.
pub fn import_template(
    source_root: &Path,
    target_root: &Path,
    name: &str,
) -> Result<Option<ImportedTemplate>, MigrateError> {
    let source_dir = source_root.join(name);
    let yaml_file = source_dir.join(format!("{}.yaml", name));
    let tsv_file = source_dir.join(format!("{}-template.sdrf.tsv", name));

    if !yaml_file.is_file() {
        warn!("{} not found, skipping {}", yaml_file.display(), name);
        return Ok(None);
    }

    let descriptor = TemplateDescriptor::from_yaml_file(&yaml_file)?;

    let version_dir = target_root.join(name).join(&descriptor.version);
    fs::create_dir_all(&version_dir)?;

    let target_yaml = version_dir.join(format!("{}.yaml", name));
    fs::copy(&yaml_file, &target_yaml)?;
    info!("copied {} -> {}", yaml_file.display(), target_yaml.display());

    let has_tsv = tsv_file.is_file();
    if has_tsv {
        let target_tsv = version_dir.join(format!("{}.sdrf.tsv", name));
        fs::copy(&tsv_file, &target_tsv)?;
        info!("copied {} -> {}", tsv_file.display(), target_tsv.display());
    } else {
        info!("no TSV template file for {}", name);
    }

    Ok(Some(ImportedTemplate {
        name: name.to_string(),
        version: descriptor.version,
        extends: descriptor.extends,
        has_tsv,
    }))
}
