//! Sequential batch driver for the header-to-column migration.
//!
//! Templates are processed one file at a time; a failure on one file never
//! aborts the batch. The driver takes the file locator as a closure so
//! tests can inject fixed paths instead of scanning a repository tree.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;

use crate::migrate::rewrite_file;

/// Per-template outcome of a migration batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum TemplateOutcome {
    /// File was rewritten with new content
    Updated,
    /// File was already in the converted form
    Unchanged,
    /// No TSV file was found for the template
    Skipped,
    /// Rewrite failed; the original file is untouched
    Failed(String),
}

/// One template's entry in a [`MigrationReport`].
#[derive(Debug, Clone, Serialize)]
pub struct TemplateResult {
    /// Template name
    pub template: String,
    /// What happened to the template's file
    pub outcome: TemplateOutcome,
}

/// Summary of a migration batch over a list of templates.
#[derive(Debug, Default, Serialize)]
pub struct MigrationReport {
    /// Per-template results, in processing order
    pub results: Vec<TemplateResult>,
}

impl MigrationReport {
    fn record(&mut self, template: &str, outcome: TemplateOutcome) {
        self.results.push(TemplateResult {
            template: template.to_string(),
            outcome,
        });
    }

    /// Number of files whose content actually changed.
    pub fn updated_count(&self) -> usize {
        self.count(|o| matches!(o, TemplateOutcome::Updated))
    }

    /// Number of templates with no TSV file to migrate.
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, TemplateOutcome::Skipped))
    }

    /// Number of templates whose rewrite failed.
    pub fn failure_count(&self) -> usize {
        self.count(|o| matches!(o, TemplateOutcome::Failed(_)))
    }

    /// Whether any template failed to migrate.
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Serialize the report to JSON for machine consumption.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn count(&self, predicate: impl Fn(&TemplateOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Template Migration Report")?;
        writeln!(f, "=========================")?;

        for result in &self.results {
            match &result.outcome {
                TemplateOutcome::Updated => writeln!(f, "[x] {}: updated", result.template)?,
                TemplateOutcome::Unchanged => {
                    writeln!(f, "[=] {}: already converted", result.template)?
                }
                TemplateOutcome::Skipped => {
                    writeln!(f, "[ ] {}: skipped, no TSV file", result.template)?
                }
                TemplateOutcome::Failed(msg) => {
                    writeln!(f, "[!] {}: FAILED - {}", result.template, msg)?
                }
            }
        }

        writeln!(f)?;
        write!(
            f,
            "Summary: {} updated, {} skipped, {} failed",
            self.updated_count(),
            self.skipped_count(),
            self.failure_count()
        )
    }
}

/// Run the header-to-column migration over a list of templates.
///
/// `locate` maps a template name to its resolved TSV path, or `None` when
/// the template has no file (counted as skipped). Files are processed
/// sequentially and independently; errors are recorded per template and
/// never abort the batch.
pub fn run_update<L>(templates: &[String], mut locate: L) -> MigrationReport
where
    L: FnMut(&str) -> io::Result<Option<PathBuf>>,
{
    let mut report = MigrationReport::default();

    for template in templates {
        let path = match locate(template) {
            Ok(Some(path)) => path,
            Ok(None) => {
                warn!("skipping {}: no TSV file found", template);
                report.record(template, TemplateOutcome::Skipped);
                continue;
            }
            Err(e) => {
                error!("failed to locate TSV for {}: {}", template, e);
                report.record(template, TemplateOutcome::Failed(e.to_string()));
                continue;
            }
        };

        report.record(template, migrate_one(template, &path));
    }

    info!(
        "migration finished: {} updated, {} skipped, {} failed",
        report.updated_count(),
        report.skipped_count(),
        report.failure_count()
    );

    report
}

fn migrate_one(template: &str, path: &Path) -> TemplateOutcome {
    info!("updating {}", path.display());
    match rewrite_file(path) {
        Ok(true) => TemplateOutcome::Updated,
        Ok(false) => TemplateOutcome::Unchanged,
        Err(e) => {
            error!("failed to update {}: {}", template, e);
            TemplateOutcome::Failed(e.to_string())
        }
    }
}
