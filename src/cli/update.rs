//! The `update` command: header-to-column migration over a template tree.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use sdrf_migrate::batch::run_update;
use sdrf_migrate::discovery::find_template_tsv;

pub fn run(
    root: Option<PathBuf>,
    cli_templates: Vec<String>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (config, templates) = super::load_config(config_path.as_ref(), cli_templates)?;

    let root = root
        .or(config.update.root)
        .unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        anyhow::bail!("Template root does not exist: {}", root.display());
    }

    info!("Updating TSV templates to column-based metadata");
    info!("Root: {}", root.display());
    info!("Templates: {}", templates.len());

    let report = run_update(&templates, |name| find_template_tsv(&root, name));

    if json {
        println!(
            "{}",
            report.to_json().context("Failed to serialize report")?
        );
    } else {
        println!("{}", report);
    }

    if report.has_failures() {
        anyhow::bail!("{} template(s) failed to migrate", report.failure_count());
    }

    Ok(())
}
