//! The `import` command: copy templates from the flat repository layout
//! into the versioned one.

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use sdrf_migrate::template::import_template;

pub fn run(
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    cli_templates: Vec<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, templates) = super::load_config(config_path.as_ref(), cli_templates)?;

    let source = source
        .or(config.import.source)
        .ok_or_else(|| anyhow::anyhow!("No source root given (argument or [import] source)"))?;
    let target = target
        .or(config.import.target)
        .ok_or_else(|| anyhow::anyhow!("No target root given (argument or [import] target)"))?;

    if !source.is_dir() {
        anyhow::bail!("Source root does not exist: {}", source.display());
    }

    info!("Importing templates into versioned layout");
    info!("Source: {}", source.display());
    info!("Target: {}", target.display());

    let mut imported = Vec::new();
    for name in &templates {
        info!("Importing: {}", name);
        if let Some(result) = import_template(&source, &target, name)? {
            imported.push(result);
        }
    }

    println!("Imported {} templates:", imported.len());
    for template in &imported {
        match &template.extends {
            Some(parent) => println!(
                "  - {} v{} (extends: {})",
                template.name, template.version, parent
            ),
            None => println!("  - {} v{}", template.name, template.version),
        }
    }

    Ok(())
}
