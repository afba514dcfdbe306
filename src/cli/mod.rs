use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod import;
mod update;

pub use config::Config;

/// sdrf-migrate - SDRF Template Migration Utilities
#[derive(Parser)]
#[command(name = "sdrf-migrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert legacy header comments into metadata columns
    Update {
        /// Root of the versioned template repository
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// Templates to update (defaults to the built-in list)
        #[arg(short, long, value_name = "NAME")]
        template: Vec<String>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Emit the migration report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Import templates from the flat layout into the versioned layout
    Import {
        /// Root of the flat source repository
        #[arg(value_name = "SOURCE")]
        source: Option<PathBuf>,

        /// Root of the versioned target repository
        #[arg(value_name = "TARGET")]
        target: Option<PathBuf>,

        /// Templates to import (defaults to the built-in list)
        #[arg(short, long, value_name = "NAME")]
        template: Vec<String>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Update {
            root,
            template,
            config,
            json,
        } => update::run(root, template, config, json),
        Commands::Import {
            source,
            target,
            template,
            config,
        } => import::run(source, target, template, config),
    }
}

/// Resolve the effective configuration and template list for a command.
///
/// CLI template names take precedence over the config file, which takes
/// precedence over the built-in list.
fn load_config(path: Option<&PathBuf>, cli_templates: Vec<String>) -> Result<(Config, Vec<String>)> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let templates = if cli_templates.is_empty() {
        config.template_names()
    } else {
        cli_templates
    };

    Ok((config, templates))
}
