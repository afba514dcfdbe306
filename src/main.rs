//! # sdrf-migrate
//!
//! Command-line migration utilities for an SDRF template collection.
//!
//! ## Usage
//!
//! ```bash
//! # Rewrite header comments into metadata columns, in place
//! sdrf-migrate update /data/sdrf-templates
//!
//! # Copy templates from the flat layout into the versioned layout
//! sdrf-migrate import /data/old-templates /data/sdrf-templates
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbosity());
    cli::dispatch(args)
}
