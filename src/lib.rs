//! # sdrf-template-migrate
//!
//! Migration utilities for versioned SDRF template collections.
//!
//! SDRF (Sample and Data Relationship Format) templates are pairs of a
//! YAML schema descriptor and a skeleton tab-delimited data file,
//! published per template name and version. This crate covers two
//! one-time migrations of such a collection:
//!
//! - **Header-to-column migration** ([`migrate`], [`batch`]): legacy
//!   template TSV files carried metadata as `#key=value` comment lines
//!   above the column header. The migration rewrites each file so the
//!   metadata appears as `comment[sdrf ...]` columns on the header row
//!   and the comment lines are removed, leaving data rows untouched.
//!
//! - **Layout import** ([`template`]): copies template file pairs from
//!   the old flat repository layout into the versioned
//!   `{template}/{version}/` layout, with the version read from the
//!   YAML descriptor.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sdrf_migrate::batch::run_update;
//! use sdrf_migrate::discovery::find_template_tsv;
//! use std::path::Path;
//!
//! let root = Path::new("/data/sdrf-templates");
//! let templates = vec!["human".to_string(), "plants".to_string()];
//!
//! let report = run_update(&templates, |name| find_template_tsv(root, name));
//! println!("{}", report);
//! assert!(!report.has_failures());
//! ```
//!
//! Files are processed independently and rewritten atomically: a file is
//! either fully converted or left byte-for-byte unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod columns;
pub mod discovery;
pub mod migrate;
pub mod template;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{run_update, MigrationReport, TemplateOutcome, TemplateResult};
    pub use crate::columns::{
        DEFAULT_SDRF_VERSION, SDRF_ANNOTATION_TOOL_COLUMN, SDRF_TEMPLATE_COLUMN,
        SDRF_VERSION_COLUMN,
    };
    pub use crate::discovery::find_template_tsv;
    pub use crate::migrate::{
        build_columns, rewrite_file, HeaderMetadata, MigrateError, TsvDocument,
    };
    pub use crate::template::{import_template, ImportedTemplate, TemplateDescriptor};
}
