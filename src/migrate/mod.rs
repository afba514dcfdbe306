//! Header-to-column migration for template TSV files.
//!
//! Legacy template files carried their metadata as `#key=value` comment
//! lines above the column header row:
//!
//! ```text
//! #version=1.0.0
//! #template=plants
//! source name	characteristics[organism]
//! sample1	Arabidopsis
//! ```
//!
//! Converted files carry the same metadata as `comment[sdrf ...]` columns
//! appended to the header row, with every comment line removed. Data rows
//! are preserved byte-for-byte; only the header gains columns.

mod document;
mod error;
mod headers;


pub use document::{build_columns, rewrite_file, TsvDocument};
pub use error::MigrateError;
pub use headers::HeaderMetadata;
