//! Canonical SDRF metadata column names.
//!
//! Converted templates carry their metadata inline as `comment[sdrf ...]`
//! columns instead of leading `#key=value` comment lines.

/// Column carrying the SDRF specification version a template targets
pub const SDRF_VERSION_COLUMN: &str = "comment[sdrf version]";

/// Column naming the template(s) a file was derived from
pub const SDRF_TEMPLATE_COLUMN: &str = "comment[sdrf template]";

/// Column reserved for the annotation tool that produced the file
pub const SDRF_ANNOTATION_TOOL_COLUMN: &str = "comment[sdrf annotation tool]";

/// Default SDRF version assumed when a legacy file carries no `#version=` line
pub const DEFAULT_SDRF_VERSION: &str = "v1.1.0";
