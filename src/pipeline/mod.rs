//! Pipeline orchestration for SBOM rendering.
//!
//! This module provides the shared parse → select roots → render → write
//! workflow used by the CLI command handlers.

mod output;
mod parse;
mod render_stage;

pub use output::{write_output, OutputTarget};
pub use parse::parse_sbom_with_context;
pub use render_stage::{render_output, resolve_roots};

/// Process exit codes
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Any failure not covered below
    pub const ERROR: i32 = 1;
    /// The SBOM could not be read or is not valid JSON
    pub const INPUT_ERROR: i32 = 2;
    /// The JSON is neither CycloneDX nor SPDX
    pub const FORMAT_ERROR: i32 = 3;
    /// No roots could be determined
    pub const NO_ROOTS: i32 = 4;
    /// Invalid configuration, e.g. HTML without an output file
    pub const CONFIG_ERROR: i32 = 5;
}
