//! SBOM format parsers.
//!
//! This module provides parsers for CycloneDX and SPDX JSON documents,
//! converting them to the canonical [`Graph`] representation.
//!
//! ## Format Detection
//!
//! Detection looks for each format's distinguishing top-level fields, in
//! order, and the first match wins:
//! - CycloneDX: `bomFormat == "CycloneDX"`, or a `components` or
//!   `dependencies` field
//! - SPDX: a `packages` or `relationships` field
//!
//! ## Usage
//!
//! ```no_run
//! use sbom_tree::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let graph = parse_sbom(Path::new("sbom.json")).unwrap();
//! println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//! ```

mod cyclonedx;
mod detection;
mod fields;
mod spdx;
mod traits;

pub use cyclonedx::CycloneDxParser;
pub use detection::{FormatDetector, ParserKind};
pub use spdx::{EdgeDirection, SpdxParser};
pub use traits::{ParseError, SbomParser};

use crate::model::Graph;
use serde_json::Value;
use std::path::Path;

/// Maximum SBOM file size (512 MB).
const MAX_SBOM_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Detect the SBOM format of a decoded document without extracting it
#[must_use]
pub fn detect_format(doc: &Value) -> Option<ParserKind> {
    FormatDetector::new().detect(doc)
}

/// Normalize a decoded JSON document into a dependency graph
pub fn normalize(doc: &Value) -> Result<Graph, ParseError> {
    FormatDetector::new().normalize(doc)
}

/// Read an SBOM file, detect its format and normalize it
///
/// Returns an error if the file exceeds [`MAX_SBOM_FILE_SIZE`] to prevent OOM.
pub fn parse_sbom(path: &Path) -> Result<Graph, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SBOM_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "SBOM file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_SBOM_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sbom_str(&content)
}

/// Parse SBOM from string content
pub fn parse_sbom_str(content: &str) -> Result<Graph, ParseError> {
    FormatDetector::new().parse_str(content)
}
