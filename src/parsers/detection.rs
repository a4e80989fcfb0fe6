//! Centralized format detection for SBOM parsers.
//!
//! Detection is marker based and ordered: the first parser whose markers are
//! present wins, so a document carrying both `components` and `packages` is
//! treated as CycloneDX.

use super::traits::{ParseError, SbomParser};
use super::{CycloneDxParser, SpdxParser};
use crate::model::Graph;
use serde_json::Value;

/// Parser type identified during detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    CycloneDx,
    Spdx,
}

/// Centralized format detector for SBOM documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatDetector {
    cyclonedx: CycloneDxParser,
    spdx: SpdxParser,
}

impl FormatDetector {
    /// Create a new format detector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cyclonedx: CycloneDxParser::new(),
            spdx: SpdxParser::new(),
        }
    }

    /// Detect which parser should handle a decoded document.
    #[must_use]
    pub fn detect(&self, doc: &Value) -> Option<ParserKind> {
        if self.cyclonedx.detect(doc) {
            Some(ParserKind::CycloneDx)
        } else if self.spdx.detect(doc) {
            Some(ParserKind::Spdx)
        } else {
            None
        }
    }

    /// Parser that handles documents of the given kind.
    #[must_use]
    pub fn parser(&self, kind: ParserKind) -> &dyn SbomParser {
        match kind {
            ParserKind::CycloneDx => &self.cyclonedx,
            ParserKind::Spdx => &self.spdx,
        }
    }

    /// Detect the format and normalize the document into a graph.
    pub fn normalize(&self, doc: &Value) -> Result<Graph, ParseError> {
        let Some(kind) = self.detect(doc) else {
            return Err(ParseError::UnknownFormat(
                "expected CycloneDX JSON (bomFormat, components or dependencies) \
                 or SPDX JSON (packages or relationships)"
                    .to_string(),
            ));
        };
        let parser = self.parser(kind);
        tracing::debug!("Detected {} document", parser.format_name());
        parser.normalize(doc)
    }

    /// Decode JSON content and normalize it.
    pub fn parse_str(&self, content: &str) -> Result<Graph, ParseError> {
        let doc: Value = serde_json::from_str(content)?;
        self.normalize(&doc)
    }
}
