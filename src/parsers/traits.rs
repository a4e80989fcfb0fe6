//! Parser trait definitions and error types.
//!
//! This module defines the `SbomParser` trait for format-specific parsers.
//! Parsers work on an already-decoded [`serde_json::Value`]; decoding lives
//! in a default method so each format only has to describe detection and
//! extraction. File access is handled by [`parse_sbom`](super::parse_sbom).

use crate::model::Graph;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during SBOM parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("Unsupported SBOM format: {0}")]
    UnknownFormat(String),
}

impl ParseError {
    /// Whether the document itself could not be read or decoded
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::IoError(_) | Self::JsonError(_))
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Trait for SBOM format parsers
///
/// Implementors provide marker-based detection via `detect()` and extraction
/// via `normalize()`. Extraction is deliberately permissive: malformed
/// individual entries are skipped, never reported.
pub trait SbomParser {
    /// Parse SBOM from string content
    fn parse_str(&self, content: &str) -> Result<Graph, ParseError> {
        let doc: Value = serde_json::from_str(content)?;
        self.normalize(&doc)
    }

    /// Build the canonical graph from a decoded document
    fn normalize(&self, doc: &Value) -> Result<Graph, ParseError>;

    /// Get format name
    fn format_name(&self) -> &str;

    /// Check whether the document carries this format's distinguishing markers
    fn detect(&self, doc: &Value) -> bool;
}
