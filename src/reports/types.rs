//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for rendered trees
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Indented plain-text tree
    #[default]
    Ascii,
    /// Graphviz DOT digraph
    Dot,
    /// Self-contained interactive HTML page
    Html,
    /// Nested `{name, children}` JSON tree
    Json,
}

impl ReportFormat {
    /// Whether this format can only be written to a file
    #[must_use]
    pub const fn requires_output_file(&self) -> bool {
        matches!(self, Self::Html)
    }

    /// Human-readable name used in confirmation messages
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Ascii => "ASCII tree",
            Self::Dot => "DOT",
            Self::Html => "interactive HTML",
            Self::Json => "JSON tree",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Dot => write!(f, "dot"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Options for the text renderer.
///
/// The DOT, HTML and JSON renderers ignore these: they always expand every
/// path fully and stop only at cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Append `<id>` after each label
    pub show_ids: bool,
    /// Depth limit, root = 0
    pub max_depth: Option<usize>,
    /// Expand repeated subtrees instead of printing `(seen)` references
    pub include_dupes: bool,
}
