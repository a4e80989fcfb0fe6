//! Configuration types for sbom-tree.

use crate::reports::{RenderOptions, ReportFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// It can be constructed from CLI arguments, config files, or both (with CLI
/// overriding file settings, see [`AppConfig::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How trees are selected and drawn
    pub render: RenderConfig,
    /// Where rendered output goes
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Options handed to the text renderer
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_ids: self.render.show_ids,
            max_depth: self.render.max_depth,
            include_dupes: self.render.include_dupes,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn format(mut self, format: ReportFormat) -> Self {
        self.config.render.format = format;
        self
    }

    /// Set the requested root ids.
    pub fn roots(mut self, roots: Vec<String>) -> Self {
        self.config.render.roots = roots;
        self
    }

    /// Show node ids next to labels.
    pub const fn show_ids(mut self, show_ids: bool) -> Self {
        self.config.render.show_ids = show_ids;
        self
    }

    /// Limit the rendered depth.
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.config.render.max_depth = max_depth;
        self
    }

    /// Expand repeated subtrees.
    pub const fn include_dupes(mut self, include_dupes: bool) -> Self {
        self.config.render.include_dupes = include_dupes;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Tree selection and rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format
    pub format: ReportFormat,
    /// Node ids (`bom-ref` / `SPDXID`) to start from; detected roots when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,
    /// ASCII: show internal ids next to labels
    pub show_ids: bool,
    /// ASCII: depth limit (root = 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// ASCII: don't collapse repeated nodes
    pub include_dupes: bool,
}

/// Output destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path (stdout when omitted; required for HTML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
