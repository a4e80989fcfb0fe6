//! Configuration module for sbom-tree.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use sbom_tree::config::{AppConfig, Validatable};
//! use sbom_tree::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .format(ReportFormat::Dot)
//!     .max_depth(Some(3))
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-tree.yaml` file in your project root or `~/.config/sbom-tree/`:
//!
//! ```yaml
//! render:
//!   format: ascii
//!   max_depth: 3
//! output:
//!   file: deps.txt
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, OutputConfig, RenderConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config,
    load_config_file, load_or_default, search_paths, write_example_config, ConfigFileError,
    CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sbom-tree.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
