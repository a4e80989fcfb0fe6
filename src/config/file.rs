//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-tree.yaml",
    ".sbom-tree.yml",
    "sbom-tree.yaml",
    "sbom-tree.yml",
];

/// Directory name under the user config directory.
const CONFIG_DIR_NAME: &str = "sbom-tree";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/sbom-tree/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|path| path.exists()) {
        return Some(path.to_path_buf());
    }

    search_paths().iter().find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in priority order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        if !paths.contains(&git_root) {
            paths.push(git_root);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home);
    }
    paths
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading or writing the file
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Refused to overwrite an existing file
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Write the commented example config to `path`, refusing to overwrite.
pub fn write_example_config(path: &Path) -> Result<(), ConfigFileError> {
    if path.exists() {
        return Err(ConfigFileError::AlreadyExists(path.to_path_buf()));
    }
    std::fs::write(path, generate_full_example_config())?;
    Ok(())
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so unset CLI
    /// flags leave file settings alone. A format equal to the default can't
    /// be told apart from an unset one; pass it to
    /// [`from_file_with_overrides`](Self::from_file_with_overrides) instead.
    pub fn merge(&mut self, other: &Self) {
        if other.render.format != ReportFormat::default() {
            self.render.format = other.render.format;
        }
        if !other.render.roots.is_empty() {
            self.render.roots.clone_from(&other.render.roots);
        }
        if other.render.show_ids {
            self.render.show_ids = true;
        }
        if other.render.max_depth.is_some() {
            self.render.max_depth = other.render.max_depth;
        }
        if other.render.include_dupes {
            self.render.include_dupes = true;
        }

        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
    }

    /// Load from file and merge with CLI overrides.
    ///
    /// `format` is the explicitly requested output format, if any. It wins
    /// over both the file and `cli_overrides`, including when it names the
    /// default format.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
        format: Option<ReportFormat>,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        if let Some(format) = format {
            config.render.format = format;
        }
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# sbom-tree configuration file
# =============================
#
# Place it at:
#   - .sbom-tree.yaml in your project root
#   - ~/.config/sbom-tree/sbom-tree.yaml for global config
#
# An explicit --format always wins; other CLI arguments override file
# settings when they differ from the defaults.

render:
  # Format: ascii, dot, html, json
  format: ascii
  # Start from specific node ids (bom-ref / SPDXID)
  # roots:
  #   - pkg:cargo/my-app@1.0.0
  # ASCII: show internal ids next to labels
  show_ids: false
  # ASCII: depth limit (root = 0)
  # max_depth: 3
  # ASCII: don't collapse repeated nodes
  include_dupes: false

# Output file (stdout when omitted; required for html)
# output:
#   file: deps.html
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
