//! Unified error types for sbom-tree.
//!
//! Each layer has its own error enum (`ParseError`, `ReportError`,
//! `ConfigError`); [`SbomTreeError`] folds them into the four classes a
//! user cares about (unreadable input, unsupported format, nothing to
//! render, bad configuration) and maps each to a process exit code.

use crate::config::{ConfigError, ConfigFileError};
use crate::parsers::ParseError;
use crate::pipeline::exit_codes;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-tree operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomTreeError {
    /// The document could not be read or decoded as JSON
    #[error("Failed to read SBOM JSON: {context}")]
    Input {
        context: String,
        #[source]
        source: ParseError,
    },

    /// The JSON matched neither supported schema
    #[error("Failed to parse SBOM: {context}")]
    Format {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Parsing succeeded but there is nothing to start a tree from
    #[error("No roots found to render")]
    NoRoots,

    /// Errors during rendering
    #[error("Rendering failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for sbom-tree operations
pub type Result<T> = std::result::Result<T, SbomTreeError>;

impl SbomTreeError {
    /// Classify a parse error as an input or a format failure
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        let context = context.into();
        if source.is_input_error() {
            Self::Input { context, source }
        } else {
            Self::Format { context, source }
        }
    }

    /// Create a rendering error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } => exit_codes::INPUT_ERROR,
            Self::Format { .. } => exit_codes::FORMAT_ERROR,
            Self::NoRoots => exit_codes::NO_ROOTS,
            Self::Config(_)
            | Self::Report {
                source: ReportError::MissingOutput(_),
                ..
            } => exit_codes::CONFIG_ERROR,
            Self::Report { .. } | Self::Io { .. } => exit_codes::ERROR,
        }
    }
}

// ============================================================================
// Conversions from layer error types
// ============================================================================

impl From<ParseError> for SbomTreeError {
    fn from(err: ParseError) -> Self {
        Self::parse(String::new(), err)
    }
}

impl From<ReportError> for SbomTreeError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<ConfigError> for SbomTreeError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ConfigFileError> for SbomTreeError {
    fn from(err: ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for SbomTreeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, so a failure deep in the parser
/// reads like `parsing sbom.json: reading file`.
///
/// # Example
///
/// ```
/// use sbom_tree::error::{ErrorContext, Result};
/// use sbom_tree::parsers::parse_sbom_str;
///
/// fn load(content: &str) -> Result<usize> {
///     let graph = parse_sbom_str(content).context("parsing inline SBOM")?;
///     Ok(graph.node_count())
/// }
///
/// assert!(load("{not json").is_err());
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomTreeError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SbomTreeError, new_ctx: &str) -> SbomTreeError {
    match err {
        SbomTreeError::Input {
            context: existing,
            source,
        } => SbomTreeError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomTreeError::Format {
            context: existing,
            source,
        } => SbomTreeError::Format {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomTreeError::Report {
            context: existing,
            source,
        } => SbomTreeError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomTreeError::Io {
            path,
            message,
            source,
        } => SbomTreeError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomTreeError::Config(msg) => SbomTreeError::Config(chain_context(new_ctx, &msg)),
        SbomTreeError::NoRoots => SbomTreeError::NoRoots,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
