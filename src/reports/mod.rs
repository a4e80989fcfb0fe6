//! Renderers for dependency trees.
//!
//! Every renderer consumes the same inputs, a [`Graph`] plus the ordered
//! root list chosen by [`select_roots`](crate::forest::select_roots), and
//! produces one output document:
//! - ASCII: indented text tree with cycle and duplicate markers
//! - DOT: Graphviz digraph of everything reachable from the roots
//! - HTML: self-contained interactive page with a collapsible tree
//! - JSON: the nested `{name, children}` tree backing the HTML page
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Component names and ids come straight from the SBOM and are escaped
//! before being embedded in DOT or HTML output.

mod ascii;
mod dot;
pub mod escape;
mod html;
mod json;
mod types;

pub use ascii::{roots_have_edges, AsciiRenderer, NO_EDGES_HINT};
pub use dot::DotRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use types::{RenderOptions, ReportFormat};

use crate::model::Graph;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("{0} output requires an output file")]
    MissingOutput(ReportFormat),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for tree renderers
pub trait TreeRenderer {
    /// Render the trees rooted at `roots`, in order
    fn render(&self, graph: &Graph, roots: &[String]) -> Result<String, ReportError>;

    /// Render and write to a writer
    fn write_to(
        &self,
        graph: &Graph,
        roots: &[String],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let output = self.render(graph, roots)?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Get the format this renderer produces
    fn format(&self) -> ReportFormat;
}

/// Create a renderer for the given format
#[must_use]
pub fn create_renderer(format: ReportFormat, options: &RenderOptions) -> Box<dyn TreeRenderer> {
    match format {
        ReportFormat::Ascii => Box::new(AsciiRenderer::new(*options)),
        ReportFormat::Dot => Box::new(DotRenderer::new()),
        ReportFormat::Html => Box::new(HtmlRenderer::new()),
        ReportFormat::Json => Box::new(JsonRenderer::new()),
    }
}
