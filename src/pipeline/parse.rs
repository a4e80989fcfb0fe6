//! SBOM parsing stage.

use crate::error::{ErrorContext, Result};
use crate::model::Graph;
use std::path::Path;

/// Parse an SBOM file into a graph, with the path as error context
pub fn parse_sbom_with_context(path: &Path, quiet: bool) -> Result<Graph> {
    if !quiet {
        tracing::info!("Parsing SBOM: {}", path.display());
    }

    let graph = crate::parsers::parse_sbom(path).with_context(|| path.display().to_string())?;

    if !quiet {
        tracing::info!(
            "Parsed {} SBOM{}: {} nodes, {} edges, {} candidate roots",
            graph.document.format,
            graph
                .document
                .spec_version
                .as_deref()
                .map(|v| format!(" {v}"))
                .unwrap_or_default(),
            graph.node_count(),
            graph.edge_count(),
            graph.roots.len()
        );
    }

    Ok(graph)
}
