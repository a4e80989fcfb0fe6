//! Graphviz DOT renderer.

use super::escape::escape_dot;
use super::{ReportError, ReportFormat, TreeRenderer};
use crate::forest::reachable;
use crate::model::Graph;
use std::fmt::Write;

/// Renders everything reachable from the roots as a `digraph`.
///
/// Each reachable node is declared once and each edge between reachable
/// nodes appears once, both sorted by id, so shared dependencies and cycles
/// need no special handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl DotRenderer {
    /// Create a new DOT renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TreeRenderer for DotRenderer {
    fn render(&self, graph: &Graph, roots: &[String]) -> Result<String, ReportError> {
        let nodes = reachable(graph, roots);

        let mut dot = String::new();
        writeln!(dot, "digraph SBOM {{")?;
        writeln!(dot, "  rankdir=LR;")?;
        writeln!(dot, "  node [shape=box, fontsize=10];")?;

        for id in &nodes {
            writeln!(
                dot,
                "  \"{}\" [label=\"{}\"];",
                escape_dot(id),
                escape_dot(graph.label(id))
            )?;
        }

        for source in &nodes {
            let mut children: Vec<&str> = graph
                .children(source)
                .filter(|child| nodes.contains(child))
                .collect();
            children.sort_unstable();
            for target in children {
                writeln!(
                    dot,
                    "  \"{}\" -> \"{}\";",
                    escape_dot(source),
                    escape_dot(target)
                )?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Dot
    }
}
