//! JSON tree renderer.

use super::{ReportError, ReportFormat, TreeRenderer};
use crate::forest::build_tree;
use crate::model::Graph;

/// Emits the nested `{name, children}` tree used by the HTML viewer.
pub struct JsonRenderer {
    /// Pretty print output
    pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer for JsonRenderer {
    fn render(&self, graph: &Graph, roots: &[String]) -> Result<String, ReportError> {
        let tree = build_tree(graph, roots);
        if let Some(tree) = &tree {
            tracing::debug!("JSON tree: {} nodes, depth {}", tree.size(), tree.depth());
        }
        let mut json = if self.pretty {
            serde_json::to_string_pretty(&tree)?
        } else {
            serde_json::to_string(&tree)?
        };
        json.push('\n');
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
