//! Plain-text tree renderer.

use super::{RenderOptions, ReportError, ReportFormat, TreeRenderer};
use crate::forest::{NodeMarker, TraversalOptions, TreeNode, TreeWalker};
use crate::model::Graph;
use std::fmt::Write;

/// Printed after an ASCII render when no root has a single outgoing edge.
pub const NO_EDGES_HINT: &str = "(Heads up: no dependency edges were found under the root. \
    For CycloneDX, ensure top-level 'dependencies' or per-component 'dependencies' are present.)";

/// Whether any of the roots has at least one child
#[must_use]
pub fn roots_have_edges(graph: &Graph, roots: &[String]) -> bool {
    roots.iter().any(|root| graph.has_children(root))
}

/// Indented text tree renderer.
///
/// ```text
/// app@1.0
/// |-- http@2.1
/// |   `-- tls@0.9
/// `-- log@0.4
/// ```
///
/// Shared subtrees are printed once per forest and referenced as
/// `(seen)` afterwards unless `include_dupes` is set; a node that is its
/// own ancestor is printed as a terminal `(cycle)` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer {
    options: RenderOptions,
}

impl AsciiRenderer {
    /// Create a new ASCII renderer
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn traversal(&self) -> TraversalOptions {
        TraversalOptions {
            max_depth: self.options.max_depth,
            collapse_seen: !self.options.include_dupes,
        }
    }

    fn node_text(&self, node: &TreeNode) -> String {
        let mut text = if self.options.show_ids && !node.id.is_empty() {
            format!("{} <{}>", node.label, node.id)
        } else {
            node.label.clone()
        };
        match node.marker {
            Some(NodeMarker::Cycle) => text.push_str("  (cycle)"),
            Some(NodeMarker::Seen) => text.push_str("  (seen)"),
            None => {}
        }
        text
    }

    /// Write one root block. Pending siblings live on an explicit stack
    /// together with the prefix drawn in front of them.
    fn write_tree(&self, out: &mut String, root: &TreeNode) -> Result<(), ReportError> {
        writeln!(out, "{}", self.node_text(root))?;

        let mut stack = vec![(root.children.iter(), String::new())];
        while let Some((siblings, prefix)) = stack.last_mut() {
            let Some(child) = siblings.next() else {
                stack.pop();
                continue;
            };
            let last = siblings.as_slice().is_empty();
            let connector = if last { "`-- " } else { "|-- " };
            writeln!(out, "{prefix}{connector}{}", self.node_text(child))?;

            if !child.children.is_empty() {
                let continuation = if last { "    " } else { "|   " };
                let nested = format!("{prefix}{continuation}");
                stack.push((child.children.iter(), nested));
            }
        }
        Ok(())
    }
}

impl TreeRenderer for AsciiRenderer {
    fn render(&self, graph: &Graph, roots: &[String]) -> Result<String, ReportError> {
        let trees = TreeWalker::new(graph, self.traversal()).walk(roots);

        let mut out = String::new();
        for tree in &trees {
            self.write_tree(&mut out, tree)?;
            writeln!(out)?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Ascii
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    fn render(graph: &Graph, ids: &[&str], options: RenderOptions) -> String {
        AsciiRenderer::new(options)
            .render(graph, &roots(ids))
            .expect("render succeeds")
    }

    /// app -> {http, log}, http -> tls, log -> tls
    fn app() -> Graph {
        let mut graph = Graph::default();
        graph.declare_node("app", "app@1.0");
        graph.declare_node("http", "http@2.1");
        graph.declare_node("log", "log@0.4");
        graph.declare_node("tls", "tls@0.9");
        graph.add_edge("app", "http");
        graph.add_edge("app", "log");
        graph.add_edge("http", "tls");
        graph.add_edge("log", "tls");
        graph
    }

    #[test]
    fn test_connectors_and_seen() {
        let output = render(&app(), &["app"], RenderOptions::default());
        assert_eq!(
            output,
            "app@1.0\n\
             |-- http@2.1\n\
             |   `-- tls@0.9\n\
             `-- log@0.4\n    \
             `-- tls@0.9  (seen)\n\n"
        );
    }

    #[test]
    fn test_include_dupes_expands_everything() {
        let options = RenderOptions {
            include_dupes: true,
            ..Default::default()
        };
        let output = render(&app(), &["app"], options);
        assert!(!output.contains("(seen)"));
        assert_eq!(output.matches("tls@0.9").count(), 2);
    }

    #[test]
    fn test_show_ids() {
        let options = RenderOptions {
            show_ids: true,
            ..Default::default()
        };
        let output = render(&app(), &["app"], options);
        assert!(output.starts_with("app@1.0 <app>\n|-- http@2.1 <http>\n"));
    }

    #[test]
    fn test_max_depth() {
        let options = RenderOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        let output = render(&app(), &["app"], options);
        assert_eq!(output, "app@1.0\n|-- http@2.1\n`-- log@0.4\n\n");
    }

    #[test]
    fn test_cycle_line() {
        let mut graph = Graph::default();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        let output = render(&graph, &["a"], RenderOptions::default());
        assert_eq!(output, "a\n`-- b\n    `-- a  (cycle)\n\n");
    }

    #[test]
    fn test_blocks_per_root() {
        let mut graph = Graph::default();
        graph.add_edge("x", "shared");
        graph.add_edge("y", "shared");
        let output = render(&graph, &["x", "y"], RenderOptions::default());
        assert_eq!(output, "x\n`-- shared\n\ny\n`-- shared  (seen)\n\n");
    }

    #[test]
    fn test_deterministic() {
        let graph = app();
        let first = render(&graph, &["app"], RenderOptions::default());
        let second = render(&graph, &["app"], RenderOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_chain_renders() {
        let mut graph = Graph::default();
        for index in 1..1_500 {
            graph.add_edge(&format!("n{}", index - 1), &format!("n{index}"));
        }

        let output = render(&graph, &["n0"], RenderOptions::default());
        assert_eq!(output.lines().count(), 1_501);
        assert!(output.ends_with("`-- n1499\n\n"));

        let options = RenderOptions {
            max_depth: Some(2),
            ..Default::default()
        };
        let output = render(&graph, &["n0"], options);
        assert_eq!(output, "n0\n`-- n1\n    `-- n2\n\n");
    }

    #[test]
    fn test_roots_have_edges() {
        let graph = app();
        assert!(roots_have_edges(&graph, &roots(&["app"])));
        assert!(!roots_have_edges(&graph, &roots(&["tls"])));
        assert!(!roots_have_edges(&graph, &[]));
    }
}
