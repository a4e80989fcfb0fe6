//! Node/edge graph reconstructed from an SBOM document.

use super::DocumentInfo;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalized dependency graph - the canonical intermediate representation.
///
/// Nodes map an opaque, format-specific id (`bom-ref`, `purl`, `SPDXID`, ...)
/// to a display label. Edges map a parent id to the set of ids it depends on.
/// Every id referenced by an edge is also a node, and every candidate root is
/// a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Document-level metadata
    pub document: DocumentInfo,
    /// Node labels indexed by node id
    pub nodes: IndexMap<String, String>,
    /// Children indexed by parent id
    pub edges: IndexMap<String, IndexSet<String>>,
    /// Candidate root ids
    pub roots: BTreeSet<String>,
}

impl Graph {
    /// Create a new empty graph
    #[must_use]
    pub fn new(document: DocumentInfo) -> Self {
        Self {
            document,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            roots: BTreeSet::new(),
        }
    }

    /// Declare a node, replacing the label of an existing node with the same id.
    pub fn declare_node(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.nodes.insert(id.into(), label.into());
    }

    /// Insert a node with the given label unless the id is already known.
    pub fn ensure_labeled(&mut self, id: &str, label: impl Into<String>) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_string(), label.into());
        }
    }

    /// Insert a placeholder node (labeled with its own id) unless already known.
    pub fn ensure_node(&mut self, id: &str) {
        self.ensure_labeled(id, id);
    }

    /// Add a `parent -> child` edge, creating placeholder nodes as needed.
    ///
    /// Returns `true` if the edge was not already present.
    pub fn add_edge(&mut self, parent: &str, child: &str) -> bool {
        self.ensure_node(parent);
        self.ensure_node(child);
        self.edges
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string())
    }

    /// Display label for a node id, falling back to the id itself
    #[must_use]
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes.get(id).map_or(id, String::as_str)
    }

    /// Whether a node with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Unordered children of a node (empty if it has none)
    pub fn children(&self, id: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|kids| kids.iter().map(String::as_str))
    }

    /// Whether a node has at least one outgoing edge
    #[must_use]
    pub fn has_children(&self, id: &str) -> bool {
        self.edges.get(id).is_some_and(|kids| !kids.is_empty())
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct `parent -> child` pairs
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }

    /// Whether the graph has any edge at all
    #[must_use]
    pub fn has_edges(&self) -> bool {
        self.edges.values().any(|kids| !kids.is_empty())
    }

    /// Union of all edge targets
    #[must_use]
    pub fn targets(&self) -> BTreeSet<&str> {
        self.edges
            .values()
            .flat_map(|kids| kids.iter().map(String::as_str))
            .collect()
    }

    /// Ids with at least one outgoing edge, in insertion order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.edges
            .iter()
            .filter(|(_, kids)| !kids.is_empty())
            .map(|(id, _)| id.as_str())
    }

    /// Node ids that no edge points at
    #[must_use]
    pub fn topological_roots(&self) -> BTreeSet<String> {
        let targets = self.targets();
        self.nodes
            .keys()
            .filter(|id| !targets.contains(id.as_str()))
            .cloned()
            .collect()
    }
}
