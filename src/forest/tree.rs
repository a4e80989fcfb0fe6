//! Rendered tree nodes produced by the traversal engine.

use serde::{Serialize, Serializer};

/// Label of the synthetic node wrapping several roots in a single tree.
pub const ROOTS_LABEL: &str = "SBOM Roots";

/// Why a node was rendered without expanding its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMarker {
    /// The node is one of its own ancestors on the current path
    Cycle,
    /// The node was already rendered elsewhere in the forest
    Seen,
}

impl NodeMarker {
    /// Suffix appended to a node's name in the nested-tree form
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Cycle => " \u{21ba}",
            Self::Seen => "  (seen)",
        }
    }
}

/// A node of a rendered dependency tree.
///
/// This is a projection of the graph from one root; it owns copies of the
/// ids and labels so renderers never need the graph while printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Node id in the source graph (empty for synthetic nodes)
    pub id: String,
    /// Display label
    pub label: String,
    /// Set when the node was cut short by the cycle or duplicate policy
    pub marker: Option<NodeMarker>,
    /// Ordered children
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with no children
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            marker: None,
            children: Vec::new(),
        }
    }

    /// Create a terminal node carrying a marker
    pub fn marked(id: impl Into<String>, label: impl Into<String>, marker: NodeMarker) -> Self {
        let mut node = Self::leaf(id, label);
        node.marker = Some(marker);
        node
    }

    /// Synthetic node grouping several root trees
    #[must_use]
    pub fn group(children: Vec<TreeNode>) -> Self {
        let mut node = Self::leaf(String::new(), ROOTS_LABEL);
        node.children = children;
        node
    }

    /// Whether the traversal stopped at this node because of a cycle
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.marker == Some(NodeMarker::Cycle)
    }

    /// Label with the marker suffix, as shown in nested-tree output
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.marker {
            Some(marker) => format!("{}{}", self.label, marker.suffix()),
            None => self.label.clone(),
        }
    }

    /// Number of nodes in this subtree, itself included
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }

    /// Depth of the deepest node below this one (0 for a leaf)
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

/// Dismantles the subtree iteratively so long dependency chains cannot
/// exhaust the stack on drop.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Serializes as `{"name": ..., "children": [...]}`.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TreeNode", 2)?;
        state.serialize_field("name", &self.display_name())?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
