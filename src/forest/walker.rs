//! Depth-first expansion of graph roots into trees.

use super::{sorted_children, NodeMarker, TreeNode};
use crate::model::Graph;
use std::collections::HashSet;

/// Options controlling how far and how often subtrees are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Nodes at this depth (roots are depth 0) are kept but not expanded
    pub max_depth: Option<usize>,
    /// Render repeated nodes as terminal `Seen` nodes after their first expansion
    pub collapse_seen: bool,
}

impl TraversalOptions {
    /// Expand every path fully, stopping only at cycles
    #[must_use]
    pub const fn full() -> Self {
        Self {
            max_depth: None,
            collapse_seen: false,
        }
    }

    /// Expand each node once per forest and mark later references as seen
    #[must_use]
    pub const fn collapsed() -> Self {
        Self {
            max_depth: None,
            collapse_seen: true,
        }
    }

    /// Set the depth limit
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Bookkeeping for a single walk over the forest.
struct WalkState<'g> {
    /// Ancestors of the node being expanded
    path: HashSet<&'g str>,
    /// Nodes expanded anywhere in the forest so far
    rendered: HashSet<&'g str>,
}

/// A node under construction and the children it has yet to visit.
struct Frame<'g> {
    node: TreeNode,
    pending: std::vec::IntoIter<&'g str>,
    depth: usize,
}

/// Cycle-safe, deterministic depth-first tree builder.
///
/// The walker holds no state between calls: every [`walk`](Self::walk)
/// starts from empty path and "already rendered" sets, so one walker can
/// be reused and shared freely.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'g> {
    graph: &'g Graph,
    options: TraversalOptions,
}

impl<'g> TreeWalker<'g> {
    /// Create a walker over a graph
    #[must_use]
    pub const fn new(graph: &'g Graph, options: TraversalOptions) -> Self {
        Self { graph, options }
    }

    /// Expand each root, in order, into a tree
    #[must_use]
    pub fn walk(&self, roots: &[String]) -> Vec<TreeNode> {
        let mut state = WalkState {
            path: HashSet::new(),
            rendered: HashSet::new(),
        };

        roots
            .iter()
            .map(|root| match self.graph.nodes.get_key_value(root.as_str()) {
                Some((id, _)) => {
                    state.rendered.insert(id.as_str());
                    self.expand(id, &mut state)
                }
                None => TreeNode::leaf(root.as_str(), root.as_str()),
            })
            .collect()
    }

    /// Start expanding `id`, entering it into the ancestor path unless the
    /// depth limit keeps it closed.
    fn open(&self, id: &'g str, depth: usize, state: &mut WalkState<'g>) -> Frame<'g> {
        let node = TreeNode::leaf(id, self.graph.label(id));
        let pending = if self.options.max_depth.is_some_and(|max| depth >= max) {
            Vec::new()
        } else {
            state.path.insert(id);
            sorted_children(self.graph, id)
        };
        Frame {
            node,
            pending: pending.into_iter(),
            depth,
        }
    }

    /// Expand one root. The descent uses an explicit stack, so chain length
    /// is bounded by memory rather than by the thread's stack.
    fn expand(&self, root: &'g str, state: &mut WalkState<'g>) -> TreeNode {
        let mut stack = vec![self.open(root, 0, state)];
        let mut finished = None;

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.next() {
                let label = self.graph.label(child);
                if state.path.contains(child) {
                    frame
                        .node
                        .children
                        .push(TreeNode::marked(child, label, NodeMarker::Cycle));
                } else if self.options.collapse_seen && !state.rendered.insert(child) {
                    frame
                        .node
                        .children
                        .push(TreeNode::marked(child, label, NodeMarker::Seen));
                } else {
                    let depth = frame.depth + 1;
                    let next = self.open(child, depth, state);
                    stack.push(next);
                }
                continue;
            }

            if let Some(done) = stack.pop() {
                state.path.remove(done.node.id.as_str());
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(done.node),
                    None => finished = Some(done.node),
                }
            }
        }

        finished.unwrap_or_else(|| TreeNode::leaf(root, self.graph.label(root)))
    }
}

/// Build the nested tree used by the HTML and JSON renderers.
///
/// Every path is expanded fully (only cycles stop recursion). A single root
/// is returned as-is; several roots are wrapped under a synthetic
/// [`ROOTS_LABEL`](super::ROOTS_LABEL) node. Returns `None` for no roots.
#[must_use]
pub fn build_tree(graph: &Graph, roots: &[String]) -> Option<TreeNode> {
    let mut trees = TreeWalker::new(graph, TraversalOptions::full()).walk(roots);
    match trees.len() {
        0 => None,
        1 => trees.pop(),
        _ => Some(TreeNode::group(trees)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::ROOTS_LABEL;

    fn roots(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    fn names(node: &TreeNode) -> Vec<String> {
        node.children.iter().map(TreeNode::display_name).collect()
    }

    /// a -> {b, c}, b -> d, c -> d
    fn diamond() -> Graph {
        let mut graph = Graph::default();
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph.add_edge("b", "d");
        graph.add_edge("c", "d");
        graph
    }

    #[test]
    fn test_two_node_cycle_stops_at_ancestor() {
        let mut graph = Graph::default();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");

        let trees = TreeWalker::new(&graph, TraversalOptions::full()).walk(&roots(&["a"]));
        let a = &trees[0];
        let b = &a.children[0];
        assert_eq!(b.id, "b");
        assert_eq!(b.children.len(), 1);
        assert!(b.children[0].is_cycle());
        assert!(b.children[0].children.is_empty());
        assert_eq!(a.depth(), 2);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::default();
        graph.add_edge("a", "a");

        let trees = TreeWalker::new(&graph, TraversalOptions::collapsed()).walk(&roots(&["a"]));
        assert_eq!(trees[0].children.len(), 1);
        assert_eq!(trees[0].children[0].marker, Some(NodeMarker::Cycle));
    }

    #[test]
    fn test_full_expansion_repeats_shared_subtrees() {
        let graph = diamond();
        let trees = TreeWalker::new(&graph, TraversalOptions::full()).walk(&roots(&["a"]));
        assert_eq!(trees[0].size(), 5);
        assert_eq!(names(&trees[0].children[0]), vec!["d"]);
        assert_eq!(names(&trees[0].children[1]), vec!["d"]);
    }

    #[test]
    fn test_collapsed_expansion_marks_seen() {
        let graph = diamond();
        let trees = TreeWalker::new(&graph, TraversalOptions::collapsed()).walk(&roots(&["a"]));
        assert_eq!(names(&trees[0].children[0]), vec!["d"]);
        assert_eq!(names(&trees[0].children[1]), vec!["d  (seen)"]);
    }

    #[test]
    fn test_seen_state_spans_roots() {
        let mut graph = Graph::default();
        graph.add_edge("a", "shared");
        graph.add_edge("b", "shared");

        let trees =
            TreeWalker::new(&graph, TraversalOptions::collapsed()).walk(&roots(&["a", "b"]));
        assert_eq!(trees[0].children[0].marker, None);
        assert_eq!(trees[1].children[0].marker, Some(NodeMarker::Seen));
    }

    #[test]
    fn test_walks_are_independent() {
        let graph = diamond();
        let walker = TreeWalker::new(&graph, TraversalOptions::collapsed());
        let first = walker.walk(&roots(&["a"]));
        let second = walker.walk(&roots(&["a"]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_max_depth_truncates() {
        let graph = diamond();
        let options = TraversalOptions::full().with_max_depth(Some(1));
        let trees = TreeWalker::new(&graph, options).walk(&roots(&["a"]));
        assert_eq!(trees[0].children.len(), 2);
        assert!(trees[0].children.iter().all(|c| c.children.is_empty()));

        let options = TraversalOptions::full().with_max_depth(Some(0));
        let trees = TreeWalker::new(&graph, options).walk(&roots(&["a"]));
        assert!(trees[0].children.is_empty());
    }

    #[test]
    fn test_children_sorted_by_label() {
        let mut graph = Graph::default();
        graph.declare_node("p", "parent");
        graph.declare_node("1", "zeta");
        graph.declare_node("2", "Alpha");
        graph.declare_node("3", "beta");
        for child in ["1", "2", "3"] {
            graph.add_edge("p", child);
        }

        let trees = TreeWalker::new(&graph, TraversalOptions::full()).walk(&roots(&["p"]));
        assert_eq!(names(&trees[0]), vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_unknown_root_is_leaf() {
        let graph = Graph::default();
        let trees = TreeWalker::new(&graph, TraversalOptions::full()).walk(&roots(&["ghost"]));
        assert_eq!(trees, vec![TreeNode::leaf("ghost", "ghost")]);
    }

    #[test]
    fn test_long_chain_does_not_exhaust_stack() {
        let mut graph = Graph::default();
        for index in 1..100_000 {
            graph.add_edge(&format!("n{}", index - 1), &format!("n{index}"));
        }

        let trees = TreeWalker::new(&graph, TraversalOptions::collapsed()).walk(&roots(&["n0"]));
        assert_eq!(trees[0].depth(), 99_999);
        assert_eq!(trees[0].size(), 100_000);
    }

    #[test]
    fn test_sibling_branches_do_not_share_ancestors() {
        // a -> {b, c}, b -> c: c under b is not a cycle, and c under a is seen
        let mut graph = Graph::default();
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph.add_edge("b", "c");

        let trees = TreeWalker::new(&graph, TraversalOptions::full()).walk(&roots(&["a"]));
        assert_eq!(names(&trees[0]), vec!["b", "c"]);
        assert_eq!(names(&trees[0].children[0]), vec!["c"]);

        let trees = TreeWalker::new(&graph, TraversalOptions::collapsed()).walk(&roots(&["a"]));
        assert_eq!(names(&trees[0]), vec!["b", "c  (seen)"]);
    }

    #[test]
    fn test_build_tree_single_and_multiple_roots() {
        let graph = diamond();
        assert!(build_tree(&graph, &[]).is_none());

        let single = build_tree(&graph, &roots(&["a"])).expect("tree");
        assert_eq!(single.label, "a");

        let multi = build_tree(&graph, &roots(&["b", "c"])).expect("tree");
        assert_eq!(multi.label, ROOTS_LABEL);
        assert_eq!(names(&multi), vec!["b", "c"]);
        assert_eq!(names(&multi.children[1]), vec!["d"]);
    }
}
