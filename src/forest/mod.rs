//! Forest builder and traversal engine.
//!
//! Turns a [`Graph`] into renderable trees:
//! - [`select_roots`] decides where trees start
//! - [`TreeWalker`] expands each root depth-first into [`TreeNode`]s,
//!   cutting cycles and optionally collapsing repeated subtrees
//! - [`build_tree`] produces the single nested tree used by the HTML and
//!   JSON renderers
//!
//! Children are always visited in the same order: ascending by label
//! (case-insensitive), then by id.

mod tree;
mod walker;

pub use tree::{NodeMarker, TreeNode, ROOTS_LABEL};
pub use walker::{build_tree, TraversalOptions, TreeWalker};

use crate::model::Graph;
use std::collections::{BTreeSet, VecDeque};

/// Sort node ids by lowercase label, tie-broken by id
#[must_use]
pub fn sort_ids<'a, I>(graph: &Graph, ids: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed: Vec<(String, &str)> = ids
        .into_iter()
        .map(|id| (graph.label(id).to_lowercase(), id))
        .collect();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Children of a node in traversal order
#[must_use]
pub fn sorted_children<'a>(graph: &'a Graph, id: &str) -> Vec<&'a str> {
    sort_ids(graph, graph.children(id))
}

/// Resolve the ordered list of roots to render.
///
/// Requested ids that exist in the graph win, in the order given (repeats
/// dropped). When none of them exist, or none were requested, the graph's
/// candidate roots are used, sorted by label.
#[must_use]
pub fn select_roots(graph: &Graph, requested: &[String]) -> Vec<String> {
    let mut explicit: Vec<String> = Vec::new();
    for id in requested {
        if graph.contains(id) && !explicit.contains(id) {
            explicit.push(id.clone());
        }
    }

    if !explicit.is_empty() {
        return explicit;
    }
    if !requested.is_empty() {
        tracing::warn!(
            "None of the requested roots exist in the SBOM ({}); using detected roots",
            requested.join(", ")
        );
    }

    sort_ids(graph, graph.roots.iter().map(String::as_str))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// All node ids reachable from the given roots, roots included
#[must_use]
pub fn reachable<'a>(graph: &'a Graph, roots: &'a [String]) -> BTreeSet<&'a str> {
    let mut visited = BTreeSet::new();
    let mut queue: VecDeque<&str> = roots.iter().map(String::as_str).collect();

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        queue.extend(graph.children(id).filter(|child| !visited.contains(child)));
    }
    visited
}
