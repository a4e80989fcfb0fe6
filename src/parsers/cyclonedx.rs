//! CycloneDX SBOM parser.
//!
//! Works on JSON documents of any CycloneDX version. Only the parts that
//! matter for the dependency graph are read: `components` (including nested
//! components), `metadata.component` and the `dependencies` section, with a
//! fallback to dependency lists embedded directly on components.

use super::fields::{array_field, first_str, objects, str_field, strings, Object};
use crate::model::{DocumentInfo, Graph, SbomFormat};
use crate::parsers::traits::{ParseError, SbomParser};
use serde_json::Value;

/// Identifier fields of a component, in precedence order
const ID_FIELDS: &[&str] = &["bom-ref", "bomRef", "purl", "name"];

/// Parser for CycloneDX SBOM format
#[derive(Debug, Default, Clone, Copy)]
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Create a new CycloneDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Node id of a component: first present of `bom-ref`, `bomRef`, `purl`, `name`
    #[must_use]
    pub(crate) fn component_id(component: &Object) -> Option<&str> {
        first_str(component, ID_FIELDS)
    }

    /// Display label of a component: `group/name@version`
    #[must_use]
    pub(crate) fn component_label(component: &Object) -> String {
        let group = str_field(component, "group");
        let name = str_field(component, "name")
            .or(group)
            .or_else(|| str_field(component, "type"))
            .unwrap_or("component");

        let mut label = match group {
            Some(group) if group != name => format!("{group}/{name}"),
            _ => name.to_string(),
        };
        if let Some(version) = str_field(component, "version") {
            label.push('@');
            label.push_str(version);
        }
        label
    }

    /// Declare every component (and nested component) as a node
    fn collect_components(&self, components: &[Value], graph: &mut Graph) {
        for component in components.iter().filter_map(Value::as_object) {
            if let Some(id) = Self::component_id(component) {
                graph.declare_node(id, Self::component_label(component));
            }
            self.collect_components(array_field(component, "components"), graph);
        }
    }

    /// Read the top-level `dependencies` section
    fn collect_dependencies(&self, bom: &Object, graph: &mut Graph) {
        for dep in objects(bom, "dependencies") {
            let Some(parent) = str_field(dep, "ref") else {
                continue;
            };
            graph.ensure_node(parent);
            for child in strings(dep, "dependsOn") {
                graph.add_edge(parent, child);
            }
        }
    }

    /// Fallback: dependency lists embedded on the components themselves.
    ///
    /// Entries may be plain ids or objects carrying a `ref`.
    fn collect_inline_dependencies(&self, components: &[Value], graph: &mut Graph) {
        for component in components.iter().filter_map(Value::as_object) {
            let Some(parent) = Self::component_id(component) else {
                continue;
            };
            for entry in array_field(component, "dependencies") {
                let child = match entry {
                    Value::String(id) if !id.is_empty() => Some(id.as_str()),
                    Value::Object(obj) => str_field(obj, "ref"),
                    _ => None,
                };
                if let Some(child) = child {
                    graph.add_edge(parent, child);
                }
            }
        }
    }

    /// Attach top-level dependency sources under a declared root that has no edges.
    ///
    /// A top-level source has outgoing edges but is not the target of any edge.
    fn attach_top_level(&self, root: &str, graph: &mut Graph) {
        if graph.has_children(root) {
            return;
        }
        let targets = graph.targets();
        let mut top_level: Vec<String> = graph
            .sources()
            .filter(|id| *id != root && !targets.contains(id))
            .map(str::to_string)
            .collect();
        top_level.sort();

        for child in &top_level {
            graph.add_edge(root, child);
        }
        if !top_level.is_empty() {
            tracing::debug!(
                "Attached {} top-level dependencies under declared root {}",
                top_level.len(),
                root
            );
        }
    }
}

impl SbomParser for CycloneDxParser {
    fn normalize(&self, doc: &Value) -> Result<Graph, ParseError> {
        let bom = doc.as_object().ok_or_else(|| {
            ParseError::UnknownFormat("CycloneDX document must be a JSON object".to_string())
        })?;

        let metadata_component = bom
            .get("metadata")
            .and_then(Value::as_object)
            .and_then(|meta| meta.get("component"))
            .and_then(Value::as_object);

        let mut document = DocumentInfo::new(SbomFormat::CycloneDx);
        document.spec_version = str_field(bom, "specVersion").map(str::to_string);
        document.name = metadata_component
            .and_then(|c| str_field(c, "name"))
            .map(str::to_string);
        let mut graph = Graph::new(document);

        let components = array_field(bom, "components");
        self.collect_components(components, &mut graph);

        let declared_root = metadata_component.and_then(|c| {
            let id = Self::component_id(c)?;
            graph.ensure_labeled(id, Self::component_label(c));
            Some(id)
        });

        self.collect_dependencies(bom, &mut graph);

        if !graph.has_edges() && !components.is_empty() {
            self.collect_inline_dependencies(components, &mut graph);
        }

        match declared_root {
            Some(root) => {
                graph.roots.insert(root.to_string());
                self.attach_top_level(root, &mut graph);
            }
            None => graph.roots = graph.topological_roots(),
        }

        tracing::debug!(
            "CycloneDX: {} nodes, {} edges, {} candidate roots",
            graph.node_count(),
            graph.edge_count(),
            graph.roots.len()
        );

        Ok(graph)
    }

    fn format_name(&self) -> &str {
        "CycloneDX"
    }

    fn detect(&self, doc: &Value) -> bool {
        doc.as_object().is_some_and(|obj| {
            obj.get("bomFormat").and_then(Value::as_str) == Some("CycloneDX")
                || obj.contains_key("components")
                || obj.contains_key("dependencies")
        })
    }
}
