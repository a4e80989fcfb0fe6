//! SPDX SBOM parser.
//!
//! Reads SPDX 2.x JSON documents. Packages (and files) become nodes, and the
//! dependency-flavoured relationship types become edges oriented from the
//! dependent element to its dependency.

use super::fields::{first_str, objects, str_field, str_field_ignore_case, Object};
use crate::model::{DocumentInfo, Graph, SbomFormat};
use crate::parsers::traits::{ParseError, SbomParser};
use serde_json::Value;

/// Relationship types asserting "source depends on target".
const FORWARD_RELATIONSHIPS: &[&str] = &["DEPENDS_ON", "PREREQUISITE"];

/// Relationship types asserting "source is a dependency of target".
const REVERSE_RELATIONSHIPS: &[&str] = &[
    "RUNTIME_DEPENDENCY_OF",
    "BUILD_DEPENDENCY_OF",
    "DEV_DEPENDENCY_OF",
    "TEST_DEPENDENCY_OF",
    "OPTIONAL_DEPENDENCY_OF",
    "STATIC_LINK",
    "DYNAMIC_LINK",
    "DATA_FILE_OF",
    "EXAMPLE_OF",
    "GENERATED_FROM",
    "PATCH_FOR",
    "PREREQUISITE_FOR",
    "AMENDS",
    "DEPENDENCY_MANIFEST_OF",
];

/// How a relationship maps onto a dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// `source -> target`
    Forward,
    /// `target -> source`
    Reverse,
}

impl EdgeDirection {
    /// Classify a `relationshipType` value.
    ///
    /// The type is compared upper-cased with hyphens read as underscores.
    /// Returns `None` for relationships that do not describe a dependency.
    #[must_use]
    pub fn from_relationship_type(relationship_type: &str) -> Option<Self> {
        let normalized = relationship_type.to_uppercase().replace('-', "_");
        if FORWARD_RELATIONSHIPS.contains(&normalized.as_str()) {
            Some(Self::Forward)
        } else if REVERSE_RELATIONSHIPS.contains(&normalized.as_str()) {
            Some(Self::Reverse)
        } else {
            None
        }
    }
}

/// Parser for SPDX SBOM format
#[derive(Debug, Default, Clone, Copy)]
pub struct SpdxParser;

impl SpdxParser {
    /// Create a new SPDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Display label of a package: `name@versionInfo`
    fn package_label(package: &Object) -> String {
        let name = str_field(package, "name").unwrap_or("package");
        match first_str(package, &["versionInfo", "version"]) {
            Some(version) => format!("{name}@{version}"),
            None => name.to_string(),
        }
    }

    fn collect_packages(&self, doc: &Object, graph: &mut Graph) {
        for file in objects(doc, "files") {
            if let (Some(id), Some(name)) = (
                str_field_ignore_case(file, "SPDXID"),
                str_field(file, "fileName"),
            ) {
                graph.declare_node(id, name);
            }
        }
        // Packages win over files sharing an id
        for package in objects(doc, "packages") {
            if let Some(id) = str_field_ignore_case(package, "SPDXID") {
                graph.declare_node(id, Self::package_label(package));
            }
        }
    }

    fn collect_relationships(&self, doc: &Object, graph: &mut Graph) {
        let mut skipped = 0usize;
        for rel in objects(doc, "relationships") {
            let source = first_str(rel, &["spdxElementId", "sourceElement"]);
            let target = first_str(rel, &["relatedSpdxElement", "targetElement"]);
            let (Some(source), Some(target)) = (source, target) else {
                skipped += 1;
                continue;
            };
            graph.ensure_node(source);
            graph.ensure_node(target);

            let direction = str_field(rel, "relationshipType")
                .and_then(EdgeDirection::from_relationship_type);
            match direction {
                Some(EdgeDirection::Forward) => {
                    graph.add_edge(source, target);
                }
                Some(EdgeDirection::Reverse) => {
                    graph.add_edge(target, source);
                }
                None => {}
            }
        }
        if skipped > 0 {
            tracing::debug!("SPDX: skipped {} relationships without both endpoints", skipped);
        }
    }

    /// Roots named by `documentDescribes` (a single id or a list) that exist as nodes
    fn described_roots(&self, doc: &Object, graph: &Graph) -> Vec<String> {
        let described: Vec<&str> = match doc.get("documentDescribes") {
            Some(Value::String(id)) => vec![id.as_str()],
            Some(Value::Array(ids)) => ids.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        described
            .into_iter()
            .filter(|id| graph.contains(id))
            .map(str::to_string)
            .collect()
    }
}

impl SbomParser for SpdxParser {
    fn normalize(&self, doc: &Value) -> Result<Graph, ParseError> {
        let spdx = doc.as_object().ok_or_else(|| {
            ParseError::UnknownFormat("SPDX document must be a JSON object".to_string())
        })?;

        let mut document = DocumentInfo::new(SbomFormat::Spdx);
        document.spec_version = str_field(spdx, "spdxVersion").map(str::to_string);
        document.name = str_field(spdx, "name").map(str::to_string);
        let mut graph = Graph::new(document);

        self.collect_packages(spdx, &mut graph);
        self.collect_relationships(spdx, &mut graph);

        let described = self.described_roots(spdx, &graph);
        graph.roots = if described.is_empty() {
            graph.topological_roots()
        } else {
            described.into_iter().collect()
        };

        tracing::debug!(
            "SPDX: {} nodes, {} edges, {} candidate roots",
            graph.node_count(),
            graph.edge_count(),
            graph.roots.len()
        );

        Ok(graph)
    }

    fn format_name(&self) -> &str {
        "SPDX"
    }

    fn detect(&self, doc: &Value) -> bool {
        doc.as_object().is_some_and(|obj| {
            obj.contains_key("packages") || obj.contains_key("relationships")
        })
    }
}
