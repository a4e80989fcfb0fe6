//! Integration tests for sbom-tree
//!
//! These tests verify end-to-end behavior of normalization, root
//! selection, traversal and rendering on inline documents and fixtures.

use sbom_tree::{
    build_tree,
    parsers::{parse_sbom, parse_sbom_str, ParseError},
    reports::{create_renderer, RenderOptions, ReportFormat},
    select_roots, Graph,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

fn ascii(graph: &Graph, roots: &[String]) -> String {
    create_renderer(ReportFormat::Ascii, &RenderOptions::default())
        .render(graph, roots)
        .expect("ascii render")
}

// ============================================================================
// Normalization scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn untargeted_component_is_the_root() {
        let graph = parse_sbom_str(
            r#"{
                "components": [{"bom-ref": "a"}, {"bom-ref": "b"}],
                "dependencies": [{"ref": "a", "dependsOn": ["b"]}]
            }"#,
        )
        .expect("parse");

        assert_eq!(graph.roots.iter().collect::<Vec<_>>(), vec!["a"]);
        let roots = select_roots(&graph, &[]);
        let tree = build_tree(&graph, &roots).expect("tree");
        assert_eq!(tree.id, "a");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].id, "b");
    }

    #[test]
    fn declared_root_without_edges_adopts_top_level_sources() {
        let graph = parse_sbom_str(
            r#"{
                "metadata": {"component": {"bom-ref": "root", "name": "root"}},
                "components": [{"bom-ref": "a", "name": "a"}, {"bom-ref": "b", "name": "b"}],
                "dependencies": [{"ref": "a", "dependsOn": ["b"]}]
            }"#,
        )
        .expect("parse");

        assert_eq!(graph.roots.iter().collect::<Vec<_>>(), vec!["root"]);
        let roots = select_roots(&graph, &[]);
        assert_eq!(ascii(&graph, &roots), "root\n`-- a\n    `-- b\n\n");
    }

    #[test]
    fn undeclared_spdx_target_becomes_placeholder() {
        let graph = parse_sbom_str(
            r#"{
                "packages": [{"SPDXID": "P", "name": "P"}],
                "relationships": [{
                    "relationshipType": "DEPENDS_ON",
                    "spdxElementId": "P",
                    "relatedSpdxElement": "Q"
                }]
            }"#,
        )
        .expect("parse");

        assert!(graph.contains("Q"));
        assert_eq!(graph.label("Q"), "Q");
        assert_eq!(graph.children("P").collect::<Vec<_>>(), vec!["Q"]);
    }

    #[test]
    fn repeated_dependency_is_a_single_edge() {
        let graph = parse_sbom_str(
            r#"{
                "components": [{"bom-ref": "a", "name": "a"}, {"bom-ref": "b", "name": "b"}],
                "dependencies": [{"ref": "a", "dependsOn": ["b", "b"]}]
            }"#,
        )
        .expect("parse");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(ascii(&graph, &ids(&["a"])), "a\n`-- b\n\n");
    }

    #[test]
    fn cycle_stops_at_the_repeated_ancestor() {
        let graph = parse_sbom_str(
            r#"{
                "components": [{"bom-ref": "a", "name": "a"}, {"bom-ref": "b", "name": "b"}],
                "dependencies": [
                    {"ref": "a", "dependsOn": ["b"]},
                    {"ref": "b", "dependsOn": ["a"]}
                ]
            }"#,
        )
        .expect("parse");

        let roots = select_roots(&graph, &ids(&["a"]));
        assert_eq!(ascii(&graph, &roots), "a\n`-- b\n    `-- a  (cycle)\n\n");

        let tree = build_tree(&graph, &roots).expect("tree");
        let repeated = &tree.children[0].children[0];
        assert!(repeated.is_cycle());
        assert!(repeated.children.is_empty());
    }
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_cyclonedx_fixture() {
        let graph = parse_sbom(&fixture_path("cyclonedx/webapp.cdx.json")).expect("parse");

        // metadata.component + 5 components + 1 nested component
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(graph.label("ui"), "@acme/ui@0.3.0");
        assert_eq!(graph.label("react"), "react@18.2.0");
        assert_eq!(graph.document.name.as_deref(), Some("acme-webapp"));
        assert_eq!(graph.document.spec_version.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_parse_inline_dependencies() {
        let graph = parse_sbom(&fixture_path("cyclonedx/inline-deps.cdx.json")).expect("parse");

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(select_roots(&graph, &[]), vec!["tool"]);
    }

    #[test]
    fn test_parse_spdx_fixture() {
        let graph = parse_sbom(&fixture_path("spdx/project.spdx.json")).expect("parse");

        // documentDescribes wins over topological roots
        assert_eq!(select_roots(&graph, &[]), vec!["SPDXRef-app"]);
        assert_eq!(graph.label("SPDXRef-File-config"), "./config.yaml");
        // Reverse relationships point from the dependent to the dependency
        assert!(graph.children("SPDXRef-libfoo").any(|c| c == "SPDXRef-libbar"));
        assert!(graph.children("SPDXRef-app").any(|c| c == "SPDXRef-File-config"));
        // CONTAINS and DESCRIBES add no edges
        assert!(!graph.children("SPDXRef-app").any(|c| c == "SPDXRef-libbar"));
        assert!(!graph.has_children("SPDXRef-DOCUMENT"));
        assert!(graph.contains("SPDXRef-DOCUMENT"));
    }

    #[test]
    fn test_spdx_without_describes_uses_topology() {
        let graph = parse_sbom(&fixture_path("spdx/undescribed.spdx.json")).expect("parse");
        assert_eq!(select_roots(&graph, &[]), vec!["SPDXRef-P"]);
    }

    #[test]
    fn test_unrecognized_document() {
        let err = parse_sbom_str(r#"{"name": "not an sbom"}"#).expect_err("unknown format");
        assert!(matches!(err, ParseError::UnknownFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_sbom(&fixture_path("does-not-exist.json")).expect_err("missing");
        assert!(err.is_input_error());
    }
}

// ============================================================================
// Root Selection Tests
// ============================================================================

mod root_selection {
    use super::*;

    #[test]
    fn requested_roots_keep_their_order() {
        let graph = parse_sbom(&fixture_path("cyclonedx/webapp.cdx.json")).expect("parse");
        assert_eq!(
            select_roots(&graph, &ids(&["lodash", "missing", "express", "lodash"])),
            vec!["lodash", "express"]
        );
    }

    #[test]
    fn unknown_requested_roots_fall_back() {
        let graph = parse_sbom(&fixture_path("cyclonedx/webapp.cdx.json")).expect("parse");
        assert_eq!(select_roots(&graph, &ids(&["missing"])), vec!["app"]);
    }

    #[test]
    fn fully_cyclic_graph_has_no_roots() {
        let graph = parse_sbom(&fixture_path("cyclonedx/cycle.cdx.json")).expect("parse");
        assert!(select_roots(&graph, &[]).is_empty());
        assert_eq!(select_roots(&graph, &ids(&["b"])), vec!["b"]);
    }
}

// ============================================================================
// Renderer Agreement Tests
// ============================================================================

mod renderers {
    use super::*;

    #[test]
    fn every_format_renders_every_fixture() {
        for name in [
            "cyclonedx/webapp.cdx.json",
            "cyclonedx/inline-deps.cdx.json",
            "cyclonedx/no-edges.cdx.json",
            "spdx/project.spdx.json",
            "spdx/undescribed.spdx.json",
        ] {
            let graph = parse_sbom(&fixture_path(name)).expect("parse");
            let roots = select_roots(&graph, &[]);
            assert!(!roots.is_empty(), "{name} has roots");

            for format in [
                ReportFormat::Ascii,
                ReportFormat::Dot,
                ReportFormat::Html,
                ReportFormat::Json,
            ] {
                let output = create_renderer(format, &RenderOptions::default())
                    .render(&graph, &roots)
                    .expect("render");
                assert!(!output.is_empty(), "{name} as {format}");
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let content = std::fs::read_to_string(fixture_path("cyclonedx/webapp.cdx.json"))
            .expect("read fixture");
        let first = parse_sbom_str(&content).expect("parse");
        let second = parse_sbom_str(&content).expect("parse");
        let roots = select_roots(&first, &[]);

        for format in [ReportFormat::Ascii, ReportFormat::Dot, ReportFormat::Json] {
            let renderer = create_renderer(format, &RenderOptions::default());
            assert_eq!(
                renderer.render(&first, &roots).expect("render"),
                renderer.render(&second, &roots).expect("render")
            );
        }
    }

    #[test]
    fn json_tree_expands_shared_dependencies_everywhere() {
        let graph = parse_sbom(&fixture_path("cyclonedx/webapp.cdx.json")).expect("parse");
        let json = create_renderer(ReportFormat::Json, &RenderOptions::default())
            .render(&graph, &ids(&["app"]))
            .expect("render");

        assert_eq!(json.matches("\"debug@2.6.9\"").count(), 2);
        assert!(!json.contains("(seen)"));
    }
}
