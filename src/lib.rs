//! **Render the dependency trees recorded in Software Bills of Materials.**
//!
//! `sbom-tree` reads a **CycloneDX** or **SPDX** JSON document, normalizes it into a
//! directed dependency [`Graph`], picks the nodes to start from, and draws the
//! graph as an ASCII tree, a Graphviz DOT graph, an interactive HTML page, or a
//! JSON tree.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: Format detection and normalization. Both formats land in the
//!   same [`Graph`]: one node per component, package or file, and one edge per
//!   "parent depends on child" relation.
//! - **[`model`]**: The [`Graph`] itself and the [`DocumentInfo`] describing where it
//!   came from.
//! - **[`forest`]**: Root selection and the cycle-safe, deterministic traversal
//!   ([`TreeWalker`]) every renderer draws from.
//! - **[`reports`]**: The four renderers behind the [`TreeRenderer`] trait.
//! - **[`pipeline`]**: Parse, root selection, render and output stages, plus the
//!   process [`exit_codes`](pipeline::exit_codes).
//! - **[`config`]**: YAML configuration files merged with command-line flags.
//!
//! ## Getting Started
//!
//! ```
//! use sbom_tree::{build_tree, parse_sbom_str, select_roots};
//!
//! let graph = parse_sbom_str(r#"{
//!     "bomFormat": "CycloneDX",
//!     "metadata": {"component": {"bom-ref": "app", "name": "app"}},
//!     "components": [{"bom-ref": "lib", "name": "lib", "version": "1.0"}],
//!     "dependencies": [{"ref": "app", "dependsOn": ["lib"]}]
//! }"#)?;
//!
//! let roots = select_roots(&graph, &[]);
//! assert_eq!(roots, vec!["app"]);
//!
//! let tree = build_tree(&graph, &roots).expect("one root");
//! assert_eq!(tree.children[0].label, "lib@1.0");
//! # Ok::<(), sbom_tree::parsers::ParseError>(())
//! ```
//!
//! ### Rendering
//!
//! ```
//! use sbom_tree::reports::{create_renderer, RenderOptions, ReportFormat};
//! use sbom_tree::parse_sbom_str;
//!
//! let graph = parse_sbom_str(r#"{
//!     "packages": [
//!         {"SPDXID": "SPDXRef-a", "name": "a"},
//!         {"SPDXID": "SPDXRef-b", "name": "b"}
//!     ],
//!     "relationships": [{
//!         "spdxElementId": "SPDXRef-a",
//!         "relationshipType": "DEPENDS_ON",
//!         "relatedSpdxElement": "SPDXRef-b"
//!     }]
//! }"#)?;
//!
//! let renderer = create_renderer(ReportFormat::Ascii, &RenderOptions::default());
//! let text = renderer.render(&graph, &["SPDXRef-a".to_string()])?;
//! assert_eq!(text, "a\n`-- b\n\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `sbom-tree` binary wraps this library: `sbom-tree render bom.json -f dot`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod forest;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, OutputConfig, RenderConfig, Validatable};
pub use error::{ErrorContext, Result, SbomTreeError};
pub use forest::{build_tree, select_roots, NodeMarker, TraversalOptions, TreeNode, TreeWalker};
pub use model::{DocumentInfo, Graph, SbomFormat};
pub use parsers::{normalize, parse_sbom, parse_sbom_str, ParseError, SbomParser};
pub use reports::{create_renderer, RenderOptions, ReportFormat, TreeRenderer};
