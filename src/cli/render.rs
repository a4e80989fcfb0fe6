//! Render command handler.
//!
//! Implements the `render` subcommand: parse one SBOM and draw its
//! dependency trees.

use crate::config::{AppConfig, Validatable};
use crate::error::SbomTreeError;
use crate::pipeline::{exit_codes, parse_sbom_with_context, render_output, resolve_roots};
use anyhow::Result;
use std::path::Path;

/// Run the render command
pub fn run_render(sbom_path: &Path, config: &AppConfig, quiet: bool) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(SbomTreeError::config(messages.join("; ")).into());
    }

    let graph = parse_sbom_with_context(sbom_path, quiet)?;
    let roots = resolve_roots(&graph, &config.render.roots)?;
    render_output(&graph, &roots, config, quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    const BOM: &str = r#"{
        "bomFormat": "CycloneDX",
        "components": [{"bom-ref": "a", "name": "alpha"}, {"bom-ref": "b", "name": "beta"}],
        "dependencies": [{"ref": "a", "dependsOn": ["b"]}]
    }"#;

    fn exit_code_of(err: &anyhow::Error) -> Option<i32> {
        err.downcast_ref::<SbomTreeError>().map(SbomTreeError::exit_code)
    }

    #[test]
    fn test_render_html_to_file() {
        let tmp = TempDir::new().expect("tempdir");
        let sbom = tmp.path().join("bom.json");
        std::fs::write(&sbom, BOM).expect("write");
        let out = tmp.path().join("tree.html");

        let config = AppConfig::builder()
            .format(ReportFormat::Html)
            .output_file(Some(out.clone()))
            .build();
        assert_eq!(run_render(&sbom, &config, true).expect("render"), 0);

        let html = std::fs::read_to_string(out).expect("read");
        assert!(html.contains("\"name\":\"alpha\""));
    }

    #[test]
    fn test_html_without_output_exits_5() {
        let tmp = TempDir::new().expect("tempdir");
        let sbom = tmp.path().join("bom.json");
        std::fs::write(&sbom, BOM).expect("write");

        let config = AppConfig::builder().format(ReportFormat::Html).build();
        let err = run_render(&sbom, &config, true).expect_err("invalid config");
        assert_eq!(exit_code_of(&err), Some(5));
    }

    #[test]
    fn test_no_roots_exits_4() {
        let tmp = TempDir::new().expect("tempdir");
        let sbom = tmp.path().join("empty.json");
        std::fs::write(&sbom, r#"{"bomFormat": "CycloneDX", "components": []}"#).expect("write");

        let err = run_render(&sbom, &AppConfig::default(), true).expect_err("no roots");
        assert_eq!(exit_code_of(&err), Some(4));
    }

    #[test]
    fn test_missing_file_exits_2() {
        let err = run_render(Path::new("/no/such/bom.json"), &AppConfig::default(), true)
            .expect_err("missing input");
        assert_eq!(exit_code_of(&err), Some(2));
    }
}
