//! Root selection and rendering stage.

use super::{write_output, OutputTarget};
use crate::config::AppConfig;
use crate::error::{ErrorContext, Result, SbomTreeError};
use crate::forest::select_roots;
use crate::model::Graph;
use crate::reports::{create_renderer, roots_have_edges, ReportError, ReportFormat, NO_EDGES_HINT};

/// Resolve the roots to render, failing with [`SbomTreeError::NoRoots`]
/// when the graph offers none.
pub fn resolve_roots(graph: &Graph, requested: &[String]) -> Result<Vec<String>> {
    let roots = select_roots(graph, requested);
    if roots.is_empty() {
        return Err(SbomTreeError::NoRoots);
    }
    tracing::debug!("Rendering from {} root(s): {}", roots.len(), roots.join(", "));
    Ok(roots)
}

/// Render the selected trees in the configured format and write them out.
///
/// File output is confirmed on stdout unless `quiet` is set. An ASCII
/// render whose roots have no edges is followed by a hint about where
/// dependency information is expected.
pub fn render_output(graph: &Graph, roots: &[String], config: &AppConfig, quiet: bool) -> Result<()> {
    let format = config.render.format;
    let target = OutputTarget::from_option(config.output.file.clone());
    if format.requires_output_file() && target == OutputTarget::Stdout {
        return Err(SbomTreeError::report(
            "cannot write to stdout",
            ReportError::MissingOutput(format),
        ));
    }

    let renderer = create_renderer(format, &config.render_options());
    tracing::info!("Rendering {} root(s) as {}", roots.len(), renderer.format());
    let output = renderer
        .render(graph, roots)
        .with_context(|| format!("{format} output"))?;
    write_output(&output, &target)?;

    if !quiet {
        if let OutputTarget::File(path) = &target {
            println!("Wrote {} to {}", format.describe(), path.display());
        }
        if format == ReportFormat::Ascii && !roots_have_edges(graph, roots) {
            println!("\n{NO_EDGES_HINT}");
        }
    }

    Ok(())
}
