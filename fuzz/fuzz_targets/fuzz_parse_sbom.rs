#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_tree::reports::{create_renderer, RenderOptions, ReportFormat};

/// Fuzz the whole path from raw bytes to rendered output.
///
/// Anything that normalizes is also rendered from its detected roots, so
/// traversal sees the odd graphs the parsers let through. Only renderers
/// that expand each node once are used; full expansion is exponential on
/// dense inputs and would only report timeouts.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(graph) = sbom_tree::parse_sbom_str(s) {
            let roots = sbom_tree::select_roots(&graph, &[]);
            for format in [ReportFormat::Ascii, ReportFormat::Dot] {
                let _ = create_renderer(format, &RenderOptions::default()).render(&graph, &roots);
            }
        }
    }
});
