#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the format detection logic.
///
/// Exercises the marker-field checks on arbitrary JSON values without
/// normalizing them.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = sbom_tree::parsers::detect_format(&doc);
    }
});
