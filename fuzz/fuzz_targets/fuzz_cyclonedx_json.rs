#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_tree::parsers::{CycloneDxParser, SbomParser};

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the CycloneDX JSON parser directly.
///
/// Wraps input in a minimal CycloneDX envelope, as a component list and as
/// a dependency list, to reach extraction logic rather than failing at
/// JSON decoding.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parser = CycloneDxParser::new();

        let _ = parser.parse_str(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"bomFormat":"CycloneDX","components":[{s}]}}"#);
            let _ = parser.parse_str(&wrapped);

            let wrapped = format!(r#"{{"bomFormat":"CycloneDX","dependencies":[{s}]}}"#);
            let _ = parser.parse_str(&wrapped);
        }
    }
});
