#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_tree::parsers::{SbomParser, SpdxParser};

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the SPDX JSON parser directly.
///
/// Input is tried raw and as the contents of the `relationships` array.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parser = SpdxParser::new();

        let _ = parser.parse_str(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                r#"{{"spdxVersion":"SPDX-2.3","packages":[{{"SPDXID":"SPDXRef-a","name":"a"}}],"relationships":[{s}]}}"#,
            );
            let _ = parser.parse_str(&wrapped);
        }
    }
});
