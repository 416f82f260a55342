#![no_main]

use domain_companion::{ConfigSource, DomainMapCompiler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Loading, validation and compilation must reject bad input, never panic
        let _ = DomainMapCompiler::default().compile_source(&ConfigSource::json(content));
    }
});
