#![no_main]

use domain_companion::{ConfigSource, DomainMapCompiler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = DomainMapCompiler::default().compile_source(&ConfigSource::yaml(content));
    }
});
