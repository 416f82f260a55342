#![no_main]

use domain_companion::routing::extract_address;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = std::str::from_utf8(data) {
        let _ = extract_address(header);
    }
});
