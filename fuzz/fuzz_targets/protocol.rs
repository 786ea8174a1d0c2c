#![no_main]

use libfuzzer_sys::fuzz_target;
use wlcpp::protocol::parse_protocol;
use wlcpp::{GeneratorConfig, HeaderGenerator};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must either lower cleanly or be rejected, never panic
        if let Ok(protocol) = parse_protocol(s) {
            let generator = HeaderGenerator::new(".", GeneratorConfig::default());
            for interface in &protocol.interfaces {
                let _ = generator.render(interface);
            }
        }
    }
});
