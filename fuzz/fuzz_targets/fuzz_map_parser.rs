#![no_main]

use deedplanner_bridges::core::default_bridge_data;
use deedplanner_bridges::{parse_map_xml, Bridge, BridgeCatalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    let catalog = BridgeCatalog::from_entries(default_bridge_data());
    if let Ok(document) = parse_map_xml(xml, &catalog) {
        // Aufbau darf scheitern, aber nie paniken
        for config in document.bridges {
            let _ = Bridge::new(config, &document.map);
        }
    }
});
