#![allow(dead_code)]

use std::{fs, path::Path};

// ============================================================================
// Configuration fixtures
// ============================================================================

pub const NAMES: [&str; 3] = ["Foo", "Bar", "Qux"];

/// Renders a `<Handlers>` document with one element per name in [`NAMES`],
/// `enable="true"` for the names in `enabled` and `enable="false"` otherwise.
pub fn handlers_xml(enabled: &[&str]) -> String {
    let mut xml = String::from("<Handlers>\n");
    for name in NAMES {
        let flag = enabled.contains(&name);
        xml.push_str(&format!("  <{name} enable=\"{flag}\"/>\n"));
    }
    xml.push_str("</Handlers>\n");
    xml
}

/// Every subset of [`NAMES`], each in table order.
pub fn subsets() -> Vec<Vec<&'static str>> {
    (0..1u8 << NAMES.len())
        .map(|mask| {
            NAMES
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1u8 << bit) != 0)
                .map(|(_, name)| *name)
                .collect()
        })
        .collect()
}

pub fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("handlers.xml"), contents).unwrap();
}
