//! Writer für Deedplanner-Karten.

use super::segments::encode_segments;
use super::MapDocument;
use crate::core::{BridgeConfig, TileHeights};
use anyhow::Result;

/// Schreibt ein einzelnes `<bridge>`-Element (ohne Einrückung und Zeilenende).
pub fn write_bridge_element(config: &BridgeConfig) -> String {
    let first = config.first_tile();
    let second = config.second_tile();
    format!(
        "<bridge data=\"{}\" type=\"{}\" firstFloor=\"{}\" firstX=\"{}\" firstY=\"{}\" \
         secondFloor=\"{}\" secondX=\"{}\" secondY=\"{}\" sag=\"{}\" orientation=\"{}\" \
         surfaced=\"{}\">{}</bridge>",
        escape_xml(&config.data().key),
        config.bridge_type().name(),
        config.first_level(),
        first.x,
        first.y,
        config.second_level(),
        second.x,
        second.y,
        config.shape(),
        format_bool(config.is_longitudinal()),
        format_bool(config.is_surfaced()),
        encode_segments(config.segments()),
    )
}

/// Schreibt eine Karte mit allen Brücken als XML.
///
/// Eckpunkte mit Höhe 0/0 werden weggelassen.
pub fn write_map_xml(document: &MapDocument) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<map width=\"{}\" height=\"{}\">\n",
        document.map.width(),
        document.map.height()
    ));

    output.push_str("    <tiles>\n");
    for (x, y, heights) in document.map.corners() {
        if heights == TileHeights::default() {
            continue;
        }
        output.push_str(&format!(
            "        <tile x=\"{}\" y=\"{}\" height=\"{}\" caveHeight=\"{}\"/>\n",
            x, y, heights.surface, heights.cave
        ));
    }
    output.push_str("    </tiles>\n");

    output.push_str("    <bridges>\n");
    for bridge in &document.bridges {
        output.push_str("        ");
        output.push_str(&write_bridge_element(bridge));
        output.push('\n');
    }
    output.push_str("    </bridges>\n");

    output.push_str("</map>\n");

    Ok(output)
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
