//! XML Import/Export für Deedplanner-Karten.
//!
//! Eine Karte enthält Eckhöhen (`<tile>`) und Brücken (`<bridge>`). Die
//! Segmentfolge einer Brücke steht Base64-kodiert im Element-Text.
pub mod parser;
pub mod segments;
pub mod writer;

use crate::core::{BridgeConfig, TileMap};

pub use parser::{parse_bridge_element, parse_map_xml};
pub use segments::{decode_segments, encode_segments};
pub use writer::{write_bridge_element, write_map_xml};

/// Geladene Karte: Höhen plus (noch nicht aufgebaute) Brücken.
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub map: TileMap,
    pub bridges: Vec<BridgeConfig>,
}
