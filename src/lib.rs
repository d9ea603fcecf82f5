//! Deedplanner Bridges Library.
//! Brücken-Geometrie, Katalog und Kartenformat als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod shared;
pub mod xml;

pub use crate::core::{
    build_segments, Bridge, BridgeCatalog, BridgeConfig, BridgeData, BridgeError,
    BridgePartRegistry, BridgePartSide, BridgePartType, BridgeSegment, BridgeType,
    ConfigurationError, EntityOrientation, HeightLookup, TileHeights, TileMap,
};
pub use shared::PlannerOptions;
pub use xml::{parse_bridge_element, parse_map_xml, write_map_xml, MapDocument};
