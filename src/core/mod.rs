//! Core-Domänentypen: Brückenteile, Profile, Katalog, Konfiguration, Geometrie, Karte.

pub mod bridge;
pub mod bridge_data;
pub mod bridge_part;
pub mod error;
pub mod geometry;
pub mod profile;
pub mod tile_map;

pub use bridge::{Bridge, BridgeConfig};
pub use bridge_data::{default_bridge_data, BridgeCatalog, BridgeData};
pub use bridge_part::{BridgePartSide, BridgePartType, BridgeSegment, EntityOrientation};
pub use error::{BridgeError, ConfigurationError};
pub use geometry::{absolute_height, build_segments, BridgePartRegistry, HeightLookup};
pub use profile::{ArchedProfile, BridgeProfile, BridgeType, FlatProfile, RopeProfile};
pub use tile_map::{TileHeights, TileMap, MAX_MAP_SIZE};
