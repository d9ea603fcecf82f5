//! Brücken-Konfiguration und die daraus aufgebaute Brücke.

use glam::IVec2;

use super::bridge_data::BridgeData;
use super::bridge_part::{BridgePartType, BridgeSegment};
use super::error::BridgeError;
use super::geometry::{build_segments, BridgePartRegistry, HeightLookup};
use super::profile::BridgeType;

/// Unveränderliche Beschreibung einer Brücke, so wie sie gespeichert wird.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    data: BridgeData,
    segments: Vec<BridgePartType>,
    first_tile: IVec2,
    first_level: i32,
    second_tile: IVec2,
    second_level: i32,
    shape: i32,
    longitudinal: bool,
    surfaced: bool,
    bridge_type: BridgeType,
}

impl BridgeConfig {
    /// Erstellt eine neue Konfiguration.
    ///
    /// Die Plausibilität (Breite, Segmentanzahl) wird erst beim Aufbau geprüft.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        data: BridgeData,
        segments: Vec<BridgePartType>,
        first_tile: IVec2,
        first_level: i32,
        second_tile: IVec2,
        second_level: i32,
        shape: i32,
        longitudinal: bool,
        surfaced: bool,
        bridge_type: BridgeType,
    ) -> Self {
        Self {
            data,
            segments,
            first_tile,
            first_level,
            second_tile,
            second_level,
            shape,
            longitudinal,
            surfaced,
            bridge_type,
        }
    }

    /// Kopie mit um `tile_shift` verschobenen Endpunkten (Verschieben auf der Karte).
    ///
    /// `None`, wenn ein Endpunkt den `i32`-Bereich verlässt.
    pub fn shifted(&self, tile_shift: IVec2) -> Option<Self> {
        Some(Self {
            first_tile: checked_shift(self.first_tile, tile_shift)?,
            second_tile: checked_shift(self.second_tile, tile_shift)?,
            ..self.clone()
        })
    }

    pub fn data(&self) -> &BridgeData {
        &self.data
    }

    pub fn segments(&self) -> &[BridgePartType] {
        &self.segments
    }

    pub fn first_tile(&self) -> IVec2 {
        self.first_tile
    }

    pub fn second_tile(&self) -> IVec2 {
        self.second_tile
    }

    pub fn first_level(&self) -> i32 {
        self.first_level
    }

    pub fn second_level(&self) -> i32 {
        self.second_level
    }

    pub fn lower_level(&self) -> i32 {
        self.first_level.min(self.second_level)
    }

    pub fn higher_level(&self) -> i32 {
        self.first_level.max(self.second_level)
    }

    /// Durchhang bzw. Bogenhöhe (`sag`-Attribut)
    pub fn shape(&self) -> i32 {
        self.shape
    }

    /// Brücke ist längs, wenn sie von Süd nach Nord statt von West nach Ost verläuft.
    pub fn is_longitudinal(&self) -> bool {
        self.longitudinal
    }

    pub fn is_surfaced(&self) -> bool {
        self.surfaced
    }

    pub fn bridge_type(&self) -> BridgeType {
        self.bridge_type
    }

    /// Untere linke Ecke der Bounding-Box (inklusive)
    pub fn min_tile(&self) -> IVec2 {
        self.first_tile.min(self.second_tile)
    }

    /// Obere rechte Ecke der Bounding-Box (inklusive)
    pub fn max_tile(&self) -> IVec2 {
        self.first_tile.max(self.second_tile)
    }

    /// Ausdehnung der Bounding-Box in Tiles minus eins, überlaufsicher
    fn extent(&self) -> (u64, u64) {
        let min = self.min_tile().as_i64vec2();
        let max = self.max_tile().as_i64vec2();
        ((max.x - min.x) as u64, (max.y - min.y) as u64)
    }

    /// Anzahl Tiles entlang der längeren Achse
    pub fn span(&self) -> usize {
        let (dx, dy) = self.extent();
        dx.max(dy) as usize + 1
    }

    /// Anzahl Tiles entlang der kürzeren Achse
    pub fn width(&self) -> usize {
        let (dx, dy) = self.extent();
        dx.min(dy) as usize + 1
    }
}

fn checked_shift(tile: IVec2, tile_shift: IVec2) -> Option<IVec2> {
    Some(IVec2::new(
        tile.x.checked_add(tile_shift.x)?,
        tile.y.checked_add(tile_shift.y)?,
    ))
}

/// Eine aufgebaute Brücke: Konfiguration plus berechnete Teile.
#[derive(Debug, Clone)]
pub struct Bridge {
    config: BridgeConfig,
    parts: Vec<BridgeSegment>,
}

impl Bridge {
    /// Baut eine Brücke aus der Konfiguration auf.
    pub fn new(config: BridgeConfig, heights: &impl HeightLookup) -> Result<Self, BridgeError> {
        let mut bridge = Self {
            config,
            parts: Vec::new(),
        };
        bridge.construct(heights)?;
        Ok(bridge)
    }

    /// Baut eine verschobene Kopie einer bestehenden Brücke.
    pub fn relocated(
        original: &Bridge,
        tile_shift: IVec2,
        heights: &impl HeightLookup,
    ) -> Result<Self, BridgeError> {
        let config = original
            .config
            .shifted(tile_shift)
            .ok_or(BridgeError::ShiftOutOfRange {
                dx: tile_shift.x,
                dy: tile_shift.y,
            })?;
        Self::new(config, heights)
    }

    /// Berechnet die Teile. Schlägt fehl, wenn die Brücke schon aufgebaut ist;
    /// bei jedem Fehler bleibt der bisherige Zustand unverändert.
    pub fn construct(&mut self, heights: &impl HeightLookup) -> Result<(), BridgeError> {
        if !self.parts.is_empty() {
            log::error!("Bridge already exists, aborting construction");
            return Err(BridgeError::AlreadyConstructed);
        }

        match build_segments(&self.config, heights) {
            Ok(parts) => {
                log::debug!(
                    "Brücke '{}' aufgebaut: {} Teile, {} -> {}",
                    self.config.data.name,
                    parts.len(),
                    self.config.first_tile,
                    self.config.second_tile
                );
                self.parts = parts;
                Ok(())
            }
            Err(e) => {
                log::error!("Brücke '{}' nicht aufgebaut: {}", self.config.data.name, e);
                Err(e)
            }
        }
    }

    /// Meldet alle Teile an der Tile-Registrierung an.
    pub fn register_parts(&self, registry: &mut impl BridgePartRegistry) {
        for part in &self.parts {
            registry.register_bridge_part(part.x, part.y, part);
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn parts(&self) -> &[BridgeSegment] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&BridgeSegment> {
        self.parts.get(index)
    }

    pub fn is_longitudinal(&self) -> bool {
        self.config.longitudinal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge_part::BridgePartType::{Deck, Support};

    fn wood() -> BridgeData {
        BridgeData::new("wood", "Wooden Bridge", 1, &[BridgeType::Flat])
    }

    fn sample_config() -> BridgeConfig {
        BridgeConfig::new(
            wood(),
            vec![Support, Deck, Deck, Support],
            IVec2::new(3, 5),
            0,
            IVec2::new(0, 5),
            1,
            4,
            false,
            true,
            BridgeType::Flat,
        )
    }

    #[test]
    fn test_span_and_width_use_bounding_box() {
        let config = sample_config();
        assert_eq!(config.span(), 4);
        assert_eq!(config.width(), 1);
        assert_eq!(config.min_tile(), IVec2::new(0, 5));
        assert_eq!(config.max_tile(), IVec2::new(3, 5));
        assert_eq!(config.lower_level(), 0);
        assert_eq!(config.higher_level(), 1);
    }

    #[test]
    fn test_shifted_moves_only_endpoints() {
        let config = sample_config();
        let moved = config.shifted(IVec2::new(2, -1)).expect("Verschiebung im Bereich");

        assert_eq!(moved.first_tile(), IVec2::new(5, 4));
        assert_eq!(moved.second_tile(), IVec2::new(2, 4));
        assert_eq!(moved.segments(), config.segments());
        assert_eq!(moved.bridge_type(), config.bridge_type());
        assert_eq!(moved.is_longitudinal(), config.is_longitudinal());
        assert_eq!(moved.shape(), config.shape());
        assert_eq!(moved.first_level(), config.first_level());
        assert_eq!(moved.second_level(), config.second_level());
    }

    #[test]
    fn test_shift_past_coordinate_range_is_rejected() {
        let config = sample_config();
        assert!(config.shifted(IVec2::new(i32::MAX, 0)).is_none());
        assert!(config.shifted(IVec2::new(0, i32::MIN)).is_some());

        let heights = |_: i32, _: i32, _: i32| Some(50);
        let bridge = Bridge::new(config, &heights).expect("Aufbau erwartet");
        assert_eq!(
            Bridge::relocated(&bridge, IVec2::new(i32::MAX, 0), &heights).err(),
            Some(BridgeError::ShiftOutOfRange {
                dx: i32::MAX,
                dy: 0
            })
        );
    }

    #[test]
    fn test_construct_twice_is_rejected() {
        let heights = |_: i32, _: i32, _: i32| Some(50);
        let mut bridge = Bridge::new(sample_config(), &heights).expect("Aufbau erwartet");
        let before = bridge.parts().to_vec();

        assert_eq!(bridge.construct(&heights), Err(BridgeError::AlreadyConstructed));
        assert_eq!(bridge.parts(), before.as_slice());
    }

    #[test]
    fn test_failed_construction_leaves_no_parts() {
        let config = BridgeConfig::new(
            wood(),
            vec![Support, Deck],
            IVec2::new(0, 0),
            0,
            IVec2::new(3, 0),
            0,
            0,
            false,
            true,
            BridgeType::Flat,
        );
        let heights = |_: i32, _: i32, _: i32| Some(50);
        let mut bridge = Bridge {
            config,
            parts: Vec::new(),
        };

        assert!(bridge.construct(&heights).is_err());
        assert!(bridge.parts().is_empty());
    }
}
