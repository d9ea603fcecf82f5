//! Kachel-Karte mit Eckhöhen (Oberfläche und Höhle) und Brückenteil-Registrierung.
//!
//! Eine Karte mit `width × height` Tiles hat `(width + 1) × (height + 1)`
//! Eckpunkte; die Höhe eines Tiles ist die Höhe seiner linken unteren Ecke.

use std::collections::HashMap;

use super::bridge_part::BridgeSegment;
use super::geometry::{BridgePartRegistry, HeightLookup};

/// Maximale Kantenlänge einer Karte in Tiles.
pub const MAX_MAP_SIZE: i32 = 4096;

/// Höhen eines Eckpunkts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileHeights {
    /// Oberflächenhöhe
    pub surface: i32,
    /// Höhlenboden
    pub cave: i32,
}

/// Karte für Höhenabfragen und Tile-Registrierung von Brückenteilen.
#[derive(Debug, Clone)]
pub struct TileMap {
    width: i32,
    height: i32,
    /// Eckpunkte, zeilenweise (y außen)
    corners: Vec<TileHeights>,
    bridge_parts: HashMap<(i32, i32), Vec<BridgeSegment>>,
}

impl TileMap {
    /// Erstellt eine flache Karte mit Höhe 0.
    ///
    /// Kantenlängen werden auf `0..=MAX_MAP_SIZE` begrenzt.
    pub fn new(width: i32, height: i32) -> Self {
        let clamped_width = width.clamp(0, MAX_MAP_SIZE);
        let clamped_height = height.clamp(0, MAX_MAP_SIZE);
        if (clamped_width, clamped_height) != (width, height) {
            log::warn!(
                "Kartengröße {}x{} auf {}x{} begrenzt",
                width,
                height,
                clamped_width,
                clamped_height
            );
        }
        let (width, height) = (clamped_width, clamped_height);
        let corner_count = (width as usize + 1) * (height as usize + 1);
        Self {
            width,
            height,
            corners: vec![TileHeights::default(); corner_count],
            bridge_parts: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn corner_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x > self.width || y > self.height {
            return None;
        }
        Some((y * (self.width + 1) + x) as usize)
    }

    /// Höhen am Eckpunkt, `None` außerhalb der Karte.
    pub fn heights(&self, x: i32, y: i32) -> Option<TileHeights> {
        self.corner_index(x, y).map(|i| self.corners[i])
    }

    /// Setzt die Höhen eines Eckpunkts. Gibt `false` zurück, wenn er außerhalb liegt.
    pub fn set_heights(&mut self, x: i32, y: i32, heights: TileHeights) -> bool {
        match self.corner_index(x, y) {
            Some(i) => {
                self.corners[i] = heights;
                true
            }
            None => {
                log::warn!("Eckpunkt ({}, {}) liegt außerhalb der Karte", x, y);
                false
            }
        }
    }

    /// Iteriert über alle Eckpunkte mit Koordinaten.
    pub fn corners(&self) -> impl Iterator<Item = (i32, i32, TileHeights)> + '_ {
        let row = self.width + 1;
        self.corners
            .iter()
            .enumerate()
            .map(move |(i, h)| (i as i32 % row, i as i32 / row, *h))
    }

    /// Registrierte Brückenteile eines Tiles.
    pub fn bridge_parts_at(&self, x: i32, y: i32) -> &[BridgeSegment] {
        self.bridge_parts
            .get(&(x, y))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Anzahl aller registrierten Brückenteile.
    pub fn bridge_part_count(&self) -> usize {
        self.bridge_parts.values().map(Vec::len).sum()
    }
}

impl HeightLookup for TileMap {
    fn base_height(&self, x: i32, y: i32, level: i32) -> Option<i32> {
        self.heights(x, y)
            .map(|h| if level < 0 { h.cave } else { h.surface })
    }
}

impl BridgePartRegistry for TileMap {
    fn register_bridge_part(&mut self, x: i32, y: i32, part: &BridgeSegment) {
        self.bridge_parts.entry((x, y)).or_default().push(*part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_size_to_limit() {
        let map = TileMap::new(i32::MAX, -5);
        assert_eq!(map.width(), MAX_MAP_SIZE);
        assert_eq!(map.height(), 0);
        assert_eq!(map.corners().count(), MAX_MAP_SIZE as usize + 1);
        assert!(map.heights(MAX_MAP_SIZE, 0).is_some());
        assert!(map.heights(MAX_MAP_SIZE + 1, 0).is_none());
    }

    #[test]
    fn test_corner_bounds_include_far_edge() {
        let map = TileMap::new(4, 3);
        assert!(map.heights(4, 3).is_some());
        assert!(map.heights(5, 3).is_none());
        assert!(map.heights(-1, 0).is_none());
        assert_eq!(map.corners().count(), 20);
    }

    #[test]
    fn test_height_lookup_uses_cave_for_negative_levels() {
        let mut map = TileMap::new(2, 2);
        assert!(map.set_heights(
            1,
            1,
            TileHeights {
                surface: 40,
                cave: -25
            }
        ));

        assert_eq!(map.base_height(1, 1, 0), Some(40));
        assert_eq!(map.base_height(1, 1, 2), Some(40));
        assert_eq!(map.base_height(1, 1, -1), Some(-25));
        assert_eq!(map.base_height(3, 1, 0), None);
    }

    #[test]
    fn test_set_heights_outside_is_rejected() {
        let mut map = TileMap::new(2, 2);
        assert!(!map.set_heights(3, 0, TileHeights::default()));
    }

    #[test]
    fn test_corners_iterate_row_by_row() {
        let mut map = TileMap::new(1, 1);
        map.set_heights(1, 0, TileHeights { surface: 7, cave: 0 });
        let corners: Vec<(i32, i32, i32)> = map.corners().map(|(x, y, h)| (x, y, h.surface)).collect();
        assert_eq!(corners, vec![(0, 0, 0), (1, 0, 7), (0, 1, 0), (1, 1, 0)]);
    }
}
