//! Bauteil-Vokabular einer Brücke: Teiltyp, Seite, Ausrichtung und das
//! fertige Segment pro Tile.

use serde::{Deserialize, Serialize};

/// Typ eines Brückensegments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgePartType {
    /// Widerlager am Brückenende
    Abutment,
    /// Verstrebung
    Bracing,
    /// Scheitelstück
    Crown,
    /// Einfaches Fahrbahnstück
    Deck,
    /// Doppeltes Widerlager
    DoubleAbutment,
    /// Doppelte Verstrebung
    DoubleBracing,
    /// Freitragendes Stück
    Floating,
    /// Stütze / Pfeiler
    Support,
}

impl BridgePartType {
    /// Alle Teiltypen in fester Reihenfolge.
    pub const ALL: [BridgePartType; 8] = [
        Self::Abutment,
        Self::Bracing,
        Self::Crown,
        Self::Deck,
        Self::DoubleAbutment,
        Self::DoubleBracing,
        Self::Floating,
        Self::Support,
    ];

    /// Ein-Zeichen-Code im gespeicherten Segment-String.
    pub fn code(self) -> char {
        match self {
            Self::Abutment => 'A',
            Self::Bracing => 'B',
            Self::Crown => 'C',
            Self::Deck => 'K',
            Self::DoubleAbutment => 'E',
            Self::DoubleBracing => 'D',
            Self::Floating => 'F',
            Self::Support => 'S',
        }
    }

    /// Umkehrung von [`BridgePartType::code`].
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.code() == code)
    }
}

/// Lage eines Tiles quer zur Brückenrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgePartSide {
    /// Brücke ist nur ein Tile breit
    Narrow,
    Left,
    Center,
    Right,
}

/// Blickrichtung eines Bauteils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityOrientation {
    Up,
    Down,
    Left,
    Right,
}

/// Fertig berechnetes Brückenteil für genau ein Tile.
///
/// Wird vom Geometrie-Builder erzeugt und vom Renderer bzw. der
/// Tile-Registrierung konsumiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgeSegment {
    /// Tile-X
    pub x: i32,
    /// Tile-Y
    pub y: i32,
    /// Teiltyp aus der Segmentfolge
    pub part_type: BridgePartType,
    /// Seitenklassifikation
    pub side: BridgePartSide,
    /// Ausrichtung zur nächstgelegenen Stütze
    pub orientation: EntityOrientation,
    /// Absolute Höhe an diesem Tile
    pub height: f32,
    /// Gerundete Höhendifferenz zum nächsten Tile
    pub height_delta: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_codes_are_unique_and_reversible() {
        for part in BridgePartType::ALL {
            assert_eq!(BridgePartType::from_code(part.code()), Some(part));
        }
        let mut codes: Vec<char> = BridgePartType::ALL.iter().map(|p| p.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), BridgePartType::ALL.len());
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(BridgePartType::from_code('x'), None);
        assert_eq!(BridgePartType::from_code('1'), None);
    }
}
