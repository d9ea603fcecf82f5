//! Fehlertypen für den Brückenbau.

use thiserror::Error;

/// Ungültige Brücken-Konfiguration.
///
/// Nicht fatal für den Editor, aber fatal für den Aufbau dieser einen Brücke:
/// es werden keine Teile erzeugt und nichts registriert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Breite der Bounding-Box übersteigt die maximale Breite des Brückentyps.
    #[error("impossible bridge: requested width {requested}, max possible: {max}")]
    WidthExceeded {
        /// Angefragte Breite in Tiles
        requested: usize,
        /// Maximal zulässige Breite laut Katalog
        max: usize,
    },
    /// Unbekannter Name eines Brückenprofils.
    #[error("unknown bridge type: '{0}'")]
    UnknownBridgeType(String),
    /// Unbekannter Katalog-Schlüssel.
    #[error("unknown bridge data: '{0}'")]
    UnknownBridgeData(String),
    /// Der Katalog-Eintrag erlaubt das Profil nicht.
    #[error("bridge data '{data}' does not support type {bridge_type}")]
    UnsupportedBridgeType {
        /// Katalog-Schlüssel
        data: String,
        /// Angefragtes Profil
        bridge_type: String,
    },
    /// Anzahl der Segmente passt nicht zur Spannweite.
    #[error("segment count {actual} does not match bridge span {expected}")]
    SegmentCountMismatch {
        /// Erwartete Anzahl (Spannweite)
        expected: usize,
        /// Tatsächliche Anzahl
        actual: usize,
    },
    /// Spannweite passt nicht in den Koordinatenbereich.
    #[error("bridge span {span} exceeds the supported range")]
    SpanTooLong {
        /// Spannweite in Tiles
        span: usize,
    },
    /// Keine Stütze in der Segmentfolge.
    #[error("segment sequence contains no support")]
    NoSupportSegment,
}

/// Fehler beim Aufbau einer Brücke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Ungültige Konfiguration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Die Höhenabfrage kennt das Tile nicht.
    #[error("no height available for tile ({x}, {y}) on level {level}")]
    MissingTile {
        /// Tile-X
        x: i32,
        /// Tile-Y
        y: i32,
        /// Ebene
        level: i32,
    },
    /// Verschiebung schiebt einen Endpunkt aus dem Koordinatenbereich.
    #[error("bridge cannot be shifted by ({dx}, {dy})")]
    ShiftOutOfRange {
        /// Verschiebung in X
        dx: i32,
        /// Verschiebung in Y
        dy: i32,
    },
    /// `construct()` auf einer bereits aufgebauten Brücke.
    #[error("bridge already exists, aborting construction")]
    AlreadyConstructed,
}

impl BridgeError {
    /// `true` für Konfigurationsfehler.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
