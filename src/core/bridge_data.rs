//! Brücken-Katalog: Material-Einträge mit maximaler Breite und erlaubten Profilen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::profile::BridgeType;

/// Ein Katalog-Eintrag (z.B. "wood", "rope")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeData {
    /// Schlüssel im Kartenformat (`data`-Attribut)
    pub key: String,
    /// Anzeigename
    pub name: String,
    /// Maximale Breite in Tiles
    pub max_width: usize,
    /// Erlaubte Profile
    pub types: Vec<BridgeType>,
}

impl BridgeData {
    /// Erstellt einen neuen Katalog-Eintrag
    pub fn new(key: &str, name: &str, max_width: usize, types: &[BridgeType]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            max_width,
            types: types.to_vec(),
        }
    }

    /// Prüft, ob das Profil für dieses Material erlaubt ist.
    pub fn supports(&self, bridge_type: BridgeType) -> bool {
        self.types.contains(&bridge_type)
    }
}

/// Geordneter Katalog aller bekannten Brücken-Materialien.
#[derive(Debug, Clone, Default)]
pub struct BridgeCatalog {
    entries: IndexMap<String, BridgeData>,
}

impl BridgeCatalog {
    /// Erstellt einen leeren Katalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut einen Katalog aus einer Liste; spätere Einträge überschreiben frühere.
    pub fn from_entries(entries: impl IntoIterator<Item = BridgeData>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Fügt einen Eintrag hinzu oder ersetzt ihn.
    pub fn insert(&mut self, data: BridgeData) {
        if self.entries.contains_key(&data.key) {
            log::warn!("Brücken-Katalog: Eintrag '{}' wird überschrieben", data.key);
        }
        self.entries.insert(data.key.clone(), data);
    }

    /// Sucht einen Eintrag; unbekannte Schlüssel sind ein Konfigurationsfehler.
    pub fn get(&self, key: &str) -> Result<&BridgeData, ConfigurationError> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigurationError::UnknownBridgeData(key.to_string()))
    }

    /// Iteriert in Einfüge-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = &BridgeData> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Standard-Katalog, solange keine Optionen-Datei etwas anderes vorgibt.
pub fn default_bridge_data() -> Vec<BridgeData> {
    use BridgeType::{Arched, Flat, Rope};
    vec![
        BridgeData::new("rope", "Rope Bridge", 1, &[Rope]),
        BridgeData::new("wood", "Wooden Bridge", 1, &[Flat]),
        BridgeData::new("brick", "Brick Bridge", 3, &[Flat, Arched]),
        BridgeData::new("marble", "Marble Bridge", 3, &[Flat, Arched]),
        BridgeData::new("slate", "Slate Bridge", 3, &[Flat, Arched]),
        BridgeData::new("rounded_stone", "Rounded Stone Bridge", 3, &[Flat, Arched]),
        BridgeData::new("pottery", "Pottery Bridge", 3, &[Flat, Arched]),
        BridgeData::new("sandstone", "Sandstone Bridge", 3, &[Flat, Arched]),
        BridgeData::new("rendered", "Rendered Bridge", 3, &[Flat, Arched]),
    ]
}
