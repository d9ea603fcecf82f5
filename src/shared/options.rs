//! Zentrale Konfiguration für den Brückenbau.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{default_bridge_data, BridgeCatalog, BridgeData};

// ── Höhen ───────────────────────────────────────────────────────────

/// Höhe eines Stockwerks in Höheneinheiten.
pub const LEVEL_HEIGHT: i32 = 30;
/// Zusatzhöhe für alle Stockwerke oberhalb des Erdgeschosses.
pub const UPPER_LEVEL_OFFSET: i32 = 3;

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Standard-Ausgabe des CLI: eingerücktes JSON.
pub const PRETTY_OUTPUT: bool = true;

/// Dateiname der Optionen neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "deedplanner_bridges.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `deedplanner_bridges.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerOptions {
    /// JSON-Ausgabe eingerückt schreiben
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
    /// Teile nach dem Aufbau an der Karte registrieren
    #[serde(default = "default_register_parts")]
    pub register_parts: bool,
    /// Brücken-Katalog (Material → max. Breite, erlaubte Profile)
    #[serde(default = "default_bridge_data")]
    pub bridges: Vec<BridgeData>,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            pretty_output: PRETTY_OUTPUT,
            register_parts: true,
            bridges: default_bridge_data(),
        }
    }
}

/// Serde-Default für `pretty_output` (Abwärtskompatibilität).
fn default_pretty_output() -> bool {
    PRETTY_OUTPUT
}

/// Serde-Default für `register_parts`.
fn default_register_parts() -> bool {
    true
}

impl PlannerOptions {
    /// Liest Optionen aus einer TOML-Datei.
    pub fn read_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Optionen fehlerhaft: {}", path.display()))
    }

    /// Lädt Optionen; fehlt die Datei oder ist sie fehlerhaft, gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "Keine Optionen unter {}, verwende Standardwerte",
                path.display()
            );
            return Self::default();
        }
        match Self::read_from_file(path) {
            Ok(options) => {
                log::info!(
                    "Optionen geladen ({} Brückentypen): {}",
                    options.bridges.len(),
                    path.display()
                );
                options
            }
            Err(e) => {
                log::warn!("{:#}, verwende Standardwerte", e);
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML, fehlende Verzeichnisse werden angelegt.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Verzeichnis nicht anlegbar: {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        exe_dir.join(OPTIONS_FILE_NAME)
    }

    /// Baut den Katalog aus den konfigurierten Einträgen.
    pub fn catalog(&self) -> BridgeCatalog {
        BridgeCatalog::from_entries(self.bridges.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BridgeType;

    #[test]
    fn test_options_toml_roundtrip() {
        let options = PlannerOptions::default();
        let text = toml::to_string_pretty(&options).expect("Serialisierung fehlgeschlagen");
        let parsed: PlannerOptions = toml::from_str(&text).expect("Parsing fehlgeschlagen");

        assert_eq!(parsed.bridges, options.bridges);
        assert_eq!(parsed.pretty_output, options.pretty_output);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: PlannerOptions = toml::from_str("pretty_output = false\n").unwrap();
        assert!(!parsed.pretty_output);
        assert!(parsed.register_parts);
        assert_eq!(parsed.catalog().len(), default_bridge_data().len());
    }

    #[test]
    fn test_custom_catalog_entry() {
        let text = r#"
[[bridges]]
key = "glass"
name = "Glass Bridge"
max_width = 5
types = ["Flat", "Arched"]
"#;
        let parsed: PlannerOptions = toml::from_str(text).unwrap();
        let catalog = parsed.catalog();
        assert_eq!(catalog.len(), 1);
        let glass = catalog.get("glass").unwrap();
        assert_eq!(glass.max_width, 5);
        assert!(glass.supports(BridgeType::Arched));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let options = PlannerOptions::load_from_file(Path::new("/nonexistent/bridges.toml"));
        assert!(options.register_parts);
        assert!(!options.bridges.is_empty());
        assert!(PlannerOptions::read_from_file(Path::new("/nonexistent/bridges.toml")).is_err());
    }

    #[test]
    fn test_save_then_load_from_file() {
        let tmp = std::env::temp_dir().join("test_planner_options_save");
        let _ = std::fs::remove_dir_all(&tmp);
        let path = tmp.join("nested").join(OPTIONS_FILE_NAME);

        let options = PlannerOptions {
            pretty_output: false,
            register_parts: false,
            bridges: vec![BridgeData::new("glass", "Glass Bridge", 2, &[BridgeType::Rope])],
        };
        options.save_to_file(&path).expect("Speichern fehlgeschlagen");

        let loaded = PlannerOptions::read_from_file(&path).expect("Laden fehlgeschlagen");
        assert!(!loaded.pretty_output);
        assert!(!loaded.register_parts);
        assert_eq!(loaded.bridges, options.bridges);
        assert_eq!(PlannerOptions::load_from_file(&path).bridges, options.bridges);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let tmp = std::env::temp_dir().join("test_planner_options_broken");
        std::fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join(OPTIONS_FILE_NAME);
        std::fs::write(&path, "bridges = 5\n").unwrap();

        assert!(PlannerOptions::read_from_file(&path).is_err());
        let options = PlannerOptions::load_from_file(&path);
        assert_eq!(options.bridges, default_bridge_data());

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
