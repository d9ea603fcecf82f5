//! Geteilte Konfiguration und Konstanten.
//!
//! Enthält die Laufzeit-Optionen und die Höhen-Konstanten, die von `core`
//! und `xml` gemeinsam genutzt werden.
pub mod options;

pub use options::PlannerOptions;
pub use options::{LEVEL_HEIGHT, UPPER_LEVEL_OFFSET};
