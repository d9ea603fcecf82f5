//! Höhenprofile für Brücken (flach, gewölbt, durchhängend).
//!
//! Ein Profil liefert nur den Zusatz-Offset über der linearen Interpolation
//! zwischen Start- und Endhöhe. Alle Profile sind zustandslos.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Strategie für den Zusatz-Offset eines Segments.
pub trait BridgeProfile: fmt::Debug + Send + Sync {
    /// Zusatzhöhe für `segment` bei insgesamt `segment_count` Segmenten.
    ///
    /// Muss an beiden Enden (`0` und `segment_count - 1`) null sein.
    fn added_height(
        &self,
        segment: i32,
        segment_count: i32,
        start_height: i32,
        end_height: i32,
        shape: i32,
    ) -> f32;
}

/// Auswahl des Profils, so wie sie im Kartenformat steht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeType {
    Flat,
    Arched,
    Rope,
}

impl BridgeType {
    /// Alle bekannten Profile.
    pub const ALL: [BridgeType; 3] = [Self::Flat, Self::Arched, Self::Rope];

    /// Name im Kartenformat.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Arched => "Arched",
            Self::Rope => "Rope",
        }
    }

    /// Löst das Tag zur passenden Profil-Implementierung auf.
    pub fn profile(self) -> &'static dyn BridgeProfile {
        match self {
            Self::Flat => &FlatProfile,
            Self::Arched => &ArchedProfile,
            Self::Rope => &RopeProfile,
        }
    }
}

impl fmt::Display for BridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BridgeType {
    type Err = ConfigurationError;

    /// Groß-/Kleinschreibung wird ignoriert; unbekannte Namen sind ein harter Fehler.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigurationError::UnknownBridgeType(s.to_string()))
    }
}

/// Normierte Position `t = segment / (segment_count - 1)` in [0, 1].
fn normalized_position(segment: i32, segment_count: i32) -> Option<f32> {
    if segment_count <= 1 {
        return None;
    }
    let t = segment as f32 / (segment_count - 1) as f32;
    Some(t.clamp(0.0, 1.0))
}

/// Reine lineare Interpolation
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatProfile;

impl BridgeProfile for FlatProfile {
    fn added_height(&self, _: i32, _: i32, _: i32, _: i32, _: i32) -> f32 {
        0.0
    }
}

/// Halbe Sinuswelle mit Scheitel in der Mitte, Höhe = `shape`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchedProfile;

impl BridgeProfile for ArchedProfile {
    fn added_height(
        &self,
        segment: i32,
        segment_count: i32,
        _start_height: i32,
        _end_height: i32,
        shape: i32,
    ) -> f32 {
        match normalized_position(segment, segment_count) {
            Some(t) => shape as f32 * (PI * t).sin(),
            None => 0.0,
        }
    }
}

/// Parabolischer Durchhang, tiefster Punkt `-shape` in der Mitte
#[derive(Debug, Clone, Copy, Default)]
pub struct RopeProfile;

impl BridgeProfile for RopeProfile {
    fn added_height(
        &self,
        segment: i32,
        segment_count: i32,
        _start_height: i32,
        _end_height: i32,
        shape: i32,
    ) -> f32 {
        match normalized_position(segment, segment_count) {
            Some(t) => -(shape as f32) * 4.0 * t * (1.0 - t),
            None => 0.0,
        }
    }
}
