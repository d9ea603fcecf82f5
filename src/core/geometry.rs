//! Geometrie-Berechnung für Brücken.
//!
//! Aus einer [`BridgeConfig`] und den Geländehöhen an den Endpunkten wird pro
//! Tile der Bounding-Box ein [`BridgeSegment`] berechnet: Teiltyp, Seite,
//! Ausrichtung, absolute Höhe und gerundete Höhendifferenz zum nächsten Tile.
//!
//! Die Berechnung ist rein; Höhen kommen über [`HeightLookup`], das Anmelden
//! der Teile übernimmt ein [`BridgePartRegistry`] beim Aufrufer.

use super::bridge::BridgeConfig;
use super::bridge_part::{BridgePartSide, BridgePartType, BridgeSegment, EntityOrientation};
use super::error::{BridgeError, ConfigurationError};
use super::profile::BridgeProfile;
use crate::shared::options::{LEVEL_HEIGHT, UPPER_LEVEL_OFFSET};

/// Liefert die Basishöhe eines Tiles.
///
/// Für `level >= 0` die Oberflächenhöhe, für `level < 0` die Höhlenhöhe.
/// `None`, wenn das Tile nicht existiert.
pub trait HeightLookup {
    fn base_height(&self, x: i32, y: i32, level: i32) -> Option<i32>;
}

impl<F> HeightLookup for F
where
    F: Fn(i32, i32, i32) -> Option<i32>,
{
    fn base_height(&self, x: i32, y: i32, level: i32) -> Option<i32> {
        self(x, y, level)
    }
}

/// Nimmt fertige Brückenteile entgegen (Tile-Index der Karte).
pub trait BridgePartRegistry {
    fn register_bridge_part(&mut self, x: i32, y: i32, part: &BridgeSegment);
}

/// Gebäude-Stockwerk einer Ebene: negative Ebenen (Höhlen) zählen ab -1 = 0.
pub fn building_level(level: i32) -> i32 {
    if level >= 0 {
        level
    } else {
        -level - 1
    }
}

/// Absolute Höhe eines Punkts auf `level` mit Basishöhe `base_height`.
pub fn absolute_height(base_height: i32, level: i32) -> i32 {
    let building_level = building_level(level);
    let mut height = base_height;
    if building_level > 0 {
        // Stockwerke über dem Erdgeschoss liegen etwas höher
        height += UPPER_LEVEL_OFFSET;
    }
    height + building_level * LEVEL_HEIGHT
}

/// Eingangswerte der Höheninterpolation einer Brücke.
#[derive(Debug, Clone, Copy)]
pub struct HeightCurve<'a> {
    pub profile: &'a dyn BridgeProfile,
    /// Spannweite + 1 (ein zusätzliches Segment für den Anschluss)
    pub bridge_length: i32,
    pub start_height: i32,
    pub end_height: i32,
    pub shape: i32,
}

impl HeightCurve<'_> {
    fn height_step(&self) -> f32 {
        (self.end_height - self.start_height) as f32 / (self.bridge_length - 1) as f32
    }

    /// Höhe am Segment `segment`; außerhalb der Brücke die jeweilige Endhöhe.
    pub fn height_at_point(&self, segment: i32) -> f32 {
        if segment < 0 {
            return self.start_height as f32;
        }
        if segment >= self.bridge_length {
            return self.end_height as f32;
        }

        let linear = self.start_height as f32 + self.height_step() * segment as f32;
        let added = self.profile.added_height(
            segment,
            self.bridge_length,
            self.start_height,
            self.end_height,
            self.shape,
        );
        linear + added
    }
}

/// Seitenklassifikation eines Tiles quer zur Brückenrichtung.
pub fn part_side(
    min: (i32, i32),
    max: (i32, i32),
    x: i32,
    y: i32,
    longitudinal: bool,
) -> BridgePartSide {
    let (start_x, start_y) = min;
    let (end_x, end_y) = max;

    if start_x == end_x || start_y == end_y {
        return BridgePartSide::Narrow;
    }

    if (longitudinal && x == start_x) || (!longitudinal && y == start_y) {
        BridgePartSide::Right
    } else if (longitudinal && x == end_x) || (!longitudinal && y == end_y) {
        BridgePartSide::Left
    } else {
        BridgePartSide::Center
    }
}

/// Ausrichtung zur nächstgelegenen Stütze.
///
/// Außerhalb der Segmentfolge liegt auf beiden Seiten eine virtuelle Stütze.
/// Bei gleichem Abstand gewinnt die Stütze in Vorwärtsrichtung.
pub fn part_orientation(
    segments: &[BridgePartType],
    segment: usize,
    longitudinal: bool,
) -> EntityOrientation {
    let is_support = |index: Option<usize>| match index.and_then(|i| segments.get(i)) {
        Some(part) => *part == BridgePartType::Support,
        None => true,
    };

    let next_distance = (1..)
        .find(|&dist| is_support(segment.checked_add(dist)))
        .unwrap_or(usize::MAX);
    let previous_distance = (1..)
        .find(|&dist| is_support(segment.checked_sub(dist)))
        .unwrap_or(usize::MAX);

    match (next_distance <= previous_distance, longitudinal) {
        (true, true) => EntityOrientation::Up,
        (true, false) => EntityOrientation::Right,
        (false, true) => EntityOrientation::Down,
        (false, false) => EntityOrientation::Left,
    }
}

/// Prüft die Konfiguration vor dem Aufbau.
/// Prüft die Konfiguration und liefert die Brückenlänge (Spannweite + 1).
fn validate(config: &BridgeConfig) -> Result<i32, ConfigurationError> {
    let data = config.data();

    let width = config.width();
    if width > data.max_width {
        return Err(ConfigurationError::WidthExceeded {
            requested: width,
            max: data.max_width,
        });
    }

    if !data.supports(config.bridge_type()) {
        return Err(ConfigurationError::UnsupportedBridgeType {
            data: data.key.clone(),
            bridge_type: config.bridge_type().to_string(),
        });
    }

    let span = config.span();
    let bridge_length = i32::try_from(span)
        .ok()
        .and_then(|span| span.checked_add(1))
        .ok_or(ConfigurationError::SpanTooLong { span })?;

    if config.segments().len() != span {
        return Err(ConfigurationError::SegmentCountMismatch {
            expected: span,
            actual: config.segments().len(),
        });
    }

    if !config.segments().contains(&BridgePartType::Support) {
        return Err(ConfigurationError::NoSupportSegment);
    }

    Ok(bridge_length)
}

fn lookup_absolute_height(
    heights: &impl HeightLookup,
    x: i32,
    y: i32,
    level: i32,
) -> Result<i32, BridgeError> {
    heights
        .base_height(x, y, level)
        .map(|base| absolute_height(base, level))
        .ok_or(BridgeError::MissingTile { x, y, level })
}

/// Berechnet alle Teile einer Brücke.
///
/// Reihenfolge: X außen, Y innen über die Bounding-Box. Bei einem Fehler
/// wird nichts zurückgegeben.
pub fn build_segments(
    config: &BridgeConfig,
    heights: &impl HeightLookup,
) -> Result<Vec<BridgeSegment>, BridgeError> {
    let bridge_length = validate(config)?;

    let min = config.min_tile();
    let max = config.max_tile();
    let longitudinal = config.is_longitudinal();
    let segments = config.segments();

    // Endhöhe wird ein Tile hinter der Bounding-Box abgelesen
    let start_height = lookup_absolute_height(heights, min.x, min.y, config.first_level())?;
    let (end_x, end_y) = match (max.x.checked_add(1), max.y.checked_add(1)) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            return Err(BridgeError::MissingTile {
                x: max.x,
                y: max.y,
                level: config.second_level(),
            })
        }
    };
    let end_height = lookup_absolute_height(heights, end_x, end_y, config.second_level())?;

    let curve = HeightCurve {
        profile: config.bridge_type().profile(),
        bridge_length,
        start_height,
        end_height,
        shape: config.shape(),
    };

    let mut parts = Vec::with_capacity(config.span() * config.width());
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            let current = if longitudinal { y - min.y } else { x - min.x };
            let height = curve.height_at_point(current);
            let height_after = curve.height_at_point(current + 1);
            let index = current as usize;

            parts.push(BridgeSegment {
                x,
                y,
                part_type: segments[index],
                side: part_side((min.x, min.y), (max.x, max.y), x, y, longitudinal),
                orientation: part_orientation(segments, index, longitudinal),
                height,
                // Halbe Schritte runden zur geraden Zahl
                height_delta: (height_after - height).round_ties_even() as i32,
            });
        }
    }

    log::trace!(
        "Brückengeometrie: {} Teile, Höhe {} -> {}",
        parts.len(),
        start_height,
        end_height
    );

    Ok(parts)
}
