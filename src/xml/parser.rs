//! Parser für Deedplanner-Karten (Eckhöhen und Brücken).

mod attributes;
#[cfg(test)]
mod tests;

use attributes::Attributes;

use super::segments::decode_segments;
use super::MapDocument;
use crate::core::tile_map::MAX_MAP_SIZE;
use crate::core::{BridgeCatalog, BridgeConfig, BridgeType, TileHeights, TileMap};
use anyhow::{bail, Context, Result};
use glam::IVec2;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Baut eine Brücken-Konfiguration aus den Attributen und dem Segment-Text.
pub(crate) fn bridge_from_attributes(
    attributes: &Attributes,
    segment_text: &str,
    catalog: &BridgeCatalog,
) -> Result<BridgeConfig> {
    let data_key = attributes.required("data")?;
    let data = catalog.get(data_key)?.clone();

    let segments = decode_segments(segment_text).context("Fehler beim Dekodieren der Segmente")?;
    let first_level = attributes.required_i32("firstFloor")?;
    let first_x = attributes.required_i32("firstX")?;
    let first_y = attributes.required_i32("firstY")?;
    let second_level = attributes.required_i32("secondFloor")?;
    let second_x = attributes.required_i32("secondX")?;
    let second_y = attributes.required_i32("secondY")?;
    let shape = attributes.required_i32("sag")?;
    let longitudinal = attributes.required_bool("orientation")?;
    let surfaced = attributes.bool_or("surfaced", true)?;
    let bridge_type: BridgeType = attributes.required("type")?.parse()?;

    Ok(BridgeConfig::new(
        data,
        segments,
        IVec2::new(first_x, first_y),
        first_level,
        IVec2::new(second_x, second_y),
        second_level,
        shape,
        longitudinal,
        surfaced,
        bridge_type,
    ))
}

/// Parst ein einzelnes `<bridge>`-Element.
pub fn parse_bridge_element(xml_content: &str, catalog: &BridgeCatalog) -> Result<BridgeConfig> {
    let document = parse_elements(xml_content, catalog)?;
    match document.bridges.len() {
        1 => Ok(document.bridges.into_iter().next().context("Brücke fehlt")?),
        0 => bail!("Kein <bridge>-Element gefunden"),
        n => bail!("{} <bridge>-Elemente gefunden, genau eines erwartet", n),
    }
}

/// Parst eine Karte aus einem XML-String.
///
/// Brücken mit ungültiger Konfiguration sind ein harter Fehler; der
/// Aufbau der Geometrie passiert erst beim Aufrufer.
pub fn parse_map_xml(xml_content: &str, catalog: &BridgeCatalog) -> Result<MapDocument> {
    let document = parse_elements(xml_content, catalog)?;
    if document.map.width() == 0 && document.map.height() == 0 && document.bridges.is_empty() {
        log::warn!("Karte ohne Tiles und ohne Brücken geladen");
    }
    Ok(document)
}

fn parse_elements(xml_content: &str, catalog: &BridgeCatalog) -> Result<MapDocument> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut map: Option<TileMap> = None;
    let mut pending_tiles: Vec<(i32, i32, TileHeights)> = Vec::new();
    let mut bridges: Vec<BridgeConfig> = Vec::new();

    let mut current_bridge: Option<Attributes> = None;
    let mut bridge_text = String::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let attributes = Attributes::read(&reader, e)?;
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                if tag == "map" {
                    map = Some(map_from_attributes(&attributes)?);
                } else if tag == "bridge" {
                    current_bridge = Some(attributes);
                    bridge_text.clear();
                } else if tag == "tile" {
                    pending_tiles.push(tile_from_attributes(&attributes)?);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let attributes = Attributes::read(&reader, e)?;
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                if tag == "tile" {
                    pending_tiles.push(tile_from_attributes(&attributes)?);
                } else if tag == "bridge" {
                    bridges.push(bridge_from_attributes(&attributes, "", catalog)?);
                } else if tag == "map" {
                    map = Some(map_from_attributes(&attributes)?);
                }
            }
            Ok(Event::Text(e)) => {
                if current_bridge.is_some() {
                    let text = e.xml_content()?.into_owned();
                    bridge_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;
                if tag == "bridge" {
                    if let Some(attributes) = current_bridge.take() {
                        let config = bridge_from_attributes(&attributes, &bridge_text, catalog)
                            .with_context(|| {
                                format!("Fehler in Brücke Nr. {}", bridges.len() + 1)
                            })?;
                        bridges.push(config);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    let mut map = map.unwrap_or_else(|| TileMap::new(0, 0));
    for (x, y, heights) in pending_tiles {
        map.set_heights(x, y, heights);
    }

    Ok(MapDocument { map, bridges })
}

fn map_from_attributes(attributes: &Attributes) -> Result<TileMap> {
    let width = attributes.required_i32("width")?;
    let height = attributes.required_i32("height")?;
    if !(0..=MAX_MAP_SIZE).contains(&width) || !(0..=MAX_MAP_SIZE).contains(&height) {
        bail!("Ungueltige Kartengroesse: {}x{}", width, height);
    }
    Ok(TileMap::new(width, height))
}

fn tile_from_attributes(attributes: &Attributes) -> Result<(i32, i32, TileHeights)> {
    let x = attributes.required_i32("x")?;
    let y = attributes.required_i32("y")?;
    let surface = attributes.i32_or("height", 0)?;
    let cave = attributes.i32_or("caveHeight", 0)?;
    Ok((x, y, TileHeights { surface, cave }))
}
