use super::attributes::parse_bool;
use super::*;
use crate::core::{default_bridge_data, BridgePartType, ConfigurationError};

fn catalog() -> BridgeCatalog {
    BridgeCatalog::from_entries(default_bridge_data())
}

#[test]
fn test_parse_bool_is_case_insensitive() {
    assert!(parse_bool("True").unwrap());
    assert!(parse_bool("true").unwrap());
    assert!(!parse_bool("FALSE").unwrap());
    assert!(parse_bool("yes").is_err());
}

#[test]
fn test_parse_bridge_element_full() {
    let xml = r#"<bridge data="brick" type="arched" firstFloor="0" firstX="1" firstY="2"
        secondFloor="1" secondX="4" secondY="2" sag="6" orientation="false" surfaced="False">UzJLUw==</bridge>"#;
    let config = parse_bridge_element(xml, &catalog()).unwrap();

    assert_eq!(config.data().key, "brick");
    assert_eq!(config.bridge_type(), BridgeType::Arched);
    assert_eq!(config.first_tile(), IVec2::new(1, 2));
    assert_eq!(config.second_tile(), IVec2::new(4, 2));
    assert_eq!(config.first_level(), 0);
    assert_eq!(config.second_level(), 1);
    assert_eq!(config.shape(), 6);
    assert!(!config.is_longitudinal());
    assert!(!config.is_surfaced());
    assert_eq!(
        config.segments(),
        &[
            BridgePartType::Support,
            BridgePartType::Deck,
            BridgePartType::Deck,
            BridgePartType::Support
        ]
    );
}

#[test]
fn test_surfaced_defaults_to_true() {
    let xml = r#"<bridge data="wood" type="Flat" firstFloor="0" firstX="0" firstY="0"
        secondFloor="0" secondX="2" secondY="0" sag="0" orientation="True">U0tT</bridge>"#;
    let config = parse_bridge_element(xml, &catalog()).unwrap();
    assert!(config.is_surfaced());
    assert!(config.is_longitudinal());
}

#[test]
fn test_unknown_type_is_hard_error() {
    let xml = r#"<bridge data="wood" type="Suspension" firstFloor="0" firstX="0" firstY="0"
        secondFloor="0" secondX="2" secondY="0" sag="0" orientation="True">U0tT</bridge>"#;
    let err = parse_bridge_element(xml, &catalog()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigurationError>(),
        Some(&ConfigurationError::UnknownBridgeType("Suspension".to_string()))
    );
}

#[test]
fn test_unknown_data_is_hard_error() {
    let xml = r#"<bridge data="cheese" type="Flat" firstFloor="0" firstX="0" firstY="0"
        secondFloor="0" secondX="2" secondY="0" sag="0" orientation="True">U0tT</bridge>"#;
    let err = parse_bridge_element(xml, &catalog()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::UnknownBridgeData(_))
    ));
}

#[test]
fn test_missing_attribute_is_reported() {
    let xml = r#"<bridge data="wood" type="Flat" firstFloor="0" firstX="0"
        secondFloor="0" secondX="2" secondY="0" sag="0" orientation="True">U0tT</bridge>"#;
    let err = parse_bridge_element(xml, &catalog()).unwrap_err();
    assert!(format!("{:#}", err).contains("firstY"));
}

#[test]
fn test_parse_map_with_tiles_and_bridges() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<map width="4" height="2">
    <tiles>
        <tile x="0" y="0" height="100" caveHeight="-40"/>
        <tile x="4" y="1" height="120"/>
        <tile x="9" y="9" height="5"/>
    </tiles>
    <bridges>
        <bridge data="wood" type="Flat" firstFloor="0" firstX="0" firstY="0" secondFloor="0" secondX="2" secondY="0" sag="0" orientation="False">U0tT</bridge>
    </bridges>
</map>"#;
    let document = parse_map_xml(xml, &catalog()).unwrap();

    assert_eq!(document.map.width(), 4);
    assert_eq!(document.map.height(), 2);
    assert_eq!(
        document.map.heights(0, 0),
        Some(TileHeights {
            surface: 100,
            cave: -40
        })
    );
    assert_eq!(document.map.heights(4, 1).map(|h| h.surface), Some(120));
    assert_eq!(document.bridges.len(), 1);
    assert_eq!(document.bridges[0].span(), 3);
}

#[test]
fn test_parse_map_rejects_oversized_map() {
    let xml = r#"<map width="100000" height="2"/>"#;
    assert!(parse_map_xml(xml, &catalog()).is_err());
}

#[test]
fn test_parse_bridge_element_requires_exactly_one() {
    assert!(parse_bridge_element("<map width=\"1\" height=\"1\"/>", &catalog()).is_err());
}
