//! Library-level tests for keyboard detection and layer mapping.

mod fixtures;
use fixtures::*;

use via_mapper::constants::PLACEHOLDER_KEYCODE;
use via_mapper::mapper::{self, MapErrorKind};
use via_mapper::models::{KeyboardKind, Layer, ViaConfig, GMMK, KEYCHRON};
use via_mapper::parser;

fn parse(value: &serde_json::Value) -> ViaConfig {
    parser::parse_via_config(&value.to_string()).expect("fixture should parse")
}

fn layers_of(config: &ViaConfig) -> Vec<Layer> {
    config
        .layers()
        .expect("config should have layers")
        .expect("layers should decode")
}

#[test]
fn test_detect_matches_only_exact_ids() {
    for kind in KeyboardKind::ALL {
        let config = parse(&via_config_json(kind, 1));
        assert_eq!(mapper::detect(&config), Some(kind));

        let mut off_by_one = config.clone();
        let name = config.name().unwrap_or_default().to_string();
        off_by_one.set_identity(name, config.vendor_product_id() + 1);
        assert_eq!(mapper::detect(&off_by_one), None);
    }
}

#[test]
fn test_every_layer_has_destination_length() {
    let keychron = parse(&keychron_config());
    let gmmk = mapper::map_config(&keychron, KeyboardKind::Keychron).unwrap();
    assert!(layers_of(&gmmk)
        .iter()
        .all(|layer| layer.len() == GMMK_LAYER_LEN));

    let back = mapper::map_config(&gmmk, KeyboardKind::Gmmk).unwrap();
    assert!(layers_of(&back)
        .iter()
        .all(|layer| layer.len() == KEYCHRON_LAYER_LEN));
}

#[test]
fn test_placeholder_never_written_by_mapping() {
    // A layer full of placeholders maps to a layer full of placeholders
    let mut config = parse(&keychron_config());
    config.set_layers(&[vec![PLACEHOLDER_KEYCODE.to_string(); KEYCHRON_LAYER_LEN]]);

    let mapped = mapper::map_config(&config, KeyboardKind::Keychron).unwrap();
    assert!(layers_of(&mapped)[0]
        .iter()
        .all(|key| key == PLACEHOLDER_KEYCODE));
}

#[test]
fn test_all_fixups_are_applied() {
    let mut config = parse(&via_config_json(KeyboardKind::Keychron, 1));
    let mut layers = layers_of(&config);
    layers[0][position_of(KeyboardKind::Keychron, "KC_LALT")] = "CUSTOM(0)".to_string();
    layers[0][position_of(KeyboardKind::Keychron, "KC_RALT")] = "CUSTOM(1)".to_string();
    layers[0][position_of(KeyboardKind::Keychron, "KC_LGUI")] = "CUSTOM(3)".to_string();
    config.set_layers(&layers);

    let mapped = mapper::map_config(&config, KeyboardKind::Keychron).unwrap();
    let layer = &layers_of(&mapped)[0];

    assert!(layer.iter().all(|key| !key.starts_with("CUSTOM(")));
    assert_eq!(layer[position_of(KeyboardKind::Gmmk, "KC_LALT")], "KC_LALT");
    assert_eq!(layer[position_of(KeyboardKind::Gmmk, "KC_RALT")], "KC_RALT");
    assert_eq!(layer[position_of(KeyboardKind::Gmmk, "KC_LGUI")], "KC_RGUI");
}

#[test]
fn test_gmmk_fixups_do_not_apply_from_keychron_side() {
    // CUSTOM(n) is only rewritten when converting from the Keychron
    let mut config = parse(&via_config_json(KeyboardKind::Gmmk, 1));
    let lalt = position_of(KeyboardKind::Gmmk, "KC_LALT");
    let mut layers = layers_of(&config);
    layers[0][lalt] = "CUSTOM(0)".to_string();
    config.set_layers(&layers);

    let mapped = mapper::map_config(&config, KeyboardKind::Gmmk).unwrap();
    let layer = &layers_of(&mapped)[0];
    assert_eq!(layer[position_of(KeyboardKind::Keychron, "KC_LALT")], "CUSTOM(0)");
}

#[test]
fn test_round_trip_is_not_idempotent() {
    let mut original = parse(&via_config_json(KeyboardKind::Gmmk, 1));
    let del = position_of(KeyboardKind::Gmmk, "KC_DEL");
    let mut layers = layers_of(&original);
    layers[0][del] = "KC_INS".to_string();
    original.set_layers(&layers);

    let keychron = mapper::map_config(&original, KeyboardKind::Gmmk).unwrap();
    assert!(layers_of(&keychron)[0].iter().all(|key| key != "KC_INS"));

    let back = mapper::map_config(&keychron, KeyboardKind::Keychron).unwrap();
    assert_eq!(back.vendor_product_id(), GMMK.vendor_product_id);
    assert_eq!(layers_of(&back)[0][del], PLACEHOLDER_KEYCODE);
    assert_ne!(layers_of(&back), layers_of(&original));
}

#[test]
fn test_missing_layers_is_an_error() {
    let config = parse(&serde_json::json!({
        "name": KEYCHRON.name,
        "vendorProductId": KEYCHRON.vendor_product_id
    }));

    let err = mapper::map_config(&config, KeyboardKind::Keychron).unwrap_err();
    assert_eq!(err.kind, MapErrorKind::MissingLayers);
}

#[test]
fn test_caller_config_is_not_modified() {
    let config = parse(&keychron_config());
    let snapshot = config.clone();

    let _ = mapper::map_config(&config, KeyboardKind::Keychron).unwrap();

    assert_eq!(config, snapshot);
}

#[test]
fn test_conversion_keeps_field_order() {
    let config = parse(&serde_json::json!({
        "macros": [""],
        "layers": [default_layer(KeyboardKind::Gmmk)],
        "name": GMMK.name,
        "customKeycodes": {"z": 1, "a": 2},
        "vendorProductId": GMMK.vendor_product_id
    }));

    let mapped = mapper::map_config(&config, KeyboardKind::Gmmk).unwrap();

    assert_eq!(
        mapped.keys().collect::<Vec<_>>(),
        vec!["macros", "layers", "name", "customKeycodes", "vendorProductId"]
    );
    assert_eq!(mapped.name(), Some(KEYCHRON.name));
    let nested = mapped.get("customKeycodes").unwrap().as_object().unwrap();
    assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["z", "a"]);
}
