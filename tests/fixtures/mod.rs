//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use via_mapper::models::KeyboardKind;

/// Returns a board's default layer: its layout table as owned keycodes.
pub fn default_layer(kind: KeyboardKind) -> Vec<String> {
    kind.profile()
        .layout
        .iter()
        .map(|key| (*key).to_string())
        .collect()
}

/// Creates a VIA export for `kind` with `layer_count` copies of the default layer.
///
/// Includes `macros` and `encoders` so tests can check pass-through fields.
pub fn via_config_json(kind: KeyboardKind, layer_count: usize) -> Value {
    let profile = kind.profile();
    let layers: Vec<Vec<String>> = (0..layer_count).map(|_| default_layer(kind)).collect();

    json!({
        "name": profile.name,
        "vendorProductId": profile.vendor_product_id,
        "macros": ["", "{KC_LCTL,KC_C}"],
        "layers": layers,
        "encoders": [[["KC_VOLD", "KC_VOLU"]]]
    })
}

/// Keychron Q1 Pro export with four layers.
pub fn keychron_config() -> Value {
    via_config_json(KeyboardKind::Keychron, 4)
}

/// GMMK Pro export with four layers.
pub fn gmmk_config() -> Value {
    via_config_json(KeyboardKind::Gmmk, 4)
}

/// Position of `keycode` in a board's layout table.
pub fn position_of(kind: KeyboardKind, keycode: &str) -> usize {
    kind.profile()
        .layout
        .iter()
        .position(|key| *key == keycode)
        .unwrap_or_else(|| panic!("{keycode} not in {kind} layout"))
}

/// Positions per Keychron Q1 Pro layer.
pub const KEYCHRON_LAYER_LEN: usize = 96;
/// Positions per GMMK Pro layer.
pub const GMMK_LAYER_LEN: usize = 88;

/// Writes `content` into a fresh temp dir and returns the file path.
///
/// The `TempDir` must be kept alive for as long as the file is needed.
pub fn create_temp_config_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, content).expect("Failed to write config file");
    (path, temp_dir)
}

/// Serializes `config` and writes it to a temp file.
pub fn create_temp_config(config: &Value) -> (PathBuf, TempDir) {
    create_temp_config_file(&serde_json::to_string_pretty(config).unwrap())
}
