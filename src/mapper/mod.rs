//! Layout mapper: re-projects VIA layers from one board onto the other.
//!
//! Positions are matched by keycode identity between the two static layouts
//! (see [`crate::models::keyboard`]). Every layer of the input is mapped
//! independently with the same index mapping; positions that exist on only
//! one board are dropped on the way out and filled with `KC_NO` on the way in.

mod error;

pub use error::{MapError, MapErrorKind};

use crate::constants::PLACEHOLDER_KEYCODE;
use crate::models::{FixupTable, KeyboardKind, Layer, ViaConfig};
use tracing::{debug, info, warn};

/// Source-to-destination position pairs, ascending by source position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMapping {
    pairs: Vec<(usize, usize)>,
}

impl IndexMapping {
    /// All `(source, destination)` pairs in source order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Destination position for `source`, if it has one.
    pub fn get(&self, source: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|(src, _)| *src == source)
            .map(|(_, dst)| *dst)
    }

    /// Number of mapped positions.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no position is mapped.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Detects which board produced `config` from its `vendorProductId`.
///
/// Identifiers must match exactly. Returns `None` for any other value.
pub fn detect(config: &ViaConfig) -> Option<KeyboardKind> {
    KeyboardKind::ALL
        .into_iter()
        .map(KeyboardKind::profile)
        .find(|profile| profile.vendor_product_id == config.vendor_product_id())
        .map(|profile| profile.kind)
}

/// Logs which board was detected and which one it will be mapped to.
pub fn announce_plan(source: KeyboardKind) {
    info!("Detected {} config.", source);
    info!("Mapping to a {} config...", source.other());
}

/// Builds the position mapping from `source` to `dest`.
///
/// Each non-placeholder keycode in `source` is matched to its *first*
/// occurrence in `dest`. Keycodes missing from `dest` are skipped.
pub fn build_index_mapping(source: &[&str], dest: &[&str]) -> IndexMapping {
    let pairs = source
        .iter()
        .enumerate()
        .filter(|(_, key)| **key != PLACEHOLDER_KEYCODE)
        .filter_map(|(src, key)| dest.iter().position(|d| d == key).map(|dst| (src, dst)))
        .collect();

    IndexMapping { pairs }
}

/// Maps one layer onto a destination layer of `dest_len` positions.
///
/// Destination positions without an incoming mapping, and those whose source
/// key is `KC_NO`, stay `KC_NO`. Source keys present in `fixups` are written as
/// their replacement.
pub fn map_layer(
    layer: &[String],
    dest_len: usize,
    mapping: &IndexMapping,
    fixups: &FixupTable,
) -> Layer {
    let mut mapped = vec![PLACEHOLDER_KEYCODE.to_string(); dest_len];

    for &(src, dst) in mapping.pairs() {
        let Some(key) = layer.get(src) else {
            continue;
        };
        if key == PLACEHOLDER_KEYCODE {
            continue;
        }
        if let Some(slot) = mapped.get_mut(dst) {
            *slot = fixups.apply(key).to_string();
        }
    }

    mapped
}

/// Converts `config`, exported from `source`, into a config for the other board.
///
/// The input is left untouched. `name` and `vendorProductId` are replaced by
/// the destination board's identity, every layer is re-projected in order,
/// and all other fields are copied through. Fields keep their input order.
pub fn map_config(config: &ViaConfig, source: KeyboardKind) -> Result<ViaConfig, MapError> {
    let from = source.profile();
    let to = source.other().profile();

    let layers = config
        .layers()
        .ok_or_else(|| {
            MapError::new(
                MapErrorKind::MissingLayers,
                "config has no \"layers\" field",
            )
        })?
        .map_err(|e| MapError::new(MapErrorKind::MalformedLayers, e.to_string()))?;

    validate_layers(&layers, from.layer_len())?;

    let mapping = build_index_mapping(from.layout, to.layout);
    debug!(
        mapped = mapping.len(),
        source_positions = from.layer_len(),
        dest_positions = to.layer_len(),
        "Built index mapping"
    );

    let mut new_layers = Vec::with_capacity(layers.len());
    for (idx, layer) in layers.iter().enumerate() {
        log_layer_details(idx, layer, &mapping, &from.fixups);
        new_layers.push(map_layer(layer, to.layer_len(), &mapping, &from.fixups));
    }

    let mut converted = config.clone();
    converted.set_identity(to.name, to.vendor_product_id);
    converted.set_layers(&new_layers);
    Ok(converted)
}

/// Rejects layers too short to index with the source layout.
fn validate_layers(layers: &[Layer], expected: usize) -> Result<(), MapError> {
    for (idx, layer) in layers.iter().enumerate() {
        if layer.len() < expected {
            return Err(MapError::new(
                MapErrorKind::LayerTooShort,
                format!("expected {} keycodes, found {}", expected, layer.len()),
            )
            .with_layer(idx));
        }
        if layer.len() > expected {
            warn!(
                "Layer {} has {} keycodes, ignoring the last {}",
                idx,
                layer.len(),
                layer.len() - expected
            );
        }
    }
    Ok(())
}

fn log_layer_details(idx: usize, layer: &[String], mapping: &IndexMapping, fixups: &FixupTable) {
    for (src, key) in layer.iter().enumerate() {
        if key == PLACEHOLDER_KEYCODE {
            continue;
        }
        match mapping.get(src) {
            None => debug!("Layer {}: dropping {} at position {}", idx, key, src),
            Some(dst) => {
                if let Some(fixed) = fixups.get(key) {
                    debug!(
                        "Layer {}: {} at position {} becomes {} at position {}",
                        idx, key, src, fixed, dst
                    );
                }
            }
        }
    }
}
