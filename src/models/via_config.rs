//! VIA keymap export document.
//!
//! The whole document is kept as an insertion-ordered JSON object so that a
//! converted file lists its fields, including nested ones, in the same order
//! as the input. Only `vendorProductId` is checked up front; `layers` is
//! decoded on demand because an unknown board should be reported before its
//! layers are looked at.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One layer of a VIA export: a keycode per physical position.
pub type Layer = Vec<String>;

const NAME_KEY: &str = "name";
const VENDOR_PRODUCT_ID_KEY: &str = "vendorProductId";
const LAYERS_KEY: &str = "layers";

/// A VIA configuration file as exported by the VIA web app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ViaConfig {
    vendor_product_id: i64,
    document: Map<String, Value>,
}

impl ViaConfig {
    /// Creates a config with the given identity and layers and no other fields.
    pub fn new(name: impl Into<String>, vendor_product_id: i64, layers: &[Layer]) -> Self {
        let mut config = Self {
            vendor_product_id,
            document: Map::new(),
        };
        config.set_identity(name, vendor_product_id);
        config.set_layers(layers);
        config
    }

    /// (vendor id << 16) | product id
    pub const fn vendor_product_id(&self) -> i64 {
        self.vendor_product_id
    }

    /// Board name as VIA reports it.
    pub fn name(&self) -> Option<&str> {
        self.document.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Decodes the keymap layers, base layer first.
    ///
    /// Returns `None` when the document has no `layers` field and an error
    /// when it is not an array of keycode arrays.
    pub fn layers(&self) -> Option<serde_json::Result<Vec<Layer>>> {
        self.document.get(LAYERS_KEY).map(Vec::<Layer>::deserialize)
    }

    /// Raw value of any top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Top-level field names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Overwrites `name` and `vendorProductId`, keeping their position if present.
    pub fn set_identity(&mut self, name: impl Into<String>, vendor_product_id: i64) {
        self.vendor_product_id = vendor_product_id;
        self.document
            .insert(NAME_KEY.to_string(), Value::String(name.into()));
        self.document.insert(
            VENDOR_PRODUCT_ID_KEY.to_string(),
            Value::from(vendor_product_id),
        );
    }

    /// Replaces `layers`, keeping its position if present.
    pub fn set_layers(&mut self, layers: &[Layer]) {
        let layers = layers
            .iter()
            .map(|layer| Value::from(layer.clone()))
            .collect();
        self.document
            .insert(LAYERS_KEY.to_string(), Value::Array(layers));
    }
}

impl TryFrom<Map<String, Value>> for ViaConfig {
    type Error = String;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let vendor_product_id = match document.get(VENDOR_PRODUCT_ID_KEY) {
            Some(value) => value
                .as_i64()
                .ok_or_else(|| format!("\"{VENDOR_PRODUCT_ID_KEY}\" must be an integer, found {value}"))?,
            None => return Err(format!("missing field `{VENDOR_PRODUCT_ID_KEY}`")),
        };

        Ok(Self {
            vendor_product_id,
            document,
        })
    }
}

impl From<ViaConfig> for Map<String, Value> {
    fn from(config: ViaConfig) -> Self {
        config.document
    }
}
