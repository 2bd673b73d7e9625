//! Data models for keyboard profiles and VIA configuration files.

pub mod keyboard;
pub mod via_config;

pub use keyboard::{FixupTable, KeyboardKind, KeyboardProfile, GMMK, KEYCHRON};
pub use via_config::{Layer, ViaConfig};
