//! Parsing and serialization of VIA configuration files.

pub mod via_json;

// Re-export commonly used functions
pub use via_json::{parse_via_config, parse_via_config_file, save_via_config, to_pretty_json};
