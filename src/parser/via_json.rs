//! Reading and writing VIA JSON configuration files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::ViaConfig;

/// Parses a VIA configuration file.
///
/// # Arguments
///
/// * `path` - Path to a `.json` file exported from VIA
///
/// # Returns
///
/// * `Ok(ViaConfig)` - Successfully parsed config
/// * `Err(...)` - File not found, not UTF-8, or not a VIA document
pub fn parse_via_config_file(path: &Path) -> Result<ViaConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_via_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parses a VIA configuration from a JSON string.
pub fn parse_via_config(content: &str) -> Result<ViaConfig> {
    serde_json::from_str(content).context("Invalid VIA config JSON")
}

/// Renders a config as JSON with 2-space indentation.
pub fn to_pretty_json(config: &ViaConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")
}

/// Writes a config to `path`, replacing any existing file.
///
/// The JSON is written to a temporary sibling first and renamed into place so
/// an interrupted write never leaves a truncated config behind.
pub fn save_via_config(config: &ViaConfig, path: &Path) -> Result<()> {
    let mut json = to_pretty_json(config)?;
    json.push('\n');

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to rename temporary file to: {}", path.display()));
    }

    Ok(())
}
