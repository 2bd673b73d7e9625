//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the reserved placeholder keycode.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "VIA Mapper";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "via-mapper";

/// Keycode VIA uses for a physical position with nothing assigned.
pub const PLACEHOLDER_KEYCODE: &str = "KC_NO";
