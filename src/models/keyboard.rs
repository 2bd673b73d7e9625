//! Static keyboard profiles for the two supported boards.
//!
//! Each profile pairs the VIA identity of a board (`vendorProductId` and
//! `name`) with its layout: one keycode per physical position, in the order
//! VIA exports layer arrays. Positions are correlated across boards purely by
//! keycode identity, so both layouts use the same token wherever the physical
//! key is the same even if the factory keymap differs (Keychron's `KC_PSCR`
//! ships as `KC_DEL`, both boards' Fn key ships as `MO(n)`, GMMK's `KC_HOME`
//! ships as `KC_END`).

use std::fmt;

/// The boards this tool knows how to convert between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardKind {
    /// Keychron Q1 Pro (ANSI, knob)
    Keychron,
    /// Glorious GMMK Pro
    Gmmk,
}

impl KeyboardKind {
    /// All supported boards, in detection order.
    pub const ALL: [Self; 2] = [Self::Keychron, Self::Gmmk];

    /// Returns the static profile for this board.
    #[must_use]
    pub fn profile(self) -> &'static KeyboardProfile {
        match self {
            Self::Keychron => &KEYCHRON,
            Self::Gmmk => &GMMK,
        }
    }

    /// Returns the board a config from this board gets converted to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Keychron => Self::Gmmk,
            Self::Gmmk => Self::Keychron,
        }
    }
}

impl fmt::Display for KeyboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile().display_name)
    }
}

/// Keycode corrections applied when converting *from* a board.
///
/// Exports from some boards contain vendor-specific tokens (e.g. Keychron's
/// `CUSTOM(n)` macros for the Mac/Win modifier swap) that mean nothing on the
/// other board. Each entry maps such a token to the standard QMK keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixupTable {
    entries: &'static [(&'static str, &'static str)],
}

impl FixupTable {
    /// Creates a fixup table from `(legacy, replacement)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the replacement for `keycode`, if one is defined.
    pub fn get(&self, keycode: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(legacy, _)| *legacy == keycode)
            .map(|(_, replacement)| *replacement)
    }

    /// Returns the replacement for `keycode`, or `keycode` itself.
    pub fn apply<'a>(&self, keycode: &'a str) -> &'a str {
        self.get(keycode).unwrap_or(keycode)
    }
}

/// Immutable description of one physical keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardProfile {
    /// Which board this is
    pub kind: KeyboardKind,
    /// VIA `vendorProductId` ((vendor id << 16) | product id)
    pub vendor_product_id: i64,
    /// VIA `name` written into exported configs
    pub name: &'static str,
    /// Human-readable board name used in diagnostics
    pub display_name: &'static str,
    /// Keycode per physical position, in VIA layer order
    pub layout: &'static [&'static str],
    /// Corrections for tokens found in this board's exports
    pub fixups: FixupTable,
}

impl KeyboardProfile {
    /// Number of positions in one layer of this board.
    pub const fn layer_len(&self) -> usize {
        self.layout.len()
    }
}

/// Keychron Q1 Pro ANSI knob layout (96 positions).
pub static KEYCHRON_LAYOUT: [&str; 96] = [
    "KC_ESC", "KC_F1", "KC_F2", "KC_F3", "KC_F4", "KC_F5", "KC_F6", "KC_F7",
    "KC_F8", "KC_F9", "KC_F10", "KC_F11", "KC_F12", "KC_PSCR", "KC_NO", "KC_MUTE",
    "KC_GRV", "KC_1", "KC_2", "KC_3", "KC_4", "KC_5", "KC_6", "KC_7",
    "KC_8", "KC_9", "KC_0", "KC_MINS", "KC_EQL", "KC_BSPC", "KC_NO", "KC_PGUP",
    "KC_TAB", "KC_Q", "KC_W", "KC_E", "KC_R", "KC_T", "KC_Y", "KC_U",
    "KC_I", "KC_O", "KC_P", "KC_LBRC", "KC_RBRC", "KC_BSLS", "KC_NO", "KC_PGDN",
    "KC_CAPS", "KC_A", "KC_S", "KC_D", "KC_F", "KC_G", "KC_H", "KC_J",
    "KC_K", "KC_L", "KC_SCLN", "KC_QUOT", "KC_NO", "KC_ENT", "KC_NO", "KC_HOME",
    "KC_LSFT", "KC_NO", "KC_Z", "KC_X", "KC_C", "KC_V", "KC_B", "KC_N",
    "KC_M", "KC_COMM", "KC_DOT", "KC_SLSH", "KC_NO", "KC_RSFT", "KC_UP", "KC_NO",
    "KC_LCTL", "KC_LGUI", "KC_LALT", "KC_NO", "KC_NO", "KC_NO", "KC_SPC", "KC_NO",
    "KC_NO", "KC_NO", "KC_RALT", "KC_FN", "KC_RCTL", "KC_LEFT", "KC_DOWN", "KC_RGHT",
];

/// GMMK Pro ANSI layout (88 positions), in matrix order.
///
/// Position 53 (`KC_DEL`, right of F12) has no Keychron counterpart.
pub static GMMK_LAYOUT: [&str; 88] = [
    "KC_LSFT", "KC_MUTE", "KC_NO", "KC_LEFT", "KC_RCTL", "KC_RGHT", "KC_LCTL", "KC_F5",
    "KC_Q", "KC_TAB", "KC_A", "KC_ESC", "KC_Z", "KC_PGUP", "KC_GRV", "KC_1",
    "KC_W", "KC_CAPS", "KC_S", "KC_NO", "KC_X", "KC_PGDN", "KC_F1", "KC_2",
    "KC_E", "KC_F3", "KC_D", "KC_F4", "KC_C", "KC_UP", "KC_F2", "KC_3",
    "KC_R", "KC_T", "KC_F", "KC_G", "KC_V", "KC_B", "KC_5", "KC_4",
    "KC_U", "KC_Y", "KC_J", "KC_H", "KC_M", "KC_N", "KC_6", "KC_7",
    "KC_I", "KC_RBRC", "KC_K", "KC_F6", "KC_COMM", "KC_DEL", "KC_EQL", "KC_8",
    "KC_O", "KC_F7", "KC_L", "KC_DOWN", "KC_DOT", "KC_HOME", "KC_F8", "KC_9",
    "KC_P", "KC_LBRC", "KC_SCLN", "KC_QUOT", "KC_NO", "KC_SLSH", "KC_MINS", "KC_0",
    "KC_LGUI", "KC_RSFT", "KC_FN", "KC_LALT", "KC_SPC", "KC_RALT", "KC_NO", "KC_PSCR",
    "KC_NO", "KC_BSPC", "KC_BSLS", "KC_F11", "KC_ENT", "KC_F12", "KC_F9", "KC_F10",
];

/// Keychron exports encode the Mac/Win modifier swap as custom keycodes.
pub const KEYCHRON_FIXUPS: FixupTable = FixupTable::new(&[
    ("CUSTOM(0)", "KC_LALT"),
    ("CUSTOM(1)", "KC_RALT"),
    ("CUSTOM(3)", "KC_RGUI"),
]);

/// GMMK exports only use standard keycodes.
pub const GMMK_FIXUPS: FixupTable = FixupTable::new(&[]);

/// Keychron Q1 Pro profile.
pub static KEYCHRON: KeyboardProfile = KeyboardProfile {
    kind: KeyboardKind::Keychron,
    vendor_product_id: 875_824_656,
    name: "Keyboard 81 Pro/Q1 Pro ANSI RGB Knob",
    display_name: "Keychron Q1 Pro",
    layout: &KEYCHRON_LAYOUT,
    fixups: KEYCHRON_FIXUPS,
};

/// GMMK Pro profile.
pub static GMMK: KeyboardProfile = KeyboardProfile {
    kind: KeyboardKind::Gmmk,
    vendor_product_id: 839_864_388,
    name: "GMMK Pro",
    display_name: "GMMK Pro",
    layout: &GMMK_LAYOUT,
    fixups: GMMK_FIXUPS,
};
