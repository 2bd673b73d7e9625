//! VIA Mapper Library
//!
//! Converts VIA keymap exports between the Keychron Q1 Pro and the GMMK Pro.
//! The two boards share VIA's JSON schema but order their physical keys
//! differently, so every layer has to be re-indexed.

// Module declarations
pub mod cli;
pub mod constants;
pub mod mapper;
pub mod models;
pub mod parser;
