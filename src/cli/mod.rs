//! CLI command handlers for VIA Mapper.

pub mod common;
pub mod convert;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use convert::ConvertArgs;
