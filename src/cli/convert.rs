//! Convert command: maps a VIA config to the other supported board.

use crate::cli::common::{CliError, CliResult};
use crate::mapper;
use crate::parser;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Convert a VIA config between the Keychron Q1 Pro and the GMMK Pro
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to the VIA config JSON exported from one of the boards
    #[arg(value_name = "FILE")]
    pub filename: PathBuf,

    /// Write the converted config to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = parser::parse_via_config_file(&self.filename)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let source = mapper::detect(&config).ok_or_else(|| {
            CliError::validation("Failed to detect which keyboard this config file is for.")
        })?;

        mapper::announce_plan(source);

        let converted = mapper::map_config(&config, source)
            .map_err(|e| CliError::validation(format!("Failed to map config: {e}")))?;

        if let Some(path) = &self.output {
            parser::save_via_config(&converted, path)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            info!("Wrote {}", path.display());
        } else {
            let json = parser::to_pretty_json(&converted)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io(format!("Failed to write to stdout: {e}")))?;
        }

        info!("Done.");
        Ok(())
    }
}
