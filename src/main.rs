//! VIA Mapper - convert VIA keymaps between the Keychron Q1 Pro and the GMMK Pro
//!
//! Reads a VIA config exported from one board, detects which board it came
//! from and prints the equivalent config for the other board to stdout.
//! Status messages go to stderr.

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use via_mapper::cli::ConvertArgs;
use via_mapper::constants::{APP_BINARY_NAME, APP_NAME};

/// Maps between VIA configuration files for the Keychron Q1 Pro and the GMMK Pro.
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.convert.execute() {
        error!("{e}");
        std::process::exit(e.exit_code().code());
    }
}

/// Sends plain-text diagnostics to stderr so stdout carries only JSON.
///
/// The filter depends only on `--verbose`; the environment is not consulted.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .with_level(false),
        )
        .init();
}
