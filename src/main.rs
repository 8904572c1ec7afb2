use anyhow::Result;
use clap::Parser;

use calcdgtl::cli::{Cli, run};
use calcdgtl::config::init_config;
use calcdgtl::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting calcdgtl");
    init_config();

    run(cli)
}
