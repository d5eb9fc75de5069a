mod cli;
mod color;
mod graph;
mod perfdata;
mod rrd;
mod types;
mod updater;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the graph commands.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vmaxgraph=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli_opts = cli::Cli::parse();
    cli::run(cli_opts.command)
}
