mod cli;
mod commands;

use std::io::IsTerminal;
use std::process::exit;

use clap::Parser;
use cli::Cli;
use commands::{Link, RunOptions, Show};
use lnfarm_core::Mode;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry().with(layer).with(filter).init();

    if let Err(error) = run(&cli) {
        error!("{error:?}");
        exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = RunOptions {
        target: &cli.target,
        sources: &cli.sources,
        verbose: cli.verbose,
        config_path: cli.config.as_deref(),
        no_config: cli.no_config,
    };

    match cli.mode() {
        Mode::Show => Show::execute(&options),
        mode => Link::execute(&options, mode),
    }
}
