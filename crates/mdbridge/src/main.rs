//! mdbridge CLI entry point.

mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = args::Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = commands::run(&args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logging goes to stderr so piped stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
