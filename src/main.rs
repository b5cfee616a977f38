use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use fxgen::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // --verbose raises the default filter; an explicit RUST_LOG still wins
    let default_level = if args.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Starting fxgen v{}", env!("CARGO_PKG_VERSION"));

    cli::run(args)
}
