//! CLI entry point for the map generator

use clap::Parser;
use tilegrow::io::cli::{Cli, MapRunner};

fn main() -> tilegrow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    MapRunner::new(cli).run().map(|_| ())
}
