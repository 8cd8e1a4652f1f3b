//! posttype CLI - inspect post-type definitions.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resolve { file, json } => commands::resolve::run(file, json, cli.verbose),

        Commands::Columns { file, base, json } => {
            commands::columns::run(file, base, json, cli.verbose)
        }

        Commands::Messages {
            file,
            permalink,
            date,
            revision,
        } => commands::messages::run(file, permalink, date, revision, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "posttype=debug" } else { "posttype=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
