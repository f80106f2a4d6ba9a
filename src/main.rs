use clap::Parser;
use helm_images::cli::{Cli, Commands};
use helm_images::handlers;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> helm_images::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    match &cli.command {
        Commands::Get(args) => handlers::handle_get(args, cli.config.as_deref()),
        Commands::Version => handlers::handle_version(),
    }
}
