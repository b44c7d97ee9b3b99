//! Main entry point for tabrecon CLI

use clap::Parser;
use tabrecon::cli::Cli;
use tabrecon::commands::execute_command;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; --silent keeps only errors
    let level = if cli.silent {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Execute the command. Failures are reported and no output file is
    // written; the process still exits cleanly.
    if let Err(e) = execute_command(cli.command, &cli.format, cli.silent) {
        log::error!("{}", e);
    }
}
