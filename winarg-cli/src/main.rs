//! Main entry point for the winarg CLI.
//!
//! This is the command-line interface for the winarg quoting and relative
//! path library. It provides commands for building launcher command lines:
//! - `quote`: quote tokens for the native CreateProcessW argv convention
//! - `bash-quote`: quote tokens for a shell-style command string
//! - `relative-to`: express one path relative to another

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = winarg::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Quote(cmd) => cmd.execute(&global),
        cli::Command::BashQuote(cmd) => cmd.execute(&global),
        cli::Command::RelativeTo(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
