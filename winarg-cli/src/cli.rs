//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{BashQuoteCommand, CompletionsCommand, QuoteCommand, RelativeToCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for quoting launcher arguments and relativizing paths.
#[derive(Parser)]
#[command(name = "winarg")]
#[command(version, about = "Quote launcher arguments and relativize paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Quote tokens for the native CreateProcessW argv convention
    Quote(QuoteCommand),

    /// Quote tokens for a shell-style command string
    BashQuote(BashQuoteCommand),

    /// Express one path relative to another
    RelativeTo(RelativeToCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
