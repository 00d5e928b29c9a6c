//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `quote`: quote tokens for the native CreateProcessW argv convention
//! - `bash_quote`: quote tokens for a shell-style command string
//! - `relative_to`: express one path relative to another
//! - `completions`: generate shell completion scripts

pub mod bash_quote;
pub mod completions;
pub mod quote;
pub mod relative_to;

pub use bash_quote::BashQuoteCommand;
pub use completions::CompletionsCommand;
pub use quote::QuoteCommand;
pub use relative_to::RelativeToCommand;
