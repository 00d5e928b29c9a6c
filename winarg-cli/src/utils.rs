//! Utility functions for CLI operations.
//!
//! This module provides the global option set shared across CLI commands
//! and a helper for constructing the per-command logger.

use winarg::Logger;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Build a logger honoring the global verbosity flags and `WINARG_LOG_MODE`.
pub fn logger(global: &GlobalOptions) -> Logger {
    winarg::init_logger(global.verbose, global.quiet)
}
