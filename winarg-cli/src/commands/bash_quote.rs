//! Command to quote tokens for a shell-style command string.

use crate::error::CliError;
use crate::utils::{logger, GlobalOptions};
use clap::Args;

/// Quote tokens for a shell-style decoder, where every backslash is an
/// escape introducer.
#[derive(Args)]
pub struct BashQuoteCommand {
    /// Tokens to quote
    #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Join the quoted tokens into a single command line
    #[arg(long)]
    pub join: bool,
}

impl BashQuoteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let log = logger(global);
        log.debug(&format!(
            "quoting {} token(s) for the shell convention",
            self.tokens.len()
        ));

        let quoted: Vec<String> = self.tokens.iter().map(|t| winarg::bash_quote(t)).collect();

        if self.join {
            println!("{}", quoted.join(" "));
        } else {
            for token in quoted {
                println!("{token}");
            }
        }
        Ok(())
    }
}
