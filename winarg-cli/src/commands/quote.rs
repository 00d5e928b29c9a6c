//! Command to quote tokens for the native argv convention.

use crate::error::CliError;
use crate::utils::{logger, GlobalOptions};
use clap::Args;

/// Quote tokens so that the CreateProcessW argv splitter decodes them back
/// to the original characters.
#[derive(Args)]
pub struct QuoteCommand {
    /// Tokens to quote
    #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Join the quoted tokens into a single command line
    #[arg(long)]
    pub join: bool,
}

impl QuoteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let log = logger(global);
        log.debug(&format!(
            "quoting {} token(s) for the native argv convention",
            self.tokens.len()
        ));

        let quoted: Vec<String> = self.tokens.iter().map(|t| winarg::quote(t)).collect();

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
