//! Command to express one path relative to another.

use crate::error::CliError;
use crate::utils::{logger, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use winarg::winpath::normalize_for_comparison;

/// Compute the shortest relative path from BASE to PATH.
///
/// Both inputs must already be normalized: `\` separators, no trailing
/// separator, and either both absolute under the same drive or both
/// relative. Use --normalize to apply lexical normalization first.
#[derive(Args)]
pub struct RelativeToCommand {
    /// Path to express relative to the base
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base the relative path starts from
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Case-fold and separator-normalize both inputs first
    #[arg(long)]
    pub normalize: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output shape for the relative-to command.
#[derive(Serialize)]
struct RelativeToOutput<'a> {
    path: &'a str,
    base: &'a str,
    relative: &'a str,
}

impl RelativeToCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let log = logger(global);

        let (path, base) = if self.normalize {
            (
                normalize_for_comparison(&self.path),
                normalize_for_comparison(&self.base),
            )
        } else {
            (self.path.clone(), self.base.clone())
        };

        if !self.normalize && (path.contains('/') || base.contains('/')) {
            return Err(CliError::InvalidArguments(
                "paths must use \\ separators; pass --normalize to convert".to_string(),
            ));
        }

        log.debug(&format!("relativizing {path} against {base}"));

        let relative = winarg::relative_to(&path, &base)?;

        if self.json {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let output = RelativeToOutput {
                path: &path,
                base: &base,
                relative: &relative,
            };
            serde_json::to_writer_pretty(&mut handle, &output)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            writeln!(handle)?;
        } else {
            println!("{relative}");
        }
        Ok(())
    }
}
