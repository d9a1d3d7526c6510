//! Shell completion scripts.

use std::path::Path;

use clap::CommandFactory;
use clap_complete::{Shell, generate, generate_to};

use crate::cli::{BIN_NAME, Cli};
use crate::error::CliError;

/// Writes the completion script for `shell` to stdout, or into `out_dir`
/// under the shell's conventional file name.
pub fn cmd_completions(shell: Shell, out_dir: Option<&Path>) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let Some(dir) = out_dir else {
        generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;
    let path = generate_to(shell, &mut cmd, BIN_NAME, dir)?;
    tracing::info!(shell = %shell, path = %path.display(), "Completion script written");
    println!("{}", path.display());
    Ok(())
}
