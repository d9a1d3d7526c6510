//! Man pages via `clap_mangen`.

use std::fs::File;
use std::path::Path;

use clap::{Command, CommandFactory};
use clap_mangen::Man;

use crate::cli::{BIN_NAME, Cli};
use crate::error::CliError;

/// Renders the top-level man page to stdout.
///
/// With `out_dir`, writes `adview-cli.1` plus one `adview-cli-<command>.1`
/// page per subcommand and prints each path.
pub fn cmd_manpage(out_dir: Option<&Path>) -> Result<(), CliError> {
    let cmd = Cli::command();
    let Some(dir) = out_dir else {
        Man::new(cmd).render(&mut std::io::stdout())?;
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;
    write_page(dir, BIN_NAME, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        write_page(dir, &format!("{BIN_NAME}-{}", sub.get_name()), sub.clone())?;
    }
    Ok(())
}

fn write_page(dir: &Path, title: &str, cmd: Command) -> Result<(), CliError> {
    let path = dir.join(format!("{title}.1"));
    let mut file = File::create(&path)?;
    Man::new(cmd).title(title).render(&mut file)?;
    tracing::debug!(path = %path.display(), "Man page written");
    println!("{}", path.display());
    Ok(())
}
