//! Command handler modules for the CLI.

mod completions;
mod drag;
mod fetch;
mod layout;
mod manpage;
mod presets;
mod show;
mod validate;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show { format, screen } => show::cmd_show(config_path, format, screen),
        Commands::Drag {
            divider,
            deltas,
            density,
            cancel,
            format,
            screen,
        } => drag::cmd_drag(
            config_path,
            &drag::DragParams {
                divider: divider.into(),
                deltas: &deltas,
                density,
                cancel,
                format,
                screen,
            },
        ),
        Commands::Layout { weights, screen } => layout::cmd_layout(config_path, weights, screen),
        Commands::Presets { format } => presets::cmd_presets(format),
        Commands::Apply {
            name,
            format,
            screen,
        } => presets::cmd_apply(config_path, &name, format, screen),
        Commands::Validate { file } => validate::cmd_validate(&file),
        Commands::Fetch {
            campaign,
            latency_ms,
            format,
        } => fetch::cmd_fetch(&campaign, latency_ms, format),
        Commands::Completions { shell, out_dir } => {
            completions::cmd_completions(shell, out_dir.as_deref())
        }
        Commands::Manpage { out_dir } => manpage::cmd_manpage(out_dir.as_deref()),
    }
}
