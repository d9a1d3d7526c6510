//! Show screen command.

use std::path::Path;

use crate::cli::{OutputFormat, ScreenArgs};
use crate::error::CliError;
use crate::format::{ScreenReport, print_json, render_text};
use crate::util::{create_screen, load_config};

/// Show screen command handler
pub fn cmd_show(
    config_path: Option<&Path>,
    format: OutputFormat,
    screen: ScreenArgs,
) -> Result<(), CliError> {
    let config = load_config(config_path);
    let (_, controller) = create_screen(&config)?;
    let state = controller.state();

    match format {
        OutputFormat::Text => {
            println!("Ad: {}", config.ad_id);
            println!(
                "Resize: {}  Auto-save: {}",
                on_off(config.enable_user_resize),
                on_off(config.auto_save)
            );
            println!("{}", render_text(&state, screen));
        }
        OutputFormat::Json => print_json(&ScreenReport::new(&config.ad_id, &state, screen))?,
    }
    Ok(())
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
