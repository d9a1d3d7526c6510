//! Validate configuration command.

use std::path::Path;

use adview_core::config::ConfigLoader;

use crate::error::CliError;
use crate::format::describe_content;

/// Validate command handler
///
/// Unlike the other commands this never falls back to the default
/// configuration; the first problem found is reported as an error.
pub fn cmd_validate(file: &Path) -> Result<(), CliError> {
    let config = ConfigLoader::with_path(file)
        .try_load()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let content = config
        .to_content()
        .map_err(|e| CliError::Config(e.to_string()))?;

    println!("Configuration '{}' is valid", config.ad_id);
    for (region, descriptor) in content.iter() {
        println!(
            "  {:<6} w={:.3}  {}",
            region,
            descriptor.weight,
            describe_content(&descriptor.content)
        );
    }
    println!(
        "  bounds [{}, {}], resize {}, auto-save {}",
        config.min_weight,
        config.max_weight,
        if config.enable_user_resize { "on" } else { "off" },
        if config.auto_save { "on" } else { "off" }
    );
    Ok(())
}
