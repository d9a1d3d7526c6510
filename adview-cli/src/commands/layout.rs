//! Layout command.

use std::path::Path;

use adview_core::models::{Region, WeightTriple};
use adview_core::render::{DIVIDER_THICKNESS, layout_areas};

use crate::cli::ScreenArgs;
use crate::error::CliError;
use crate::util::load_config;

/// Layout command handler
pub fn cmd_layout(
    config_path: Option<&Path>,
    weights: Option<WeightTriple>,
    screen: ScreenArgs,
) -> Result<(), CliError> {
    if !(screen.height.is_finite() && screen.height >= 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "height must be a non-negative number, got {}",
            screen.height
        )));
    }
    let weights = weights.unwrap_or_else(|| load_config(config_path).initial_weights());

    println!("Weights: {weights}");
    println!(
        "Screen:  {}x{}dp, dividers {DIVIDER_THICKNESS}dp",
        screen.width, screen.height
    );
    for area in layout_areas(weights, screen.width, screen.height) {
        let label = match area.region {
            Region::Top => "TOP",
            Region::Middle => "MIDDLE",
            Region::Bottom => "BOTTOM",
        };
        println!("{label:<6}  y={:>7.1}  height={:>7.1}", area.y, area.height);
    }
    Ok(())
}
