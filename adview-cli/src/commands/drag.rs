//! Drag simulation command.

use std::path::Path;

use adview_core::resize::{Divider, pointer_delta_to_dp};
use adview_core::store::ContentStore;
use serde::Serialize;

use crate::cli::{OutputFormat, ScreenArgs};
use crate::error::CliError;
use crate::format::{format_weights, print_json, render_text};
use crate::util::{create_screen, load_config};

/// Parameters for the drag command
pub struct DragParams<'a> {
    /// Divider being dragged
    pub divider: Divider,
    /// Move events in dp, or pixels when `density` is set
    pub deltas: &'a [f64],
    /// Display density for pixel deltas
    pub density: Option<f64>,
    /// End the gesture as a cancel
    pub cancel: bool,
    /// Output format
    pub format: OutputFormat,
    /// Screen size for the rendered result
    pub screen: ScreenArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DragReport {
    divider: Divider,
    accumulated_dp: f64,
    ignored_events: usize,
    weights: adview_core::models::WeightTriple,
    persisted: adview_core::models::WeightTriple,
    saved: bool,
}

/// Drag command handler
pub fn cmd_drag(config_path: Option<&Path>, params: &DragParams<'_>) -> Result<(), CliError> {
    let config = load_config(config_path);
    let (store, mut controller) = create_screen(&config)?;

    controller.drag_start(params.divider)?;

    let mut accumulated = 0.0;
    let mut ignored = 0;
    for &delta in params.deltas {
        let dp = match params.density {
            Some(density) => pointer_delta_to_dp(delta, density),
            None => Some(delta),
        };
        let Some(dp) = dp else {
            tracing::debug!(delta, "Move event dropped at zero density");
            ignored += 1;
            continue;
        };
        accumulated += dp;
        controller.drag_move(dp)?;
    }

    let weights = if params.cancel {
        controller.drag_cancel()?
    } else {
        controller.drag_end()?
    };
    let persisted = store
        .get_weights()
        .map_err(|e| CliError::Store(e.to_string()))?;

    match params.format {
        OutputFormat::Text => {
            println!(
                "Dragged {} divider by {accumulated:.1}dp over {} events",
                params.divider,
                params.deltas.len() - ignored
            );
            if ignored > 0 {
                println!("Ignored {ignored} events at zero density");
            }
            println!("Result:    {}", format_weights(weights));
            println!(
                "Persisted: {}{}",
                format_weights(persisted),
                if config.auto_save { "" } else { "  (auto-save off)" }
            );
            println!("{}", render_text(&controller.state(), params.screen));
        }
        OutputFormat::Json => print_json(&DragReport {
            divider: params.divider,
            accumulated_dp: accumulated,
            ignored_events: ignored,
            weights,
            persisted,
            saved: persisted == weights,
        })?,
    }
    Ok(())
}
