//! Shared utility functions used across command modules.

use std::path::Path;
use std::sync::Arc;

use adview_core::config::{AdConfig, ConfigLoader};
use adview_core::models::WeightTriple;
use adview_core::screen::{ScreenController, ScreenOptions};
use adview_core::store::InMemoryContentStore;

use crate::error::CliError;

/// Loads the configuration from `config_path`, or the bundled resource.
///
/// Unreadable or invalid files fall back to the default configuration.
pub fn load_config(config_path: Option<&Path>) -> AdConfig {
    config_path.map_or_else(ConfigLoader::bundled, ConfigLoader::with_path).load()
}

/// Builds a loaded screen controller over a fresh store seeded from `config`.
pub fn create_screen(
    config: &AdConfig,
) -> Result<(Arc<InMemoryContentStore>, ScreenController), CliError> {
    let store = Arc::new(
        InMemoryContentStore::from_config(config)
            .map_err(|e| CliError::Config(e.to_string()))?,
    );
    let controller = ScreenController::new(store.clone(), ScreenOptions::from(config));
    controller.load()?;
    Ok((store, controller))
}

/// Parse weights written as `TOP,MIDDLE,BOTTOM`
pub fn parse_weights(s: &str) -> Result<WeightTriple, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid weight `{}`: {e}", part.trim()))
        })
        .collect::<Result<_, _>>()?;

    let [top, middle, bottom] = parts[..] else {
        return Err(format!("expected three weights TOP,MIDDLE,BOTTOM, got `{s}`"));
    };
    let weights = WeightTriple::new(top, middle, bottom);
    if !weights.is_valid() {
        return Err(format!("weights must be positive and finite, got `{s}`"));
    }
    Ok(weights)
}

/// Parse a finite number, rejecting `NaN` and infinities
pub fn parse_finite(s: &str) -> Result<f64, String> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number `{}`: {e}", s.trim()))?;
    if !value.is_finite() {
        return Err(format!("expected a finite number, got `{s}`"));
    }
    Ok(value)
}
