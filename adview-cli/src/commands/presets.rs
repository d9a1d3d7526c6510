//! Preset listing and application commands.

use std::path::Path;

use adview_core::models::WeightTriple;
use adview_core::presets::{
    WEIGHT_PRESETS, content_presets, find_content_preset, find_weight_preset,
};
use serde::Serialize;

use crate::cli::{OutputFormat, ScreenArgs};
use crate::error::CliError;
use crate::format::{ScreenReport, TextRenderer, describe_content, print_json, render_text_with};
use crate::util::{create_screen, load_config};

#[derive(Serialize)]
struct PresetEntry {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    weights: WeightTriple,
}

/// Presets listing command handler
pub fn cmd_presets(format: OutputFormat) -> Result<(), CliError> {
    let mut entries: Vec<PresetEntry> = WEIGHT_PRESETS
        .iter()
        .map(|p| PresetEntry {
            name: p.name,
            label: p.label,
            kind: "weights",
            weights: p.weights,
        })
        .collect();
    let contents = content_presets();
    entries.extend(contents.iter().map(|p| PresetEntry {
        name: p.name,
        label: p.label,
        kind: "content",
        weights: p.content.weights(),
    }));

    match format {
        OutputFormat::Text => {
            println!("Weight presets:");
            for entry in entries.iter().filter(|e| e.kind == "weights") {
                println!("  {:<16} {:<18} {}", entry.name, entry.label, entry.weights);
            }
            println!("Content presets:");
            for preset in &contents {
                println!("  {:<16} {}", preset.name, preset.label);
                for (region, descriptor) in preset.content.iter() {
                    println!(
                        "    {:<6} w={:.1}  {}",
                        region,
                        descriptor.weight,
                        describe_content(&descriptor.content)
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

/// Apply preset command handler
pub fn cmd_apply(
    config_path: Option<&Path>,
    name: &str,
    format: OutputFormat,
    screen: ScreenArgs,
) -> Result<(), CliError> {
    let config = load_config(config_path);
    let (_, controller) = create_screen(&config)?;

    let mut renderer = TextRenderer::new();
    render_text_with(&mut renderer, &controller.state(), screen);

    if let Some(preset) = find_weight_preset(name) {
        controller.set_weights(preset.weights)?;
        tracing::info!(preset = preset.name, "Applied weight preset");
    } else if let Some(preset) = find_content_preset(name) {
        controller.apply_preset(&preset.content)?;
        tracing::info!(preset = preset.name, "Applied content preset");
    } else {
        return Err(CliError::PresetNotFound(name.to_string()));
    }

    let state = controller.state();
    match format {
        OutputFormat::Text => {
            let text = render_text_with(&mut renderer, &state, screen);
            println!(
                "Applied preset '{}', {} region(s) replaced",
                name.to_lowercase(),
                renderer.released()
            );
            println!("{text}");
        }
        OutputFormat::Json => print_json(&ScreenReport::new(&config.ad_id, &state, screen))?,
    }
    Ok(())
}
