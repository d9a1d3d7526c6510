//! Fetch campaign command.

use std::time::Duration;

use adview_core::store::{RemoteAdSource, SimulatedRemoteSource};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{describe_content, print_json};

/// Fetch command handler
pub fn cmd_fetch(campaign: &str, latency_ms: u64, format: OutputFormat) -> Result<(), CliError> {
    let source = SimulatedRemoteSource::with_latency(Duration::from_millis(latency_ms));

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Remote(format!("Failed to create async runtime: {e}")))?;
    let content = runtime
        .block_on(source.fetch_content(campaign))
        .map_err(|e| CliError::Remote(e.to_string()))?;

    match format {
        OutputFormat::Text => {
            println!("Campaign '{campaign}':");
            for (region, descriptor) in content.iter() {
                println!(
                    "  {:<6} w={:.1}  {}",
                    region,
                    descriptor.weight,
                    describe_content(&descriptor.content)
                );
            }
        }
        OutputFormat::Json => print_json(&content)?,
    }
    Ok(())
}
