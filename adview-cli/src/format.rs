//! Text and JSON output for the screen.

use std::fmt::Write as _;

use adview_core::models::{Content, ContentDescriptor, Region, WeightTriple};
use adview_core::render::{RenderArea, Renderer, layout_areas, render_screen};
use adview_core::screen::UiState;
use serde::Serialize;

use crate::cli::ScreenArgs;
use crate::error::CliError;

/// Renders regions as lines of text.
///
/// Remembers what each region showed last so that replacing a descriptor
/// releases the previous one first.
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
    loaded: [Option<Content>; 3],
    released: usize,
}

impl TextRenderer {
    /// Creates an empty renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lines rendered so far
    pub fn take_output(&mut self) -> String {
        let output = self.lines.join("\n");
        self.lines.clear();
        output
    }

    /// Number of descriptors released because a region got new content
    #[must_use]
    pub const fn released(&self) -> usize {
        self.released
    }

    fn load(&mut self, region: Region, content: &Content) {
        let slot = &mut self.loaded[region.index()];
        if slot.as_ref() == Some(content) {
            return;
        }
        if let Some(previous) = slot.take() {
            tracing::debug!(region = %region, kind = %previous.kind(), "Releasing region media");
            self.released += 1;
        }
        tracing::debug!(region = %region, kind = %content.kind(), "Loading region media");
        *slot = Some(content.clone());
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, descriptor: &ContentDescriptor, area: RenderArea) {
        self.load(area.region, &descriptor.content);
        if area.region != Region::Top {
            let divider = area.region.index();
            self.lines.push(format!("  ---- divider {divider} ----"));
        }
        self.lines.push(format!(
            "{:<6} {:>7.1}dp  w={:.3}  {}",
            area.region.as_str().to_uppercase(),
            area.height,
            descriptor.weight,
            describe_content(&descriptor.content)
        ));
    }
}

/// One-line description of region content
#[must_use]
pub fn describe_content(content: &Content) -> String {
    match content {
        Content::Image { url } => format!("IMAGE {url}"),
        Content::Video { url } => format!("VIDEO {url}"),
        Content::ImageSlider { urls, .. } if urls.is_empty() => {
            "IMAGE_SLIDER (placeholder)".to_string()
        }
        Content::ImageSlider {
            urls,
            transition_delay_ms,
        } => format!(
            "IMAGE_SLIDER {} images every {transition_delay_ms}ms, first {}",
            urls.len(),
            urls[0]
        ),
        Content::Empty => "EMPTY (placeholder)".to_string(),
    }
}

/// Formats weights with their percentage shares
#[must_use]
pub fn format_weights(weights: WeightTriple) -> String {
    let (top, middle, bottom) = weights.to_percentages();
    format!("{weights}  ({top}% / {middle}% / {bottom}%)")
}

/// Renders the whole screen as text
pub fn render_text(state: &UiState, screen: ScreenArgs) -> String {
    render_text_with(&mut TextRenderer::new(), state, screen)
}

/// Renders the whole screen as text through an existing renderer
pub fn render_text_with(renderer: &mut TextRenderer, state: &UiState, screen: ScreenArgs) -> String {
    render_screen(renderer, &state.content(), screen.width, screen.height);

    let mut output = String::new();
    let _ = writeln!(output, "Weights: {}", format_weights(state.weights));
    if let Some(error) = &state.error {
        let _ = writeln!(output, "Error:   {error}");
    }
    output.push_str(&renderer.take_output());
    output
}

/// JSON document describing the screen
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenReport<'a> {
    /// Identifier of the ad
    pub ad_id: &'a str,
    /// Published state
    pub state: &'a UiState,
    /// Truncated percentage share per region
    pub percentages: [u32; 3],
    /// Area per region
    pub areas: [RenderArea; 3],
}

impl<'a> ScreenReport<'a> {
    /// Builds a report for `state` laid out on `screen`
    #[must_use]
    pub fn new(ad_id: &'a str, state: &'a UiState, screen: ScreenArgs) -> Self {
        let (top, middle, bottom) = state.weights.to_percentages();
        Self {
            ad_id,
            state,
            percentages: [top, middle, bottom],
            areas: layout_areas(state.weights, screen.width, screen.height),
        }
    }
}

/// Pretty-prints any serializable value as JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
