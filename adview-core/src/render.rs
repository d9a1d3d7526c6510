//! Region layout and the renderer contract.
//!
//! Media playback and image loading live outside this crate. A host
//! implements [`Renderer`] and receives one descriptor per region together
//! with the area it may draw into.

use serde::Serialize;

use crate::models::{AdContent, ContentDescriptor, Region, WeightTriple};

/// Height in dp of each of the two dividers between regions.
pub const DIVIDER_THICKNESS: f64 = 20.0;

/// Area assigned to one region, in dp
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderArea {
    /// Region drawn into this area
    pub region: Region,
    /// Offset from the top of the screen
    pub y: f64,
    /// Width of the area
    pub width: f64,
    /// Height of the area
    pub height: f64,
}

/// Draws region content.
///
/// The renderer owns media resources. When a region receives a descriptor
/// different from the previous one, resources held for the old descriptor
/// must be released before new ones are acquired.
pub trait Renderer {
    /// Draws `descriptor` into `area`
    fn render(&mut self, descriptor: &ContentDescriptor, area: RenderArea);
}

/// Splits `available` height into three region heights proportional to
/// `weights`, after reserving space for both dividers.
///
/// Falls back to equal thirds when the weight sum is not positive.
#[must_use]
pub fn layout_heights(weights: WeightTriple, available: f64) -> [f64; 3] {
    let usable = 2.0f64.mul_add(-DIVIDER_THICKNESS, available).max(0.0);
    let sum = weights.sum();
    if !(sum.is_finite() && sum > 0.0) {
        let third = usable / 3.0;
        return [third; 3];
    }
    weights.to_array().map(|w| usable * w / sum)
}

/// Computes the area of every region, top to bottom.
#[must_use]
pub fn layout_areas(weights: WeightTriple, width: f64, height: f64) -> [RenderArea; 3] {
    let heights = layout_heights(weights, height);
    let mut y = 0.0;
    Region::ALL.map(|region| {
        let area = RenderArea {
            region,
            y,
            width,
            height: heights[region.index()],
        };
        y += area.height + DIVIDER_THICKNESS;
        area
    })
}

/// Renders all three regions of `content` top to bottom.
///
/// Areas are laid out from the descriptor weights.
pub fn render_screen<R>(renderer: &mut R, content: &AdContent, width: f64, height: f64)
where
    R: Renderer + ?Sized,
{
    for area in layout_areas(content.weights(), width, height) {
        renderer.render(content.get(area.region), area);
    }
}
