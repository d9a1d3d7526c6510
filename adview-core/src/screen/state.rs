//! Observable state of the ad screen.

use serde::Serialize;

use crate::models::{AdContent, Content, ContentDescriptor, Region, WeightTriple};
use crate::resize::Divider;

/// Everything a host needs to draw the screen.
///
/// Descriptor weights always mirror `weights`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Top region
    pub top: ContentDescriptor,
    /// Middle region
    pub middle: ContentDescriptor,
    /// Bottom region
    pub bottom: ContentDescriptor,
    /// Weights currently drawn, possibly provisional during a drag
    pub weights: WeightTriple,
    /// True until the first load completes
    pub is_loading: bool,
    /// Message from the last failed operation
    pub error: Option<String>,
    /// Divider being dragged, if any
    pub dragging: Option<Divider>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            top: Content::image("").into(),
            middle: Content::video("").into(),
            bottom: Content::image("").into(),
            weights: WeightTriple::DEFAULT,
            is_loading: true,
            error: None,
            dragging: None,
        }
    }
}

impl UiState {
    /// Returns the descriptor for a region
    #[must_use]
    pub const fn descriptor(&self, region: Region) -> &ContentDescriptor {
        match region {
            Region::Top => &self.top,
            Region::Middle => &self.middle,
            Region::Bottom => &self.bottom,
        }
    }

    /// Returns the three descriptors as one value
    #[must_use]
    pub fn content(&self) -> AdContent {
        AdContent::new(self.top.clone(), self.middle.clone(), self.bottom.clone())
    }

    /// Replaces the weights and the mirrored descriptor weights.
    pub fn apply_weights(&mut self, weights: WeightTriple) {
        self.weights = weights;
        self.top.weight = weights.top;
        self.middle.weight = weights.middle;
        self.bottom.weight = weights.bottom;
    }

    /// Replaces all descriptors; weights are taken from `content`.
    pub fn apply_content(&mut self, content: AdContent) {
        let weights = content.weights();
        self.top = content.top;
        self.middle = content.middle;
        self.bottom = content.bottom;
        self.weights = weights;
    }
}
