//! Ad configuration resource schema.
//!
//! The configuration is a JSON document with camelCase keys describing the
//! content of each region, the initial weights and the resize policy.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{
    AdContent, Content, ContentDescriptor, ContentKind, DEFAULT_MAX_WEIGHT,
    DEFAULT_SLIDER_DELAY_MS, DEFAULT_WEIGHT, MIN_WEIGHT, Region, WeightTriple,
};

const fn default_true() -> bool {
    true
}

const fn default_min_weight() -> f64 {
    MIN_WEIGHT
}

const fn default_max_weight() -> f64 {
    DEFAULT_MAX_WEIGHT
}

const fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

const fn default_slider_delay() -> u64 {
    DEFAULT_SLIDER_DELAY_MS
}

/// Configuration of a single region as written in the resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Content type tag (`IMAGE`, `VIDEO`, `IMAGE_SLIDER`, `EMPTY`), case-insensitive
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary URL for image and video sections
    #[serde(default)]
    pub url: String,
    /// Image URLs for slider sections
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Slider transition delay in milliseconds
    #[serde(default = "default_slider_delay")]
    pub slider_delay_ms: u64,
}

impl SectionConfig {
    /// Creates a section with a type tag and primary URL
    #[must_use]
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
            image_urls: Vec::new(),
            slider_delay_ms: DEFAULT_SLIDER_DELAY_MS,
        }
    }

    /// Parses the type tag.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownContentType` for an unrecognised tag.
    pub fn content_kind(&self, region: Region) -> ConfigResult<ContentKind> {
        self.kind
            .parse()
            .map_err(|()| ConfigError::UnknownContentType {
                region: region.to_string(),
                kind: self.kind.clone(),
            })
    }

    /// Converts the section into content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownContentType` for an unrecognised tag.
    pub fn to_content(&self, region: Region) -> ConfigResult<Content> {
        Ok(match self.content_kind(region)? {
            ContentKind::Image => Content::image(self.url.clone()),
            ContentKind::Video => Content::video(self.url.clone()),
            ContentKind::ImageSlider => {
                Content::slider_with_delay(self.image_urls.clone(), self.slider_delay_ms)
            }
            ContentKind::Empty => Content::Empty,
        })
    }

    /// Builds a section from content, the inverse of [`Self::to_content`]
    #[must_use]
    pub fn from_content(content: &Content) -> Self {
        match content {
            Content::Image { url } => Self::new(ContentKind::Image.as_str(), url.clone()),
            Content::Video { url } => Self::new(ContentKind::Video.as_str(), url.clone()),
            Content::ImageSlider {
                urls,
                transition_delay_ms,
            } => Self {
                kind: ContentKind::ImageSlider.as_str().to_string(),
                url: String::new(),
                image_urls: urls.clone(),
                slider_delay_ms: *transition_delay_ms,
            },
            Content::Empty => Self::new(ContentKind::Empty.as_str(), ""),
        }
    }
}

/// Initial region weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Top region weight
    #[serde(default = "default_weight")]
    pub top: f64,
    /// Middle region weight
    #[serde(default = "default_weight")]
    pub middle: f64,
    /// Bottom region weight
    #[serde(default = "default_weight")]
    pub bottom: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_WEIGHT,
            middle: DEFAULT_WEIGHT,
            bottom: DEFAULT_WEIGHT,
        }
    }
}

impl From<WeightConfig> for WeightTriple {
    fn from(config: WeightConfig) -> Self {
        Self::new(config.top, config.middle, config.bottom)
    }
}

impl From<WeightTriple> for WeightConfig {
    fn from(weights: WeightTriple) -> Self {
        Self {
            top: weights.top,
            middle: weights.middle,
            bottom: weights.bottom,
        }
    }
}

/// Complete ad configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfig {
    /// Identifier of the ad
    pub ad_id: String,
    /// Top region
    pub top_section: SectionConfig,
    /// Middle region
    pub middle_section: SectionConfig,
    /// Bottom region
    pub bottom_section: SectionConfig,
    /// Weights applied before any user resize
    #[serde(default)]
    pub initial_weights: WeightConfig,
    /// Whether dividers may be dragged
    #[serde(default = "default_true")]
    pub enable_user_resize: bool,
    /// Lower weight bound; initial weights below it fail validation
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,
    /// Declared upper weight bound.
    ///
    /// Only checked against the initial weights; dragging may exceed it.
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
    /// Whether weights are persisted automatically when a drag ends
    #[serde(default = "default_true")]
    pub auto_save: bool,
}

impl AdConfig {
    /// Creates a configuration with default policy settings
    #[must_use]
    pub fn new(
        ad_id: impl Into<String>,
        top_section: SectionConfig,
        middle_section: SectionConfig,
        bottom_section: SectionConfig,
    ) -> Self {
        Self {
            ad_id: ad_id.into(),
            top_section,
            middle_section,
            bottom_section,
            initial_weights: WeightConfig::default(),
            enable_user_resize: true,
            min_weight: MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            auto_save: true,
        }
    }

    /// Sets the initial weights
    #[must_use]
    pub fn with_initial_weights(mut self, weights: WeightTriple) -> Self {
        self.initial_weights = weights.into();
        self
    }

    /// Returns the section for a region
    #[must_use]
    pub const fn section(&self, region: Region) -> &SectionConfig {
        match region {
            Region::Top => &self.top_section,
            Region::Middle => &self.middle_section,
            Region::Bottom => &self.bottom_section,
        }
    }

    /// Returns the initial weights as a triple
    #[must_use]
    pub fn initial_weights(&self) -> WeightTriple {
        self.initial_weights.into()
    }

    /// Converts the configuration into region content carrying the initial weights.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownContentType` if any section has an
    /// unrecognised tag.
    pub fn to_content(&self) -> ConfigResult<AdContent> {
        let weights = self.initial_weights();
        let descriptor = |region: Region| -> ConfigResult<ContentDescriptor> {
            Ok(ContentDescriptor::new(
                self.section(region).to_content(region)?,
                weights.get(region),
            ))
        };
        Ok(AdContent::new(
            descriptor(Region::Top)?,
            descriptor(Region::Middle)?,
            descriptor(Region::Bottom)?,
        ))
    }

    /// Checks the configuration for consistency.
    ///
    /// Image and video sections need a non-blank URL. Slider sections may
    /// have no images; they render as placeholders. Every initial weight must
    /// lie within `[min_weight, max_weight]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownContentType` or `ConfigError::Validation`
    /// describing the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ad_id.trim().is_empty() {
            return Err(ConfigError::Validation("adId must not be empty".to_string()));
        }
        if !(self.min_weight.is_finite() && self.min_weight > 0.0) {
            return Err(ConfigError::Validation(format!(
                "minWeight must be positive, got {}",
                self.min_weight
            )));
        }
        if !(self.max_weight.is_finite() && self.max_weight >= self.min_weight) {
            return Err(ConfigError::Validation(format!(
                "maxWeight {} must not be below minWeight {}",
                self.max_weight, self.min_weight
            )));
        }

        for region in Region::ALL {
            let section = self.section(region);
            match section.content_kind(region)? {
                ContentKind::Image | ContentKind::Video if section.url.trim().is_empty() => {
                    return Err(ConfigError::Validation(format!(
                        "{region} section of type {} has no url",
                        section.kind
                    )));
                }
                _ => {}
            }

            let weight = self.initial_weights().get(region);
            if !(weight >= self.min_weight && weight <= self.max_weight) {
                return Err(ConfigError::Validation(format!(
                    "{region} initial weight {weight} outside [{}, {}]",
                    self.min_weight, self.max_weight
                )));
            }
        }
        Ok(())
    }
}
