//! Content descriptors for the ad regions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::weights::{DEFAULT_WEIGHT, Region, WeightTriple};

/// Default transition delay between slider images in milliseconds.
pub const DEFAULT_SLIDER_DELAY_MS: u64 = 1000;

/// Content type tag as written in configuration resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    /// Single image
    Image,
    /// Single video
    Video,
    /// Auto-advancing list of images
    ImageSlider,
    /// Placeholder with no media
    Empty,
}

impl ContentKind {
    /// Returns the tag used in configuration resources
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::ImageSlider => "IMAGE_SLIDER",
            Self::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            "IMAGE_SLIDER" => Ok(Self::ImageSlider),
            "EMPTY" => Ok(Self::Empty),
            _ => Err(()),
        }
    }
}

/// What a region displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Content {
    /// A single image
    Image {
        /// Image URL
        url: String,
    },
    /// A single video
    Video {
        /// Video URL
        url: String,
    },
    /// Images shown one after another
    ImageSlider {
        /// Image URLs in display order; empty renders a placeholder
        urls: Vec<String>,
        /// Delay between transitions in milliseconds
        #[serde(rename = "transitionDelayMs", default = "default_slider_delay")]
        transition_delay_ms: u64,
    },
    /// Nothing but a background placeholder
    Empty,
}

const fn default_slider_delay() -> u64 {
    DEFAULT_SLIDER_DELAY_MS
}

impl Content {
    /// Creates image content
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Creates video content
    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self::Video { url: url.into() }
    }

    /// Creates slider content with the default transition delay
    #[must_use]
    pub fn slider<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::slider_with_delay(urls, DEFAULT_SLIDER_DELAY_MS)
    }

    /// Creates slider content with a custom transition delay
    #[must_use]
    pub fn slider_with_delay<I, S>(urls: I, transition_delay_ms: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ImageSlider {
            urls: urls.into_iter().map(Into::into).collect(),
            transition_delay_ms,
        }
    }

    /// Returns the type tag for this content
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Image { .. } => ContentKind::Image,
            Self::Video { .. } => ContentKind::Video,
            Self::ImageSlider { .. } => ContentKind::ImageSlider,
            Self::Empty => ContentKind::Empty,
        }
    }

    /// Returns true when the renderer should draw a placeholder.
    ///
    /// That is the case for `Empty` and for a slider without any images.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::ImageSlider { urls, .. } => urls.is_empty(),
            Self::Image { .. } | Self::Video { .. } => false,
        }
    }

    /// Returns every media URL referenced by this content
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::Image { url } | Self::Video { url } => vec![url.as_str()],
            Self::ImageSlider { urls, .. } => urls.iter().map(String::as_str).collect(),
            Self::Empty => Vec::new(),
        }
    }

    /// Index of the slide that follows `current`, wrapping after the last one.
    ///
    /// Returns `None` for anything that is not a slider with at least one image.
    #[must_use]
    pub fn next_slide_index(&self, current: usize) -> Option<usize> {
        match self {
            Self::ImageSlider { urls, .. } if !urls.is_empty() => {
                Some((current % urls.len() + 1) % urls.len())
            }
            _ => None,
        }
    }
}

/// Content of one region plus the weight it is currently drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    /// What to display
    pub content: Content,
    /// Weight mirrored from the current [`WeightTriple`]
    pub weight: f64,
}

impl ContentDescriptor {
    /// Creates a descriptor with the given weight
    #[must_use]
    pub const fn new(content: Content, weight: f64) -> Self {
        Self { content, weight }
    }

    /// Returns a copy with a different weight
    #[must_use]
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            content: self.content.clone(),
            weight,
        }
    }
}

impl From<Content> for ContentDescriptor {
    fn from(content: Content) -> Self {
        Self::new(content, DEFAULT_WEIGHT)
    }
}

/// Descriptors for all three regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdContent {
    /// Top region
    pub top: ContentDescriptor,
    /// Middle region
    pub middle: ContentDescriptor,
    /// Bottom region
    pub bottom: ContentDescriptor,
}

impl AdContent {
    /// Creates content from three descriptors
    #[must_use]
    pub const fn new(
        top: ContentDescriptor,
        middle: ContentDescriptor,
        bottom: ContentDescriptor,
    ) -> Self {
        Self {
            top,
            middle,
            bottom,
        }
    }

    /// Returns the descriptor for a region
    #[must_use]
    pub const fn get(&self, region: Region) -> &ContentDescriptor {
        match region {
            Region::Top => &self.top,
            Region::Middle => &self.middle,
            Region::Bottom => &self.bottom,
        }
    }

    /// Returns a mutable reference to the descriptor for a region
    pub fn get_mut(&mut self, region: Region) -> &mut ContentDescriptor {
        match region {
            Region::Top => &mut self.top,
            Region::Middle => &mut self.middle,
            Region::Bottom => &mut self.bottom,
        }
    }

    /// Returns a copy with one region's content replaced, keeping its weight
    #[must_use]
    pub fn with_content(&self, region: Region, content: Content) -> Self {
        let mut updated = self.clone();
        updated.get_mut(region).content = content;
        updated
    }

    /// Returns the weights mirrored in the descriptors
    #[must_use]
    pub const fn weights(&self) -> WeightTriple {
        WeightTriple::new(self.top.weight, self.middle.weight, self.bottom.weight)
    }

    /// Returns a copy whose descriptor weights are taken from `weights`
    #[must_use]
    pub fn with_weights(&self, weights: WeightTriple) -> Self {
        Self {
            top: self.top.with_weight(weights.top),
            middle: self.middle.with_weight(weights.middle),
            bottom: self.bottom.with_weight(weights.bottom),
        }
    }

    /// Iterates over regions and descriptors in screen order
    pub fn iter(&self) -> impl Iterator<Item = (Region, &ContentDescriptor)> {
        Region::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}
