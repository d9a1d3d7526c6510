//! Fluent builder for [`AdContent`].

use super::content::{AdContent, Content, ContentDescriptor};
use super::weights::{DEFAULT_WEIGHT, Region};

/// Image shown in the top and bottom regions when nothing is set.
pub const FALLBACK_IMAGE_URL: &str = "https://picsum.photos/1024/760";

/// Video shown in the middle region when nothing is set.
pub const FALLBACK_VIDEO_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Builds [`AdContent`] region by region.
///
/// Regions left unset fall back to image, video, image.
///
/// # Example
///
/// ```
/// use adview_core::models::{AdContentBuilder, Content, Region};
///
/// let content = AdContentBuilder::new()
///     .top_image("https://example.com/top.jpg", 1.0)
///     .middle_video("https://example.com/video.mp4", 2.0)
///     .section(Region::Bottom, Content::Empty, 1.0)
///     .build();
///
/// assert_eq!(content.middle.weight, 2.0);
/// assert_eq!(content.bottom.content, Content::Empty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdContentBuilder {
    sections: [Option<ContentDescriptor>; 3],
}

impl AdContentBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content and weight of a region
    #[must_use]
    pub fn section(mut self, region: Region, content: Content, weight: f64) -> Self {
        self.sections[region.index()] = Some(ContentDescriptor::new(content, weight));
        self
    }

    /// Sets the top region to an image
    #[must_use]
    pub fn top_image(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Top, Content::image(url), weight)
    }

    /// Sets the top region to a video
    #[must_use]
    pub fn top_video(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Top, Content::video(url), weight)
    }

    /// Sets the middle region to an image
    #[must_use]
    pub fn middle_image(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Middle, Content::image(url), weight)
    }

    /// Sets the middle region to a video
    #[must_use]
    pub fn middle_video(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Middle, Content::video(url), weight)
    }

    /// Sets the bottom region to an image
    #[must_use]
    pub fn bottom_image(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Bottom, Content::image(url), weight)
    }

    /// Sets the bottom region to a video
    #[must_use]
    pub fn bottom_video(self, url: impl Into<String>, weight: f64) -> Self {
        self.section(Region::Bottom, Content::video(url), weight)
    }

    /// Builds the content, filling unset regions with defaults
    #[must_use]
    pub fn build(self) -> AdContent {
        let [top, middle, bottom] = self.sections;
        AdContent::new(
            top.unwrap_or_else(|| {
                ContentDescriptor::new(Content::image(FALLBACK_IMAGE_URL), DEFAULT_WEIGHT)
            }),
            middle.unwrap_or_else(|| {
                ContentDescriptor::new(Content::video(FALLBACK_VIDEO_URL), DEFAULT_WEIGHT)
            }),
            bottom.unwrap_or_else(|| {
                ContentDescriptor::new(Content::image(FALLBACK_IMAGE_URL), DEFAULT_WEIGHT)
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_uses_defaults() {
        let content = AdContentBuilder::new().build();
        assert_eq!(content.top.content, Content::image(FALLBACK_IMAGE_URL));
        assert_eq!(content.middle.content, Content::video(FALLBACK_VIDEO_URL));
        assert_eq!(content.bottom.content, Content::image(FALLBACK_IMAGE_URL));
        assert_eq!(content.weights().sum(), 3.0);
    }

    #[test]
    fn later_section_overrides_earlier() {
        let content = AdContentBuilder::new()
            .top_image("a", 1.0)
            .top_video("b", 3.0)
            .build();
        assert_eq!(content.top.content, Content::video("b"));
        assert_eq!(content.top.weight, 3.0);
    }
}
