//! Named weight and content presets.
//!
//! Weight presets only change region proportions; content presets replace
//! what every region shows together with its weight.

use crate::models::{AdContent, AdContentBuilder, Content, Region, WeightTriple};

/// A named set of region weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPreset {
    /// Identifier used on the command line
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Weights applied by the preset
    pub weights: WeightTriple,
}

/// A named content layout
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPreset {
    /// Identifier used on the command line
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Content and weights applied by the preset
    pub content: AdContent,
}

/// Weight presets in display order.
pub const WEIGHT_PRESETS: [WeightPreset; 5] = [
    WeightPreset {
        name: "even",
        label: "Even split",
        weights: WeightTriple::new(1.0, 1.0, 1.0),
    },
    WeightPreset {
        name: "video-focus",
        label: "Video focus",
        weights: WeightTriple::new(0.5, 3.0, 0.5),
    },
    WeightPreset {
        name: "image-focus",
        label: "Image focus",
        weights: WeightTriple::new(2.0, 0.5, 2.0),
    },
    WeightPreset {
        name: "top-emphasis",
        label: "Top emphasis",
        weights: WeightTriple::new(3.0, 1.0, 1.0),
    },
    WeightPreset {
        name: "bottom-emphasis",
        label: "Bottom emphasis",
        weights: WeightTriple::new(1.0, 1.0, 3.0),
    },
];

const SAMPLE_BUCKET: &str = "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

fn sample_video(name: &str) -> String {
    format!("{SAMPLE_BUCKET}/{name}.mp4")
}

fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/1024/760")
}

/// Content presets in display order.
#[must_use]
pub fn content_presets() -> Vec<ContentPreset> {
    vec![
        ContentPreset {
            name: "default",
            label: "Slider - video - slider",
            content: AdContentBuilder::new()
                .section(
                    Region::Top,
                    Content::slider_with_delay((1..=5).map(|i| picsum(&format!("slider{i}"))), 1000),
                    1.0,
                )
                .middle_video(sample_video("BigBuckBunny"), 1.0)
                .section(
                    Region::Bottom,
                    Content::slider_with_delay((1..=5).map(|i| picsum(&format!("bottom{i}"))), 1200),
                    1.0,
                )
                .build(),
        },
        ContentPreset {
            name: "all-video",
            label: "All video",
            content: AdContentBuilder::new()
                .top_video(sample_video("ForBiggerBlazes"), 0.5)
                .middle_video(sample_video("BigBuckBunny"), 3.0)
                .bottom_video(sample_video("ElephantsDream"), 0.5)
                .build(),
        },
        ContentPreset {
            name: "all-image",
            label: "All image",
            content: AdContentBuilder::new()
                .top_image(picsum("gallery1"), 1.0)
                .middle_image(picsum("gallery2"), 2.0)
                .bottom_image(picsum("gallery3"), 1.0)
                .build(),
        },
        ContentPreset {
            name: "video-sandwich",
            label: "Video sandwich",
            content: AdContentBuilder::new()
                .top_video(sample_video("ForBiggerEscapes"), 2.0)
                .middle_image("https://picsum.photos/seed/banner/1024/300", 0.5)
                .bottom_video(sample_video("ForBiggerJoyrides"), 2.0)
                .build(),
        },
        ContentPreset {
            name: "hero-video",
            label: "Hero video",
            content: AdContentBuilder::new()
                .top_video(sample_video("BigBuckBunny"), 3.0)
                .middle_image(picsum("sub1"), 1.0)
                .bottom_image(picsum("sub2"), 1.0)
                .build(),
        },
    ]
}

/// Finds a weight preset by name, ignoring case
#[must_use]
pub fn find_weight_preset(name: &str) -> Option<WeightPreset> {
    WEIGHT_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Finds a content preset by name, ignoring case
#[must_use]
pub fn find_content_preset(name: &str) -> Option<ContentPreset> {
    content_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
