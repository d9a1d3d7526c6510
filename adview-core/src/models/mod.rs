//! Core data structures for the ad screen.
//!
//! - [`WeightTriple`] and [`Region`] describe relative region heights
//! - [`Content`], [`ContentDescriptor`] and [`AdContent`] describe what each
//!   region displays
//! - [`AdContentBuilder`] assembles content programmatically

mod builder;
mod content;
mod weights;

pub use builder::{AdContentBuilder, FALLBACK_IMAGE_URL, FALLBACK_VIDEO_URL};
pub use content::{AdContent, Content, ContentDescriptor, ContentKind, DEFAULT_SLIDER_DELAY_MS};
pub use weights::{DEFAULT_MAX_WEIGHT, DEFAULT_WEIGHT, MIN_WEIGHT, Region, WeightTriple};
