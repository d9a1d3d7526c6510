//! `AdView` Core Library
//!
//! This crate provides the core of a screen that stacks three resizable ad
//! regions (top, middle, bottom). Each region shows an image, a video, an
//! image slider or an empty placeholder; the user drags the two dividers to
//! change the relative region heights.
//!
//! # Crate Structure
//!
//! - [`models`] - Regions, weights and region content
//! - [`resize`] - Weight redistribution engine and drag sessions
//! - [`screen`] - Screen controller publishing observable UI state
//! - [`store`] - Content store contract, in-memory store, simulated remote source
//! - [`config`] - JSON configuration resource and loader with fallback
//! - [`presets`] - Named weight and content presets
//! - [`render`] - Region layout and the renderer contract
//! - [`tracing`] - Structured logging setup

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod presets;
pub mod render;
pub mod resize;
pub mod screen;
pub mod store;
pub mod tracing;

pub use config::{
    AdConfig, BUNDLED_CONFIG, ConfigLoader, DEFAULT_AD_ID, SectionConfig, WeightConfig,
    default_config, parse_config,
};
pub use error::{
    AdViewError, AdViewResult, ConfigError, ConfigResult, RemoteError, RemoteResult, StoreError,
    StoreResult,
};
pub use models::{
    AdContent, AdContentBuilder, Content, ContentDescriptor, ContentKind, MIN_WEIGHT, Region,
    WeightTriple,
};
pub use presets::{
    ContentPreset, WEIGHT_PRESETS, WeightPreset, content_presets, find_content_preset,
    find_weight_preset,
};
pub use render::{DIVIDER_THICKNESS, RenderArea, Renderer, layout_areas, layout_heights, render_screen};
pub use resize::{
    Divider, DragSession, ResizeError, ResizeResult, SENSITIVITY, pointer_delta_to_dp,
    redistribute_adjacent,
};
pub use screen::{ScreenController, ScreenOptions, UiState};
pub use store::{ContentStore, InMemoryContentStore, RemoteAdSource, SimulatedRemoteSource};
pub use crate::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized,
};
