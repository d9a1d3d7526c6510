//! Configuration management for `AdView`
//!
//! This module provides the [`AdConfig`] schema for the JSON configuration
//! resource and the [`ConfigLoader`] that reads it with a fixed fallback.

mod ad_config;
mod loader;

pub use ad_config::{AdConfig, SectionConfig, WeightConfig};
pub use loader::{BUNDLED_CONFIG, ConfigLoader, DEFAULT_AD_ID, default_config, parse_config};
