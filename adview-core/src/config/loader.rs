//! Loading the ad configuration resource.
//!
//! Loading never fails from the caller's point of view: any read, parse or
//! validation error is logged and replaced by [`default_config`].

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::tracing::span_names;

use super::ad_config::{AdConfig, SectionConfig};

/// Configuration resource compiled into the crate.
pub const BUNDLED_CONFIG: &str = include_str!("ad_config.json");

/// Identifier of the fallback configuration.
pub const DEFAULT_AD_ID: &str = "default";

/// Where the configuration is read from
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    Bundled,
    File(PathBuf),
    Inline(String),
}

/// Reads an [`AdConfig`] from the bundled resource, a file or a string.
///
/// # Example
///
/// ```
/// use adview_core::config::ConfigLoader;
///
/// let config = ConfigLoader::from_json("not json").load();
/// assert_eq!(config.ad_id, "default");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: ConfigSource,
}

impl ConfigLoader {
    /// Loader for the resource compiled into the crate
    #[must_use]
    pub const fn bundled() -> Self {
        Self {
            source: ConfigSource::Bundled,
        }
    }

    /// Loader for a JSON file on disk
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ConfigSource::File(path.into()),
        }
    }

    /// Loader for an in-memory JSON document
    #[must_use]
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: ConfigSource::Inline(json.into()),
        }
    }

    /// Returns the file path if this loader reads from disk
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ConfigSource::File(path) => Some(path),
            ConfigSource::Bundled | ConfigSource::Inline(_) => None,
        }
    }

    /// Reads, parses and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the source cannot be read, is not valid
    /// JSON for the schema, or fails [`AdConfig::validate`].
    pub fn try_load(&self) -> ConfigResult<AdConfig> {
        let _span = tracing::debug_span!(span_names::CONFIG_LOAD).entered();

        let config = match &self.source {
            ConfigSource::Bundled => parse_config(BUNDLED_CONFIG)?,
            ConfigSource::Inline(json) => parse_config(json)?,
            ConfigSource::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_config(&json)?
            }
        };

        tracing::debug!(ad_id = %config.ad_id, "Ad configuration loaded");
        Ok(config)
    }

    /// Loads the configuration, falling back to [`default_config`] on any error.
    #[must_use]
    pub fn load(&self) -> AdConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default ad configuration");
                default_config()
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Parses and validates a JSON configuration document.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed JSON, or a validation error.
pub fn parse_config(json: &str) -> ConfigResult<AdConfig> {
    let config: AdConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// The fixed configuration used when loading fails: image, video, image.
#[must_use]
pub fn default_config() -> AdConfig {
    AdConfig::new(
        DEFAULT_AD_ID,
        SectionConfig::new("IMAGE", "https://picsum.photos/seed/default-top/1024/760"),
        SectionConfig::new(
            "VIDEO",
            "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        ),
        SectionConfig::new("IMAGE", "https://picsum.photos/seed/default-bottom/1024/760"),
    )
}
