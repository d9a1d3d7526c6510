//! Process-lifetime in-memory content store.

use std::sync::RwLock;

use crate::config::AdConfig;
use crate::error::{ConfigResult, StoreError, StoreResult};
use crate::models::{AdContent, WeightTriple};
use crate::tracing::span_names;

use super::ContentStore;

#[derive(Debug, Clone)]
struct StoreState {
    content: AdContent,
    weights: WeightTriple,
}

/// Content store backed by memory, seeded once at startup.
///
/// Updates replace the stored value wholesale; concurrent writers resolve as
/// last-writer-wins. Nothing survives a process restart.
#[derive(Debug)]
pub struct InMemoryContentStore {
    state: RwLock<StoreState>,
}

impl InMemoryContentStore {
    /// Creates a store seeded with the given content and weights.
    #[must_use]
    pub fn new(content: AdContent, weights: WeightTriple) -> Self {
        Self {
            state: RwLock::new(StoreState { content, weights }),
        }
    }

    /// Creates a store seeded from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a section carries an unknown content type.
    pub fn from_config(config: &AdConfig) -> ConfigResult<Self> {
        let content = config.to_content()?;
        tracing::debug!(
            ad_id = %config.ad_id,
            weights = %config.initial_weights(),
            "Seeding content store"
        );
        Ok(Self::new(content, config.initial_weights()))
    }
}

impl ContentStore for InMemoryContentStore {
    fn get_content(&self) -> StoreResult<AdContent> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.content.with_weights(state.weights))
    }

    fn update_content(&self, content: AdContent) -> StoreResult<()> {
        let _span = tracing::debug_span!(span_names::STORE_UPDATE_CONTENT).entered();
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.content = content;
        tracing::debug!("Content replaced");
        Ok(())
    }

    fn update_weights(&self, weights: WeightTriple) -> StoreResult<()> {
        let _span =
            tracing::debug_span!(span_names::STORE_UPDATE_WEIGHTS, weights = %weights).entered();
        if !weights.is_valid() {
            return Err(StoreError::InvalidWeights(weights.to_string()));
        }
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.weights = weights;
        tracing::debug!("Weights replaced");
        Ok(())
    }

    fn replace(&self, content: AdContent, weights: WeightTriple) -> StoreResult<()> {
        let _span =
            tracing::debug_span!(span_names::STORE_UPDATE_CONTENT, weights = %weights).entered();
        if !weights.is_valid() {
            return Err(StoreError::InvalidWeights(weights.to_string()));
        }
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.content = content;
        state.weights = weights;
        tracing::debug!("Content and weights replaced");
        Ok(())
    }

    fn get_weights(&self) -> StoreResult<WeightTriple> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.weights)
    }
}
