//! Screen controller driving drag sessions and store writes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::AdConfig;
use crate::error::{AdViewError, AdViewResult, StoreError, StoreResult};
use crate::models::{AdContent, Content, Region, WeightTriple};
use crate::resize::{Divider, DragSession, ResizeError, ResizeResult};
use crate::store::ContentStore;
use crate::tracing::span_names;

use super::state::UiState;

/// Resize policy taken from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Whether dividers may be dragged
    pub enable_user_resize: bool,
    /// Whether drag-end persists the final weights
    pub auto_save: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            enable_user_resize: true,
            auto_save: true,
        }
    }
}

impl From<&AdConfig> for ScreenOptions {
    fn from(config: &AdConfig) -> Self {
        Self {
            enable_user_resize: config.enable_user_resize,
            auto_save: config.auto_save,
        }
    }
}

/// Owns the screen's [`UiState`] and at most one drag session.
///
/// Drag moves only update the published state. Weights reach the store on
/// drag-end (when auto-save is on), on [`Self::save_weights`], or through
/// the reset and preset operations. Store failures are written into
/// `UiState::error` and returned; the published content is left as it was.
pub struct ScreenController {
    store: Arc<dyn ContentStore>,
    options: ScreenOptions,
    state: watch::Sender<UiState>,
    session: Option<DragSession>,
}

impl std::fmt::Debug for ScreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("options", &self.options)
            .field("state", &*self.state.borrow())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ScreenController {
    /// Creates a controller over `store`; call [`Self::load`] before use
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, options: ScreenOptions) -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self {
            store,
            options,
            state,
            session: None,
        }
    }

    /// Returns a receiver notified on every state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current state
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Returns the weights currently drawn
    #[must_use]
    pub fn weights(&self) -> WeightTriple {
        self.state.borrow().weights
    }

    /// Returns the resize policy
    #[must_use]
    pub const fn options(&self) -> ScreenOptions {
        self.options
    }

    /// Whether a drag session is running
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Loads content and persisted weights from the store.
    ///
    /// # Errors
    ///
    /// Returns the store error, which is also recorded in the state.
    pub fn load(&self) -> AdViewResult<()> {
        let _span = tracing::debug_span!(span_names::SCREEN_LOAD).entered();
        match self.store.get_content() {
            Ok(content) => {
                tracing::debug!(weights = %content.weights(), "Screen content loaded");
                self.state.send_modify(|state| {
                    state.apply_content(content);
                    state.is_loading = false;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => {
                self.state.send_modify(|state| state.is_loading = false);
                Err(self.record_failure(err.into()))
            }
        }
    }

    /// Starts dragging `divider` from the weights currently drawn.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::ResizeDisabled` when resizing is turned off and
    /// `ResizeError::SessionActive` while another session runs.
    pub fn drag_start(&mut self, divider: Divider) -> ResizeResult<()> {
        let _span =
            tracing::debug_span!(span_names::DRAG_START, divider = %divider).entered();
        if !self.options.enable_user_resize {
            return Err(ResizeError::ResizeDisabled);
        }
        if let Some(active) = &self.session {
            tracing::warn!(active = %active.divider(), "Overlapping drag start ignored");
            return Err(ResizeError::SessionActive(active.divider()));
        }

        self.session = Some(DragSession::start(divider, self.weights()));
        self.state.send_modify(|state| state.dragging = Some(divider));
        Ok(())
    }

    /// Feeds one move event's delta in dp and publishes the provisional
    /// weights.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::NoActiveSession` when no session runs; the event
    /// is dropped.
    pub fn drag_move(&mut self, delta_dp: f64) -> ResizeResult<WeightTriple> {
        let session = self.session.as_mut().ok_or(ResizeError::NoActiveSession)?;
        let weights = session.update(delta_dp);
        tracing::trace!(
            delta = session.accumulated(),
            weights = %weights,
            "Drag moved"
        );
        self.state.send_modify(|state| state.apply_weights(weights));
        Ok(weights)
    }

    /// Ends the drag and, with auto-save on, persists the final weights.
    ///
    /// The final weights stay published even if persisting them fails.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::NoActiveSession` without a running session, or
    /// the store error when persisting fails.
    pub fn drag_end(&mut self) -> AdViewResult<WeightTriple> {
        let session = self.session.take().ok_or(ResizeError::NoActiveSession)?;
        let divider = session.divider();
        let weights = session.finish();
        let _span = crate::trace_operation!(
            span_names::DRAG_END,
            divider = %divider,
            weights = %weights
        )
        .entered();

        self.state.send_modify(|state| {
            state.dragging = None;
            state.apply_weights(weights);
        });

        if self.options.auto_save {
            self.persist_weights(weights)?;
            tracing::info!("Drag finished, weights saved");
        } else {
            tracing::info!("Drag finished, weights kept unsaved");
        }
        Ok(weights)
    }

    /// Interrupted gestures end like a normal drag; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Same as [`Self::drag_end`].
    pub fn drag_cancel(&mut self) -> AdViewResult<WeightTriple> {
        self.drag_end()
    }

    /// Persists the weights currently drawn.
    ///
    /// # Errors
    ///
    /// Returns the store error, which is also recorded in the state.
    pub fn save_weights(&self) -> AdViewResult<()> {
        self.persist_weights(self.weights())
    }

    /// Replaces one region's content, writes it through and reloads.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::SessionActive` while a drag runs, or the store
    /// error, which is also recorded in the state.
    pub fn update_section_content(&self, region: Region, content: Content) -> AdViewResult<()> {
        self.ensure_idle()?;
        tracing::debug!(region = %region, kind = %content.kind(), "Updating section");
        let updated = self.state.borrow().content().with_content(region, content);
        self.write(|store| store.update_content(updated))?;
        self.load()
    }

    /// Restores equal weights and persists them.
    ///
    /// # Errors
    ///
    /// See [`Self::set_weights`].
    pub fn reset_weights(&self) -> AdViewResult<()> {
        self.set_weights(WeightTriple::DEFAULT)
    }

    /// Publishes and persists `weights`.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::SessionActive` while a drag runs, or the store
    /// error when persisting fails.
    pub fn set_weights(&self, weights: WeightTriple) -> AdViewResult<()> {
        self.ensure_idle()?;
        self.persist_weights(weights)?;
        self.state.send_modify(|state| state.apply_weights(weights));
        Ok(())
    }

    /// Replaces content and weights with those of `preset`.
    ///
    /// Nothing is written and the published state is kept when the preset's
    /// weights are invalid or the store rejects the replacement.
    ///
    /// # Errors
    ///
    /// Returns `ResizeError::SessionActive` while a drag runs, or the store
    /// error when the replacement fails.
    pub fn apply_preset(&self, preset: &AdContent) -> AdViewResult<()> {
        self.ensure_idle()?;
        let weights = preset.weights();
        if !weights.is_valid() {
            return Err(self.record_failure(StoreError::InvalidWeights(weights.to_string()).into()));
        }
        self.write(|store| store.replace(preset.clone(), weights))?;
        self.load()
    }

    /// Clears the recorded error message
    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| state.error.take().is_some());
    }

    fn ensure_idle(&self) -> ResizeResult<()> {
        match &self.session {
            Some(active) => Err(ResizeError::SessionActive(active.divider())),
            None => Ok(()),
        }
    }

    fn persist_weights(&self, weights: WeightTriple) -> AdViewResult<()> {
        self.write(|store| store.update_weights(weights))
    }

    fn write<F>(&self, update: F) -> AdViewResult<()>
    where
        F: FnOnce(&dyn ContentStore) -> StoreResult<()>,
    {
        update(self.store.as_ref()).map_err(|err| self.record_failure(err.into()))
    }

    fn record_failure(&self, err: AdViewError) -> AdViewError {
        tracing::warn!(error = %err, "Screen operation failed");
        let message = err.to_string();
        self.state.send_modify(|state| state.error = Some(message));
        err
    }
}
