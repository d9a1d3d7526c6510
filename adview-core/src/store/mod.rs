//! Content storage for the ad screen.
//!
//! [`ContentStore`] is the contract the screen controller persists through.
//! [`InMemoryContentStore`] keeps state for the lifetime of the process and
//! is owned by whoever builds the controller; it is injected, never global.
//! [`RemoteAdSource`] describes an out-of-process source of content.

mod memory;
mod remote;

pub use memory::InMemoryContentStore;
pub use remote::{
    DEFAULT_FETCH_LATENCY, DEFAULT_UPLOAD_LATENCY, RemoteAdSource, SimulatedRemoteSource,
};

use crate::error::StoreResult;
use crate::models::{AdContent, WeightTriple};

/// Holds the selected content per region and the persisted weights.
///
/// Updates are atomic replacements; there are no merge semantics.
pub trait ContentStore: Send + Sync {
    /// Returns the current content with descriptor weights taken from the
    /// persisted weights.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get_content(&self) -> StoreResult<AdContent>;

    /// Replaces the content of all three regions.
    ///
    /// Descriptor weights in `content` are ignored; weights are persisted
    /// separately through [`ContentStore::update_weights`].
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the update is rejected.
    fn update_content(&self, content: AdContent) -> StoreResult<()>;

    /// Replaces the persisted weights.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the weights are invalid or cannot be stored.
    fn update_weights(&self, weights: WeightTriple) -> StoreResult<()>;

    /// Replaces content and weights in one step.
    ///
    /// Either both are stored or neither is.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the weights are invalid or the update is
    /// rejected; the store is left unchanged.
    fn replace(&self, content: AdContent, weights: WeightTriple) -> StoreResult<()>;

    /// Returns the persisted weights.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get_weights(&self) -> StoreResult<WeightTriple>;
}
