//! Ad screen orchestration.
//!
//! [`ScreenController`] turns drag events into weight updates through the
//! resize engine and publishes the result as [`UiState`]. It holds at most
//! one drag session at a time.

mod controller;
mod state;

pub use controller::{ScreenController, ScreenOptions};
pub use state::UiState;
