//! Divider resizing for the three stacked regions.
//!
//! # Module Structure
//!
//! - `engine` - Pure weight redistribution (`redistribute_adjacent`, `Divider`)
//! - `session` - Drag session snapshot and accumulator (`DragSession`)
//! - `error` - Error types (`ResizeError`)
//!
//! # Example
//!
//! ```
//! use adview_core::models::WeightTriple;
//! use adview_core::resize::{Divider, DragSession};
//!
//! let mut session = DragSession::start(Divider::TopMiddle, WeightTriple::DEFAULT);
//! session.update(300.0);
//! let w = session.update(200.0);
//!
//! // 500 dp of drag moves a full unit, clamped at the floor
//! assert!((w.top - 1.9).abs() < 1e-9);
//! assert_eq!(w.bottom, 1.0);
//! ```

mod engine;
mod error;
mod session;

pub use engine::{
    DRAG_SENSITIVITY_MULTIPLIER, Divider, SENSITIVITY, pointer_delta_to_dp, redistribute_adjacent,
};
pub use error::{ResizeError, ResizeResult};
pub use session::DragSession;
