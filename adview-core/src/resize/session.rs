//! Drag session state.
//!
//! A session lives from drag-start to drag-end. It keeps the weights
//! captured at start and the running displacement, and recomputes the
//! provisional weights on every move.

use crate::models::WeightTriple;

use super::engine::{Divider, redistribute_adjacent};

/// An in-progress divider drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    divider: Divider,
    start_weights: WeightTriple,
    accumulated: f64,
    current: WeightTriple,
}

impl DragSession {
    /// Starts a session on `divider` from the given weights.
    #[must_use]
    pub const fn start(divider: Divider, start_weights: WeightTriple) -> Self {
        Self {
            divider,
            start_weights,
            accumulated: 0.0,
            current: start_weights,
        }
    }

    /// Adds one move event's delta and returns the provisional weights.
    pub fn update(&mut self, delta: f64) -> WeightTriple {
        self.accumulated += delta;
        self.current = redistribute_adjacent(self.accumulated, self.start_weights, self.divider);
        self.current
    }

    /// Ends the session and returns the last provisional weights.
    #[must_use]
    pub const fn finish(self) -> WeightTriple {
        self.current
    }

    /// The divider being dragged
    #[must_use]
    pub const fn divider(&self) -> Divider {
        self.divider
    }

    /// Weights captured when the session started
    #[must_use]
    pub const fn start_weights(&self) -> WeightTriple {
        self.start_weights
    }

    /// Total displacement since the session started
    #[must_use]
    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Latest provisional weights
    #[must_use]
    pub const fn current(&self) -> WeightTriple {
        self.current
    }
}
