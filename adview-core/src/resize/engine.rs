//! Weight redistribution between two adjacent regions.
//!
//! Dragging a divider moves height from one neighbour to the other while the
//! third region keeps its weight. Each call recomputes from the weights
//! captured when the drag began, using the total displacement so far, so
//! repeated events never accumulate rounding drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{MIN_WEIGHT, Region, WeightTriple};

/// Drag distance (in dp) that moves one unit of weight.
///
/// Larger values make resizing slower per unit of drag.
pub const SENSITIVITY: f64 = 500.0;

/// Scale applied to raw pointer deltas after density conversion.
pub const DRAG_SENSITIVITY_MULTIPLIER: f64 = 1.6;

/// The draggable boundary between two adjacent regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Divider {
    /// Between the top and middle regions
    TopMiddle,
    /// Between the middle and bottom regions
    MiddleBottom,
}

impl Divider {
    /// Both dividers, top to bottom.
    pub const ALL: [Self; 2] = [Self::TopMiddle, Self::MiddleBottom];

    /// Returns the regions above and below this divider.
    #[must_use]
    pub const fn regions(self) -> (Region, Region) {
        match self {
            Self::TopMiddle => (Region::Top, Region::Middle),
            Self::MiddleBottom => (Region::Middle, Region::Bottom),
        }
    }

    /// Returns the region this divider never touches.
    #[must_use]
    pub const fn untouched(self) -> Region {
        match self {
            Self::TopMiddle => Region::Bottom,
            Self::MiddleBottom => Region::Top,
        }
    }

    /// Returns the divider index used by screen hosts (1 or 2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::TopMiddle => 1,
            Self::MiddleBottom => 2,
        }
    }

    /// Looks up a divider by host index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::TopMiddle),
            2 => Some(Self::MiddleBottom),
            _ => None,
        }
    }

    /// Returns the kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopMiddle => "top-middle",
            Self::MiddleBottom => "middle-bottom",
        }
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Divider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-middle" | "top_middle" | "1" => Ok(Self::TopMiddle),
            "middle-bottom" | "middle_bottom" | "2" => Ok(Self::MiddleBottom),
            _ => Err(()),
        }
    }
}

/// Computes new weights for the pair of regions next to `divider`.
///
/// `delta_accumulated` is the total signed displacement in dp since the drag
/// began, not the latest event's delta. Positive values grow the upper
/// region of the pair.
///
/// The upper weight is clamped to `[MIN_WEIGHT, total - MIN_WEIGHT]` and the
/// lower weight takes the remainder, so the pair sum is preserved and the
/// third region is copied unchanged.
///
/// A zero delta returns `start` exactly. When the pair total is at most
/// `2 * MIN_WEIGHT` the clamp range is empty; both weights are then set to
/// `total / 2`.
///
/// NaN and infinite inputs are not supported.
///
/// # Example
///
/// ```
/// use adview_core::models::WeightTriple;
/// use adview_core::resize::{Divider, redistribute_adjacent};
///
/// let start = WeightTriple::new(1.0, 1.0, 1.0);
/// let next = redistribute_adjacent(250.0, start, Divider::TopMiddle);
/// assert!((next.top - 1.5).abs() < 1e-9);
/// assert!((next.middle - 0.5).abs() < 1e-9);
/// assert_eq!(next.bottom, 1.0);
/// ```
#[must_use]
pub fn redistribute_adjacent(
    delta_accumulated: f64,
    start: WeightTriple,
    divider: Divider,
) -> WeightTriple {
    if delta_accumulated == 0.0 {
        return start;
    }

    let (upper, lower) = divider.regions();
    let a = start.get(upper);
    let total = a + start.get(lower);

    let (new_a, new_b) = if total <= 2.0 * MIN_WEIGHT {
        let half = total / 2.0;
        (half, half)
    } else {
        let adjustment = delta_accumulated / SENSITIVITY;
        let new_a = (a + adjustment).clamp(MIN_WEIGHT, total - MIN_WEIGHT);
        (new_a, total - new_a)
    };

    start.with(upper, new_a).with(lower, new_b)
}

/// Converts a raw pointer delta in physical pixels into dp for the engine.
///
/// Returns `None` when `density` is zero; such events are dropped.
#[must_use]
pub fn pointer_delta_to_dp(delta_px: f64, density: f64) -> Option<f64> {
    if density == 0.0 {
        return None;
    }
    Some(delta_px / density * DRAG_SENSITIVITY_MULTIPLIER)
}
