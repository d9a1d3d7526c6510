//! Region weights for the three stacked ad regions.
//!
//! A [`WeightTriple`] holds the relative heights of the top, middle and
//! bottom regions. No global sum is enforced; only a resize operation keeps
//! the sum of the two weights it touches constant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound for any region weight touched by a resize.
pub const MIN_WEIGHT: f64 = 0.1;

/// Weight assigned to every region when nothing else is configured.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Declared upper bound from the configuration resource.
///
/// The resize engine does not enforce it; see [`crate::config::AdConfig::max_weight`].
pub const DEFAULT_MAX_WEIGHT: f64 = 5.0;

/// Percentage scale used by [`WeightTriple::from_percentages`].
const PERCENT_NORMALIZED_SUM: f64 = 3.0;

/// One of the three stacked areas on the ad screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Top region
    Top,
    /// Middle region
    Middle,
    /// Bottom region
    Bottom,
}

impl Region {
    /// All regions in screen order, top to bottom.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Returns the position of this region (0 = top, 2 = bottom).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Middle => 1,
            Self::Bottom => 2,
        }
    }

    /// Looks up a region by its position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Top),
            1 => Some(Self::Middle),
            2 => Some(Self::Bottom),
            _ => None,
        }
    }

    /// Returns the lowercase name of the region
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(()),
        }
    }
}

/// Relative heights of the three regions.
///
/// Values are replaced wholesale on every resize rather than mutated in
/// place; the `with` helper returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTriple {
    /// Weight of the top region
    pub top: f64,
    /// Weight of the middle region
    pub middle: f64,
    /// Weight of the bottom region
    pub bottom: f64,
}

impl WeightTriple {
    /// Equal weights for all three regions.
    pub const DEFAULT: Self = Self::new(DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT);

    /// Creates a weight triple.
    #[must_use]
    pub const fn new(top: f64, middle: f64, bottom: f64) -> Self {
        Self {
            top,
            middle,
            bottom,
        }
    }

    /// Returns the weight of the given region.
    #[must_use]
    pub const fn get(&self, region: Region) -> f64 {
        match region {
            Region::Top => self.top,
            Region::Middle => self.middle,
            Region::Bottom => self.bottom,
        }
    }

    /// Returns a copy with one region's weight replaced.
    #[must_use]
    pub const fn with(mut self, region: Region, weight: f64) -> Self {
        match region {
            Region::Top => self.top = weight,
            Region::Middle => self.middle = weight,
            Region::Bottom => self.bottom = weight,
        }
        self
    }

    /// Sum of all three weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.top + self.middle + self.bottom
    }

    /// Returns the weights in screen order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.top, self.middle, self.bottom]
    }

    /// Returns true if every weight is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_array().iter().all(|w| w.is_finite() && *w > 0.0)
    }

    /// Converts the weights into whole percentages of the total height.
    ///
    /// Each share is truncated, so the three values may sum to less than 100.
    /// Returns all zeros when the total is not positive.
    #[must_use]
    pub fn to_percentages(&self) -> (u32, u32, u32) {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            return (0, 0, 0);
        }
        let pct = |w: f64| ((w / total) * 100.0) as u32;
        (pct(self.top), pct(self.middle), pct(self.bottom))
    }

    /// Builds weights from percentages, normalized so the weights sum to 3.
    ///
    /// A zero total yields [`WeightTriple::DEFAULT`].
    #[must_use]
    pub fn from_percentages(top: u32, middle: u32, bottom: u32) -> Self {
        let total = u64::from(top) + u64::from(middle) + u64::from(bottom);
        if total == 0 {
            return Self::DEFAULT;
        }
        let normalizer = PERCENT_NORMALIZED_SUM / total as f64;
        Self::new(
            f64::from(top) * normalizer,
            f64::from(middle) * normalizer,
            f64::from(bottom) * normalizer,
        )
    }
}

impl Default for WeightTriple {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WeightTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={:.3} middle={:.3} bottom={:.3}",
            self.top, self.middle, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_ones() {
        let w = WeightTriple::default();
        assert_eq!(w, WeightTriple::new(1.0, 1.0, 1.0));
        assert_eq!(w.sum(), 3.0);
    }

    #[test]
    fn with_replaces_only_one_region() {
        let w = WeightTriple::DEFAULT.with(Region::Middle, 2.5);
        assert_eq!(w.top, 1.0);
        assert_eq!(w.middle, 2.5);
        assert_eq!(w.bottom, 1.0);
    }

    #[test]
    fn region_index_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_index(region.index()), Some(region));
        }
        assert_eq!(Region::from_index(3), None);
    }

    #[test]
    fn region_parse_is_case_insensitive() {
        assert_eq!("TOP".parse::<Region>(), Ok(Region::Top));
        assert_eq!("Middle".parse::<Region>(), Ok(Region::Middle));
        assert!("left".parse::<Region>().is_err());
    }

    #[test]
    fn percentages_truncate() {
        assert_eq!(WeightTriple::DEFAULT.to_percentages(), (33, 33, 33));
        assert_eq!(
            WeightTriple::new(0.5, 3.0, 0.5).to_percentages(),
            (12, 75, 12)
        );
    }

    #[test]
    fn percentages_of_zero_total() {
        assert_eq!(WeightTriple::new(0.0, 0.0, 0.0).to_percentages(), (0, 0, 0));
    }

    #[test]
    fn from_percentages_normalizes_to_three() {
        let w = WeightTriple::from_percentages(25, 50, 25);
        assert!((w.sum() - 3.0).abs() < 1e-9);
        assert!((w.middle - 1.5).abs() < 1e-9);
    }

    #[test]
    fn from_percentages_zero_total_is_default() {
        assert_eq!(WeightTriple::from_percentages(0, 0, 0), WeightTriple::DEFAULT);
    }

    #[test]
    fn validity_rejects_non_positive() {
        assert!(WeightTriple::DEFAULT.is_valid());
        assert!(!WeightTriple::new(0.0, 1.0, 1.0).is_valid());
        assert!(!WeightTriple::new(1.0, f64::NAN, 1.0).is_valid());
    }
}
