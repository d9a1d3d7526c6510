//! Property-based tests for weight helpers

use adview_core::models::{MIN_WEIGHT, Region, WeightTriple};
use proptest::prelude::*;

fn triple_strategy() -> impl Strategy<Value = WeightTriple> {
    (MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64)
        .prop_map(|(top, middle, bottom)| WeightTriple::new(top, middle, bottom))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Truncated percentages never exceed 100 and lose less than one point
    /// per region.
    #[test]
    fn prop_percentages_sum_close_to_100(weights in triple_strategy()) {
        let (top, middle, bottom) = weights.to_percentages();
        let sum = top + middle + bottom;
        prop_assert!((97..=100).contains(&sum), "percentages sum to {}", sum);
    }

    /// Larger weights never get a smaller percentage.
    #[test]
    fn prop_percentages_preserve_order(weights in triple_strategy()) {
        let (top, middle, _) = weights.to_percentages();
        if weights.top > weights.middle {
            prop_assert!(top >= middle);
        } else if weights.top < weights.middle {
            prop_assert!(top <= middle);
        }
    }

    /// Weights built from percentages always sum to 3.
    #[test]
    fn prop_from_percentages_is_normalized(
        top in 1u32..=100,
        middle in 1u32..=100,
        bottom in 1u32..=100,
    ) {
        let weights = WeightTriple::from_percentages(top, middle, bottom);
        prop_assert!((weights.sum() - 3.0).abs() < 1e-9);
        prop_assert!(weights.is_valid());
    }

    /// `with` replaces exactly one region.
    #[test]
    fn prop_with_touches_one_region(
        weights in triple_strategy(),
        index in 0usize..3,
        value in MIN_WEIGHT..10.0f64,
    ) {
        let region = Region::from_index(index).unwrap();
        let updated = weights.with(region, value);
        for other in Region::ALL {
            if other == region {
                prop_assert_eq!(updated.get(other), value);
            } else {
                prop_assert_eq!(updated.get(other), weights.get(other));
            }
        }
    }
}

#[test]
fn zero_percentages_give_default() {
    assert_eq!(WeightTriple::from_percentages(0, 0, 0), WeightTriple::DEFAULT);
}
