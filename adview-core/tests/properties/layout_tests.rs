//! Property-based tests for region layout

use adview_core::models::{MIN_WEIGHT, WeightTriple};
use adview_core::render::{DIVIDER_THICKNESS, layout_areas, layout_heights};
use proptest::prelude::*;

fn triple_strategy() -> impl Strategy<Value = WeightTriple> {
    (MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64)
        .prop_map(|(top, middle, bottom)| WeightTriple::new(top, middle, bottom))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Region heights fill the space left after both dividers.
    #[test]
    fn prop_heights_fill_available_space(
        weights in triple_strategy(),
        available in 2.0 * DIVIDER_THICKNESS..4000.0f64,
    ) {
        let heights = layout_heights(weights, available);
        let total: f64 = heights.iter().sum();
        prop_assert!((total - (available - 2.0 * DIVIDER_THICKNESS)).abs() < 1e-6);
        prop_assert!(heights.iter().all(|h| *h >= 0.0));
    }

    /// Height ratios match weight ratios.
    #[test]
    fn prop_heights_are_proportional(
        weights in triple_strategy(),
        available in 200.0..4000.0f64,
    ) {
        let heights = layout_heights(weights, available);
        let ratio = heights[0] / heights[1];
        prop_assert!((ratio - weights.top / weights.middle).abs() < 1e-6);
    }

    /// Areas are stacked top to bottom without overlap.
    #[test]
    fn prop_areas_do_not_overlap(
        weights in triple_strategy(),
        height in 100.0..4000.0f64,
    ) {
        let areas = layout_areas(weights, 360.0, height);
        for pair in areas.windows(2) {
            let gap = pair[1].y - (pair[0].y + pair[0].height);
            prop_assert!((gap - DIVIDER_THICKNESS).abs() < 1e-6);
        }
    }
}
