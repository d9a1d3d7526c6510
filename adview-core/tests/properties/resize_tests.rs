//! Property-based tests for adjacent weight redistribution
//!
//! These tests check the laws the engine guarantees for any start weights
//! and any accumulated drag distance: identity at zero, isolation of the
//! third region, conservation of the pair sum, the weight floor and
//! monotonic growth of the upper region.

use adview_core::models::{MIN_WEIGHT, WeightTriple};
use adview_core::resize::{Divider, SENSITIVITY, redistribute_adjacent};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// Strategy for generating valid weights (each at least the floor)
fn weight_strategy() -> impl Strategy<Value = f64> {
    MIN_WEIGHT..10.0f64
}

/// Strategy for generating start weights
fn triple_strategy() -> impl Strategy<Value = WeightTriple> {
    (weight_strategy(), weight_strategy(), weight_strategy())
        .prop_map(|(top, middle, bottom)| WeightTriple::new(top, middle, bottom))
}

/// Strategy for generating dividers
fn divider_strategy() -> impl Strategy<Value = Divider> {
    prop_oneof![Just(Divider::TopMiddle), Just(Divider::MiddleBottom)]
}

/// Strategy for generating accumulated drag distances in dp
fn delta_strategy() -> impl Strategy<Value = f64> {
    -5000.0..5000.0f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A zero delta returns the start weights unchanged.
    #[test]
    fn prop_zero_delta_is_identity(
        start in triple_strategy(),
        divider in divider_strategy(),
    ) {
        prop_assert_eq!(redistribute_adjacent(0.0, start, divider), start);
    }

    /// The region not adjacent to the divider keeps its exact weight.
    #[test]
    fn prop_untouched_region_is_isolated(
        start in triple_strategy(),
        divider in divider_strategy(),
        delta in delta_strategy(),
    ) {
        let next = redistribute_adjacent(delta, start, divider);
        let region = divider.untouched();
        prop_assert_eq!(next.get(region), start.get(region));
    }

    /// The pair sum is preserved.
    #[test]
    fn prop_pair_sum_is_conserved(
        start in triple_strategy(),
        divider in divider_strategy(),
        delta in delta_strategy(),
    ) {
        let next = redistribute_adjacent(delta, start, divider);
        let (upper, lower) = divider.regions();
        let before = start.get(upper) + start.get(lower);
        let after = next.get(upper) + next.get(lower);
        prop_assert!(
            (before - after).abs() < EPS,
            "pair sum changed from {} to {}",
            before,
            after
        );
    }

    /// Neither adjacent weight drops below the floor.
    #[test]
    fn prop_weights_respect_floor(
        start in triple_strategy(),
        divider in divider_strategy(),
        delta in delta_strategy(),
    ) {
        let next = redistribute_adjacent(delta, start, divider);
        let (upper, lower) = divider.regions();
        prop_assert!(next.get(upper) >= MIN_WEIGHT - EPS);
        prop_assert!(next.get(lower) >= MIN_WEIGHT - EPS);
        prop_assert!(next.is_valid());
    }

    /// Growing a positive delta never shrinks the upper region.
    #[test]
    fn prop_upper_weight_is_monotonic(
        start in triple_strategy(),
        divider in divider_strategy(),
        small in 0.0..2500.0f64,
        extra in 0.0..2500.0f64,
    ) {
        let (upper, _) = divider.regions();
        let near = redistribute_adjacent(small, start, divider).get(upper);
        let far = redistribute_adjacent(small + extra, start, divider).get(upper);
        prop_assert!(far >= near - EPS, "{} < {}", far, near);
    }

    /// Within the clamp range the upper weight moves by delta / SENSITIVITY.
    #[test]
    fn prop_unclamped_move_is_linear(
        start in triple_strategy(),
        divider in divider_strategy(),
        fraction in -1.0..1.0f64,
    ) {
        let (upper, lower) = divider.regions();
        let a = start.get(upper);
        let total = a + start.get(lower);
        // Pick a delta that lands strictly inside [MIN_WEIGHT, total - MIN_WEIGHT]
        let target = MIN_WEIGHT + (total - 2.0 * MIN_WEIGHT) * (fraction + 1.0) / 2.0;
        let delta = (target - a) * SENSITIVITY;
        prop_assume!(delta != 0.0);

        let next = redistribute_adjacent(delta, start, divider);
        prop_assert!((next.get(upper) - target).abs() < 1e-6);
    }

    /// Past the boundary further dragging has no effect.
    #[test]
    fn prop_clamped_weight_is_constant(
        start in triple_strategy(),
        divider in divider_strategy(),
        extra in 0.0..10_000.0f64,
    ) {
        let (upper, lower) = divider.regions();
        let total = start.get(upper) + start.get(lower);
        let saturating = total * SENSITIVITY;
        let at_edge = redistribute_adjacent(saturating, start, divider);
        let beyond = redistribute_adjacent(saturating + extra, start, divider);
        prop_assert!((at_edge.get(upper) - (total - MIN_WEIGHT)).abs() < EPS);
        prop_assert_eq!(at_edge, beyond);
    }
}

/// The degenerate pair splits its total evenly instead of panicking.
#[test]
fn degenerate_pair_splits_evenly() {
    let start = WeightTriple::new(0.08, 0.1, 1.0);
    for delta in [-800.0, -1.0, 1.0, 800.0] {
        let next = redistribute_adjacent(delta, start, Divider::TopMiddle);
        assert!((next.top - 0.09).abs() < EPS);
        assert!((next.middle - 0.09).abs() < EPS);
        assert_eq!(next.bottom, 1.0);
    }
}
