//! Property-based tests for drag sessions
//!
//! A session recomputes from its start snapshot on every move, so the
//! outcome depends only on the total distance, never on how the gesture
//! was split into events.

use adview_core::models::{MIN_WEIGHT, WeightTriple};
use adview_core::resize::{Divider, DragSession, redistribute_adjacent};
use proptest::prelude::*;

fn triple_strategy() -> impl Strategy<Value = WeightTriple> {
    (MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64, MIN_WEIGHT..10.0f64)
        .prop_map(|(top, middle, bottom)| WeightTriple::new(top, middle, bottom))
}

fn divider_strategy() -> impl Strategy<Value = Divider> {
    prop_oneof![Just(Divider::TopMiddle), Just(Divider::MiddleBottom)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Splitting a gesture into many events gives the same result as one
    /// event carrying the whole distance.
    #[test]
    fn prop_session_depends_only_on_total_distance(
        start in triple_strategy(),
        divider in divider_strategy(),
        deltas in prop::collection::vec(-300.0..300.0f64, 1..40),
    ) {
        let mut session = DragSession::start(divider, start);
        let mut last = start;
        for delta in &deltas {
            last = session.update(*delta);
        }
        let total: f64 = deltas.iter().sum();
        let expected = redistribute_adjacent(session.accumulated(), start, divider);
        prop_assert_eq!(last, expected);
        prop_assert!((session.accumulated() - total).abs() < 1e-6);
        prop_assert_eq!(session.finish(), last);
    }

    /// Dragging out and back to the start restores the start weights.
    #[test]
    fn prop_round_trip_gesture_restores_weights(
        start in triple_strategy(),
        divider in divider_strategy(),
        distance in 1.0..2000.0f64,
    ) {
        let mut session = DragSession::start(divider, start);
        session.update(distance);
        let back = session.update(-distance);
        prop_assert_eq!(back, start);
    }
}
