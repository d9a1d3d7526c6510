//! End-to-end drag scenarios
//!
//! A controller is built over a store seeded from configuration; drag events
//! go in, published state and persisted weights are checked.

use std::sync::Arc;

use adview_core::config::{AdConfig, ConfigLoader};
use adview_core::models::{Content, Region, WeightTriple};
use adview_core::render::{RenderArea, Renderer, render_screen};
use adview_core::resize::{Divider, ResizeError, pointer_delta_to_dp};
use adview_core::screen::{ScreenController, ScreenOptions};
use adview_core::store::{ContentStore, InMemoryContentStore};
use adview_core::{AdViewError, ContentDescriptor};

const EPS: f64 = 1e-9;

fn setup(config: &AdConfig) -> (Arc<InMemoryContentStore>, ScreenController) {
    let store = Arc::new(InMemoryContentStore::from_config(config).expect("valid config"));
    let controller = ScreenController::new(store.clone(), ScreenOptions::from(config));
    controller.load().expect("load from memory store");
    (store, controller)
}

fn bundled() -> AdConfig {
    ConfigLoader::bundled().try_load().expect("bundled config is valid")
}

#[test]
fn drag_down_to_the_floor_and_persist() {
    let (store, mut controller) = setup(&bundled());
    assert_eq!(controller.weights(), WeightTriple::DEFAULT);

    controller.drag_start(Divider::TopMiddle).unwrap();
    let provisional = controller.drag_move(500.0).unwrap();
    assert!((provisional.top - 1.9).abs() < EPS);
    assert!((provisional.middle - 0.1).abs() < EPS);
    assert_eq!(provisional.bottom, 1.0);

    // Nothing is stored until the gesture ends
    assert_eq!(store.get_weights().unwrap(), WeightTriple::DEFAULT);

    let saved = controller.drag_end().unwrap();
    assert_eq!(saved, provisional);
    assert_eq!(store.get_weights().unwrap(), saved);
    assert_eq!(store.get_content().unwrap().weights(), saved);
}

#[test]
fn drag_up_to_the_floor() {
    let (_, mut controller) = setup(&bundled());
    controller.drag_start(Divider::TopMiddle).unwrap();
    let weights = controller.drag_move(-500.0).unwrap();
    assert!((weights.top - 0.1).abs() < EPS);
    assert!((weights.middle - 1.9).abs() < EPS);
    assert_eq!(weights.bottom, 1.0);
}

#[test]
fn empty_gesture_keeps_weights_exactly() {
    let (store, mut controller) = setup(&bundled());
    controller.drag_start(Divider::MiddleBottom).unwrap();
    let weights = controller.drag_move(0.0).unwrap();
    assert_eq!(weights, WeightTriple::DEFAULT);
    controller.drag_end().unwrap();
    assert_eq!(store.get_weights().unwrap(), WeightTriple::DEFAULT);
}

#[test]
fn second_drag_starts_from_persisted_weights() {
    let (store, mut controller) = setup(&bundled());

    controller.drag_start(Divider::TopMiddle).unwrap();
    controller.drag_move(250.0).unwrap();
    controller.drag_end().unwrap();

    controller.drag_start(Divider::MiddleBottom).unwrap();
    let weights = controller.drag_move(-100.0).unwrap();
    controller.drag_end().unwrap();

    assert!((weights.top - 1.5).abs() < EPS);
    assert!((weights.middle - 0.3).abs() < EPS);
    assert!((weights.bottom - 1.2).abs() < EPS);
    assert_eq!(store.get_weights().unwrap(), weights);
}

#[test]
fn pointer_events_are_converted_and_accumulated() {
    let (_, mut controller) = setup(&bundled());
    controller.drag_start(Divider::TopMiddle).unwrap();

    // 2.0 density: 125 px -> 62.5 dp -> 100 dp after the multiplier
    for _ in 0..5 {
        let dp = pointer_delta_to_dp(125.0, 2.0).unwrap();
        controller.drag_move(dp).unwrap();
    }
    assert!(pointer_delta_to_dp(125.0, 0.0).is_none());

    let weights = controller.drag_end().unwrap();
    assert!((weights.top - 1.9).abs() < EPS);
}

#[test]
fn resize_disabled_by_configuration() {
    let mut config = bundled();
    config.enable_user_resize = false;
    let (store, mut controller) = setup(&config);

    assert_eq!(
        controller.drag_start(Divider::TopMiddle),
        Err(ResizeError::ResizeDisabled)
    );
    assert!(matches!(
        controller.drag_end(),
        Err(AdViewError::Resize(ResizeError::NoActiveSession))
    ));
    assert_eq!(store.get_weights().unwrap(), WeightTriple::DEFAULT);
}

#[test]
fn auto_save_off_requires_explicit_save() {
    let mut config = bundled();
    config.auto_save = false;
    let (store, mut controller) = setup(&config);

    controller.drag_start(Divider::TopMiddle).unwrap();
    let weights = controller.drag_move(500.0).unwrap();
    controller.drag_end().unwrap();
    assert_eq!(store.get_weights().unwrap(), WeightTriple::DEFAULT);

    controller.save_weights().unwrap();
    assert_eq!(store.get_weights().unwrap(), weights);
}

#[test]
fn section_update_keeps_weights() {
    let (store, mut controller) = setup(&bundled());
    controller.drag_start(Divider::TopMiddle).unwrap();
    let weights = controller.drag_move(100.0).unwrap();
    controller.drag_end().unwrap();

    controller
        .update_section_content(Region::Top, Content::Empty)
        .unwrap();

    let state = controller.state();
    assert_eq!(state.top.content, Content::Empty);
    assert_eq!(state.weights, weights);
    assert_eq!(store.get_content().unwrap().top.content, Content::Empty);
}

#[derive(Default)]
struct CountingRenderer {
    frames: Vec<(Region, String, f64)>,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, descriptor: &ContentDescriptor, area: RenderArea) {
        self.frames
            .push((area.region, descriptor.content.kind().to_string(), area.height));
    }
}

#[test]
fn rendering_follows_published_weights() {
    let (_, mut controller) = setup(&bundled());
    controller.drag_start(Divider::TopMiddle).unwrap();
    controller.drag_move(500.0).unwrap();

    let mut renderer = CountingRenderer::default();
    render_screen(&mut renderer, &controller.state().content(), 360.0, 340.0);

    let kinds: Vec<_> = renderer.frames.iter().map(|(_, k, _)| k.as_str()).collect();
    assert_eq!(kinds, ["IMAGE_SLIDER", "VIDEO", "IMAGE_SLIDER"]);
    // 300 dp usable, weights 1.9 / 0.1 / 1.0
    assert!((renderer.frames[0].2 - 190.0).abs() < 1e-6);
    assert!((renderer.frames[1].2 - 10.0).abs() < 1e-6);
    assert!((renderer.frames[2].2 - 100.0).abs() < 1e-6);
}
