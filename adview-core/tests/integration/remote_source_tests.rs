//! Simulated remote source wired into the screen controller

use std::sync::Arc;
use std::time::Duration;

use adview_core::models::WeightTriple;
use adview_core::presets::find_weight_preset;
use adview_core::screen::{ScreenController, ScreenOptions};
use adview_core::store::{ContentStore, InMemoryContentStore, RemoteAdSource, SimulatedRemoteSource};
use adview_core::{AdContentBuilder, RemoteError};

fn controller() -> (Arc<InMemoryContentStore>, ScreenController) {
    let store = Arc::new(InMemoryContentStore::new(
        AdContentBuilder::new().build(),
        WeightTriple::DEFAULT,
    ));
    let controller = ScreenController::new(store.clone(), ScreenOptions::default());
    controller.load().unwrap();
    (store, controller)
}

#[tokio::test]
async fn fetched_campaign_becomes_screen_content() {
    let remote: Arc<dyn RemoteAdSource> =
        Arc::new(SimulatedRemoteSource::with_latency(Duration::ZERO));
    let (store, controller) = controller();

    let content = remote.fetch_content("summer").await.unwrap();
    controller.apply_preset(&content).unwrap();

    assert_eq!(controller.state().content(), content);
    assert_eq!(store.get_weights().unwrap(), content.weights());
}

#[tokio::test]
async fn malformed_campaign_is_rejected() {
    let remote = SimulatedRemoteSource::with_latency(Duration::ZERO);
    assert!(matches!(
        remote.fetch_content("a/b").await,
        Err(RemoteError::InvalidCampaign(_))
    ));
}

#[tokio::test]
async fn every_remote_preset_applies_cleanly() {
    let remote = SimulatedRemoteSource::with_latency(Duration::ZERO);
    let (_, controller) = controller();
    for preset in remote.fetch_presets().await.unwrap() {
        controller.apply_preset(&preset).unwrap();
        assert_eq!(controller.weights(), preset.weights());
    }
}

#[tokio::test]
async fn weight_preset_is_uploaded_after_apply() {
    let remote = SimulatedRemoteSource::with_latency(Duration::from_millis(1));
    let (_, controller) = controller();
    let preset = find_weight_preset("video-focus").unwrap();
    controller.set_weights(preset.weights).unwrap();

    let accepted = remote
        .upload_preference("user_1", "ad_001", controller.weights())
        .await
        .unwrap();
    assert!(accepted);
}
