//! Configuration loading against real files
//!
//! Every failure path must end in the fixed default configuration.

use std::io::Write;

use adview_core::config::{ConfigLoader, DEFAULT_AD_ID, default_config};
use adview_core::models::{Content, WeightTriple};
use adview_core::store::{ContentStore, InMemoryContentStore};
use adview_core::{ConfigError, ContentKind};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

#[test]
fn bundled_config_describes_slider_video_slider() {
    let config = ConfigLoader::bundled().try_load().expect("bundled config is valid");
    assert_eq!(config.ad_id, "ad_001");
    assert_eq!(config.initial_weights(), WeightTriple::DEFAULT);

    let content = config.to_content().unwrap();
    assert_eq!(content.top.content.kind(), ContentKind::ImageSlider);
    assert_eq!(content.middle.content.kind(), ContentKind::Video);
    match &content.bottom.content {
        Content::ImageSlider {
            urls,
            transition_delay_ms,
        } => {
            assert_eq!(urls.len(), 5);
            assert_eq!(*transition_delay_ms, 1200);
        }
        other => panic!("expected bottom slider, got {other:?}"),
    }
}

#[test]
fn file_config_is_loaded() {
    let file = write_config(
        r#"{
            "adId": "from_file",
            "topSection": {"type": "video", "url": "https://example.com/a.mp4"},
            "middleSection": {"type": "EMPTY"},
            "bottomSection": {"type": "Image", "url": "https://example.com/b.jpg"},
            "initialWeights": {"top": 2.0, "middle": 0.5, "bottom": 1.5},
            "autoSave": false
        }"#,
    );
    let config = ConfigLoader::with_path(file.path()).load();
    assert_eq!(config.ad_id, "from_file");
    assert!(!config.auto_save);
    assert!(config.enable_user_resize);

    let store = InMemoryContentStore::from_config(&config).unwrap();
    assert_eq!(
        store.get_weights().unwrap(),
        WeightTriple::new(2.0, 0.5, 1.5)
    );
    assert_eq!(store.get_content().unwrap().middle.content, Content::Empty);
}

#[test]
fn missing_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::with_path(dir.path().join("absent.json"));
    assert!(matches!(loader.try_load(), Err(ConfigError::Read { .. })));
    assert_eq!(loader.load(), default_config());
}

#[test]
fn malformed_file_falls_back_to_default() {
    let file = write_config("{ \"adId\": ");
    let config = ConfigLoader::with_path(file.path()).load();
    assert_eq!(config.ad_id, DEFAULT_AD_ID);
}

#[test]
fn unknown_type_falls_back_to_default() {
    let file = write_config(
        r#"{
            "adId": "bad",
            "topSection": {"type": "GIF", "url": "x"},
            "middleSection": {"type": "EMPTY"},
            "bottomSection": {"type": "EMPTY"}
        }"#,
    );
    let loader = ConfigLoader::with_path(file.path());
    assert!(matches!(
        loader.try_load(),
        Err(ConfigError::UnknownContentType { .. })
    ));
    assert_eq!(loader.load().ad_id, DEFAULT_AD_ID);
}

#[test]
fn weights_below_floor_fall_back_to_default() {
    let json = r#"{
        "adId": "tiny",
        "topSection": {"type": "EMPTY"},
        "middleSection": {"type": "EMPTY"},
        "bottomSection": {"type": "EMPTY"},
        "initialWeights": {"top": 0.01, "middle": 1.0, "bottom": 1.0}
    }"#;
    let loader = ConfigLoader::from_json(json);
    assert!(matches!(loader.try_load(), Err(ConfigError::Validation(_))));
    assert_eq!(loader.load().ad_id, DEFAULT_AD_ID);
}

#[test]
fn default_config_is_image_video_image() {
    let content = default_config().to_content().unwrap();
    let kinds: Vec<_> = content.iter().map(|(_, d)| d.content.kind()).collect();
    assert_eq!(
        kinds,
        [ContentKind::Image, ContentKind::Video, ContentKind::Image]
    );
}
