use super::*;

#[test]
fn story_file_overrides_a_subset() {
    let file = SceneFile::from_json(
        r#"{
            "kind": "story",
            "config": { "smoother": { "smoothing": 0.3 } },
            "viewport": { "width": 390, "height": 844 }
        }"#,
    )
    .unwrap();
    let SceneFile::Story { config, .. } = &file else {
        panic!("expected story, got {file:?}");
    };
    assert_eq!(config.smoother.smoothing, 0.3);
    assert_eq!(config.header_layer, "header");
    assert_eq!(file.viewport(), Some(Viewport::new(390.0, 844.0)));
}

#[test]
fn missing_config_uses_defaults() {
    let file = SceneFile::from_json(r#"{ "kind": "topography" }"#).unwrap();
    assert_eq!(
        file,
        SceneFile::Topography {
            config: TopographyConfig::default(),
            viewport: None,
        }
    );
}

#[test]
fn invalid_values_are_rejected() {
    let err = SceneFile::from_json(r#"{ "kind": "particles", "config": { "spacing": 0 } }"#)
        .unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)), "{err}");
}

#[test]
fn unknown_kind_is_a_serde_error() {
    let err = SceneFile::from_json(r#"{ "kind": "carousel" }"#).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)), "{err}");
}

#[test]
fn missing_file_is_an_asset_error() {
    let err = SceneFile::load_json(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, MotionError::Asset(_)));
}
